//! HTTP server settings
//!
//! The bind address and the browser origins allowed to call the API. Both
//! are parsed when the config is loaded, so a typo in an origin fails
//! startup instead of silently locking the form out.

use std::net::{IpAddr, SocketAddr};

use axum::http::HeaderValue;
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum HttpConfigError {
    #[error("http.host '{0}' is not an IP address")]
    InvalidHost(String),

    #[error("http.port must be > 0")]
    ZeroPort,

    #[error("http.cors_origins entry '{0}' is not an origin (scheme://host[:port])")]
    InvalidOrigin(String),
}

/// Which origins may call the API from a browser
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CorsPolicy {
    AnyOrigin,
    Origins(Vec<HeaderValue>),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct HttpServerConfig {
    /// IP address to bind
    #[serde(default = "default_host")]
    pub host: String,

    #[serde(default = "default_port")]
    pub port: u16,

    /// Allowed browser origins; an empty list allows any origin
    #[serde(default = "default_cors_origins")]
    pub cors_origins: Vec<String>,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

/// Port the screening form has always been served on
fn default_port() -> u16 {
    8501
}

fn default_cors_origins() -> Vec<String> {
    vec![
        "http://localhost:8501".to_string(),
        "http://127.0.0.1:8501".to_string(),
    ]
}

impl Default for HttpServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            cors_origins: default_cors_origins(),
        }
    }
}

impl HttpServerConfig {
    pub fn with_port(port: u16) -> Self {
        Self {
            port,
            ..Default::default()
        }
    }

    /// Checks the address and every origin.
    pub fn validate(&self) -> Result<(), HttpConfigError> {
        self.bind_addr()?;
        self.cors_policy()?;
        Ok(())
    }

    /// Socket address the listener binds
    pub fn bind_addr(&self) -> Result<SocketAddr, HttpConfigError> {
        let ip: IpAddr = self
            .host
            .trim()
            .parse()
            .map_err(|_| HttpConfigError::InvalidHost(self.host.clone()))?;
        if self.port == 0 {
            return Err(HttpConfigError::ZeroPort);
        }
        Ok(SocketAddr::new(ip, self.port))
    }

    pub fn cors_policy(&self) -> Result<CorsPolicy, HttpConfigError> {
        if self.cors_origins.is_empty() {
            return Ok(CorsPolicy::AnyOrigin);
        }
        self.cors_origins
            .iter()
            .map(|origin| parse_origin(origin))
            .collect::<Result<Vec<_>, _>>()
            .map(CorsPolicy::Origins)
    }
}

/// Browsers send `Origin` as `scheme://host[:port]` with no path, so any
/// other shape could never match.
fn parse_origin(origin: &str) -> Result<HeaderValue, HttpConfigError> {
    let invalid = || HttpConfigError::InvalidOrigin(origin.to_string());

    let authority = origin
        .strip_prefix("http://")
        .or_else(|| origin.strip_prefix("https://"))
        .ok_or_else(invalid)?;
    if authority.is_empty()
        || authority.contains('/')
        || authority.chars().any(char::is_whitespace)
    {
        return Err(invalid());
    }

    HeaderValue::from_str(origin).map_err(|_| invalid())
}
