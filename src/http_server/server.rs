//! # HTTP Server
//!
//! Serves the screening API over the shared formulation service.

use std::io;
use std::net::SocketAddr;
use std::sync::Arc;

use axum::Router;
use tokio::net::TcpListener;
use tower_http::cors::{AllowOrigin, Any, CorsLayer};

use super::config::{CorsPolicy, HttpConfigError, HttpServerConfig};
use super::routes::{health_routes, screening_routes};
use crate::observability::{log_event_with_fields, Event};
use crate::service::FormulationService;

/// HTTP server for the screening form
pub struct HttpServer {
    addr: SocketAddr,
    router: Router,
}

impl HttpServer {
    /// Builds the router for `config`.
    ///
    /// # Errors
    ///
    /// Returns `HttpConfigError` if the address or an origin is invalid.
    pub fn with_config(
        config: HttpServerConfig,
        service: Arc<FormulationService>,
    ) -> Result<Self, HttpConfigError> {
        let addr = config.bind_addr()?;
        let cors = cors_layer(config.cors_policy()?);

        let router = Router::new()
            .merge(health_routes(service.clone()))
            .nest("/api", screening_routes(service))
            .layer(cors);

        Ok(Self { addr, router })
    }

    pub fn addr(&self) -> SocketAddr {
        self.addr
    }

    /// Get the router (for testing)
    pub fn router(self) -> Router {
        self.router
    }

    /// Serve until the process is stopped
    pub async fn start(self) -> Result<(), io::Error> {
        let listener = TcpListener::bind(self.addr).await?;
        let bound = listener.local_addr()?.to_string();
        log_event_with_fields(Event::Serving, &[("addr", bound.as_str())]);

        axum::serve(listener, self.router).await?;

        Ok(())
    }
}

fn cors_layer(policy: CorsPolicy) -> CorsLayer {
    let allow_origin = match policy {
        CorsPolicy::AnyOrigin => AllowOrigin::from(Any),
        CorsPolicy::Origins(origins) => AllowOrigin::list(origins),
    };

    CorsLayer::new()
        .allow_origin(allow_origin)
        .allow_methods(Any)
        .allow_headers(Any)
}
