//! CLI command implementations
//!
//! Every command boots the same way: config load, then the one-time asset
//! load. A failed asset load does not stop `serve`; the server comes up with
//! prediction disabled and reports why.

use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::sync::Arc;

use serde::Serialize;

use crate::assets::AssetLoader;
use crate::config::Config;
use crate::http_server::HttpServer;
use crate::observability::{log_event, log_event_with_fields, Event};
use crate::service::{FormulationRequest, FormulationService};

use super::args::{AssetArgs, Command};
use super::errors::{CliError, CliResult};
use super::io::{read_request, write_error, write_response};

/// Main CLI entry point
///
/// Parses arguments and dispatches to the appropriate command.
/// This is the only function that main.rs should call.
pub fn run() -> CliResult<()> {
    let cli = super::args::Cli::parse_args();
    run_command(cli.command)
}

/// Run the appropriate command based on CLI args
pub fn run_command(cmd: Command) -> CliResult<()> {
    match cmd {
        Command::Serve { assets, port } => serve(&assets, port),
        Command::Predict { assets } => predict(&assets),
        Command::Report { assets, out } => report(&assets, &out),
        Command::Options { assets } => options(&assets),
    }
}

/// Loads config and assets.
///
/// Returns an error only for configuration problems; asset failures are
/// carried inside the service.
pub fn boot(args: &AssetArgs) -> CliResult<(Config, FormulationService)> {
    log_event(Event::BootStart);

    let config = Config::load_or_default(args.config.as_deref())?;
    let assets_dir = config.resolve_assets_dir(args.assets.as_deref())?;

    let source = args
        .config
        .as_ref()
        .map(|p| p.display().to_string())
        .unwrap_or_else(|| "defaults".to_string());
    let dir = assets_dir.display().to_string();
    log_event_with_fields(
        Event::ConfigLoaded,
        &[("assets_dir", dir.as_str()), ("source", source.as_str())],
    );

    let loader = AssetLoader::new(assets_dir);
    let service = FormulationService::from_loader(&loader);

    Ok((config, service))
}

/// Serve the screening API until the process is stopped
pub fn serve(args: &AssetArgs, port: Option<u16>) -> CliResult<()> {
    let (config, service) = boot(args)?;

    let mut http_config = config.http;
    if let Some(port) = port {
        http_config.port = port;
    }

    let server = HttpServer::with_config(http_config, Arc::new(service))
        .map_err(|e| CliError::config_error(e.to_string()))?;

    let rt = tokio::runtime::Runtime::new()
        .map_err(|e| CliError::serve_failed(format!("Failed to create tokio runtime: {}", e)))?;

    rt.block_on(async {
        server
            .start()
            .await
            .map_err(|e| CliError::serve_failed(format!("HTTP server failed: {}", e)))
    })?;

    log_event(Event::ShutdownComplete);
    Ok(())
}

/// Predict one formulation read from stdin
pub fn predict(args: &AssetArgs) -> CliResult<()> {
    let (_config, service) = boot(args)?;
    let request: FormulationRequest = read_request(io::stdin().lock())?;
    respond_predict(&service, &request, &mut io::stdout().lock())
}

/// Write the PDF report for one formulation read from stdin
pub fn report(args: &AssetArgs, out: &Path) -> CliResult<()> {
    let (_config, service) = boot(args)?;
    let request: FormulationRequest = read_request(io::stdin().lock())?;
    respond_report(&service, &request, out, &mut io::stdout().lock())
}

/// Print the form options
pub fn options(args: &AssetArgs) -> CliResult<()> {
    let (_config, service) = boot(args)?;
    respond_options(&service, &mut io::stdout().lock())
}

/// Summary printed after a report is written
#[derive(Debug, Serialize)]
struct ReportWritten {
    path: PathBuf,
    bytes: usize,
    content_type: &'static str,
}

fn respond_predict(
    service: &FormulationService,
    request: &FormulationRequest,
    out: &mut impl Write,
) -> CliResult<()> {
    match service.predict(request) {
        Ok(outcome) => write_response(out, &outcome),
        Err(e) => write_error(out, e.code(), &e.to_string()),
    }
}

fn respond_report(
    service: &FormulationService,
    request: &FormulationRequest,
    path: &Path,
    out: &mut impl Write,
) -> CliResult<()> {
    let report = match service.report(request) {
        Ok(report) => report,
        Err(e) => return write_error(out, e.code(), &e.to_string()),
    };

    fs::write(path, &report.bytes).map_err(|e| {
        CliError::io_error(format!("Failed to write report {}: {}", path.display(), e))
    })?;

    write_response(
        out,
        &ReportWritten {
            path: path.to_path_buf(),
            bytes: report.bytes.len(),
            content_type: report.content_type,
        },
    )
}

fn respond_options(service: &FormulationService, out: &mut impl Write) -> CliResult<()> {
    match service.form_options() {
        Ok(options) => write_response(out, &options),
        Err(e) => write_error(out, e.code(), &e.to_string()),
    }
}
