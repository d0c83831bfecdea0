//! CLI argument definitions using clap
//!
//! Commands:
//! - nanoform serve [--config <path>] [--assets <dir>] [--port <port>]
//! - nanoform predict [--config <path>] [--assets <dir>]
//! - nanoform report [--config <path>] [--assets <dir>] [--out <path>]
//! - nanoform options [--config <path>] [--assets <dir>]

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

use crate::report::REPORT_FILE_NAME;

/// nanoform - stability screening for nanoemulsion formulations
#[derive(Parser, Debug)]
#[command(name = "nanoform")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

/// Where configuration and model artifacts come from
#[derive(Args, Debug, Clone, Default)]
pub struct AssetArgs {
    /// Path to configuration file
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Asset directory, overriding the config file
    #[arg(long)]
    pub assets: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Serve the screening form over HTTP
    Serve {
        #[command(flatten)]
        assets: AssetArgs,

        /// Port to listen on, overriding the config file
        #[arg(long)]
        port: Option<u16>,
    },

    /// Read one formulation from stdin and print the verdict
    Predict {
        #[command(flatten)]
        assets: AssetArgs,
    },

    /// Read one formulation from stdin and write the PDF report
    Report {
        #[command(flatten)]
        assets: AssetArgs,

        /// Output file
        #[arg(long, default_value = REPORT_FILE_NAME)]
        out: PathBuf,
    },

    /// Print the form's category choices and numeric fields
    Options {
        #[command(flatten)]
        assets: AssetArgs,
    },
}

impl Cli {
    /// Parse command line arguments
    pub fn parse_args() -> Self {
        Cli::parse()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_serve_flags() {
        let cli = Cli::try_parse_from([
            "nanoform", "serve", "--assets", "/srv/assets", "--port", "9000",
        ])
        .unwrap();

        match cli.command {
            Command::Serve { assets, port } => {
                assert_eq!(assets.assets, Some(PathBuf::from("/srv/assets")));
                assert!(assets.config.is_none());
                assert_eq!(port, Some(9000));
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_report_default_output() {
        let cli = Cli::try_parse_from(["nanoform", "report"]).unwrap();
        match cli.command {
            Command::Report { out, .. } => assert_eq!(out, PathBuf::from(REPORT_FILE_NAME)),
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_unknown_command_rejected() {
        assert!(Cli::try_parse_from(["nanoform", "train"]).is_err());
    }
}
