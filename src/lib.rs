//! nanoform - stability screening for drug-loaded nanoemulsions
//!
//! Encodes a formulation's categorical selections, assembles the feature row
//! a pre-trained classifier expects, and reports a stability verdict, over
//! HTTP or the command line.

pub mod assets;
pub mod cli;
pub mod config;
pub mod encoding;
pub mod error;
pub mod features;
pub mod http_server;
pub mod observability;
pub mod prediction;
pub mod report;
pub mod service;

pub use error::{NanoError, NanoResult};
