//! Observable events
//!
//! Events are explicit and typed.

use std::fmt;

/// Observable events in nanoform
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    // Lifecycle
    /// Process startup begins
    BootStart,
    /// Configuration loaded
    ConfigLoaded,
    /// HTTP server accepting requests
    Serving,
    /// Process is exiting normally
    ShutdownComplete,

    // Assets
    /// Asset bundle loaded and checked
    AssetsLoaded,
    /// Asset bundle failed to load; prediction disabled
    AssetsLoadFailed,

    // Prediction requests
    /// Prediction request received
    PredictionReceived,
    /// Verdict produced
    PredictionComplete,
    /// Request rejected with a typed error
    PredictionRejected,

    // Reports
    /// Report document rendered
    ReportRendered,
}

impl Event {
    /// Returns the string representation of the event
    pub fn as_str(&self) -> &'static str {
        match self {
            Event::BootStart => "NANOFORM_STARTUP_BEGIN",
            Event::ConfigLoaded => "CONFIG_LOADED",
            Event::Serving => "NANOFORM_SERVING",
            Event::ShutdownComplete => "SHUTDOWN_COMPLETE",

            Event::AssetsLoaded => "ASSETS_LOADED",
            Event::AssetsLoadFailed => "ASSETS_LOAD_FAILED",

            Event::PredictionReceived => "PREDICTION_BEGIN",
            Event::PredictionComplete => "PREDICTION_COMPLETE",
            Event::PredictionRejected => "PREDICTION_REJECTED",

            Event::ReportRendered => "REPORT_RENDERED",
        }
    }

    /// Returns true if this event reports a failure
    pub fn is_failure(&self) -> bool {
        matches!(self, Event::AssetsLoadFailed | Event::PredictionRejected)
    }
}

impl fmt::Display for Event {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
