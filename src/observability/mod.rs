//! Observability for nanoform
//!
//! Structured JSON line logging of typed lifecycle events.
//!
//! # Principles
//!
//! 1. Observability is read-only
//! 2. No side effects on the prediction pipeline
//! 3. No async or background threads
//! 4. Deterministic output
//!
//! # Usage
//!
//! ```ignore
//! use nanoform::observability::{log_event_with_fields, Event};
//!
//! log_event_with_fields(Event::AssetsLoaded, &[("asset_dir", "/opt/nanoform/assets")]);
//! ```

mod events;
mod logger;

pub use events::Event;
pub use logger::{Logger, Severity};

/// Log a lifecycle event
pub fn log_event(event: Event) {
    log_event_with_fields(event, &[]);
}

/// Log a lifecycle event with fields
pub fn log_event_with_fields(event: Event, fields: &[(&str, &str)]) {
    let severity = if event.is_failure() {
        Severity::Error
    } else {
        Severity::Info
    };
    log_event_at(event, severity, fields);
}

/// Log a lifecycle event at a caller-chosen severity
pub fn log_event_at(event: Event, severity: Severity, fields: &[(&str, &str)]) {
    Logger::log(severity, event.as_str(), fields);
}
