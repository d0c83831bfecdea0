//! Formulation report rendering
//!
//! Produces a one-page PDF listing every input and the final verdict. The
//! document is self-contained (standard Type1 fonts, uncompressed text) so
//! its text can be read back from the raw bytes.

mod pdf;
mod snapshot;

use chrono::{DateTime, Utc};
use thiserror::Error;

use crate::prediction::Verdict;

pub use pdf::PdfPage;
pub use snapshot::{format_number, FormulationSnapshot, ReportEntry};

/// File name offered for download
pub const REPORT_FILE_NAME: &str = "Nano_Formulation_Report.pdf";

/// Declared content type of the report
pub const REPORT_CONTENT_TYPE: &str = "application/pdf";

/// Report heading
pub const REPORT_TITLE: &str = "Nano-Commercialize AI: Formulation Report";

/// Failure to produce report bytes
#[derive(Debug, Error)]
pub enum ReportError {
    #[error("Failed to write report: {0}")]
    Write(#[from] std::io::Error),
}

/// Renders the report with the current time as its timestamp.
pub fn render(snapshot: &FormulationSnapshot, verdict: &Verdict) -> Result<Vec<u8>, ReportError> {
    render_at(snapshot, verdict, Utc::now())
}

/// Renders the report with an explicit generation timestamp.
pub fn render_at(
    snapshot: &FormulationSnapshot,
    verdict: &Verdict,
    generated_at: DateTime<Utc>,
) -> Result<Vec<u8>, ReportError> {
    let mut page = PdfPage::new();

    page.heading(REPORT_TITLE);
    page.blank();
    page.line(format!("Final Prediction: {}", verdict.label()));
    page.line(format!("Stability Confidence: {}", verdict.confidence_display()));
    page.line(format!(
        "Generated: {}",
        generated_at.format("%Y-%m-%d %H:%M:%S UTC")
    ));
    page.blank();
    page.line("Formulation Details:");
    for entry in snapshot.entries() {
        page.line(format!("- {}: {}", entry.name, entry.value));
    }

    page.to_bytes()
}
