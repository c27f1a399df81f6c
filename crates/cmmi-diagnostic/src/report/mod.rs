mod document;
mod export;
mod text;

pub use document::{now_timestamp, AssessmentReport, DEFAULT_PROJECT_NAME};
pub use export::{ExportError, ExportedReport, ReportWriter, JSON_REPORT_FILE, TEXT_REPORT_FILE};
pub use text::render_text;
