//! Rendering-side pieces fed by the core: report documents, exports and
//! the per-session history.

pub mod document;
pub mod export;
pub mod history;

pub use document::ReportDocument;
pub use export::{ExportFormat, export_report, report_file_name, write_csv, write_json};
pub use history::{HistoryEntry, HistoryStore};
