pub mod backend;
pub mod controller;
pub mod error;
pub mod export;
pub mod format;
pub mod types;
pub mod url;

pub use backend::{AnalysisBackend, MockBackend, RestBackend, RestBackendConfig};
pub use controller::{AnalysisController, AnalysisState, AnalysisTicket};
pub use error::{CallscopeError, Result};
pub use export::{ExportFile, ExportKind, render, save};
pub use format::{format_analysis_readable, format_timestamp};
pub use types::{CallAnalysis, Sentiment};
pub use url::is_supported_video_url;
