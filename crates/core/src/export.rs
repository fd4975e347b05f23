use std::path::{Path, PathBuf};

use tokio::fs;

use crate::{error::Result, types::CallAnalysis};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportKind {
    /// Indented JSON of the whole analysis.
    Structured,
    /// The transcript field, verbatim.
    Transcript,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportFile {
    pub filename: &'static str,
    pub mime_type: &'static str,
    pub bytes: Vec<u8>,
}

/// Encode an analysis for download
pub fn render(analysis: &CallAnalysis, kind: ExportKind) -> Result<ExportFile> {
    match kind {
        ExportKind::Structured => Ok(ExportFile {
            filename: "sales-analysis.json",
            mime_type: "application/json",
            bytes: serde_json::to_vec_pretty(analysis)?,
        }),
        ExportKind::Transcript => Ok(ExportFile {
            filename: "sales-analysis.txt",
            mime_type: "text/plain",
            bytes: analysis.transcript.clone().into_bytes(),
        }),
    }
}

/// Write an export file under `dir`, returning the full path
pub async fn save(file: &ExportFile, dir: &Path) -> Result<PathBuf> {
    let path = dir.join(file.filename);
    fs::write(&path, &file.bytes).await?;
    Ok(path)
}
