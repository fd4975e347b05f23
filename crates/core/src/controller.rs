use std::sync::Arc;

use uuid::Uuid;

use crate::{
    backend::AnalysisBackend,
    error::{CallscopeError, Result},
    export::{self, ExportFile, ExportKind},
    types::CallAnalysis,
    url::is_supported_video_url,
};

/// What the rendering layer observes. One slot: either no analysis, or one
/// complete analysis, or the reason the last cycle failed.
#[derive(Debug, Clone, PartialEq)]
pub enum AnalysisState {
    Idle,
    Loading,
    Success(CallAnalysis),
    Failed(String),
}

/// Handle for one accepted submission. An outcome is only applied while its
/// ticket is still the current cycle; anything older is discarded.
#[derive(Debug)]
pub struct AnalysisTicket {
    id: Uuid,
    url: String,
}

impl AnalysisTicket {
    pub fn url(&self) -> &str {
        &self.url
    }
}

/// Owns the lifecycle of one analysis request at a time: validate, hand the
/// URL to the injected backend, apply the resolution, expose the state.
pub struct AnalysisController {
    backend: Arc<dyn AnalysisBackend>,
    state: AnalysisState,
    in_flight: Option<Uuid>,
}

impl AnalysisController {
    pub fn new(backend: Arc<dyn AnalysisBackend>) -> Self {
        Self {
            backend,
            state: AnalysisState::Idle,
            in_flight: None,
        }
    }

    pub fn state(&self) -> &AnalysisState {
        &self.state
    }

    pub fn analysis(&self) -> Option<&CallAnalysis> {
        match &self.state {
            AnalysisState::Success(analysis) => Some(analysis),
            _ => None,
        }
    }

    /// Start a new request cycle. The previous result or error is cleared
    /// before validation runs, and any prior in-flight cycle is superseded
    /// whether or not the new URL is valid.
    pub fn submit(&mut self, url: &str) -> Option<AnalysisTicket> {
        self.state = AnalysisState::Idle;
        self.in_flight = None;

        if !is_supported_video_url(url) {
            let err = CallscopeError::UnsupportedUrl {
                url: url.to_string(),
            };
            self.state = AnalysisState::Failed(err.to_string());
            return None;
        }

        let ticket = AnalysisTicket {
            id: Uuid::new_v4(),
            url: url.to_string(),
        };
        self.in_flight = Some(ticket.id);
        self.state = AnalysisState::Loading;
        Some(ticket)
    }

    /// Apply a backend resolution. Returns false when the ticket was
    /// superseded by a newer submission; the outcome is dropped and the
    /// visible state stays untouched.
    pub fn complete(&mut self, ticket: &AnalysisTicket, outcome: Result<CallAnalysis>) -> bool {
        if self.in_flight != Some(ticket.id) {
            return false;
        }

        self.in_flight = None;
        self.state = match outcome {
            Ok(analysis) => AnalysisState::Success(analysis),
            Err(e) => AnalysisState::Failed(e.to_string()),
        };
        true
    }

    /// Drive one full cycle: submit, await the backend, apply the outcome.
    /// `Loading` is observable before the first await point; an invalid URL
    /// never reaches the backend.
    pub async fn analyze(&mut self, url: &str) {
        let Some(ticket) = self.submit(url) else {
            return;
        };

        let backend = Arc::clone(&self.backend);
        let outcome = backend.analyze(ticket.url()).await;
        self.complete(&ticket, outcome);
    }

    /// Export the current analysis. Without a completed analysis there is
    /// nothing to produce and no error to raise.
    pub fn export(&self, kind: ExportKind) -> Result<Option<ExportFile>> {
        match self.analysis() {
            Some(analysis) => Ok(Some(export::render(analysis, kind)?)),
            None => Ok(None),
        }
    }
}
