pub mod mock;
pub mod rest;

pub use mock::*;
pub use rest::*;

use async_trait::async_trait;

use crate::{error::Result, types::CallAnalysis};

/// Analysis service seam. One call, one complete response; no streaming or
/// partial updates.
#[async_trait]
pub trait AnalysisBackend: Send + Sync {
    async fn analyze(&self, url: &str) -> Result<CallAnalysis>;
}
