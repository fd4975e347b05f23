use std::time::Duration;

use async_trait::async_trait;

use crate::{
    error::{CallscopeError, Result},
    types::CallAnalysis,
};

use super::AnalysisBackend;

pub struct RestBackendConfig {
    pub api_url: String,
    pub env_var: &'static str,
    /// Request deadline; expiry surfaces as a failed analysis.
    pub timeout: Duration,
}

impl Default for RestBackendConfig {
    fn default() -> Self {
        Self {
            api_url: "https://api.callscope.dev/v1/analyze".to_string(),
            env_var: "CALLSCOPE_API_KEY",
            timeout: Duration::from_secs(120),
        }
    }
}

/// Real analysis service client. Posts the validated URL and decodes the
/// complete metrics payload from the response body.
pub struct RestBackend {
    config: RestBackendConfig,
    client: reqwest::Client,
}

impl RestBackend {
    pub fn new(config: RestBackendConfig) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(config.timeout)
            .build()?;
        Ok(Self { config, client })
    }

    /// Validate that the API key is set for this backend
    pub fn validate_api_key(&self) -> Result<String> {
        std::env::var(self.config.env_var).map_err(|_| CallscopeError::MissingApiKey {
            env_var: self.config.env_var.to_string(),
        })
    }
}

#[async_trait]
impl AnalysisBackend for RestBackend {
    async fn analyze(&self, url: &str) -> Result<CallAnalysis> {
        let api_key = self.validate_api_key()?;

        let response = self
            .client
            .post(&self.config.api_url)
            .header("Content-Type", "application/json")
            .header("Authorization", format!("Bearer {}", api_key))
            .json(&serde_json::json!({ "video_url": url }))
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(CallscopeError::AnalysisFailed {
                reason: format!("analysis service returned {}", response.status()),
            });
        }

        Ok(response.json::<CallAnalysis>().await?)
    }
}
