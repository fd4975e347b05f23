use std::time::Duration;

use async_trait::async_trait;

use crate::{
    error::Result,
    types::{CallAnalysis, Sentiment},
};

use super::AnalysisBackend;

/// Stand-in for the analysis service: waits a fixed delay, then resolves
/// every request with the same canned metrics.
pub struct MockBackend {
    delay: Duration,
}

impl MockBackend {
    pub const DEFAULT_DELAY: Duration = Duration::from_millis(2500);

    pub fn new(delay: Duration) -> Self {
        Self { delay }
    }

    /// The analysis every mock request resolves to.
    pub fn canned_analysis() -> CallAnalysis {
        CallAnalysis {
            talk_time_ratio: 65,
            questions_count: 12,
            longest_monologue_secs: 94,
            sentiment: Sentiment::Positive,
            insights: vec![
                "Talk time is above the 45-55% range top reps land in; leave more room for the customer to speak.".to_string(),
                "Twelve questions is solid, but most landed in the first ten minutes. Keep probing through the pricing discussion.".to_string(),
                "The longest monologue ran past 90 seconds during the feature walkthrough. Break it up with check-in questions.".to_string(),
                "Strong close: the customer asked about onboarding timelines unprompted.".to_string(),
            ],
            transcript: "Rep: Hi Jordan, thanks for making the time today. Before I dive in, what prompted you to take this call?\n\
                Customer: Honestly, our current tooling isn't keeping up. Reporting takes the team most of a day every week.\n\
                Rep: That's exactly where we help. Let me walk you through how the pipeline works end to end.\n\
                Rep: You connect your sources once, the sync runs continuously, and the dashboards update themselves. No more exports, no more spreadsheets, and the whole team sees the same numbers.\n\
                Customer: How long does the initial setup usually take?\n\
                Rep: Most teams are live within a week. What does your current stack look like?\n\
                Customer: Mostly Salesforce plus a warehouse we query by hand.\n\
                Rep: Then you'd be on the faster end of that range.\n\
                Customer: That sounds promising. What would onboarding look like if we started next month?\n\
                Rep: I'll send over a plan with milestones after this call and we can pick a start date together.".to_string(),
        }
    }
}

impl Default for MockBackend {
    fn default() -> Self {
        Self::new(Self::DEFAULT_DELAY)
    }
}

#[async_trait]
impl AnalysisBackend for MockBackend {
    async fn analyze(&self, _url: &str) -> Result<CallAnalysis> {
        tokio::time::sleep(self.delay).await;
        Ok(Self::canned_analysis())
    }
}
