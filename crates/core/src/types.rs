use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sentiment {
    Positive,
    Neutral,
    Negative,
}

impl Sentiment {
    pub fn label(&self) -> &'static str {
        match self {
            Sentiment::Positive => "Positive",
            Sentiment::Neutral => "Neutral",
            Sentiment::Negative => "Negative",
        }
    }
}

/// Complete set of metrics for one analyzed call. Built as a whole by the
/// backend and never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CallAnalysis {
    /// Share of speaking time attributed to the sales rep, 0-100.
    pub talk_time_ratio: u8,
    pub questions_count: u32,
    pub longest_monologue_secs: u32,
    pub sentiment: Sentiment,
    /// Coaching recommendations, display order matters.
    pub insights: Vec<String>,
    pub transcript: String,
}
