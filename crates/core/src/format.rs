use crate::types::CallAnalysis;

/// Format seconds as MM:SS timestamp
pub fn format_timestamp(seconds: u32) -> String {
    format!("{:02}:{:02}", seconds / 60, seconds % 60)
}

/// Format a call analysis as human-readable markdown
pub fn format_analysis_readable(analysis: &CallAnalysis) -> String {
    let mut output = String::new();

    output.push_str("# Sales Call Analysis\n\n");

    output.push_str(&format!(
        "**Talk/Listen:** {}% / {}% | **Questions:** {} | **Longest monologue:** {} | **Sentiment:** {}\n\n",
        analysis.talk_time_ratio,
        100u8.saturating_sub(analysis.talk_time_ratio),
        analysis.questions_count,
        format_timestamp(analysis.longest_monologue_secs),
        analysis.sentiment.label(),
    ));

    output.push_str("## Insights\n\n");
    for (i, insight) in analysis.insights.iter().enumerate() {
        output.push_str(&format!("{}. {}\n", i + 1, insight));
    }
    output.push('\n');

    output.push_str("## Transcript\n\n");
    output.push_str(&analysis.transcript);
    output.push('\n');

    output
}
