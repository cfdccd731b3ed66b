pub mod json;
pub mod text;

use crate::model::scores::ScoreBreakdown;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReportFormat {
    Text,
    Json,
    /// The bare integer score.
    Score,
}

pub fn render(
    breakdown: &ScoreBreakdown,
    format: ReportFormat,
) -> Result<String, serde_json::Error> {
    match format {
        ReportFormat::Text => Ok(text::render_report_text(breakdown)),
        ReportFormat::Json => json::render_summary_json(breakdown),
        ReportFormat::Score => Ok(format!("{}\n", breakdown.score)),
    }
}

pub fn format_f64_2(v: f64) -> String {
    format!("{:.2}", v)
}

pub fn format_mbps(v: Option<f64>) -> String {
    match v {
        Some(mbps) => format!("{} Mbps", format_f64_2(mbps)),
        None => "n/a".to_string(),
    }
}
