use serde::Serialize;

use crate::model::scores::ScoreBreakdown;

#[derive(Serialize)]
struct Summary<'a> {
    tool: &'static str,
    version: &'static str,
    score: u8,
    label: &'static str,
    breakdown: &'a ScoreBreakdown,
}

pub fn render_summary_json(breakdown: &ScoreBreakdown) -> Result<String, serde_json::Error> {
    let summary = Summary {
        tool: env!("CARGO_PKG_NAME"),
        version: env!("CARGO_PKG_VERSION"),
        score: breakdown.score.value(),
        label: breakdown.score.label(),
        breakdown,
    };
    let mut out = serde_json::to_string_pretty(&summary)?;
    out.push('\n');
    Ok(out)
}
