use crate::model::scores::{ScoreBreakdown, ThroughputAssessment};
use crate::report::{format_f64_2, format_mbps};

pub fn render_report_text(b: &ScoreBreakdown) -> String {
    let mut out = String::new();

    out.push_str("Measurement Confidence Report\n");
    out.push_str("=============================\n\n");

    out.push_str("1. Environment\n");
    out.push_str(&format!("Wi-Fi handicap: -{}\n", format_f64_2(b.environment.wifi)));
    out.push_str(&format!(
        "Approval handicap: -{}\n\n",
        format_f64_2(b.environment.approval)
    ));

    out.push_str("2. Primary throughput\n");
    push_throughput(&mut out, &b.primary);
    out.push('\n');

    out.push_str("3. Secondary throughput\n");
    out.push_str(&format!(
        "Samples: {} valid, {} failed, {} skipped\n",
        b.secondary.valid, b.secondary.failed, b.secondary.skipped
    ));
    out.push_str(&format!(
        "Failure penalty: -{}\nSkip penalty: -{}\n",
        format_f64_2(b.secondary.failure_penalty),
        format_f64_2(b.secondary.skip_penalty)
    ));
    push_throughput(&mut out, &b.secondary.throughput);
    out.push('\n');

    out.push_str("4. Latency\n");
    out.push_str(&format!(
        "Probes: {} counted, {} failed, {} gateway excluded\n",
        b.latency.counted, b.latency.failed, b.latency.gateway_excluded
    ));
    out.push_str(&format!(
        "Failure penalty: -{}\nLatency penalty: -{}\nJitter penalty: -{}\nLoss penalty: -{}\n\n",
        format_f64_2(b.latency.failure_penalty),
        format_f64_2(b.latency.latency_penalty),
        format_f64_2(b.latency.jitter_penalty),
        format_f64_2(b.latency.loss_penalty)
    ));

    out.push_str("5. Result\n");
    out.push_str(&format!("Unbounded score: {}\n", format_f64_2(b.raw)));
    out.push_str(&format!(
        "Confidence: {}/100 ({})\n",
        b.score,
        b.score.label()
    ));

    out
}

fn push_throughput(out: &mut String, t: &ThroughputAssessment) {
    out.push_str(&format!(
        "Download: {} (penalty -{})\n",
        format_mbps(t.download_mbps),
        format_f64_2(t.download_penalty)
    ));
    out.push_str(&format!(
        "Upload: {} (penalty -{})\n",
        format_mbps(t.upload_mbps),
        format_f64_2(t.upload_penalty)
    ));
}

#[cfg(test)]
#[path = "../../tests/src_inline/report/text.rs"]
mod tests;
