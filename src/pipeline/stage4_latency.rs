use tracing::debug;

use crate::model::samples::LatencyProbe;
use crate::model::scores::LatencyAssessment;
use crate::model::thresholds::{ConfidenceWeights, StatisticsThresholds};
use crate::pipeline::aggregate::scaled_overage;

pub const FAILED_PROBE_PENALTY: f64 = 1.0;

#[derive(Debug, Clone, Copy)]
pub struct Stage4Inputs<'a> {
    pub probes: &'a [LatencyProbe],
    pub thresholds: &'a StatisticsThresholds,
    pub weights: &'a ConfidenceWeights,
}

pub fn run_stage4(inputs: &Stage4Inputs<'_>) -> LatencyAssessment {
    let thresholds = inputs.thresholds;
    let weights = inputs.weights;
    let mut out = LatencyAssessment::default();

    for (idx, probe) in inputs.probes.iter().enumerate() {
        if probe.is_gateway && !weights.include_gateway {
            out.gateway_excluded += 1;
            continue;
        }
        if probe.test_failed {
            out.failed += 1;
            out.failure_penalty += FAILED_PROBE_PENALTY;
            continue;
        }

        out.counted += 1;
        out.latency_penalty += scaled_overage(
            probe.average_latency,
            thresholds.latency_red,
            weights.latency_multiplier,
        );
        out.jitter_penalty +=
            scaled_overage(probe.jitter, thresholds.jitter_red, weights.jitter_multiplier);

        if probe.packets_sent == 0 {
            debug!(probe = idx, "probe sent no packets, loss treated as 0%");
        }
        out.loss_penalty += scaled_overage(
            probe.loss_percent(),
            thresholds.packet_loss_red,
            weights.loss_multiplier,
        );
    }

    debug!(
        counted = out.counted,
        gateway_excluded = out.gateway_excluded,
        failed = out.failed,
        penalty = out.total(),
        "latency probes assessed"
    );

    out
}

#[cfg(test)]
#[path = "../../tests/src_inline/pipeline/stage4_latency.rs"]
mod tests;
