use tracing::debug;

use crate::model::samples::{SecondaryOutcome, SecondaryThroughputSample};
use crate::model::scores::{SecondaryAssessment, ThroughputAssessment};
use crate::model::thresholds::{ConfidenceWeights, StatisticsThresholds};
use crate::pipeline::aggregate::{PayloadWeightedMean, capped_shortfall};

pub const FAILED_SAMPLE_PENALTY: f64 = 10.0;
pub const SKIPPED_SAMPLE_PENALTY: f64 = 5.0;

#[derive(Debug, Clone, Copy)]
pub struct Stage3Inputs<'a> {
    pub samples: &'a [SecondaryThroughputSample],
    pub thresholds: &'a StatisticsThresholds,
    pub weights: &'a ConfidenceWeights,
}

pub fn run_stage3(inputs: &Stage3Inputs<'_>) -> SecondaryAssessment {
    let mut mean = PayloadWeightedMean::default();
    let mut out = SecondaryAssessment::default();

    for sample in inputs.samples {
        match sample.outcome() {
            SecondaryOutcome::Failed => {
                out.failed += 1;
                out.failure_penalty += FAILED_SAMPLE_PENALTY;
            }
            SecondaryOutcome::Skipped => {
                out.skipped += 1;
                out.skip_penalty += SKIPPED_SAMPLE_PENALTY;
            }
            SecondaryOutcome::Valid => {
                out.valid += 1;
                mean.push(sample);
            }
        }
    }

    // A direction with no weighted payload has no average to compare; the flat
    // per-sample penalties above already account for it.
    let download_mbps = mean.download_mbps();
    let upload_mbps = mean.upload_mbps();
    if download_mbps.is_none() || upload_mbps.is_none() {
        debug!(
            failed = out.failed,
            skipped = out.skipped,
            "secondary threshold check skipped for a direction without valid samples"
        );
    }

    out.throughput = ThroughputAssessment {
        download_mbps,
        upload_mbps,
        download_penalty: download_mbps
            .map(|mbps| {
                capped_shortfall(
                    mbps,
                    inputs.thresholds.download_mbps_red,
                    inputs.weights.cloudflare_download_cap,
                )
            })
            .unwrap_or(0.0),
        upload_penalty: upload_mbps
            .map(|mbps| {
                capped_shortfall(
                    mbps,
                    inputs.thresholds.upload_mbps_red,
                    inputs.weights.cloudflare_upload_cap,
                )
            })
            .unwrap_or(0.0),
    };

    debug!(
        valid = out.valid,
        failed = out.failed,
        skipped = out.skipped,
        penalty = out.total(),
        "secondary throughput assessed"
    );

    out
}

#[cfg(test)]
#[path = "../../tests/src_inline/pipeline/stage3_secondary.rs"]
mod tests;
