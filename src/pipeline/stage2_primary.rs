use tracing::debug;

use crate::model::samples::PrimaryThroughputSample;
use crate::model::scores::ThroughputAssessment;
use crate::model::thresholds::{ConfidenceWeights, StatisticsThresholds};
use crate::pipeline::ScoreError;
use crate::pipeline::aggregate::{ThreadWeightedMean, capped_shortfall};

#[derive(Debug, Clone, Copy)]
pub struct Stage2Inputs<'a> {
    pub samples: &'a [PrimaryThroughputSample],
    pub thresholds: &'a StatisticsThresholds,
    pub weights: &'a ConfidenceWeights,
}

pub fn run_stage2(inputs: &Stage2Inputs<'_>) -> Result<ThroughputAssessment, ScoreError> {
    if inputs.samples.is_empty() {
        return Err(ScoreError::EmptyPrimarySamples);
    }

    let mean: ThreadWeightedMean = inputs.samples.iter().collect();
    let (download_mbps, upload_mbps) = mean.mean_mbps().ok_or(ScoreError::ZeroThreadCount {
        samples: inputs.samples.len(),
    })?;

    let download_penalty = capped_shortfall(
        download_mbps,
        inputs.thresholds.download_mbps_red,
        inputs.weights.ookla_download_cap,
    );
    let upload_penalty = capped_shortfall(
        upload_mbps,
        inputs.thresholds.upload_mbps_red,
        inputs.weights.ookla_upload_cap,
    );

    debug!(
        samples = inputs.samples.len(),
        threads = mean.threads(),
        download_mbps,
        upload_mbps,
        download_penalty,
        upload_penalty,
        "primary throughput assessed"
    );

    Ok(ThroughputAssessment {
        download_mbps: Some(download_mbps),
        upload_mbps: Some(upload_mbps),
        download_penalty,
        upload_penalty,
    })
}

#[cfg(test)]
#[path = "../../tests/src_inline/pipeline/stage2_primary.rs"]
mod tests;
