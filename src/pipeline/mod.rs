//! Confidence scoring. Four independent stages fold penalties into one
//! accumulator that starts at [`stage5_finalize::BASELINE`]; the last stage
//! clamps and rounds it.

pub mod aggregate;
pub mod stage1_environment;
pub mod stage2_primary;
pub mod stage3_secondary;
pub mod stage4_latency;
pub mod stage5_finalize;

use tracing::debug;

use crate::model::samples::{LatencyProbe, PrimaryThroughputSample, SecondaryThroughputSample};
use crate::model::scores::{ConfidenceScore, ScoreBreakdown};
use crate::model::thresholds::{ConfidenceWeights, StatisticsThresholds, ThresholdError};

use stage1_environment::{Stage1Inputs, run_stage1};
use stage2_primary::{Stage2Inputs, run_stage2};
use stage3_secondary::{Stage3Inputs, run_stage3};
use stage4_latency::{Stage4Inputs, run_stage4};
use stage5_finalize::{BASELINE, run_stage5};

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ScoreError {
    #[error("at least one primary throughput sample is required")]
    EmptyPrimarySamples,

    #[error("primary throughput samples report zero threads in total ({samples} samples)")]
    ZeroThreadCount { samples: usize },

    #[error("invalid scoring configuration: {0}")]
    InvalidConfig(#[from] ThresholdError),
}

#[derive(Debug, Clone, Copy)]
pub struct ScoreInputs<'a> {
    pub primary: &'a [PrimaryThroughputSample],
    pub secondary: &'a [SecondaryThroughputSample],
    pub latency: &'a [LatencyProbe],
    pub wifi_in_use: bool,
    pub approval_required: bool,
    pub thresholds: &'a StatisticsThresholds,
    pub weights: &'a ConfidenceWeights,
}

pub fn run_scoring(inputs: &ScoreInputs<'_>) -> Result<ScoreBreakdown, ScoreError> {
    inputs.thresholds.validate()?;
    inputs.weights.validate()?;

    let environment = run_stage1(&Stage1Inputs {
        wifi_in_use: inputs.wifi_in_use,
        approval_required: inputs.approval_required,
        weights: inputs.weights,
    });
    let primary = run_stage2(&Stage2Inputs {
        samples: inputs.primary,
        thresholds: inputs.thresholds,
        weights: inputs.weights,
    })?;
    let secondary = run_stage3(&Stage3Inputs {
        samples: inputs.secondary,
        thresholds: inputs.thresholds,
        weights: inputs.weights,
    });
    let latency = run_stage4(&Stage4Inputs {
        probes: inputs.latency,
        thresholds: inputs.thresholds,
        weights: inputs.weights,
    });

    let raw = BASELINE
        - environment.total()
        - primary.total()
        - secondary.total()
        - latency.total();
    let score = run_stage5(raw);
    debug!(raw, score = score.value(), "confidence score computed");

    Ok(ScoreBreakdown {
        environment,
        primary,
        secondary,
        latency,
        raw,
        score,
    })
}

pub fn score(
    primary: &[PrimaryThroughputSample],
    secondary: &[SecondaryThroughputSample],
    latency: &[LatencyProbe],
    wifi_in_use: bool,
    approval_required: bool,
    thresholds: &StatisticsThresholds,
    weights: &ConfidenceWeights,
) -> Result<ConfidenceScore, ScoreError> {
    let breakdown = run_scoring(&ScoreInputs {
        primary,
        secondary,
        latency,
        wifi_in_use,
        approval_required,
        thresholds,
        weights,
    })?;
    Ok(breakdown.score)
}

#[cfg(test)]
#[path = "../../tests/src_inline/pipeline/mod.rs"]
mod tests;
