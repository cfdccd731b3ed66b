use crate::model::scores::EnvironmentPenalty;
use crate::model::thresholds::ConfidenceWeights;

#[derive(Debug, Clone, Copy)]
pub struct Stage1Inputs<'a> {
    pub wifi_in_use: bool,
    /// Wireless ISP, VPN or similar approval requirement.
    pub approval_required: bool,
    pub weights: &'a ConfidenceWeights,
}

pub fn run_stage1(inputs: &Stage1Inputs<'_>) -> EnvironmentPenalty {
    let wifi = if inputs.wifi_in_use {
        inputs.weights.wifi_handicap
    } else {
        0.0
    };
    let approval = if inputs.approval_required {
        inputs.weights.approval_handicap
    } else {
        0.0
    };
    EnvironmentPenalty { wifi, approval }
}

#[cfg(test)]
#[path = "../../tests/src_inline/pipeline/stage1_environment.rs"]
mod tests;
