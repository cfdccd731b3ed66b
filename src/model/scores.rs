use std::fmt;

use serde::Serialize;

/// Final confidence, always within `0..=100`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct ConfidenceScore(u8);

impl ConfidenceScore {
    pub const MAX: ConfidenceScore = ConfidenceScore(100);

    pub fn new(value: u8) -> Option<Self> {
        (value <= 100).then_some(Self(value))
    }

    pub fn value(self) -> u8 {
        self.0
    }

    pub fn label(self) -> &'static str {
        match self.0 {
            90..=100 => "Excellent",
            75..=89 => "Good",
            50..=74 => "Fair",
            25..=49 => "Poor",
            _ => "Critical",
        }
    }
}

impl fmt::Display for ConfidenceScore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<ConfidenceScore> for u8 {
    fn from(score: ConfidenceScore) -> Self {
        score.0
    }
}

// Penalties below are magnitudes; the accumulator subtracts them.

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct EnvironmentPenalty {
    pub wifi: f64,
    pub approval: f64,
}

impl EnvironmentPenalty {
    pub fn total(&self) -> f64 {
        self.wifi + self.approval
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct ThroughputAssessment {
    /// `None` when no sample contributed to the average.
    pub download_mbps: Option<f64>,
    pub upload_mbps: Option<f64>,
    pub download_penalty: f64,
    pub upload_penalty: f64,
}

impl ThroughputAssessment {
    pub fn total(&self) -> f64 {
        self.download_penalty + self.upload_penalty
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct SecondaryAssessment {
    pub throughput: ThroughputAssessment,
    pub valid: usize,
    pub failed: usize,
    pub skipped: usize,
    pub failure_penalty: f64,
    pub skip_penalty: f64,
}

impl SecondaryAssessment {
    pub fn total(&self) -> f64 {
        self.failure_penalty + self.skip_penalty + self.throughput.total()
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct LatencyAssessment {
    pub counted: usize,
    pub gateway_excluded: usize,
    pub failed: usize,
    pub failure_penalty: f64,
    pub latency_penalty: f64,
    pub jitter_penalty: f64,
    pub loss_penalty: f64,
}

impl LatencyAssessment {
    pub fn total(&self) -> f64 {
        self.failure_penalty + self.latency_penalty + self.jitter_penalty + self.loss_penalty
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ScoreBreakdown {
    pub environment: EnvironmentPenalty,
    pub primary: ThroughputAssessment,
    pub secondary: SecondaryAssessment,
    pub latency: LatencyAssessment,
    /// Accumulated score before clamping, may be negative.
    pub raw: f64,
    pub score: ConfidenceScore,
}

#[cfg(test)]
#[path = "../../tests/src_inline/model/scores.rs"]
mod tests;
