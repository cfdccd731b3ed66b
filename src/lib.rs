//! Confidence scoring for network speed-test and latency measurements.
//!
//! [`pipeline::score`] folds primary and secondary throughput samples, latency
//! probes and environment flags into a single integer in `0..=100`.

pub mod config;
pub mod input;
pub mod logging;
pub mod model;
pub mod pipeline;
pub mod report;

pub use config::ScoringConfig;
pub use input::MeasurementBundle;
pub use model::samples::{LatencyProbe, PrimaryThroughputSample, SecondaryThroughputSample};
pub use model::scores::{ConfidenceScore, ScoreBreakdown};
pub use model::thresholds::{ConfidenceWeights, StatisticsThresholds};
pub use pipeline::{ScoreError, ScoreInputs, run_scoring, score};
