pub mod samples;
pub mod scores;
pub mod thresholds;
