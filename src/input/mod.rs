use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::model::samples::{LatencyProbe, PrimaryThroughputSample, SecondaryThroughputSample};

#[derive(Debug, thiserror::Error)]
pub enum InputError {
    #[error("IO error reading '{path}': {source}")]
    Io {
        path: String,
        source: std::io::Error,
    },

    #[error("parse error: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("invalid input: {collection}[{index}].{field}: {reason}")]
    InvalidMeasurement {
        collection: &'static str,
        index: usize,
        field: &'static str,
        reason: String,
    },
}

/// Everything collected during one diagnostics run that feeds the scorer.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct MeasurementBundle {
    #[serde(default)]
    pub wifi_in_use: bool,
    #[serde(default)]
    pub approval_required: bool,
    pub primary: Vec<PrimaryThroughputSample>,
    #[serde(default)]
    pub secondary: Vec<SecondaryThroughputSample>,
    #[serde(default)]
    pub latency: Vec<LatencyProbe>,
}

impl MeasurementBundle {
    pub fn load(path: &Path) -> Result<Self, InputError> {
        let content = std::fs::read_to_string(path).map_err(|source| InputError::Io {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_json_str(&content)
    }

    /// Parses and validates.
    pub fn from_json_str(content: &str) -> Result<Self, InputError> {
        let bundle: MeasurementBundle = serde_json::from_str(content)?;
        bundle.validate()?;
        Ok(bundle)
    }

    pub fn validate(&self) -> Result<(), InputError> {
        for (index, s) in self.primary.iter().enumerate() {
            let check = Check::new("primary", index);
            check.non_negative("download_bps", s.download_bps)?;
            check.non_negative("upload_bps", s.upload_bps)?;
            if s.thread_count == 0 {
                return Err(check.fail("thread_count", "must be at least 1".to_string()));
            }
        }

        for (index, s) in self.secondary.iter().enumerate() {
            let check = Check::new("secondary", index);
            check.non_negative("download_bps", s.download_bps)?;
            check.non_negative("upload_bps", s.upload_bps)?;
            check.positive("download_size", s.download_size)?;
            check.positive("upload_size", s.upload_size)?;
        }

        for (index, p) in self.latency.iter().enumerate() {
            let check = Check::new("latency", index);
            check.non_negative("average_latency", p.average_latency)?;
            check.non_negative("jitter", p.jitter)?;
            if p.packets_lost > p.packets_sent {
                return Err(check.fail(
                    "packets_lost",
                    format!("{} exceeds packets_sent {}", p.packets_lost, p.packets_sent),
                ));
            }
        }

        Ok(())
    }
}

struct Check {
    collection: &'static str,
    index: usize,
}

impl Check {
    fn new(collection: &'static str, index: usize) -> Self {
        Self { collection, index }
    }

    fn fail(&self, field: &'static str, reason: String) -> InputError {
        InputError::InvalidMeasurement {
            collection: self.collection,
            index: self.index,
            field,
            reason,
        }
    }

    fn non_negative(&self, field: &'static str, value: f64) -> Result<(), InputError> {
        if !value.is_finite() || value < 0.0 {
            return Err(self.fail(field, format!("must be a non-negative number, got {value}")));
        }
        Ok(())
    }

    fn positive(&self, field: &'static str, value: f64) -> Result<(), InputError> {
        if !value.is_finite() || value <= 0.0 {
            return Err(self.fail(field, format!("must be a positive number, got {value}")));
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "../../tests/src_inline/input/tests.rs"]
mod tests;
