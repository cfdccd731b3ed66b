use serde::{Deserialize, Serialize};

/// One run against the primary (thread-weighted) speed-test provider.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PrimaryThroughputSample {
    pub download_bps: f64,
    pub upload_bps: f64,
    pub thread_count: u32,
}

/// One run against the secondary (payload-weighted) speed-test provider.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SecondaryThroughputSample {
    pub download_bps: f64,
    pub upload_bps: f64,
    pub download_size: f64,
    pub upload_size: f64,
    pub test_count: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SecondaryOutcome {
    /// Either direction reported zero throughput.
    Failed,
    /// The provider ran no tests for this payload size.
    Skipped,
    Valid,
}

impl SecondaryThroughputSample {
    pub fn outcome(&self) -> SecondaryOutcome {
        if self.download_bps == 0.0 || self.upload_bps == 0.0 {
            SecondaryOutcome::Failed
        } else if self.test_count == 0 {
            SecondaryOutcome::Skipped
        } else {
            SecondaryOutcome::Valid
        }
    }

    pub fn download_weight(&self) -> f64 {
        self.download_size * self.test_count as f64
    }

    pub fn upload_weight(&self) -> f64 {
        self.upload_size * self.test_count as f64
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LatencyProbe {
    /// Milliseconds.
    pub average_latency: f64,
    /// Milliseconds.
    pub jitter: f64,
    pub packets_sent: u32,
    pub packets_lost: u32,
    #[serde(default)]
    pub is_gateway: bool,
    #[serde(default)]
    pub test_failed: bool,
}

impl LatencyProbe {
    /// Packet loss in percent. A probe that sent nothing reports no loss.
    pub fn loss_percent(&self) -> f64 {
        if self.packets_sent == 0 {
            return 0.0;
        }
        (self.packets_lost as f64 / self.packets_sent as f64) * 100.0
    }
}

#[cfg(test)]
#[path = "../../tests/src_inline/model/samples.rs"]
mod tests;
