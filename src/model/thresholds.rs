use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ThresholdError {
    #[error("{key} must be a finite number, got {value}")]
    NotFinite { key: &'static str, value: f64 },

    #[error("{key} must not be negative, got {value}")]
    Negative { key: &'static str, value: f64 },

    #[error("{key} must be a percentage between 0 and 100, got {value}")]
    OutOfRange { key: &'static str, value: f64 },
}

/// Red lines a measurement is compared against. Throughput below, or latency,
/// jitter and loss above, these values is penalized.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case", try_from = "RawStatisticsThresholds")]
pub struct StatisticsThresholds {
    pub download_mbps_red: f64,
    pub upload_mbps_red: f64,
    /// Milliseconds.
    pub latency_red: f64,
    /// Milliseconds.
    pub jitter_red: f64,
    /// Percent, 0-100.
    pub packet_loss_red: f64,
}

impl Default for StatisticsThresholds {
    fn default() -> Self {
        Self {
            download_mbps_red: default_download_mbps_red(),
            upload_mbps_red: default_upload_mbps_red(),
            latency_red: default_latency_red(),
            jitter_red: default_jitter_red(),
            packet_loss_red: default_packet_loss_red(),
        }
    }
}

impl StatisticsThresholds {
    pub fn validate(&self) -> Result<(), ThresholdError> {
        non_negative("download-mbps-red", self.download_mbps_red)?;
        non_negative("upload-mbps-red", self.upload_mbps_red)?;
        non_negative("latency-red", self.latency_red)?;
        non_negative("jitter-red", self.jitter_red)?;
        non_negative("packet-loss-red", self.packet_loss_red)?;
        if self.packet_loss_red > 100.0 {
            return Err(ThresholdError::OutOfRange {
                key: "packet-loss-red",
                value: self.packet_loss_red,
            });
        }
        Ok(())
    }
}

/// Penalty parameters. Handicaps are flat, caps bound a single throughput
/// penalty, multipliers scale latency/jitter/loss overage into points.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case", try_from = "RawConfidenceWeights")]
pub struct ConfidenceWeights {
    pub wifi_handicap: f64,
    pub approval_handicap: f64,
    pub ookla_download_cap: f64,
    pub ookla_upload_cap: f64,
    pub cloudflare_download_cap: f64,
    pub cloudflare_upload_cap: f64,
    pub latency_multiplier: f64,
    pub jitter_multiplier: f64,
    pub loss_multiplier: f64,
    pub include_gateway: bool,
}

impl Default for ConfidenceWeights {
    fn default() -> Self {
        Self {
            wifi_handicap: default_wifi_handicap(),
            approval_handicap: default_approval_handicap(),
            ookla_download_cap: default_cap(),
            ookla_upload_cap: default_cap(),
            cloudflare_download_cap: default_cap(),
            cloudflare_upload_cap: default_cap(),
            latency_multiplier: default_latency_multiplier(),
            jitter_multiplier: default_jitter_multiplier(),
            loss_multiplier: default_loss_multiplier(),
            include_gateway: false,
        }
    }
}

impl ConfidenceWeights {
    pub fn validate(&self) -> Result<(), ThresholdError> {
        non_negative("wifi-handicap", self.wifi_handicap)?;
        non_negative("approval-handicap", self.approval_handicap)?;
        non_negative("ookla-download-cap", self.ookla_download_cap)?;
        non_negative("ookla-upload-cap", self.ookla_upload_cap)?;
        non_negative("cloudflare-download-cap", self.cloudflare_download_cap)?;
        non_negative("cloudflare-upload-cap", self.cloudflare_upload_cap)?;
        non_negative("latency-multiplier", self.latency_multiplier)?;
        non_negative("jitter-multiplier", self.jitter_multiplier)?;
        non_negative("loss-multiplier", self.loss_multiplier)?;
        Ok(())
    }
}

fn non_negative(key: &'static str, value: f64) -> Result<(), ThresholdError> {
    if !value.is_finite() {
        return Err(ThresholdError::NotFinite { key, value });
    }
    if value < 0.0 {
        return Err(ThresholdError::Negative { key, value });
    }
    Ok(())
}

// Deserialization goes through these so every loaded value is validated.
#[derive(Deserialize)]
#[serde(rename_all = "kebab-case", deny_unknown_fields)]
struct RawStatisticsThresholds {
    #[serde(default = "default_download_mbps_red")]
    download_mbps_red: f64,
    #[serde(default = "default_upload_mbps_red")]
    upload_mbps_red: f64,
    #[serde(default = "default_latency_red")]
    latency_red: f64,
    #[serde(default = "default_jitter_red")]
    jitter_red: f64,
    #[serde(default = "default_packet_loss_red")]
    packet_loss_red: f64,
}

impl TryFrom<RawStatisticsThresholds> for StatisticsThresholds {
    type Error = ThresholdError;

    fn try_from(raw: RawStatisticsThresholds) -> Result<Self, Self::Error> {
        let thresholds = Self {
            download_mbps_red: raw.download_mbps_red,
            upload_mbps_red: raw.upload_mbps_red,
            latency_red: raw.latency_red,
            jitter_red: raw.jitter_red,
            packet_loss_red: raw.packet_loss_red,
        };
        thresholds.validate()?;
        Ok(thresholds)
    }
}

#[derive(Deserialize)]
#[serde(rename_all = "kebab-case", deny_unknown_fields)]
struct RawConfidenceWeights {
    #[serde(default = "default_wifi_handicap")]
    wifi_handicap: f64,
    #[serde(default = "default_approval_handicap")]
    approval_handicap: f64,
    #[serde(default = "default_cap")]
    ookla_download_cap: f64,
    #[serde(default = "default_cap")]
    ookla_upload_cap: f64,
    #[serde(default = "default_cap")]
    cloudflare_download_cap: f64,
    #[serde(default = "default_cap")]
    cloudflare_upload_cap: f64,
    #[serde(default = "default_latency_multiplier")]
    latency_multiplier: f64,
    #[serde(default = "default_jitter_multiplier")]
    jitter_multiplier: f64,
    #[serde(default = "default_loss_multiplier")]
    loss_multiplier: f64,
    #[serde(default)]
    include_gateway: bool,
}

impl TryFrom<RawConfidenceWeights> for ConfidenceWeights {
    type Error = ThresholdError;

    fn try_from(raw: RawConfidenceWeights) -> Result<Self, Self::Error> {
        let weights = Self {
            wifi_handicap: raw.wifi_handicap,
            approval_handicap: raw.approval_handicap,
            ookla_download_cap: raw.ookla_download_cap,
            ookla_upload_cap: raw.ookla_upload_cap,
            cloudflare_download_cap: raw.cloudflare_download_cap,
            cloudflare_upload_cap: raw.cloudflare_upload_cap,
            latency_multiplier: raw.latency_multiplier,
            jitter_multiplier: raw.jitter_multiplier,
            loss_multiplier: raw.loss_multiplier,
            include_gateway: raw.include_gateway,
        };
        weights.validate()?;
        Ok(weights)
    }
}

fn default_download_mbps_red() -> f64 { 50.0 }
fn default_upload_mbps_red() -> f64 { 10.0 }
fn default_latency_red() -> f64 { 50.0 }
fn default_jitter_red() -> f64 { 10.0 }
fn default_packet_loss_red() -> f64 { 1.0 }
fn default_wifi_handicap() -> f64 { 5.0 }
fn default_approval_handicap() -> f64 { 20.0 }
fn default_cap() -> f64 { 20.0 }
fn default_latency_multiplier() -> f64 { 0.07 }
fn default_jitter_multiplier() -> f64 { 0.15 }
fn default_loss_multiplier() -> f64 { 2.0 }

#[cfg(test)]
#[path = "../../tests/src_inline/model/thresholds.rs"]
mod tests;
