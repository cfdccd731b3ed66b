use crate::model::samples::{PrimaryThroughputSample, SecondaryThroughputSample};

pub const BITS_PER_MEGABIT: f64 = 1_000_000.0;

/// Mean throughput where each run counts once per thread it used.
#[derive(Debug, Clone, Copy, Default)]
pub struct ThreadWeightedMean {
    download_sum: f64,
    upload_sum: f64,
    threads: u64,
}

impl ThreadWeightedMean {
    pub fn push(&mut self, sample: &PrimaryThroughputSample) {
        let threads = sample.thread_count as f64;
        self.download_sum += sample.download_bps * threads;
        self.upload_sum += sample.upload_bps * threads;
        self.threads += u64::from(sample.thread_count);
    }

    pub fn threads(&self) -> u64 {
        self.threads
    }

    /// `(download, upload)` in Mbps, `None` until a thread has been counted.
    pub fn mean_mbps(&self) -> Option<(f64, f64)> {
        if self.threads == 0 {
            return None;
        }
        let divisor = self.threads as f64;
        Some((
            self.download_sum / divisor / BITS_PER_MEGABIT,
            self.upload_sum / divisor / BITS_PER_MEGABIT,
        ))
    }
}

impl<'a> FromIterator<&'a PrimaryThroughputSample> for ThreadWeightedMean {
    fn from_iter<I: IntoIterator<Item = &'a PrimaryThroughputSample>>(iter: I) -> Self {
        let mut mean = Self::default();
        for sample in iter {
            mean.push(sample);
        }
        mean
    }
}

/// Mean throughput where each run counts by payload size times test count.
/// Download and upload carry separate divisors since their payloads differ.
#[derive(Debug, Clone, Copy, Default)]
pub struct PayloadWeightedMean {
    download_acc: f64,
    download_div: f64,
    upload_acc: f64,
    upload_div: f64,
}

impl PayloadWeightedMean {
    pub fn push(&mut self, sample: &SecondaryThroughputSample) {
        let download_weight = sample.download_weight();
        let upload_weight = sample.upload_weight();
        self.download_acc += sample.download_bps * download_weight;
        self.download_div += download_weight;
        self.upload_acc += sample.upload_bps * upload_weight;
        self.upload_div += upload_weight;
    }

    pub fn download_mbps(&self) -> Option<f64> {
        weighted_mbps(self.download_acc, self.download_div)
    }

    pub fn upload_mbps(&self) -> Option<f64> {
        weighted_mbps(self.upload_acc, self.upload_div)
    }
}

fn weighted_mbps(acc: f64, div: f64) -> Option<f64> {
    if div > 0.0 {
        Some(acc / div / BITS_PER_MEGABIT)
    } else {
        None
    }
}

/// Points lost for falling short of a floor: the shortfall, at most `cap`.
pub fn capped_shortfall(measured: f64, red_line: f64, cap: f64) -> f64 {
    if measured < red_line {
        (red_line - measured).min(cap)
    } else {
        0.0
    }
}

/// Points lost for exceeding a ceiling: the overage scaled by `multiplier`.
pub fn scaled_overage(measured: f64, red_line: f64, multiplier: f64) -> f64 {
    if measured > red_line {
        multiplier * (measured - red_line)
    } else {
        0.0
    }
}

#[cfg(test)]
#[path = "../../tests/src_inline/pipeline/aggregate.rs"]
mod tests;
