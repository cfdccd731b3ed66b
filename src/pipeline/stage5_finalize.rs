use crate::model::scores::ConfidenceScore;

pub const BASELINE: f64 = 100.0;

/// Clamp to `[0, 100]`, then round half away from zero.
pub fn run_stage5(raw: f64) -> ConfidenceScore {
    // NaN only arises from non-finite sample data; it maps to the floor.
    let bounded = if raw.is_nan() {
        0.0
    } else {
        raw.clamp(0.0, BASELINE)
    };
    let rounded = bounded.round() as u8;
    ConfidenceScore::new(rounded).unwrap_or(ConfidenceScore::MAX)
}

#[cfg(test)]
#[path = "../../tests/src_inline/pipeline/stage5_finalize.rs"]
mod tests;
