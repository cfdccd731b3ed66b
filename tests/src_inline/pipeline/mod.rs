use super::*;

fn fast_primary() -> Vec<PrimaryThroughputSample> {
    vec![PrimaryThroughputSample {
        download_bps: 500e6,
        upload_bps: 100e6,
        thread_count: 8,
    }]
}

struct Fixture {
    primary: Vec<PrimaryThroughputSample>,
    secondary: Vec<SecondaryThroughputSample>,
    latency: Vec<LatencyProbe>,
    wifi_in_use: bool,
    approval_required: bool,
    thresholds: StatisticsThresholds,
    weights: ConfidenceWeights,
}

impl Fixture {
    fn perfect() -> Self {
        Self {
            primary: fast_primary(),
            secondary: Vec::new(),
            latency: Vec::new(),
            wifi_in_use: false,
            approval_required: false,
            thresholds: StatisticsThresholds::default(),
            weights: ConfidenceWeights::default(),
        }
    }

    fn as_inputs(&self) -> ScoreInputs<'_> {
        ScoreInputs {
            primary: &self.primary,
            secondary: &self.secondary,
            latency: &self.latency,
            wifi_in_use: self.wifi_in_use,
            approval_required: self.approval_required,
            thresholds: &self.thresholds,
            weights: &self.weights,
        }
    }

    fn score(&self) -> u8 {
        run_scoring(&self.as_inputs()).unwrap().score.value()
    }
}

fn probe(average_latency: f64) -> LatencyProbe {
    LatencyProbe {
        average_latency,
        jitter: 1.0,
        packets_sent: 10,
        packets_lost: 0,
        is_gateway: false,
        test_failed: false,
    }
}

#[test]
fn test_baseline_only_scores_100() {
    assert_eq!(Fixture::perfect().score(), 100);
}

#[test]
fn test_wifi_and_approval_handicaps() {
    let mut f = Fixture::perfect();
    f.wifi_in_use = true;
    f.approval_required = true;
    assert_eq!(f.score(), 75);
}

#[test]
fn test_primary_at_and_one_below_threshold() {
    let mut f = Fixture::perfect();
    f.primary[0].download_bps = 50e6;
    f.primary[0].thread_count = 1;
    assert_eq!(f.score(), 100);

    f.primary[0].download_bps = 49e6;
    assert_eq!(f.score(), 99);
}

#[test]
fn test_three_failed_secondary_samples() {
    let mut f = Fixture::perfect();
    let failed = SecondaryThroughputSample {
        download_bps: 0.0,
        upload_bps: 30e6,
        download_size: 10.0,
        upload_size: 5.0,
        test_count: 4,
    };
    f.secondary = vec![failed; 3];
    let breakdown = run_scoring(&f.as_inputs()).unwrap();
    assert_eq!(breakdown.secondary.total(), 30.0);
    assert_eq!(breakdown.score.value(), 70);
}

#[test]
fn test_gateway_only_probes_ignored() {
    let mut f = Fixture::perfect();
    f.latency = (0..5)
        .map(|_| LatencyProbe {
            average_latency: 2000.0,
            jitter: 400.0,
            packets_sent: 10,
            packets_lost: 10,
            is_gateway: true,
            test_failed: false,
        })
        .collect();
    assert_eq!(f.score(), 100);
}

#[test]
fn test_latency_overage_example() {
    // Seven probes at 87ms against 50ms cost 2.59 each: 81.87 rounds to 82.
    let mut f = Fixture::perfect();
    f.latency = vec![probe(87.0); 7];
    let breakdown = run_scoring(&f.as_inputs()).unwrap();
    assert!((breakdown.raw - 81.87).abs() < 1e-9);
    assert_eq!(breakdown.score.value(), 82);
}

#[test]
fn test_clamped_at_zero() {
    let mut f = Fixture::perfect();
    f.wifi_in_use = true;
    f.approval_required = true;
    f.latency = vec![probe(10_000.0); 3];
    let breakdown = run_scoring(&f.as_inputs()).unwrap();
    assert!(breakdown.raw < 0.0);
    assert_eq!(breakdown.score.value(), 0);
}

#[test]
fn test_score_monotonic_in_latency() {
    let mut last = 100u8;
    for ms in (0..400).step_by(10) {
        let mut f = Fixture::perfect();
        f.latency = vec![probe(ms as f64)];
        let s = f.score();
        assert!(s <= last, "score rose from {last} to {s} at {ms}ms");
        last = s;
    }
}

#[test]
fn test_empty_primary_fails() {
    let mut f = Fixture::perfect();
    f.primary.clear();
    assert_eq!(
        run_scoring(&f.as_inputs()).unwrap_err(),
        ScoreError::EmptyPrimarySamples
    );
}

#[test]
fn test_invalid_weights_rejected() {
    let mut f = Fixture::perfect();
    f.weights.wifi_handicap = -5.0;
    assert!(matches!(
        run_scoring(&f.as_inputs()),
        Err(ScoreError::InvalidConfig(ThresholdError::Negative { .. }))
    ));
}

#[test]
fn test_score_matches_breakdown() {
    let mut f = Fixture::perfect();
    f.wifi_in_use = true;
    f.latency = vec![probe(95.0), probe(30.0)];
    let breakdown = run_scoring(&f.as_inputs()).unwrap();
    let s = score(
        &f.primary,
        &f.secondary,
        &f.latency,
        f.wifi_in_use,
        f.approval_required,
        &f.thresholds,
        &f.weights,
    )
    .unwrap();
    assert_eq!(s, breakdown.score);
}

#[test]
fn test_determinism_bits() {
    let mut f = Fixture::perfect();
    f.primary.push(PrimaryThroughputSample {
        download_bps: 12.3e6,
        upload_bps: 4.56e6,
        thread_count: 3,
    });
    f.latency = vec![probe(61.7), probe(73.1)];
    let a = run_scoring(&f.as_inputs()).unwrap();
    let b = run_scoring(&f.as_inputs()).unwrap();
    assert_eq!(a.raw.to_bits(), b.raw.to_bits());
    assert_eq!(a.score, b.score);
}
