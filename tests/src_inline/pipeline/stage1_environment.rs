use super::*;

fn run(wifi_in_use: bool, approval_required: bool) -> EnvironmentPenalty {
    let weights = ConfidenceWeights::default();
    run_stage1(&Stage1Inputs {
        wifi_in_use,
        approval_required,
        weights: &weights,
    })
}

#[test]
fn test_no_handicaps() {
    assert_eq!(run(false, false).total(), 0.0);
}

#[test]
fn test_wifi_only() {
    let p = run(true, false);
    assert_eq!(p.wifi, 5.0);
    assert_eq!(p.approval, 0.0);
}

#[test]
fn test_wifi_and_approval() {
    assert_eq!(run(true, true).total(), 25.0);
}

#[test]
fn test_custom_handicap() {
    let weights = ConfidenceWeights {
        approval_handicap: 12.5,
        ..ConfidenceWeights::default()
    };
    let p = run_stage1(&Stage1Inputs {
        wifi_in_use: false,
        approval_required: true,
        weights: &weights,
    });
    assert_eq!(p.total(), 12.5);
}
