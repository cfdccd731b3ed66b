use super::*;

#[test]
fn test_in_range_rounds_half_up() {
    assert_eq!(run_stage5(86.7).value(), 87);
    assert_eq!(run_stage5(86.5).value(), 87);
    assert_eq!(run_stage5(86.4).value(), 86);
    assert_eq!(run_stage5(0.5).value(), 1);
}

#[test]
fn test_clamps_negative_to_zero() {
    assert_eq!(run_stage5(-250.3).value(), 0);
}

#[test]
fn test_clamps_above_baseline() {
    assert_eq!(run_stage5(100.0).value(), 100);
    assert_eq!(run_stage5(130.0).value(), 100);
}

#[test]
fn test_nan_maps_to_zero() {
    assert_eq!(run_stage5(f64::NAN).value(), 0);
}
