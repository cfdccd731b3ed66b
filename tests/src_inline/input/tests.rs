use super::*;

const BUNDLE: &str = r#"{
    "wifi_in_use": true,
    "approval_required": false,
    "primary": [
        {"download_bps": 250000000.0, "upload_bps": 40000000.0, "thread_count": 8}
    ],
    "secondary": [
        {"download_bps": 180000000.0, "upload_bps": 35000000.0,
         "download_size": 100000000.0, "upload_size": 25000000.0, "test_count": 2}
    ],
    "latency": [
        {"average_latency": 18.2, "jitter": 1.4, "packets_sent": 20, "packets_lost": 0},
        {"average_latency": 1.1, "jitter": 0.2, "packets_sent": 20, "packets_lost": 0,
         "is_gateway": true}
    ]
}"#;

#[test]
fn test_parse_bundle() {
    let bundle = MeasurementBundle::from_json_str(BUNDLE).unwrap();
    assert!(bundle.wifi_in_use);
    assert_eq!(bundle.primary.len(), 1);
    assert_eq!(bundle.secondary[0].test_count, 2);
    assert!(bundle.latency[1].is_gateway);
}

#[test]
fn test_optional_collections_default_empty() {
    let bundle = MeasurementBundle::from_json_str(
        r#"{"primary": [{"download_bps": 1.0, "upload_bps": 1.0, "thread_count": 1}]}"#,
    )
    .unwrap();
    assert!(!bundle.wifi_in_use);
    assert!(bundle.secondary.is_empty());
    assert!(bundle.latency.is_empty());
}

#[test]
fn test_missing_primary_is_parse_error() {
    let err = MeasurementBundle::from_json_str(r#"{"wifi_in_use": false}"#).unwrap_err();
    assert!(matches!(err, InputError::Parse(_)));
}

#[test]
fn test_zero_thread_count_rejected() {
    let err = MeasurementBundle::from_json_str(
        r#"{"primary": [
            {"download_bps": 1.0, "upload_bps": 1.0, "thread_count": 4},
            {"download_bps": 1.0, "upload_bps": 1.0, "thread_count": 0}
        ]}"#,
    )
    .unwrap_err();
    match err {
        InputError::InvalidMeasurement {
            collection,
            index,
            field,
            ..
        } => {
            assert_eq!(collection, "primary");
            assert_eq!(index, 1);
            assert_eq!(field, "thread_count");
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn test_lost_exceeding_sent_rejected() {
    let mut bundle = MeasurementBundle::from_json_str(BUNDLE).unwrap();
    bundle.latency[0].packets_lost = 21;
    let err = bundle.validate().unwrap_err();
    assert!(err.to_string().contains("latency[0].packets_lost"), "{err}");
}

#[test]
fn test_negative_and_zero_sizes_rejected() {
    let mut bundle = MeasurementBundle::from_json_str(BUNDLE).unwrap();
    bundle.secondary[0].upload_size = 0.0;
    assert!(bundle.validate().is_err());

    let mut bundle = MeasurementBundle::from_json_str(BUNDLE).unwrap();
    bundle.primary[0].download_bps = -1.0;
    assert!(bundle.validate().is_err());
}

#[test]
fn test_zero_bandwidth_is_valid_input() {
    // A failed secondary run reports 0 bps; the scorer penalizes it.
    let mut bundle = MeasurementBundle::from_json_str(BUNDLE).unwrap();
    bundle.secondary[0].download_bps = 0.0;
    assert!(bundle.validate().is_ok());
}
