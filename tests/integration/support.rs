//! Shared helpers for the integration tests.

/// Relative comparison used for published reference AQI values.
pub fn assert_close(actual: f64, expected: f64) {
    let delta = (actual - expected).abs();
    let mean = (actual + expected).abs() / 2.0;
    assert!(
        delta / mean < 0.00001,
        "expected AQI of {expected:.3}, got {actual:.3}"
    );
}
