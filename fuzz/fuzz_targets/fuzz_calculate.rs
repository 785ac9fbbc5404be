//! Fuzz target: `Calculator::calculate`
//!
//! Decodes the input as a list of (pollutant, f64) pairs, 9 bytes each,
//! and verifies:
//! - No panics for any bit pattern (NaN, infinities, subnormals)
//! - Non-finite or negative values always yield `InvalidMeasurement`
//! - `InvalidMeasurement` for finite input only when extrapolation overflows
//! - On success the AQI is finite, non-negative, the largest sub-index and
//!   inside the band it is labelled with (up to 500)
//!
//! cargo fuzz run fuzz_calculate

#![no_main]

use airindex::{
    AboveRangePolicy, Calculator, CalculatorConfig, Error, Measurement, Pollutant, Reading,
};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let Some((&policy, rest)) = data.split_first() else {
        return;
    };

    let readings: Vec<Reading> = rest
        .chunks_exact(9)
        .map(|chunk| {
            let pollutant = Pollutant::ALL[chunk[0] as usize % Pollutant::ALL.len()];
            let mut bytes = [0u8; 8];
            bytes.copy_from_slice(&chunk[1..9]);
            pollutant.reading(f64::from_le_bytes(bytes))
        })
        .collect();
    let ms: Vec<&dyn Measurement> = readings.iter().map(|r| r as &dyn Measurement).collect();

    let above_range = match policy % 3 {
        0 => AboveRangePolicy::Extrapolate,
        1 => AboveRangePolicy::Clamp,
        _ => AboveRangePolicy::Reject,
    };
    let calc = Calculator::new(CalculatorConfig {
        above_range,
        ..CalculatorConfig::default()
    });

    let any_invalid = readings
        .iter()
        .any(|r| !r.value.is_finite() || r.value < 0.0);
    let may_overflow = above_range == AboveRangePolicy::Extrapolate
        && readings.iter().any(|r| r.value > 1e300);

    match calc.calculate(&ms) {
        Ok(result) => {
            assert!(!any_invalid, "invalid reading accepted");
            assert!(result.aqi.is_finite() && result.aqi >= 0.0, "aqi {}", result.aqi);
            if result.aqi <= 500.0 {
                assert_eq!(result.index, airindex::Index::for_aqi(result.aqi));
            }
            let subs = calc.breakdown(&ms).expect("breakdown must agree with calculate");
            assert!(subs.iter().all(|s| s.aqi <= result.aqi));
            assert_eq!(result.is_empty(), readings.is_empty());
        }
        Err(Error::InvalidMeasurement { .. }) => assert!(any_invalid || may_overflow),
        Err(Error::AboveRange { .. }) => assert_eq!(above_range, AboveRangePolicy::Reject),
        Err(e) => panic!("unexpected error: {e}"),
    }
});
