//! Reference readings checked against published EPA calculator output.

use airindex::{
    Assessment, Calculator, Category, Co, Error, INDEXES, Index, Measurement, No2, O3, Pm10, Pm25,
    Pollutant, So2, calculate,
};

use crate::support::assert_close;

// ── Single pollutant ──────────────────────────────────────────

#[test]
fn pm25_moderate() {
    let result = calculate(&[&Pm25(26.4)]).unwrap();
    assert_close(result.aqi, 81.073);
    assert_eq!(result.index, Some(&INDEXES[1]));
    assert_eq!(result.index.unwrap().name, "Moderate");
}

#[test]
fn pm10_sensitive() {
    let result = calculate(&[&Pm10(160.0)]).unwrap();
    assert_close(result.aqi, 103.474);
    assert_eq!(result.category(), Some(Category::UnhealthyForSensitiveGroups));
    assert_eq!(result.index.unwrap().name, "Unhealthy for Sensitive Groups");
}

#[test]
fn co_hazardous() {
    let result = calculate(&[&Co(31.0)]).unwrap();
    assert_close(result.aqi, 306.0);
    assert_eq!(result.category(), Some(Category::Hazardous));
}

#[test]
fn so2_moderate() {
    let result = calculate(&[&So2(48.0)]).unwrap();
    assert_close(result.aqi, 66.077);
    assert_eq!(result.category(), Some(Category::Moderate));
}

#[test]
fn no2_good() {
    let result = calculate(&[&No2(20.0)]).unwrap();
    assert_close(result.aqi, 18.868);
    assert_eq!(result.category(), Some(Category::Good));
}

#[test]
fn pm25_extreme() {
    let result = calculate(&[&Pm25(500.0)]).unwrap();
    assert_close(result.aqi, 499.736);
    assert_eq!(result.category(), Some(Category::VeryHazardous));
}

// ── Aggregation ───────────────────────────────────────────────

#[test]
fn multiple_inputs_take_the_worst() {
    let result = calculate(&[&Pm25(30.0), &Pm25(10.0)]).unwrap();
    assert_close(result.aqi, 88.643);

    let reversed = calculate(&[&Pm25(10.0), &Pm25(30.0)]).unwrap();
    assert_eq!(result, reversed);
}

#[test]
fn mixed_kinds_report_dominant_pollutant() {
    let readings = [
        Pollutant::No2.reading(20.0),
        Pollutant::Pm10.reading(160.0),
        Pollutant::So2.reading(48.0),
    ];
    let ms: Vec<&dyn Measurement> = readings.iter().map(|r| r as &dyn Measurement).collect();

    let result = calculate(&ms).unwrap();
    assert_close(result.aqi, 103.474);
    assert_eq!(result.dominant, Some(Pollutant::Pm10));

    let subs = Calculator::default().breakdown(&ms).unwrap();
    let max = subs.iter().map(|s| s.aqi).fold(f64::MIN, f64::max);
    assert_eq!(max, result.aqi);
}

#[test]
fn ozone_above_its_table_stays_very_unhealthy() {
    let alone = calculate(&[&O3(0.5)]).unwrap();
    assert_close(alone.aqi, 300.0);
    assert_eq!(alone.category(), Some(Category::VeryUnhealthy));
    assert_eq!(alone.index, Index::for_aqi(alone.aqi));

    let mixed = calculate(&[&O3(0.5), &Pm25(400.0)]).unwrap();
    assert_close(mixed.aqi, 433.692);
    assert_eq!(mixed.dominant, Some(Pollutant::Pm25));
    assert_eq!(mixed.category(), Some(Category::VeryHazardous));
    assert_eq!(mixed.index, Index::for_aqi(mixed.aqi));
}

// ── Error conditions ──────────────────────────────────────────

#[test]
fn negative_concentration_is_invalid() {
    let err = calculate(&[&Pm25(-10.0)]).unwrap_err();
    assert!(matches!(err, Error::InvalidMeasurement { pollutant: Pollutant::Pm25, .. }));
}

#[test]
fn empty_input_has_no_index() {
    let result = calculate(&[]).unwrap();
    assert_eq!(result, Assessment::EMPTY);
    assert_eq!(result.aqi, 0.0);
    assert!(result.index.is_none());
}

#[test]
fn assessment_serialises_with_index_metadata() {
    let result = calculate(&[&Co(31.0)]).unwrap();
    let json: serde_json::Value = serde_json::to_value(&result).unwrap();
    assert_eq!(json["dominant"], "co");
    assert_eq!(json["index"]["name"], "Hazardous");
    assert_eq!(json["index"]["low"], 301);
    assert_eq!(json["index"]["color"]["r"], 125);
}
