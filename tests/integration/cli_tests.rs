//! Flag parsing, config loading and rendering used by the `aqi` binary.

use airindex::cli::{self, Invocation, Options, UsageError};
use airindex::{AboveRangePolicy, Calculator, Error, Measurement, Pollutant};

fn args(list: &[&str]) -> Vec<String> {
    list.iter().map(|s| (*s).to_string()).collect()
}

fn run_opts(list: &[&str]) -> Options {
    match cli::parse(args(list)) {
        Ok(Invocation::Run(opts)) => opts,
        other => panic!("expected Run, got {other:?}"),
    }
}

#[test]
fn pm25_flag_end_to_end() {
    let opts = run_opts(&["-v", "26.4"]);
    let ms: Vec<&dyn Measurement> = opts.readings.iter().map(|r| r as &dyn Measurement).collect();
    let result = Calculator::default().calculate(&ms).unwrap();
    assert_eq!(cli::render_text(&result, 3), "AQI is 81.073");
}

#[test]
fn help_wins() {
    assert_eq!(cli::parse(args(&["-h"])), Ok(Invocation::Help));
    assert_eq!(cli::parse(args(&["-v", "3", "--help"])), Ok(Invocation::Help));
}

#[test]
fn missing_measurement() {
    assert_eq!(cli::parse(args(&[])), Err(UsageError::MissingMeasurement));
    assert_eq!(cli::parse(args(&["--json"])), Err(UsageError::MissingMeasurement));
}

#[test]
fn bad_values() {
    assert_eq!(
        cli::parse(args(&["-v", "abc"])),
        Err(UsageError::InvalidNumber {
            flag: "-v".into(),
            value: "abc".into()
        })
    );
    assert_eq!(cli::parse(args(&["-v"])), Err(UsageError::MissingValue("-v".into())));
    assert_eq!(
        cli::parse(args(&["-m", "radon=4"])),
        Err(UsageError::InvalidReading(Error::UnknownPollutant("radon".into())))
    );
    assert_eq!(
        cli::parse(args(&["-m", "pm10"])),
        Err(UsageError::InvalidReading(Error::InvalidReading {
            input: "pm10".into(),
            reason: "expected <pollutant>=<value>",
        }))
    );
    assert_eq!(cli::parse(args(&["-q"])), Err(UsageError::UnknownFlag("-q".into())));
}

#[test]
fn repeated_measurements_and_flags() {
    let opts = run_opts(&["-m", "pm10=160", "-m=co=31", "-v", "10", "--json", "-c", "aqi.json"]);
    assert_eq!(
        opts.readings,
        vec![
            Pollutant::Pm10.reading(160.0),
            Pollutant::Co.reading(31.0),
            Pollutant::Pm25.reading(10.0),
        ]
    );
    assert!(opts.json);
    assert_eq!(opts.config_path.as_deref(), Some(std::path::Path::new("aqi.json")));
}

#[test]
fn negative_flag_value_parses_then_fails_calculation() {
    let opts = run_opts(&["-v", "-10"]);
    let ms: Vec<&dyn Measurement> = opts.readings.iter().map(|r| r as &dyn Measurement).collect();
    assert!(matches!(
        Calculator::default().calculate(&ms),
        Err(Error::InvalidMeasurement { .. })
    ));
}

#[test]
fn load_config_from_disk() {
    let path = std::env::temp_dir().join(format!("airindex-cli-{}.json", std::process::id()));
    std::fs::write(&path, r#"{ "above_range": "clamp", "display_precision": 1 }"#).unwrap();

    let config = cli::load_config(&path).unwrap();
    assert_eq!(config.above_range, AboveRangePolicy::Clamp);
    assert_eq!(config.display_precision, 1);

    std::fs::write(&path, "{ not json").unwrap();
    let err = cli::load_config(&path).unwrap_err();
    assert!(format!("{err:#}").contains("parsing config"));

    std::fs::remove_file(&path).unwrap();
    assert!(cli::load_config(&path).is_err());
}

#[test]
fn json_report_includes_breakdown() {
    let opts = run_opts(&["-m", "no2=20", "-m", "pm10=160"]);
    let ms: Vec<&dyn Measurement> = opts.readings.iter().map(|r| r as &dyn Measurement).collect();
    let calc = Calculator::default();
    let result = calc.calculate(&ms).unwrap();
    let breakdown = calc.breakdown(&ms).unwrap();

    let json: serde_json::Value =
        serde_json::from_str(&cli::render_json(&result, &breakdown).unwrap()).unwrap();
    assert_eq!(json["dominant"], "pm10");
    assert_eq!(json["breakdown"].as_array().unwrap().len(), 2);
    assert_eq!(json["breakdown"][0]["pollutant"], "no2");
}

#[test]
fn help_exits_zero_with_usage_on_stdout() {
    let exit = cli::resolve(cli::parse(args(&["--help"]))).unwrap_err();
    assert_eq!(exit.code, 0);
    assert!(exit.stdout.starts_with("usage: aqi"));
    assert!(exit.stderr.is_empty());
}

#[test]
fn every_usage_error_exits_one_with_usage() {
    let cases: [&[&str]; 6] = [
        &[],
        &["-v"],
        &["-v", "abc"],
        &["-m", "radon=4"],
        &["-m", "pm10"],
        &["-q"],
    ];
    for list in cases {
        let err = cli::parse(args(list)).unwrap_err();
        let exit = cli::resolve(Err(err.clone())).unwrap_err();
        assert_eq!(exit.code, 1, "{list:?}");
        assert!(exit.stdout.is_empty(), "{list:?}");
        assert!(exit.stderr.starts_with(&err.to_string()), "{list:?}");
        assert!(exit.stderr.contains(cli::USAGE), "{list:?}: {}", exit.stderr);
    }
}

#[test]
fn valid_arguments_run() {
    let opts = cli::resolve(cli::parse(args(&["-v", "26.4"]))).unwrap();
    assert_eq!(opts.readings, vec![Pollutant::Pm25.reading(26.4)]);
}
