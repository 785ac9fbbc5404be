//! Argument parsing and rendering for the `aqi` binary.
//!
//! Kept in the library so the flag handling is testable on its own; the
//! binary only wires it to stdin/stdout and exit codes.

use core::fmt;
use std::path::{Path, PathBuf};

use anyhow::Context;
use serde::Serialize;

use crate::calculator::{Assessment, SubIndex};
use crate::config::CalculatorConfig;
use crate::error::Error;
use crate::pollutant::{Pollutant, Reading};

pub const USAGE: &str = "\
usage: aqi -v <pm2.5> [-m <pollutant>=<value>]... [--config <path>] [--json]

  -v <value>               PM2.5 value in micrograms per meter cubed
  -m <pollutant>=<value>   measurement for pm25, pm10, co, so2, no2 or o3
  -c, --config <path>      JSON calculator configuration
      --json               print the full assessment as JSON
  -h, --help               show this screen";

/// What the binary was asked to do.
#[derive(Debug, Clone, PartialEq)]
pub enum Invocation {
    Help,
    Run(Options),
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Options {
    pub readings: Vec<Reading>,
    pub config_path: Option<PathBuf>,
    pub json: bool,
}

// ---------------------------------------------------------------------------
// Usage errors
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq)]
pub enum UsageError {
    /// Neither `-v` nor `-m` was given.
    MissingMeasurement,
    /// A flag that takes a value was last on the line.
    MissingValue(String),
    /// `-v` value is not a number.
    InvalidNumber { flag: String, value: String },
    /// `-m` value did not parse.
    InvalidReading(Error),
    UnknownFlag(String),
}

impl fmt::Display for UsageError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingMeasurement => write!(f, "missing argument -v"),
            Self::MissingValue(flag) => write!(f, "flag needs an argument: {flag}"),
            Self::InvalidNumber { flag, value } => {
                write!(f, "invalid value \"{value}\" for flag {flag}")
            }
            Self::InvalidReading(e) => write!(f, "flag -m: {e}"),
            Self::UnknownFlag(flag) => write!(f, "flag provided but not defined: {flag}"),
        }
    }
}

impl std::error::Error for UsageError {}

// ---------------------------------------------------------------------------
// Parsing
// ---------------------------------------------------------------------------

/// Parse arguments, excluding the program name.
///
/// Flags accept their value as the next argument or after `=`
/// (`-v 26.4`, `-v=26.4`).
pub fn parse<I>(args: I) -> Result<Invocation, UsageError>
where
    I: IntoIterator<Item = String>,
{
    let mut opts = Options::default();
    let mut args = args.into_iter();

    while let Some(arg) = args.next() {
        let split = arg
            .split_once('=')
            .filter(|(flag, _)| flag.starts_with('-'))
            .map(|(flag, value)| (flag.to_string(), value.to_string()));
        let (flag, inline) = match split {
            Some((flag, value)) => (flag, Some(value)),
            None => (arg, None),
        };

        match flag.as_str() {
            "-h" | "--help" => return Ok(Invocation::Help),
            "--json" => opts.json = true,
            "-v" => {
                let value = take_value(&flag, inline, &mut args)?;
                let pm25 = value.trim().parse::<f64>().map_err(|_| UsageError::InvalidNumber {
                    flag: flag.clone(),
                    value: value.clone(),
                })?;
                opts.readings.push(Pollutant::Pm25.reading(pm25));
            }
            "-m" => {
                let value = take_value(&flag, inline, &mut args)?;
                let reading = value.parse::<Reading>().map_err(UsageError::InvalidReading)?;
                opts.readings.push(reading);
            }
            "-c" | "--config" => {
                let value = take_value(&flag, inline, &mut args)?;
                opts.config_path = Some(PathBuf::from(value));
            }
            _ => return Err(UsageError::UnknownFlag(flag)),
        }
    }

    if opts.readings.is_empty() {
        return Err(UsageError::MissingMeasurement);
    }
    Ok(Invocation::Run(opts))
}

/// Early exit the binary takes instead of running a calculation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Exit {
    pub code: u8,
    pub stdout: String,
    pub stderr: String,
}

/// Options to run with, or the exit for `--help` and usage errors.
///
/// Every usage error prints the message followed by [`USAGE`] on stderr
/// and exits 1; `--help` prints [`USAGE`] on stdout and exits 0.
pub fn resolve(parsed: Result<Invocation, UsageError>) -> Result<Options, Exit> {
    match parsed {
        Ok(Invocation::Run(opts)) => Ok(opts),
        Ok(Invocation::Help) => Err(Exit {
            code: 0,
            stdout: format!("{USAGE}\n"),
            stderr: String::new(),
        }),
        Err(e) => Err(Exit {
            code: 1,
            stdout: String::new(),
            stderr: format!("{e}\n{USAGE}\n"),
        }),
    }
}

fn take_value<I>(flag: &str, inline: Option<String>, rest: &mut I) -> Result<String, UsageError>
where
    I: Iterator<Item = String>,
{
    inline
        .or_else(|| rest.next())
        .ok_or_else(|| UsageError::MissingValue(flag.to_string()))
}

/// Read a JSON [`CalculatorConfig`] from disk.
pub fn load_config(path: &Path) -> anyhow::Result<CalculatorConfig> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("reading config {}", path.display()))?;
    CalculatorConfig::from_json(&text).with_context(|| format!("parsing config {}", path.display()))
}

// ---------------------------------------------------------------------------
// Rendering
// ---------------------------------------------------------------------------

/// `AQI is <value>` at the given precision.
pub fn render_text(assessment: &Assessment, precision: usize) -> String {
    format!("AQI is {:.*}", precision, assessment.aqi)
}

#[derive(Serialize)]
struct JsonReport<'a> {
    #[serde(flatten)]
    assessment: &'a Assessment,
    breakdown: &'a [SubIndex],
}

/// Pretty JSON with the assessment fields plus every sub-index.
pub fn render_json(assessment: &Assessment, breakdown: &[SubIndex]) -> serde_json::Result<String> {
    serde_json::to_string_pretty(&JsonReport {
        assessment,
        breakdown,
    })
}
