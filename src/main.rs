//! `aqi` — command-line AQI calculator.
//!
//! ```text
//!   args ──▶ cli::parse ──▶ Calculator ──▶ render_text / render_json
//! ```
//!
//! Exit status is 0 on success or `--help`, 1 on any usage or calculation
//! error.  Usage errors are followed by the usage text.  Logs go to stderr; set `RUST_LOG=debug` to see every sub-index.

use std::process::ExitCode;

use anyhow::Result;
use log::info;

use airindex::cli::{self, Options};
use airindex::{Calculator, CalculatorConfig, Measurement};

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let opts = match cli::resolve(cli::parse(std::env::args().skip(1))) {
        Ok(opts) => opts,
        Err(exit) => {
            print!("{}", exit.stdout);
            eprint!("{}", exit.stderr);
            return ExitCode::from(exit.code);
        }
    };

    match run(&opts) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{e:#}");
            ExitCode::FAILURE
        }
    }
}

fn run(opts: &Options) -> Result<()> {
    let config = match &opts.config_path {
        Some(path) => cli::load_config(path)?,
        None => CalculatorConfig::default(),
    };
    info!("above-range policy: {:?}", config.above_range);

    let calc = Calculator::new(config);
    let measurements: Vec<&dyn Measurement> =
        opts.readings.iter().map(|r| r as &dyn Measurement).collect();

    let assessment = calc.calculate(&measurements)?;

    if opts.json {
        let breakdown = calc.breakdown(&measurements)?;
        println!("{}", cli::render_json(&assessment, &breakdown)?);
    } else {
        println!(
            "{}",
            cli::render_text(&assessment, calc.config().display_precision)
        );
    }
    Ok(())
}
