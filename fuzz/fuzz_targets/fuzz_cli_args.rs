//! Fuzz target: `cli::parse`
//!
//! Splits the input on NUL bytes into an argument vector and checks the
//! parser never panics, only returns `Run` with at least one reading, and
//! that every early exit is help (0) or a usage error with usage text (1).
//!
//! cargo fuzz run fuzz_cli_args

#![no_main]

use airindex::cli::{self, Invocation};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let Ok(text) = core::str::from_utf8(data) else {
        return;
    };
    let args = text.split('\0').map(str::to_string);

    let parsed = cli::parse(args);
    if let Ok(Invocation::Run(opts)) = &parsed {
        assert!(!opts.readings.is_empty());
    }
    if let Err(exit) = cli::resolve(parsed) {
        match exit.code {
            0 => assert!(exit.stderr.is_empty()),
            1 => assert!(exit.stderr.contains(cli::USAGE)),
            code => panic!("unexpected exit code {code}"),
        }
    }
});
