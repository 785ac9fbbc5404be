//! Integration test driver for `tests/integration/` submodule.
//!
//! Each `mod` below maps to a file that exercises a specific surface of
//! the crate through its public API only.

mod cli_tests;
mod scenario_tests;
mod support;
