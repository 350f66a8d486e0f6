//! Integration tests for the device generator

mod cli_output;
mod test_utils;
