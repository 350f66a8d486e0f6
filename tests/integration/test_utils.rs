//! Helpers for driving the devgen binary in isolation.

use std::path::Path;
use std::process::{Command, Output};

/// Run the binary with `args`, isolated from the caller's config and log settings.
pub fn run_devgen(home: &Path, args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_devgen"))
        .env("HOME", home)
        .env("XDG_CONFIG_HOME", home.join(".config"))
        .env_remove("DEVGEN_LOG")
        .env_remove("DEVGEN_LOG_OUTPUT")
        .env_remove("DEVGEN_LOG_FORMAT")
        .env_remove("DEVGEN_ENV")
        .current_dir(home)
        .args(args)
        .output()
        .unwrap()
}

/// Drop the timestamp fields, which vary between runs.
pub fn strip_timestamps(doc: &serde_json::Value) -> serde_json::Value {
    let mut doc = doc.clone();
    if let Some(items) = doc.as_array_mut() {
        for item in items {
            if let Some(obj) = item.as_object_mut() {
                obj.remove("created_at");
                obj.remove("updated_at");
            }
        }
    }
    doc
}
