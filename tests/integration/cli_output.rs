//! End-to-end tests of the devgen binary's stdout/stderr contract.

use super::test_utils::{run_devgen, strip_timestamps};
use devgen::emit::{parse_records, serialize, OutputFormat};
use serde_json::Value;
use tempfile::TempDir;

#[test]
fn test_no_arguments_prints_reference_document() {
    let temp_dir = TempDir::new().unwrap();
    let output = run_devgen(temp_dir.path(), &[]);

    assert!(
        output.status.success(),
        "devgen should succeed: stderr={:?}",
        String::from_utf8_lossy(&output.stderr)
    );
    assert!(output.stderr.is_empty(), "nothing should reach stderr without --verbose");

    let stdout = String::from_utf8(output.stdout).unwrap();
    let doc: Value = serde_json::from_str(&stdout).unwrap();
    let items = doc.as_array().unwrap();
    assert_eq!(items.len(), 5);

    for (i, item) in items.iter().enumerate() {
        assert_eq!(item["id"], format!("device-{}", i));
        assert_eq!(item["name"], format!("Device {}", i));
        assert_eq!(item["description"], "Automatically generated device");
        assert_eq!(item["type"], "sensor");
        assert_eq!(item["ip"], format!("192.168.1..{}", i));
        assert_eq!(item["port"], 8080 + i as u64);
        assert!(item["created_at"].is_string());
        assert!(item["updated_at"].is_string());
    }

    let keys: Vec<&String> = items[0].as_object().unwrap().keys().collect();
    assert_eq!(keys.len(), 8);
}

#[test]
fn test_document_is_two_space_indented() {
    let temp_dir = TempDir::new().unwrap();
    let output = run_devgen(temp_dir.path(), &["generate", "--count", "1"]);
    let stdout = String::from_utf8(output.stdout).unwrap();
    let lines: Vec<&str> = stdout.lines().collect();
    assert_eq!(lines[0], "[");
    assert_eq!(lines[1], "  {");
    assert_eq!(lines[2], "    \"id\": \"device-0\",");
    assert_eq!(*lines.last().unwrap(), "]");
}

#[test]
fn test_zero_devices_prints_empty_array() {
    let temp_dir = TempDir::new().unwrap();
    let output = run_devgen(temp_dir.path(), &["generate", "--count", "0"]);
    assert!(output.status.success());
    assert_eq!(String::from_utf8(output.stdout).unwrap(), "[]\n");
}

#[test]
fn test_runs_differ_only_in_timestamps() {
    let temp_dir = TempDir::new().unwrap();
    let first = run_devgen(temp_dir.path(), &[]);
    let second = run_devgen(temp_dir.path(), &[]);

    let first: Value = serde_json::from_slice(&first.stdout).unwrap();
    let second: Value = serde_json::from_slice(&second.stdout).unwrap();
    assert_eq!(strip_timestamps(&first), strip_timestamps(&second));
}

#[test]
fn test_emitted_document_round_trips() {
    let temp_dir = TempDir::new().unwrap();
    let output = run_devgen(temp_dir.path(), &[]);
    let stdout = String::from_utf8(output.stdout).unwrap();

    let records = parse_records(&stdout).unwrap();
    let reserialized = serialize(&records, OutputFormat::Json).unwrap();
    assert_eq!(stdout, format!("{}\n", reserialized));
}

#[test]
fn test_error_replaces_document_with_nonzero_status() {
    let temp_dir = TempDir::new().unwrap();
    let output = run_devgen(
        temp_dir.path(),
        &["generate", "--count", "3", "--port-start", "65535"],
    );

    assert!(!output.status.success());
    assert_eq!(output.status.code(), Some(1));
    let stdout = String::from_utf8(output.stdout).unwrap();
    assert_eq!(stdout.lines().count(), 1, "a single error line and no document: {}", stdout);
    assert!(stdout.contains("Port overflow"));
    assert!(!stdout.contains("device-0"));
    assert!(output.stderr.is_empty());
}

#[test]
fn test_huge_count_reports_overflow_instead_of_aborting() {
    let temp_dir = TempDir::new().unwrap();
    let output = run_devgen(temp_dir.path(), &["generate", "--count", "100000000000"]);

    assert_eq!(output.status.code(), Some(1));
    let stdout = String::from_utf8(output.stdout).unwrap();
    assert_eq!(stdout.lines().count(), 1);
    assert!(stdout.contains("Port overflow"));
}

#[test]
fn test_table_format() {
    let temp_dir = TempDir::new().unwrap();
    let output = run_devgen(temp_dir.path(), &["generate", "--format", "table"]);
    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    assert!(stdout.contains("device-4"));
    assert!(stdout.contains("8084"));
}

#[test]
fn test_normalize_ip_flag() {
    let temp_dir = TempDir::new().unwrap();
    let output = run_devgen(temp_dir.path(), &["generate", "--normalize-ip", "-n", "2"]);
    let records = parse_records(&String::from_utf8(output.stdout).unwrap()).unwrap();
    assert_eq!(records[1].ip, "192.168.1.1");
}

#[test]
fn test_verbose_logs_to_stderr_only() {
    let temp_dir = TempDir::new().unwrap();
    let output = run_devgen(temp_dir.path(), &["--verbose", "generate", "-n", "1"]);
    assert!(output.status.success());

    let stdout = String::from_utf8(output.stdout).unwrap();
    let records = parse_records(&stdout).unwrap();
    assert_eq!(records.len(), 1);

    let stderr = String::from_utf8(output.stderr).unwrap();
    assert!(stderr.contains("devgen starting"), "stderr was: {}", stderr);
}
