use std::fs;
use std::path::PathBuf;
use std::process::Command;
use std::time::{SystemTime, UNIX_EPOCH};

fn temp_file_path(prefix: &str) -> PathBuf {
    let nonce = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .expect("clock should be after epoch")
        .as_nanos();
    std::env::temp_dir().join(format!("hierdiff-{prefix}-{nonce}.cfg"))
}

#[test]
fn hierdiff_cli_prints_annotated_text() {
    let old = temp_file_path("old-text");
    let new = temp_file_path("new-text");
    fs::write(&old, "router bgp 1\n  neighbor 1.1.1.1 remote-as 1\n").expect("write old");
    fs::write(&new, "router bgp 1\n  neighbor 1.1.1.1 remote-as 2\n").expect("write new");

    let output = Command::new(env!("CARGO_BIN_EXE_hierdiff"))
        .arg(&old)
        .arg(&new)
        .output()
        .expect("run hierdiff");

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("  router bgp 1"));
    assert!(stdout.contains("-   neighbor 1.1.1.1 remote-as 1"));
    assert!(stdout.contains("+   neighbor 1.1.1.1 remote-as 2"));
}

#[test]
fn hierdiff_cli_emits_structured_json() {
    let old = temp_file_path("old-json");
    let new = temp_file_path("new-json");
    fs::write(&old, "hostname a\n").expect("write old");
    fs::write(&new, "hostname b\n").expect("write new");

    let output = Command::new(env!("CARGO_BIN_EXE_hierdiff"))
        .arg("--json")
        .arg(&old)
        .arg(&new)
        .output()
        .expect("run hierdiff --json");

    assert!(output.status.success());
    let json: serde_json::Value = serde_json::from_slice(&output.stdout).expect("valid json");
    assert_eq!(json["has_changes"], true);
    assert!(json["old_context"].get("hostname a").is_some());
    assert!(json["new_context"].get("hostname b").is_some());
}

#[test]
fn hierdiff_cli_fails_on_missing_input_file() {
    let missing = temp_file_path("missing");
    let new = temp_file_path("present");
    fs::write(&new, "hostname a\n").expect("write new");

    let output = Command::new(env!("CARGO_BIN_EXE_hierdiff"))
        .arg(&missing)
        .arg(&new)
        .output()
        .expect("run hierdiff");

    assert!(!output.status.success());
}
