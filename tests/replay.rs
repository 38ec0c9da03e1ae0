//! Runs the `sparrow-replay` binary over recorded event streams.

use std::io::Write;
use std::process::{Command, Output, Stdio};

fn replay(input: &str, args: &[&str]) -> Output {
    let mut child = Command::new(env!("CARGO_BIN_EXE_sparrow-replay"))
        .args(args)
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .expect("spawn sparrow-replay");
    child
        .stdin
        .take()
        .expect("stdin")
        .write_all(input.as_bytes())
        .expect("write events");
    child.wait_with_output().expect("wait for sparrow-replay")
}

const SESSION: &str = r#"{"type":"NEW_TAB_MAYBE","payload":{"name":"Hub","tabType":"hubMessages","key":"hub"}}
{"type":"RECEIVE_MESSAGE","payload":{"from":"alice","text":"hello","time":"8:30 PM"}}

{"type":"NEW_SEARCH","payload":{"queryText":"doc pdf"}}
{"type":"RECEIVE_SEARCH_RESULT","payload":{"batch":[{"tth":"H1","name":"my doc.pdf","size":100,"username":"u1","freeSlots":1,"totalSlots":3}]}}
"#;

#[test]
fn prints_final_snapshot_as_json() {
    let output = replay(SESSION, &[]);
    assert!(output.status.success(), "stderr: {}", String::from_utf8_lossy(&output.stderr));

    let snapshot: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(snapshot["messages"]["hubMessages"][0]["from"], "alice");
    assert_eq!(snapshot["messages"]["hubMessages"][0]["previousSenderSame"], false);
    assert_eq!(snapshot["searches"]["doc pdf"][0], "H1");
    assert_eq!(snapshot["files"]["H1"]["size"], 100);
    assert_eq!(snapshot["users"]["u1"]["freeSlots"], 1);
    assert_eq!(snapshot["tabs"]["focused"]["key"], "hub");
}

#[test]
fn stops_at_first_bad_line() {
    let input = concat!(
        r#"{"type":"NEW_SEARCH","payload":{"queryText":"iso"}}"#,
        "\n",
        r#"{"type":"FOCUS_TAB","payload":{"tabType":"search","key":"missing"}}"#,
        "\n",
    );
    let output = replay(input, &[]);
    assert!(!output.status.success());
    assert!(output.stdout.is_empty());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("line 2"), "stderr: {stderr}");
    assert!(stderr.contains("doesn't exist"), "stderr: {stderr}");
}

#[test]
fn rejects_undecodable_events() {
    let output = replay("{\"type\":\"SHRUG\"}\n", &[]);
    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("line 1"));
}

#[test]
fn reads_config_file_argument() {
    let dir = tempfile::tempdir().unwrap();
    let config = dir.path().join("config.toml");
    std::fs::write(&config, "time_format = \"%H:%M\"\n").unwrap();

    let output = replay("", &[config.to_str().unwrap()]);
    assert!(output.status.success());

    let missing = dir.path().join("absent.toml");
    let output = replay("", &[missing.to_str().unwrap()]);
    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("config"));
}

#[test]
fn stamps_messages_sent_without_time() {
    let dir = tempfile::tempdir().unwrap();
    let config = dir.path().join("config.toml");
    std::fs::write(&config, "time_format = \"%H:%M\"\n").unwrap();

    let input = concat!(
        r#"{"type":"RECEIVE_MESSAGE","payload":{"from":"alice","text":"hi"}}"#,
        "\n",
        r#"{"type":"RECEIVE_PRIVATE_MESSAGE","payload":{"from":"bob","text":"yo","time":"8:30 PM"}}"#,
        "\n",
    );
    let output = replay(input, &[config.to_str().unwrap()]);
    assert!(output.status.success(), "stderr: {}", String::from_utf8_lossy(&output.stderr));

    let snapshot: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    let time = snapshot["messages"]["hubMessages"][0]["time"].as_str().unwrap();
    assert_eq!(time.len(), 5, "time: {time}");
    assert_eq!(&time[2..3], ":");
    assert_eq!(snapshot["messages"]["privateMessages"]["bob"][0]["time"], "8:30 PM");
}
