use std::io::Write;
use std::process::Command;

use serde_json::Value;

fn cli() -> Command {
    Command::new(env!("CARGO_BIN_EXE_hal_cli"))
}

fn stdout_json(output: &std::process::Output) -> Value {
    let stdout = String::from_utf8(output.stdout.clone()).expect("stdout utf8");
    serde_json::from_str(&stdout).unwrap_or_else(|err| panic!("invalid JSON {stdout}: {err}"))
}

#[test]
fn info_prints_module_descriptor() {
    let output = cli().arg("info").output().expect("info command");
    assert!(output.status.success());

    let json = stdout_json(&output);
    assert_eq!(json["tag"], 0x4D4F4455u32);
    assert_eq!(json["id"], "audio");
    assert_eq!(json["version_major"], 1);
}

#[test]
fn trigger_reports_statuses_and_telemetry() {
    let output = cli()
        .args(["trigger", "--count", "3", "--buffer-size", "256"])
        .output()
        .expect("trigger command");
    assert!(
        output.status.success(),
        "trigger exited with {:?}",
        output.status.code()
    );

    let json = stdout_json(&output);
    assert_eq!(json["statuses"], serde_json::json!([0, 0, 0]));
    assert_eq!(json["telemetry"]["bytes_written"], 768);
}

#[test]
fn trigger_with_unsupported_interface_fails() {
    let output = cli()
        .args(["trigger", "--interface", "secondary"])
        .output()
        .expect("trigger command");
    assert_eq!(output.status.code(), Some(2));

    let json = stdout_json(&output);
    assert_eq!(json["statuses"], serde_json::json!([-22]));
}

#[test]
fn trigger_reads_config_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(file, r#"{{"bridge":{{"buffer_size":32}}}}"#).unwrap();

    let output = cli()
        .args(["--config", file.path().to_str().unwrap(), "trigger"])
        .output()
        .expect("trigger command");
    assert!(output.status.success());

    let json = stdout_json(&output);
    assert_eq!(json["telemetry"]["bytes_written"], 32);
}

#[test]
fn open_cycle_echoes_bytes() {
    let output = cli()
        .args(["open", "--interface", "primary", "--bytes", "1024"])
        .output()
        .expect("open command");
    assert!(output.status.success());

    let json = stdout_json(&output);
    assert_eq!(json["open_status"], 0);
    assert_eq!(json["write_result"], 1024);
    assert_eq!(json["close_status"], 0);
}

#[test]
fn open_secondary_reports_invalid_argument() {
    let output = cli()
        .args(["open", "--interface", "secondary"])
        .output()
        .expect("open command");
    assert_eq!(output.status.code(), Some(2));

    let json = stdout_json(&output);
    assert_eq!(json["open_status"], -22);
    assert!(json["write_result"].is_null());
}
