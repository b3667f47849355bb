use assert_cmd::Command;
use predicates::prelude::*;
use std::io::Write;
use tempfile::{tempdir, Builder};

const TRIVIAL_CONFIG: &str = r#"{
    "recipes": [
        { "m": "Electrolyzer", "tier": "LV", "inputs": {"water": 1000}, "outputs": {"hydrogen": 1000}, "dur": 20, "eut": 8 }
    ],
    "targets": { "hydrogen": 500.0 }
}"#;

const UNREACHABLE_CONFIG: &str = r#"{
    "recipes": [],
    "targets": { "gold": 1.0 }
}"#;

fn write_json_fixture(contents: &str) -> tempfile::NamedTempFile {
    let mut file = Builder::new().suffix(".json").tempfile().unwrap();
    file.write_all(contents.as_bytes()).unwrap();
    file
}

#[test]
fn solves_trivial_config_and_prints_dot_to_stdout() {
    let fixture = write_json_fixture(TRIVIAL_CONFIG);
    let mut cmd = Command::cargo_bin("factoryplan").unwrap();
    cmd.arg(fixture.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("digraph"))
        .stdout(predicate::str::contains("hydrogen"));
}

#[test]
fn writes_dot_to_output_file_when_requested() {
    let fixture = write_json_fixture(TRIVIAL_CONFIG);
    let out_dir = tempdir().unwrap();
    let out_path = out_dir.path().join("plan.dot");

    let mut cmd = Command::cargo_bin("factoryplan").unwrap();
    cmd.arg(fixture.path())
        .arg("--output")
        .arg(&out_path)
        .assert()
        .success();

    let contents = std::fs::read_to_string(&out_path).unwrap();
    assert!(contents.contains("digraph"));
}

#[test]
fn unreachable_target_exits_nonzero() {
    let fixture = write_json_fixture(UNREACHABLE_CONFIG);
    let mut cmd = Command::cargo_bin("factoryplan").unwrap();
    cmd.arg(fixture.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("target unreachable"));
}

#[test]
fn missing_file_exits_nonzero() {
    let mut cmd = Command::cargo_bin("factoryplan").unwrap();
    cmd.arg("/nonexistent/path.json").assert().failure();
}
