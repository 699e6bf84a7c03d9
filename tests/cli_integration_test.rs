//! End-to-end tests for the shroomcheck binary.

use assert_cmd::Command;
use serde_json::Value;
use tempfile::TempDir;

/// Run the binary in an empty directory so no stray config is picked up.
fn shroomcheck(dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("shroomcheck").unwrap();
    cmd.current_dir(dir.path())
        .env("NO_COLOR", "1")
        .env_remove("RUST_LOG")
        .env_remove("SHROOMCHECK_LOCALE");
    cmd
}

fn diagnose_args(codes: [&str; 4]) -> Vec<String> {
    vec![
        "diagnose".into(),
        "--odor".into(),
        codes[0].into(),
        "--gill-size".into(),
        codes[1].into(),
        "--gill-color".into(),
        codes[2].into(),
        "--stalk-root".into(),
        codes[3].into(),
    ]
}

#[test]
fn diagnose_prints_verdict_and_reason() {
    let dir = TempDir::new().unwrap();
    let output = shroomcheck(&dir)
        .args(diagnose_args(["f", "b", "k", "b"]))
        .arg("--plain")
        .output()
        .unwrap();

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Status: POISONOUS"), "{stdout}");
    assert!(stdout.contains("Foul"), "{stdout}");
    assert!(stdout.contains("Disclaimer"), "{stdout}");
}

#[test]
fn diagnose_json_output() {
    let dir = TempDir::new().unwrap();
    let output = shroomcheck(&dir)
        .args(diagnose_args(["none", "broad", "black", "missing"]))
        .args(["--format", "json", "--explain"])
        .output()
        .unwrap();

    assert!(output.status.success());
    let json: Value = serde_json::from_slice(&output.stdout).expect("stdout is JSON");
    assert_eq!(json["result"]["verdict"], "poisonous");
    assert_eq!(json["result"]["rule"], "odorless-missing-root");
    assert_eq!(json["specimen"]["stalk_root"], "missing");
}

#[test]
fn diagnose_rejects_unknown_code() {
    let dir = TempDir::new().unwrap();
    let output = shroomcheck(&dir)
        .args(diagnose_args(["x", "b", "k", "b"]))
        .output()
        .unwrap();

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("unknown odor 'x'"), "{stderr}");
}

#[test]
fn config_file_sets_defaults() {
    let dir = TempDir::new().unwrap();
    std::fs::write(
        dir.path().join(".shroomcheck.toml"),
        "[output]\ndefault_format = \"json\"\nlocale = \"id\"\n",
    )
    .unwrap();

    let output = shroomcheck(&dir)
        .args(diagnose_args(["a", "b", "k", "b"]))
        .output()
        .unwrap();

    assert!(output.status.success());
    let json: Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["verdict_label"], "AMAN");
}

#[test]
fn interactive_reads_answers_from_stdin() {
    let dir = TempDir::new().unwrap();
    let output = shroomcheck(&dir)
        .args(["interactive", "--format", "json"])
        .write_stdin("n\nb\nb\nb\n")
        .output()
        .unwrap();

    assert!(output.status.success());
    let json: Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["result"]["rule"], "odorless-buff-gill");
    assert!(String::from_utf8_lossy(&output.stderr).contains("1. Odor"));
}

#[test]
fn init_writes_config_once() {
    let dir = TempDir::new().unwrap();
    shroomcheck(&dir).arg("init").assert().success();
    assert!(dir.path().join(".shroomcheck.toml").exists());
    shroomcheck(&dir).arg("init").assert().failure();
    shroomcheck(&dir).args(["init", "--force"]).assert().success();
}

#[test]
fn rules_and_traits_listings() {
    let dir = TempDir::new().unwrap();
    let rules = shroomcheck(&dir).arg("rules").output().unwrap();
    assert!(String::from_utf8_lossy(&rules.stdout).contains("odorless-benign -> SAFE"));

    let traits = shroomcheck(&dir).args(["traits", "--locale", "id"]).output().unwrap();
    assert!(String::from_utf8_lossy(&traits.stdout).contains("f - Foul (Busuk)"));
}

#[test]
fn locale_can_come_from_environment() {
    let dir = TempDir::new().unwrap();
    let output = shroomcheck(&dir)
        .env("SHROOMCHECK_LOCALE", "id")
        .args(diagnose_args(["a", "b", "k", "b"]))
        .arg("--plain")
        .output()
        .unwrap();

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Status: AMAN"), "{stdout}");
}

#[test]
fn locale_flag_beats_environment() {
    let dir = TempDir::new().unwrap();
    let output = shroomcheck(&dir)
        .env("SHROOMCHECK_LOCALE", "id")
        .args(["traits", "--locale", "en"])
        .output()
        .unwrap();

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Gill Size"), "{stdout}");
    assert!(!stdout.contains("Ukuran Insang"), "{stdout}");
}

#[test]
fn invalid_config_uses_defaults_instead_of_parent_config() {
    let root = TempDir::new().unwrap();
    std::fs::write(
        root.path().join(".shroomcheck.toml"),
        "[output]\ndefault_format = \"json\"\n",
    )
    .unwrap();
    let child = root.path().join("child");
    std::fs::create_dir(&child).unwrap();
    std::fs::write(child.join(".shroomcheck.toml"), "not = [valid").unwrap();

    let output = shroomcheck(&root)
        .current_dir(&child)
        .args(diagnose_args(["n", "b", "k", "b"]))
        .arg("--plain")
        .output()
        .unwrap();

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Status: SAFE"), "{stdout}");
    assert!(serde_json::from_slice::<Value>(&output.stdout).is_err());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Using defaults"), "{stderr}");
}
