use assert_cmd::prelude::*;
use predicates::prelude::*;
use std::io::Write;
use std::process::Command;
use tempfile::NamedTempFile;

fn users_json() -> &'static str {
    "{\"users\": [{\"id\": 1, \"name\": \"Alice\"}, {\"id\": 2, \"name\": \"Bob\"}]}"
}

#[test]
fn help_lists_subcommands() -> Result<(), Box<dyn std::error::Error>> {
    let output = Command::new(assert_cmd::cargo::cargo_bin!("toonpack-cli"))
        .arg("--help")
        .output()?;
    assert!(output.status.success());
    let out = String::from_utf8(output.stdout)?;
    assert!(out.contains("encode"));
    assert!(out.contains("compare"));
    assert!(out.contains("llm-bench"));
    Ok(())
}

#[test]
fn encode_file_produces_tabular_toon() -> Result<(), Box<dyn std::error::Error>> {
    let mut tmp = NamedTempFile::new()?;
    write!(tmp, "{}", users_json())?;

    let output = Command::new(assert_cmd::cargo::cargo_bin!("toonpack-cli"))
        .arg("encode")
        .arg(tmp.path())
        .output()?;
    assert!(output.status.success());
    let out = String::from_utf8(output.stdout)?;
    assert_eq!(out, "users:\n  [2,]{id,name}:\n    1,Alice\n    2,Bob\n");
    Ok(())
}

#[test]
fn encode_reads_stdin() {
    assert_cmd::Command::new(assert_cmd::cargo::cargo_bin!("toonpack-cli"))
        .arg("encode")
        .write_stdin("{\"a\": 1, \"tags\": [\"x\", \"y\"]}")
        .assert()
        .success()
        .stdout("a: 1\ntags: [2]: x,y\n");
}

#[test]
fn encode_flags_change_output() -> Result<(), Box<dyn std::error::Error>> {
    let mut tmp = NamedTempFile::new()?;
    write!(tmp, "{}", "[{\"id\": 1, \"name\": \"Alice\"}, {\"id\": 2, \"name\": \"Bob\"}]")?;

    let output = Command::new(assert_cmd::cargo::cargo_bin!("toonpack-cli"))
        .arg("encode")
        .arg("--delimiter")
        .arg("pipe")
        .arg("--length-marker")
        .arg("#")
        .arg("--indent")
        .arg("4")
        .arg(tmp.path())
        .output()?;
    assert!(output.status.success());
    let out = String::from_utf8(output.stdout)?;
    assert_eq!(out, "[#2|]{id|name}:\n    1|Alice\n    2|Bob\n");
    Ok(())
}

#[test]
fn encode_rejects_invalid_json() -> Result<(), Box<dyn std::error::Error>> {
    let mut tmp = NamedTempFile::new()?;
    write!(tmp, "not json at all")?;

    let output = Command::new(assert_cmd::cargo::cargo_bin!("toonpack-cli"))
        .arg("encode")
        .arg(tmp.path())
        .output()?;
    assert!(!output.status.success());
    Ok(())
}

#[test]
fn encode_rejects_unknown_delimiter() {
    // clap rejects the value before stdin is ever read.
    assert_cmd::Command::new(assert_cmd::cargo::cargo_bin!("toonpack-cli"))
        .arg("encode")
        .arg("--delimiter")
        .arg("semicolon")
        .assert()
        .failure();
}

#[test]
fn encode_enforces_max_depth() {
    assert_cmd::Command::new(assert_cmd::cargo::cargo_bin!("toonpack-cli"))
        .arg("encode")
        .arg("--max-depth")
        .arg("1")
        .write_stdin("{\"a\": {\"b\": 1}}")
        .assert()
        .failure()
        .stderr(predicate::str::contains("maximum depth"));
}

#[test]
fn compare_runs_without_network() {
    assert_cmd::Command::new(assert_cmd::cargo::cargo_bin!("toonpack-cli"))
        .arg("compare")
        .assert()
        .success()
        .stdout(predicate::str::contains("estimated at four characters per token"))
        .stdout(predicate::str::contains("Dataset: Small user dataset (5 users)"))
        .stdout(predicate::str::contains("JSON (Pretty)"))
        .stdout(predicate::str::contains("TOON (Comma)"))
        .stdout(predicate::str::contains("Token reduction:"))
        .stdout(predicate::str::contains("Summary"));
}

#[test]
fn compare_accepts_a_file() -> Result<(), Box<dyn std::error::Error>> {
    let mut tmp = NamedTempFile::new()?;
    write!(tmp, "{}", users_json())?;

    let output = Command::new(assert_cmd::cargo::cargo_bin!("toonpack-cli"))
        .arg("compare")
        .arg("--file")
        .arg(tmp.path())
        .output()?;
    assert!(output.status.success());
    let out = String::from_utf8(output.stdout)?;
    assert!(out.contains("[2,]{id,name}:"));
    assert!(!out.contains("Small user dataset"));
    Ok(())
}

#[test]
fn llm_bench_degrades_without_server() {
    // Port 9 is the discard service, nothing should answer there.
    assert_cmd::Command::new(assert_cmd::cargo::cargo_bin!("toonpack-cli"))
        .arg("llm-bench")
        .arg("--host")
        .arg("http://127.0.0.1:9")
        .assert()
        .success()
        .stdout(predicate::str::contains("Ollama is not reachable"));
}
