// crates/parse_envi_hdr/tests/cli.rs

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

const FIELD_HEADER: &str = "ENVI
samples = 640
lines = 480
bands = 3
data type = 12
interleave = bil
byte order = 0
wavelength = {
  400.1,
  410.2,
  420.3
}
";

fn write_header(dir: &TempDir, name: &str, content: &str) -> String {
    let path = dir.path().join(name);
    fs::write(&path, content).expect("Failed to write header");
    path.to_str().unwrap().to_string()
}

fn cmd() -> Command {
    let mut cmd = Command::cargo_bin("parse_envi_hdr").unwrap();
    cmd.env_remove("ENVI_HDR_PATH").env_remove("RUST_LOG");
    cmd
}

#[test]
fn test_prints_wavelengths_for_explicit_path() {
    let dir = TempDir::new().unwrap();
    let header = write_header(&dir, "scan.hdr", FIELD_HEADER);

    cmd().arg(&header).assert().success().stdout("400.1\n410.2\n420.3\n");
}

#[test]
fn test_reference_document_drops_closing_line() {
    let dir = TempDir::new().unwrap();
    let header = write_header(
        &dir,
        "scan.hdr",
        "header\nwavelength = {\n400.1,\n410.2,\n420.3\n}",
    );

    cmd().arg(&header).assert().success().stdout("400.1\n410.2\n420.3\n");
}

#[test]
fn test_default_policy_drops_value_when_file_ends_without_brace() {
    let dir = TempDir::new().unwrap();
    let header = write_header(&dir, "scan.hdr", "header\nwavelength = {\n400.1,\n410.2,\n420.3");

    cmd().arg(&header).assert().success().stdout("400.1\n410.2\n");
}

#[test]
fn test_until_brace_keeps_last_value() {
    let dir = TempDir::new().unwrap();
    let header = write_header(&dir, "scan.hdr", "header\nwavelength = {\n400.1,\n410.2,\n420.3\n}\n\n");

    cmd()
        .arg(&header)
        .arg("--until-brace")
        .assert()
        .success()
        .stdout("400.1\n410.2\n420.3\n");
}

#[test]
fn test_missing_marker_fails_without_output() {
    let dir = TempDir::new().unwrap();
    let header = write_header(&dir, "scan.hdr", "ENVI\nsamples = 1\nlines = 1\nbands = 1\n");

    cmd()
        .arg(&header)
        .assert()
        .failure()
        .code(1)
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("not found in header"));
}

#[test]
fn test_prompts_for_replacement_path() {
    let dir = TempDir::new().unwrap();
    let header = write_header(&dir, "scan.hdr", FIELD_HEADER);
    let missing = dir.path().join("missing.hdr");

    cmd()
        .arg(missing.to_str().unwrap())
        .write_stdin(format!("{}\n", header))
        .assert()
        .success()
        .stdout("400.1\n410.2\n420.3\n")
        .stderr(predicate::str::contains("Filename not valid"))
        .stderr(predicate::str::contains("Enter filename: "));
}

#[test]
fn test_closed_stdin_ends_the_prompt_loop() {
    let dir = TempDir::new().unwrap();
    let missing = dir.path().join("missing.hdr");

    cmd()
        .arg(missing.to_str().unwrap())
        .write_stdin("")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Filename prompt closed"));
}

#[test]
fn test_non_interactive_fails_fast() {
    let dir = TempDir::new().unwrap();
    let missing = dir.path().join("missing.hdr");

    cmd()
        .arg(missing.to_str().unwrap())
        .arg("--non-interactive")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Error opening file"))
        .stderr(predicate::str::contains("Enter filename:").not());
}

#[test]
fn test_max_retries_gives_up() {
    let dir = TempDir::new().unwrap();
    let missing = dir.path().join("missing.hdr");

    cmd()
        .arg(missing.to_str().unwrap())
        .args(["--max-retries", "1"])
        .write_stdin("also_missing.hdr\nstill_missing.hdr\n")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Gave up after 1 replacement filename(s)"));
}

#[test]
fn test_environment_path_is_used() {
    let dir = TempDir::new().unwrap();
    let header = write_header(&dir, "env.hdr", FIELD_HEADER);

    cmd()
        .env("ENVI_HDR_PATH", &header)
        .assert()
        .success()
        .stdout("400.1\n410.2\n420.3\n");
}

#[test]
fn test_default_path_in_working_directory() {
    let dir = TempDir::new().unwrap();
    write_header(&dir, "data.hdr", FIELD_HEADER);

    cmd()
        .current_dir(dir.path())
        .assert()
        .success()
        .stdout("400.1\n410.2\n420.3\n");
}

#[test]
fn test_info_prints_summary_then_wavelengths() {
    let dir = TempDir::new().unwrap();
    let header = write_header(&dir, "scan.hdr", FIELD_HEADER);

    cmd()
        .arg(&header)
        .arg("--info")
        .assert()
        .success()
        .stdout(predicate::str::starts_with("DataType: 12\nEndianness: 0\nInterleave: BIL\n"))
        .stdout(predicate::str::contains("Samples (Width): 640\n"))
        .stdout(predicate::str::contains("Band ID count: 3\n"))
        .stdout(predicate::str::ends_with("    2: 420.3\n400.1\n410.2\n420.3\n"));
}

#[test]
fn test_info_rejects_non_envi_header() {
    let dir = TempDir::new().unwrap();
    let header = write_header(&dir, "scan.hdr", "header\nwavelength = {\n400.1,\n}\n");

    cmd()
        .arg(&header)
        .arg("--info")
        .assert()
        .failure()
        .stderr(predicate::str::contains("not an ENVI header"));
}
