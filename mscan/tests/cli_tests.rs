//! End-to-end tests for the mscan binary.

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

fn fixtures_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
}

fn mscan_bin() -> PathBuf {
    PathBuf::from(env!("CARGO_BIN_EXE_mscan"))
}

fn mscan() -> Command {
    let mut cmd = Command::new(mscan_bin());
    cmd.env_remove("MSCAN_CONFIG")
        .env_remove("MSCAN_VERBOSE")
        .env("MSCAN_NO_COLOR", "true");
    cmd
}

#[test]
fn test_help() {
    mscan()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Usage"));
}

#[test]
fn test_version() {
    mscan()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn test_scan_fixture() {
    mscan()
        .arg("scan")
        .arg(fixtures_dir().join("factorial.mc"))
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Token docstringcomment (  54,  Computes n factorial. )",
        ))
        .stdout(predicate::str::contains("Token     %ident (   4,         fact )"))
        .stdout(predicate::str::contains("Token %real_number (  52,   250.000000)"))
        .stdout(predicate::str::contains("Token    %number (   5,          120 )"))
        .stdout(predicate::str::contains("Token         && (   6,            0 )"))
        .stdout(predicate::str::ends_with("Token        eof (  29,            0 )\n"));
}

#[test]
fn test_scan_stdin() {
    mscan()
        .arg("scan")
        .write_stdin("x <= 10;")
        .assert()
        .success()
        .stdout(
            "Token     %ident (   4,            x )\n\
             Token         <= (  22,            0 )\n\
             Token    %number (   5,           10 )\n\
             Token          ; (  20,            0 )\n\
             Token        eof (  29,            0 )\n",
        );
}

#[test]
fn test_scan_stdin_dash() {
    mscan()
        .args(["scan", "-"])
        .write_stdin("while")
        .assert()
        .success()
        .stdout(predicate::str::contains("Token      while (  36,            0 )"));
}

#[test]
fn test_scan_reports_errors() {
    mscan()
        .arg("scan")
        .arg(fixtures_dir().join("errors.mc"))
        .assert()
        .failure()
        .stdout(predicate::str::contains("Token     %ident (   4,            c )"))
        .stdout(predicate::str::contains("eof"))
        .stderr(predicate::str::contains(
            "error[E0002]: next character must be & (at 1:11)",
        ))
        .stderr(predicate::str::contains("error[E0003]: next character must be |"))
        .stderr(predicate::str::contains("error[E0004]: invalid character '$' (at 3:1)"))
        .stderr(predicate::str::contains("3 error(s) reported"));
}

#[test]
fn test_scan_json() {
    let output = mscan()
        .args(["scan", "--format", "json"])
        .write_stdin("int n = 3;")
        .output()
        .unwrap();
    assert!(output.status.success());

    let stdout = String::from_utf8(output.stdout).unwrap();
    let lines: Vec<&str> = stdout.lines().collect();
    assert_eq!(lines.len(), 6);
    assert_eq!(lines[0], r#"{"kind":"int","number":33}"#);
    assert_eq!(lines[3], r#"{"kind":"%number","number":5,"value":3}"#);
    assert_eq!(lines[5], r#"{"kind":"eof","number":29}"#);
}

#[test]
fn test_scan_unknown_format() {
    mscan()
        .args(["scan", "--format", "xml"])
        .write_stdin("")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unknown output format 'xml'"));
}

#[test]
fn test_scan_missing_file() {
    mscan()
        .args(["scan", "/nonexistent/prog.mc"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Cannot open /nonexistent/prog.mc"));
}

#[test]
fn test_scan_to_output_file() {
    let temp_dir = TempDir::new().unwrap();
    let out_path = temp_dir.path().join("tokens.txt");

    mscan()
        .args(["scan", "-o"])
        .arg(&out_path)
        .write_stdin("a;")
        .assert()
        .success()
        .stdout(predicate::str::is_empty());

    let listing = fs::read_to_string(&out_path).unwrap();
    assert_eq!(listing.lines().count(), 3);
    assert!(listing.contains("%ident"));
}

#[test]
fn test_scan_skip_comments() {
    mscan()
        .args(["scan", "--skip-comments"])
        .write_stdin("// note\n/* block */ x")
        .assert()
        .success()
        .stdout(predicate::str::contains("comment").not())
        .stdout(predicate::str::contains("%ident"));
}

#[test]
fn test_scan_relaxed_exponents() {
    mscan()
        .args(["scan"])
        .write_stdin("x = 1e3 ")
        .assert()
        .failure()
        .stderr(predicate::str::contains("E0008"));

    mscan()
        .args(["scan", "--relaxed-exponents"])
        .write_stdin("x = 1e3 ")
        .assert()
        .success()
        .stdout(predicate::str::contains("1000.000000"));
}

#[test]
fn test_config_file_settings() {
    let temp_dir = TempDir::new().unwrap();
    let config_path = temp_dir.path().join("mscan.toml");
    fs::write(
        &config_path,
        "[scanner]\nmax_identifier_len = 3\n\n[output]\nformat = \"json\"\n",
    )
    .unwrap();

    mscan()
        .arg("--config")
        .arg(&config_path)
        .arg("scan")
        .write_stdin("abcdef")
        .assert()
        .failure()
        .stdout(predicate::str::contains(r#""value":"abc""#))
        .stderr(predicate::str::contains("E0001"));
}

#[test]
fn test_missing_config_file() {
    mscan()
        .args(["--config", "/nonexistent/mscan.toml", "keywords"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Cannot read"));
}

#[test]
fn test_keywords() {
    mscan()
        .arg("keywords")
        .assert()
        .success()
        .stdout(predicate::str::starts_with("const 30\nelse 31\nif 32\n"))
        .stdout(predicate::str::contains("break 48"));
}

#[test]
fn test_config_write_and_show() {
    let temp_dir = TempDir::new().unwrap();
    let config_path = temp_dir.path().join("mscan.toml");

    mscan()
        .current_dir(temp_dir.path())
        .args(["config", "--write"])
        .arg(&config_path)
        .assert()
        .success();

    let written = fs::read_to_string(&config_path).unwrap();
    assert!(written.contains("max_identifier_len = 11"));

    mscan()
        .current_dir(temp_dir.path())
        .arg("config")
        .assert()
        .success()
        .stdout(predicate::str::contains("strict_exponent_suffix = true"));
}
