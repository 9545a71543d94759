use assert_cmd::cargo::cargo_bin_cmd;
use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

/// Command with XDG dirs pointed at a scratch dir and no inherited SITEBASE_* variables.
fn sitebase(home: &TempDir) -> Command {
    let mut cmd = cargo_bin_cmd!("sitebase");
    cmd.env("HOME", home.path())
        .env("XDG_CONFIG_HOME", home.path().join("config"))
        .env("XDG_STATE_HOME", home.path().join("state"))
        .env_remove("SITEBASE_PATH")
        .env_remove("SITEBASE_PLACEHOLDER")
        .env_remove("SITEBASE_ON_INVALID_UTF8")
        .env_remove("SITEBASE_CONFIG")
        .env_remove("RUST_LOG");
    cmd
}

fn write_config(home: &TempDir, body: &str) {
    let dir = home.path().join("config").join("sitebase");
    fs::create_dir_all(&dir).unwrap();
    fs::write(dir.join("config.toml"), body).unwrap();
}

#[test]
fn test_filter_with_path_argument() {
    let home = TempDir::new().unwrap();
    sitebase(&home)
        .args(["--path", "/srv/site/images/"])
        .write_stdin("Image: {{sitebaseurl}}logo.png")
        .assert()
        .success()
        .stdout("Image: /srv/site/images/logo.png");
}

#[test]
fn test_filter_with_env_var() {
    let home = TempDir::new().unwrap();
    sitebase(&home)
        .env("SITEBASE_PATH", "/p/")
        .write_stdin("{{sitebaseurl}}a\n{{sitebaseurl}}b\n{{sitebaseurl}}c\n")
        .assert()
        .success()
        .stdout("/p/a\n/p/b\n/p/c\n");
}

#[test]
fn test_argument_beats_env_beats_config() {
    let home = TempDir::new().unwrap();
    write_config(&home, "replacement_path = \"/from/config/\"\n");

    sitebase(&home)
        .write_stdin("{{sitebaseurl}}")
        .assert()
        .success()
        .stdout("/from/config/");

    sitebase(&home)
        .env("SITEBASE_PATH", "/from/env/")
        .write_stdin("{{sitebaseurl}}")
        .assert()
        .success()
        .stdout("/from/env/");

    sitebase(&home)
        .env("SITEBASE_PATH", "/from/env/")
        .args(["--path", "/from/arg/"])
        .write_stdin("{{sitebaseurl}}")
        .assert()
        .success()
        .stdout("/from/arg/");
}

#[test]
fn test_empty_input() {
    let home = TempDir::new().unwrap();
    sitebase(&home)
        .args(["--path", "/p/"])
        .write_stdin("")
        .assert()
        .success()
        .stdout("");
}

#[test]
fn test_no_token_passes_through() {
    let home = TempDir::new().unwrap();
    let input = "no placeholders here, only {braces} and ünïcödé\n\n";
    sitebase(&home)
        .args(["--path", "/p/"])
        .write_stdin(input)
        .assert()
        .success()
        .stdout(input);
}

#[test]
fn test_invalid_utf8_passes_through_raw() {
    let home = TempDir::new().unwrap();
    let output = sitebase(&home)
        .args(["--path", "/p/"])
        .write_stdin(b"caf\xe9 {{sitebaseurl}}x \xff".to_vec())
        .output()
        .unwrap();
    assert!(output.status.success());
    assert_eq!(output.stdout, b"caf\xe9 /p/x \xff");
}

#[test]
fn test_invalid_utf8_lossy() {
    let home = TempDir::new().unwrap();
    sitebase(&home)
        .args(["--path", "/p/", "--on-invalid-utf8", "lossy"])
        .write_stdin(b"caf\xe9 {{sitebaseurl}}x".to_vec())
        .assert()
        .success()
        .stdout("caf\u{FFFD} /p/x");
}

#[test]
fn test_custom_placeholder_from_config() {
    let home = TempDir::new().unwrap();
    write_config(
        &home,
        "replacement_path = \"/root/\"\nplaceholder = \"%ROOT%\"\n",
    );
    sitebase(&home)
        .write_stdin("%ROOT%a {{sitebaseurl}}b")
        .assert()
        .success()
        .stdout("/root/a {{sitebaseurl}}b");
}

#[test]
fn test_missing_path_fails() {
    let home = TempDir::new().unwrap();
    sitebase(&home)
        .write_stdin("{{sitebaseurl}}")
        .assert()
        .failure()
        .code(1)
        .stdout("")
        .stderr(predicate::str::contains("no replacement path configured"));
}

#[test]
fn test_explicit_config_missing_fails() {
    let home = TempDir::new().unwrap();
    sitebase(&home)
        .args(["--path", "/p/", "--config"])
        .arg(home.path().join("absent.toml"))
        .write_stdin("x")
        .assert()
        .failure()
        .stderr(predicate::str::contains("read config"));
}

#[test]
fn test_filter_writes_log_file_not_stdout() {
    let home = TempDir::new().unwrap();
    sitebase(&home)
        .args(["--path", "/p/"])
        .write_stdin("{{sitebaseurl}}")
        .assert()
        .success()
        .stdout("/p/");
    let log = home.path().join("state").join("sitebase").join("sitebase.log");
    let contents = fs::read_to_string(log).unwrap();
    assert!(contents.contains("filter complete"));
}

#[test]
fn test_show_config() {
    let home = TempDir::new().unwrap();
    sitebase(&home)
        .args(["show-config", "--path", "/p/"])
        .assert()
        .success()
        .stdout(predicate::str::contains("replacement_path = "))
        .stdout(predicate::str::contains("/p/"))
        .stdout(predicate::str::contains("{{sitebaseurl}}"))
        .stdout(predicate::str::contains("on_invalid_utf8 = "))
        .stdout(predicate::str::contains("(not found)"));
}

#[test]
fn test_completions_bash() {
    let home = TempDir::new().unwrap();
    sitebase(&home)
        .args(["completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("sitebase"));
}

#[test]
fn test_man_page() {
    let home = TempDir::new().unwrap();
    sitebase(&home)
        .arg("man")
        .assert()
        .success()
        .stdout(predicate::str::contains(".TH"));
}

#[test]
fn test_cli_help() {
    let home = TempDir::new().unwrap();
    sitebase(&home)
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("--path"))
        .stdout(predicate::str::contains("show-config"));
}
