mod fixtures;

use std::fs;
use std::process::{Command, Output};

use fixtures::{copy_package, go_fixture_path, read_fixture};
use pretty_assertions::assert_eq;
use tempfile::TempDir;

fn gotestskipper(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_gotestskipper"))
        .args(args)
        .env_remove("RUST_LOG")
        .output()
        .expect("Failed to execute command")
}

#[test]
fn test_cli_help() {
    let output = gotestskipper(&["--help"]);

    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    assert!(stdout.contains("gotestskipper"));
    assert!(stdout.contains("--write"));
    assert!(stdout.contains("--unskip"));
    assert!(stdout.contains("--test-import"));
}

#[test]
fn test_cli_no_paths_is_usage_error() {
    let output = gotestskipper(&[]);

    assert_eq!(output.status.code(), Some(2));
    assert!(output.stdout.is_empty());
    let stderr = String::from_utf8(output.stderr).unwrap();
    assert!(stderr.contains("Usage"));
}

#[test]
fn test_cli_file_to_stdout() {
    let file = go_fixture_path(Some("calc/calc_test.go"));
    let output = gotestskipper(&[file.to_str().unwrap()]);

    assert!(output.status.success());
    assert_eq!(
        String::from_utf8(output.stdout).unwrap(),
        read_fixture("golden/calc_test.go.skipped")
    );
    assert_eq!(fs::read_to_string(&file).unwrap(), read_fixture("calc/calc_test.go"));
}

#[test]
fn test_cli_write_then_unskip() {
    let temp_dir = TempDir::new().unwrap();
    let package = copy_package("calc", temp_dir.path());
    let package_arg = package.to_str().unwrap();

    let output = gotestskipper(&["-w", package_arg]);
    assert!(output.status.success());
    assert!(output.stdout.is_empty());
    assert_eq!(
        fs::read_to_string(package.join("calc_test.go")).unwrap(),
        read_fixture("golden/calc_test.go.skipped")
    );
    assert_eq!(
        fs::read_to_string(package.join("calc.go")).unwrap(),
        read_fixture("calc/calc.go")
    );
    assert_eq!(
        fs::read_to_string(package.join("notes.txt")).unwrap(),
        read_fixture("calc/notes.txt")
    );

    let output = gotestskipper(&["-w", "-u", package_arg]);
    assert!(output.status.success());
    assert_eq!(
        fs::read_to_string(package.join("calc_test.go")).unwrap(),
        read_fixture("calc/calc_test.go")
    );
}

#[test]
fn test_cli_directory_to_stdout_in_name_order() {
    let package = go_fixture_path(Some("calc"));
    let output = gotestskipper(&[package.to_str().unwrap()]);

    assert!(output.status.success());
    let expected = read_fixture("calc/calc.go") + &read_fixture("golden/calc_test.go.skipped");
    assert_eq!(String::from_utf8(output.stdout).unwrap(), expected);
}

#[test]
fn test_cli_missing_path_does_not_stop_others() {
    let temp_dir = TempDir::new().unwrap();
    let missing = temp_dir.path().join("missing_test.go");
    let good = go_fixture_path(Some("calc/calc_test.go"));

    let output = gotestskipper(&[missing.to_str().unwrap(), good.to_str().unwrap()]);

    assert_eq!(output.status.code(), Some(2));
    assert_eq!(
        String::from_utf8(output.stdout).unwrap(),
        read_fixture("golden/calc_test.go.skipped")
    );
    let stderr = String::from_utf8(output.stderr).unwrap();
    assert!(stderr.contains("missing_test.go"));
}

#[test]
fn test_cli_syntax_error_is_reported() {
    let temp_dir = TempDir::new().unwrap();
    let broken = temp_dir.path().join("broken_test.go");
    fs::write(&broken, "package main\n\nfunc TestFoo(t *testing.T) {\n").unwrap();

    let output = gotestskipper(&["-w", broken.to_str().unwrap()]);

    assert_eq!(output.status.code(), Some(2));
    let stderr = String::from_utf8(output.stderr).unwrap();
    assert!(stderr.contains("broken_test.go:"));
    assert_eq!(
        fs::read_to_string(&broken).unwrap(),
        "package main\n\nfunc TestFoo(t *testing.T) {\n"
    );
}

#[test]
fn test_cli_test_import_flag() {
    let file = go_fixture_path(Some("renamed/renamed_test.go"));
    let output = gotestskipper(&["--test-import", "foobar", file.to_str().unwrap()]);

    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    assert!(stdout.contains("func TestNewAlias(t *foobar.T) {\n\tt.Skip()\n"));
    assert!(stdout.contains("func TestOldAlias(t *testing.T) {\n\tt.Log(\"old\")"));
}

#[test]
fn test_cli_config_file() {
    let temp_dir = TempDir::new().unwrap();
    let config = temp_dir.path().join("skipper.json");
    fs::write(&config, r#"{ "test_import": "foobar" }"#).unwrap();
    let file = go_fixture_path(Some("renamed/renamed_test.go"));

    let output = gotestskipper(&["-c", config.to_str().unwrap(), file.to_str().unwrap()]);

    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    assert!(stdout.contains("func TestNewAlias(t *foobar.T) {\n\tt.Skip()\n"));
}

#[test]
fn test_cli_invalid_config() {
    let file = go_fixture_path(Some("calc/calc_test.go"));
    let output = gotestskipper(&["--test-import", "not-an-ident", file.to_str().unwrap()]);

    assert_eq!(output.status.code(), Some(2));
    assert!(output.stdout.is_empty());
    let stderr = String::from_utf8(output.stderr).unwrap();
    assert!(stderr.contains("Invalid configuration"));
}
