//! End-to-end tests for the `topshop` binary.

use std::fs;

use assert_cmd::cargo::cargo_bin_cmd;
use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn topshop() -> Command {
    let mut cmd = cargo_bin_cmd!("topshop");
    cmd.env_remove("RUST_LOG");
    cmd
}

/// A directory holding a `topshop.toml` with a greeting that needs escaping.
fn project_with_quoted_greeting() -> TempDir {
    let dir = TempDir::new().unwrap();
    fs::write(
        dir.path().join("topshop.toml"),
        "[session]\ngreeting = 'Say \"hi\"'\n",
    )
    .unwrap();
    dir
}

mod config_errors {
    use super::*;

    #[test]
    fn test_missing_config_file_is_reported_and_exits_1() {
        let dir = TempDir::new().unwrap();
        let missing = dir.path().join("missing.toml");

        topshop()
            .arg("--config")
            .arg(&missing)
            .args(["config", "show"])
            .assert()
            .failure()
            .code(1)
            .stderr(predicate::str::contains("Failed to read config file"))
            .stderr(predicate::str::contains("Error:").not());
    }

    #[test]
    fn test_missing_config_file_in_json_mode() {
        let dir = TempDir::new().unwrap();
        let missing = dir.path().join("missing.toml");

        let assert = topshop()
            .arg("--json")
            .arg("--config")
            .arg(&missing)
            .args(["config", "show"])
            .assert()
            .failure()
            .code(1);

        let stderr = String::from_utf8_lossy(&assert.get_output().stderr).into_owned();
        let line = stderr
            .lines()
            .find(|l| l.contains("\"error\""))
            .expect("error line on stderr");
        let report: serde_json::Value = serde_json::from_str(line).unwrap();
        assert!(report["error"]
            .as_str()
            .unwrap()
            .starts_with("Failed to read config file"));
    }

    #[test]
    fn test_unparseable_config_file_exits_1() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("topshop.toml"), "[catalog\n").unwrap();

        topshop()
            .current_dir(dir.path())
            .args(["config", "show"])
            .assert()
            .failure()
            .code(1)
            .stderr(predicate::str::contains("Failed to parse TOML config"));
    }
}

mod config_get {
    use super::*;

    #[test]
    fn test_get_prints_valid_json_string() {
        let dir = project_with_quoted_greeting();

        let assert = topshop()
            .current_dir(dir.path())
            .args(["config", "get", "session.greeting"])
            .assert()
            .success();

        let stdout = String::from_utf8_lossy(&assert.get_output().stdout).into_owned();
        let greeting: String = serde_json::from_str(stdout.trim()).unwrap();
        assert_eq!(greeting, "Say \"hi\"");
    }

    #[test]
    fn test_get_in_json_mode_is_one_document() {
        let dir = project_with_quoted_greeting();

        let assert = topshop()
            .current_dir(dir.path())
            .args(["--json", "config", "get", "session.greeting"])
            .assert()
            .success();

        let stdout = String::from_utf8_lossy(&assert.get_output().stdout).into_owned();
        let doc: serde_json::Value = serde_json::from_str(stdout.trim()).unwrap();
        assert_eq!(doc["key"], "session.greeting");
        assert_eq!(doc["value"], "Say \"hi\"");
    }

    #[test]
    fn test_unknown_key_exits_1() {
        let dir = project_with_quoted_greeting();

        topshop()
            .current_dir(dir.path())
            .args(["config", "get", "catalog.nope"])
            .assert()
            .failure()
            .code(1)
            .stderr(predicate::str::contains("Unknown config key: catalog.nope"));
    }
}
