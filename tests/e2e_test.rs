/// End-to-end tests for the CLI
use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;
use serde_json::Value;
use std::fs;
use tempfile::TempDir;

const OLD: &str = "tests/fixtures/old-package.json";
const NEW: &str = "tests/fixtures/new-package.json";

// Exit code tests for CLI
mod exit_code_tests {
    use super::*;

    /// Exit code 0: Success - normal execution
    #[test]
    fn test_exit_code_success() {
        cargo_bin_cmd!("dependency-diff")
            .args([OLD, NEW])
            .assert()
            .code(0);
    }

    /// Exit code 0: --help should return success
    #[test]
    fn test_exit_code_help() {
        cargo_bin_cmd!("dependency-diff").arg("--help").assert().code(0);
    }

    /// Exit code 0: --version should return success
    #[test]
    fn test_exit_code_version() {
        cargo_bin_cmd!("dependency-diff")
            .arg("--version")
            .assert()
            .code(0)
            .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
    }

    /// Exit code 1: changes detected with --fail-on-changes
    #[test]
    fn test_exit_code_changes_detected() {
        cargo_bin_cmd!("dependency-diff")
            .args([OLD, NEW, "--fail-on-changes"])
            .assert()
            .code(1);
    }

    /// Exit code 0: identical manifests with --fail-on-changes
    #[test]
    fn test_exit_code_no_changes_with_fail_on_changes() {
        cargo_bin_cmd!("dependency-diff")
            .args([OLD, OLD, "--fail-on-changes"])
            .assert()
            .code(0);
    }

    /// Exit code 2: Invalid arguments
    #[test]
    fn test_exit_code_invalid_argument() {
        cargo_bin_cmd!("dependency-diff")
            .args([OLD, NEW, "--invalid-option"])
            .assert()
            .code(2);
    }

    /// Exit code 2: Missing manifest argument
    #[test]
    fn test_exit_code_missing_argument() {
        cargo_bin_cmd!("dependency-diff").arg(OLD).assert().code(2);
    }

    /// Exit code 2: Invalid format value
    #[test]
    fn test_exit_code_invalid_format() {
        cargo_bin_cmd!("dependency-diff")
            .args([OLD, NEW, "-f", "invalid_format"])
            .assert()
            .code(2);
    }

    /// Exit code 3: Application error - non-existent manifest
    #[test]
    fn test_exit_code_application_error_nonexistent_manifest() {
        cargo_bin_cmd!("dependency-diff")
            .args([OLD, "/nonexistent/package.json"])
            .assert()
            .code(3)
            .stderr(predicate::str::contains("Manifest file not found"));
    }

    /// Exit code 3: Application error - malformed range of a kept dependency
    #[test]
    fn test_exit_code_application_error_malformed_range() {
        cargo_bin_cmd!("dependency-diff")
            .args([OLD, "tests/fixtures/malformed-range.json"])
            .assert()
            .code(3)
            .stderr(predicate::str::contains("Malformed version range"))
            .stderr(predicate::str::contains("\"latest\""));
    }

    /// Exit code 3: Application error - top-level value is not an object
    #[test]
    fn test_exit_code_application_error_not_an_object() {
        cargo_bin_cmd!("dependency-diff")
            .args([OLD, "tests/fixtures/not-an-object.json"])
            .assert()
            .code(3)
            .stderr(predicate::str::contains("must be an object"));
    }

    /// Exit code 3: Application error - invalid exclude pattern
    #[test]
    fn test_exit_code_application_error_invalid_pattern() {
        cargo_bin_cmd!("dependency-diff")
            .args([OLD, NEW, "-e", "***"])
            .assert()
            .code(3)
            .stderr(predicate::str::contains("only wildcards"));
    }
}

mod output_format_tests {
    use super::*;

    fn json_output(extra: &[&str]) -> Value {
        let output = cargo_bin_cmd!("dependency-diff")
            .args([OLD, NEW])
            .args(extra)
            .output()
            .unwrap();
        assert!(output.status.success());
        serde_json::from_slice(&output.stdout).unwrap()
    }

    #[test]
    fn test_e2e_json_format() {
        let json = json_output(&[]);

        assert_eq!(json["metadata"]["toolName"], "dependency-diff");
        assert_eq!(json["metadata"]["oldManifest"], OLD);
        assert_eq!(json["summary"]["totalChanges"], 8);

        let production = &json["groups"]["production"];
        assert_eq!(production["added"], serde_json::json!(["b"]));
        assert_eq!(production["removed"], serde_json::json!(["a"]));
        assert_eq!(production["upgraded"][0]["name"], "d");
        assert_eq!(production["downgraded"][0]["name"], "e");
        assert_eq!(production["locked"][0]["name"], "f");
        assert_eq!(production["unlocked"][0]["name"], "g");
        assert_eq!(json["groups"]["peer"]["moved"][0]["oldGroups"][0], "production");
        assert_eq!(
            json["groups"]["development"]["upgraded"][0]["newRange"],
            "^20.0.0"
        );

        let groups: Vec<&String> = json["groups"].as_object().unwrap().keys().collect();
        assert_eq!(
            groups,
            vec!["production", "development", "peer", "optional", "bundled"]
        );
    }

    #[test]
    fn test_e2e_exclude_patterns() {
        let json = json_output(&["-e", "@types/*", "-e", "a"]);

        assert_eq!(json["summary"]["totalChanges"], 6);
        assert_eq!(json["groups"]["production"]["removed"], serde_json::json!([]));
        assert_eq!(json["groups"]["development"]["upgraded"], serde_json::json!([]));
    }

    #[test]
    fn test_e2e_unmatched_exclude_pattern_warns() {
        cargo_bin_cmd!("dependency-diff")
            .args([OLD, NEW, "-e", "webpack"])
            .assert()
            .code(0)
            .stderr(predicate::str::contains(
                "Exclude pattern 'webpack' did not match",
            ));
    }

    #[test]
    fn test_e2e_markdown_format() {
        cargo_bin_cmd!("dependency-diff")
            .args([OLD, NEW, "-f", "markdown"])
            .assert()
            .code(0)
            .stdout(predicate::str::starts_with("# Dependency Changes"))
            .stdout(predicate::str::contains("## Production"))
            .stdout(predicate::str::contains("| `d` | `1.2.3` | `2.3.4` |"))
            .stdout(predicate::str::contains("8 change(s) in 3 group(s)."));
    }

    #[test]
    fn test_e2e_markdown_no_changes() {
        cargo_bin_cmd!("dependency-diff")
            .args([OLD, OLD, "-f", "md"])
            .assert()
            .code(0)
            .stdout(predicate::str::contains("No dependency changes detected."));
    }

    #[test]
    fn test_e2e_text_format_is_not_colored_when_piped() {
        cargo_bin_cmd!("dependency-diff")
            .args([OLD, NEW, "-f", "text"])
            .assert()
            .code(0)
            .stdout(predicate::str::contains("production\n  + b\n  - a\n"))
            .stdout(predicate::str::contains("  > h (from production)"))
            .stdout(predicate::str::contains("\u{1b}").not());
    }

    #[test]
    fn test_e2e_toml_manifest() {
        cargo_bin_cmd!("dependency-diff")
            .args([OLD, "tests/fixtures/new-manifest.toml", "-f", "text"])
            .assert()
            .code(0)
            .stdout(predicate::str::contains("7 change(s) in 2 group(s)"));
    }

    #[test]
    fn test_e2e_output_file() {
        let dir = TempDir::new().unwrap();
        let report = dir.path().join("report.md");

        cargo_bin_cmd!("dependency-diff")
            .args([OLD, NEW, "-f", "markdown", "-o", report.to_str().unwrap()])
            .assert()
            .code(0)
            .stdout(predicate::str::is_empty())
            .stderr(predicate::str::contains("Output complete"));

        let content = fs::read_to_string(&report).unwrap();
        assert!(content.starts_with("# Dependency Changes"));
    }

    #[test]
    fn test_e2e_quiet_suppresses_progress() {
        cargo_bin_cmd!("dependency-diff")
            .args([OLD, NEW, "--quiet"])
            .assert()
            .code(0)
            .stderr(predicate::str::contains("Loading").not());
    }

    #[test]
    fn test_e2e_progress_goes_to_stderr() {
        cargo_bin_cmd!("dependency-diff")
            .args([OLD, NEW])
            .assert()
            .code(0)
            .stderr(predicate::str::contains("📖 Loading old manifest from:"))
            .stderr(predicate::str::contains("Found 8 change(s) in 3 group(s)"))
            .stdout(predicate::str::contains("Loading").not());
    }
}
