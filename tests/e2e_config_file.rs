/// End-to-end tests for config file loading and CLI option merging.
///
/// These tests exercise the flow from config file on disk through CLI
/// invocation, using `assert_cmd` and `tempfile` for isolated test environments.
/// Source documents point at a closed local port, so no request leaves the host.
use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

// ============================================================================
// Helper Functions
// ============================================================================

/// Write a config file at the specified path.
fn write_config(path: &std::path::Path, content: &str) {
    fs::write(path, content).unwrap();
}

/// A config defining one ecosystem whose source document cannot be fetched.
const OFFLINE_ECOSYSTEM: &str = r#"
ecosystems:
  - name: offline
    source_url: http://127.0.0.1:9/README.md
    manifests: [go.mod]
"#;

// ============================================================================
// Config File Auto-Discovery Tests
// ============================================================================

mod auto_discovery_tests {
    use super::*;

    #[test]
    fn test_auto_discovery_applies_output() {
        let dir = TempDir::new().unwrap();
        write_config(
            &dir.path().join("awesome-sbom.config.yml"),
            &format!("output: ./from-config\n{}", OFFLINE_ECOSYSTEM),
        );

        cargo_bin_cmd!("awesome-sbom")
            .current_dir(dir.path())
            .env_remove("SBOM_OUTPUT")
            .args(["-e", "offline"])
            .assert()
            .code(0)
            .stderr(predicate::str::contains("Auto-discovered config file"));

        assert!(dir.path().join("from-config").is_dir());
        assert!(!dir.path().join("SBOM").exists());
    }

    #[test]
    fn test_auto_discovered_invalid_config_is_fatal() {
        let dir = TempDir::new().unwrap();
        write_config(
            &dir.path().join("awesome-sbom.config.yml"),
            "invalid: yaml: [[[broken",
        );

        cargo_bin_cmd!("awesome-sbom")
            .current_dir(dir.path())
            .assert()
            .code(3)
            .stderr(predicate::str::contains("Failed to parse config file"));
    }
}

// ============================================================================
// Explicit Config Path (`--config`) Tests
// ============================================================================

mod explicit_config_tests {
    use super::*;

    #[test]
    fn test_explicit_config_path_loads_successfully() {
        let dir = TempDir::new().unwrap();
        let config_path = dir.path().join("custom-config.yml");
        write_config(&config_path, OFFLINE_ECOSYSTEM);

        cargo_bin_cmd!("awesome-sbom")
            .current_dir(dir.path())
            .args(["-c", config_path.to_str().unwrap(), "-e", "offline"])
            .assert()
            .code(0)
            .stderr(predicate::str::contains("Loaded config from:"));
    }

    #[test]
    fn test_explicit_config_nonexistent_file_error() {
        let dir = TempDir::new().unwrap();
        cargo_bin_cmd!("awesome-sbom")
            .current_dir(dir.path())
            .args(["-c", "nonexistent-config.yml"])
            .assert()
            .code(3) // ApplicationError
            .stderr(predicate::str::contains("Failed to read config file"));
    }

    #[test]
    fn test_incomplete_new_ecosystem_error() {
        let dir = TempDir::new().unwrap();
        let config_path = dir.path().join("config.yml");
        write_config(&config_path, "ecosystems:\n  - name: elixir\n    manifests: [mix.lock]\n");

        cargo_bin_cmd!("awesome-sbom")
            .current_dir(dir.path())
            .args(["-c", config_path.to_str().unwrap()])
            .assert()
            .code(3)
            .stderr(predicate::str::contains("needs both"));
    }

    #[test]
    fn test_unknown_fields_are_warned() {
        let dir = TempDir::new().unwrap();
        let config_path = dir.path().join("config.yml");
        write_config(
            &config_path,
            &format!("token: ghp_in_file\nfrobnicate: true\n{}", OFFLINE_ECOSYSTEM),
        );

        cargo_bin_cmd!("awesome-sbom")
            .current_dir(dir.path())
            .args(["-c", config_path.to_str().unwrap(), "-e", "offline"])
            .assert()
            .code(0)
            .stderr(predicate::str::contains(
                "Unknown config field 'frobnicate' will be ignored",
            ))
            .stderr(predicate::str::contains("Config field 'token' is ignored"));
    }
}

// ============================================================================
// CLI + Config Merge Tests
// ============================================================================

mod merge_tests {
    use super::*;

    #[test]
    fn test_cli_output_overrides_config() {
        let dir = TempDir::new().unwrap();
        let config_path = dir.path().join("config.yml");
        write_config(
            &config_path,
            &format!("output: ./from-config\n{}", OFFLINE_ECOSYSTEM),
        );

        cargo_bin_cmd!("awesome-sbom")
            .current_dir(dir.path())
            .args([
                "-c",
                config_path.to_str().unwrap(),
                "-e",
                "offline",
                "-o",
                "from-cli",
            ])
            .assert()
            .code(0);

        assert!(dir.path().join("from-cli").is_dir());
        assert!(!dir.path().join("from-config").exists());
    }

    #[test]
    fn test_env_output_overrides_config() {
        let dir = TempDir::new().unwrap();
        let config_path = dir.path().join("config.yml");
        write_config(
            &config_path,
            &format!("output: ./from-config\n{}", OFFLINE_ECOSYSTEM),
        );

        cargo_bin_cmd!("awesome-sbom")
            .current_dir(dir.path())
            .env("SBOM_OUTPUT", "from-env")
            .args(["-c", config_path.to_str().unwrap(), "-e", "offline"])
            .assert()
            .code(0);

        assert!(dir.path().join("from-env").is_dir());
    }

    #[test]
    fn test_config_ecosystem_is_selectable_only_by_name() {
        let dir = TempDir::new().unwrap();
        let config_path = dir.path().join("config.yml");
        write_config(&config_path, OFFLINE_ECOSYSTEM);

        cargo_bin_cmd!("awesome-sbom")
            .current_dir(dir.path())
            .args(["-c", config_path.to_str().unwrap(), "-e", "online"])
            .assert()
            .code(2)
            .stderr(predicate::str::contains("offline"));
    }
}
