//! Temporary versions file and run configuration

use std::path::PathBuf;
use std::process::Command;

use release_feed_updater::config::UpdaterConfig;
use serde_json::{Value, json};
use tempfile::TempDir;

pub struct TestWorkspace {
    temp_dir: TempDir,
    pub versions_file: PathBuf,
    pub outputs_dir: PathBuf,
}

impl TestWorkspace {
    pub fn new(versions: &Value) -> Self {
        let temp_dir = TempDir::new().unwrap();
        let versions_file = temp_dir.path().join("versions.json");
        let outputs_dir = temp_dir.path().join("outputs");
        let mut content = serde_json::to_string_pretty(versions).unwrap();
        content.push('\n');
        std::fs::write(&versions_file, content).unwrap();

        Self {
            temp_dir,
            versions_file,
            outputs_dir,
        }
    }

    pub fn config(&self, feed_url: String) -> UpdaterConfig {
        UpdaterConfig {
            versions_file: self.versions_file.clone(),
            feed_url,
            outputs_dir: self.outputs_dir.clone(),
            include_eap: false,
            commit: false,
            commit_prefix: "jetbrains".to_string(),
            plugin_updater: None,
        }
    }

    /// Turns the workspace into a git repository with the versions file committed
    pub fn init_git(&self) {
        self.git(&["init", "--quiet"]);
        self.git(&["config", "user.email", "updater@example.com"]);
        self.git(&["config", "user.name", "Updater"]);
        self.git(&["config", "commit.gpgsign", "false"]);
        self.git(&["add", "versions.json"]);
        self.git(&["commit", "--quiet", "-m", "initial"]);
    }

    pub fn git(&self, args: &[&str]) -> String {
        let output = Command::new("git")
            .args(args)
            .current_dir(self.temp_dir.path())
            .output()
            .unwrap();
        assert!(output.status.success(), "git {args:?} failed");
        String::from_utf8(output.stdout).unwrap()
    }

    pub fn read_versions(&self) -> String {
        std::fs::read_to_string(&self.versions_file).unwrap()
    }

    pub fn versions(&self) -> Value {
        serde_json::from_str(&self.read_versions()).unwrap()
    }
}

/// A stored product record as it appears in the versions file
pub fn record_json(
    channel: &str,
    template: &str,
    version: &str,
    build_number: &str,
    sha256: &str,
) -> Value {
    json!({
        "update-channel": channel,
        "url-template": template,
        "version": version,
        "build_number": build_number,
        "sha256": sha256
    })
}
