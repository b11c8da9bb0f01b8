use std::path::PathBuf;
use std::time::Duration;

use crate::error::FeedError;

// =============================================================================
// Network constants
// =============================================================================

/// Release feed listing every product, channel and build
pub const DEFAULT_FEED_URL: &str = "https://www.jetbrains.com/updates/updates.xml";

/// Timeout applied to every HTTP request (30 seconds)
pub const FETCH_TIMEOUT_SECS: u64 = 30;

pub const USER_AGENT: &str = "release-feed-updater";

// =============================================================================
// File layout
// =============================================================================

pub const DEFAULT_VERSIONS_FILE: &str = "versions.json";

pub const DEFAULT_OUTPUTS_DIR: &str = "outputs";

pub const AVAILABLE_CHANNELS_FILE: &str = "available_channels.json";

pub const CHANNELS_SNAPSHOT_FILE: &str = "channels.json";

/// Environment toggle that lets pre-release builds win the selection
pub const USE_EAP_ENV: &str = "USE_EAP";

pub const DEFAULT_COMMIT_PREFIX: &str = "jetbrains";

/// Settings for a single update run
#[derive(Debug, Clone, PartialEq)]
pub struct UpdaterConfig {
    pub versions_file: PathBuf,
    pub feed_url: String,
    pub outputs_dir: PathBuf,
    pub include_eap: bool,
    pub commit: bool,
    pub commit_prefix: String,
    pub plugin_updater: Option<PathBuf>,
}

impl Default for UpdaterConfig {
    fn default() -> Self {
        Self {
            versions_file: PathBuf::from(DEFAULT_VERSIONS_FILE),
            feed_url: DEFAULT_FEED_URL.to_string(),
            outputs_dir: PathBuf::from(DEFAULT_OUTPUTS_DIR),
            include_eap: eap_enabled(),
            commit: true,
            commit_prefix: DEFAULT_COMMIT_PREFIX.to_string(),
            plugin_updater: None,
        }
    }
}

/// Returns whether `USE_EAP` is set to an affirmative value.
pub fn eap_enabled() -> bool {
    eap_enabled_with_env(std::env::var(USE_EAP_ENV).ok().as_deref())
}

fn eap_enabled_with_env(value: Option<&str>) -> bool {
    value.is_some_and(|v| {
        matches!(
            v.trim().to_ascii_lowercase().as_str(),
            "1" | "true" | "yes" | "on"
        )
    })
}

/// Builds the HTTP client shared by every request of a run.
pub fn http_client() -> Result<reqwest::Client, FeedError> {
    let client = reqwest::Client::builder()
        .user_agent(USER_AGENT)
        .timeout(Duration::from_secs(FETCH_TIMEOUT_SECS))
        .build()?;
    Ok(client)
}
