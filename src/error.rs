use thiserror::Error;

#[derive(Debug, Error)]
pub enum FeedError {
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("Unexpected status {status} from {url}")]
    Status {
        url: String,
        status: reqwest::StatusCode,
    },

    #[error("Invalid response: {0}")]
    Parse(String),

    #[error("Empty checksum body at {url}")]
    EmptyChecksum { url: String },
}

#[derive(Debug, Error)]
pub enum VersionError {
    #[error("Invalid version '{version}': {reason}")]
    Invalid { version: String, reason: String },
}

/// Failures scoped to a single tracked product
#[derive(Debug, Error)]
pub enum UpdateError {
    #[error("Channel not found in feed: {channel}")]
    ChannelNotFound { channel: String },

    #[error("No eligible build in channel {channel}")]
    NoEligibleBuild { channel: String },

    #[error("No reachable download URL for {template} at version {version}")]
    UrlUnresolved { template: String, version: String },

    #[error(transparent)]
    Feed(#[from] FeedError),

    #[error(transparent)]
    Version(#[from] VersionError),
}

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("I/O error on {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Malformed versions file {path}: {source}")]
    Json {
        path: String,
        #[source]
        source: serde_json::Error,
    },
}

#[derive(Debug, Error)]
pub enum VcsError {
    #[error("Failed to run {program}: {source}")]
    Spawn {
        program: String,
        #[source]
        source: std::io::Error,
    },

    #[error("{program} exited with {status}")]
    Failed {
        program: String,
        status: std::process::ExitStatus,
    },
}
