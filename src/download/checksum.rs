//! Published SHA-256 lookup for download artifacts

use std::collections::HashMap;

use reqwest::Client;
use tracing::{debug, warn};

use crate::error::FeedError;

pub const CHECKSUM_SUFFIX: &str = ".sha256";

/// Fetches `<url>.sha256`, remembering results for the rest of the run
pub struct ChecksumFetcher {
    client: Client,
    memo: HashMap<String, String>,
}

impl ChecksumFetcher {
    pub fn new(client: Client) -> Self {
        Self {
            client,
            memo: HashMap::new(),
        }
    }

    pub async fn fetch(&mut self, url: &str) -> Result<String, FeedError> {
        if let Some(sha256) = self.memo.get(url) {
            debug!("Using remembered checksum for {}", url);
            return Ok(sha256.clone());
        }

        let checksum_url = format!("{url}{CHECKSUM_SUFFIX}");
        let response = self.client.get(&checksum_url).send().await?;
        let status = response.status();

        if !status.is_success() {
            warn!("Checksum request returned status {}: {}", status, checksum_url);
            return Err(FeedError::Status {
                url: checksum_url,
                status,
            });
        }

        let body = response.text().await?;
        let sha256 = parse_checksum(&body, &checksum_url)?;

        self.memo.insert(url.to_string(), sha256.clone());
        Ok(sha256)
    }
}

/// First whitespace-delimited token of a `.sha256` body
pub fn parse_checksum(body: &str, url: &str) -> Result<String, FeedError> {
    body.split_whitespace()
        .next()
        .map(str::to_string)
        .ok_or_else(|| FeedError::EmptyChecksum {
            url: url.to_string(),
        })
}
