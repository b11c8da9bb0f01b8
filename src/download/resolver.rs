//! Download URL resolution from a product's URL template
//!
//! Vendor download paths are keyed by the full version for some products and
//! by a truncated one for others, so candidates are rendered from the longest
//! release prefix down to the major version alone and the first reachable one
//! wins.

use tracing::{debug, warn};

use crate::download::probe::Probe;
use crate::error::VersionError;
use crate::version::comparable::release_segments;

/// Substituted with the version, or the full build number for EAP channels
pub const VERSION_PLACEHOLDER: &str = "{version}";

/// Substituted with a dotted prefix of the release segments
pub const MAJOR_MINOR_PLACEHOLDER: &str = "{versionMajorMinor}";

pub fn render_template(template: &str, version: &str, major_minor: &str) -> String {
    template
        .replace(VERSION_PLACEHOLDER, version)
        .replace(MAJOR_MINOR_PLACEHOLDER, major_minor)
}

/// Candidate URLs ordered from the longest release prefix to the shortest
pub fn candidate_urls(
    template: &str,
    version_or_build_number: &str,
    version_number: &str,
) -> Result<Vec<String>, VersionError> {
    let release: Vec<String> = release_segments(version_number)?
        .iter()
        .map(u64::to_string)
        .collect();

    let mut urls: Vec<String> = (1..=release.len())
        .rev()
        .map(|len| render_template(template, version_or_build_number, &release[..len].join(".")))
        .collect();
    // Templates without the prefix placeholder render the same URL every time
    urls.dedup();

    Ok(urls)
}

pub struct UrlResolver<P: Probe> {
    probe: P,
}

impl<P: Probe> UrlResolver<P> {
    pub fn new(probe: P) -> Self {
        Self { probe }
    }

    /// Returns the first reachable candidate, or `None` when none responds
    pub async fn resolve(
        &self,
        template: &str,
        version_or_build_number: &str,
        version_number: &str,
    ) -> Result<Option<String>, VersionError> {
        for url in candidate_urls(template, version_or_build_number, version_number)? {
            if self.probe.is_reachable(&url).await {
                debug!("Resolved download URL {}", url);
                return Ok(Some(url));
            }
            debug!("Download URL not reachable: {}", url);
        }

        warn!(
            "No reachable download URL for template {} at version {}",
            template, version_number
        );
        Ok(None)
    }
}
