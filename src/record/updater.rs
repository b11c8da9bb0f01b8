//! Per-product update orchestration
//!
//! Each product is resolved against the feed, compared with its stored build
//! and refreshed in place. A failing product is logged and skipped; it never
//! stops the rest of the batch.

use std::path::PathBuf;

use tracing::{error, info, warn};

use crate::download::checksum::ChecksumFetcher;
use crate::download::probe::Probe;
use crate::download::resolver::UrlResolver;
use crate::error::UpdateError;
use crate::feed::index::FeedIndex;
use crate::record::summary::{UpdateSummary, VersionChange};
use crate::record::types::{ProductRecord, Products};
use crate::version::selector::latest_build;

/// Channels whose name contains this marker publish URLs keyed by build number
const EAP_CHANNEL_MARKER: &str = "EAP";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProductOutcome {
    Updated(VersionChange),
    UpToDate,
}

/// Where a missing channel should be cross-checked
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Sources {
    pub versions_file: PathBuf,
    pub feed_url: String,
}

pub struct Updater<'a, P: Probe> {
    index: &'a FeedIndex,
    resolver: UrlResolver<P>,
    checksums: ChecksumFetcher,
    include_eap: bool,
    sources: Sources,
}

impl<'a, P: Probe> Updater<'a, P> {
    pub fn new(
        index: &'a FeedIndex,
        resolver: UrlResolver<P>,
        checksums: ChecksumFetcher,
        include_eap: bool,
        sources: Sources,
    ) -> Self {
        Self {
            index,
            resolver,
            checksums,
            include_eap,
            sources,
        }
    }

    /// Updates every product in order and reports what happened
    pub async fn update_products(&mut self, products: &mut Products) -> UpdateSummary {
        let mut summary = UpdateSummary::default();

        for (name, record) in products.iter_mut() {
            match self.update_product(name, record).await {
                Ok(ProductOutcome::Updated(change)) => summary.changes.push(change),
                Ok(ProductOutcome::UpToDate) => summary.up_to_date.push(name.clone()),
                Err(e) => {
                    self.report_failure(name, &e);
                    summary.failures.push((name.clone(), e.to_string()));
                }
            }
        }

        info!(
            "Updated {} products, {} already current, {} skipped",
            summary.changes.len(),
            summary.up_to_date.len(),
            summary.failures.len()
        );

        summary
    }

    pub async fn update_product(
        &mut self,
        name: &str,
        record: &mut ProductRecord,
    ) -> Result<ProductOutcome, UpdateError> {
        info!("Updating {}", name);

        let index = self.index;
        let entry = index
            .lookup(&record.update_channel)
            .ok_or_else(|| UpdateError::ChannelNotFound {
                channel: record.update_channel.clone(),
            })?;

        let (channel, build) = latest_build(&entry, self.include_eap)?;
        let new_version = build.version.as_str();
        let new_build_number = build.build_number();

        let version_or_build_number = if channel.name.contains(EAP_CHANNEL_MARKER) {
            new_build_number
        } else {
            new_version
        };
        let version_number = strip_version_suffix(new_version);

        let url = self
            .resolver
            .resolve(&record.url_template, version_or_build_number, version_number)
            .await?;
        record.url = url.clone();

        let is_new = record.sha256.is_none()
            || record.build_number.as_deref() != Some(new_build_number);
        if !is_new {
            info!(
                "Already at the latest version {} with build number {}.",
                new_version, new_build_number
            );
            return Ok(ProductOutcome::UpToDate);
        }

        info!(
            "Found a newer version {} with build number {}.",
            new_version, new_build_number
        );

        let url = url.ok_or_else(|| UpdateError::UrlUnresolved {
            template: record.url_template.clone(),
            version: version_or_build_number.to_string(),
        })?;
        let sha256 = self.checksums.fetch(&url).await?;

        let from = record
            .version
            .replace(new_version.to_string())
            .unwrap_or_default();
        record.build_number = Some(new_build_number.to_string());
        record.sha256 = Some(sha256);

        Ok(ProductOutcome::Updated(VersionChange {
            name: name.to_string(),
            from,
            to: new_version.to_string(),
        }))
    }

    fn report_failure(&self, name: &str, e: &UpdateError) {
        match e {
            UpdateError::ChannelNotFound { channel } => {
                error!("Failed to find channel {}.", channel);
                error!(
                    "Check that the update-channel in {} matches the name in {}",
                    self.sources.versions_file.display(),
                    self.sources.feed_url
                );
            }
            _ => {
                error!(product = name, error = %e, "Update failed");
                warn!("Skipping {} due to the above error.", name);
                warn!("It may be out-of-date. Fix the error and rerun.");
            }
        }
    }
}

/// Drops descriptive text after the first space ("2024.2 EAP" -> "2024.2")
pub fn strip_version_suffix(version: &str) -> &str {
    version
        .split_once(' ')
        .map_or(version, |(number, _)| number)
}
