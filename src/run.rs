//! One complete update run

use anyhow::{Context, Result};
use tracing::info;

use crate::config::{UpdaterConfig, http_client};
use crate::download::{ChecksumFetcher, HttpProbe, UrlResolver};
use crate::feed::FeedClient;
use crate::feed::snapshot::write_snapshots;
use crate::record::{RecordStore, Sources, UpdateSummary, Updater};
use crate::vcs;

/// Fetches the feed, updates every tracked product and persists the result.
///
/// Only a failure to obtain the feed or to read/write the versions file
/// aborts the run; product-level problems end up in the returned summary.
pub async fn run(config: &UpdaterConfig) -> Result<UpdateSummary> {
    let client = http_client().context("build HTTP client")?;

    let index = FeedClient::new(client.clone(), config.feed_url.as_str())
        .fetch()
        .await
        .with_context(|| format!("fetch release feed {}", config.feed_url))?;

    write_snapshots(&config.outputs_dir, &index).context("write feed snapshots")?;

    let mut store = RecordStore::load(&config.versions_file)?;
    let mut products = store.merged_products();

    let mut updater = Updater::new(
        &index,
        UrlResolver::new(HttpProbe::new(client.clone())),
        ChecksumFetcher::new(client),
        config.include_eap,
        Sources {
            versions_file: config.versions_file.clone(),
            feed_url: config.feed_url.clone(),
        },
    );
    let summary = updater.update_products(&mut products).await;

    store.replace_products(&products);
    store.save()?;

    if let Some(message) = summary.commit_message(&config.commit_prefix) {
        if config.commit {
            vcs::commit(store.path(), &message).context("commit versions file")?;
        } else {
            info!("Skipping commit:\n{}", message);
        }
    }

    if let Some(program) = &config.plugin_updater {
        vcs::run_plugin_updater(program);
    }

    Ok(summary)
}
