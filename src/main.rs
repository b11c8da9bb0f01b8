use std::path::PathBuf;

use clap::Parser;
use release_feed_updater::config::{
    DEFAULT_COMMIT_PREFIX, DEFAULT_FEED_URL, DEFAULT_OUTPUTS_DIR, DEFAULT_VERSIONS_FILE,
    UpdaterConfig, eap_enabled,
};
use release_feed_updater::logging::init_logging;
use release_feed_updater::run::run;

#[derive(Parser)]
#[command(name = "release-feed-updater")]
#[command(version, about = "Refresh pinned IDE versions from the vendor release feed")]
struct Cli {
    /// Versions file to update in place
    #[arg(long, default_value = DEFAULT_VERSIONS_FILE)]
    versions_file: PathBuf,

    #[arg(long, default_value = DEFAULT_FEED_URL)]
    feed_url: String,

    /// Directory receiving the debug snapshots of the feed
    #[arg(long, default_value = DEFAULT_OUTPUTS_DIR)]
    outputs_dir: PathBuf,

    /// Let pre-release (eap) builds win; also enabled by USE_EAP=true
    #[arg(long)]
    include_eap: bool,

    /// Leave the updated versions file uncommitted
    #[arg(long)]
    no_commit: bool,

    #[arg(long, default_value = DEFAULT_COMMIT_PREFIX)]
    commit_prefix: String,

    /// Program run after the update, e.g. the plugin update script
    #[arg(long)]
    plugin_updater: Option<PathBuf>,

    /// Write logs to this file instead of stdout
    #[arg(long)]
    log_file: Option<PathBuf>,
}

impl From<Cli> for UpdaterConfig {
    fn from(cli: Cli) -> Self {
        Self {
            versions_file: cli.versions_file,
            feed_url: cli.feed_url,
            outputs_dir: cli.outputs_dir,
            include_eap: cli.include_eap || eap_enabled(),
            commit: !cli.no_commit,
            commit_prefix: cli.commit_prefix,
            plugin_updater: cli.plugin_updater,
        }
    }
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let _guard = init_logging(cli.log_file.as_deref())?;
    let config = UpdaterConfig::from(cli);

    tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()?
        .block_on(run(&config))?;

    Ok(())
}
