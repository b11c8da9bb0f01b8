//! Latest build selection within a feed entry

use tracing::debug;

use crate::error::UpdateError;
use crate::feed::index::IndexEntry;
use crate::feed::types::{Build, Channel};
use crate::version::comparable::ComparableVersion;

/// Picks the build with the highest build number across the entry's channels
///
/// Builds from `eap` channels are only candidates when `include_eap` is set.
/// On equal versions the first build in feed order wins.
pub fn latest_build<'a>(
    entry: &IndexEntry<'a>,
    include_eap: bool,
) -> Result<(&'a Channel, &'a Build), UpdateError> {
    let mut latest: Option<(&'a Channel, &'a Build, ComparableVersion)> = None;

    let candidates = entry
        .channels
        .iter()
        .copied()
        .filter(|channel| include_eap || !channel.is_eap())
        .flat_map(|channel| channel.builds.iter().map(move |build| (channel, build)));

    for (channel, build) in candidates {
        let version = ComparableVersion::parse(build.build_number())?;
        let is_better = match &latest {
            Some((_, _, best)) => version > *best,
            None => true,
        };
        if is_better {
            latest = Some((channel, build, version));
        }
    }

    let (channel, build, version) = latest.ok_or_else(|| UpdateError::NoEligibleBuild {
        channel: entry.key.to_string(),
    })?;

    debug!(
        "Latest build in {} is {} from channel {}",
        entry.key, version, channel.name
    );

    Ok((channel, build))
}
