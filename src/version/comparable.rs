//! Ordered representation of dotted release versions
//!
//! Parsing follows PEP 440 ("241.15989.150", "2024.1.2", "2024.2rc1"); text
//! outside that grammar ("2024.2 EAP", "241.100-SNAPSHOT") falls back to its
//! leading dotted numbers. Ordering only looks at the numeric release
//! segments, with trailing zeros ignored, so "2024.1" and "2024.1.0" compare
//! equal and suffixes never change the result.

use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use pep508_rs::pep440_rs::Version;

use crate::error::VersionError;

#[derive(Debug, Clone)]
pub struct ComparableVersion {
    raw: String,
    release: Vec<u64>,
}

impl ComparableVersion {
    pub fn parse(version: &str) -> Result<Self, VersionError> {
        let mut release = release_segments(version)?;
        while release.len() > 1 && release.last() == Some(&0) {
            release.pop();
        }

        Ok(Self {
            raw: version.to_string(),
            release,
        })
    }

    pub fn release(&self) -> &[u64] {
        &self.release
    }
}

impl PartialEq for ComparableVersion {
    fn eq(&self, other: &Self) -> bool {
        self.release == other.release
    }
}

impl Eq for ComparableVersion {}

impl PartialOrd for ComparableVersion {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for ComparableVersion {
    fn cmp(&self, other: &Self) -> Ordering {
        self.release.cmp(&other.release)
    }
}

impl fmt::Display for ComparableVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.raw)
    }
}

/// Numeric release segments exactly as written ("2024.1.0" -> [2024, 1, 0])
pub fn release_segments(version: &str) -> Result<Vec<u64>, VersionError> {
    match Version::from_str(version.trim()) {
        Ok(parsed) => Ok(parsed.release().to_vec()),
        Err(e) => leading_release(version).ok_or_else(|| VersionError::Invalid {
            version: version.to_string(),
            reason: e.to_string(),
        }),
    }
}

/// Dotted numbers at the start of `version`, stopping at the first
/// non-digit ("2024.2 EAP" -> [2024, 2])
fn leading_release(version: &str) -> Option<Vec<u64>> {
    let mut release = Vec::new();

    for part in version.trim().split('.') {
        let end = part
            .find(|c: char| !c.is_ascii_digit())
            .unwrap_or(part.len());
        let Ok(segment) = part[..end].parse::<u64>() else {
            break;
        };
        release.push(segment);
        if end != part.len() {
            break;
        }
    }

    (!release.is_empty()).then_some(release)
}

pub fn compare(a: &str, b: &str) -> Result<Ordering, VersionError> {
    Ok(ComparableVersion::parse(a)?.cmp(&ComparableVersion::parse(b)?))
}
