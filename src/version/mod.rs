//! Version parsing and latest build selection
//!
//! - [`comparable`]: ordered release-segment versions
//! - [`selector`]: latest eligible build of a feed entry

pub mod comparable;
pub mod selector;

pub use comparable::{ComparableVersion, compare};
pub use selector::latest_build;
