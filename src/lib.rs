//! Keeps a pinned versions file in sync with a vendor's release feed.
//!
//! ```text
//! ┌─────────────┐     ┌─────────────┐     ┌─────────────┐
//! │    Feed     │────▶│   Updater   │◀────│    Store    │
//! │ (xml index) │     │ (per record)│     │   (json)    │
//! └─────────────┘     └─────────────┘     └─────────────┘
//!                            │
//!             ┌──────────────┼──────────────┐
//!             ▼              ▼              ▼
//!      ┌─────────────┐ ┌─────────────┐ ┌─────────────┐
//!      │  Selector   │ │ UrlResolver │ │  Checksums  │
//!      │(latest build│ │  (probing)  │ │  (.sha256)  │
//!      └─────────────┘ └─────────────┘ └─────────────┘
//! ```

pub mod config;
pub mod download;
pub mod error;
pub mod feed;
pub mod logging;
pub mod record;
pub mod run;
pub mod vcs;
pub mod version;
