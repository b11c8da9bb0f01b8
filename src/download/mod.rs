//! Download URL resolution and checksum lookup

pub mod checksum;
pub mod probe;
pub mod resolver;

pub use checksum::ChecksumFetcher;
pub use probe::{HttpProbe, Probe};
pub use resolver::UrlResolver;
