//! Last-run snapshot storage.
//!
//! One JSON file holds the entries of the most recent aggregation run. The
//! engine replaces it after every run; the browse command reads it back.

pub mod error;
pub mod store;

pub use error::ArchiveError;
pub use store::{snapshot_timestamp, ArchiveStore};
