//! Feed query planning and retrieval.
//!
//! [`planner`] turns a window and optional keyword into Google News RSS
//! search URLs; [`client`] fetches one URL and parses its `<item>`s into
//! [`thainews_core::RawEntry`] values.

pub mod client;
pub mod error;
pub mod parse;
pub mod planner;

pub use client::{FeedFetcher, HttpFeedFetcher};
pub use error::FetchError;
pub use parse::parse_rss_items;
pub use planner::{encode_terms, plan, SourcePlanner, BROAD_SCAN_CATEGORIES};
