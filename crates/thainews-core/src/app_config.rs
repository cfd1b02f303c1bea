use std::path::PathBuf;

use crate::policy::LimitPolicy;

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub log_level: String,
    /// Search-feed endpoint queries are built against.
    pub feed_base_url: String,
    /// Where the last snapshot is written and read.
    pub archive_path: PathBuf,
    pub request_timeout_secs: u64,
    pub user_agent: String,
    /// Pause between consecutive feed requests within one run.
    pub inter_request_delay_ms: u64,
    pub limits: LimitPolicy,
    /// Language the downstream summarizer is asked to answer in.
    pub report_language: String,
}
