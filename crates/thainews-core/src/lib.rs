//! Shared types and configuration for the Thailand news digest.

pub mod app_config;
pub mod config;
pub mod policy;
pub mod types;
pub mod window;

pub use app_config::AppConfig;
pub use config::{
    load_app_config, load_app_config_from_env, DEFAULT_ARCHIVE_PATH, DEFAULT_FEED_BASE_URL,
};
pub use policy::LimitPolicy;
pub use types::{FeedQuery, NormalizedEntry, RawEntry, ScanMode, Snapshot, DEFAULT_SOURCE_LABEL};
pub use window::Window;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid value for {var}: {reason}")]
    InvalidEnvVar { var: String, reason: String },
}
