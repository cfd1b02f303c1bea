use crate::app_config::AppConfig;
use crate::policy::LimitPolicy;
use crate::ConfigError;

pub const DEFAULT_FEED_BASE_URL: &str = "https://news.google.com/rss/search";
pub const DEFAULT_ARCHIVE_PATH: &str = "news_data.json";

/// Load application configuration from environment variables.
///
/// Calls `dotenvy::dotenv().ok()` to load `.env` files before reading env vars.
///
/// # Errors
///
/// Returns `ConfigError` if a value is present but invalid.
pub fn load_app_config() -> Result<AppConfig, ConfigError> {
    dotenvy::dotenv().ok();
    load_app_config_from_env()
}

/// Load application configuration from environment variables already in the process.
///
/// Unlike [`load_app_config`], this does NOT load `.env` files.
///
/// # Errors
///
/// Returns `ConfigError` if a value is present but invalid.
pub fn load_app_config_from_env() -> Result<AppConfig, ConfigError> {
    build_app_config(|key| std::env::var(key))
}

/// Build application configuration using the provided env-var lookup function.
///
/// Every variable is optional; the lookup is injected so tests can use a
/// plain `HashMap` instead of mutating the process environment.
fn build_app_config<F>(lookup: F) -> Result<AppConfig, ConfigError>
where
    F: Fn(&str) -> Result<String, std::env::VarError>,
{
    use std::path::PathBuf;

    let or_default = |var: &str, default: &str| -> String {
        lookup(var).unwrap_or_else(|_| default.to_string())
    };

    let parse_u32 = |var: &str, default: &str| -> Result<u32, ConfigError> {
        let raw = or_default(var, default);
        raw.parse::<u32>().map_err(|e| ConfigError::InvalidEnvVar {
            var: var.to_string(),
            reason: e.to_string(),
        })
    };

    let parse_u64 = |var: &str, default: &str| -> Result<u64, ConfigError> {
        let raw = or_default(var, default);
        raw.parse::<u64>().map_err(|e| ConfigError::InvalidEnvVar {
            var: var.to_string(),
            reason: e.to_string(),
        })
    };

    let parse_limit = |var: &str, default: &str| -> Result<usize, ConfigError> {
        let raw = or_default(var, default);
        let value = raw
            .parse::<usize>()
            .map_err(|e| ConfigError::InvalidEnvVar {
                var: var.to_string(),
                reason: e.to_string(),
            })?;
        if value == 0 {
            return Err(ConfigError::InvalidEnvVar {
                var: var.to_string(),
                reason: "must be at least 1".to_string(),
            });
        }
        Ok(value)
    };

    let log_level = or_default("THAINEWS_LOG_LEVEL", "info");
    let feed_base_url = or_default("THAINEWS_FEED_BASE_URL", DEFAULT_FEED_BASE_URL);
    if !feed_base_url.starts_with("http://") && !feed_base_url.starts_with("https://") {
        return Err(ConfigError::InvalidEnvVar {
            var: "THAINEWS_FEED_BASE_URL".to_string(),
            reason: format!("expected an http(s) URL, got '{feed_base_url}'"),
        });
    }
    let archive_path = PathBuf::from(or_default("THAINEWS_ARCHIVE_PATH", DEFAULT_ARCHIVE_PATH));

    let request_timeout_secs = parse_u64("THAINEWS_REQUEST_TIMEOUT_SECS", "30")?;
    if request_timeout_secs == 0 {
        return Err(ConfigError::InvalidEnvVar {
            var: "THAINEWS_REQUEST_TIMEOUT_SECS".to_string(),
            reason: "must be at least 1".to_string(),
        });
    }
    let user_agent = or_default("THAINEWS_USER_AGENT", "thainews/0.1 (feed-digest)");
    let inter_request_delay_ms = parse_u64("THAINEWS_INTER_REQUEST_DELAY_MS", "500")?;

    let defaults = LimitPolicy::default();
    let limits = LimitPolicy {
        deep_dive: parse_limit(
            "THAINEWS_LIMIT_DEEP_DIVE",
            &defaults.deep_dive.to_string(),
        )?,
        short_window: parse_limit(
            "THAINEWS_LIMIT_SHORT_WINDOW",
            &defaults.short_window.to_string(),
        )?,
        long_window: parse_limit(
            "THAINEWS_LIMIT_LONG_WINDOW",
            &defaults.long_window.to_string(),
        )?,
        short_window_max_days: parse_u32(
            "THAINEWS_SHORT_WINDOW_MAX_DAYS",
            &defaults.short_window_max_days.to_string(),
        )?,
    };

    let report_language = or_default("THAINEWS_REPORT_LANGUAGE", "Traditional Chinese");

    Ok(AppConfig {
        log_level,
        feed_base_url,
        archive_path,
        request_timeout_secs,
        user_agent,
        inter_request_delay_ms,
        limits,
        report_language,
    })
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
