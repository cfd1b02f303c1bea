//! HTTP retrieval of search feeds.

use std::future::Future;
use std::time::Duration;

use reqwest::Client;

use thainews_core::RawEntry;

use crate::error::FetchError;
use crate::parse::parse_rss_items;

/// Retrieves the entries behind one feed URL.
///
/// Implementations must report every failure through the returned `Result`;
/// a failure is scoped to that one URL.
pub trait FeedFetcher {
    fn fetch(&self, url: &str) -> impl Future<Output = Result<Vec<RawEntry>, FetchError>> + Send;
}

/// [`FeedFetcher`] backed by a `reqwest` client with a bounded request time.
///
/// No retries: a timeout, transport error, non-2xx status or malformed body
/// is returned as a [`FetchError`] for the caller to record.
#[derive(Debug, Clone)]
pub struct HttpFeedFetcher {
    client: Client,
}

impl HttpFeedFetcher {
    /// Creates a fetcher with the given overall request timeout and `User-Agent`.
    ///
    /// # Errors
    ///
    /// Returns [`FetchError::Http`] if the underlying `reqwest::Client`
    /// cannot be constructed (e.g., invalid TLS config).
    pub fn new(timeout_secs: u64, user_agent: &str) -> Result<Self, FetchError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .connect_timeout(Duration::from_secs(10))
            .user_agent(user_agent)
            .build()?;
        Ok(Self { client })
    }
}

impl FeedFetcher for HttpFeedFetcher {
    async fn fetch(&self, url: &str) -> Result<Vec<RawEntry>, FetchError> {
        let response = self
            .client
            .get(url)
            .header(
                reqwest::header::ACCEPT,
                "application/rss+xml, application/xml;q=0.9, */*;q=0.8",
            )
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::UnexpectedStatus {
                status: status.as_u16(),
                url: url.to_string(),
            });
        }

        let body = response.text().await?;
        let entries = parse_rss_items(&body)?;
        tracing::debug!(url, count = entries.len(), "fetched feed");
        Ok(entries)
    }
}
