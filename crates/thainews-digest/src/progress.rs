use thainews_core::FeedQuery;
use thainews_feeds::FetchError;

/// Receives per-query progress while a digest runs.
///
/// `index` is zero-based; `total` is the number of planned queries. All
/// methods default to doing nothing.
pub trait ProgressObserver {
    fn query_started(&mut self, _index: usize, _total: usize, _query: &FeedQuery) {}

    /// Called after a successful fetch with the number of entries kept.
    fn query_finished(&mut self, _index: usize, _total: usize, _query: &FeedQuery, _kept: usize) {
    }

    /// The error channel for a source that could not be fetched.
    fn query_failed(
        &mut self,
        _index: usize,
        _total: usize,
        _query: &FeedQuery,
        _error: &FetchError,
    ) {
    }
}

/// Observer that ignores every event.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopProgress;

impl ProgressObserver for NoopProgress {}
