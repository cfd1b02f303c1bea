//! Digest orchestration.

use std::collections::HashSet;
use std::time::Duration;

use chrono::{Local, NaiveDateTime};

use thainews_archive::{snapshot_timestamp, ArchiveStore};
use thainews_core::{AppConfig, LimitPolicy, NormalizedEntry, ScanMode, Snapshot};
use thainews_feeds::{FeedFetcher, SourcePlanner};

use crate::progress::ProgressObserver;
use crate::report::{ReportBuilder, ReportContext};

/// A source that could not be fetched during a run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceFailure {
    pub category: String,
    pub message: String,
}

/// Whether the run's snapshot reached disk.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ArchiveStatus {
    Saved,
    Failed(String),
}

/// Everything one run produces.
#[derive(Debug, Clone)]
pub struct DigestOutcome {
    pub report: String,
    /// Kept entries in emission order; titles are unique.
    pub entries: Vec<NormalizedEntry>,
    pub failures: Vec<SourceFailure>,
    pub archive: ArchiveStatus,
}

/// Drives planned queries through a [`FeedFetcher`] and assembles the digest.
pub struct DigestEngine<F> {
    planner: SourcePlanner,
    fetcher: F,
    archive: ArchiveStore,
    limits: LimitPolicy,
    inter_request_delay: Duration,
    report_language: String,
}

impl<F: FeedFetcher> DigestEngine<F> {
    /// Engine with default limits, no inter-request delay and Traditional
    /// Chinese as the report language.
    #[must_use]
    pub fn new(planner: SourcePlanner, fetcher: F, archive: ArchiveStore) -> Self {
        Self {
            planner,
            fetcher,
            archive,
            limits: LimitPolicy::default(),
            inter_request_delay: Duration::ZERO,
            report_language: "Traditional Chinese".to_string(),
        }
    }

    #[must_use]
    pub fn from_config(config: &AppConfig, fetcher: F) -> Self {
        Self::new(
            SourcePlanner::new(config.feed_base_url.clone()),
            fetcher,
            ArchiveStore::new(config.archive_path.clone()),
        )
        .with_limits(config.limits)
        .with_inter_request_delay(Duration::from_millis(config.inter_request_delay_ms))
        .with_report_language(config.report_language.clone())
    }

    #[must_use]
    pub fn with_limits(mut self, limits: LimitPolicy) -> Self {
        self.limits = limits;
        self
    }

    #[must_use]
    pub fn with_inter_request_delay(mut self, delay: Duration) -> Self {
        self.inter_request_delay = delay;
        self
    }

    #[must_use]
    pub fn with_report_language(mut self, language: impl Into<String>) -> Self {
        self.report_language = language.into();
        self
    }

    /// Run one digest stamped with the current local time.
    pub async fn aggregate(
        &self,
        window_days: u32,
        window_label: &str,
        keyword: Option<&str>,
        progress: &mut dyn ProgressObserver,
    ) -> DigestOutcome {
        self.aggregate_at(
            window_days,
            window_label,
            keyword,
            Local::now().naive_local(),
            progress,
        )
        .await
    }

    /// Run one digest as of `run_at`.
    ///
    /// Queries are fetched one after another in plan order. A failed source
    /// is recorded and skipped; titles already kept from an earlier source
    /// are dropped. The snapshot is saved at the end and a save failure is
    /// reported in [`DigestOutcome::archive`] rather than returned as an error.
    #[allow(clippy::too_many_lines)]
    pub async fn aggregate_at(
        &self,
        window_days: u32,
        window_label: &str,
        keyword: Option<&str>,
        run_at: NaiveDateTime,
        progress: &mut dyn ProgressObserver,
    ) -> DigestOutcome {
        let mode = ScanMode::from_keyword(keyword);
        let queries = self.planner.plan_for_mode(&mode, window_days);
        let limit = self.limits.limit_for(&mode, window_days);
        let total = queries.len();

        tracing::info!(
            mode = %mode,
            window_days,
            sources = total,
            limit,
            "starting digest run"
        );

        let mut report = ReportBuilder::new(&ReportContext {
            mode: &mode,
            window_label,
            run_date: run_at.date(),
            language: &self.report_language,
        });
        let mut seen_titles: HashSet<String> = HashSet::new();
        let mut entries: Vec<NormalizedEntry> = Vec::new();
        let mut failures: Vec<SourceFailure> = Vec::new();

        for (index, query) in queries.iter().enumerate() {
            if index > 0 && !self.inter_request_delay.is_zero() {
                tokio::time::sleep(self.inter_request_delay).await;
            }

            progress.query_started(index, total, query);
            report.section(&query.name);

            let raw = match self.fetcher.fetch(&query.url).await {
                Ok(raw) => raw,
                Err(e) => {
                    tracing::warn!(
                        category = %query.name,
                        url = %query.url,
                        error = %e,
                        "feed fetch failed"
                    );
                    progress.query_failed(index, total, query, &e);
                    let message = e.to_string();
                    report.fetch_failed(&message);
                    failures.push(SourceFailure {
                        category: query.name.clone(),
                        message,
                    });
                    continue;
                }
            };

            if raw.is_empty() {
                report.no_news();
                progress.query_finished(index, total, query, 0);
                continue;
            }

            let fetched = raw.len();
            let mut kept = 0usize;
            for item in raw.into_iter().take(limit) {
                if !seen_titles.insert(item.title.clone()) {
                    tracing::debug!(
                        category = %query.name,
                        title = %item.title,
                        "skipping duplicate title"
                    );
                    continue;
                }
                let entry = NormalizedEntry::from_raw(item, &query.name);
                report.entry(&entry);
                entries.push(entry);
                kept += 1;
            }

            tracing::debug!(category = %query.name, fetched, kept, "source processed");
            progress.query_finished(index, total, query, kept);
        }

        let report = report.finish();

        let snapshot = Snapshot {
            timestamp: snapshot_timestamp(&run_at),
            entries,
        };
        let archive = match self.archive.save(&snapshot) {
            Ok(()) => ArchiveStatus::Saved,
            Err(e) => {
                tracing::warn!(
                    path = %self.archive.path().display(),
                    error = %e,
                    "failed to save snapshot"
                );
                ArchiveStatus::Failed(e.to_string())
            }
        };

        tracing::info!(
            entries = snapshot.entries.len(),
            failed_sources = failures.len(),
            "digest run complete"
        );

        DigestOutcome {
            report,
            entries: snapshot.entries,
            failures,
            archive,
        }
    }
}
