//! `digest` command: run the feed pipeline and emit the report.

use std::path::Path;

use anyhow::Context;

use thainews_core::{AppConfig, FeedQuery, ScanMode, Window};
use thainews_digest::{ArchiveStatus, DigestEngine, ProgressObserver};
use thainews_feeds::{FetchError, HttpFeedFetcher, SourcePlanner};

/// Progress lines on stderr so stdout carries only the report.
struct CliProgress;

impl ProgressObserver for CliProgress {
    fn query_started(&mut self, index: usize, total: usize, query: &FeedQuery) {
        eprintln!("[{}/{total}] scanning: {} ...", index + 1, query.name);
    }

    fn query_finished(&mut self, index: usize, total: usize, _query: &FeedQuery, kept: usize) {
        eprintln!("[{}/{total}] kept {kept} entries", index + 1);
    }

    fn query_failed(&mut self, index: usize, total: usize, query: &FeedQuery, error: &FetchError) {
        eprintln!("[{}/{total}] fetch error for {}: {error}", index + 1, query.name);
    }
}

/// Describe what a run would fetch, without fetching.
pub(crate) fn describe_plan(planner: &SourcePlanner, window: Window, keyword: Option<&str>) -> String {
    let mode = ScanMode::from_keyword(keyword);
    let queries = planner.plan_for_mode(&mode, window.days());

    let mut out = format!("mode: {mode}\n");
    if let Some(keyword) = mode.keyword() {
        out.push_str(&format!("keyword: {keyword}\n"));
    }
    out.push_str(&format!("window: {} ({}d)\n", window.label(), window.days()));
    out.push_str(&format!("sources: {}\n", queries.len()));
    for query in &queries {
        out.push_str(&format!("- {}\n  {}\n", query.name, query.url));
    }
    out
}

/// Run one digest and print (or write) the report.
///
/// Per-source fetch failures and snapshot save failures are reported on
/// stderr; the report is still emitted.
///
/// # Errors
///
/// Returns an error if the HTTP client cannot be built or the report cannot
/// be written to `output`.
pub(crate) async fn run_digest(
    config: &AppConfig,
    window: Window,
    keyword: Option<&str>,
    output: Option<&Path>,
    dry_run: bool,
) -> anyhow::Result<()> {
    if dry_run {
        let planner = SourcePlanner::new(config.feed_base_url.clone());
        print!("{}", describe_plan(&planner, window, keyword));
        return Ok(());
    }

    let fetcher = HttpFeedFetcher::new(config.request_timeout_secs, &config.user_agent)
        .map_err(|e| anyhow::anyhow!("failed to build feed client: {e}"))?;
    let engine = DigestEngine::from_config(config, fetcher);

    let outcome = engine
        .aggregate(window.days(), window.label(), keyword, &mut CliProgress)
        .await;

    match output {
        Some(path) => {
            std::fs::write(path, &outcome.report)
                .with_context(|| format!("failed to write digest to {}", path.display()))?;
            eprintln!("digest written to {}", path.display());
        }
        None => println!("{}", outcome.report),
    }

    eprintln!(
        "done: {} entries, {} failed source(s)",
        outcome.entries.len(),
        outcome.failures.len()
    );
    if let ArchiveStatus::Failed(reason) = &outcome.archive {
        eprintln!(
            "warning: snapshot not saved to {}: {reason}",
            config.archive_path.display()
        );
    }

    Ok(())
}
