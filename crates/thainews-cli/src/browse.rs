//! `browse` command: read-only view over the last saved snapshot.

use anyhow::Context;

use thainews_archive::ArchiveStore;
use thainews_core::{AppConfig, NormalizedEntry, Snapshot};

/// Apply the title search, category filter and limit, in that order.
pub(crate) fn select_entries<'a>(
    snapshot: &'a Snapshot,
    search: Option<&str>,
    category: Option<&str>,
    limit: Option<usize>,
) -> Vec<&'a NormalizedEntry> {
    snapshot
        .search(search.unwrap_or_default())
        .into_iter()
        .filter(|e| category.is_none_or(|c| e.category == c))
        .take(limit.unwrap_or(usize::MAX))
        .collect()
}

pub(crate) fn render_entries(snapshot: &Snapshot, entries: &[&NormalizedEntry]) -> String {
    let mut out = format!(
        "last updated: {}\nshowing {} of {} entries\n\n",
        snapshot.timestamp,
        entries.len(),
        snapshot.entries.len()
    );
    for entry in entries {
        out.push_str(&format!(
            "{date} • {source} • {category}\n  {title}\n  {link}\n",
            date = entry.date,
            source = entry.source,
            category = entry.category,
            title = entry.title,
            link = entry.link,
        ));
    }
    out
}

/// Print the saved snapshot, filtered.
///
/// A missing snapshot is an informational message, not an error.
///
/// # Errors
///
/// Returns an error if the snapshot exists but cannot be read or parsed.
pub(crate) fn run_browse(
    config: &AppConfig,
    search: Option<&str>,
    category: Option<&str>,
    limit: Option<usize>,
) -> anyhow::Result<()> {
    let store = ArchiveStore::new(config.archive_path.clone());
    let snapshot = store
        .load()
        .with_context(|| format!("cannot read snapshot at {}", store.path().display()))?;

    let Some(snapshot) = snapshot else {
        println!(
            "no saved snapshot at {}; run `thainews digest` first",
            store.path().display()
        );
        return Ok(());
    };

    let entries = select_entries(&snapshot, search, category, limit);
    print!("{}", render_entries(&snapshot, &entries));
    Ok(())
}
