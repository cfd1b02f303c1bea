use serde::{Deserialize, Serialize};

/// Publisher label used when a feed item carries no `<source>` element.
pub const DEFAULT_SOURCE_LABEL: &str = "Google News";

/// One planned search-feed request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FeedQuery {
    /// Display label; becomes the `category` of every entry it yields.
    pub name: String,
    /// Fully-formed search-feed endpoint.
    pub url: String,
}

/// A feed item as returned by the upstream provider, before normalization.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct RawEntry {
    pub title: String,
    pub link: String,
    pub published: Option<String>,
    /// Publisher name, e.g. `Bangkok Post`.
    pub source: Option<String>,
}

/// The persisted record for one kept feed item.
///
/// Field order here is the field order in the snapshot file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NormalizedEntry {
    pub title: String,
    pub link: String,
    #[serde(default)]
    pub date: String,
    #[serde(default)]
    pub source: String,
    #[serde(default)]
    pub category: String,
}

impl NormalizedEntry {
    /// Normalize a raw feed item, attributing it to `category`.
    ///
    /// Missing publisher falls back to [`DEFAULT_SOURCE_LABEL`]; missing
    /// publish date becomes the empty string.
    #[must_use]
    pub fn from_raw(raw: RawEntry, category: &str) -> Self {
        Self {
            title: raw.title,
            link: raw.link,
            date: raw.published.unwrap_or_default(),
            source: raw
                .source
                .filter(|s| !s.trim().is_empty())
                .unwrap_or_else(|| DEFAULT_SOURCE_LABEL.to_string()),
            category: category.to_string(),
        }
    }
}

/// The last aggregation run as stored on disk.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Snapshot {
    pub timestamp: String,
    /// Older snapshot files used `news_list` for this key.
    #[serde(alias = "news_list", default)]
    pub entries: Vec<NormalizedEntry>,
}

impl Snapshot {
    /// Entries whose title contains `query`, case-insensitively, in stored order.
    ///
    /// A blank query matches everything.
    #[must_use]
    pub fn search(&self, query: &str) -> Vec<&NormalizedEntry> {
        let needle = query.trim().to_lowercase();
        if needle.is_empty() {
            return self.entries.iter().collect();
        }
        self.entries
            .iter()
            .filter(|e| e.title.to_lowercase().contains(&needle))
            .collect()
    }
}

/// Which family of queries a run issues.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScanMode {
    /// A single query for a user-supplied keyword (already trimmed).
    DeepDive { keyword: String },
    /// The three fixed category queries.
    BroadScan,
}

impl ScanMode {
    /// Derive the mode from an optional keyword. Blank keywords mean broad scan.
    #[must_use]
    pub fn from_keyword(keyword: Option<&str>) -> Self {
        match keyword.map(str::trim) {
            Some(k) if !k.is_empty() => ScanMode::DeepDive {
                keyword: k.to_string(),
            },
            _ => ScanMode::BroadScan,
        }
    }

    #[must_use]
    pub fn keyword(&self) -> Option<&str> {
        match self {
            ScanMode::DeepDive { keyword } => Some(keyword),
            ScanMode::BroadScan => None,
        }
    }
}

impl std::fmt::Display for ScanMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ScanMode::DeepDive { .. } => write!(f, "deep-dive"),
            ScanMode::BroadScan => write!(f, "broad-scan"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(title: &str, category: &str) -> NormalizedEntry {
        NormalizedEntry {
            title: title.to_string(),
            link: format!("https://example.com/{}", title.len()),
            date: String::new(),
            source: DEFAULT_SOURCE_LABEL.to_string(),
            category: category.to_string(),
        }
    }

    #[test]
    fn scan_mode_blank_keyword_is_broad_scan() {
        assert_eq!(ScanMode::from_keyword(None), ScanMode::BroadScan);
        assert_eq!(ScanMode::from_keyword(Some("")), ScanMode::BroadScan);
        assert_eq!(ScanMode::from_keyword(Some("  \t ")), ScanMode::BroadScan);
    }

    #[test]
    fn scan_mode_keyword_is_trimmed() {
        let mode = ScanMode::from_keyword(Some("  CP Group "));
        assert_eq!(mode.keyword(), Some("CP Group"));
        assert_eq!(ScanMode::BroadScan.keyword(), None);
    }

    #[test]
    fn from_raw_applies_defaults_for_missing_fields() {
        let raw = RawEntry {
            title: "Baht strengthens".to_string(),
            link: "https://example.com/baht".to_string(),
            published: None,
            source: None,
        };
        let entry = NormalizedEntry::from_raw(raw, "Thailand General News");
        assert_eq!(entry.date, "");
        assert_eq!(entry.source, DEFAULT_SOURCE_LABEL);
        assert_eq!(entry.category, "Thailand General News");
    }

    #[test]
    fn from_raw_keeps_present_fields() {
        let raw = RawEntry {
            title: "PCB plant opens".to_string(),
            link: "https://example.com/pcb".to_string(),
            published: Some("Mon, 12 Oct 2026 08:00:00 GMT".to_string()),
            source: Some("Bangkok Post".to_string()),
        };
        let entry = NormalizedEntry::from_raw(raw, "PCB");
        assert_eq!(entry.date, "Mon, 12 Oct 2026 08:00:00 GMT");
        assert_eq!(entry.source, "Bangkok Post");
    }

    #[test]
    fn search_is_case_insensitive_and_order_preserving() {
        let snapshot = Snapshot {
            timestamp: "2026-10-19 09:00:00".to_string(),
            entries: vec![
                entry("Delta Electronics expands in Thailand", "a"),
                entry("Baht steady", "a"),
                entry("DELTA posts record quarter", "b"),
            ],
        };
        let hits = snapshot.search("delta");
        assert_eq!(hits.len(), 2);
        assert_eq!(hits[0].title, "Delta Electronics expands in Thailand");
        assert_eq!(hits[1].title, "DELTA posts record quarter");
    }

    #[test]
    fn blank_search_returns_all_entries() {
        let snapshot = Snapshot {
            timestamp: String::new(),
            entries: vec![entry("one", "a"), entry("two", "b")],
        };
        assert_eq!(snapshot.search("   ").len(), 2);
    }

    #[test]
    fn snapshot_accepts_legacy_news_list_key() {
        let json = r#"{
            "timestamp": "2025-11-02 10:11:12",
            "news_list": [
                {"title": "t", "link": "l", "date": "d", "source": "s"}
            ]
        }"#;
        let snapshot: Snapshot = serde_json::from_str(json).expect("legacy snapshot parses");
        assert_eq!(snapshot.entries.len(), 1);
        assert_eq!(snapshot.entries[0].category, "");
    }

    #[test]
    fn snapshot_serializes_fields_in_stable_order() {
        let snapshot = Snapshot {
            timestamp: "ts".to_string(),
            entries: vec![entry("one", "cat")],
        };
        let json = serde_json::to_string(&snapshot).unwrap();
        let ts = json.find("\"timestamp\"").unwrap();
        let entries = json.find("\"entries\"").unwrap();
        assert!(ts < entries);
        let order: Vec<usize> = ["\"title\"", "\"link\"", "\"date\"", "\"source\"", "\"category\""]
            .iter()
            .map(|k| json.find(k).unwrap())
            .collect();
        assert!(order.windows(2).all(|w| w[0] < w[1]), "got {json}");
    }
}
