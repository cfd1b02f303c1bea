//! Source planning: which search feeds a run should hit.

use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};

use thainews_core::{FeedQuery, ScanMode, DEFAULT_FEED_BASE_URL};

/// Locale parameters appended to every search URL.
pub const LOCALE_PARAMS: &str = "hl=en-TH&gl=TH&ceid=TH:en";

/// Bytes left unescaped inside a search word (RFC 3986 unreserved set).
const WORD_ESCAPES: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'.')
    .remove(b'_')
    .remove(b'~');

/// A fixed broad-scan category: display name plus raw search terms.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Category {
    pub name: &'static str,
    pub terms: &'static str,
}

/// The broad-scan categories, in the order they are queried and reported.
pub const BROAD_SCAN_CATEGORIES: [Category; 3] = [
    Category {
        name: "Thailand General News",
        terms: "Thailand",
    },
    Category {
        name: "Thailand PCB & Electronics Manufacturing",
        terms: "Thailand PCB OR \"Printed Circuit Board\" OR \"Electronics Manufacturing\" OR \"Server Production\"",
    },
    Category {
        name: "Taiwan-Thailand Relations",
        terms: "Thailand Taiwan OR \"Taiwanese investment\" OR \"Taiwan companies\" OR \"Trade Relations\"",
    },
];

/// Encode free-text search terms for the `q` parameter.
///
/// Each whitespace-separated word is percent-escaped and the words are joined
/// with a literal `+`, so `"Delta Electronics" Thailand` becomes
/// `%22Delta+Electronics%22+Thailand`.
#[must_use]
pub fn encode_terms(terms: &str) -> String {
    terms
        .split_whitespace()
        .map(|word| utf8_percent_encode(word, WORD_ESCAPES).to_string())
        .collect::<Vec<_>>()
        .join("+")
}

/// Builds [`FeedQuery`] plans against a search-feed endpoint.
#[derive(Debug, Clone)]
pub struct SourcePlanner {
    base_url: String,
}

impl Default for SourcePlanner {
    fn default() -> Self {
        Self::new(DEFAULT_FEED_BASE_URL)
    }
}

impl SourcePlanner {
    #[must_use]
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
        }
    }

    /// Plan the queries for a window and optional keyword.
    ///
    /// A non-blank keyword yields one deep-dive query; otherwise the three
    /// [`BROAD_SCAN_CATEGORIES`] are returned in order.
    #[must_use]
    pub fn plan(&self, window_days: u32, keyword: Option<&str>) -> Vec<FeedQuery> {
        self.plan_for_mode(&ScanMode::from_keyword(keyword), window_days)
    }

    #[must_use]
    pub fn plan_for_mode(&self, mode: &ScanMode, window_days: u32) -> Vec<FeedQuery> {
        match mode {
            ScanMode::DeepDive { keyword } => vec![FeedQuery {
                name: format!("Deep dive: {keyword}"),
                url: self.search_url(keyword, window_days),
            }],
            ScanMode::BroadScan => BROAD_SCAN_CATEGORIES
                .iter()
                .map(|category| FeedQuery {
                    name: category.name.to_string(),
                    url: self.search_url(category.terms, window_days),
                })
                .collect(),
        }
    }

    fn search_url(&self, terms: &str, window_days: u32) -> String {
        format!(
            "{base}?q={terms}+when:{window_days}d&{LOCALE_PARAMS}",
            base = self.base_url,
            terms = encode_terms(terms),
        )
    }
}

/// Plan against the public Google News search endpoint.
#[must_use]
pub fn plan(window_days: u32, keyword: Option<&str>) -> Vec<FeedQuery> {
    SourcePlanner::default().plan(window_days, keyword)
}
