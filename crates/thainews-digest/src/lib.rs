//! Aggregation pipeline: plan, fetch, deduplicate, report, persist.

pub mod engine;
pub mod progress;
pub mod report;

pub use engine::{ArchiveStatus, DigestEngine, DigestOutcome, SourceFailure};
pub use progress::{NoopProgress, ProgressObserver};
pub use report::{ReportBuilder, ReportContext, CLOSING_MARKER, NO_NEWS_MARKER};
