use std::fs;
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};

use chrono::NaiveDateTime;

use thainews_core::Snapshot;

use crate::error::ArchiveError;

/// Format a local run time the way snapshot files record it.
#[must_use]
pub fn snapshot_timestamp(at: &NaiveDateTime) -> String {
    at.format("%Y-%m-%d %H:%M:%S").to_string()
}

/// Single-file store for the most recent [`Snapshot`].
///
/// One writer (the aggregation engine, once per run) and any number of
/// sequential readers. Saves go to a sibling temp file that is then renamed
/// over the target, so a reader sees either the old or the new snapshot.
#[derive(Debug, Clone)]
pub struct ArchiveStore {
    path: PathBuf,
}

impl ArchiveStore {
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn temp_path(&self) -> PathBuf {
        let mut tmp = self.path.clone().into_os_string();
        tmp.push(".tmp");
        PathBuf::from(tmp)
    }

    fn io_error(path: &Path, source: std::io::Error) -> ArchiveError {
        ArchiveError::Io {
            path: path.display().to_string(),
            source,
        }
    }

    /// Replace the stored snapshot with `snapshot`.
    ///
    /// # Errors
    ///
    /// Returns [`ArchiveError::Serialize`] if encoding fails and
    /// [`ArchiveError::Io`] if the temp file cannot be written or renamed.
    pub fn save(&self, snapshot: &Snapshot) -> Result<(), ArchiveError> {
        let json = serde_json::to_string_pretty(snapshot).map_err(ArchiveError::Serialize)?;

        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(|e| Self::io_error(parent, e))?;
        }

        let tmp = self.temp_path();
        let write_tmp = || -> std::io::Result<()> {
            let mut file = fs::File::create(&tmp)?;
            file.write_all(json.as_bytes())?;
            file.write_all(b"\n")?;
            file.sync_all()
        };
        if let Err(e) = write_tmp() {
            let _ = fs::remove_file(&tmp);
            return Err(Self::io_error(&tmp, e));
        }

        fs::rename(&tmp, &self.path).map_err(|e| {
            let _ = fs::remove_file(&tmp);
            Self::io_error(&self.path, e)
        })?;

        tracing::debug!(
            path = %self.path.display(),
            entries = snapshot.entries.len(),
            "snapshot saved"
        );
        Ok(())
    }

    /// Read the stored snapshot, or `None` if no run has been saved yet.
    ///
    /// # Errors
    ///
    /// Returns [`ArchiveError::Corrupt`] if the file exists but is not a valid
    /// snapshot, and [`ArchiveError::Io`] for any other read failure.
    pub fn load(&self) -> Result<Option<Snapshot>, ArchiveError> {
        let content = match fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(Self::io_error(&self.path, e)),
        };

        let snapshot =
            serde_json::from_str::<Snapshot>(&content).map_err(|e| ArchiveError::Corrupt {
                path: self.path.display().to_string(),
                source: e,
            })?;
        Ok(Some(snapshot))
    }
}
