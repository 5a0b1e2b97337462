//! In-memory collaborators for dry runs and tests.
//!
//! Each recorder keeps every call in order and can be told to fail, which
//! lets callers observe exactly what a run would have written.

use std::path::PathBuf;

use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

use super::{ActivityLog, ArtifactWriter, VersionControl};
use crate::error::{CoreError, Result};

/// Activity log held in a `Vec`.
#[derive(Debug, Clone, Default)]
pub struct MemoryActivityLog {
    created: bool,
    malformed: bool,
    entries: Vec<(NaiveDate, String)>,
}

impl MemoryActivityLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// A store whose insertion marker is missing; every append fails.
    pub fn malformed() -> Self {
        Self {
            created: true,
            malformed: true,
            entries: Vec::new(),
        }
    }

    pub fn is_created(&self) -> bool {
        self.created
    }

    pub fn entries(&self) -> &[(NaiveDate, String)] {
        &self.entries
    }
}

impl ActivityLog for MemoryActivityLog {
    fn ensure(&mut self) -> Result<()> {
        self.created = true;
        Ok(())
    }

    fn append(&mut self, date: NaiveDate, message: &str) -> Result<()> {
        self.ensure()?;
        if self.malformed {
            return Err(CoreError::MalformedStore {
                path: PathBuf::from("<memory>"),
            });
        }
        self.entries.push((date, message.to_string()));
        Ok(())
    }
}

/// Records every touched `(date, index)`.
#[derive(Debug, Clone, Default)]
pub struct MemoryArtifacts {
    touched: Vec<(NaiveDate, u32)>,
}

impl MemoryArtifacts {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn touched(&self) -> &[(NaiveDate, u32)] {
        &self.touched
    }
}

impl ArtifactWriter for MemoryArtifacts {
    fn touch(&mut self, date: NaiveDate, index: u32) -> Result<()> {
        self.touched.push((date, index));
        Ok(())
    }
}

/// One commit captured by [`MemoryVersionControl`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecordedCommit {
    pub message: String,
    pub timestamp: NaiveDateTime,
}

/// Version control that keeps commits in memory.
#[derive(Debug, Clone, Default)]
pub struct MemoryVersionControl {
    commits: Vec<RecordedCommit>,
    fail_at: Option<usize>,
}

impl MemoryVersionControl {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fail the commit attempted after `successes` commits have been recorded.
    pub fn failing_after(successes: usize) -> Self {
        Self {
            commits: Vec::new(),
            fail_at: Some(successes),
        }
    }

    pub fn commits(&self) -> &[RecordedCommit] {
        &self.commits
    }
}

impl VersionControl for MemoryVersionControl {
    fn commit(&mut self, message: &str, timestamp: NaiveDateTime) -> Result<()> {
        if self.fail_at == Some(self.commits.len()) {
            return Err(CoreError::Commit {
                command: "git commit".into(),
                message: "simulated failure".into(),
            });
        }
        self.commits.push(RecordedCommit {
            message: message.to_string(),
            timestamp,
        });
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 5, 1).unwrap()
    }

    #[test]
    fn test_log_created_on_first_append() {
        let mut log = MemoryActivityLog::new();
        assert!(!log.is_created());
        log.append(date(), "a").unwrap();
        assert!(log.is_created());
        assert_eq!(log.entries(), &[(date(), "a".to_string())]);
    }

    #[test]
    fn test_malformed_log_rejects_appends() {
        let mut log = MemoryActivityLog::malformed();
        assert!(matches!(
            log.append(date(), "a"),
            Err(CoreError::MalformedStore { .. })
        ));
        assert!(log.entries().is_empty());
    }

    #[test]
    fn test_failing_vcs_keeps_earlier_commits() {
        let mut vcs = MemoryVersionControl::failing_after(1);
        let ts = date().and_hms_opt(10, 0, 0).unwrap();
        vcs.commit("one", ts).unwrap();
        assert!(vcs.commit("two", ts).is_err());
        assert_eq!(vcs.commits().len(), 1);
    }
}
