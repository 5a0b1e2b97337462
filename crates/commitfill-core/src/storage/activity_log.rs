//! Activity log stored as a TypeScript module.
//!
//! The file exports a single array literal; each backfilled commit appends
//! one entry just before the closing `];`, which gives every commit a small,
//! real source change.

use std::path::{Path, PathBuf};

use chrono::NaiveDate;
use indoc::indoc;

use crate::calendar::format_date;
use crate::collaborators::ActivityLog;
use crate::error::{CoreError, Result};

const INITIAL_CONTENT: &str = indoc! {r#"
    /**
     * Auto-generated "activity log" to create small, real TypeScript changes
     * over time. Each backfilled commit will append one more entry here.
     */

    export interface ActivityEntry {
      date: string;      // ISO date like 2024-01-01
      message: string;   // short description
    }

    export const activityLog: ActivityEntry[] = [
    ];
"#};

/// Closing marker of the entry array.
const ARRAY_END: &str = "];";

/// [`ActivityLog`] backed by a `.ts` file on disk.
#[derive(Debug, Clone)]
pub struct ActivityLogFile {
    path: PathBuf,
}

impl ActivityLogFile {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

/// Format one entry line, quoting the message as a TS string literal.
fn entry_line(date: NaiveDate, message: &str) -> String {
    let escaped = message.replace('\\', "\\\\").replace('"', "\\\"");
    format!("  {{ date: \"{}\", message: \"{escaped}\" }},\n", format_date(date))
}

/// Insert `entry` before the last array terminator in `content`.
fn insert_entry(content: &str, entry: &str) -> Option<String> {
    let at = content.rfind(ARRAY_END)?;
    let mut updated = String::with_capacity(content.len() + entry.len());
    updated.push_str(&content[..at]);
    updated.push_str(entry);
    updated.push_str(&content[at..]);
    Some(updated)
}

impl ActivityLog for ActivityLogFile {
    fn ensure(&mut self) -> Result<()> {
        if self.path.exists() {
            return Ok(());
        }
        if let Some(dir) = self.path.parent().filter(|d| !d.as_os_str().is_empty()) {
            std::fs::create_dir_all(dir)?;
        }
        std::fs::write(&self.path, INITIAL_CONTENT)?;
        tracing::info!(path = %self.path.display(), "created activity log");
        Ok(())
    }

    fn append(&mut self, date: NaiveDate, message: &str) -> Result<()> {
        self.ensure()?;
        let content = std::fs::read_to_string(&self.path)?;
        let updated = insert_entry(&content, &entry_line(date, message)).ok_or_else(|| {
            CoreError::MalformedStore {
                path: self.path.clone(),
            }
        })?;
        std::fs::write(&self.path, updated)?;
        Ok(())
    }
}
