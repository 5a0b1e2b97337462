//! Per-commit helper files so each commit touches distinct content.

use std::path::{Path, PathBuf};

use chrono::{Datelike, NaiveDate};

use crate::calendar::format_date;
use crate::collaborators::ArtifactWriter;
use crate::error::Result;

/// Writes `{root}/{YYYY}/{MM}/{YYYY-MM-DD}-commit-{index}.ts`.
#[derive(Debug, Clone)]
pub struct HelperFileWriter {
    root: PathBuf,
}

impl HelperFileWriter {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Location of the helper for `(date, index)`.
    pub fn path_for(&self, date: NaiveDate, index: u32) -> PathBuf {
        self.root
            .join(format!("{}", date.year()))
            .join(format!("{:02}", date.month()))
            .join(format!("{}-commit-{index}.ts", format_date(date)))
    }
}

fn helper_source(date: NaiveDate, index: u32) -> String {
    let day = format_date(date);
    let ident = day.replace('-', "_");
    format!(
        "// Auto-generated helper for {day}, commit #{index}\n\
         export function helper_{ident}_{index}() {{\n  \
         return \"{day} \u{2013} commit {index}\";\n\
         }}\n"
    )
}

impl ArtifactWriter for HelperFileWriter {
    fn touch(&mut self, date: NaiveDate, index: u32) -> Result<()> {
        let path = self.path_for(date, index);
        if let Some(dir) = path.parent() {
            std::fs::create_dir_all(dir)?;
        }
        std::fs::write(&path, helper_source(date, index))?;
        tracing::trace!(path = %path.display(), "touched helper");
        Ok(())
    }
}
