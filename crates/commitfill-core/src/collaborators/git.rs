//! Backdated commits through the `git` command line.

use std::path::{Path, PathBuf};
use std::process::{Command, Output};

use chrono::NaiveDateTime;

use super::VersionControl;
use crate::error::{CoreError, Result};

/// Timestamp layout handed to git; no offset, so git reads it as local time.
const GIT_DATE_FORMAT: &str = "%Y-%m-%dT%H:%M:%S";

/// [`VersionControl`] that shells out to `git` inside a working tree.
#[derive(Debug, Clone)]
pub struct GitCli {
    repo: PathBuf,
    program: PathBuf,
}

impl GitCli {
    pub fn new(repo: impl Into<PathBuf>) -> Self {
        Self {
            repo: repo.into(),
            program: PathBuf::from("git"),
        }
    }

    /// Use a different git executable.
    pub fn with_program(mut self, program: impl Into<PathBuf>) -> Self {
        self.program = program.into();
        self
    }

    pub fn repo(&self) -> &Path {
        &self.repo
    }

    fn run(&self, args: &[&str], date: Option<&str>) -> Result<Output> {
        let command_line = format!("git {}", args.join(" "));
        tracing::info!("> {command_line}");

        let mut command = Command::new(&self.program);
        command.args(args).current_dir(&self.repo);
        if let Some(date) = date {
            command
                .env("GIT_AUTHOR_DATE", date)
                .env("GIT_COMMITTER_DATE", date);
        }

        let output = command.output().map_err(|e| CoreError::Commit {
            command: command_line.clone(),
            message: e.to_string(),
        })?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr).trim().to_string();
            let stdout = String::from_utf8_lossy(&output.stdout).trim().to_string();
            let message = if stderr.is_empty() { stdout } else { stderr };
            return Err(CoreError::Commit {
                command: command_line,
                message: format!("exit status {}: {message}", output.status),
            });
        }
        Ok(output)
    }
}

impl VersionControl for GitCli {
    fn commit(&mut self, message: &str, timestamp: NaiveDateTime) -> Result<()> {
        let date = timestamp.format(GIT_DATE_FORMAT).to_string();
        self.run(&["add", "."], None)?;
        self.run(&["commit", "-m", message], Some(&date))?;
        Ok(())
    }
}
