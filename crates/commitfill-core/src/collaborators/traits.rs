use chrono::{NaiveDate, NaiveDateTime};

use crate::error::Result;

/// Append-only store of activity entries.
///
/// Appending must preserve the order of earlier entries.
pub trait ActivityLog {
    /// Create the store with an empty entry sequence if it does not exist yet.
    fn ensure(&mut self) -> Result<()>;

    /// Append one `{date, message}` record, creating the store first if needed.
    ///
    /// Fails with `MalformedStore` when the insertion point cannot be found.
    fn append(&mut self, date: NaiveDate, message: &str) -> Result<()>;
}

/// Writes a uniquely named placeholder per `(date, index)`.
pub trait ArtifactWriter {
    /// Create or overwrite the artifact for the `index`-th event on `date`.
    fn touch(&mut self, date: NaiveDate, index: u32) -> Result<()>;
}

/// Records the current working tree as a commit.
pub trait VersionControl {
    /// Commit everything under `message`, using `timestamp` verbatim as both
    /// author and committer date.
    ///
    /// Fails with `Commit` on any underlying failure.
    fn commit(&mut self, message: &str, timestamp: NaiveDateTime) -> Result<()>;
}
