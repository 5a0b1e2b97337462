//! Side-effecting collaborators of the schedule driver.
//!
//! The driver only talks to these traits. File-backed stores live in
//! [`crate::storage`]; this module holds the git implementation and the
//! in-memory recorders used for dry runs and tests.

pub mod git;
pub mod memory;
pub mod traits;

pub use git::GitCli;
pub use memory::{MemoryActivityLog, MemoryArtifacts, MemoryVersionControl, RecordedCommit};
pub use traits::{ActivityLog, ArtifactWriter, VersionControl};
