//! # commitfill Core Library
//!
//! This library provides the scheduling logic behind `commitfill`, a tool
//! that backfills a repository with a plausible history of small, backdated
//! commits. The CLI binary is a thin layer over the same core library.
//!
//! ## Architecture
//!
//! - **Calendar**: inclusive date ranges and Monday-keyed weeks
//! - **Demand**: month-weighted weekly commit counts, clamped to capacity
//! - **Allocator**: capped random distribution of a week's commits over its days
//! - **Content**: synthetic commit messages, log lines and times of day
//! - **Driver**: the week-by-week state machine that plans and executes a run
//! - **Collaborators**: activity log, artifact writer and version control,
//!   behind traits with file-system, git and in-memory implementations
//!
//! ## Key Components
//!
//! - [`ScheduleDriver`]: plans and executes a backfill
//! - [`Config`]: TOML configuration, validated into [`ScheduleSettings`]
//! - [`RandomSource`]: injectable randomness
//! - [`ActivityLog`], [`ArtifactWriter`], [`VersionControl`]: side-effect seams

pub mod allocator;
pub mod calendar;
pub mod collaborators;
pub mod content;
pub mod demand;
pub mod driver;
pub mod error;
pub mod random;
pub mod storage;

pub use allocator::{allocate_days, DayPlan};
pub use calendar::{
    date_range, format_date, parse_date, partition_weeks, week_key, DateRange, Week,
};
pub use collaborators::{
    ActivityLog, ArtifactWriter, GitCli, MemoryActivityLog, MemoryArtifacts,
    MemoryVersionControl, RecordedCommit, VersionControl,
};
pub use demand::{demand_range, draw_week_demand, MonthWeights, WeekDemand};
pub use driver::{
    DriverState, Event, RunReporter, RunSummary, ScheduleDriver, SilentReporter, WeekPlan,
};
pub use error::{ConfigError, CoreError, Result};
pub use random::{PcgSource, RandomSource};
pub use storage::{
    ActivityLogFile, Config, HelperFileWriter, ScheduleSettings, DEFAULT_CONFIG_FILE,
};
