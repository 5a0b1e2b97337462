//! Progress hooks invoked while a backfill runs.

use serde::{Deserialize, Serialize};

use super::plan::{Event, WeekPlan};
use crate::allocator::DayPlan;
use crate::storage::ScheduleSettings;

/// Totals for a completed run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RunSummary {
    pub weeks_planned: usize,
    pub weeks_skipped: usize,
    pub events_committed: usize,
}

/// Observer of run progress. Every hook defaults to a no-op.
pub trait RunReporter {
    fn on_run_start(&mut self, _settings: &ScheduleSettings) {}

    /// Called before any of the week's events are executed.
    fn on_week_planned(&mut self, _plan: &WeekPlan) {}

    /// Called for each day with a non-zero count, right after `on_week_planned`.
    fn on_day_planned(&mut self, _day: &DayPlan) {}

    fn on_week_skipped(&mut self, _plan: &WeekPlan) {}

    fn on_event_committed(&mut self, _event: &Event) {}

    fn on_run_complete(&mut self, _summary: &RunSummary) {}
}

/// Reporter that ignores every hook.
#[derive(Debug, Clone, Copy, Default)]
pub struct SilentReporter;

impl RunReporter for SilentReporter {}
