//! Schedule driver.
//!
//! Walks the configured range week by week:
//! - Partitions the range into Monday-keyed weeks
//! - Draws each week's demand and spreads it over the days
//! - Generates labels and timestamps for every event
//! - Appends the log entry, touches the artifact and commits, one event at a time
//!
//! Planning only consumes randomness; all side effects go through the
//! collaborator traits, so [`ScheduleDriver::plan`] doubles as a dry run.

mod plan;
mod report;

pub use plan::{Event, WeekPlan};
pub use report::{RunReporter, RunSummary, SilentReporter};

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::allocator::allocate_days;
use crate::calendar::Week;
use crate::collaborators::{ActivityLog, ArtifactWriter, VersionControl};
use crate::content::{commit_label, log_label, time_of_day};
use crate::demand::draw_week_demand;
use crate::error::Result;
use crate::random::RandomSource;
use crate::storage::ScheduleSettings;

/// Where the driver currently is in a run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum DriverState {
    Idle,
    PartitioningWeeks,
    ComputingDemand { week_key: NaiveDate },
    AllocatingDays { week_key: NaiveDate },
    EmittingEvents { week_key: NaiveDate },
    Done,
}

/// Plans and executes a backfill over the configured range.
pub struct ScheduleDriver<R: RandomSource> {
    settings: ScheduleSettings,
    rng: R,
    state: DriverState,
}

impl<R: RandomSource> ScheduleDriver<R> {
    pub fn new(settings: ScheduleSettings, rng: R) -> Self {
        Self {
            settings,
            rng,
            state: DriverState::Idle,
        }
    }

    pub fn settings(&self) -> &ScheduleSettings {
        &self.settings
    }

    pub fn state(&self) -> DriverState {
        self.state
    }

    fn transition(&mut self, next: DriverState) {
        tracing::debug!(from = ?self.state, to = ?next, "driver state");
        self.state = next;
    }

    /// Draw demand, allocate days and generate every event for one week.
    pub fn plan_week(&mut self, week: &Week) -> WeekPlan {
        self.transition(DriverState::ComputingDemand { week_key: week.key });
        let demand = draw_week_demand(
            week,
            self.settings.base_min_commits_per_week,
            self.settings.base_max_commits_per_week,
            self.settings.max_commits_per_day,
            &self.settings.monthly_weights,
            &mut self.rng,
        );
        if demand.is_clamped() {
            tracing::warn!(
                week = %week.key,
                drawn = demand.drawn_commits,
                capacity = demand.capacity,
                "weekly draw exceeds capacity, clamping"
            );
        }

        if demand.chosen_commits == 0 {
            return WeekPlan {
                week_key: week.key,
                demand,
                days: Vec::new(),
                events: Vec::new(),
            };
        }

        self.transition(DriverState::AllocatingDays { week_key: week.key });
        let days = allocate_days(
            &week.dates,
            self.settings.max_commits_per_day,
            demand.chosen_commits,
            &mut self.rng,
        );

        let mut events = Vec::with_capacity(demand.chosen_commits as usize);
        for day in days.iter().filter(|day| day.count > 0) {
            for index in 1..=day.count {
                let time = time_of_day(
                    self.settings.work_start_hour,
                    self.settings.work_end_hour,
                    &mut self.rng,
                );
                events.push(Event {
                    date: day.date,
                    time,
                    index,
                    commit_label: commit_label(day.date, index, &mut self.rng),
                    log_label: log_label(day.date, index, &mut self.rng),
                });
            }
        }

        WeekPlan {
            week_key: week.key,
            demand,
            days,
            events,
        }
    }

    /// Plan the whole range without touching any collaborator.
    pub fn plan(&mut self) -> Vec<WeekPlan> {
        self.transition(DriverState::PartitioningWeeks);
        let weeks = self.settings.range.weeks();
        let plans = weeks.iter().map(|week| self.plan_week(week)).collect();
        self.transition(DriverState::Done);
        plans
    }

    /// Plan and execute the whole range.
    ///
    /// Weeks run in ascending order; each week is planned and reported before
    /// its events are executed. The first failing collaborator call aborts the
    /// run; everything written before it stays.
    pub fn run<L, A, V>(
        &mut self,
        log: &mut L,
        artifacts: &mut A,
        vcs: &mut V,
        reporter: &mut dyn RunReporter,
    ) -> Result<RunSummary>
    where
        L: ActivityLog + ?Sized,
        A: ArtifactWriter + ?Sized,
        V: VersionControl + ?Sized,
    {
        tracing::info!(
            start = %self.settings.range.start(),
            end = %self.settings.range.end(),
            "starting backfill"
        );
        reporter.on_run_start(&self.settings);

        self.transition(DriverState::PartitioningWeeks);
        let weeks = self.settings.range.weeks();
        log.ensure()?;

        let mut summary = RunSummary::default();
        for week in &weeks {
            let plan = self.plan_week(week);
            if plan.is_skipped() {
                tracing::info!(week = %plan.week_key, "skipping week with no capacity");
                summary.weeks_skipped += 1;
                reporter.on_week_skipped(&plan);
                continue;
            }

            tracing::info!(
                week = %plan.week_key,
                commits = plan.demand.chosen_commits,
                "planned week"
            );
            summary.weeks_planned += 1;
            reporter.on_week_planned(&plan);
            for day in plan.active_days() {
                reporter.on_day_planned(day);
            }

            self.transition(DriverState::EmittingEvents { week_key: week.key });
            for event in &plan.events {
                tracing::debug!(date = %event.date, index = event.index, "emitting event");
                log.append(event.date, &event.log_label)?;
                artifacts.touch(event.date, event.index)?;
                vcs.commit(&event.commit_label, event.timestamp())?;
                summary.events_committed += 1;
                reporter.on_event_committed(event);
            }
        }

        self.transition(DriverState::Done);
        tracing::info!(events = summary.events_committed, "backfill complete");
        reporter.on_run_complete(&summary);
        Ok(summary)
    }
}
