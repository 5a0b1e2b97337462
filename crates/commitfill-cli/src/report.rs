//! Console output for planning summaries.

use commitfill_core::{
    format_date, DayPlan, Event, RunReporter, RunSummary, ScheduleSettings, WeekPlan,
};

/// Prints per-week and per-day summaries to stdout.
pub struct ConsoleReporter {
    show_commits: bool,
}

impl ConsoleReporter {
    pub fn new(show_commits: bool) -> Self {
        Self { show_commits }
    }
}

pub fn week_heading(plan: &WeekPlan) -> String {
    format!(
        "=== Week starting {} (month {}, weight {:.2}): planning {} commit(s) ===",
        format_date(plan.week_key),
        plan.demand.month,
        plan.demand.weight,
        plan.demand.chosen_commits
    )
}

pub fn day_line(day: &DayPlan) -> String {
    format!("  - {}: {} commit(s)", format_date(day.date), day.count)
}

impl RunReporter for ConsoleReporter {
    fn on_run_start(&mut self, settings: &ScheduleSettings) {
        println!(
            "Backfilling commits from {} to {}...",
            format_date(settings.range.start()),
            format_date(settings.range.end())
        );
        println!(
            "Base weekly commits: {}\u{2013}{}, maxCommitsPerDay: {}",
            settings.base_min_commits_per_week,
            settings.base_max_commits_per_week,
            settings.max_commits_per_day
        );
    }

    fn on_week_planned(&mut self, plan: &WeekPlan) {
        println!("\n{}", week_heading(plan));
    }

    fn on_day_planned(&mut self, day: &DayPlan) {
        println!("{}", day_line(day));
    }

    fn on_week_skipped(&mut self, plan: &WeekPlan) {
        println!(
            "\n=== Week starting {}: no capacity, skipped ===",
            format_date(plan.week_key)
        );
    }

    fn on_event_committed(&mut self, event: &Event) {
        if self.show_commits {
            println!(
                "    {} {}",
                event.timestamp().format("%Y-%m-%d %H:%M"),
                event.commit_label
            );
        }
    }

    fn on_run_complete(&mut self, summary: &RunSummary) {
        tracing::info!(
            weeks = summary.weeks_planned,
            skipped = summary.weeks_skipped,
            commits = summary.events_committed,
            "run summary"
        );
    }
}
