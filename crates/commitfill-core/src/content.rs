//! Synthetic commit and activity-log labels.

use chrono::{NaiveDate, NaiveTime};

use crate::calendar::format_date;
use crate::random::RandomSource;

pub const CATEGORIES: &[&str] = &["feat", "fix", "refactor", "docs", "chore", "test"];

pub const MODULES: &[&str] = &[
    "auth",
    "user-profile",
    "dashboard",
    "analytics",
    "notifications",
    "settings",
    "payments",
    "api-client",
    "routing",
    "utils",
];

pub const ACTIONS: &[&str] = &[
    "add helper",
    "improve typing",
    "cleanup imports",
    "handle edge cases",
    "simplify logic",
    "adjust validation",
    "tweak config",
    "update docs",
    "add tests",
    "optimize function",
];

pub const ACTIVITY_PHRASES: &[&str] = &[
    "Polished a small part of the codebase.",
    "Did a small refactor for clarity.",
    "Tweaked typings for better safety.",
    "Added a tiny helper for reuse.",
    "Improved some internal docs.",
    "Made a minor internal change.",
    "Adjusted logic for consistency.",
    "Cleaned up a few details.",
    "Touched a utility to support future work.",
    "Incremental improvement, nothing big.",
];

/// `"{category}: {module} – {action} ({date} #{index})"`
pub fn commit_label<R: RandomSource>(date: NaiveDate, index: u32, rng: &mut R) -> String {
    let category = rng.pick(CATEGORIES);
    let module = rng.pick(MODULES);
    let action = rng.pick(ACTIONS);
    format!(
        "{category}: {module} \u{2013} {action} ({} #{index})",
        format_date(date)
    )
}

/// `"[{date} #{index}] {phrase} (module: {module})."`
pub fn log_label<R: RandomSource>(date: NaiveDate, index: u32, rng: &mut R) -> String {
    let phrase = rng.pick(ACTIVITY_PHRASES);
    let module = rng.pick(MODULES);
    format!("[{} #{index}] {phrase} (module: {module}).", format_date(date))
}

/// Random time in `[start_hour, end_hour)` with a random minute.
pub fn time_of_day<R: RandomSource>(start_hour: u32, end_hour: u32, rng: &mut R) -> NaiveTime {
    let last_hour = end_hour.saturating_sub(1).max(start_hour);
    let hour = rng.range_inclusive(start_hour as usize, last_hour as usize) as u32;
    let minute = rng.range_inclusive(0, 59) as u32;
    NaiveTime::from_hms_opt(hour.min(23), minute.min(59), 0).unwrap_or_default()
}
