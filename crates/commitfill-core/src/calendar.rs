//! Calendar helpers: inclusive date ranges and Monday-keyed weeks.
//!
//! Weeks start on Monday. A week is identified by its Monday date (the
//! *week key*) even when that Monday lies before the start of the range;
//! only the dates inside the range belong to the week.

use chrono::{Datelike, Duration, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::error::{CoreError, Result};

const DATE_FORMAT: &str = "%Y-%m-%d";

/// Parse a `YYYY-MM-DD` date.
pub fn parse_date(s: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(s.trim(), DATE_FORMAT)
        .map_err(|e| CoreError::invalid(format!("invalid date '{s}': {e}")))
}

/// Render a date as `YYYY-MM-DD`.
pub fn format_date(date: NaiveDate) -> String {
    date.format(DATE_FORMAT).to_string()
}

/// The Monday on or before `date`.
pub fn week_key(date: NaiveDate) -> NaiveDate {
    let since_monday = date.weekday().num_days_from_monday();
    date - Duration::days(i64::from(since_monday))
}

/// Inclusive range of calendar dates. Only constructed through [`DateRange::new`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DateRange {
    start: NaiveDate,
    end: NaiveDate,
}

impl DateRange {
    /// Create a range; fails when `start` is after `end`.
    pub fn new(start: NaiveDate, end: NaiveDate) -> Result<Self> {
        if start > end {
            return Err(CoreError::invalid(format!(
                "start date {} is after end date {}",
                format_date(start),
                format_date(end)
            )));
        }
        Ok(Self { start, end })
    }

    /// Parse both bounds from `YYYY-MM-DD` strings.
    pub fn parse(start: &str, end: &str) -> Result<Self> {
        Self::new(parse_date(start)?, parse_date(end)?)
    }

    pub fn start(&self) -> NaiveDate {
        self.start
    }

    pub fn end(&self) -> NaiveDate {
        self.end
    }

    /// Number of dates in the range.
    pub fn len(&self) -> usize {
        ((self.end - self.start).num_days() + 1) as usize
    }

    pub fn is_empty(&self) -> bool {
        self.start > self.end
    }

    /// Every date in the range, ascending.
    pub fn dates(&self) -> DateIter {
        date_range(self.start, self.end)
    }

    /// Group the range into weeks ordered by week key.
    pub fn weeks(&self) -> Vec<Week> {
        partition_weeks(self)
    }
}

/// Lazy iterator over an inclusive span of dates.
#[derive(Debug, Clone)]
pub struct DateIter {
    next: Option<NaiveDate>,
    end: NaiveDate,
}

impl Iterator for DateIter {
    type Item = NaiveDate;

    fn next(&mut self) -> Option<NaiveDate> {
        let current = self.next.filter(|d| *d <= self.end)?;
        self.next = current.succ_opt();
        Some(current)
    }
}

/// Every date from `start` to `end` inclusive. Empty when `start > end`.
pub fn date_range(start: NaiveDate, end: NaiveDate) -> DateIter {
    DateIter {
        next: Some(start),
        end,
    }
}

/// A Monday-starting week clipped to the surrounding range.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Week {
    /// Monday of this week
    pub key: NaiveDate,
    /// Dates inside both the week and the range, ascending and non-empty
    pub dates: Vec<NaiveDate>,
}

impl Week {
    /// Month (1-12) of the first date in the week.
    pub fn month(&self) -> u32 {
        self.first_date().month()
    }

    pub fn first_date(&self) -> NaiveDate {
        // Weeks are only built by `partition_weeks`, which never leaves one empty.
        self.dates.first().copied().unwrap_or(self.key)
    }

    pub fn len(&self) -> usize {
        self.dates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.dates.is_empty()
    }
}

/// Partition a range into weeks, ascending by key, dates ascending within each.
pub fn partition_weeks(range: &DateRange) -> Vec<Week> {
    let mut weeks: Vec<Week> = Vec::new();
    for date in range.dates() {
        let key = week_key(date);
        match weeks.last_mut() {
            Some(week) if week.key == key => week.dates.push(date),
            _ => weeks.push(Week {
                key,
                dates: vec![date],
            }),
        }
    }
    weeks
}
