//! Planned weeks and the events they emit.

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use serde::{Deserialize, Serialize};

use crate::allocator::DayPlan;
use crate::demand::WeekDemand;

/// One synthetic change: exactly one log entry, one artifact, one commit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Event {
    pub date: NaiveDate,
    pub time: NaiveTime,
    /// 1-based, restarts every day
    pub index: u32,
    pub commit_label: String,
    pub log_label: String,
}

impl Event {
    /// Wall-clock commit timestamp.
    pub fn timestamp(&self) -> NaiveDateTime {
        self.date.and_time(self.time)
    }
}

/// Everything decided for one week before any side effect happens.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeekPlan {
    pub week_key: NaiveDate,
    pub demand: WeekDemand,
    /// One entry per date of the week, including zero-count days
    pub days: Vec<DayPlan>,
    /// Ascending by date, then by index
    pub events: Vec<Event>,
}

impl WeekPlan {
    /// True when the week emits nothing.
    pub fn is_skipped(&self) -> bool {
        self.demand.chosen_commits == 0
    }

    /// Days that receive at least one commit.
    pub fn active_days(&self) -> impl Iterator<Item = &DayPlan> {
        self.days.iter().filter(|day| day.count > 0)
    }

    pub fn event_count(&self) -> usize {
        self.events.len()
    }
}
