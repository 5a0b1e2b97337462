//! Weekly commit demand weighted by month.
//!
//! The month of a week's first date selects a multiplier that scales the
//! base weekly bounds. The drawn count is then clamped to what the week's
//! days can absorb.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::calendar::Week;
use crate::random::RandomSource;

/// Month (1-12) to activity multiplier. Missing months weigh 1.0.
///
/// Keys are month numbers as strings so the table maps directly onto TOML.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MonthWeights(BTreeMap<String, f64>);

impl MonthWeights {
    pub fn empty() -> Self {
        Self(BTreeMap::new())
    }

    /// Weight for `month`, defaulting to 1.0.
    pub fn weight_for(&self, month: u32) -> f64 {
        self.0.get(&month.to_string()).copied().unwrap_or(1.0)
    }

    pub fn set(&mut self, month: u32, weight: f64) {
        self.0.insert(month.to_string(), weight);
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, f64)> {
        self.0.iter().map(|(k, v)| (k.as_str(), *v))
    }
}

impl Default for MonthWeights {
    /// Quieter winters, busier early summer.
    fn default() -> Self {
        let mut weights = Self::empty();
        for (month, weight) in [
            (1, 0.8),
            (2, 0.9),
            (3, 1.0),
            (4, 1.1),
            (5, 1.2),
            (6, 1.4),
            (7, 1.4),
            (8, 1.2),
            (9, 1.0),
            (10, 0.9),
            (11, 0.8),
            (12, 0.6),
        ] {
            weights.set(month, weight);
        }
        weights
    }
}

impl FromIterator<(u32, f64)> for MonthWeights {
    fn from_iter<I: IntoIterator<Item = (u32, f64)>>(iter: I) -> Self {
        let mut weights = Self::empty();
        for (month, weight) in iter {
            weights.set(month, weight);
        }
        weights
    }
}

/// Demand computed for one week.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WeekDemand {
    pub month: u32,
    pub weight: f64,
    pub min_commits: u32,
    pub max_commits: u32,
    /// Uniform draw in `[min_commits, max_commits]` before the capacity clamp
    pub drawn_commits: u32,
    /// Commits actually planned, `<= capacity`
    pub chosen_commits: u32,
    pub capacity: u32,
}

impl WeekDemand {
    pub fn is_clamped(&self) -> bool {
        self.chosen_commits < self.drawn_commits
    }
}

/// Inclusive `[min, max]` weekly commit range after weighting.
///
/// `min` is at least 1 and `max` is at least `min`.
pub fn demand_range(base_min: u32, base_max: u32, weight: f64) -> (u32, u32) {
    let min = scale(base_min, weight).max(1);
    let max = scale(base_max, weight).max(min);
    (min, max)
}

fn scale(base: u32, weight: f64) -> u32 {
    let scaled = (f64::from(base) * weight).round();
    if scaled.is_finite() && scaled > 0.0 {
        scaled.min(f64::from(u32::MAX)) as u32
    } else {
        0
    }
}

/// Maximum commits a week can absorb.
pub fn week_capacity(week: &Week, max_per_day: u32) -> u32 {
    (week.len() as u32).saturating_mul(max_per_day)
}

/// Compute the week's demand and draw its commit count.
///
/// A week with zero capacity plans zero commits without consuming randomness.
/// Draws above capacity are clamped down to capacity, never re-drawn.
pub fn draw_week_demand<R: RandomSource>(
    week: &Week,
    base_min: u32,
    base_max: u32,
    max_per_day: u32,
    weights: &MonthWeights,
    rng: &mut R,
) -> WeekDemand {
    let month = week.month();
    let weight = weights.weight_for(month);
    let (min_commits, max_commits) = demand_range(base_min, base_max, weight);
    let capacity = week_capacity(week, max_per_day);

    let drawn_commits = if capacity == 0 {
        0
    } else {
        rng.range_inclusive(min_commits as usize, max_commits as usize) as u32
    };

    WeekDemand {
        month,
        weight,
        min_commits,
        max_commits,
        drawn_commits,
        chosen_commits: drawn_commits.min(capacity),
        capacity,
    }
}
