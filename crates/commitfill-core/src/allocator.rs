//! Capped random distribution of a week's commits over its days.
//!
//! Each date owns `max_per_day` slots and `target` of them are drawn without
//! replacement, so no date can exceed its cap and the counts always sum to
//! the target. Slots are counted per day rather than materialized, so a large
//! cap costs nothing.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::random::RandomSource;

/// Commits assigned to one date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DayPlan {
    pub date: NaiveDate,
    pub count: u32,
}

/// Distribute `target` commits over `dates` with at most `max_per_day` each.
///
/// Returns one plan per input date, in input order. A target above capacity
/// fills every slot.
pub fn allocate_days<R: RandomSource>(
    dates: &[NaiveDate],
    max_per_day: u32,
    target: u32,
    rng: &mut R,
) -> Vec<DayPlan> {
    let mut plans: Vec<DayPlan> = dates
        .iter()
        .map(|&date| DayPlan { date, count: 0 })
        .collect();

    let mut free_per_day = vec![max_per_day as usize; plans.len()];
    let mut free = plans.len().saturating_mul(max_per_day as usize);

    for _ in 0..target {
        if free == 0 {
            break;
        }
        let mut slot = rng.index(free);
        for (plan, left) in plans.iter_mut().zip(free_per_day.iter_mut()) {
            if slot < *left {
                *left -= 1;
                plan.count += 1;
                break;
            }
            slot -= *left;
        }
        free -= 1;
    }
    plans
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calendar::{date_range, parse_date};
    use crate::random::PcgSource;
    use proptest::prelude::*;

    fn week_dates(days: i64) -> Vec<NaiveDate> {
        let start = parse_date("2024-01-01").unwrap();
        date_range(start, start + chrono::Duration::days(days - 1)).collect()
    }

    #[test]
    fn test_three_commits_land_on_at_most_three_days() {
        let dates = week_dates(7);
        let mut rng = PcgSource::seeded(2024);
        let plans = allocate_days(&dates, 6, 3, &mut rng);

        assert_eq!(plans.len(), 7);
        assert_eq!(plans.iter().map(|p| p.count).sum::<u32>(), 3);
        assert!(plans.iter().filter(|p| p.count > 0).count() <= 3);
        assert!(plans.iter().all(|p| p.count <= 6));
        let order: Vec<_> = plans.iter().map(|p| p.date).collect();
        assert_eq!(order, dates);
    }

    #[test]
    fn test_full_capacity_fills_every_day() {
        let dates = week_dates(4);
        let mut rng = PcgSource::seeded(1);
        let plans = allocate_days(&dates, 2, 8, &mut rng);
        assert!(plans.iter().all(|p| p.count == 2));
    }

    #[test]
    fn test_target_above_capacity_saturates() {
        let dates = week_dates(1);
        let mut rng = PcgSource::seeded(1);
        let plans = allocate_days(&dates, 6, 10, &mut rng);
        assert_eq!(plans[0].count, 6);
    }

    #[test]
    fn test_zero_target_or_cap() {
        let dates = week_dates(7);
        let mut rng = PcgSource::seeded(1);
        assert!(allocate_days(&dates, 6, 0, &mut rng).iter().all(|p| p.count == 0));
        assert!(allocate_days(&dates, 0, 5, &mut rng).iter().all(|p| p.count == 0));
    }

    #[test]
    fn test_same_seed_same_allocation() {
        let dates = week_dates(7);
        let a = allocate_days(&dates, 6, 9, &mut PcgSource::seeded(77));
        let b = allocate_days(&dates, 6, 9, &mut PcgSource::seeded(77));
        assert_eq!(a, b);
    }

    #[test]
    fn test_every_day_is_reachable() {
        let dates = week_dates(7);
        let mut rng = PcgSource::seeded(3);
        let mut hits = [0u32; 7];
        for _ in 0..200 {
            for (i, plan) in allocate_days(&dates, 6, 1, &mut rng).iter().enumerate() {
                hits[i] += plan.count;
            }
        }
        assert!(hits.iter().all(|h| *h > 0), "hits: {hits:?}");
    }

    #[test]
    fn test_huge_cap_allocates_only_the_target() {
        let dates = week_dates(7);
        let mut rng = PcgSource::seeded(5);
        let plans = allocate_days(&dates, 2_000_000_000, 12, &mut rng);
        assert_eq!(plans.iter().map(|p| p.count).sum::<u32>(), 12);
    }

    proptest! {
        #[test]
        fn prop_counts_sum_to_target_and_respect_cap(
            days in 1i64..8,
            cap in 0u32..8,
            target_seed in any::<u32>(),
            seed in any::<u64>(),
        ) {
            let dates = week_dates(days);
            let capacity = dates.len() as u32 * cap;
            let target = if capacity == 0 { 0 } else { target_seed % (capacity + 1) };
            let mut rng = PcgSource::seeded(seed);

            let plans = allocate_days(&dates, cap, target, &mut rng);

            prop_assert_eq!(plans.len(), dates.len());
            prop_assert_eq!(plans.iter().map(|p| p.count).sum::<u32>(), target);
            prop_assert!(plans.iter().all(|p| p.count <= cap));
        }
    }
}
