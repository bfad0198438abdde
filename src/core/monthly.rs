//! Countable-hours calculation for a single calendar month.
//!
//! Primary service time always counts in full. Every other hour type shares
//! whatever is left of the 55-hour monthly ceiling once primary service is
//! accounted for, so any overflow is always attributed to the capped types.

use crate::core::model::ServiceEntry;
use chrono::Datelike;
use serde::Serialize;
use std::collections::BTreeMap;

/// Combined monthly ceiling for hours counted toward statistics.
pub const MONTHLY_CAP_HOURS: f64 = 55.0;

/// Derived totals for one calendar month. Recomputed on every query.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct MonthlyData {
    /// All recorded hours in the month
    pub total_hours: f64,
    /// Hours of the uncapped primary service type
    pub uncapped_hours: f64,
    /// Hours of all capped types combined
    pub capped_hours: f64,
    /// Portion of `capped_hours` that counts
    pub countable_capped_hours: f64,
    /// Portion of `capped_hours` excluded by the cap
    pub over_limit_hours: f64,
    /// Hours counted toward goals
    pub countable_hours: f64,
}

impl MonthlyData {
    /// Applies the capping rule to pre-summed hours.
    #[must_use]
    pub fn from_hours(uncapped_hours: f64, capped_hours: f64) -> Self {
        let countable_capped_hours = if uncapped_hours < MONTHLY_CAP_HOURS {
            capped_hours.min(MONTHLY_CAP_HOURS - uncapped_hours)
        } else {
            0.0
        };

        Self {
            total_hours: uncapped_hours + capped_hours,
            uncapped_hours,
            capped_hours,
            countable_capped_hours,
            over_limit_hours: capped_hours - countable_capped_hours,
            countable_hours: uncapped_hours + countable_capped_hours,
        }
    }

    /// Whether the cap excluded anything this month.
    #[must_use]
    pub fn is_over_limit(&self) -> bool {
        self.over_limit_hours > 0.0
    }
}

fn in_month(entry: &ServiceEntry, year: i32, month0: u32) -> bool {
    entry.date.year() == year && entry.date.month0() == month0
}

/// Computes [`MonthlyData`] for `(year, month0)` from an unfiltered entry list.
#[must_use]
pub fn compute_monthly_data(year: i32, month0: u32, entries: &[ServiceEntry]) -> MonthlyData {
    let (uncapped, capped) = entries
        .iter()
        .filter(|e| in_month(e, year, month0))
        .fold((0.0, 0.0), |(uncapped, capped), e| {
            if e.is_primary_service() {
                (uncapped + e.hours, capped)
            } else {
                (uncapped, capped + e.hours)
            }
        });

    MonthlyData::from_hours(uncapped, capped)
}

/// Raw (uncapped) hours per type id within one month.
#[must_use]
pub fn month_breakdown(year: i32, month0: u32, entries: &[ServiceEntry]) -> BTreeMap<String, f64> {
    let mut breakdown = BTreeMap::new();
    for entry in entries.iter().filter(|e| in_month(e, year, month0)) {
        *breakdown.entry(entry.type_id().to_string()).or_insert(0.0) += entry.hours;
    }
    breakdown
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    #![allow(clippy::float_cmp)]
    use super::*;
    use chrono::NaiveDate;

    fn entry(y: i32, m: u32, d: u32, hours: f64, hour_type: &str) -> ServiceEntry {
        ServiceEntry::new(NaiveDate::from_ymd_opt(y, m, d).unwrap(), hours, hour_type)
    }

    #[test]
    fn test_no_entries_is_all_zero() {
        assert_eq!(compute_monthly_data(2024, 8, &[]), MonthlyData::default());
    }

    #[test]
    fn test_primary_over_cap_excludes_all_capped_hours() {
        // 60h service + 10h other
        let entries = vec![
            entry(2024, 10, 3, 30.0, "service"),
            entry(2024, 10, 20, 30.0, "service"),
            entry(2024, 10, 21, 10.0, "ldc"),
        ];
        let data = compute_monthly_data(2024, 9, &entries);
        assert_eq!(data.countable_hours, 60.0);
        assert_eq!(data.over_limit_hours, 10.0);
        assert_eq!(data.total_hours, 70.0);
        assert!(data.is_over_limit());
    }

    #[test]
    fn test_capped_hours_fill_remaining_allowance() {
        // 40h service + 20h other
        let entries = vec![
            entry(2025, 3, 1, 40.0, "service"),
            entry(2025, 3, 2, 20.0, "ldc"),
        ];
        let data = compute_monthly_data(2025, 2, &entries);
        assert_eq!(data.countable_hours, 55.0);
        assert_eq!(data.countable_capped_hours, 15.0);
        assert_eq!(data.over_limit_hours, 5.0);
    }

    #[test]
    fn test_only_capped_hours_under_cap() {
        let entries = vec![entry(2025, 1, 15, 30.0, "ldc")];
        let data = compute_monthly_data(2025, 0, &entries);
        assert_eq!(data.countable_hours, 30.0);
        assert_eq!(data.over_limit_hours, 0.0);
        assert_eq!(data.uncapped_hours, 0.0);
    }

    #[test]
    fn test_exactly_at_cap_counts_primary_only() {
        let data = MonthlyData::from_hours(55.0, 4.0);
        assert_eq!(data.countable_hours, 55.0);
        assert_eq!(data.over_limit_hours, 4.0);
    }

    #[test]
    fn test_filters_other_months_and_years() {
        let entries = vec![
            entry(2024, 9, 30, 5.0, "service"),
            entry(2024, 10, 1, 2.0, "service"),
            entry(2023, 9, 15, 7.0, "service"),
        ];
        let data = compute_monthly_data(2024, 8, &entries);
        assert_eq!(data.total_hours, 5.0);
    }

    #[test]
    fn test_legacy_untyped_entries_are_uncapped() {
        let entries = vec![entry(2024, 9, 1, 58.0, ""), entry(2024, 9, 2, 3.0, "ldc")];
        let data = compute_monthly_data(2024, 8, &entries);
        assert_eq!(data.uncapped_hours, 58.0);
        assert_eq!(data.countable_hours, 58.0);
    }

    #[test]
    fn test_under_combined_cap_counts_everything() {
        for uncapped in [0.0, 10.0, 25.5, 40.0] {
            for capped in [0.0, 5.0, 14.5] {
                let data = MonthlyData::from_hours(uncapped, capped);
                assert_eq!(data.countable_hours, uncapped + capped);
                assert_eq!(data.over_limit_hours, 0.0);
            }
        }
    }

    #[test]
    fn test_countable_is_monotonic() {
        let steps: Vec<f64> = (0..=140).map(|i| f64::from(i) * 0.5).collect();
        for &capped in &steps {
            let mut previous = f64::NEG_INFINITY;
            for &uncapped in &steps {
                let countable = MonthlyData::from_hours(uncapped, capped).countable_hours;
                assert!(countable >= previous);
                previous = countable;
            }
        }
        for &uncapped in &steps {
            let mut previous = f64::NEG_INFINITY;
            for &capped in &steps {
                let data = MonthlyData::from_hours(uncapped, capped);
                assert!(data.countable_hours >= previous);
                if uncapped + capped >= MONTHLY_CAP_HOURS {
                    assert_eq!(data.countable_hours, uncapped.max(MONTHLY_CAP_HOURS));
                }
                previous = data.countable_hours;
            }
        }
    }

    #[test]
    fn test_month_breakdown_sums_raw_hours_per_type() {
        let entries = vec![
            entry(2024, 9, 1, 60.0, "service"),
            entry(2024, 9, 2, 1.5, ""),
            entry(2024, 9, 3, 12.0, "ldc"),
            entry(2024, 10, 3, 4.0, "ldc"),
        ];
        let breakdown = month_breakdown(2024, 8, &entries);
        assert_eq!(breakdown.len(), 2);
        assert_eq!(breakdown["service"], 61.5);
        assert_eq!(breakdown["ldc"], 12.0);
    }
}
