//! Daily pacing needed to reach the monthly and yearly goals.

use crate::core::service_year::{days_in_month_of, service_year_period};
use chrono::{Datelike, NaiveDate};
use serde::Serialize;

/// Fixed monthly sub-goal, independent of the yearly goal setting.
pub const MONTHLY_GOAL_HOURS: f64 = 50.0;

/// Hours per day still required, relative to a reference day.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct DailyRequirement {
    /// Hours per day to reach the monthly goal
    pub monthly_requirement: f64,
    /// Hours per day to reach the yearly goal
    pub yearly_requirement: f64,
    /// Days left in `today`'s month, today included
    pub days_remaining_in_month: i64,
    /// Days left in the service year, today included (may be negative once it has ended)
    pub days_remaining_in_year: i64,
}

// Cast safety: day counts are tiny, far below f64 mantissa precision
#[allow(clippy::cast_precision_loss)]
fn per_day(remaining_hours: f64, days: i64) -> f64 {
    if days > 0 {
        remaining_hours.max(0.0) / days as f64
    } else {
        0.0
    }
}

/// Computes the pace required from `today` onward.
#[must_use]
pub fn compute_daily_requirements(
    service_year: i32,
    current_month_countable: f64,
    current_year_countable: f64,
    yearly_goal: u32,
    today: NaiveDate,
) -> DailyRequirement {
    let days_remaining_in_month =
        i64::from(days_in_month_of(today)) - i64::from(today.day()) + 1;
    let days_remaining_in_year = (service_year_period(service_year).end - today).num_days() + 1;

    DailyRequirement {
        monthly_requirement: per_day(
            MONTHLY_GOAL_HOURS - current_month_countable,
            days_remaining_in_month,
        ),
        yearly_requirement: per_day(
            f64::from(yearly_goal) - current_year_countable,
            days_remaining_in_year,
        ),
        days_remaining_in_month,
        days_remaining_in_year,
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    #![allow(clippy::float_cmp)]
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_first_day_of_month() {
        // September has 30 days; 20h logged leaves 30h over 30 days
        let req = compute_daily_requirements(2024, 20.0, 20.0, 600, date(2024, 9, 1));
        assert_eq!(req.days_remaining_in_month, 30);
        assert_eq!(req.monthly_requirement, 1.0);
        assert_eq!(req.days_remaining_in_year, 365);
        assert_eq!(req.yearly_requirement, 580.0 / 365.0);
    }

    #[test]
    fn test_last_day_counts_today() {
        let req = compute_daily_requirements(2024, 45.0, 590.0, 600, date(2025, 8, 31));
        assert_eq!(req.days_remaining_in_month, 1);
        assert_eq!(req.monthly_requirement, 5.0);
        assert_eq!(req.days_remaining_in_year, 1);
        assert_eq!(req.yearly_requirement, 10.0);
    }

    #[test]
    fn test_goal_already_met_requires_nothing() {
        let req = compute_daily_requirements(2024, 70.0, 700.0, 600, date(2025, 2, 10));
        assert_eq!(req.monthly_requirement, 0.0);
        assert_eq!(req.yearly_requirement, 0.0);
    }

    #[test]
    fn test_leap_february() {
        let req = compute_daily_requirements(2023, 0.0, 0.0, 600, date(2024, 2, 20));
        assert_eq!(req.days_remaining_in_month, 10);
        assert_eq!(req.monthly_requirement, 5.0);
    }

    #[test]
    fn test_past_service_year_yields_zero() {
        let req = compute_daily_requirements(2022, 10.0, 100.0, 600, date(2024, 10, 1));
        assert!(req.days_remaining_in_year <= 0);
        assert_eq!(req.yearly_requirement, 0.0);
    }

    #[test]
    fn test_future_service_year_spreads_over_remaining_days() {
        let req = compute_daily_requirements(2025, 0.0, 0.0, 730, date(2025, 8, 31));
        // Aug 31 2025 .. Aug 31 2026 inclusive
        assert_eq!(req.days_remaining_in_year, 366);
        assert_eq!(req.yearly_requirement, 730.0 / 366.0);
    }
}
