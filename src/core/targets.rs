//! Expected-to-date targets and variances for the selected period.
//!
//! Past periods are judged against the full goal, the current period against
//! a pro-rated goal, and future periods not at all.

use crate::core::{
    navigation::NavigationState,
    pacing::MONTHLY_GOAL_HOURS,
    service_year::{days_in_month, service_year_of, service_year_period},
};
use chrono::{Datelike, NaiveDate};
use serde::Serialize;
use std::cmp::Ordering;

/// Targets and differences for the selected month and service year.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct Targets {
    /// Monthly hours the selected month is judged against
    pub monthly_target: f64,
    /// Yearly hours the selected service year is judged against
    pub yearly_target: f64,
    /// Pro-rated monthly hours expected by today
    pub monthly_expected_today: f64,
    /// Actual minus target for the month (0 for future months)
    pub monthly_difference: f64,
    /// Pro-rated yearly hours expected by today
    pub yearly_expected_today: f64,
    /// Actual minus target for the service year (0 for future years)
    pub yearly_difference: f64,
}

/// Where a selected period sits relative to today.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Timing {
    Past,
    Current,
    Future,
}

impl From<Ordering> for Timing {
    fn from(ordering: Ordering) -> Self {
        match ordering {
            Ordering::Less => Self::Past,
            Ordering::Equal => Self::Current,
            Ordering::Greater => Self::Future,
        }
    }
}

/// Computes monthly and yearly targets for `state` as seen from `today`.
#[must_use]
pub fn compute_targets(
    state: &NavigationState,
    current_month_countable: f64,
    current_year_countable: f64,
    yearly_goal: u32,
    today: NaiveDate,
) -> Targets {
    let (monthly_target, monthly_difference) =
        month_target(state, current_month_countable, today);
    let (yearly_target, yearly_difference) =
        year_target(state, current_year_countable, f64::from(yearly_goal), today);

    Targets {
        monthly_target,
        yearly_target,
        monthly_expected_today: monthly_target,
        monthly_difference,
        yearly_expected_today: yearly_target,
        yearly_difference,
    }
}

fn month_target(state: &NavigationState, countable: f64, today: NaiveDate) -> (f64, f64) {
    let selected = (state.selected_year, state.selected_month);
    let current = (today.year(), today.month0());

    match Timing::from(selected.cmp(&current)) {
        Timing::Past => (MONTHLY_GOAL_HOURS, countable - MONTHLY_GOAL_HOURS),
        Timing::Current => {
            let days = days_in_month(state.selected_year, state.selected_month);
            let daily_goal = MONTHLY_GOAL_HOURS / f64::from(days);
            let expected = daily_goal * f64::from(today.day());
            (expected, countable - expected)
        }
        Timing::Future => (0.0, 0.0),
    }
}

fn year_target(
    state: &NavigationState,
    countable: f64,
    yearly_goal: f64,
    today: NaiveDate,
) -> (f64, f64) {
    let selected = state.selected_service_year;

    match Timing::from(selected.cmp(&service_year_of(today))) {
        Timing::Past => (yearly_goal, countable - yearly_goal),
        Timing::Current => {
            let period = service_year_period(selected);
            let days_elapsed = (today - period.start).num_days() + 1;

            // Cast safety: both day counts are at most 366
            #[allow(clippy::cast_precision_loss)]
            let expected =
                (yearly_goal / period.total_days() as f64 * days_elapsed as f64).max(0.0);
            (expected, countable - expected)
        }
        Timing::Future => (0.0, 0.0),
    }
}
