//! Statistics report generation.
//!
//! Combines the monthly, yearly, pacing and target calculations for one
//! navigation state into a single structured value the bot layer formats.
//! Everything here is pure: callers pass the entries, settings and today's
//! date explicitly.

use crate::core::{
    model::{ServiceEntry, Settings},
    monthly::{MonthlyData, compute_monthly_data, month_breakdown},
    navigation::NavigationState,
    pacing::{DailyRequirement, compute_daily_requirements},
    targets::{Targets, compute_targets},
    time::{format_signed_time, format_time},
    yearly::{
        MonthSummary, ServiceYearData, compute_yearly_countable, monthly_series,
        service_year_breakdown,
    },
};
use chrono::NaiveDate;
use serde::Serialize;
use std::collections::BTreeMap;

/// Text shown when a breakdown has nothing to list.
pub const EMPTY_BREAKDOWN: &str = "No entries";

/// Everything the statistics view shows for one selected period.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StatisticsReport {
    /// The period this report describes
    pub state: NavigationState,
    /// `"October 2025"`
    pub month_label: String,
    /// `"2025/2026"`
    pub service_year_label: String,
    /// Capped totals for the selected month
    pub month: MonthlyData,
    /// Raw hours per type for the selected month
    pub month_breakdown: BTreeMap<String, f64>,
    /// Countable hours across the selected service year
    pub year_countable_hours: f64,
    /// Raw totals for the selected service year
    pub year: ServiceYearData,
    /// Configured yearly goal
    pub yearly_goal: u32,
    /// `countable / goal * 100`
    pub goal_progress_percent: f64,
    /// Countable hours still missing from the goal, never negative
    pub hours_to_goal: f64,
    /// Pace needed from today toward the selected month's and service year's goals
    pub daily: DailyRequirement,
    /// Expected-to-date targets for the selected period
    pub targets: Targets,
    /// The twelve months of the selected service year, September first
    pub series: Vec<MonthSummary>,
}

/// Builds the statistics report for `state`.
///
/// Totals, pacing, targets and the series all follow the selected period.
/// `today` only anchors the remaining-day counts and the pro-rated targets.
#[must_use]
pub fn generate_statistics_report(
    entries: &[ServiceEntry],
    settings: &Settings,
    state: &NavigationState,
    today: NaiveDate,
) -> StatisticsReport {
    let month = compute_monthly_data(state.selected_year, state.selected_month, entries);
    let year_countable_hours = compute_yearly_countable(state.selected_service_year, entries);

    let daily = compute_daily_requirements(
        state.selected_service_year,
        month.countable_hours,
        year_countable_hours,
        settings.yearly_goal,
        today,
    );

    let targets = compute_targets(
        state,
        month.countable_hours,
        year_countable_hours,
        settings.yearly_goal,
        today,
    );

    StatisticsReport {
        state: *state,
        month_label: state.month_label(),
        service_year_label: state.service_year_label(),
        month,
        month_breakdown: month_breakdown(state.selected_year, state.selected_month, entries),
        year_countable_hours,
        year: service_year_breakdown(state.selected_service_year, entries),
        yearly_goal: settings.yearly_goal,
        goal_progress_percent: calculate_goal_progress(year_countable_hours, settings.yearly_goal),
        hours_to_goal: (f64::from(settings.yearly_goal) - year_countable_hours).max(0.0),
        daily,
        targets,
        series: monthly_series(state.selected_service_year, entries),
    }
}

/// Percentage of the yearly goal reached; 0 for a zero goal.
#[must_use]
pub fn calculate_goal_progress(countable: f64, yearly_goal: u32) -> f64 {
    if yearly_goal == 0 {
        return 0.0;
    }
    countable / f64::from(yearly_goal) * 100.0
}

/// Generates a text progress bar like `[████████░░] 80.0%`.
///
/// The bar is clamped to 0..=100 but the printed percentage is not, so an
/// exceeded goal still reads e.g. `112.5%`.
#[must_use]
pub fn format_progress_bar(progress_percent: f64, bar_length: Option<usize>) -> String {
    let length = bar_length.unwrap_or(10);
    let clamped_progress = progress_percent.clamp(0.0, 100.0);

    // Cast safety: clamped_progress is in [0, 100] and length is small
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss, clippy::cast_precision_loss)]
    let filled = ((clamped_progress / 100.0) * length as f64).round() as usize;
    let empty = length.saturating_sub(filled);

    format!(
        "[{}{}] {progress_percent:.1}%",
        "█".repeat(filled),
        "░".repeat(empty)
    )
}

/// `"Service: 12:30 | LDC: 4:00"`, in settings order with unknown types last.
#[must_use]
pub fn format_breakdown(breakdown: &BTreeMap<String, f64>, settings: &Settings) -> String {
    let known = settings
        .hour_types
        .iter()
        .filter_map(|t| breakdown.get(&t.id).map(|hours| (t.name.as_str(), *hours)));
    let unknown = breakdown
        .iter()
        .filter(|(id, _)| settings.hour_type(id).is_none())
        .map(|(id, hours)| (settings.hour_type_name(id), *hours));

    let parts: Vec<String> = known
        .chain(unknown)
        .filter(|(_, hours)| *hours > 0.0)
        .map(|(name, hours)| format!("{name}: {}", format_time(hours)))
        .collect();

    if parts.is_empty() {
        EMPTY_BREAKDOWN.to_string()
    } else {
        parts.join(" | ")
    }
}

/// `"+2:30"` for surplus, `"-1:15"` for shortfall.
#[must_use]
pub fn format_difference(difference: f64) -> String {
    format_signed_time(difference)
}
