//! Service-year aggregation.
//!
//! The countable total is the sum of each month's capped result, never the
//! cap applied to a yearly sum. The raw per-type breakdown is reported
//! separately for display.

use crate::core::{
    model::ServiceEntry,
    monthly::{MonthlyData, compute_monthly_data},
    service_year::{is_in_service_year, service_year_months},
};
use serde::Serialize;
use std::collections::BTreeMap;

/// Raw hours recorded in one service year.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ServiceYearData {
    /// Sum of all recorded hours, before capping
    pub total_hours: f64,
    /// Raw hours per type id
    pub breakdown: BTreeMap<String, f64>,
}

/// One month of a service-year series.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct MonthSummary {
    /// Calendar year of the month
    pub year: i32,
    /// 0-based month
    pub month0: u32,
    /// Totals for the month
    pub data: MonthlyData,
}

/// Sum of monthly countable hours across the twelve months of a service year.
#[must_use]
pub fn compute_yearly_countable(service_year: i32, entries: &[ServiceEntry]) -> f64 {
    service_year_months(service_year)
        .iter()
        .map(|&(year, month0)| compute_monthly_data(year, month0, entries).countable_hours)
        .sum()
}

/// Raw hours per type across a service year.
#[must_use]
pub fn service_year_breakdown(service_year: i32, entries: &[ServiceEntry]) -> ServiceYearData {
    let mut data = ServiceYearData::default();
    for entry in entries
        .iter()
        .filter(|e| is_in_service_year(e.date, service_year))
    {
        data.total_hours += entry.hours;
        *data
            .breakdown
            .entry(entry.type_id().to_string())
            .or_insert(0.0) += entry.hours;
    }
    data
}

/// Monthly totals for every month of a service year, September first.
#[must_use]
pub fn monthly_series(service_year: i32, entries: &[ServiceEntry]) -> Vec<MonthSummary> {
    service_year_months(service_year)
        .iter()
        .map(|&(year, month0)| MonthSummary {
            year,
            month0,
            data: compute_monthly_data(year, month0, entries),
        })
        .collect()
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

    fn sample_entries() -> Vec<ServiceEntry> {
        vec![
            // Before the service year
            entry(2024, 8, 31, 9.0, "service"),
            // September: 60 + 10 -> 60 countable
            entry(2024, 9, 1, 60.0, "service"),
            entry(2024, 9, 2, 10.0, "ldc"),
            // January: 40 + 20 -> 55 countable
            entry(2025, 1, 10, 40.0, "service"),
            entry(2025, 1, 11, 20.0, "ldc"),
            // August: 30 capped only -> 30 countable
            entry(2025, 8, 31, 30.0, "school"),
            // After the service year
            entry(2025, 9, 1, 7.0, "service"),
        ]
    }

    #[test]
    fn test_yearly_countable_sums_capped_months() {
        assert_eq!(compute_yearly_countable(2024, &sample_entries()), 145.0);
    }

    #[test]
    fn test_yearly_countable_matches_monthly_sum() {
        let entries = sample_entries();
        for service_year in 2023..=2025 {
            let monthly: f64 = monthly_series(service_year, &entries)
                .iter()
                .map(|m| m.data.countable_hours)
                .sum();
            assert_eq!(compute_yearly_countable(service_year, &entries), monthly);
        }
    }

    #[test]
    fn test_service_year_breakdown_uses_raw_hours() {
        let data = service_year_breakdown(2024, &sample_entries());
        assert_eq!(data.total_hours, 160.0);
        assert_eq!(data.breakdown["service"], 100.0);
        assert_eq!(data.breakdown["ldc"], 30.0);
        assert_eq!(data.breakdown["school"], 30.0);
    }

    #[test]
    fn test_monthly_series_covers_sep_to_aug() {
        let series = monthly_series(2024, &sample_entries());
        assert_eq!(series.len(), 12);
        assert_eq!((series[0].year, series[0].month0), (2024, 8));
        assert_eq!((series[11].year, series[11].month0), (2025, 7));
        assert_eq!(series[0].data.countable_hours, 60.0);
        assert_eq!(series[11].data.countable_hours, 30.0);
    }

    #[test]
    fn test_empty_service_year() {
        assert_eq!(compute_yearly_countable(2030, &sample_entries()), 0.0);
        assert_eq!(
            service_year_breakdown(2030, &sample_entries()),
            ServiceYearData::default()
        );
    }
}
