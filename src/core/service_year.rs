//! Calendar and service-year arithmetic.
//!
//! A service year runs from September 1 to August 31 and is named after the
//! calendar year it starts in. Months are 0-based throughout the engine
//! (January = 0, September = 8) to match the navigation state.

use chrono::{Datelike, Months, NaiveDate};

/// 0-based index of September, the first month of a service year.
pub const SEPTEMBER: u32 = 8;

/// 0-based index of August, the last month of a service year.
pub const AUGUST: u32 = 7;

const MONTH_NAMES: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

/// Inclusive day range covered by one service year.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ServiceYearPeriod {
    /// September 1 of the service year
    pub start: NaiveDate,
    /// August 31 of the following calendar year
    pub end: NaiveDate,
}

impl ServiceYearPeriod {
    /// Inclusive membership test.
    #[must_use]
    pub fn contains(&self, date: NaiveDate) -> bool {
        self.start <= date && date <= self.end
    }

    /// Number of days in the period, counting both ends (365 or 366).
    #[must_use]
    pub fn total_days(&self) -> i64 {
        (self.end - self.start).num_days() + 1
    }
}

/// Service year a date belongs to.
#[must_use]
pub fn service_year_of(date: NaiveDate) -> i32 {
    service_year_of_month(date.year(), date.month0())
}

/// Service year a calendar month (0-based) belongs to.
#[must_use]
pub const fn service_year_of_month(year: i32, month0: u32) -> i32 {
    if month0 >= SEPTEMBER { year } else { year - 1 }
}

/// First and last day of a service year.
#[must_use]
pub fn service_year_period(service_year: i32) -> ServiceYearPeriod {
    let start = first_of_month(service_year, SEPTEMBER);
    let end = last_of_month(service_year + 1, AUGUST);
    ServiceYearPeriod { start, end }
}

/// Whether `date` falls inside the given service year.
#[must_use]
pub fn is_in_service_year(date: NaiveDate, service_year: i32) -> bool {
    service_year_period(service_year).contains(date)
}

/// The twelve `(calendar year, month0)` pairs of a service year, September first.
#[must_use]
pub fn service_year_months(service_year: i32) -> [(i32, u32); 12] {
    std::array::from_fn(|offset| {
        // offset < 12, so the cast is lossless
        #[allow(clippy::cast_possible_truncation)]
        let offset = offset as u32;
        if offset < 4 {
            (service_year, SEPTEMBER + offset)
        } else {
            (service_year + 1, offset - 4)
        }
    })
}

/// Number of days in a calendar month (0-based).
#[must_use]
pub fn days_in_month(year: i32, month0: u32) -> u32 {
    last_of_month(year, month0).day()
}

/// Number of days in the calendar month containing `date`.
#[must_use]
pub fn days_in_month_of(date: NaiveDate) -> u32 {
    days_in_month(date.year(), date.month0())
}

/// First day of a calendar month (0-based).
///
/// # Panics
/// For a month index above 11, or years outside chrono's supported range.
#[must_use]
#[allow(clippy::expect_used)] // Day 1 of months 1-12 is always a valid date
pub fn first_of_month(year: i32, month0: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month0 + 1, 1).expect("month index must be 0-11")
}

/// Last day of a calendar month (0-based): the day before the next month starts.
///
/// # Panics
/// For a month index above 11, or years outside chrono's supported range.
#[must_use]
#[allow(clippy::expect_used)] // The day before a valid first-of-month is always valid
pub fn last_of_month(year: i32, month0: u32) -> NaiveDate {
    first_of_month(year, month0)
        .checked_add_months(Months::new(1))
        .and_then(|next| next.pred_opt())
        .expect("the day before a month start is valid")
}

/// English month name for a 0-based month.
#[must_use]
pub fn month_name(month0: u32) -> &'static str {
    MONTH_NAMES[(month0 % 12) as usize]
}

/// Short three-letter month name, as used in the yearly series.
#[must_use]
pub fn month_abbrev(month0: u32) -> &'static str {
    &month_name(month0)[..3]
}

/// `"2025/2026"` style label.
#[must_use]
pub fn service_year_label(service_year: i32) -> String {
    format!("{service_year}/{}", service_year + 1)
}
