//! Period navigation for the statistics view.
//!
//! The navigator keeps a selected month and service year that are independent
//! of the real date. Every transition re-derives the service year from the
//! selected `(year, month)` pair, so the two can never drift apart.

use crate::core::service_year::{
    SEPTEMBER, month_name, service_year_label, service_year_of, service_year_of_month,
};
use chrono::{Datelike, NaiveDate};
use serde::Serialize;

/// Step direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    /// One period back
    Prev,
    /// One period forward
    Next,
}

/// The currently viewed month and service year.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct NavigationState {
    /// 0-based calendar month
    pub selected_month: u32,
    /// Calendar year of the selected month
    pub selected_year: i32,
    /// Service year containing the selected month
    pub selected_service_year: i32,
}

impl NavigationState {
    /// State pointing at the month containing `date`.
    #[must_use]
    pub fn for_date(date: NaiveDate) -> Self {
        Self {
            selected_month: date.month0(),
            selected_year: date.year(),
            selected_service_year: service_year_of(date),
        }
    }

    /// Whether the service year matches the selected month.
    #[must_use]
    pub const fn is_consistent(&self) -> bool {
        self.selected_month < 12
            && service_year_of_month(self.selected_year, self.selected_month)
                == self.selected_service_year
    }

    /// `"September 2025"`
    #[must_use]
    pub fn month_label(&self) -> String {
        format!("{} {}", month_name(self.selected_month), self.selected_year)
    }

    /// `"2025/2026"`
    #[must_use]
    pub fn service_year_label(&self) -> String {
        service_year_label(self.selected_service_year)
    }
}

/// Stateful navigator over [`NavigationState`].
#[derive(Debug, Clone)]
pub struct PeriodNavigator {
    state: NavigationState,
}

impl PeriodNavigator {
    /// Starts at the month containing `today`.
    #[must_use]
    pub fn new(today: NaiveDate) -> Self {
        Self {
            state: NavigationState::for_date(today),
        }
    }

    /// Current selection.
    #[must_use]
    pub const fn state(&self) -> NavigationState {
        self.state
    }

    /// Jumps back to the month containing `today`.
    pub fn reset(&mut self, today: NaiveDate) {
        self.state = NavigationState::for_date(today);
    }

    /// Moves one calendar month, wrapping the calendar year at January/December.
    pub fn navigate_month(&mut self, direction: Direction) -> NavigationState {
        let NavigationState {
            selected_month: month,
            selected_year: year,
            ..
        } = self.state;

        let (year, month) = match direction {
            Direction::Prev if month == 0 => (year - 1, 11),
            Direction::Prev => (year, month - 1),
            Direction::Next if month >= 11 => (year + 1, 0),
            Direction::Next => (year, month + 1),
        };

        self.state = NavigationState {
            selected_month: month,
            selected_year: year,
            selected_service_year: service_year_of_month(year, month),
        };
        self.state
    }

    /// Moves one service year, keeping the selected month.
    pub fn navigate_year(&mut self, direction: Direction) -> NavigationState {
        let service_year = match direction {
            Direction::Prev => self.state.selected_service_year - 1,
            Direction::Next => self.state.selected_service_year + 1,
        };
        let month = self.state.selected_month;

        self.state = NavigationState {
            selected_month: month,
            selected_year: if month >= SEPTEMBER {
                service_year
            } else {
                service_year + 1
            },
            selected_service_year: service_year,
        };
        self.state
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    use super::*;
    use rand::{Rng, SeedableRng, rngs::StdRng};

    fn navigator_at(year: i32, month: u32) -> PeriodNavigator {
        PeriodNavigator::new(NaiveDate::from_ymd_opt(year, month, 15).unwrap())
    }

    #[test]
    fn test_initial_state_from_date() {
        let nav = navigator_at(2025, 10);
        assert_eq!(
            nav.state(),
            NavigationState {
                selected_month: 9,
                selected_year: 2025,
                selected_service_year: 2025,
            }
        );
    }

    #[test]
    fn test_stepping_back_from_august_keeps_service_year() {
        let mut nav = navigator_at(2025, 8);
        assert_eq!(nav.state().selected_service_year, 2024);

        let state = nav.navigate_month(Direction::Prev);
        assert_eq!((state.selected_year, state.selected_month), (2025, 6));
        assert_eq!(state.selected_service_year, 2024);

        let state = nav.navigate_month(Direction::Prev);
        assert_eq!((state.selected_year, state.selected_month), (2025, 5));
        assert_eq!(state.selected_service_year, 2024);
    }

    #[test]
    fn test_stepping_back_from_september_leaves_service_year() {
        let mut nav = navigator_at(2025, 9);
        assert_eq!(nav.state().selected_service_year, 2025);

        let state = nav.navigate_month(Direction::Prev);
        assert_eq!((state.selected_year, state.selected_month), (2025, 7));
        assert_eq!(state.selected_service_year, 2024);
    }

    #[test]
    fn test_stepping_forward_into_september_enters_next_service_year() {
        let mut nav = navigator_at(2025, 8);
        let state = nav.navigate_month(Direction::Next);
        assert_eq!(state.selected_month, 8);
        assert_eq!(state.selected_service_year, 2025);
    }

    #[test]
    fn test_wrapping_calendar_year_keeps_service_year() {
        let mut nav = navigator_at(2025, 1);
        let state = nav.navigate_month(Direction::Prev);
        assert_eq!((state.selected_year, state.selected_month), (2024, 11));
        assert_eq!(state.selected_service_year, 2024);

        let state = nav.navigate_month(Direction::Next);
        assert_eq!((state.selected_year, state.selected_month), (2025, 0));
        assert_eq!(state.selected_service_year, 2024);
    }

    #[test]
    fn test_two_consecutive_decembers_back() {
        let mut nav = navigator_at(2025, 12);
        for _ in 0..12 {
            nav.navigate_month(Direction::Prev);
        }
        let state = nav.state();
        assert_eq!((state.selected_year, state.selected_month), (2024, 11));
        assert_eq!(state.selected_service_year, 2024);
    }

    #[test]
    fn test_navigate_year_realigns_calendar_year() {
        let mut nav = navigator_at(2025, 3);
        assert_eq!(nav.state().selected_service_year, 2024);

        let state = nav.navigate_year(Direction::Next);
        assert_eq!(state.selected_service_year, 2025);
        assert_eq!(state.selected_year, 2026);
        assert_eq!(state.selected_month, 2);

        let mut nav = navigator_at(2025, 10);
        let state = nav.navigate_year(Direction::Prev);
        assert_eq!(state.selected_service_year, 2024);
        assert_eq!(state.selected_year, 2024);
    }

    #[test]
    fn test_twelve_months_equal_one_year() {
        let mut by_month = navigator_at(2025, 5);
        let mut by_year = by_month.clone();
        for _ in 0..12 {
            by_month.navigate_month(Direction::Next);
        }
        by_year.navigate_year(Direction::Next);
        assert_eq!(by_month.state(), by_year.state());
    }

    #[test]
    fn test_reset_returns_to_today() {
        let mut nav = navigator_at(2025, 5);
        nav.navigate_year(Direction::Prev);
        nav.navigate_month(Direction::Next);
        let today = NaiveDate::from_ymd_opt(2025, 5, 20).unwrap();
        nav.reset(today);
        assert_eq!(nav.state(), NavigationState::for_date(today));
    }

    #[test]
    fn test_random_walks_preserve_invariant() {
        let mut rng = StdRng::seed_from_u64(0x5e7_1ce);
        for walk in 0..200 {
            let mut nav = navigator_at(rng.gen_range(1990..2060), rng.gen_range(1..=12));
            for step in 0..500 {
                let direction = if rng.gen_bool(0.5) {
                    Direction::Prev
                } else {
                    Direction::Next
                };
                let state = if rng.gen_ratio(1, 4) {
                    nav.navigate_year(direction)
                } else {
                    nav.navigate_month(direction)
                };
                assert!(
                    state.is_consistent(),
                    "walk {walk} step {step}: inconsistent state {state:?}"
                );
            }
        }
    }
}
