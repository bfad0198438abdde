//! Core business logic, independent of Discord.
//!
//! The calculators (`monthly`, `yearly`, `pacing`, `targets`, `navigation`,
//! `report`) are pure functions over entries and settings. `entry` and
//! `settings` persist those values through `SeaORM`.

/// Entry persistence and input validation
pub mod entry;
/// Entries, hour types and settings
pub mod model;
/// Monthly totals under the shared cap
pub mod monthly;
/// Selected-period navigation
pub mod navigation;
/// Daily pace toward the monthly and yearly goals
pub mod pacing;
/// Statistics report assembly and text formatting
pub mod report;
/// Service-year calendar arithmetic
pub mod service_year;
/// Settings persistence
pub mod settings;
/// Expected-to-date targets
pub mod targets;
/// Hours and minutes conversion
pub mod time;
/// Service-year aggregation
pub mod yearly;
