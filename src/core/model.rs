//! Value types the accounting engine computes over.
//!
//! These are plain, storage-independent snapshots. The persistence layer
//! converts its entity models into them so every engine function can be
//! called (and tested) with an in-memory list.

use crate::entities::{hour_type, service_entry};
use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

/// Id of the one hour type that is never capped.
pub const PRIMARY_SERVICE_TYPE_ID: &str = "service";

/// Display name used for the primary service type in fresh settings.
pub const PRIMARY_SERVICE_TYPE_NAME: &str = "Service";

/// Fallback shown for hour type ids that no longer resolve.
pub const UNKNOWN_TYPE_NAME: &str = "Unknown type";

/// Maximum number of capped hour types alongside primary service.
pub const MAX_CAPPED_TYPES: usize = 5;

/// Yearly goal used when nothing else is configured.
pub const DEFAULT_YEARLY_GOAL: u32 = 600;

/// One recorded block of time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ServiceEntry {
    /// Assigned on persistence, `None` for unsaved entries
    pub id: Option<i64>,
    /// Calendar date, no time of day
    pub date: NaiveDate,
    /// Duration in decimal hours
    pub hours: f64,
    /// Hour type id; empty means primary service
    pub hour_type: String,
    /// Optional free-text note
    pub notes: Option<String>,
    /// Creation time
    pub timestamp: DateTime<Utc>,
}

impl ServiceEntry {
    /// Builds an unsaved entry stamped with the current time.
    #[must_use]
    pub fn new(date: NaiveDate, hours: f64, hour_type: impl Into<String>) -> Self {
        Self {
            id: None,
            date,
            hours,
            hour_type: hour_type.into(),
            notes: None,
            timestamp: Utc::now(),
        }
    }

    /// Attaches a note.
    #[must_use]
    pub fn with_notes(mut self, notes: impl Into<String>) -> Self {
        self.notes = Some(notes.into());
        self
    }

    /// Effective type id, mapping legacy untyped entries to primary service.
    #[must_use]
    pub fn type_id(&self) -> &str {
        if self.hour_type.is_empty() {
            PRIMARY_SERVICE_TYPE_ID
        } else {
            &self.hour_type
        }
    }

    /// Whether these hours are exempt from the monthly cap.
    #[must_use]
    pub fn is_primary_service(&self) -> bool {
        self.type_id() == PRIMARY_SERVICE_TYPE_ID
    }
}

impl From<service_entry::Model> for ServiceEntry {
    fn from(model: service_entry::Model) -> Self {
        Self {
            id: Some(model.id),
            date: model.date,
            hours: model.hours,
            hour_type: model.hour_type,
            notes: model.notes,
            timestamp: model.timestamp,
        }
    }
}

/// A named category of time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HourType {
    /// Stable identifier referenced by entries
    pub id: String,
    /// Display name
    pub name: String,
    /// Whether the shared monthly cap applies
    pub has_limit: bool,
}

impl HourType {
    /// The uncapped primary service type.
    #[must_use]
    pub fn primary_service() -> Self {
        Self {
            id: PRIMARY_SERVICE_TYPE_ID.to_string(),
            name: PRIMARY_SERVICE_TYPE_NAME.to_string(),
            has_limit: false,
        }
    }

    /// A capped type.
    #[must_use]
    pub fn capped(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            has_limit: true,
        }
    }
}

impl From<hour_type::Model> for HourType {
    fn from(model: hour_type::Model) -> Self {
        Self {
            id: model.id,
            name: model.name,
            has_limit: model.has_limit,
        }
    }
}

/// Process-wide configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Settings {
    /// Yearly goal in hours
    pub yearly_goal: u32,
    /// Ordered hour types, uncapped primary service first
    pub hour_types: Vec<HourType>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            yearly_goal: DEFAULT_YEARLY_GOAL,
            hour_types: vec![HourType::primary_service()],
        }
    }
}

impl Settings {
    /// Looks up a type by id.
    #[must_use]
    pub fn hour_type(&self, id: &str) -> Option<&HourType> {
        self.hour_types.iter().find(|t| t.id == id)
    }

    /// Resolves user input that may be either a type id or a display name.
    ///
    /// Ids win over names; names compare case-insensitively.
    #[must_use]
    pub fn find_hour_type(&self, query: &str) -> Option<&HourType> {
        let query = query.trim();
        self.hour_type(query).or_else(|| {
            self.hour_types
                .iter()
                .find(|t| t.name.eq_ignore_ascii_case(query))
        })
    }

    /// Display name for a type id, falling back to [`UNKNOWN_TYPE_NAME`].
    #[must_use]
    pub fn hour_type_name(&self, id: &str) -> &str {
        let id = if id.is_empty() { PRIMARY_SERVICE_TYPE_ID } else { id };
        self.hour_type(id)
            .map_or(UNKNOWN_TYPE_NAME, |t| t.name.as_str())
    }

    /// The capped types, in order.
    pub fn capped_types(&self) -> impl Iterator<Item = &HourType> {
        self.hour_types.iter().filter(|t| t.has_limit)
    }

    /// Checks the structural rules every stored settings record must satisfy.
    ///
    /// # Errors
    /// Returns a message describing the first violated rule.
    pub fn validate(&self) -> std::result::Result<(), String> {
        if self.yearly_goal == 0 {
            return Err("yearly goal must be a positive number of hours".to_string());
        }

        let Some(first) = self.hour_types.first() else {
            return Err("at least the primary service type is required".to_string());
        };
        if first.id != PRIMARY_SERVICE_TYPE_ID || first.has_limit {
            return Err(format!(
                "the first hour type must be the uncapped '{PRIMARY_SERVICE_TYPE_ID}' type"
            ));
        }
        if self.hour_types.iter().skip(1).any(|t| !t.has_limit) {
            return Err("only the primary service type may be uncapped".to_string());
        }

        let capped = self.capped_types().count();
        if capped > MAX_CAPPED_TYPES {
            return Err(format!(
                "at most {MAX_CAPPED_TYPES} additional hour types are allowed (got {capped})"
            ));
        }

        for (i, t) in self.hour_types.iter().enumerate() {
            if t.name.trim().is_empty() {
                return Err(format!("hour type '{}' has an empty name", t.id));
            }
            if self.hour_types[..i].iter().any(|other| other.id == t.id) {
                return Err(format!("duplicate hour type id '{}'", t.id));
            }
        }

        Ok(())
    }
}
