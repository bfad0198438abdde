//! Service entry entity - One recorded block of service time.
//!
//! Several entries may share the same date. `hour_type` references an
//! [`super::hour_type`] row by id; an empty string marks a legacy entry that
//! predates hour types and is treated as primary service.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Service entry database model
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "service_entries")]
pub struct Model {
    /// Unique identifier assigned on insert
    #[sea_orm(primary_key)]
    pub id: i64,
    /// Calendar date the time was spent on
    pub date: Date,
    /// Duration in decimal hours
    pub hours: f64,
    /// Hour type id (e.g. `"service"`)
    pub hour_type: String,
    /// Optional free-text note
    pub notes: Option<String>,
    /// When the entry was recorded
    pub timestamp: DateTimeUtc,
}

/// Entries are resolved against hour types by id at read time, not by foreign key
#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
