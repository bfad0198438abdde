//! Hour type entity - A named category of service time.
//!
//! Rows are kept in `position` order; position 0 is always the uncapped
//! primary service type.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Hour type database model
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "hour_types")]
pub struct Model {
    /// Stable identifier referenced by entries (e.g. `"service"`, `"type_1718000000000"`)
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: String,
    /// Display name
    pub name: String,
    /// Whether the shared monthly cap applies to this type
    pub has_limit: bool,
    /// Ordering within the settings list
    pub position: i32,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
