//! Settings entity - The singleton settings record.
//!
//! Only one row is ever stored. Hour types live in their own table so that
//! their order and cap flags can be edited independently of the goal.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Settings database model
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "settings")]
pub struct Model {
    /// Row identifier (a single row is kept)
    #[sea_orm(primary_key)]
    pub id: i32,
    /// Yearly goal in whole hours for one service year
    pub yearly_goal: i32,
    /// Last time the record was written
    pub updated_at: DateTime,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
