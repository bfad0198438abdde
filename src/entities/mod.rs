//! Entity module - Contains all SeaORM entity definitions for the database.
//! These entities represent the database tables backing entries and settings.
//! Each entity has a Model struct for data and an Entity struct for operations.

pub mod hour_type;
pub mod service_entry;
pub mod settings;

// Re-export specific types to avoid conflicts
pub use hour_type::{Column as HourTypeColumn, Entity as HourType, Model as HourTypeModel};
pub use service_entry::{
    Column as ServiceEntryColumn, Entity as ServiceEntry, Model as ServiceEntryModel,
};
pub use settings::{Column as SettingsColumn, Entity as Settings, Model as SettingsModel};
