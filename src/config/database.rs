//! Database configuration: `SQLite` connection and table creation with `SeaORM`.
//!
//! Tables are generated from the entity definitions through
//! `Schema::create_table_from_entity`, so the schema always matches the Rust
//! structs. Creation uses `IF NOT EXISTS`, which makes startup idempotent.

use crate::entities::{HourType, ServiceEntry, Settings};
use crate::errors::Result;
use sea_orm::{ConnectionTrait, Database, DatabaseConnection, EntityTrait, Schema};
use tracing::info;

/// Default location of the database file when `DATABASE_URL` is unset.
pub const DEFAULT_DATABASE_URL: &str = "sqlite://data/service_buddy.sqlite?mode=rwc";

/// Gets the database URL from `DATABASE_URL`, falling back to a local file.
#[must_use]
pub fn get_database_url() -> String {
    std::env::var("DATABASE_URL").unwrap_or_else(|_| DEFAULT_DATABASE_URL.to_string())
}

/// Establishes a connection to the configured `SQLite` database.
pub async fn create_connection() -> Result<DatabaseConnection> {
    let database_url = get_database_url();
    info!(url = %database_url, "Connecting to database");
    Database::connect(&database_url).await.map_err(Into::into)
}

async fn create_table<E, C>(db: &C, schema: &Schema, entity: E) -> Result<()>
where
    E: EntityTrait,
    C: ConnectionTrait,
{
    let builder = db.get_database_backend();
    let mut statement = schema.create_table_from_entity(entity);
    statement.if_not_exists();
    db.execute(builder.build(&statement)).await?;
    Ok(())
}

/// Creates the entry, hour type and settings tables if they are missing.
pub async fn create_tables(db: &DatabaseConnection) -> Result<()> {
    let schema = Schema::new(db.get_database_backend());

    create_table(db, &schema, ServiceEntry).await?;
    create_table(db, &schema, HourType).await?;
    create_table(db, &schema, Settings).await?;

    Ok(())
}
