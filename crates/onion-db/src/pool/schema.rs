//! Table definitions the providers query

use sqlx::postgres::PgPool;

/// DDL for the `users` and `accounts` tables
pub const SCHEMA: &str = include_str!("../../migrations/0001_lookup_tables.sql");

/// Create the lookup tables if they do not exist yet
pub async fn apply_schema(pool: &PgPool) -> Result<(), sqlx::Error> {
    sqlx::raw_sql(SCHEMA).execute(pool).await?;
    Ok(())
}
