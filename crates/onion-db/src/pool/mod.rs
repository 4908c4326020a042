//! Database connection pool management

mod postgres;
mod schema;

pub use postgres::{create_pool, PoolError};
pub use schema::{apply_schema, SCHEMA};

// Re-export PgPool for convenience
pub use sqlx::postgres::PgPool;
