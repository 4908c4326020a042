//! # onion-db
//!
//! PostgreSQL implementations of the lookup contracts defined in `onion-core`.
//!
//! ## Overview
//!
//! - Connection pool management
//! - Database models with SQLx `FromRow` derives
//! - Model → entity mappers that validate stored ids
//! - User and account providers
//!
//! ## Usage
//!
//! ```rust,ignore
//! use onion_common::AppConfig;
//! use onion_db::{create_pool, PgAccountService, PgUserService};
//!
//! async fn example() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = AppConfig::from_env()?;
//!     let pool = create_pool(&config.database).await?;
//!     let users = PgUserService::new(pool.clone());
//!     let accounts = PgAccountService::new(pool);
//!
//!     // Use the providers...
//!     Ok(())
//! }
//! ```

pub mod mappers;
pub mod models;
pub mod pool;
pub mod providers;

// Re-export commonly used types
pub use pool::{apply_schema, create_pool, PgPool, PoolError};
pub use providers::{PgAccountService, PgUserService};
