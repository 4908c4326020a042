//! Configuration structs

mod app_config;

pub use app_config::{
    layered, AppConfig, AppSettings, ConfigError, DatabaseConfig, Environment, LogFormat,
    ProviderKind,
};
