//! # onion-cli
//!
//! Composition root: reads configuration, installs tracing, assembles the
//! service context, and runs the account lookup for one email.

use std::sync::Arc;

use clap::{Parser, ValueEnum};
use tracing::info;

use onion_common::{
    layered, try_init_tracing_with_config, AppConfig, AppError, AppResult, LogFormat,
    ProviderKind, TracingConfig,
};
use onion_core::{Email, LoggingService};
use onion_memory::{ConsoleLogger, TracingLogger};
use onion_service::{
    get_account_by_user_email_logged, lookup_account_by_user_email, ServiceContext,
};

/// Resolve the account owned by the user registered under an email
#[derive(Parser, Debug, Clone)]
#[command(name = "onion", author, version, about, long_about = None)]
pub struct Args {
    /// Email of the user whose account to look up
    pub email: String,

    /// Where users and accounts are read from (overrides LOOKUP_PROVIDER)
    #[arg(long)]
    pub provider: Option<ProviderKind>,

    /// Log output format (overrides LOG_FORMAT)
    #[arg(long)]
    pub log_format: Option<LogFormat>,

    /// Where lookup messages are written
    #[arg(long, value_enum, default_value_t = LogSink::Tracing)]
    pub log_sink: LogSink,

    /// Report whether the user or the account was missing
    #[arg(long)]
    pub explain: bool,
}

/// Destination for messages logged by the lookup
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum LogSink {
    /// Emit `tracing` events
    Tracing,
    /// Write plain lines to stderr
    Console,
}

impl Args {
    /// Value a flag supplies for a configuration variable
    ///
    /// Flags shadow the environment entirely, so a bad environment value for
    /// an overridden variable is never parsed.
    pub fn override_for(&self, key: &str) -> Option<String> {
        match key {
            "LOOKUP_PROVIDER" => self.provider.map(|provider| provider.to_string()),
            "LOG_FORMAT" => self.log_format.map(|format| format.to_string()),
            _ => None,
        }
    }

    /// Build configuration from `lookup` with the flags layered on top
    pub fn config_from<L>(&self, lookup: L) -> AppResult<AppConfig>
    where
        L: Fn(&'static str) -> Option<String>,
    {
        Ok(AppConfig::from_lookup(layered(
            |key| self.override_for(key),
            lookup,
        ))?)
    }

    /// The email argument, rejected when blank
    pub fn email(&self) -> AppResult<Email> {
        let email = self.email.trim();
        if email.is_empty() {
            return Err(AppError::invalid_input("email must not be empty"));
        }
        Ok(Email::from(email))
    }

    fn logger(&self) -> Arc<dyn LoggingService> {
        match self.log_sink {
            LogSink::Tracing => Arc::new(TracingLogger::new()),
            LogSink::Console => Arc::new(ConsoleLogger::with_writer(tokio::io::stderr())),
        }
    }
}

/// Load configuration, install tracing, and run the lookup
///
/// Returns the JSON document to print on success.
pub async fn run(args: Args) -> AppResult<String> {
    let config = AppConfig::from_env_with(|key| args.override_for(key))?;

    let tracing_config = TracingConfig::for_environment(config.app.env, config.log_format);
    if let Err(e) = try_init_tracing_with_config(&tracing_config) {
        eprintln!("Warning: Failed to initialize tracing: {e}");
    }

    info!(
        app = %config.app.name,
        env = ?config.app.env,
        provider = %config.provider,
        "Configuration loaded"
    );

    execute(&config, &args).await
}

/// Run the lookup against an already loaded configuration
pub async fn execute(config: &AppConfig, args: &Args) -> AppResult<String> {
    let email = args.email()?;
    let ctx = ServiceContext::from_config(config, args.logger()).await?;

    let rendered = if args.explain {
        let outcome = lookup_account_by_user_email(email).run(&ctx).await?;
        serde_json::to_string_pretty(&outcome)
    } else {
        let account = get_account_by_user_email_logged(email).run(&ctx).await?;
        serde_json::to_string_pretty(&account)
    };

    rendered.map_err(AppError::internal)
}
