//! Account lookup entry point
//!
//! Run with:
//! ```bash
//! cargo run -p onion-cli -- ekent@mercury.com
//! ```
//!
//! Configuration is loaded from environment variables (and `.env`); flags
//! override it.

use clap::Parser;
use tracing::error;

use onion_cli::Args;
use onion_common::ErrorResponse;

#[tokio::main]
async fn main() {
    let args = Args::parse();

    match onion_cli::run(args).await {
        Ok(output) => println!("{output}"),
        Err(e) => {
            error!(error = %e, code = e.error_code(), "Lookup failed");

            let report = ErrorResponse::from(&e);
            match serde_json::to_string(&report) {
                Ok(json) => eprintln!("{json}"),
                Err(_) => eprintln!("{e}"),
            }
            std::process::exit(e.exit_code());
        }
    }
}
