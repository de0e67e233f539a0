//! Entry point for the command-line interface.
#![forbid(unsafe_code)]

use courier_cli::CliError;
use tracing_subscriber::filter::ParseError;
use tracing_subscriber::{EnvFilter, fmt, prelude::*, registry};

/// Environment variable holding the log filter directives.
const LOG_ENV: &str = "COURIER_LOG";
/// Filter used when `COURIER_LOG` is unset or invalid.
const DEFAULT_LOG_FILTER: &str = "warn";

fn main() {
    init_logging();
    match courier_cli::run() {
        Ok(()) => {}
        Err(CliError::ArgumentParsing(err)) => err.exit(),
        Err(err) => {
            eprintln!("courier: {err}");
            std::process::exit(1);
        }
    }
}

/// Send `log` records to stderr, filtered by `COURIER_LOG` (default `warn`).
fn init_logging() {
    let directives = std::env::var(LOG_ENV).ok();
    let filter = log_filter(directives.as_deref()).unwrap_or_else(|err| {
        eprintln!("courier: ignoring invalid {LOG_ENV} ({err}), using {DEFAULT_LOG_FILTER}");
        EnvFilter::new(DEFAULT_LOG_FILTER)
    });
    let stderr_log = fmt::layer().with_writer(std::io::stderr);
    if let Err(err) = registry().with(stderr_log).with(filter).try_init() {
        eprintln!("courier: failed to install logging: {err}");
    }
}

fn log_filter(directives: Option<&str>) -> Result<EnvFilter, ParseError> {
    EnvFilter::try_new(directives.unwrap_or(DEFAULT_LOG_FILTER))
}
