//! Command-line interface for planning courier routes from a manifest file.
#![forbid(unsafe_code)]

use clap::Parser;

mod error;
mod plan;

pub use error::CliError;

use plan::{PlanArgs, run_plan};

const ARG_MANIFEST: &str = "manifest";
const ARG_FORMAT: &str = "format";
const ENV_MANIFEST: &str = "COURIER_CMDS_COURIER_MANIFEST";

/// Run the courier CLI with the current process arguments and environment.
///
/// # Errors
///
/// Returns a [`CliError`] when arguments or configuration are invalid, when
/// the manifest cannot be read or parsed, or when the routes cannot be
/// written to stdout. Clap help and version requests surface as
/// [`CliError::ArgumentParsing`].
pub fn run() -> Result<(), CliError> {
    let args = PlanArgs::try_parse().map_err(CliError::ArgumentParsing)?;
    run_plan(args)
}

#[cfg(test)]
mod tests;
