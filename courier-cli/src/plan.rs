//! Plan command implementation for the courier CLI.

use std::io::Write;

use camino::{Utf8Path, Utf8PathBuf};
use clap::{Parser, ValueEnum};
use courier_core::{RoutePlan, RoutePlanner, StructuredManifest};
use courier_manifest::read_manifest;
use courier_solver_greedy::GreedyPlanner;
use ortho_config::{OrthoConfig, SubcmdConfigMerge};
use serde::{Deserialize, Serialize};

use crate::{ARG_FORMAT, ARG_MANIFEST, CliError, ENV_MANIFEST};

/// How planned routes are written to stdout.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub(crate) enum OutputFormat {
    /// One JSON array of delivery ids per line, one line per route.
    #[default]
    Lines,
    /// A single JSON document with routes, distances and diagnostics.
    Json,
}

/// CLI arguments for planning routes.
#[derive(Debug, Clone, Parser, Deserialize, Serialize, OrthoConfig, Default)]
#[command(
    name = "courier",
    version,
    about = "Plan greedy delivery routes from a manifest",
    long_about = "Read a delivery manifest, group its deliveries into routes \
                 that start and end at the hub and stay within the shift \
                 budget, and print one route per line."
)]
#[ortho_config(prefix = "COURIER")]
pub(crate) struct PlanArgs {
    /// Path to the manifest file.
    #[arg(value_name = "path")]
    #[serde(default)]
    pub(crate) manifest: Option<Utf8PathBuf>,
    /// Output format for the planned routes.
    #[arg(long = ARG_FORMAT, value_enum, value_name = "format")]
    #[serde(default)]
    pub(crate) format: Option<OutputFormat>,
}

impl PlanArgs {
    pub(crate) fn into_config(self) -> Result<PlanConfig, CliError> {
        let merged = self.load_and_merge().map_err(CliError::Configuration)?;
        PlanConfig::try_from(merged)
    }
}

/// Resolved plan command configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct PlanConfig {
    /// Manifest path, as given.
    pub(crate) manifest: Utf8PathBuf,
    /// Output format.
    pub(crate) format: OutputFormat,
}

impl PlanConfig {
    pub(crate) fn validate_sources(&self) -> Result<(), CliError> {
        Self::require_existing(&self.manifest, ARG_MANIFEST)
    }

    fn require_existing(path: &Utf8Path, field: &'static str) -> Result<(), CliError> {
        match courier_fs::file_is_file(path) {
            Ok(true) => Ok(()),
            Ok(false) => Err(CliError::SourcePathNotFile {
                field,
                path: path.to_path_buf(),
            }),
            Err(source) if source.kind() == std::io::ErrorKind::NotFound => {
                Err(CliError::MissingSourceFile {
                    field,
                    path: path.to_path_buf(),
                })
            }
            Err(source) => Err(CliError::InspectSourcePath {
                field,
                path: path.to_path_buf(),
                source,
            }),
        }
    }
}

impl TryFrom<PlanArgs> for PlanConfig {
    type Error = CliError;

    fn try_from(args: PlanArgs) -> Result<Self, Self::Error> {
        let manifest = args.manifest.ok_or(CliError::MissingArgument {
            field: ARG_MANIFEST,
            env: ENV_MANIFEST,
        })?;
        Ok(Self {
            manifest,
            format: args.format.unwrap_or_default(),
        })
    }
}

pub(crate) fn run_plan(args: PlanArgs) -> Result<(), CliError> {
    let mut stdout = std::io::stdout().lock();
    run_plan_with(args, &GreedyPlanner::new(), &mut stdout)
}

pub(crate) fn run_plan_with(
    args: PlanArgs,
    planner: &dyn RoutePlanner,
    writer: &mut dyn Write,
) -> Result<(), CliError> {
    let config = resolve_plan_config(args)?;
    let plan = execute_plan(&config.manifest, planner)?;
    write_plan(writer, &plan, config.format)
}

fn resolve_plan_config(args: PlanArgs) -> Result<PlanConfig, CliError> {
    let config = args.into_config()?;
    config.validate_sources()?;
    log::debug!("planning {} with {:?} output", config.manifest, config.format);
    Ok(config)
}

/// Read, structure and plan the manifest at `path`.
pub(crate) fn execute_plan(
    path: &Utf8Path,
    planner: &dyn RoutePlanner,
) -> Result<RoutePlan, CliError> {
    let deliveries = read_manifest(path)?;
    let manifest = StructuredManifest::new(deliveries)?;
    Ok(planner.plan(&manifest))
}

fn write_plan(
    writer: &mut dyn Write,
    plan: &RoutePlan,
    format: OutputFormat,
) -> Result<(), CliError> {
    match format {
        OutputFormat::Lines => {
            for route in plan.delivery_sequences() {
                let line = serde_json::to_string(route).map_err(CliError::SerialiseOutput)?;
                writeln!(writer, "{line}").map_err(CliError::WriteOutput)?;
            }
        }
        OutputFormat::Json => {
            let payload =
                serde_json::to_string_pretty(plan).map_err(CliError::SerialiseOutput)?;
            writeln!(writer, "{payload}").map_err(CliError::WriteOutput)?;
        }
    }
    writer.flush().map_err(CliError::WriteOutput)
}

#[cfg(test)]
pub(crate) fn config_from_layers_for_test(
    layers: Vec<ortho_config::MergeLayer<'static>>,
) -> Result<PlanConfig, CliError> {
    let merged = PlanArgs::merge_from_layers(layers).map_err(CliError::from)?;
    PlanConfig::try_from(merged)
}
