/// Configuration resolution module
///
/// This module handles:
/// - Building ReportOptions from CLI arguments
/// - Falling back to LABSUM_* environment variables for unset flags
/// - Rejecting unrecognised environment values
use crate::cli::CliArgs;
use labsum::types::{PanelFormat, ReportOptions};
use log::debug;
use std::env;

pub const ENV_ABBREVIATE: &str = "LABSUM_ABBREVIATE";
pub const ENV_GROUPED: &str = "LABSUM_GROUPED";

/// Build ReportOptions from CLI arguments and the process environment
pub fn resolve_options(args: &CliArgs) -> Result<ReportOptions, String> {
    resolve_options_with(args, |key| env::var(key).ok())
}

/// Build ReportOptions using `lookup` for environment values.
///
/// A flag given on the command line always wins; the environment can only
/// turn an option on.
pub fn resolve_options_with<F>(args: &CliArgs, lookup: F) -> Result<ReportOptions, String>
where
    F: Fn(&str) -> Option<String>,
{
    let use_abbreviations = args.abbreviate || env_flag(ENV_ABBREVIATE, &lookup)?;
    let grouped = args.grouped || env_flag(ENV_GROUPED, &lookup)?;

    let options = ReportOptions { use_abbreviations, panel_format: PanelFormat::from_grouped(grouped) };
    debug!("Resolved options: {:?}", options);
    Ok(options)
}

fn env_flag<F>(key: &str, lookup: &F) -> Result<bool, String>
where
    F: Fn(&str) -> Option<String>,
{
    match lookup(key) {
        None => Ok(false),
        Some(value) => {
            debug!("Using {}={}", key, value);
            parse_bool(&value).ok_or_else(|| format!("Invalid value for {}: '{}' (expected true/false)", key, value))
        }
    }
}

/// Parse a boolean-ish environment value; empty counts as false
pub fn parse_bool(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "" | "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;
