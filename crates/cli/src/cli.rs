// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! CLI argument parsing with clap derive.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Smoke checks for static site trees
#[derive(Parser)]
#[command(name = "sitecheck")]
#[command(version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Use specific config file
    #[arg(short = 'C', long = "config", global = true, env = "SITECHECK_CONFIG")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand)]
pub enum Command {
    /// Run site smoke checks
    Check(CheckArgs),
}

#[derive(clap::Args)]
pub struct CheckArgs {
    /// Site root to check (default: two levels above the checker binary)
    #[arg(value_name = "PATH")]
    pub path: Option<PathBuf>,

    /// Output format
    #[arg(short, long, default_value = "text")]
    pub output: OutputFormat,

    /// Force color output
    #[arg(long)]
    pub color: bool,

    /// Disable color output
    #[arg(long)]
    pub no_color: bool,

    /// Maximum violations to display (default: 15)
    #[arg(long, default_value_t = 15, value_name = "N")]
    pub limit: usize,

    /// Show all violations (no limit)
    #[arg(long)]
    pub no_limit: bool,

    // Check enable flags (run only these checks)
    /// Run only the smoke check
    #[arg(long)]
    pub smoke: bool,

    /// Run only the assets check
    #[arg(long)]
    pub assets: bool,

    // Check disable flags (skip these checks)
    /// Skip the smoke check
    #[arg(long)]
    pub no_smoke: bool,

    /// Skip the assets check
    #[arg(long)]
    pub no_assets: bool,
}

/// Trait for filtering checks by name.
pub trait CheckFilter {
    /// Get list of explicitly enabled checks.
    fn enabled_checks(&self) -> Vec<String>;

    /// Get list of explicitly disabled checks.
    fn disabled_checks(&self) -> Vec<String>;

    /// Check if a check should be included based on filters.
    ///
    /// If any checks are explicitly enabled, only those are included.
    /// Otherwise, all checks are included except those explicitly disabled.
    fn should_include(&self, check_name: &str) -> bool {
        let enabled = self.enabled_checks();
        let disabled = self.disabled_checks();

        if !enabled.is_empty() {
            enabled.iter().any(|e| e == check_name)
        } else {
            !disabled.iter().any(|d| d == check_name)
        }
    }
}

/// Collect check names from boolean flags.
macro_rules! collect_checks {
    ($self:expr, $($flag:ident => $name:expr),+ $(,)?) => {{
        let mut checks = Vec::new();
        $(
            if $self.$flag {
                checks.push($name.to_string());
            }
        )+
        checks
    }};
}

impl CheckFilter for CheckArgs {
    fn enabled_checks(&self) -> Vec<String> {
        collect_checks!(self,
            smoke => "smoke",
            assets => "assets",
        )
    }

    fn disabled_checks(&self) -> Vec<String> {
        collect_checks!(self,
            no_smoke => "smoke",
            no_assets => "assets",
        )
    }
}

#[derive(Clone, Copy, Default, clap::ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

#[cfg(test)]
#[path = "cli_tests.rs"]
mod tests;
