// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Check command implementation.

use termcolor::ColorChoice;

use sitecheck::checks;
use sitecheck::cli::{CheckArgs, CheckFilter, Cli, OutputFormat};
use sitecheck::color::resolve_color;
use sitecheck::config;
use sitecheck::discovery;
use sitecheck::error::ExitCode;
use sitecheck::output::FormatOptions;
use sitecheck::output::json::{self, JsonFormatter};
use sitecheck::output::text::TextFormatter;
use sitecheck::runner::{CheckRunner, RunnerConfig};
use sitecheck::site;

/// Run the check command.
pub fn run(cli: &Cli, args: &CheckArgs) -> anyhow::Result<ExitCode> {
    let cwd = std::env::current_dir()?;

    // Root: explicit PATH, else two levels above the checker's own location.
    let root = match &args.path {
        Some(path) if path.is_absolute() => path.clone(),
        Some(path) => cwd.join(path),
        None => site::default_root()?,
    };
    tracing::debug!("site root: {}", root.display());

    // Resolve config from the root directory
    let config_path = discovery::resolve_config(cli.config.as_deref(), &root)?;

    let config = match &config_path {
        Some(path) => {
            tracing::debug!("loading config from {}", path.display());
            config::load_with_warnings(path)?
        }
        None => {
            tracing::debug!("no config found, using defaults");
            config::Config::default()
        }
    };

    // Filter checks based on CLI flags
    let checks = checks::filter_checks(&args.enabled_checks(), &args.disabled_checks());

    let limit = if args.no_limit { None } else { Some(args.limit) };
    let runner = CheckRunner::new(RunnerConfig { limit });

    let check_results = runner.run(checks, &config, &root);

    let output = json::create_output(check_results);
    let total_violations = output.total_violations();

    // Resolve color mode
    let color_choice = if args.no_color {
        ColorChoice::Never
    } else if args.color {
        ColorChoice::Always
    } else {
        resolve_color()
    };

    match args.output {
        OutputFormat::Text => {
            let mut formatter = TextFormatter::stdout(color_choice, FormatOptions { limit });

            for result in &output.checks {
                formatter.write_check(result)?;
            }

            formatter.write_summary(&output)?;

            if formatter.was_truncated() {
                formatter.write_truncation_message(total_violations)?;
            }
        }
        OutputFormat::Json => {
            let mut formatter = JsonFormatter::new(std::io::stdout());
            formatter.write(&output)?;
        }
    }

    Ok(if output.passed {
        ExitCode::Success
    } else {
        ExitCode::CheckFailed
    })
}
