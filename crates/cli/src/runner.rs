// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Parallel check runner with error recovery.
//!
//! Runs checks in parallel using rayon, isolating errors so one
//! check failure doesn't prevent other checks from running. All checks
//! are read-only, so they share nothing and need no coordination.

use std::path::Path;
use std::sync::Arc;
use std::time::Instant;

use rayon::prelude::*;

use crate::check::{Check, CheckContext, CheckResult};
use crate::config::Config;

/// Configuration for the check runner.
pub struct RunnerConfig {
    /// Maximum violations per check before early termination (None = unlimited).
    pub limit: Option<usize>,
}

impl RunnerConfig {
    /// Build a CheckContext from this configuration.
    fn build_context<'a>(&'a self, root: &'a Path, config: &'a Config) -> CheckContext<'a> {
        CheckContext {
            root,
            config,
            limit: self.limit,
        }
    }
}

/// The check runner executes multiple checks in parallel.
pub struct CheckRunner {
    config: RunnerConfig,
}

impl CheckRunner {
    pub fn new(config: RunnerConfig) -> Self {
        Self { config }
    }

    /// Run all provided checks and return results.
    ///
    /// Checks run in parallel. Errors are isolated - one check failing
    /// doesn't prevent other checks from running.
    pub fn run(
        &self,
        checks: Vec<Arc<dyn Check>>,
        config: &Config,
        root: &Path,
    ) -> Vec<CheckResult> {
        let results: Vec<CheckResult> = checks
            .into_par_iter()
            .map(|check| {
                let ctx = self.config.build_context(root, config);

                // Catch panics to ensure error isolation, with timing
                let check_start = Instant::now();
                let mut result = match std::panic::catch_unwind(std::panic::AssertUnwindSafe(
                    || check.run(&ctx),
                )) {
                    Ok(result) => result,
                    Err(_) => {
                        // Check panicked - return skipped result
                        CheckResult::skipped(
                            check.name(),
                            "Internal error: check panicked".to_string(),
                        )
                    }
                };
                result.duration_ms = Some(check_start.elapsed().as_millis() as u64);
                result
            })
            .collect();

        // Sort results by canonical check order for consistent output
        let mut sorted = results;
        sorted.sort_by_key(|r| {
            crate::checks::CHECK_NAMES
                .iter()
                .position(|&n| n == r.name)
                .unwrap_or(usize::MAX)
        });

        sorted
    }
}

#[cfg(test)]
#[path = "runner_tests.rs"]
mod tests;
