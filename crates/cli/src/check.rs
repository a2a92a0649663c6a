//! Check result types for output formatting.

use std::path::{Path, PathBuf};

use serde::Serialize;
use serde_json::Value as JsonValue;

use crate::config::Config;

/// Context passed to all checks during execution.
pub struct CheckContext<'a> {
    /// Site root directory.
    pub root: &'a Path,
    /// Parsed configuration.
    pub config: &'a Config,
    /// Violation limit (None = unlimited).
    pub limit: Option<usize>,
}

/// The Check trait defines a single smoke check.
///
/// Object-safe to allow dynamic dispatch via `Box<dyn Check>`.
pub trait Check: Send + Sync {
    /// Unique identifier for this check (e.g., "assets").
    fn name(&self) -> &'static str;

    /// Human-readable description for help output.
    fn description(&self) -> &'static str;

    /// Run the check and return results.
    ///
    /// Implementations should:
    /// - Return `CheckResult::skipped()` if prerequisites are missing
    /// - Respect `ctx.limit` for early termination
    /// - Handle errors gracefully without panicking
    fn run(&self, ctx: &CheckContext) -> CheckResult;

    /// Whether this check is enabled by default.
    fn default_enabled(&self) -> bool {
        true
    }
}

/// A single violation within a check.
#[derive(Debug, Clone, Serialize)]
pub struct Violation {
    /// File path relative to the site root (None for non-file violations).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file: Option<PathBuf>,

    /// Violation category (check-specific).
    #[serde(rename = "type")]
    pub violation_type: String,

    /// Actionable guidance on how to fix.
    pub advice: String,

    /// Marker that was expected but not found (for marker violations).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub marker: Option<String>,
}

impl Violation {
    /// Create a file-based violation.
    pub fn file_only(
        file: impl Into<PathBuf>,
        violation_type: impl Into<String>,
        advice: impl Into<String>,
    ) -> Self {
        Self {
            file: Some(file.into()),
            violation_type: violation_type.into(),
            advice: advice.into(),
            marker: None,
        }
    }

    /// Add marker context to the violation.
    pub fn with_marker(mut self, marker: impl Into<String>) -> Self {
        self.marker = Some(marker.into());
        self
    }
}

/// Result of running a single check.
#[derive(Debug, Clone, Serialize)]
pub struct CheckResult {
    /// Check identifier (e.g., "smoke", "assets").
    pub name: String,

    /// Whether this check passed.
    pub passed: bool,

    /// True if check was skipped due to an error.
    #[serde(skip_serializing_if = "std::ops::Not::not")]
    pub skipped: bool,

    /// Error message if check was skipped.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,

    /// List of violations (omitted if empty).
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub violations: Vec<Violation>,

    /// Aggregated metrics for this check.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metrics: Option<JsonValue>,

    /// Wall-clock duration of the check run.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub duration_ms: Option<u64>,
}

impl CheckResult {
    /// Create a passing check result.
    pub fn passed(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            passed: true,
            skipped: false,
            error: None,
            violations: Vec::new(),
            metrics: None,
            duration_ms: None,
        }
    }

    /// Create a failing check result with violations.
    pub fn failed(name: impl Into<String>, violations: Vec<Violation>) -> Self {
        Self {
            name: name.into(),
            passed: false,
            skipped: false,
            error: None,
            violations,
            metrics: None,
            duration_ms: None,
        }
    }

    /// Create a skipped check result with an error.
    pub fn skipped(name: impl Into<String>, error: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            passed: false,
            skipped: true,
            error: Some(error.into()),
            violations: Vec::new(),
            metrics: None,
            duration_ms: None,
        }
    }

    /// Create a result with metrics.
    pub fn with_metrics(mut self, metrics: JsonValue) -> Self {
        self.metrics = Some(metrics);
        self
    }
}

/// Aggregated results from all checks.
#[derive(Debug, Clone, Serialize)]
pub struct CheckOutput {
    /// ISO 8601 timestamp.
    pub timestamp: String,

    /// Whether all checks passed.
    pub passed: bool,

    /// Results for each check.
    pub checks: Vec<CheckResult>,
}

impl CheckOutput {
    /// Create output from check results.
    pub fn new(timestamp: String, checks: Vec<CheckResult>) -> Self {
        // Overall passed = all non-skipped checks passed
        let passed = checks.iter().all(|c| c.passed || c.skipped);
        Self {
            timestamp,
            passed,
            checks,
        }
    }

    /// Count total violations across all checks.
    pub fn total_violations(&self) -> usize {
        self.checks.iter().map(|c| c.violations.len()).sum()
    }
}

#[cfg(test)]
#[path = "check_tests.rs"]
mod tests;
