// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Configuration parsing and validation.
//!
//! Handles sitecheck.toml parsing with version validation and unknown key warnings.

use std::collections::BTreeMap;
use std::path::Path;

use serde::Deserialize;

use crate::error::{Error, Result};
use crate::site::{AssetTarget, default_targets};

/// Currently supported config version.
const SUPPORTED_VERSION: i64 = 1;

/// Minimum config structure for version checking.
#[derive(Deserialize)]
struct VersionOnly {
    version: Option<i64>,
}

/// Config with flexible parsing that captures unknown keys.
#[derive(Deserialize)]
struct FlexibleConfig {
    #[allow(dead_code)]
    version: i64,

    #[serde(default)]
    #[allow(dead_code)]
    check: Option<toml::Value>,

    #[serde(flatten)]
    unknown: BTreeMap<String, toml::Value>,
}

/// Full configuration.
#[derive(Debug, Default, Deserialize)]
pub struct Config {
    /// Config file version (must be 1).
    pub version: i64,

    /// Check configurations.
    #[serde(default)]
    pub check: CheckConfig,
}

/// Per-check configuration sections.
#[derive(Debug, Default, Deserialize)]
pub struct CheckConfig {
    /// Assets check configuration.
    #[serde(default)]
    pub assets: AssetsConfig,
}

/// Assets check configuration.
#[derive(Debug, Deserialize)]
pub struct AssetsConfig {
    /// Asset targets; defaults to the built-in index/stylesheet pair.
    #[serde(default = "default_targets", rename = "target")]
    pub targets: Vec<AssetTarget>,
}

impl Default for AssetsConfig {
    fn default() -> Self {
        Self {
            targets: default_targets(),
        }
    }
}

/// Load configuration from a file.
pub fn load(path: &Path) -> Result<Config> {
    let content = std::fs::read_to_string(path).map_err(|e| Error::Config {
        message: format!("cannot read config: {}", e),
        path: Some(path.to_path_buf()),
    })?;

    parse(&content, path)
}

/// Load configuration, warning on unknown top-level keys.
///
/// Warnings go to stderr; unknown keys are never errors.
pub fn load_with_warnings(path: &Path) -> Result<Config> {
    let content = std::fs::read_to_string(path).map_err(|e| Error::Config {
        message: format!("cannot read config: {}", e),
        path: Some(path.to_path_buf()),
    })?;

    if let Ok(flexible) = toml::from_str::<FlexibleConfig>(&content) {
        for key in flexible.unknown.keys() {
            eprintln!("sitecheck: warning: unknown config key `{}`", key);
        }
    }

    parse(&content, path)
}

/// Parse config content with version validation.
fn parse(content: &str, path: &Path) -> Result<Config> {
    // First check version
    let version_check: VersionOnly = toml::from_str(content).map_err(|e| Error::Config {
        message: format!("invalid TOML: {}", e),
        path: Some(path.to_path_buf()),
    })?;

    let version = version_check.version.ok_or_else(|| Error::Config {
        message: "missing required field: version".to_string(),
        path: Some(path.to_path_buf()),
    })?;

    if version != SUPPORTED_VERSION {
        return Err(Error::Config {
            message: format!(
                "unsupported config version {} (supported: {})",
                version, SUPPORTED_VERSION
            ),
            path: Some(path.to_path_buf()),
        });
    }

    let config: Config = toml::from_str(content).map_err(|e| Error::Config {
        message: format!("invalid config: {}", e),
        path: Some(path.to_path_buf()),
    })?;

    for target in &config.check.assets.targets {
        if target.path.is_empty() || target.marker.is_empty() {
            return Err(Error::Config {
                message: "asset targets require non-empty `path` and `marker`".to_string(),
                path: Some(path.to_path_buf()),
            });
        }
    }

    Ok(config)
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;
