// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Site root resolution and built-in asset targets.

use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::error::{Error, Result};

/// An asset the `assets` check must find, with its required marker.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct AssetTarget {
    /// Path relative to the site root.
    pub path: String,

    /// Literal substring the asset's text must contain.
    pub marker: String,
}

impl AssetTarget {
    pub fn new(path: impl Into<String>, marker: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            marker: marker.into(),
        }
    }
}

/// Built-in targets: the site index and its stylesheet.
pub fn default_targets() -> Vec<AssetTarget> {
    vec![
        AssetTarget::new("index.html", "lang=\"th\""),
        AssetTarget::new("assets/style.css", "Google Sans"),
    ]
}

/// Derive the site root from the checker's own location.
///
/// Ascends exactly two parent levels: one level up is the directory holding
/// the checker, two levels up is the site root. Returns None when the
/// location has fewer than two parents.
pub fn resolve_root(checker: &Path) -> Option<PathBuf> {
    checker.parent()?.parent().map(Path::to_path_buf)
}

/// Resolve the site root for the running binary.
///
/// The deployed layout places the checker one directory below the root, so
/// the root is two levels above the canonicalized executable path.
pub fn default_root() -> Result<PathBuf> {
    let exe = std::env::current_exe().map_err(|e| Error::Io {
        path: PathBuf::from("<current-exe>"),
        source: e,
    })?;

    let exe = exe.canonicalize().map_err(|e| Error::Io {
        path: exe.clone(),
        source: e,
    })?;

    resolve_root(&exe).ok_or_else(|| {
        Error::Internal(format!("cannot resolve site root from {}", exe.display()))
    })
}

#[cfg(test)]
#[path = "site_tests.rs"]
mod tests;
