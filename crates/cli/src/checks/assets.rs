// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Site asset presence check.
//!
//! Confirms each configured asset exists under the site root as a regular
//! file and that its decoded text contains the required literal marker. The
//! built-in targets are the site index (marker `lang="th"`) and its
//! stylesheet (marker `Google Sans`).

use memchr::memmem;
use serde_json::json;

use crate::check::{Check, CheckContext, CheckResult, Violation};
use crate::reader::FileReader;
use crate::site::AssetTarget;

/// The assets check validates required site files and their markers.
pub struct AssetsCheck;

impl Check for AssetsCheck {
    fn name(&self) -> &'static str {
        "assets"
    }

    fn description(&self) -> &'static str {
        "Site asset presence and markers"
    }

    fn run(&self, ctx: &CheckContext) -> CheckResult {
        let targets = &ctx.config.check.assets.targets;
        let reader = FileReader::new();

        let mut violations = Vec::new();
        let mut files_present = 0;
        let mut markers_found = 0;

        for target in targets {
            match check_target(ctx, &reader, target) {
                TargetState::Ok => {
                    files_present += 1;
                    markers_found += 1;
                }
                TargetState::Missing(v) => violations.push(v),
                TargetState::Present(v) => {
                    files_present += 1;
                    violations.push(v);
                }
                TargetState::Unreadable(message) => {
                    // Terminal to this check only; sibling checks still report.
                    return CheckResult::skipped(self.name(), message);
                }
            }

            // Respect violation limit
            if let Some(limit) = ctx.limit
                && violations.len() >= limit
            {
                break;
            }
        }

        let metrics = json!({
            "targets": targets.len(),
            "files_present": files_present,
            "markers_found": markers_found,
        });

        if violations.is_empty() {
            CheckResult::passed(self.name()).with_metrics(metrics)
        } else {
            CheckResult::failed(self.name(), violations).with_metrics(metrics)
        }
    }
}

/// Outcome of validating a single target.
enum TargetState {
    /// File exists and contains its marker.
    Ok,
    /// File absent or not a regular file.
    Missing(Violation),
    /// File exists but failed a content assertion.
    Present(Violation),
    /// File exists but could not be read.
    Unreadable(String),
}

fn check_target(ctx: &CheckContext, reader: &FileReader, target: &AssetTarget) -> TargetState {
    let path = ctx.root.join(&target.path);

    if !path.is_file() {
        return TargetState::Missing(Violation::file_only(
            &target.path,
            "missing_asset",
            format!(
                "Expected a file at {}. Create it or point sitecheck at the right root.",
                target.path
            ),
        ));
    }

    let content = match reader.read(&path) {
        Ok(c) => c,
        Err(e) => return TargetState::Unreadable(e.to_string()),
    };

    // Decoding failure is its own outcome, never a lossy fallback.
    let Some(text) = content.as_str() else {
        return TargetState::Present(Violation::file_only(
            &target.path,
            "invalid_utf8",
            "File bytes are not valid UTF-8 text. Re-encode the file as UTF-8.",
        ));
    };

    if memmem::find(text.as_bytes(), target.marker.as_bytes()).is_none() {
        return TargetState::Present(
            Violation::file_only(
                &target.path,
                "missing_marker",
                format!("Expected the literal {:?} somewhere in the file.", target.marker),
            )
            .with_marker(target.marker.as_str()),
        );
    }

    TargetState::Ok
}

#[cfg(test)]
#[path = "assets_tests.rs"]
mod tests;
