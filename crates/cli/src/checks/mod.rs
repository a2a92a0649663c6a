//! Check registry and discovery.
//!
//! Both built-in checks are registered here:
//! - smoke: unconditional pass, proves the suite runs (enabled by default)
//! - assets: site asset presence and markers (enabled by default)

pub mod assets;
pub mod smoke;

use std::sync::Arc;

use crate::check::Check;

/// All registered check names in canonical order.
pub const CHECK_NAMES: &[&str] = &["smoke", "assets"];

/// Checks enabled by default.
pub const DEFAULT_ENABLED: &[&str] = &["smoke", "assets"];

/// Create all registered checks.
pub fn all_checks() -> Vec<Arc<dyn Check>> {
    vec![
        Arc::new(smoke::SmokeCheck),
        Arc::new(assets::AssetsCheck),
    ]
}

/// Get a check by name.
pub fn get_check(name: &str) -> Option<Arc<dyn Check>> {
    all_checks().into_iter().find(|c| c.name() == name)
}

/// Filter checks based on enabled/disabled flags.
///
/// Semantics:
/// - No flags: run ALL checks
/// - `--<check>`: run ONLY specified checks
/// - `--no-<check>`: run all EXCEPT specified checks
pub fn filter_checks(enabled: &[String], disabled: &[String]) -> Vec<Arc<dyn Check>> {
    let all = all_checks();

    if !enabled.is_empty() {
        // Explicit enable: only run specified checks
        all.into_iter()
            .filter(|c| enabled.iter().any(|e| e == c.name()))
            .collect()
    } else {
        // Default mode: run all checks minus disabled
        all.into_iter()
            .filter(|c| !disabled.iter().any(|d| d == c.name()))
            .collect()
    }
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
