//! Baseline smoke check.

use crate::check::{Check, CheckContext, CheckResult};

/// The smoke check passes unconditionally.
///
/// It has no preconditions and touches nothing on disk, so a run against a
/// broken or empty tree still proves the suite itself executes and reports.
pub struct SmokeCheck;

impl Check for SmokeCheck {
    fn name(&self) -> &'static str {
        "smoke"
    }

    fn description(&self) -> &'static str {
        "Suite is runnable"
    }

    fn run(&self, _ctx: &CheckContext) -> CheckResult {
        CheckResult::passed(self.name())
    }
}

#[cfg(test)]
#[path = "smoke_tests.rs"]
mod tests;
