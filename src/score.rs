use crate::types::report::{CheckResult, Report};
use chrono::Utc;
use std::path::Path;

/// Sum of the weights of passed checks. Bounded to [0, 100] by the registry
/// weight invariant, so no clamping here.
pub fn compute_score(checks: &[CheckResult]) -> u32 {
    checks
        .iter()
        .filter(|check| check.passed)
        .map(|check| check.weight)
        .sum()
}

/// Assembles the final report: score, passed/failed partition, and a single
/// UTC timestamp at second precision.
pub fn build_report(root: &Path, checks: Vec<CheckResult>) -> Report {
    let score = compute_score(&checks);
    let passed = checks.iter().filter(|check| check.passed).count();
    let failed = checks.len() - passed;
    Report {
        repo_path: root.display().to_string(),
        score,
        passed,
        failed,
        checks,
        timestamp: Utc::now().format("%Y-%m-%dT%H:%M:%SZ").to_string(),
    }
}
