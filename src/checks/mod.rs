pub mod docs;
pub mod observability;
pub mod packaging;
pub mod quality;

use crate::types::report::CheckResult;
use std::path::Path;

/// Directory names pruned from every traversal, matched by exact component.
pub const IGNORED_DIRS: &[&str] = &[
    ".git",
    "node_modules",
    "bin",
    "obj",
    "dist",
    "build",
    ".venv",
];

/// Cap on bytes read per candidate file when scanning contents.
pub const MAX_READ_BYTES: usize = 64 * 1024;

/// Cap for the linter probe of `pyproject.toml`.
pub(crate) const MANIFEST_READ_BYTES: usize = 8 * 1024;

/// Cap for release version probes.
pub(crate) const VERSION_READ_BYTES: usize = 4 * 1024;

/// Tool names whose presence in `pyproject.toml` counts as linter config.
pub(crate) const LINTER_TOOLS: &[&str] = &["ruff", "black", "isort"];

/// One registry entry: a fixed identity plus a pure detector. The detector
/// returns the evidence string on pass, `None` on fail, and never errors.
pub struct CheckSpec {
    pub id: &'static str,
    pub name: &'static str,
    pub weight: u32,
    detect: fn(&Path) -> Option<String>,
}

impl CheckSpec {
    pub fn evaluate(&self, root: &Path) -> CheckResult {
        let evidence = (self.detect)(root);
        CheckResult {
            id: self.id.to_string(),
            name: self.name.to_string(),
            weight: self.weight,
            passed: evidence.is_some(),
            evidence: evidence.unwrap_or_default(),
        }
    }
}

/// The closed, ordered check set. Order here is the output order of every
/// report. Weights must total exactly 100; a unit test enforces this.
const REGISTRY: &[CheckSpec] = &[
    CheckSpec {
        id: "readme",
        name: "README present",
        weight: 10,
        detect: docs::detect_readme,
    },
    CheckSpec {
        id: "license",
        name: "LICENSE present",
        weight: 5,
        detect: docs::detect_license,
    },
    CheckSpec {
        id: "codeowners",
        name: "CODEOWNERS present",
        weight: 10,
        detect: docs::detect_codeowners,
    },
    CheckSpec {
        id: "ci",
        name: "CI configured",
        weight: 15,
        detect: quality::detect_ci,
    },
    CheckSpec {
        id: "tests",
        name: "Tests present",
        weight: 15,
        detect: quality::detect_tests,
    },
    CheckSpec {
        id: "linter",
        name: "Linter config",
        weight: 10,
        detect: quality::detect_linter,
    },
    CheckSpec {
        id: "docker",
        name: "Docker present",
        weight: 10,
        detect: packaging::detect_docker,
    },
    CheckSpec {
        id: "security",
        name: "Security docs/config",
        weight: 10,
        detect: docs::detect_security,
    },
    CheckSpec {
        id: "observability",
        name: "OpenTelemetry in deps/config",
        weight: 5,
        detect: observability::detect_observability,
    },
    CheckSpec {
        id: "release",
        name: "Release hygiene",
        weight: 10,
        detect: packaging::detect_release,
    },
];

pub fn registry() -> &'static [CheckSpec] {
    REGISTRY
}

/// Evaluates every registered check against `root`, in registry order.
pub fn run_all(root: &Path) -> Vec<CheckResult> {
    registry()
        .iter()
        .map(|spec| {
            let result = spec.evaluate(root);
            tracing::debug!(id = %result.id, passed = result.passed, "check evaluated");
            result
        })
        .collect()
}
