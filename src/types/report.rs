use serde::Serialize;

/// Outcome of a single hygiene check. `evidence` is the relative path or
/// matched text that justified the pass; empty when the check failed.
#[derive(Debug, Clone, Serialize)]
pub struct CheckResult {
    pub id: String,
    pub name: String,
    pub weight: u32,
    pub passed: bool,
    pub evidence: String,
}

/// One-shot snapshot of a full evaluation. Field names are part of the JSON
/// output contract.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Report {
    pub repo_path: String,
    pub score: u32,
    pub passed: usize,
    pub failed: usize,
    pub checks: Vec<CheckResult>,
    pub timestamp: String,
}
