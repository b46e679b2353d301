use crate::types::report::Report;

pub fn to_json(report: &Report) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(report)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::report::CheckResult;

    fn sample_report() -> Report {
        Report {
            repo_path: "/repo".to_string(),
            score: 10,
            passed: 1,
            failed: 1,
            checks: vec![
                CheckResult {
                    id: "readme".to_string(),
                    name: "README present".to_string(),
                    weight: 10,
                    passed: true,
                    evidence: "README.md".to_string(),
                },
                CheckResult {
                    id: "license".to_string(),
                    name: "LICENSE present".to_string(),
                    weight: 5,
                    passed: false,
                    evidence: String::new(),
                },
            ],
            timestamp: "2026-01-01T00:00:00Z".to_string(),
        }
    }

    #[test]
    fn json_uses_contract_field_names() {
        let rendered = to_json(&sample_report()).expect("json should serialize");
        assert!(rendered.contains("\"repoPath\": \"/repo\""));
        assert!(rendered.contains("\"score\": 10"));
        assert!(rendered.contains("\"passed\": 1"));
        assert!(rendered.contains("\"failed\": 1"));
        assert!(rendered.contains("\"checks\""));
        assert!(rendered.contains("\"timestamp\": \"2026-01-01T00:00:00Z\""));
    }

    #[test]
    fn json_preserves_non_ascii_evidence() {
        let mut report = sample_report();
        report.checks[0].evidence = "docs/LÉEME.md".to_string();
        let rendered = to_json(&report).expect("json should serialize");
        assert!(rendered.contains("LÉEME"));
    }

    #[test]
    fn json_keeps_registry_order_in_checks_array() {
        let rendered = to_json(&sample_report()).expect("json should serialize");
        let readme_at = rendered.find("\"readme\"").expect("readme entry");
        let license_at = rendered.find("\"license\"").expect("license entry");
        assert!(readme_at < license_at);
    }
}
