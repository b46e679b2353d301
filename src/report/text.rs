use crate::types::report::Report;

/// Renders the aligned console table: a header line, a summary line, and one
/// fixed-width row per check in registry order.
pub fn to_text(report: &Report) -> String {
    let separator = format!(
        "+{}+{}+{}+{}+{}+",
        "-".repeat(12),
        "-".repeat(28),
        "-".repeat(8),
        "-".repeat(6),
        "-".repeat(44)
    );

    let mut lines = Vec::with_capacity(report.checks.len() + 6);
    lines.push(format!("repo-scorecard — {}", report.repo_path));
    lines.push(format!(
        "Score: {}/100  Passed: {}  Failed: {}  ({})",
        report.score, report.passed, report.failed, report.timestamp
    ));
    lines.push(separator.clone());
    lines.push(format!(
        "| {:<10} | {:<26} | {:^6} | {:^4} | {:<42} |",
        "ID", "Name", "Weight", "OK", "Evidence"
    ));
    lines.push(separator.clone());
    for check in &report.checks {
        let evidence = if check.evidence.is_empty() {
            "-"
        } else {
            check.evidence.as_str()
        };
        lines.push(format!(
            "| {:<10} | {:<26} | {:^6} | {:^4} | {:<42} |",
            clip(&check.id, 10),
            clip(&check.name, 26),
            check.weight,
            if check.passed { "yes" } else { "no" },
            clip(evidence, 42),
        ));
    }
    lines.push(separator);
    lines.join("\n")
}

fn clip(text: &str, max: usize) -> String {
    text.chars().take(max).collect()
}
