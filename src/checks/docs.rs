//! Top-level documentation and ownership checks: readme, license,
//! codeowners, security policy.

use std::fs;
use std::path::Path;

/// A top-level `README.md` or `README.<ext>`, case-insensitive.
pub fn detect_readme(root: &Path) -> Option<String> {
    let entries = fs::read_dir(root).ok()?;
    for entry in entries.flatten() {
        let path = entry.path();
        if !path.is_file() {
            continue;
        }
        let name = entry.file_name().to_string_lossy().into_owned();
        let upper = name.to_uppercase();
        if upper == "README.MD" || (upper.starts_with("README.") && upper.len() > 7) {
            return Some(name);
        }
    }
    None
}

/// Any top-level file whose name starts with LICENSE, case-insensitive.
pub fn detect_license(root: &Path) -> Option<String> {
    let entries = fs::read_dir(root).ok()?;
    for entry in entries.flatten() {
        let path = entry.path();
        if !path.is_file() {
            continue;
        }
        let name = entry.file_name().to_string_lossy().into_owned();
        if name.to_uppercase().starts_with("LICENSE") {
            return Some(name);
        }
    }
    None
}

/// `.github/CODEOWNERS` wins over a top-level `CODEOWNERS`.
pub fn detect_codeowners(root: &Path) -> Option<String> {
    for rel in [".github/CODEOWNERS", "CODEOWNERS"] {
        if root.join(rel).is_file() {
            return Some(rel.to_string());
        }
    }
    None
}

/// `SECURITY.md` or a dependabot config.
pub fn detect_security(root: &Path) -> Option<String> {
    for rel in ["SECURITY.md", ".github/dependabot.yml"] {
        if root.join(rel).is_file() {
            return Some(rel.to_string());
        }
    }
    None
}
