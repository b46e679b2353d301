//! Containerization and release-hygiene checks.

use super::{IGNORED_DIRS, VERSION_READ_BYTES};
use crate::scan::filesystem::{read_prefix_lossy, relative_display, walk_files};
use regex::Regex;
use std::path::Path;
use std::sync::LazyLock;

static VERSION_FIELD: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?i)"version"\s*:\s*["']?[\d.]+\d["']?"#).expect("version pattern compiles")
});

static VERSION_ELEMENT: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)<Version>[\d.]+</Version>").expect("csproj pattern compiles")
});

/// A top-level Dockerfile or compose file.
pub fn detect_docker(root: &Path) -> Option<String> {
    for name in ["Dockerfile", "docker-compose.yml", "docker-compose.yaml"] {
        if root.join(name).is_file() {
            return Some(name.to_string());
        }
    }
    None
}

/// A changelog, a dotted version field in `package.json`/`pyproject.toml`,
/// or a `<Version>` element in any `.csproj`.
pub fn detect_release(root: &Path) -> Option<String> {
    if root.join("CHANGELOG.md").is_file() {
        return Some("CHANGELOG.md".to_string());
    }
    for name in ["package.json", "pyproject.toml"] {
        let path = root.join(name);
        if !path.is_file() {
            continue;
        }
        if let Some(text) = read_prefix_lossy(&path, VERSION_READ_BYTES) {
            if VERSION_FIELD.is_match(&text) {
                return Some(format!("{name} (version)"));
            }
        }
    }
    for path in walk_files(root, IGNORED_DIRS) {
        let is_csproj = path
            .extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| ext.eq_ignore_ascii_case("csproj"));
        if !is_csproj {
            continue;
        }
        if let Some(text) = read_prefix_lossy(&path, VERSION_READ_BYTES) {
            if VERSION_ELEMENT.is_match(&text) {
                return relative_display(root, &path);
            }
        }
    }
    None
}
