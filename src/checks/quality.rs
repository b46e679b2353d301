//! Engineering-quality checks: CI configuration, test layout, linter config.

use super::{IGNORED_DIRS, LINTER_TOOLS, MANIFEST_READ_BYTES};
use crate::scan::filesystem::{read_prefix_lossy, relative_display, walk_files};
use std::fs;
use std::path::Path;

/// A workflow file under `.github/workflows/`, or a top-level
/// `.gitlab-ci.yml`.
pub fn detect_ci(root: &Path) -> Option<String> {
    let workflows = root.join(".github").join("workflows");
    if workflows.is_dir() {
        if let Ok(entries) = fs::read_dir(&workflows) {
            for entry in entries.flatten() {
                let name = entry.file_name().to_string_lossy().into_owned();
                let extension = name.rsplit_once('.').map(|(_, ext)| ext.to_lowercase());
                if matches!(extension.as_deref(), Some("yml") | Some("yaml")) {
                    return Some(format!(".github/workflows/{name}"));
                }
            }
        }
    }
    if root.join(".gitlab-ci.yml").is_file() {
        return Some(".gitlab-ci.yml".to_string());
    }
    None
}

const TEST_DIR_NAMES: &[&str] = &["test", "tests", "spec", "specs", "__tests__"];

/// A top-level `tests/`/`test/` directory, any `__tests__` directory in the
/// tree, or a test-named file inside a test-named directory. Deliberately
/// permissive; a stray `contest.py` outside test directories does not count.
pub fn detect_tests(root: &Path) -> Option<String> {
    if root.join("tests").is_dir() || root.join("test").is_dir() {
        return Some("tests/ or test/".to_string());
    }
    for path in walk_files(root, IGNORED_DIRS) {
        let Some(rel) = relative_display(root, &path) else {
            continue;
        };
        let parts = rel.split('/').collect::<Vec<_>>();
        if parts.contains(&"__tests__") {
            return Some(rel);
        }
        let stem = path
            .file_stem()
            .map(|stem| stem.to_string_lossy().to_lowercase())
            .unwrap_or_default();
        if (stem.contains("test") || stem.contains("spec"))
            && parts.iter().any(|part| TEST_DIR_NAMES.contains(part))
        {
            return Some(rel);
        }
    }
    None
}

/// A dedicated linter config file anywhere in the tree, or a
/// `pyproject.toml` that mentions one of the known linter tools.
pub fn detect_linter(root: &Path) -> Option<String> {
    for path in walk_files(root, IGNORED_DIRS) {
        let Some(rel) = relative_display(root, &path) else {
            continue;
        };
        let name = path
            .file_name()
            .map(|name| name.to_string_lossy().to_lowercase())
            .unwrap_or_default();
        if name == ".editorconfig"
            || name.starts_with(".eslintrc")
            || name == "ruff.toml"
            || name == "stylecop.json"
        {
            return Some(rel);
        }
        if name == "pyproject.toml" {
            if let Some(content) = read_prefix_lossy(&path, MANIFEST_READ_BYTES) {
                if LINTER_TOOLS.iter().any(|tool| content.contains(tool)) {
                    return Some(rel);
                }
            }
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn workflow_yaml_counts_as_ci() {
        let dir = TempDir::new().expect("temp dir should be created");
        fs::create_dir_all(dir.path().join(".github/workflows")).expect("workflows dir create");
        fs::write(dir.path().join(".github/workflows/build.yaml"), "name: build")
            .expect("workflow write");

        let evidence = detect_ci(dir.path()).expect("ci should pass");
        assert!(evidence.starts_with(".github/workflows/"));
        assert!(evidence.ends_with(".yaml"));
    }

    #[test]
    fn gitlab_ci_counts_as_ci() {
        let dir = TempDir::new().expect("temp dir should be created");
        fs::write(dir.path().join(".gitlab-ci.yml"), "stages: [test]").expect("gitlab ci write");
        assert_eq!(detect_ci(dir.path()).as_deref(), Some(".gitlab-ci.yml"));
    }

    #[test]
    fn non_yaml_workflow_files_are_ignored() {
        let dir = TempDir::new().expect("temp dir should be created");
        fs::create_dir_all(dir.path().join(".github/workflows")).expect("workflows dir create");
        fs::write(dir.path().join(".github/workflows/notes.md"), "todo").expect("notes write");
        assert!(detect_ci(dir.path()).is_none());
    }

    #[test]
    fn top_level_tests_directory_counts() {
        let dir = TempDir::new().expect("temp dir should be created");
        fs::create_dir_all(dir.path().join("tests")).expect("tests dir create");
        assert_eq!(detect_tests(dir.path()).as_deref(), Some("tests/ or test/"));
    }

    #[test]
    fn nested_test_file_in_test_directory_counts() {
        let dir = TempDir::new().expect("temp dir should be created");
        fs::create_dir_all(dir.path().join("pkg/specs")).expect("specs dir create");
        fs::write(dir.path().join("pkg/specs/store_spec.py"), "assert True")
            .expect("spec file write");
        assert_eq!(
            detect_tests(dir.path()).as_deref(),
            Some("pkg/specs/store_spec.py")
        );
    }

    #[test]
    fn dunder_tests_directory_counts_regardless_of_stems() {
        let dir = TempDir::new().expect("temp dir should be created");
        fs::create_dir_all(dir.path().join("src/__tests__")).expect("tests dir create");
        fs::write(dir.path().join("src/__tests__/app.js"), "it()").expect("test file write");
        assert_eq!(
            detect_tests(dir.path()).as_deref(),
            Some("src/__tests__/app.js")
        );
    }

    #[test]
    fn test_named_file_outside_test_directories_does_not_count() {
        let dir = TempDir::new().expect("temp dir should be created");
        fs::write(dir.path().join("contest.py"), "print('hi')").expect("file write");
        assert!(detect_tests(dir.path()).is_none());
    }

    #[test]
    fn editorconfig_anywhere_counts_as_linter() {
        let dir = TempDir::new().expect("temp dir should be created");
        fs::create_dir_all(dir.path().join("sub")).expect("sub dir create");
        fs::write(dir.path().join("sub/.editorconfig"), "root = true")
            .expect("editorconfig write");
        assert_eq!(
            detect_linter(dir.path()).as_deref(),
            Some("sub/.editorconfig")
        );
    }

    #[test]
    fn pyproject_mentioning_ruff_counts_as_linter() {
        let dir = TempDir::new().expect("temp dir should be created");
        fs::write(
            dir.path().join("pyproject.toml"),
            "[tool.ruff]\nline-length = 100\n",
        )
        .expect("pyproject write");
        assert_eq!(detect_linter(dir.path()).as_deref(), Some("pyproject.toml"));
    }

    #[test]
    fn pyproject_without_linter_tools_does_not_count() {
        let dir = TempDir::new().expect("temp dir should be created");
        fs::write(
            dir.path().join("pyproject.toml"),
            "[project]\nname = \"app\"\n",
        )
        .expect("pyproject write");
        assert!(detect_linter(dir.path()).is_none());
    }

    #[test]
    fn linter_config_inside_ignored_directory_does_not_count() {
        let dir = TempDir::new().expect("temp dir should be created");
        fs::create_dir_all(dir.path().join("node_modules/pkg")).expect("dep dir create");
        fs::write(dir.path().join("node_modules/pkg/.eslintrc.json"), "{}")
            .expect("eslintrc write");
        assert!(detect_linter(dir.path()).is_none());
    }
}
