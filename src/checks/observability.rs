//! Observability check: an "opentelemetry" mention in dependency manifests
//! or configuration files.

use super::{IGNORED_DIRS, MAX_READ_BYTES};
use crate::scan::filesystem::{read_prefix, relative_display, walk_files};
use std::path::Path;

const CONFIG_EXTENSIONS: &[&str] = &["json", "toml", "yml", "yaml", "txt", "xml", "gradle", "mod"];
const CONFIG_DIR_NAMES: &[&str] = &["config", "conf", "workflows"];
const NEEDLE: &str = "opentelemetry";

pub fn detect_observability(root: &Path) -> Option<String> {
    for path in walk_files(root, IGNORED_DIRS) {
        let Some(rel) = relative_display(root, &path) else {
            continue;
        };
        let has_config_extension = path
            .extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| {
                let lower = ext.to_lowercase();
                CONFIG_EXTENSIONS.contains(&lower.as_str())
            });
        let under_config_dir = rel
            .split('/')
            .any(|part| CONFIG_DIR_NAMES.contains(&part));
        if !has_config_extension && !under_config_dir {
            continue;
        }
        let Some(bytes) = read_prefix(&path, MAX_READ_BYTES) else {
            continue;
        };
        let content = String::from_utf8_lossy(&bytes).to_lowercase();
        if content.contains(NEEDLE) {
            return Some(rel);
        }
    }
    None
}
