use std::fs::File;
use std::io::Read;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// Lazily yields every regular file under `root`, pruning directories (and
/// dropping files) whose name matches the ignore set by exact component.
/// The root itself is always traversed, whatever it is named. Entries that
/// cannot be read are skipped, not fatal.
pub fn walk_files<'a>(
    root: &Path,
    ignored_dirs: &'a [&'static str],
) -> impl Iterator<Item = PathBuf> + 'a {
    WalkDir::new(root)
        .into_iter()
        .filter_entry(move |entry| {
            entry.depth() == 0
                || !entry
                    .file_name()
                    .to_str()
                    .is_some_and(|name| ignored_dirs.contains(&name))
        })
        .filter_map(|entry| match entry {
            Ok(entry) => Some(entry),
            Err(err) => {
                tracing::debug!("skipping unreadable entry: {err}");
                None
            }
        })
        .filter(|entry| entry.file_type().is_file())
        .map(|entry| entry.into_path())
}

/// Reads at most `limit` bytes from the start of `path`. Returns `None` on
/// any I/O failure so callers can skip the candidate.
pub fn read_prefix(path: &Path, limit: usize) -> Option<Vec<u8>> {
    let file = File::open(path).ok()?;
    let mut buffer = Vec::new();
    file.take(limit as u64).read_to_end(&mut buffer).ok()?;
    Some(buffer)
}

/// Bounded read decoded lossily to UTF-8.
pub fn read_prefix_lossy(path: &Path, limit: usize) -> Option<String> {
    read_prefix(path, limit).map(|bytes| String::from_utf8_lossy(&bytes).into_owned())
}

/// Root-relative rendering with forward slashes on every platform.
pub fn relative_display(root: &Path, path: &Path) -> Option<String> {
    let rel = path.strip_prefix(root).ok()?;
    let parts = rel
        .iter()
        .map(|part| part.to_string_lossy().into_owned())
        .collect::<Vec<_>>();
    Some(parts.join("/"))
}
