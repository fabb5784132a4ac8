//! Project discovery for recursive audits.

use crate::scanner::{LOCKFILE_FILE, MANIFEST_FILE};
use std::path::{Path, PathBuf};
use walkdir::{DirEntry, WalkDir};

/// Returns every directory under `root` (including `root` itself) that holds
/// a `package.json` or `package-lock.json`, in sorted walk order.
///
/// Installed packages under `node_modules` and hidden directories are not
/// descended into.
pub fn discover_projects(root: &Path) -> Vec<PathBuf> {
    WalkDir::new(root)
        .sort_by_file_name()
        .into_iter()
        .filter_entry(|e| e.depth() == 0 || !is_skipped_dir(e))
        .filter_map(|e| match e {
            Ok(entry) => Some(entry),
            Err(err) => {
                tracing::warn!("skipping unreadable entry: {}", err);
                None
            }
        })
        .filter(|e| e.file_type().is_dir() && is_project_dir(e.path()))
        .map(DirEntry::into_path)
        .collect()
}

fn is_skipped_dir(entry: &DirEntry) -> bool {
    entry.file_type().is_dir()
        && entry
            .file_name()
            .to_str()
            .map(|name| name == "node_modules" || name.starts_with('.'))
            .unwrap_or(false)
}

fn is_project_dir(dir: &Path) -> bool {
    dir.join(MANIFEST_FILE).is_file() || dir.join(LOCKFILE_FILE).is_file()
}
