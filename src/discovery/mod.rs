// src/discovery/mod.rs
use std::fs;
use std::path::{Path, PathBuf};
use crate::utils::error::DiscoveryError;

const TEX_SUFFIX: &str = ".tex";

/// Recursively collects every file under `root` whose name ends in `.tex`.
///
/// The result is sorted so that repeated runs over the same tree visit files
/// in the same order. A missing root is reported before any directory is read.
/// A root that is not a directory yields no files. Symlinked directories are
/// not descended into, and subdirectories that cannot be read are skipped with
/// a warning; only a failure to read the root itself is an error.
pub fn find_tex_files<P: AsRef<Path>>(root: P) -> Result<Vec<PathBuf>, DiscoveryError> {
    let root = root.as_ref();
    if !root.exists() {
        return Err(DiscoveryError::RootNotFound(root.to_path_buf()));
    }

    let mut files = Vec::new();
    if root.is_dir() {
        let entries = fs::read_dir(root).map_err(|source| DiscoveryError::Io {
            path: root.to_path_buf(),
            source,
        })?;
        collect_tex_files(entries, &mut files);
    }
    files.sort();

    tracing::debug!("Discovered {} .tex files under {}", files.len(), root.display());
    Ok(files)
}

fn collect_tex_files(entries: fs::ReadDir, files: &mut Vec<PathBuf>) {
    for entry in entries {
        let entry = match entry {
            Ok(entry) => entry,
            Err(e) => {
                tracing::warn!("Skipping unreadable directory entry: {}", e);
                continue;
            }
        };
        let entry_path = entry.path();

        // file_type() does not follow symlinks
        let is_dir = entry.file_type().map(|ft| ft.is_dir()).unwrap_or(false);
        if is_dir {
            match fs::read_dir(&entry_path) {
                Ok(sub) => collect_tex_files(sub, files),
                Err(e) => tracing::warn!("Skipping {}: {}", entry_path.display(), e),
            }
        } else if is_tex_file(&entry_path) {
            files.push(entry_path);
        }
    }
}

/// Literal suffix match on the file name; `table.TEX` and `notes.tex.bak` do not count.
fn is_tex_file(path: &Path) -> bool {
    path.file_name()
        .and_then(|n| n.to_str())
        .map(|name| name.ends_with(TEX_SUFFIX))
        .unwrap_or(false)
}
