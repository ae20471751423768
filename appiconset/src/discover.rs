use crate::contents::has_master_entry;
use crate::Result;
use std::path::{Path, PathBuf};

pub const APPICONSET_EXT: &str = ".appiconset";
pub const XCASSETS_EXT: &str = ".xcassets";

pub fn is_appiconset(path: &Path) -> bool {
    has_suffix(path, APPICONSET_EXT)
}

pub fn is_xcassets(path: &Path) -> bool {
    has_suffix(path, XCASSETS_EXT)
}

fn has_suffix(path: &Path, suffix: &str) -> bool {
    path.file_name()
        .map(|name| name.to_string_lossy().ends_with(suffix))
        .unwrap_or_default()
}

/// Returns every `.appiconset` below `root` whose manifest names a
/// 1024x1024 image, in depth first pre-order.
///
/// Icon sets are never descended into.
pub fn find_appiconsets(root: &Path) -> Result<Vec<PathBuf>> {
    let mut found = Vec::new();
    walk(root, &mut found)?;
    Ok(found)
}

fn walk(dir: &Path, found: &mut Vec<PathBuf>) -> Result<()> {
    let mut entries = std::fs::read_dir(dir)?.collect::<std::io::Result<Vec<_>>>()?;
    entries.sort_by_key(|entry| entry.file_name());
    for entry in entries {
        if !entry.file_type()?.is_dir() {
            continue;
        }
        let path = entry.path();
        if is_appiconset(&path) {
            if has_master_entry(&path) {
                found.push(path);
            }
        } else {
            walk(&path, found)?;
        }
    }
    Ok(())
}
