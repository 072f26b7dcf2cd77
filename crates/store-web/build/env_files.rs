//! Locations of the `.env` file the build script reads.

use std::path::{Path, PathBuf};

/// `.env` paths the build depends on, whether or not they exist yet:
/// the crate directory first, then the workspace root.
pub fn env_file_candidates(manifest_dir: &Path) -> Vec<PathBuf> {
    let mut candidates = vec![manifest_dir.join(".env")];
    if let Some(root) = manifest_dir.parent().and_then(Path::parent) {
        candidates.push(root.join(".env"));
    }
    candidates
}
