//! Upward search for the project marker directory.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use tracing::trace;

/// Look for a directory called `name` in `start` and each of its ancestors,
/// nearest first.
///
/// Returns `Ok(None)` when no ancestor has one.
///
/// # Errors
///
/// Returns an error if an entry cannot be inspected for a reason other than
/// not existing (for example, permission denied).
pub fn find_dir_in_path(start: &Path, name: &str) -> io::Result<Option<PathBuf>> {
    for dir in start.ancestors() {
        let candidate = dir.join(name);
        trace!(candidate = %candidate.display(), "checking for marker");
        match fs::metadata(&candidate) {
            Ok(meta) if meta.is_dir() => return Ok(Some(candidate)),
            Ok(_) => {}
            Err(err) if err.kind() == io::ErrorKind::NotFound => {}
            Err(err) => return Err(err),
        }
    }
    Ok(None)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_finds_nearest_marker() {
        let temp = tempfile::tempdir().unwrap();
        let outer = temp.path().join("outer");
        let inner = outer.join("inner");
        let deep = inner.join("a").join("b");
        fs::create_dir_all(outer.join(".astro")).unwrap();
        fs::create_dir_all(inner.join(".astro")).unwrap();
        fs::create_dir_all(&deep).unwrap();

        let found = find_dir_in_path(&deep, ".astro").unwrap();
        assert_eq!(found, Some(inner.join(".astro")));
    }

    #[test]
    fn test_start_directory_is_checked_first() {
        let temp = tempfile::tempdir().unwrap();
        fs::create_dir(temp.path().join(".astro")).unwrap();

        let found = find_dir_in_path(temp.path(), ".astro").unwrap();
        assert_eq!(found, Some(temp.path().join(".astro")));
    }

    #[test]
    fn test_file_with_marker_name_is_skipped() {
        let temp = tempfile::tempdir().unwrap();
        let marker_name = ".astro-test-marker-file";
        let sub = temp.path().join("sub");
        fs::create_dir(&sub).unwrap();
        fs::write(sub.join(marker_name), "not a dir").unwrap();
        fs::create_dir(temp.path().join(marker_name)).unwrap();

        let found = find_dir_in_path(&sub, marker_name).unwrap();
        assert_eq!(found, Some(temp.path().join(marker_name)));
    }

    #[test]
    fn test_missing_marker_is_not_an_error() {
        let temp = tempfile::tempdir().unwrap();
        let found = find_dir_in_path(temp.path(), ".astro-marker-that-does-not-exist").unwrap();
        assert!(found.is_none());
    }
}
