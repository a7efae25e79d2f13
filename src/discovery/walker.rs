use std::path::{Path, PathBuf};

use thiserror::Error;
use tracing::warn;
use walkdir::WalkDir;

/// Suffix convention for Go test files.
pub const TEST_FILE_SUFFIX: &str = "_test.go";

#[derive(Debug, Error)]
pub enum WalkError {
    #[error("directory not found: {path}")]
    DirectoryNotFound { path: PathBuf },

    #[error("not a directory: {path}")]
    NotADirectory { path: PathBuf },

    #[error("failed to walk directory '{path}': {source}")]
    DirectoryScanError {
        path: PathBuf,
        source: walkdir::Error,
    },
}

/// Walks `root` depth-first and returns every `*_test.go` file in lexical
/// order per directory. Directories are descended, never yielded.
///
/// A root that does not exist or cannot be opened aborts the walk; errors on
/// entries below the root (unreadable files, permission holes) are logged and
/// skipped so one bad entry does not sink the scan.
pub fn walk_test_files(root: &Path) -> Result<Vec<PathBuf>, WalkError> {
    if !root.exists() {
        return Err(WalkError::DirectoryNotFound {
            path: root.to_path_buf(),
        });
    }
    if !root.is_dir() {
        return Err(WalkError::NotADirectory {
            path: root.to_path_buf(),
        });
    }

    let mut files = Vec::new();

    for entry in WalkDir::new(root).sort_by_file_name() {
        let entry = match entry {
            Ok(e) => e,
            // depth 0 is the root itself; anything wrong there is fatal
            Err(e) if e.depth() == 0 => {
                return Err(WalkError::DirectoryScanError {
                    path: root.to_path_buf(),
                    source: e,
                });
            }
            Err(e) => {
                warn!(error = %e, "skipping unreadable entry");
                continue;
            }
        };

        if !entry.file_type().is_file() {
            continue;
        }

        let name = entry.file_name().to_string_lossy();
        if name.ends_with(TEST_FILE_SUFFIX) {
            files.push(entry.path().to_path_buf());
        }
    }

    Ok(files)
}
