//! Input file discovery.

use std::fs;
use std::path::{Path, PathBuf};

use crate::SourceError;

/// Extension of the files processed by default.
pub const PARQUET_EXTENSION: &str = "parquet";

/// Recursively finds every file under `root` whose extension is exactly
/// `extension`.
///
/// Symlinks to files are included; symlinked directories are not descended
/// into. The result is sorted so runs over an unchanged tree visit files in
/// the same order.
///
/// # Errors
///
/// Returns an error if `root` or any directory beneath it cannot be read.
pub fn discover_files(root: &Path, extension: &str) -> Result<Vec<PathBuf>, SourceError> {
    let mut files = Vec::new();
    visit(root, extension, &mut files)?;
    files.sort();
    Ok(files)
}

fn visit(dir: &Path, extension: &str, files: &mut Vec<PathBuf>) -> Result<(), SourceError> {
    let io_err = |source| SourceError::Io {
        path: dir.to_path_buf(),
        source,
    };

    for entry in fs::read_dir(dir).map_err(io_err)? {
        let entry = entry.map_err(io_err)?;
        let file_type = entry.file_type().map_err(io_err)?;
        let path = entry.path();

        if file_type.is_dir() {
            visit(&path, extension, files)?;
            continue;
        }
        if !path.extension().is_some_and(|ext| ext == extension) {
            continue;
        }
        // Linked files are followed; linked directories are not.
        let is_file = file_type.is_file()
            || (file_type.is_symlink() && fs::metadata(&path).is_ok_and(|m| m.is_file()));
        if is_file {
            files.push(path);
        }
    }
    Ok(())
}
