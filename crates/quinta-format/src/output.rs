//! Output file naming and atomic writes.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;

use crate::FormatError;

/// Destination paths for one input file's tables.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputPaths {
    /// `<stem>.<ext>`
    pub candles: PathBuf,
    /// `pivot_points_<stem>.<ext>`
    pub pivots: PathBuf,
}

impl OutputPaths {
    /// Derives output paths from the input file's name with its extension
    /// stripped.
    #[must_use]
    pub fn for_input(output_dir: &Path, input: &Path, extension: &str) -> Self {
        let stem = input
            .file_stem()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_default();
        Self {
            candles: output_dir.join(format!("{stem}.{extension}")),
            pivots: output_dir.join(format!("pivot_points_{stem}.{extension}")),
        }
    }
}

/// Permission bits given to every output table, as a plain file create
/// would under the usual umask.
#[cfg(unix)]
const OUTPUT_MODE: u32 = 0o644;

/// A table fully written to a temporary file beside its destination but not
/// yet visible there.
///
/// Dropping it without [`commit`](Self::commit) removes the temporary file.
#[derive(Debug)]
pub struct StagedFile {
    tmp: NamedTempFile,
    target: PathBuf,
}

impl StagedFile {
    /// Writes a table to a temporary file in `path`'s directory.
    ///
    /// # Errors
    ///
    /// Returns an error if the temporary file cannot be created or `write`
    /// fails.
    pub fn create<F>(path: &Path, write: F) -> Result<Self, FormatError>
    where
        F: FnOnce(&mut BufWriter<&mut File>) -> Result<(), FormatError>,
    {
        let dir = path
            .parent()
            .filter(|p| !p.as_os_str().is_empty())
            .unwrap_or_else(|| Path::new("."));
        let mut tmp = NamedTempFile::new_in(dir)?;

        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            tmp.as_file()
                .set_permissions(std::fs::Permissions::from_mode(OUTPUT_MODE))?;
        }

        {
            let mut writer = BufWriter::new(tmp.as_file_mut());
            write(&mut writer)?;
            writer.flush()?;
        }

        Ok(Self {
            tmp,
            target: path.to_path_buf(),
        })
    }

    /// Returns the destination path.
    #[must_use]
    pub fn target(&self) -> &Path {
        &self.target
    }

    /// Renames the temporary file onto the destination, replacing any
    /// existing file.
    ///
    /// # Errors
    ///
    /// Returns an error if the rename fails.
    pub fn commit(self) -> Result<(), FormatError> {
        self.tmp
            .persist(&self.target)
            .map_err(|e| FormatError::Io(e.error))?;
        Ok(())
    }
}

/// Writes `path` through a temporary file in the same directory, renaming it
/// into place only after `write` succeeds and the buffer is flushed.
///
/// On failure the temporary file is removed and any existing `path` is left
/// untouched.
///
/// # Errors
///
/// Returns an error if the temporary file cannot be created, `write` fails,
/// or the rename fails.
pub fn write_atomically<F>(path: &Path, write: F) -> Result<(), FormatError>
where
    F: FnOnce(&mut BufWriter<&mut File>) -> Result<(), FormatError>,
{
    StagedFile::create(path, write)?.commit()
}
