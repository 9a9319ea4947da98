use std::io::{self, Write};
use std::path::{Path, PathBuf};

use log::{debug, warn};
use tempfile::{Builder, TempPath};

use crate::{PackageError, Result};

// ── ArchiveSource ────────────────────────────────────────────────────────────

/// Where the bytes of a package live on disk.
///
/// A package opened from a path is read in place and never touched. A
/// package opened from memory is written once to a uniquely named temporary
/// file; that file belongs to the source and is removed when the source is
/// released or dropped.
#[derive(Debug)]
pub enum ArchiveSource {
    /// A file supplied by the caller.
    File(PathBuf),
    /// A temporary file created from in-memory contents.
    Temporary(TempPath),
}

impl ArchiveSource {
    /// Use an existing file as the package source.
    pub fn from_path<P: AsRef<Path>>(path: P) -> Self {
        Self::File(path.as_ref().to_path_buf())
    }

    /// Write `content` to a new temporary file and use it as the source.
    ///
    /// The file is created inside `temp_dir` when given, otherwise in the
    /// system temporary directory. If the write fails the partial file is
    /// deleted before the error is returned.
    pub fn from_contents(content: &[u8], temp_dir: Option<&Path>) -> Result<Self> {
        let mut builder = Builder::new();
        builder.prefix("cfdi-package-").suffix(".zip");

        let mut file = match temp_dir {
            Some(dir) => builder.tempfile_in(dir),
            None => builder.tempfile(),
        }
        .map_err(PackageError::TemporaryFileCreation)?;

        // On failure `file` is dropped here, which removes it from disk.
        file.write_all(content)
            .and_then(|_| file.flush())
            .map_err(PackageError::TemporaryFileCreation)?;

        let path = file.into_temp_path();
        debug!(
            "Wrote {} bytes to temporary package {}",
            content.len(),
            path.display()
        );
        Ok(Self::Temporary(path))
    }

    /// The path the package is read from.
    pub fn path(&self) -> &Path {
        match self {
            Self::File(path) => path.as_path(),
            Self::Temporary(path) => &**path,
        }
    }

    /// Returns `true` when the source owns a temporary file.
    pub fn is_temporary(&self) -> bool {
        matches!(self, Self::Temporary(_))
    }

    /// Delete the temporary file, if any.
    ///
    /// A file that was already removed by someone else is not an error.
    pub fn release(self) -> Result<()> {
        match self {
            Self::File(_) => Ok(()),
            Self::Temporary(path) => {
                let display = path.display().to_string();
                match path.close() {
                    Ok(()) => {
                        debug!("Removed temporary package {display}");
                        Ok(())
                    }
                    Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(()),
                    Err(e) => {
                        warn!("Unable to remove temporary package {display}: {e}");
                        Err(PackageError::Io(e))
                    }
                }
            }
        }
    }
}
