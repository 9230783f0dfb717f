//! Filesystem operations
//!
//! Path probing, recursive directory creation, and whole-file read/write
//! helpers. All functions are synchronous and side-effect free except where
//! documented; errors carry the offending path.

use std::fs::OpenOptions;
use std::io::{BufWriter, Write};
use std::path::Path;

use crate::error::FilesystemError;

/// Check whether a path exists and is a regular file
///
/// Returns `FilesystemError::NotFound` when the path does not exist, so
/// callers can distinguish "missing" from "present but a directory".
pub fn is_file(path: &Path) -> Result<bool, FilesystemError> {
    match std::fs::metadata(path) {
        Ok(metadata) => Ok(metadata.is_file()),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            Err(FilesystemError::NotFound {
                path: path.to_path_buf(),
            })
        }
        Err(e) => Err(FilesystemError::Stat {
            path: path.to_path_buf(),
            error: e.to_string(),
        }),
    }
}

/// Read the entire content of a file as UTF-8 text
///
/// Refuses to read directories. A missing path surfaces as
/// `FilesystemError::NotFound`.
pub fn read_file_data(path: &Path) -> Result<String, FilesystemError> {
    if !is_file(path)? {
        return Err(FilesystemError::NotAFile {
            path: path.to_path_buf(),
        });
    }

    tracing::debug!("Reading file: {}", path.display());

    let content = std::fs::read_to_string(path).map_err(|e| FilesystemError::ReadFile {
        path: path.to_path_buf(),
        error: e.to_string(),
    })?;

    tracing::debug!("Read {} bytes from {}", content.len(), path.display());
    Ok(content)
}

/// Create a directory and all parent directories
///
/// No-op if the directory already exists. Fails with
/// `FilesystemError::NotADirectory` when a regular file occupies the path.
pub fn ensure_dir(path: &Path) -> Result<(), FilesystemError> {
    match is_file(path) {
        Ok(true) => Err(FilesystemError::NotADirectory {
            path: path.to_path_buf(),
        }),
        Ok(false) => {
            tracing::debug!("Directory already exists: {}", path.display());
            Ok(())
        }
        Err(FilesystemError::NotFound { .. }) => {
            std::fs::create_dir_all(path).map_err(|e| FilesystemError::CreateDir {
                path: path.to_path_buf(),
                error: e.to_string(),
            })?;
            tracing::debug!("Created directory: {}", path.display());
            Ok(())
        }
        Err(e) => Err(e),
    }
}

/// Write content to a file, creating missing parent directories
///
/// With `overwrite = true` the file content is replaced; otherwise the data
/// is appended through the OS append mode. The file is created either way.
pub fn write_file_data(
    path: &Path,
    data: impl AsRef<[u8]>,
    overwrite: bool,
) -> Result<(), FilesystemError> {
    if let Some(parent) = path.parent() {
        ensure_dir(parent)?;
    }

    let write_error = |e: std::io::Error| FilesystemError::WriteFile {
        path: path.to_path_buf(),
        error: e.to_string(),
    };

    if overwrite {
        std::fs::write(path, data.as_ref()).map_err(write_error)?;
    } else {
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(path)
            .map_err(write_error)?;
        file.write_all(data.as_ref()).map_err(write_error)?;
    }

    tracing::debug!("Wrote {} bytes to {}", data.as_ref().len(), path.display());
    Ok(())
}

/// Buffered variant of [`write_file_data`] for large payloads
///
/// Append mode reads the prior content first (a missing file counts as
/// empty) and rewrites the whole file through a buffered writer, so the
/// result is always a single contiguous file.
pub fn write_big_file_data(
    path: &Path,
    data: impl AsRef<[u8]>,
    overwrite: bool,
) -> Result<(), FilesystemError> {
    if let Some(parent) = path.parent() {
        ensure_dir(parent)?;
    }

    let old_data = if overwrite {
        String::new()
    } else {
        match read_file_data(path) {
            Ok(content) => content,
            Err(FilesystemError::NotFound { .. }) => String::new(),
            Err(e) => return Err(e),
        }
    };

    let write_error = |e: std::io::Error| FilesystemError::WriteFile {
        path: path.to_path_buf(),
        error: e.to_string(),
    };

    tracing::debug!("Writing file: {}", path.display());

    let file = std::fs::File::create(path).map_err(write_error)?;
    let mut writer = BufWriter::new(file);
    writer.write_all(old_data.as_bytes()).map_err(write_error)?;
    writer.write_all(data.as_ref()).map_err(write_error)?;
    writer.flush().map_err(write_error)?;

    tracing::debug!("Finished writing {}", path.display());
    Ok(())
}
