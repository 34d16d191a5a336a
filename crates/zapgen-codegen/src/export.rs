//! Writing generated modules to disk.
//!
//! The output directory must already exist. Files are written directly
//! into it, replacing any previous version.

use crate::types::{GeneratedCode, GeneratedFile};
use std::fs;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};
use zapgen_core::{Error, Result};

/// Resolves `dir` to an absolute path and checks it is an existing directory.
///
/// # Errors
///
/// Returns [`Error::OutputDirMissing`] with the absolute path if `dir` does
/// not exist or is not a directory.
///
/// # Examples
///
/// ```
/// use zapgen_codegen::export::ensure_output_dir;
///
/// let err = ensure_output_dir("/definitely/not/here").unwrap_err();
/// assert_eq!(err.to_string(), "The directory does not exist: /definitely/not/here");
/// ```
pub fn ensure_output_dir(dir: impl AsRef<Path>) -> Result<PathBuf> {
    let dir = dir.as_ref();
    let absolute = std::path::absolute(dir).map_err(|e| Error::Io {
        path: dir.display().to_string(),
        source: e,
    })?;

    if !absolute.is_dir() {
        return Err(Error::OutputDirMissing {
            path: absolute.display().to_string(),
        });
    }

    Ok(absolute)
}

/// Writes one generated file into `dir`, returning the path written.
///
/// # Errors
///
/// Returns [`Error::Io`] if the file cannot be created or written.
pub fn write_file(dir: &Path, file: &GeneratedFile) -> Result<PathBuf> {
    let path = dir.join(file.path());
    tracing::info!("Generating {}", path.display());

    let io_err = |e| Error::Io {
        path: path.display().to_string(),
        source: e,
    };

    let handle = fs::File::create(&path).map_err(io_err)?;
    let mut writer = BufWriter::new(handle);
    writer.write_all(file.content().as_bytes()).map_err(io_err)?;
    writer.flush().map_err(io_err)?;

    Ok(path)
}

/// Writes every file of `code` into `dir` in order.
///
/// # Errors
///
/// Returns [`Error::OutputDirMissing`] if `dir` does not exist, or the
/// first write failure. Earlier files stay on disk.
pub fn write_files(dir: impl AsRef<Path>, code: &GeneratedCode) -> Result<Vec<PathBuf>> {
    let dir = ensure_output_dir(dir)?;
    code.files().map(|file| write_file(&dir, file)).collect()
}
