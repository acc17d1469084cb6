#[cfg(test)]
mod tests;

use std::fs;
use std::io;
use std::path::Path;

use crate::error::TextFileError;
use crate::writer::WriterOptions;

/// Create `path` with the given initial lines unless it already exists.
///
/// Returns `true` when the file was created, `false` when it was already
/// present and left untouched.
pub fn ensure_created(
    path: &Path,
    initial_lines: &[&str],
    options: WriterOptions,
) -> Result<bool, TextFileError> {
    if path.exists() {
        return Ok(false);
    }

    let mut writer = options.create(path)?;
    for line in initial_lines {
        writer.write_line(line)?;
    }
    writer.finish()?;
    Ok(true)
}

/// Append one line to an existing file.
///
/// Returns `false` without touching the filesystem when `path` does not
/// exist.
pub fn append_line(path: &Path, text: &str, options: WriterOptions) -> Result<bool, TextFileError> {
    if !path.exists() {
        return Ok(false);
    }

    let mut writer = options.append(path)?;
    writer.write_line(text)?;
    writer.finish()?;
    Ok(true)
}

/// Delete the file at `path`.
///
/// Deleting an absent path is a no-op returning `false`; any other failure
/// is reported.
pub fn delete(path: &Path) -> Result<bool, TextFileError> {
    match fs::remove_file(path) {
        Ok(()) => Ok(true),
        Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(false),
        Err(source) => Err(TextFileError::Delete {
            path: path.to_path_buf(),
            source,
        }),
    }
}
