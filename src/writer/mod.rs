
use std::fs::{File, OpenOptions};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use crate::encoding::{LineEnding, TextEncoding};
use crate::error::TextFileError;

/// Options for opening a text-output session
#[derive(Debug, Clone, Copy)]
pub struct WriterOptions {
    encoding: TextEncoding,
    newline: LineEnding,
    write_bom: bool,
}

impl WriterOptions {
    /// UTF-8, native line terminator, no byte-order mark
    pub fn new() -> Self {
        Self {
            encoding: TextEncoding::Utf8,
            newline: LineEnding::native(),
            write_bom: false,
        }
    }

    /// Set the character encoding
    pub fn encoding(mut self, encoding: TextEncoding) -> Self {
        self.encoding = encoding;
        self
    }

    /// Set the line terminator
    pub fn newline(mut self, newline: LineEnding) -> Self {
        self.newline = newline;
        self
    }

    /// Emit the encoding's byte-order mark at the head of a created file
    pub fn write_bom(mut self, write_bom: bool) -> Self {
        self.write_bom = write_bom;
        self
    }

    /// Open `path` for writing, discarding any existing content
    pub fn create(self, path: &Path) -> Result<TextWriter, TextFileError> {
        let file = File::create(path).map_err(|source| TextFileError::Create {
            path: path.to_path_buf(),
            source,
        })?;

        let mut writer = TextWriter {
            inner: BufWriter::new(file),
            encoding: self.encoding,
            newline: self.newline,
            path: path.to_path_buf(),
        };
        if self.write_bom {
            writer.write_raw(self.encoding.bom())?;
        }
        Ok(writer)
    }

    /// Open `path` for appending, creating it if absent.
    ///
    /// Append sessions position at end-of-content and never emit a
    /// byte-order mark.
    pub fn append(self, path: &Path) -> Result<TextWriter, TextFileError> {
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(path)
            .map_err(|source| TextFileError::Open {
                path: path.to_path_buf(),
                source,
            })?;

        Ok(TextWriter {
            inner: BufWriter::new(file),
            encoding: self.encoding,
            newline: self.newline,
            path: path.to_path_buf(),
        })
    }
}

impl Default for WriterOptions {
    fn default() -> Self {
        Self::new()
    }
}

/// Encoded text-output session over a buffered file handle.
///
/// Write operations append in call order. The handle flushes and closes when
/// dropped on any exit path; call [`TextWriter::finish`] to surface flush
/// errors that a bare drop would discard.
pub struct TextWriter {
    inner: BufWriter<File>,
    encoding: TextEncoding,
    newline: LineEnding,
    path: PathBuf,
}

impl TextWriter {
    /// Write a single character
    pub fn write_char(&mut self, c: char) -> Result<(), TextFileError> {
        let mut buf = [0u8; 4];
        self.write_str(c.encode_utf8(&mut buf))
    }

    /// Write a string without a terminator
    pub fn write_str(&mut self, text: &str) -> Result<(), TextFileError> {
        let bytes = self.encoding.encode(text);
        self.write_raw(&bytes)
    }

    /// Write a string followed by the configured line terminator
    pub fn write_line(&mut self, text: &str) -> Result<(), TextFileError> {
        self.write_str(text)?;
        self.write_newline()
    }

    /// Write the configured line terminator on its own
    pub fn write_newline(&mut self) -> Result<(), TextFileError> {
        self.write_str(self.newline.as_str())
    }

    /// The line terminator this session writes
    pub fn newline(&self) -> &'static str {
        self.newline.as_str()
    }

    /// The path this session writes to
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Flush buffered output and close the session, reporting any failure
    pub fn finish(mut self) -> Result<(), TextFileError> {
        self.inner.flush().map_err(|source| TextFileError::Write {
            path: self.path.clone(),
            source,
        })
    }

    fn write_raw(&mut self, bytes: &[u8]) -> Result<(), TextFileError> {
        self.inner
            .write_all(bytes)
            .map_err(|source| TextFileError::Write {
                path: self.path.clone(),
                source,
            })
    }
}
