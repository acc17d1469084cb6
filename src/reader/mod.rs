mod report;


pub use report::report_line;

use std::fs::File;
use std::io::{self, BufRead, BufReader, Read};
use std::path::{Path, PathBuf};

use crate::encoding::TextEncoding;
use crate::error::TextFileError;

const LF: u16 = b'\n' as u16;
const CR: u16 = b'\r' as u16;

/// Encoded line reader with one-line lookahead.
///
/// Produces a lazy, finite, forward-only sequence of terminator-stripped
/// lines; restarting means reopening the file. A terminator is `\n` or
/// `\r\n`; a lone `\r` is kept as line content. A leading byte-order mark
/// matching the declared encoding is consumed before the first line.
pub struct TextReader {
    inner: BufReader<File>,
    encoding: TextEncoding,
    path: PathBuf,
    lookahead: Option<String>,
    at_start: bool,
}

impl TextReader {
    /// Open `path` for reading under the declared encoding
    pub fn open(path: &Path, encoding: TextEncoding) -> Result<Self, TextFileError> {
        let file = File::open(path).map_err(|source| TextFileError::Open {
            path: path.to_path_buf(),
            source,
        })?;

        Ok(Self {
            inner: BufReader::new(file),
            encoding,
            path: path.to_path_buf(),
            lookahead: None,
            at_start: true,
        })
    }

    /// Look at the next line without consuming it.
    ///
    /// Returns `None` at end-of-stream, so callers can check before
    /// committing to a read.
    pub fn peek(&mut self) -> Result<Option<&str>, TextFileError> {
        if self.lookahead.is_none() {
            self.lookahead = self.next_raw_line()?;
        }
        Ok(self.lookahead.as_deref())
    }

    /// Consume and return the next line, terminator stripped
    pub fn read_line(&mut self) -> Result<Option<String>, TextFileError> {
        if let Some(line) = self.lookahead.take() {
            return Ok(Some(line));
        }
        self.next_raw_line()
    }

    /// The path this reader was opened on
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Consume the reader, iterating over the remaining lines
    pub fn lines(self) -> Lines {
        Lines { reader: self }
    }

    fn next_raw_line(&mut self) -> Result<Option<String>, TextFileError> {
        if self.at_start {
            self.skip_bom()?;
            self.at_start = false;
        }

        match self.encoding {
            TextEncoding::Utf8 => self.next_line_utf8(),
            TextEncoding::Utf16Le => self.next_line_utf16(u16::from_le_bytes),
            TextEncoding::Utf16Be => self.next_line_utf16(u16::from_be_bytes),
        }
    }

    // A leading BOM in the declared encoding is a writer artifact, not content
    fn skip_bom(&mut self) -> Result<(), TextFileError> {
        let bom = self.encoding.bom();
        let consumed = {
            let buffered = match self.inner.fill_buf() {
                Ok(buffered) => buffered,
                Err(source) => {
                    return Err(TextFileError::Read {
                        path: self.path.clone(),
                        source,
                    })
                }
            };
            if buffered.starts_with(bom) {
                bom.len()
            } else {
                0
            }
        };
        self.inner.consume(consumed);
        Ok(())
    }

    fn next_line_utf8(&mut self) -> Result<Option<String>, TextFileError> {
        let mut buf = Vec::new();
        let read = self
            .inner
            .read_until(b'\n', &mut buf)
            .map_err(|source| TextFileError::Read {
                path: self.path.clone(),
                source,
            })?;
        if read == 0 {
            return Ok(None);
        }

        if buf.last() == Some(&b'\n') {
            buf.pop();
            if buf.last() == Some(&b'\r') {
                buf.pop();
            }
        }
        Ok(Some(self.encoding.decode(&buf)))
    }

    fn next_line_utf16(
        &mut self,
        combine: fn([u8; 2]) -> u16,
    ) -> Result<Option<String>, TextFileError> {
        let mut units: Vec<u16> = Vec::new();
        let mut terminated = false;

        loop {
            let first = match self.read_byte()? {
                Some(byte) => byte,
                None => break,
            };
            let unit = match self.read_byte()? {
                Some(second) => combine([first, second]),
                // A truncated trailing unit decodes to the replacement character
                None => char::REPLACEMENT_CHARACTER as u16,
            };

            if unit == LF {
                terminated = true;
                break;
            }
            units.push(unit);
        }

        if units.is_empty() && !terminated {
            return Ok(None);
        }
        if terminated && units.last() == Some(&CR) {
            units.pop();
        }
        Ok(Some(String::from_utf16_lossy(&units)))
    }

    fn read_byte(&mut self) -> Result<Option<u8>, TextFileError> {
        let mut byte = [0u8; 1];
        loop {
            match self.inner.read(&mut byte) {
                Ok(0) => return Ok(None),
                Ok(_) => return Ok(Some(byte[0])),
                Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
                Err(source) => {
                    return Err(TextFileError::Read {
                        path: self.path.clone(),
                        source,
                    })
                }
            }
        }
    }
}

/// Owning iterator over a reader's remaining lines
pub struct Lines {
    reader: TextReader,
}

impl Iterator for Lines {
    type Item = Result<String, TextFileError>;

    fn next(&mut self) -> Option<Self::Item> {
        self.reader.read_line().transpose()
    }
}
