// Public API exports
pub mod encoding;
pub mod error;
pub mod lifecycle;
pub mod reader;
pub mod roundtrip;
pub mod writer;

// Re-export main types for convenience
pub use encoding::{LineEnding, TextEncoding};
pub use error::TextFileError;

pub use writer::{TextWriter, WriterOptions};

pub use reader::{Lines, TextReader, report_line};

pub use lifecycle::{append_line, delete, ensure_created};

pub use roundtrip::{APPENDED_LINE, RoundTripConfig, SECOND_FILE_LINES, run};
