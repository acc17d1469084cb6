#[cfg(test)]
mod tests;

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

/// Character encoding declared on both sides of a text file.
///
/// Producer and consumer must agree on the scheme: decoding bytes that were
/// written under a different encoding yields garbled text, not an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum TextEncoding {
    /// 8-bit variable-width Unicode
    #[value(name = "utf8")]
    Utf8,
    /// 16-bit code units, little-endian byte order
    #[value(name = "utf16le")]
    Utf16Le,
    /// 16-bit code units, big-endian byte order
    #[value(name = "utf16be")]
    Utf16Be,
}

impl TextEncoding {
    /// Byte-order mark preamble for this encoding
    pub fn bom(&self) -> &'static [u8] {
        match self {
            TextEncoding::Utf8 => &[0xEF, 0xBB, 0xBF],
            TextEncoding::Utf16Le => &[0xFF, 0xFE],
            TextEncoding::Utf16Be => &[0xFE, 0xFF],
        }
    }

    /// Encode a string into this encoding's byte representation
    pub fn encode(&self, text: &str) -> Vec<u8> {
        match self {
            TextEncoding::Utf8 => text.as_bytes().to_vec(),
            TextEncoding::Utf16Le => text
                .encode_utf16()
                .flat_map(|unit| unit.to_le_bytes())
                .collect(),
            TextEncoding::Utf16Be => text
                .encode_utf16()
                .flat_map(|unit| unit.to_be_bytes())
                .collect(),
        }
    }

    /// Decode bytes into a string, substituting the replacement character
    /// for malformed sequences
    pub fn decode(&self, bytes: &[u8]) -> String {
        match self {
            TextEncoding::Utf8 => String::from_utf8_lossy(bytes).into_owned(),
            TextEncoding::Utf16Le => decode_utf16_with(bytes, u16::from_le_bytes),
            TextEncoding::Utf16Be => decode_utf16_with(bytes, u16::from_be_bytes),
        }
    }
}

fn decode_utf16_with(bytes: &[u8], combine: fn([u8; 2]) -> u16) -> String {
    let mut units: Vec<u16> = bytes
        .chunks_exact(2)
        .map(|pair| combine([pair[0], pair[1]]))
        .collect();

    // An odd trailing byte is a truncated code unit
    if bytes.len() % 2 != 0 {
        units.push(char::REPLACEMENT_CHARACTER as u16);
    }

    String::from_utf16_lossy(&units)
}

/// Line terminator written between logical lines.
///
/// Always declared explicitly; nothing in this crate falls back to a host
/// default behind the caller's back.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum LineEnding {
    /// Unix convention ("\n")
    #[value(name = "lf")]
    Lf,
    /// Windows convention ("\r\n")
    #[value(name = "crlf")]
    CrLf,
}

impl LineEnding {
    /// The host platform's default convention
    pub fn native() -> Self {
        if cfg!(windows) {
            LineEnding::CrLf
        } else {
            LineEnding::Lf
        }
    }

    /// The terminator as a string slice
    pub fn as_str(&self) -> &'static str {
        match self {
            LineEnding::Lf => "\n",
            LineEnding::CrLf => "\r\n",
        }
    }
}
