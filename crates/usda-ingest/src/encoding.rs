//! Text encodings the source files are distributed in.

use std::borrow::Cow;
use std::fmt;
use std::str::FromStr;

use encoding_rs::{UTF_8, WINDOWS_1252};

/// Encoding used to decode table files before parsing.
///
/// The ASCII distribution of SR26 is Windows-1252 (descriptions carry `°`,
/// `é` and friends as single bytes).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TextEncoding {
    #[default]
    Windows1252,
    Utf8,
}

impl TextEncoding {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Windows1252 => "windows-1252",
            Self::Utf8 => "utf-8",
        }
    }

    /// Decodes file bytes; `None` when UTF-8 input is malformed.
    ///
    /// A leading UTF-8 byte order mark is dropped.
    pub fn decode(self, bytes: &[u8]) -> Option<Cow<'_, str>> {
        match self {
            Self::Windows1252 => {
                let (text, _) = WINDOWS_1252.decode_without_bom_handling(bytes);
                Some(text)
            }
            Self::Utf8 => {
                let (text, had_errors) = UTF_8.decode_with_bom_removal(bytes);
                (!had_errors).then_some(text)
            }
        }
    }
}

impl fmt::Display for TextEncoding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for TextEncoding {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "windows-1252" | "cp1252" | "latin1" => Ok(Self::Windows1252),
            "utf-8" | "utf8" => Ok(Self::Utf8),
            other => Err(format!("unsupported encoding: {other}")),
        }
    }
}
