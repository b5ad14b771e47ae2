use core::fmt;
use std::{io, path::PathBuf, str::FromStr};

pub const CR: u8 = b'\r';
pub const LF: u8 = b'\n';

/// Byte sequence of a DOS line ending.
pub const CRLF: &[u8] = b"\r\n";

/// Artifact left behind by converting an already-DOS file to DOS a second time.
pub const CORRUPT_CRLF: &[u8] = b"\r\r\n";

/// One of the three recognized line-ending conventions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LineEnding {
    /// `\r\n`
    Dos,
    /// `\n`
    Unix,
    /// `\r`, as used by classic Mac OS.
    Legacy,
}

impl LineEnding {
    #[must_use]
    pub const fn as_bytes(self) -> &'static [u8] {
        match self {
            LineEnding::Dos => CRLF,
            LineEnding::Unix => b"\n",
            LineEnding::Legacy => b"\r",
        }
    }

    /// Human readable name used in diagnostics, e.g. `DOS "\r\n"`.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            LineEnding::Dos => r#"DOS "\r\n""#,
            LineEnding::Unix => r#"UNIX "\n""#,
            LineEnding::Legacy => r#"OLD MAC "\r""#,
        }
    }
}

impl AsRef<[u8]> for LineEnding {
    fn as_ref(&self) -> &[u8] {
        self.as_bytes()
    }
}

impl fmt::Display for LineEnding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LineEnding::Dos => write!(f, "dos"),
            LineEnding::Unix => write!(f, "unix"),
            LineEnding::Legacy => write!(f, "legacy"),
        }
    }
}

/// Returned when a string does not name a line ending.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown line ending '{0}' (expected one of: dos, crlf, unix, lf, legacy, cr)")]
pub struct ParseLineEndingError(String);

impl FromStr for LineEnding {
    type Err = ParseLineEndingError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "dos" | "crlf" | "windows" => Ok(LineEnding::Dos),
            "unix" | "lf" => Ok(LineEnding::Unix),
            "legacy" | "cr" | "mac" => Ok(LineEnding::Legacy),
            _ => Err(ParseLineEndingError(s.to_owned())),
        }
    }
}

/// Error type for file operations.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The file could not be read.
    #[error("unable to read file '{}': {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The file could not be written.
    #[error("unable to write file '{}': {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl Error {
    /// Path of the file the failed operation was working on.
    #[must_use]
    pub fn path(&self) -> &std::path::Path {
        match self {
            Error::Read { path, .. } | Error::Write { path, .. } => path,
        }
    }
}

/// Result type alias for file operations.
pub type Result<T> = std::result::Result<T, Error>;
