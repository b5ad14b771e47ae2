#![doc = include_str!("../README.md")]

mod classify;
mod convert;
mod helpers;
mod types;

pub use classify::{
    check, classify, excerpt, scan, Classifier, Occurrence, Problem, Scan, Status,
    DEFAULT_CONTEXT_RADIUS,
};
pub use convert::{convert, convert_file, convert_file_to};
pub use types::{Error, LineEnding, ParseLineEndingError, Result, CORRUPT_CRLF, CR, CRLF, LF};
