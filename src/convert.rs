//! Literal line-ending substitution.
//!
//! `convert` works on an in-memory buffer and only allocates when something
//! actually changes. `convert_file` and `convert_file_to` apply it to the
//! whole contents of a file; neither streams, the file is read into memory
//! first.
use std::{borrow::Cow, path::Path};

use log::debug;
use memchr::memmem;

use crate::{
    helpers::{read_file, write_file},
    Result,
};

/// Replace every occurrence of `from` in `input` with `to`.
///
/// Matches are found left to right and never overlap; the replacement is not
/// scanned again. When `from == to`, `from` is empty or `from` does not occur
/// at all the input is returned borrowed.
///
/// ```
/// use eolcheck::{convert, LineEnding};
///
/// let out = convert(b"a\r\nb\r\n", LineEnding::Dos, LineEnding::Unix);
/// assert_eq!(&*out, b"a\nb\n");
/// ```
#[must_use]
pub fn convert<'a>(input: &'a [u8], from: impl AsRef<[u8]>, to: impl AsRef<[u8]>) -> Cow<'a, [u8]> {
    let (from, to) = (from.as_ref(), to.as_ref());
    if from == to || from.is_empty() {
        return Cow::Borrowed(input);
    }

    let matches: Vec<usize> = memmem::find_iter(input, from).collect();
    if matches.is_empty() {
        return Cow::Borrowed(input);
    }

    let n = matches.len();
    let mut output = Vec::with_capacity(input.len() - n * from.len() + n * to.len());
    let mut read_pos = 0;
    for i in matches {
        output.extend_from_slice(&input[read_pos..i]);
        output.extend_from_slice(to);
        read_pos = i + from.len();
    }
    output.extend_from_slice(&input[read_pos..]);
    Cow::Owned(output)
}

/// Rewrite the file at `path` in place, replacing `from` with `to`.
///
/// Does not touch the file at all when `from == to`. Unlike a plain
/// read-modify-write, the file is also left alone when `from` does not occur
/// in it: its modification time stays the same and no write error can be
/// reported for it. The read-modify-write is not atomic.
///
/// # Errors
///
/// Returns [`crate::Error::Read`] or [`crate::Error::Write`] when the file
/// cannot be read or written.
pub fn convert_file(
    path: impl AsRef<Path>,
    from: impl AsRef<[u8]>,
    to: impl AsRef<[u8]>,
) -> Result<()> {
    let (path, from, to) = (path.as_ref(), from.as_ref(), to.as_ref());
    if from == to {
        debug!("{}: source and target line endings are equal, nothing to do", path.display());
        return Ok(());
    }

    let data = read_file(path)?;
    match convert(&data, from, to) {
        Cow::Borrowed(_) => {
            debug!("{}: no occurrences, leaving file untouched", path.display());
            Ok(())
        }
        Cow::Owned(output) => {
            debug!(
                "{}: rewriting {} bytes as {} bytes",
                path.display(),
                data.len(),
                output.len()
            );
            write_file(path, &output)
        }
    }
}

/// Read `src`, replace `from` with `to` and write the result to `dst`.
///
/// `dst` is created or truncated. It receives an exact copy of `src` when
/// nothing needs replacing. If both paths are the same this is
/// [`convert_file`].
///
/// # Errors
///
/// Returns [`crate::Error::Read`] if `src` cannot be read and
/// [`crate::Error::Write`] if `dst` cannot be written.
pub fn convert_file_to(
    src: impl AsRef<Path>,
    dst: impl AsRef<Path>,
    from: impl AsRef<[u8]>,
    to: impl AsRef<[u8]>,
) -> Result<()> {
    let (src, dst) = (src.as_ref(), dst.as_ref());
    if src == dst {
        return convert_file(src, from, to);
    }

    let data = read_file(src)?;
    let output = convert(&data, from, to);
    debug!(
        "{} -> {}: {} bytes in, {} bytes out",
        src.display(),
        dst.display(),
        data.len(),
        output.len()
    );
    write_file(dst, &output)
}
