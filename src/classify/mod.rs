//! Line-ending classification.
//!
//! [`scan`] walks a buffer once and records every DOS, UNIX and old Mac line
//! ending it finds. A `\r\n` pair is consumed as a whole, so its `\n` is never
//! counted as a UNIX ending and its `\r` never as an old Mac one. [`check`]
//! turns a [`Scan`] into a verdict, and [`Classifier`] does the same for a
//! file while printing diagnostics.
use std::{
    fs,
    io::{self, Write},
    path::Path,
    process::ExitCode,
};

use log::{debug, warn};
use memchr::{memchr2, memmem};

use crate::types::{LineEnding, CORRUPT_CRLF, CR, LF};

mod context;

pub use context::{excerpt, DEFAULT_CONTEXT_RADIUS};

/// Where a line ending first occurs and how often it occurs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Occurrence {
    /// Byte offset of the first occurrence.
    pub first: usize,
    /// Number of non-overlapping occurrences.
    pub count: usize,
}

/// Everything [`scan`] found in a buffer.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Scan {
    /// Offset of the first `\r\r\n`, if any.
    pub corrupt: Option<usize>,
    pub dos: Option<Occurrence>,
    pub unix: Option<Occurrence>,
    pub legacy: Option<Occurrence>,
}

impl Scan {
    #[must_use]
    pub fn occurrence(&self, line_ending: LineEnding) -> Option<Occurrence> {
        match line_ending {
            LineEnding::Dos => self.dos,
            LineEnding::Unix => self.unix,
            LineEnding::Legacy => self.legacy,
        }
    }

    #[must_use]
    pub fn contains(&self, line_ending: LineEnding) -> bool {
        self.occurrence(line_ending).is_some()
    }

    /// The conventions present in the buffer, in DOS, UNIX, old Mac order.
    pub fn found(&self) -> impl Iterator<Item = LineEnding> + '_ {
        [LineEnding::Dos, LineEnding::Unix, LineEnding::Legacy]
            .into_iter()
            .filter(move |le| self.contains(*le))
    }
}

fn record(slot: &mut Option<Occurrence>, at: usize) {
    match slot {
        Some(occurrence) => occurrence.count += 1,
        None => *slot = Some(Occurrence { first: at, count: 1 }),
    }
}

/// Find all line endings in `data`.
///
/// Pairs are matched left to right without overlap, the same way a literal
/// `\r\n` search-and-replace would. Whatever `\n` or `\r` is left over is a
/// UNIX or old Mac line ending respectively.
#[must_use]
pub fn scan(data: &[u8]) -> Scan {
    let mut scan = Scan {
        corrupt: memmem::find(data, CORRUPT_CRLF),
        ..Scan::default()
    };

    let mut scan_pos = 0;
    while let Some(i) = memchr2(CR, LF, &data[scan_pos..]).map(|i| i + scan_pos) {
        match (data[i], data.get(i + 1).copied()) {
            (CR, Some(LF)) => {
                record(&mut scan.dos, i);
                scan_pos = i + 2;
            }
            (CR, _) => {
                record(&mut scan.legacy, i);
                scan_pos = i + 1;
            }
            _ => {
                record(&mut scan.unix, i);
                scan_pos = i + 1;
            }
        }
    }
    scan
}

/// Reason a file or buffer is rejected.
#[derive(Debug, thiserror::Error)]
pub enum Problem {
    #[error("unable to read file: {source}")]
    Unreadable {
        #[source]
        source: io::Error,
    },

    #[error("file is empty")]
    Empty,

    #[error(r#"contains BAD line endings of form "\r\r\n""#)]
    Corrupted { at: usize },

    #[error(r#"contains OLD MAC line endings "\r" ({} occurrences)"#, .legacy.count)]
    Legacy { legacy: Occurrence },

    #[error(
        r#"contains both DOS "\r\n" and UNIX "\n" line endings ({} DOS line endings, {} UNIX line endings)"#,
        .dos.count,
        .unix.count
    )]
    Mixed { dos: Occurrence, unix: Occurrence },

    #[error(
        "contains {} line endings ({} occurrences), but expected only {} line endings",
        .found.label(),
        .occurrence.count,
        .expected.label()
    )]
    Mismatch {
        expected: LineEnding,
        found: LineEnding,
        occurrence: Occurrence,
    },
}

impl Problem {
    /// Offsets worth showing context for, with a label for each.
    #[must_use]
    pub fn locations(&self) -> Vec<(&'static str, usize)> {
        match self {
            Problem::Unreadable { .. } | Problem::Empty => Vec::new(),
            Problem::Corrupted { at } => vec![(r#"BAD "\r\r\n""#, *at)],
            Problem::Legacy { legacy } => vec![(LineEnding::Legacy.label(), legacy.first)],
            Problem::Mixed { dos, unix } => vec![
                (LineEnding::Dos.label(), dos.first),
                (LineEnding::Unix.label(), unix.first),
            ],
            Problem::Mismatch {
                found, occurrence, ..
            } => vec![(found.label(), occurrence.first)],
        }
    }
}

/// Decide whether `data` uses exactly one acceptable line-ending convention.
///
/// Checks run in a fixed order and the first failing one wins: empty input,
/// `\r\r\n` anywhere, any old Mac `\r`, DOS and UNIX mixed, and finally a
/// mismatch against `expected`. Mixed endings are rejected whatever
/// `expected` is. An `expected` of [`LineEnding::Legacy`] adds no constraint,
/// old Mac endings are always rejected.
///
/// A buffer without any line ending passes.
///
/// # Errors
///
/// Returns the first [`Problem`] found.
pub fn check(data: &[u8], expected: Option<LineEnding>) -> Result<Scan, Problem> {
    if data.is_empty() {
        return Err(Problem::Empty);
    }

    let scan = scan(data);
    debug!(
        "scanned {} bytes: dos={:?} unix={:?} legacy={:?} corrupt={:?}",
        data.len(),
        scan.dos,
        scan.unix,
        scan.legacy,
        scan.corrupt
    );

    if let Some(at) = scan.corrupt {
        return Err(Problem::Corrupted { at });
    }
    if let Some(legacy) = scan.legacy {
        return Err(Problem::Legacy { legacy });
    }
    if let (Some(dos), Some(unix)) = (scan.dos, scan.unix) {
        return Err(Problem::Mixed { dos, unix });
    }

    match (expected, scan.dos, scan.unix) {
        (Some(LineEnding::Unix), Some(occurrence), _) => Err(Problem::Mismatch {
            expected: LineEnding::Unix,
            found: LineEnding::Dos,
            occurrence,
        }),
        (Some(LineEnding::Dos), _, Some(occurrence)) => Err(Problem::Mismatch {
            expected: LineEnding::Dos,
            found: LineEnding::Unix,
            occurrence,
        }),
        _ => Ok(scan),
    }
}

/// Outcome of classifying a file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    /// A single, acceptable convention (or no line endings at all).
    Ok,
    /// Anything else.
    Failed,
}

impl Status {
    /// Process exit status: `0` for [`Status::Ok`], `1` otherwise.
    #[must_use]
    pub fn code(self) -> i32 {
        match self {
            Status::Ok => 0,
            Status::Failed => 1,
        }
    }

    #[must_use]
    pub fn is_ok(self) -> bool {
        self == Status::Ok
    }
}

impl From<Status> for ExitCode {
    fn from(status: Status) -> Self {
        match status {
            Status::Ok => ExitCode::SUCCESS,
            Status::Failed => ExitCode::FAILURE,
        }
    }
}

/// Classifies files and reports what it finds.
///
/// Diagnostics go to the error stream when `report` is enabled (the
/// default). With `verbose` the convention a file uses is written to the
/// output stream.
///
/// ```no_run
/// use eolcheck::{Classifier, LineEnding};
///
/// let status = Classifier::new()
///     .expected(Some(LineEnding::Unix))
///     .classify_file("Cargo.toml");
/// std::process::exit(status.code());
/// ```
#[derive(Debug, Clone)]
pub struct Classifier {
    expected: Option<LineEnding>,
    report: bool,
    verbose: bool,
    context_radius: usize,
}

impl Default for Classifier {
    fn default() -> Self {
        Self {
            expected: None,
            report: true,
            verbose: false,
            context_radius: DEFAULT_CONTEXT_RADIUS,
        }
    }
}

impl Classifier {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Require files to use only this convention.
    #[must_use]
    pub fn expected(mut self, expected: Option<LineEnding>) -> Self {
        self.expected = expected;
        self
    }

    #[must_use]
    pub fn report(mut self, report: bool) -> Self {
        self.report = report;
        self
    }

    #[must_use]
    pub fn verbose(mut self, verbose: bool) -> Self {
        self.verbose = verbose;
        self
    }

    /// Bytes of context shown on either side of a reported location.
    #[must_use]
    pub fn context_radius(mut self, radius: usize) -> Self {
        self.context_radius = radius;
        self
    }

    /// Read and check the file at `path` without printing anything.
    ///
    /// # Errors
    ///
    /// Returns the first [`Problem`] found, including an unreadable file.
    pub fn inspect(&self, path: impl AsRef<Path>) -> Result<Scan, Problem> {
        let data = fs::read(path).map_err(|source| Problem::Unreadable { source })?;
        check(&data, self.expected)
    }

    /// Classify the file at `path`, writing to stdout and stderr.
    pub fn classify_file(&self, path: impl AsRef<Path>) -> Status {
        let path = path.as_ref();
        let (mut out, mut err) = (io::stdout().lock(), io::stderr().lock());
        match self.classify_file_to(path, &mut out, &mut err) {
            Ok(status) => status,
            Err(e) => {
                warn!("{}: failed to write report: {e}", path.display());
                Status::Failed
            }
        }
    }

    /// Classify the file at `path`, writing info to `out` and diagnostics to `err`.
    ///
    /// # Errors
    ///
    /// Only fails if writing to `out` or `err` fails.
    pub fn classify_file_to(
        &self,
        path: impl AsRef<Path>,
        out: &mut impl Write,
        err: &mut impl Write,
    ) -> io::Result<Status> {
        let path = path.as_ref();
        let data = match fs::read(path) {
            Ok(data) => data,
            Err(source) => {
                debug!("{}: read failed: {source}", path.display());
                let problem = Problem::Unreadable { source };
                if self.report {
                    writeln!(err, "{}: {problem}", path.display())?;
                }
                return Ok(Status::Failed);
            }
        };

        let result = check(&data, self.expected);

        if self.verbose {
            let found: Vec<LineEnding> = match &result {
                Ok(scan) => scan.found().collect(),
                Err(Problem::Mismatch { found, .. }) => vec![*found],
                Err(_) => Vec::new(),
            };
            for line_ending in found {
                writeln!(
                    out,
                    "{}: contains {} line endings.",
                    path.display(),
                    line_ending.label()
                )?;
            }
        }

        match result {
            Ok(_) => Ok(Status::Ok),
            Err(problem) => {
                if self.report {
                    self.write_problem(path, &data, &problem, err)?;
                }
                Ok(Status::Failed)
            }
        }
    }

    fn write_problem(
        &self,
        path: &Path,
        data: &[u8],
        problem: &Problem,
        err: &mut impl Write,
    ) -> io::Result<()> {
        writeln!(err, "{}: {problem}", path.display())?;
        for (label, at) in problem.locations() {
            writeln!(
                err,
                "  content around a {label} line ending: '{}'",
                excerpt(data, at, self.context_radius)
            )?;
        }
        Ok(())
    }
}

/// Classify the file at `path` and return a process exit status.
///
/// `0` means the file uses one consistent convention (matching `expected`,
/// if given); `1` means it is unreadable, empty, contains old Mac or
/// `\r\r\n` line endings, mixes DOS and UNIX, or does not match `expected`.
/// Diagnostics go to stderr if `report` is set; with `verbose` the detected
/// convention is printed to stdout.
#[must_use]
pub fn classify(
    path: impl AsRef<Path>,
    expected: Option<LineEnding>,
    report: bool,
    verbose: bool,
) -> i32 {
    Classifier::new()
        .expected(expected)
        .report(report)
        .verbose(verbose)
        .classify_file(path)
        .code()
}
