//! Input resolution: a single INN candidate or a file with one INN per line.

use std::fmt;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use super::inn::Inn;
use super::query::{QueryBatch, QueryEntry, request_date};

/// What a line of user input names. Every string is exactly one of these.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputKind<'a> {
    /// An existing file with candidate INNs, one per line.
    BatchFile(&'a Path),
    /// A single INN candidate.
    Candidate(&'a str),
}

/// Classify trimmed user input as a batch file or a single candidate.
pub fn classify(raw: &str) -> InputKind<'_> {
    let trimmed = raw.trim();
    let path = Path::new(trimmed);
    if path.is_file() {
        InputKind::BatchFile(path)
    } else {
        InputKind::Candidate(trimmed)
    }
}

/// A rejected input value. Rendered as one console diagnostic line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Rejection {
    /// A candidate failed the format check.
    Format {
        /// The offending value, as entered.
        value: String,
    },
    /// The batch file could not be opened or fully read.
    FileRead { path: String, error: String },
}

impl fmt::Display for Rejection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Format { value } => write!(f, "Неверный формат ИНН {value}"),
            Self::FileRead { path, error } => {
                write!(f, "Ошибка чтения файла {path}: {error}")
            }
        }
    }
}

/// Outcome of resolving one line of user input.
#[derive(Debug, Clone, Default)]
pub struct Resolution {
    /// Distinct valid entries, each dated today. Possibly empty.
    pub batch: QueryBatch,
    /// One element per rejected value or failed read. No silent drops.
    pub rejections: Vec<Rejection>,
}

/// Resolve user input into a query batch with today's date attached.
///
/// File input is best effort, not atomic: a read failure mid-stream keeps
/// the entries validated so far and records one [`Rejection::FileRead`].
/// Validation failures never escape as errors; they become rejections.
pub fn resolve(raw: &str) -> Resolution {
    match classify(raw) {
        InputKind::BatchFile(path) => resolve_file(path),
        InputKind::Candidate(candidate) => resolve_candidate(candidate),
    }
}

fn resolve_candidate(candidate: &str) -> Resolution {
    let mut resolution = Resolution::default();
    match Inn::parse(candidate) {
        Ok(inn) => {
            resolution.batch.push(QueryEntry::new(inn, request_date()));
        }
        Err(e) => resolution.rejections.push(Rejection::Format { value: e.value }),
    }
    resolution
}

fn resolve_file(path: &Path) -> Resolution {
    let mut resolution = Resolution::default();
    let date = request_date();

    let file = match File::open(path) {
        Ok(f) => f,
        Err(e) => {
            resolution.rejections.push(Rejection::FileRead {
                path: path.display().to_string(),
                error: e.to_string(),
            });
            return resolution;
        }
    };

    // The handle is dropped on every path out of this loop.
    for line in BufReader::new(file).lines() {
        let line = match line {
            Ok(l) => l,
            Err(e) => {
                resolution.rejections.push(Rejection::FileRead {
                    path: path.display().to_string(),
                    error: e.to_string(),
                });
                break;
            }
        };
        let candidate = line.trim();
        if candidate.is_empty() {
            continue;
        }
        match Inn::parse(candidate) {
            Ok(inn) => {
                // Duplicate INNs collapse to one entry
                resolution.batch.push(QueryEntry::new(inn, date));
            }
            Err(e) => resolution.rejections.push(Rejection::Format { value: e.value }),
        }
    }
    resolution
}
