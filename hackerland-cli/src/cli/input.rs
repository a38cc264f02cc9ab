//! Text-format case parsing.
//!
//! Reads the classic judge format: a count `q`, then for each case a header
//! line `n m c_lib c_road` followed by `m` road lines `u v`. Blank lines are
//! ignored so generated output round-trips cleanly. Errors carry the
//! one-based line number that triggered them.

use std::io::{self, BufRead};

use hackerland_core::{Road, TestCase};
use thiserror::Error;

/// Errors raised while parsing operator-entered cases.
#[derive(Debug, Error)]
pub enum InputError {
    /// The underlying reader failed.
    #[error("failed to read input: {source}")]
    Io {
        /// Underlying operating system error.
        #[source]
        source: io::Error,
    },
    /// The input ended before the expected line.
    #[error("input ended early: expected {expected}")]
    UnexpectedEnd {
        /// Description of the missing line.
        expected: &'static str,
    },
    /// A line held the wrong number of whitespace-separated fields.
    #[error("line {line}: expected {expected} fields, got {got}")]
    FieldCount {
        /// One-based line number.
        line: usize,
        /// Number of fields the format requires here.
        expected: usize,
        /// Number of fields found.
        got: usize,
    },
    /// A field was not a non-negative integer in range.
    #[error("line {line}: `{token}` is not a valid value for {field}")]
    InvalidValue {
        /// One-based line number.
        line: usize,
        /// The offending token.
        token: String,
        /// Which field was being parsed.
        field: &'static str,
    },
}

/// Parses zero or more cases from `reader`.
///
/// # Errors
/// Returns [`InputError`] describing the first malformed line; parsing does
/// not attempt recovery, since a misaligned stream makes every later value
/// meaningless.
pub fn parse_cases(reader: impl BufRead) -> Result<Vec<TestCase>, InputError> {
    let mut lines = NumberedLines::new(reader);

    let Some((line, text)) = lines.next_non_blank()? else {
        return Ok(Vec::new());
    };
    let case_count = parse_field(line, &text, "case count q")?;

    let mut cases = Vec::with_capacity(usize::try_from(case_count).unwrap_or_default());
    for _ in 0..case_count {
        cases.push(parse_case(&mut lines)?);
    }
    Ok(cases)
}

fn parse_case(lines: &mut NumberedLines<impl BufRead>) -> Result<TestCase, InputError> {
    let (line, text) = lines
        .next_non_blank()?
        .ok_or(InputError::UnexpectedEnd {
            expected: "case header `n m c_lib c_road`",
        })?;
    let fields = split_fields(line, &text, 4)?;
    let cities = parse_field(line, fields[0], "city count n")?;
    let cities = narrow(line, fields[0], "city count n", cities)?;
    let road_count = parse_field(line, fields[1], "road count m")?;
    let library_cost = parse_field(line, fields[2], "library cost c_lib")?;
    let road_cost = parse_field(line, fields[3], "road cost c_road")?;

    let mut roads = Vec::with_capacity(usize::try_from(road_count).unwrap_or_default());
    for _ in 0..road_count {
        let (road_line, road_text) = lines
            .next_non_blank()?
            .ok_or(InputError::UnexpectedEnd {
                expected: "road line `u v`",
            })?;
        let endpoints = split_fields(road_line, &road_text, 2)?;
        let left = parse_field(road_line, endpoints[0], "road endpoint u")?;
        let left = narrow(road_line, endpoints[0], "road endpoint u", left)?;
        let right = parse_field(road_line, endpoints[1], "road endpoint v")?;
        let right = narrow(road_line, endpoints[1], "road endpoint v", right)?;
        roads.push(Road::new(left, right));
    }

    Ok(TestCase::new(cities, library_cost, road_cost, roads))
}

fn split_fields<'a>(
    line: usize,
    text: &'a str,
    expected: usize,
) -> Result<Vec<&'a str>, InputError> {
    let fields: Vec<&str> = text.split_whitespace().collect();
    if fields.len() != expected {
        return Err(InputError::FieldCount {
            line,
            expected,
            got: fields.len(),
        });
    }
    Ok(fields)
}

fn parse_field(line: usize, token: &str, field: &'static str) -> Result<u64, InputError> {
    token.trim().parse().map_err(|_| InputError::InvalidValue {
        line,
        token: token.to_owned(),
        field,
    })
}

fn narrow(line: usize, token: &str, field: &'static str, value: u64) -> Result<u32, InputError> {
    u32::try_from(value).map_err(|_| InputError::InvalidValue {
        line,
        token: token.to_owned(),
        field,
    })
}

/// Line iterator tracking one-based line numbers and skipping blanks.
struct NumberedLines<R> {
    reader: R,
    number: usize,
}

impl<R: BufRead> NumberedLines<R> {
    fn new(reader: R) -> Self {
        Self { reader, number: 0 }
    }

    fn next_non_blank(&mut self) -> Result<Option<(usize, String)>, InputError> {
        loop {
            let mut buffer = String::new();
            let read = self
                .reader
                .read_line(&mut buffer)
                .map_err(|source| InputError::Io { source })?;
            if read == 0 {
                return Ok(None);
            }
            self.number += 1;
            if !buffer.trim().is_empty() {
                return Ok(Some((self.number, buffer)));
            }
        }
    }
}
