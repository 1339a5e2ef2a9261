//! Classified item events and a line-oriented CSV source for them.
//!
//! Accepted rows:
//! * `category,value`       - point sample
//! * `category,start,end`   - interval sample
//!
//! `#` comments, blank lines and a non-numeric header row are skipped.

use std::io::{self, BufRead, BufReader, Read};

use thiserror::Error;

/// One classified item as produced by an item source.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Event<T> {
    Point { category: T, value: f64 },
    Interval { category: T, start: f64, end: f64 },
}

impl<T: Copy> Event<T> {
    #[inline]
    pub fn category(&self) -> T {
        match *self {
            Self::Point { category, .. } | Self::Interval { category, .. } => category,
        }
    }
}

// --- Error Handling ---
#[derive(Debug, Error)]
#[error("line {line}: {kind}")]
pub struct ParseEventError {
    pub line: usize,
    pub kind: ParseErrorKind,
}

#[derive(Debug, Error)]
pub enum ParseErrorKind {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
    #[error("expected 2-3 columns, got {0}")]
    BadColumnCount(usize),
    #[error("category `{0}` must be a single character")]
    BadCategory(String),
    #[error("{field} is not a number: '{text}'")]
    BadFloat { field: &'static str, text: String },
}

// --- Helpers ---
#[inline]
fn trim(mut b: &[u8]) -> &[u8] {
    while let [first, rest @ ..] = b {
        if !first.is_ascii_whitespace() {
            break;
        }
        b = rest;
    }
    while let [rest @ .., last] = b {
        if !last.is_ascii_whitespace() {
            break;
        }
        b = rest;
    }
    b
}

/// Rewrite U+2212 MINUS SIGN to ASCII `-` in place.
#[inline]
pub fn normalize_unicode_minus(buf: &mut Vec<u8>) {
    let (mut r, mut w) = (0, 0);
    while r < buf.len() {
        if r + 2 < buf.len() && buf[r] == 0xE2 && buf[r + 1] == 0x88 && buf[r + 2] == 0x92 {
            buf[w] = b'-';
            r += 3;
        } else {
            buf[w] = buf[r];
            r += 1;
        }
        w += 1;
    }
    buf.truncate(w);
}

#[inline]
fn parse_f64(bytes: &[u8], line: usize, field: &'static str) -> Result<f64, ParseEventError> {
    let bad = || ParseEventError {
        line,
        kind: ParseErrorKind::BadFloat {
            field,
            text: String::from_utf8_lossy(bytes).into_owned(),
        },
    };
    let val = lexical_core::parse::<f64>(bytes).map_err(|_| bad())?;
    if val.is_finite() { Ok(val) } else { Err(bad()) }
}

fn parse_category(bytes: &[u8], line: usize) -> Result<char, ParseEventError> {
    let bad = || ParseEventError {
        line,
        kind: ParseErrorKind::BadCategory(String::from_utf8_lossy(bytes).into_owned()),
    };
    let text = std::str::from_utf8(bytes).map_err(|_| bad())?;
    let mut chars = text.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) => Ok(c),
        _ => Err(bad()),
    }
}

// --- CSV ingest ---
const BUF_CAP: usize = 1 << 16; // 64 KiB

/// Read every event from `src`. An input without rows yields an empty vec;
/// the histogram reports the empty dataset when asked to render it.
pub fn read_events<R: Read>(src: R) -> Result<Vec<Event<char>>, ParseEventError> {
    let mut rdr = BufReader::with_capacity(BUF_CAP, src);
    let mut buf = Vec::<u8>::with_capacity(128);
    let mut events = Vec::new();
    let mut saw_first = false;
    let mut line_no = 0usize;

    loop {
        buf.clear();
        let n = rdr.read_until(b'\n', &mut buf).map_err(|e| ParseEventError {
            line: line_no,
            kind: ParseErrorKind::Io(e),
        })?;
        if n == 0 {
            break;
        }
        line_no += 1;

        if buf.ends_with(b"\n") {
            buf.pop();
        }
        if buf.ends_with(b"\r") {
            buf.pop();
        }

        normalize_unicode_minus(&mut buf);
        let row = trim(&buf);
        if row.is_empty() || row[0] == b'#' && !row.starts_with(b"#,") {
            continue;
        }

        let cols: Vec<&[u8]> = row.split(|&b| b == b',').map(trim).collect();
        if cols.len() < 2 || cols.len() > 3 {
            return Err(ParseEventError {
                line: line_no,
                kind: ParseErrorKind::BadColumnCount(cols.len()),
            });
        }

        // simple header detection (non-numeric second field on the first row)
        if !saw_first {
            saw_first = true;
            if lexical_core::parse::<f64>(cols[1]).is_err() {
                continue;
            }
        }

        let category = parse_category(cols[0], line_no)?;
        let event = if let Some(end) = cols.get(2) {
            Event::Interval {
                category,
                start: parse_f64(cols[1], line_no, "start")?,
                end: parse_f64(end, line_no, "end")?,
            }
        } else {
            Event::Point {
                category,
                value: parse_f64(cols[1], line_no, "value")?,
            }
        };
        events.push(event);
    }
    log::debug!("read {} events from {line_no} lines", events.len());
    Ok(events)
}

pub fn read_events_from_path(path: &str) -> Result<Vec<Event<char>>, ParseEventError> {
    if path == "-" {
        read_events(io::stdin())
    } else {
        use std::fs::File;
        read_events(File::open(path).map_err(|e| ParseEventError {
            line: 0,
            kind: ParseErrorKind::Io(e),
        })?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn points_and_intervals() {
        let input = "category,age\n# comment\n+,1.5\n\n-,3,9\n";
        let events = read_events(input.as_bytes()).unwrap();
        assert_eq!(
            events,
            vec![
                Event::Point {
                    category: '+',
                    value: 1.5
                },
                Event::Interval {
                    category: '-',
                    start: 3.0,
                    end: 9.0
                },
            ]
        );
    }

    #[test]
    fn hash_category_is_not_a_comment() {
        let events = read_events("#,10\n".as_bytes()).unwrap();
        assert_eq!(events[0].category(), '#');
    }

    #[test]
    fn unicode_minus_is_accepted() {
        let events = read_events("+,\u{2212}2\n".as_bytes()).unwrap();
        assert_eq!(
            events[0],
            Event::Point {
                category: '+',
                value: -2.0
            }
        );
    }

    #[test]
    fn rejects_wide_rows() {
        let err = read_events("+,1\n+,1,2,3\n".as_bytes()).unwrap_err();
        assert_eq!(err.line, 2);
        assert!(matches!(err.kind, ParseErrorKind::BadColumnCount(4)));
    }

    #[test]
    fn rejects_multi_char_category() {
        let err = read_events("+,1\nab,2\n".as_bytes()).unwrap_err();
        assert!(matches!(err.kind, ParseErrorKind::BadCategory(ref s) if s == "ab"));
    }

    #[test]
    fn rejects_non_finite() {
        let err = read_events("+,1\n+,nan\n".as_bytes()).unwrap_err();
        assert!(matches!(err.kind, ParseErrorKind::BadFloat { field: "value", .. }));
    }
}
