//! Decoder for the serialized term→postings payload.
//!
//! A payload is a string holding one or more `"term":[n1,n2,...]` fragments. The
//! numbers are packed [`Location`]s written in a fixed radix. Fragments may sit
//! inside arbitrary surrounding syntax (usually a JSON object): the scanner simply
//! looks for the next `"` and never requires the enclosing document to be well
//! formed.
//!
//! Malformed input cannot be resynchronized safely, so scanning stops at the first
//! bad fragment. Everything decoded up to that point stays loaded. A well-formed
//! fragment whose term is not ASCII is skipped: no query can produce such a term.

use std::{fmt, str::FromStr};

use verse_common::{
    Location, Result,
    error::{Error, ErrorKind},
    try_or_ret_some_err,
};
use verse_hash_index::{HashIndex, MAX_TERM_LENGTH, TermKey};

/// Radix of the location numbers in a payload.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum PayloadRadix {
    /// Plain decimal numbers, e.g. `1001001`.
    #[default]
    Decimal,
    /// Base-36 numbers (`0-9a-z`, case-insensitive), as used by the published
    /// compressed index files. `1001001` is written `lgdl`.
    Base36,
}

impl PayloadRadix {
    pub const fn radix(self) -> u32 {
        match self {
            PayloadRadix::Decimal => 10,
            PayloadRadix::Base36 => 36,
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            PayloadRadix::Decimal => "decimal",
            PayloadRadix::Base36 => "base36",
        }
    }
}

impl TryFrom<u32> for PayloadRadix {
    type Error = Error;

    fn try_from(radix: u32) -> Result<Self> {
        match radix {
            10 => Ok(PayloadRadix::Decimal),
            36 => Ok(PayloadRadix::Base36),
            _ => Err(Error::invalid_arg(
                "radix",
                format!("unsupported payload radix: {radix}"),
            )),
        }
    }
}

impl FromStr for PayloadRadix {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "decimal" | "10" => Ok(PayloadRadix::Decimal),
            "base36" | "36" => Ok(PayloadRadix::Base36),
            _ => Err(Error::invalid_arg(
                "radix",
                format!("unrecognized payload radix: {s}"),
            )),
        }
    }
}

impl fmt::Display for PayloadRadix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// One decoded `"term":[...]` fragment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Fragment {
    pub key: TermKey,
    /// Postings in ascending order.
    pub postings: Vec<Location>,
}

/// Iterator over the fragments of a payload.
///
/// Yields `Ok(fragment)` for every well-formed fragment. The first malformed
/// fragment is yielded as an `Err` with [`ErrorKind::MalformedPayload`] and ends the
/// iteration. Allocation failures are yielded the same way, with their own kind.
pub struct PayloadScanner<'a> {
    payload: &'a str,
    radix: PayloadRadix,
    pos: usize,
    skipped: usize,
}

impl<'a> PayloadScanner<'a> {
    pub fn new(payload: &'a str, radix: PayloadRadix) -> Self {
        Self {
            payload,
            radix,
            pos: 0,
            skipped: 0,
        }
    }

    /// Byte offset where scanning resumes.
    pub fn position(&self) -> usize {
        self.pos
    }

    /// Number of fragments passed over because their term is not ASCII.
    pub fn skipped(&self) -> usize {
        self.skipped
    }

    fn find_byte(&self, needle: u8, from: usize) -> Option<usize> {
        self.payload.as_bytes()[from..]
            .iter()
            .position(|&b| b == needle)
            .map(|offset| from + offset)
    }

    fn stop(&mut self, offset: usize, reason: impl Into<String>) -> Error {
        self.pos = self.payload.len();
        Error::malformed_payload(offset, reason)
    }

    fn parse_array(&mut self, start: usize, end: usize) -> Result<Vec<Location>> {
        let payload = self.payload;
        let body = &payload[start..end];
        if body.trim().is_empty() {
            return Ok(Vec::new());
        }

        let mut postings = Vec::new();
        let expected = body.bytes().filter(|&b| b == b',').count() + 1;
        if let Err(e) = postings.try_reserve_exact(expected) {
            self.pos = payload.len();
            return Err(e.into());
        }

        let mut offset = start;
        for number in body.split(',') {
            let digits = number.trim();
            match u32::from_str_radix(digits, self.radix.radix()) {
                Ok(value) => postings.push(Location::new(value)),
                Err(e) => {
                    return Err(self.stop(
                        offset,
                        format!("invalid {} location {digits:?}: {e}", self.radix),
                    ));
                }
            }
            offset += number.len() + 1;
        }

        if !postings.is_sorted() {
            postings.sort_unstable();
        }
        Ok(postings)
    }
}

impl Iterator for PayloadScanner<'_> {
    type Item = Result<Fragment>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let open = self.find_byte(b'"', self.pos)?;
            let term_start = open + 1;

            let Some(term_end) = self.find_byte(b'"', term_start) else {
                return Some(Err(self.stop(open, "unterminated term")));
            };
            let payload = self.payload;
            let term = &payload[term_start..term_end];
            if term.is_empty() || term.len() > MAX_TERM_LENGTH {
                return Some(Err(self.stop(
                    term_start,
                    format!("term must be 1..={MAX_TERM_LENGTH} bytes"),
                )));
            }

            let Some(array_start) = self.find_byte(b'[', term_end + 1) else {
                return Some(Err(self.stop(term_end + 1, "missing '['")));
            };
            let Some(array_end) = self.find_byte(b']', array_start + 1) else {
                return Some(Err(self.stop(array_start, "missing ']'")));
            };

            let Some(key) = TermKey::try_new(term) else {
                log::trace!("skipping non-ASCII term {term:?} at byte {term_start}");
                self.skipped += 1;
                self.pos = array_end + 1;
                continue;
            };

            let postings = try_or_ret_some_err!(self.parse_array(array_start + 1, array_end));
            self.pos = array_end + 1;
            return Some(Ok(Fragment { key, postings }));
        }
    }
}

/// Outcome of decoding one payload into a table.
#[derive(Debug, Default)]
pub struct LoadReport {
    /// Number of fragments inserted (a repeated term counts every time).
    pub terms: usize,
    /// Number of postings inserted.
    pub postings: usize,
    /// Number of fragments skipped because their term is not ASCII.
    pub skipped: usize,
    /// The malformed fragment that stopped the scan, if any.
    pub malformed: Option<Error>,
}

impl LoadReport {
    /// Returns `true` if the whole payload was decoded.
    pub fn is_complete(&self) -> bool {
        self.malformed.is_none()
    }
}

/// Decodes `payload` and inserts every fragment into `table`.
///
/// A term that occurs more than once replaces its earlier postings. Malformed input
/// stops decoding without raising: the returned report carries the reason and the
/// table keeps everything inserted before it.
///
/// # Errors
/// Only allocation failures are returned as errors.
pub fn load_payload(
    payload: &str,
    radix: PayloadRadix,
    table: &mut HashIndex,
) -> Result<LoadReport> {
    let mut report = LoadReport::default();
    let mut scanner = PayloadScanner::new(payload, radix);
    for fragment in scanner.by_ref() {
        match fragment {
            Ok(Fragment { key, postings }) => {
                report.terms += 1;
                report.postings += postings.len();
                table.insert(key, postings)?;
            }
            Err(e) if matches!(e.kind(), ErrorKind::MalformedPayload { .. }) => {
                log::warn!("payload decoding stopped after {} terms: {e}", report.terms);
                report.malformed = Some(e);
                break;
            }
            Err(e) => return Err(e),
        }
    }
    report.skipped = scanner.skipped();
    log::debug!(
        "decoded {} terms with {} postings ({radix})",
        report.terms,
        report.postings
    );
    Ok(report)
}
