//! Forward-only line scanning over a single output file.
//!
//! Quantum-chemistry outputs interleave narrative text with fixed-width
//! numeric tables, so every extraction follows the same three steps: locate
//! a section marker, discard a known number of header lines, then collect
//! the table body under one of three termination rules (fixed row count,
//! explicit terminator pattern, or cessation when a line stops matching the
//! row shape). [`LineCursor`] keeps all lookahead policy in one place; the
//! record parsers never read lines themselves.

use regex::Regex;
use std::iter::Peekable;
use std::str::Lines;

/// Forward-only cursor over the lines of one output file.
///
/// The cursor never seeks backward. Repeated extractions against the same
/// file each build a fresh cursor, so independent properties never share
/// scan state.
pub struct LineCursor<'a> {
    lines: Peekable<Lines<'a>>,
}

impl<'a> LineCursor<'a> {
    /// Creates a cursor over the lines of `content`.
    pub fn new(content: &'a str) -> Self {
        Self {
            lines: content.lines().peekable(),
        }
    }

    /// Returns the next line without consuming it.
    pub fn peek(&mut self) -> Option<&'a str> {
        self.lines.peek().copied()
    }

    /// Consumes and returns the next line.
    pub fn advance(&mut self) -> Option<&'a str> {
        self.lines.next()
    }

    /// Discards up to `n` lines.
    pub fn skip(&mut self, n: usize) {
        for _ in 0..n {
            if self.lines.next().is_none() {
                break;
            }
        }
    }

    /// Scans forward to the first line containing `marker` as a substring.
    ///
    /// The matching line is consumed and returned, leaving the cursor
    /// positioned just after it. Returns `None` when the end of the file is
    /// reached without a match; callers map that to their property-specific
    /// not-found error.
    pub fn find_contains(&mut self, marker: &str) -> Option<&'a str> {
        self.lines.find(|line| line.contains(marker))
    }

    /// Scans forward to the first line matching `marker`.
    ///
    /// Same consumption semantics as [`LineCursor::find_contains`].
    pub fn find_match(&mut self, marker: &Regex) -> Option<&'a str> {
        self.lines.find(|line| marker.is_match(line))
    }

    /// Collects the table body up to an explicit terminator line.
    ///
    /// The terminator line is consumed but not returned. Returns `None` when
    /// the end of the file is reached before the terminator: a table that
    /// never terminates is malformed as a whole, and partial bodies must not
    /// leak into results.
    pub fn take_until(&mut self, terminator: &Regex) -> Option<Vec<&'a str>> {
        let mut body = Vec::new();
        for line in self.lines.by_ref() {
            if terminator.is_match(line) {
                return Some(body);
            }
            body.push(line);
        }
        None
    }

    /// Collects up to `count` lines; fewer are returned if the file ends.
    pub fn take_count(&mut self, count: usize) -> Vec<&'a str> {
        let mut body = Vec::with_capacity(count);
        for _ in 0..count {
            match self.lines.next() {
                Some(line) => body.push(line),
                None => break,
            }
        }
        body
    }

    /// Collects consecutive lines satisfying `predicate`, stopping before
    /// the first line that does not.
    ///
    /// The non-matching line is left unconsumed so a subsequent section
    /// probe in the same pass can still see it.
    pub fn advance_while<F>(&mut self, predicate: F) -> Vec<&'a str>
    where
        F: Fn(&str) -> bool,
    {
        let mut body = Vec::new();
        while let Some(&line) = self.lines.peek() {
            if !predicate(line) {
                break;
            }
            body.push(line);
            self.lines.next();
        }
        body
    }
}

/// Parses a float that may use Fortran `D` exponent notation.
///
/// Gaussian writes engineering notation as `1.2345D-02`; the exponent marker
/// is rewritten to `E` before conversion.
///
/// # Examples
///
/// ```
/// use qclog::scan::parse_float;
///
/// assert_eq!(parse_float("1.2345D-02"), Some(0.012345));
/// assert_eq!(parse_float("-76.4089"), Some(-76.4089));
/// assert_eq!(parse_float("n/a"), None);
/// ```
pub fn parse_float(token: &str) -> Option<f64> {
    if token.contains(['D', 'd']) {
        token.replace(['D', 'd'], "E").parse().ok()
    } else {
        token.parse().ok()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_peek_does_not_consume() {
        let mut cursor = LineCursor::new("first\nsecond");
        assert_eq!(cursor.peek(), Some("first"));
        assert_eq!(cursor.advance(), Some("first"));
        assert_eq!(cursor.advance(), Some("second"));
        assert_eq!(cursor.advance(), None);
    }

    #[test]
    fn test_find_contains_consumes_marker() {
        let mut cursor = LineCursor::new("noise\n NAtoms=  3\ndata");
        assert_eq!(cursor.find_contains("NAtoms="), Some(" NAtoms=  3"));
        assert_eq!(cursor.advance(), Some("data"));
    }

    #[test]
    fn test_find_contains_not_found() {
        let mut cursor = LineCursor::new("a\nb\nc");
        assert_eq!(cursor.find_contains("NAtoms="), None);
    }

    #[test]
    fn test_take_until_excludes_terminator() {
        let terminator = Regex::new(r"={4}").unwrap();
        let mut cursor = LineCursor::new("row 1\nrow 2\n====\nafter");
        assert_eq!(cursor.take_until(&terminator), Some(vec!["row 1", "row 2"]));
        assert_eq!(cursor.advance(), Some("after"));
    }

    #[test]
    fn test_take_until_missing_terminator_is_none() {
        let terminator = Regex::new(r"={4}").unwrap();
        let mut cursor = LineCursor::new("row 1\nrow 2");
        assert_eq!(cursor.take_until(&terminator), None);
    }

    #[test]
    fn test_advance_while_leaves_stop_line() {
        let mut cursor = LineCursor::new("1 a\n2 b\nstop\n3 c");
        let rows = cursor.advance_while(|line| {
            line.starts_with(|c: char| c.is_ascii_digit())
        });
        assert_eq!(rows, vec!["1 a", "2 b"]);
        // The line that broke the run is still available for the next probe.
        assert_eq!(cursor.peek(), Some("stop"));
    }

    #[test]
    fn test_take_count_short_input() {
        let mut cursor = LineCursor::new("only");
        assert_eq!(cursor.take_count(3), vec!["only"]);
    }

    #[test]
    fn test_parse_float_fortran_exponent() {
        assert_eq!(parse_float("8.297587D-01"), Some(0.8297587));
        assert_eq!(parse_float("1.0d+02"), Some(100.0));
        assert_eq!(parse_float("2.109110D+00"), Some(2.10911));
    }
}
