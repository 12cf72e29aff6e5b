//! Natural ("human") string ordering
//!
//! Designators such as `C1, C2, C10` should sort by the value of their numeric
//! part rather than digit by digit. A string is split into alternating runs of
//! non-digits and ASCII digits, always starting with a (possibly empty)
//! non-digit run:
//!
//! ```text
//! "C10"   -> ["C", 10, ""]
//! "U3A2"  -> ["U", 3, "A", 2, ""]
//! "12"    -> ["", 12, ""]
//! ```
//!
//! Runs are compared pairwise. Digit runs compare by numeric value with no
//! upper bound, non-digit runs compare ordinally (case-sensitive). When every
//! shared run is equal, the string with fewer runs sorts first.

use std::cmp::Ordering;

/// One run of a natural sort key
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Segment<'a> {
    Text(&'a str),
    Number(&'a str),
}

impl Segment<'_> {
    fn compare(&self, other: &Segment<'_>) -> Ordering {
        match (self, other) {
            (Segment::Number(a), Segment::Number(b)) => compare_digits(a, b),
            (Segment::Text(a), Segment::Text(b)) => a.cmp(b),
            // Runs alternate from a leading text run, so positions always agree.
            (Segment::Text(_), Segment::Number(_)) => Ordering::Less,
            (Segment::Number(_), Segment::Text(_)) => Ordering::Greater,
        }
    }
}

/// Iterator over the runs of a string
#[derive(Debug, Clone)]
pub struct Segments<'a> {
    rest: &'a str,
    expect_digits: bool,
    done: bool,
}

impl<'a> Iterator for Segments<'a> {
    type Item = Segment<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }
        let end = if self.expect_digits {
            self.rest
                .find(|c: char| !c.is_ascii_digit())
                .unwrap_or(self.rest.len())
        } else {
            self.rest
                .find(|c: char| c.is_ascii_digit())
                .unwrap_or(self.rest.len())
        };
        let (run, rest) = self.rest.split_at(end);
        let segment = if self.expect_digits {
            Segment::Number(run)
        } else {
            // A string always ends on a text run, even an empty one: "C1" -> ["C", 1, ""]
            self.done = rest.is_empty();
            Segment::Text(run)
        };
        self.rest = rest;
        self.expect_digits = !self.expect_digits;
        Some(segment)
    }
}

/// Split `s` into its natural sort runs.
pub fn segments(s: &str) -> Segments<'_> {
    Segments {
        rest: s,
        expect_digits: false,
        done: false,
    }
}

/// Compare two strings in natural order.
pub fn natural_cmp(a: &str, b: &str) -> Ordering {
    let mut left = segments(a);
    let mut right = segments(b);
    loop {
        match (left.next(), right.next()) {
            (None, None) => return Ordering::Equal,
            (None, Some(_)) => return Ordering::Less,
            (Some(_), None) => return Ordering::Greater,
            (Some(l), Some(r)) => match l.compare(&r) {
                Ordering::Equal => continue,
                ord => return ord,
            },
        }
    }
}

/// Sort in place using [`natural_cmp`]. Stable, so equal keys such as `C01`
/// and `C1` keep their relative order.
pub fn natural_sort<S: AsRef<str>>(items: &mut [S]) {
    items.sort_by(|a, b| natural_cmp(a.as_ref(), b.as_ref()));
}

fn compare_digits(a: &str, b: &str) -> Ordering {
    let a = a.trim_start_matches('0');
    let b = b.trim_start_matches('0');
    a.len().cmp(&b.len()).then_with(|| a.cmp(b))
}
