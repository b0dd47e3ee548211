//! Splitting text into typed runs.
//!
//! Run boundaries and classes are not hidden by either cipher: they are the
//! format that ciphertext preserves. Encryption and decryption therefore
//! segment with the same scanner.

use crate::alphabet::AlphabetClass;

/// Character class of a run.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum RunClass {
    /// A `-` immediately followed by one or more digits.
    SignedDigits,
    Digits,
    Upper,
    Lower,
    /// A single character with no class of its own.
    Passthrough,
}

impl RunClass {
    /// Alphabet used to encrypt the run body, if any.
    pub const fn alphabet(self) -> Option<AlphabetClass> {
        match self {
            RunClass::SignedDigits | RunClass::Digits => Some(AlphabetClass::Digits),
            RunClass::Upper => Some(AlphabetClass::Upper),
            RunClass::Lower => Some(AlphabetClass::Lower),
            RunClass::Passthrough => None,
        }
    }
}

/// A maximal slice `start..end` (byte offsets) of the scanned input.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Run {
    pub start: usize,
    pub end: usize,
    pub class: RunClass,
}

impl Run {
    /// Whether the run carries a leading `-`.
    pub const fn signed(&self) -> bool {
        matches!(self.class, RunClass::SignedDigits)
    }

    pub const fn len(&self) -> usize {
        self.end - self.start
    }

    pub const fn is_empty(&self) -> bool {
        self.start == self.end
    }

    /// The full text of the run, sign included.
    pub fn text<'a>(&self, input: &'a str) -> &'a str {
        &input[self.start..self.end]
    }

    /// The text of the run without its sign.
    pub fn body<'a>(&self, input: &'a str) -> &'a str {
        if self.signed() {
            &input[self.start + 1..self.end]
        } else {
            self.text(input)
        }
    }
}

/// Left-to-right run scanner. A clone scans independently from the same position.
#[derive(Clone, Debug)]
pub struct Segmenter<'a> {
    input: &'a str,
    pos: usize,
}

/// Scan `input` into runs.
pub fn segment(input: &str) -> Segmenter<'_> {
    Segmenter { input, pos: 0 }
}

impl Segmenter<'_> {
    fn extend_while(&self, mut i: usize, class: AlphabetClass) -> usize {
        let bytes = self.input.as_bytes();
        while i < bytes.len() && class.contains(bytes[i]) {
            i += 1;
        }
        i
    }
}

impl Iterator for Segmenter<'_> {
    type Item = Run;

    fn next(&mut self) -> Option<Run> {
        let bytes = self.input.as_bytes();
        let start = self.pos;
        let &b = bytes.get(start)?;

        let (end, class) = if b == b'-' && bytes.get(start + 1).is_some_and(u8::is_ascii_digit) {
            (
                self.extend_while(start + 1, AlphabetClass::Digits),
                RunClass::SignedDigits,
            )
        } else {
            match AlphabetClass::of(b) {
                Some(AlphabetClass::Digits) => (
                    self.extend_while(start, AlphabetClass::Digits),
                    RunClass::Digits,
                ),
                Some(AlphabetClass::Upper) => (
                    self.extend_while(start, AlphabetClass::Upper),
                    RunClass::Upper,
                ),
                Some(AlphabetClass::Lower) => (
                    self.extend_while(start, AlphabetClass::Lower),
                    RunClass::Lower,
                ),
                None => {
                    let width = self.input[start..]
                        .chars()
                        .next()
                        .map_or(1, char::len_utf8);
                    (start + width, RunClass::Passthrough)
                }
            }
        };

        self.pos = end;
        Some(Run { start, end, class })
    }
}

impl core::iter::FusedIterator for Segmenter<'_> {}
