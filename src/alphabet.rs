//! Alphabet and radix mapping.
//!
//! Each character class the ciphers understand is a contiguous ASCII range:
//! `0-9` (radix 10), `A-Z` and `a-z` (radix 26). A run of such characters maps
//! to a sequence of digit values, and digit values render into the canonical
//! radix alphabet `0-9A-Z` consumed by the FF1 primitive.

use alloc::string::String;
use alloc::vec::Vec;

use crate::common::Error;

/// Canonical symbols for digit values 0..36.
pub const RADIX_ALPHABET: &[u8; 36] = b"0123456789ABCDEFGHIJKLMNOPQRSTUVWXYZ";

/// Largest radix the canonical alphabet can render.
pub const MAX_RADIX: u32 = RADIX_ALPHABET.len() as u32;

/// A contiguous character alphabet.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum AlphabetClass {
    /// `0-9`
    Digits,
    /// `A-Z`
    Upper,
    /// `a-z`
    Lower,
}

impl AlphabetClass {
    /// Number of symbols in the alphabet.
    pub const fn radix(self) -> u32 {
        match self {
            AlphabetClass::Digits => 10,
            AlphabetClass::Upper | AlphabetClass::Lower => 26,
        }
    }

    const fn first(self) -> u8 {
        match self {
            AlphabetClass::Digits => b'0',
            AlphabetClass::Upper => b'A',
            AlphabetClass::Lower => b'a',
        }
    }

    /// Whether `byte` belongs to this alphabet.
    pub const fn contains(self, byte: u8) -> bool {
        match self {
            AlphabetClass::Digits => byte.is_ascii_digit(),
            AlphabetClass::Upper => byte.is_ascii_uppercase(),
            AlphabetClass::Lower => byte.is_ascii_lowercase(),
        }
    }

    /// Class of an ASCII byte, if it has one.
    pub const fn of(byte: u8) -> Option<Self> {
        if byte.is_ascii_digit() {
            Some(AlphabetClass::Digits)
        } else if byte.is_ascii_uppercase() {
            Some(AlphabetClass::Upper)
        } else if byte.is_ascii_lowercase() {
            Some(AlphabetClass::Lower)
        } else {
            None
        }
    }
}

/// Map each character of `run` to its offset within `class`.
pub fn to_digits(run: &str, class: AlphabetClass) -> Result<Vec<u8>, Error> {
    run.bytes()
        .map(|b| {
            if class.contains(b) {
                Ok(b - class.first())
            } else {
                Err(Error::InvalidDigitSymbol)
            }
        })
        .collect()
}

/// Inverse of [`to_digits`].
pub fn from_digits(values: &[u8], class: AlphabetClass) -> Result<String, Error> {
    let mut out = String::with_capacity(values.len());
    for &v in values {
        if u32::from(v) >= class.radix() {
            return Err(Error::InvalidDigitSymbol);
        }
        out.push(char::from(class.first() + v));
    }
    Ok(out)
}

/// Render digit values with the canonical `0-9A-Z` alphabet.
pub fn encode_radix_alphabet(values: &[u8]) -> Result<String, Error> {
    let mut out = String::with_capacity(values.len());
    for &v in values {
        let symbol = RADIX_ALPHABET
            .get(usize::from(v))
            .ok_or(Error::InvalidDigitSymbol)?;
        out.push(char::from(*symbol));
    }
    Ok(out)
}

/// Parse a canonical radix-alphabet string back into digit values.
///
/// Only the first `radix` symbols are accepted; lowercase letters are rejected.
pub fn decode_radix_alphabet(s: &str, radix: u32) -> Result<Vec<u8>, Error> {
    s.bytes()
        .map(|b| {
            let v = match b {
                b'0'..=b'9' => b - b'0',
                b'A'..=b'Z' => b - b'A' + 10,
                _ => return Err(Error::InvalidDigitSymbol),
            };
            if u32::from(v) < radix {
                Ok(v)
            } else {
                Err(Error::InvalidDigitSymbol)
            }
        })
        .collect()
}
