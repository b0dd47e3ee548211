//! Common types shared by the FF1 primitive, the FPE engine and the substitution cipher.

/// Unified error type for all cipher operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// Key length is not accepted by the underlying block cipher.
    InvalidKeyLength,
    /// A character or digit value is outside the expected alphabet.
    InvalidDigitSymbol,
    /// Radix is outside the supported range.
    InvalidRadix,
    /// Input is shorter than the minimum required length.
    InputTooShort,
    /// Tweak is longer than the maximum allowed.
    TweakTooLong,
}

impl core::fmt::Display for Error {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Error::InvalidKeyLength => write!(f, "key length must be 16, 24, or 32 bytes"),
            Error::InvalidDigitSymbol => write!(f, "symbol out of range for alphabet"),
            Error::InvalidRadix => write!(f, "radix out of supported range"),
            Error::InputTooShort => write!(f, "input too short"),
            Error::TweakTooLong => write!(f, "tweak too long"),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for Error {}

/// AES block length in bytes.
pub const BLOCK_LENGTH: usize = 16;

/// Direction of cipher operation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Direction {
    Encrypt,
    Decrypt,
}

/// XOR two 16-byte blocks, storing result in the first argument.
#[inline]
pub fn xor_block(dst: &mut [u8; BLOCK_LENGTH], src: &[u8; BLOCK_LENGTH]) {
    for i in 0..BLOCK_LENGTH {
        dst[i] ^= src[i];
    }
}

/// Split an optionally signed decimal string into its sign and digits.
///
/// Returns `None` unless the input is an optional `-` followed by at least
/// one ASCII digit and nothing else.
pub fn split_number(s: &str) -> Option<(bool, &str)> {
    let (negative, digits) = match s.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, s),
    };
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    Some((negative, digits))
}
