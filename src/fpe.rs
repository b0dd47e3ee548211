//! Format-preserving text encryption on top of per-class FF1 instances.
//!
//! Text is split into runs (see [`crate::segment`]). Digit runs are encrypted
//! with a radix-10 permutation, uppercase and lowercase runs with two radix-26
//! permutations, each bound to its own domain tag. Everything else is copied.
//!
//! Digit runs are cycle-walked: the permutation is re-applied to its own output
//! until the leading digit falls in the same class (zero or nonzero) as the
//! input's leading digit. A number without a leading zero therefore never gains
//! one, and the transform stays a bijection over all digit strings of a length.
//!
//! Minimum run length: a run must be at least as long as the permutation
//! accepts (2 characters for FF1 at radix 10 and 26); shorter runs surface the
//! permutation's `Error::InputTooShort`.

use aes::{Aes128, Aes192, Aes256};
use alloc::string::String;
use alloc::vec::Vec;
use tracing::{debug, trace};

use crate::alphabet::{
    AlphabetClass, decode_radix_alphabet, encode_radix_alphabet, from_digits, to_digits,
};
use crate::common::{Direction, Error, split_number};
use crate::ff1::{AesCipher, DigitPermutation, Ff1};
use crate::segment::{RunClass, segment};

/// Default maximum tweak length accepted by each FF1 instance.
pub const DEFAULT_MAX_TWEAK_LENGTH: usize = 8;

/// Domain tags and primitive limits for an FPE cipher.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FpeConfig {
    pub digits_tweak: Vec<u8>,
    pub upper_tweak: Vec<u8>,
    pub lower_tweak: Vec<u8>,
    pub max_tweak_len: usize,
}

impl Default for FpeConfig {
    fn default() -> Self {
        Self {
            digits_tweak: b"D-TWEAK".to_vec(),
            upper_tweak: b"U-TWEAK".to_vec(),
            lower_tweak: b"L-TWEAK".to_vec(),
            max_tweak_len: DEFAULT_MAX_TWEAK_LENGTH,
        }
    }
}

impl FpeConfig {
    pub fn with_digits_tweak(mut self, tweak: &[u8]) -> Self {
        self.digits_tweak = tweak.to_vec();
        self
    }

    pub fn with_upper_tweak(mut self, tweak: &[u8]) -> Self {
        self.upper_tweak = tweak.to_vec();
        self
    }

    pub fn with_lower_tweak(mut self, tweak: &[u8]) -> Self {
        self.lower_tweak = tweak.to_vec();
        self
    }

    pub fn with_max_tweak_len(mut self, max_tweak_len: usize) -> Self {
        self.max_tweak_len = max_tweak_len;
        self
    }
}

/// Format-preserving cipher over three digit permutations.
pub struct FpeEngine<P: DigitPermutation> {
    digits: P,
    upper: P,
    lower: P,
}

/// FPE with FF1 over AES-128.
pub type FpeCipher128 = FpeEngine<Ff1<Aes128>>;

/// FPE with FF1 over AES-192.
pub type FpeCipher192 = FpeEngine<Ff1<Aes192>>;

/// FPE with FF1 over AES-256.
pub type FpeCipher256 = FpeEngine<Ff1<Aes256>>;

impl<Aes: AesCipher> FpeEngine<Ff1<Aes>> {
    /// Encryption key length in bytes.
    pub const KEY_LENGTH: usize = Aes::KEY_LEN;

    /// Build the three FF1 instances from one key with the default domain tags.
    ///
    /// # Errors
    /// Returns `Error::InvalidKeyLength` if `key` does not fit the AES variant.
    pub fn new(key: &[u8]) -> Result<Self, Error> {
        Self::with_config(key, &FpeConfig::default())
    }

    /// Build the three FF1 instances from one key and explicit domain tags.
    ///
    /// # Errors
    /// - `Error::InvalidKeyLength` if `key` does not fit the AES variant
    /// - `Error::TweakTooLong` if a tag exceeds `config.max_tweak_len`
    pub fn with_config(key: &[u8], config: &FpeConfig) -> Result<Self, Error> {
        if key.len() != Aes::KEY_LEN {
            return Err(Error::InvalidKeyLength);
        }
        let digits = Ff1::new(
            AlphabetClass::Digits.radix(),
            config.max_tweak_len,
            key,
            &config.digits_tweak,
        )?;
        let upper = Ff1::new(
            AlphabetClass::Upper.radix(),
            config.max_tweak_len,
            key,
            &config.upper_tweak,
        )?;
        let lower = Ff1::new(
            AlphabetClass::Lower.radix(),
            config.max_tweak_len,
            key,
            &config.lower_tweak,
        )?;
        debug!(key_bits = Aes::KEY_LEN * 8, "FPE cipher initialized");
        Ok(Self::from_permutations(digits, upper, lower))
    }
}

impl<P: DigitPermutation> FpeEngine<P> {
    /// Assemble an engine from explicit permutations (radix 10, 26, 26).
    pub fn from_permutations(digits: P, upper: P, lower: P) -> Self {
        debug_assert_eq!(digits.radix(), AlphabetClass::Digits.radix());
        debug_assert_eq!(upper.radix(), AlphabetClass::Upper.radix());
        debug_assert_eq!(lower.radix(), AlphabetClass::Lower.radix());
        Self {
            digits,
            upper,
            lower,
        }
    }

    /// Encrypt every digit and letter run of `plaintext`, keeping its shape.
    ///
    /// # Errors
    /// Propagates permutation failures, e.g. `Error::InputTooShort` for a
    /// run shorter than the permutation minimum.
    pub fn encrypt_preserving(&self, plaintext: &str) -> Result<String, Error> {
        self.transform(plaintext, Direction::Encrypt)
    }

    /// Inverse of [`FpeEngine::encrypt_preserving`].
    pub fn decrypt_preserving(&self, ciphertext: &str) -> Result<String, Error> {
        self.transform(ciphertext, Direction::Decrypt)
    }

    /// Encrypt a whole number: optional `-` then one or more digits.
    ///
    /// Any other shape is returned unchanged, and `"-0"` becomes `"0"`.
    pub fn encrypt_number(&self, plaintext: &str) -> Result<String, Error> {
        self.transform_number(plaintext, Direction::Encrypt)
    }

    /// Inverse of [`FpeEngine::encrypt_number`], with the same no-op policy.
    pub fn decrypt_number(&self, ciphertext: &str) -> Result<String, Error> {
        self.transform_number(ciphertext, Direction::Decrypt)
    }

    fn transform(&self, src: &str, direction: Direction) -> Result<String, Error> {
        let mut out = String::with_capacity(src.len());
        for run in segment(src) {
            match run.class {
                RunClass::SignedDigits | RunClass::Digits => {
                    if run.signed() {
                        out.push('-');
                    }
                    out.push_str(&cycle_walk(&self.digits, run.body(src), direction)?);
                }
                RunClass::Upper => {
                    out.push_str(&self.letters(run.text(src), AlphabetClass::Upper, direction)?);
                }
                RunClass::Lower => {
                    out.push_str(&self.letters(run.text(src), AlphabetClass::Lower, direction)?);
                }
                RunClass::Passthrough => out.push_str(run.text(src)),
            }
        }
        debug_assert_eq!(out.len(), src.len());
        Ok(out)
    }

    fn transform_number(&self, src: &str, direction: Direction) -> Result<String, Error> {
        let Some((negative, digits)) = split_number(src) else {
            return Ok(String::from(src));
        };
        if negative && digits == "0" {
            return Ok(String::from("0"));
        }
        let body = cycle_walk(&self.digits, digits, direction)?;
        let mut out = String::with_capacity(src.len());
        if negative {
            out.push('-');
        }
        out.push_str(&body);
        Ok(out)
    }

    fn letters(
        &self,
        run: &str,
        class: AlphabetClass,
        direction: Direction,
    ) -> Result<String, Error> {
        let perm = match class {
            AlphabetClass::Upper => &self.upper,
            AlphabetClass::Lower => &self.lower,
            AlphabetClass::Digits => &self.digits,
        };
        let encoded = encode_radix_alphabet(&to_digits(run, class)?)?;
        let result = perm.apply(&encoded, direction)?;
        from_digits(&decode_radix_alphabet(&result, class.radix())?, class)
    }
}

/// Re-apply `perm` to its own output until the leading digit is in the same
/// class (`'0'` or not) as the leading digit of `x`.
///
/// Encryption walks forward and decryption walks backward along the same
/// orbit, so the two stop at each other's starting point. Empty input is
/// returned unchanged.
pub fn cycle_walk<P: DigitPermutation + ?Sized>(
    perm: &P,
    x: &str,
    direction: Direction,
) -> Result<String, Error> {
    let Some(&first) = x.as_bytes().first() else {
        return Ok(String::new());
    };
    let zero_led = first == b'0';

    let mut current = perm.apply(x, direction)?;
    let mut steps: u64 = 1;
    while current.as_bytes().first().map(|&b| b == b'0') != Some(zero_led) {
        current = perm.apply(&current, direction)?;
        steps += 1;
    }
    trace!(len = x.len(), steps, ?direction, "cycle walk settled");
    Ok(current)
}
