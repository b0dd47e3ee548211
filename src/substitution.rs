//! Keyed substitution cipher.
//!
//! The key is hashed with SHA-256 and the first eight bytes of the digest seed
//! a PCG generator. Four Fisher–Yates shuffles drawn from that stream give the
//! uppercase, lowercase, digit and first-digit permutations. The same key
//! always rebuilds the same tables, so no table ever leaves the process.
//!
//! The first-digit table is restricted to `{1..9}`: a number that does not
//! start with `0` never gains a leading zero. A leading `0` stays `0`, which
//! keeps numbers with leading zeros decryptable.

use alloc::string::String;
use rand::{RngCore, SeedableRng};
use rand_pcg::Pcg64Mcg;
use sha2::{Digest, Sha256};
use tracing::debug;

use crate::common::split_number;

const UPPER: &[u8; 26] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ";
const LOWER: &[u8; 26] = b"abcdefghijklmnopqrstuvwxyz";
const DIGITS: &[u8; 10] = b"0123456789";
const NONZERO_DIGITS: &[u8; 9] = b"123456789";

/// Derive the generator seed from a key: SHA-256, first 8 bytes big-endian.
pub fn seed_from_key(key: &str) -> u64 {
    let digest = Sha256::digest(key.as_bytes());
    let mut seed = [0u8; 8];
    seed.copy_from_slice(&digest[..8]);
    u64::from_be_bytes(seed)
}

/// Uniform value in `[0, bound)` by rejection sampling.
fn below(rng: &mut Pcg64Mcg, bound: u64) -> u64 {
    debug_assert!(bound > 0);
    // 2^64 mod bound; values under it would bias the low residues
    let threshold = bound.wrapping_neg() % bound;
    loop {
        let x = rng.next_u64();
        if x >= threshold {
            return x % bound;
        }
    }
}

/// Fisher–Yates shuffle of a copy of `alphabet`.
fn shuffled<const N: usize>(rng: &mut Pcg64Mcg, alphabet: &[u8; N]) -> [u8; N] {
    let mut out = *alphabet;
    for i in (1..N).rev() {
        let j = below(rng, i as u64 + 1) as usize;
        out.swap(i, j);
    }
    out
}

/// Substitution cipher with byte-wise and number-aware modes.
#[derive(Clone, PartialEq, Eq)]
pub struct SubstitutionCipher {
    enc: [u8; 256],
    dec: [u8; 256],
    // indexed by digit value; slot 0 maps 0 to itself
    first_enc: [u8; 10],
    first_dec: [u8; 10],
}

impl core::fmt::Debug for SubstitutionCipher {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("SubstitutionCipher").finish_non_exhaustive()
    }
}

impl SubstitutionCipher {
    /// Build all tables from `key`. Any key is accepted.
    pub fn new(key: &str) -> Self {
        let mut rng = Pcg64Mcg::seed_from_u64(seed_from_key(key));
        let upper = shuffled(&mut rng, UPPER);
        let lower = shuffled(&mut rng, LOWER);
        let digits = shuffled(&mut rng, DIGITS);
        let first = shuffled(&mut rng, NONZERO_DIGITS);

        let mut enc: [u8; 256] = core::array::from_fn(|i| i as u8);
        let mut dec = enc;
        for (plain, cipher) in [
            (&UPPER[..], &upper[..]),
            (&LOWER[..], &lower[..]),
            (&DIGITS[..], &digits[..]),
        ] {
            for (&p, &c) in plain.iter().zip(cipher) {
                enc[usize::from(p)] = c;
                dec[usize::from(c)] = p;
            }
        }

        let mut first_enc = *DIGITS;
        let mut first_dec = *DIGITS;
        for (&p, &c) in NONZERO_DIGITS.iter().zip(&first) {
            first_enc[usize::from(p - b'0')] = c;
            first_dec[usize::from(c - b'0')] = p;
        }

        debug!(key_len = key.len(), "substitution cipher initialized");
        Self {
            enc,
            dec,
            first_enc,
            first_dec,
        }
    }

    /// Substitute every ASCII letter and digit; other characters pass through.
    pub fn encrypt(&self, plaintext: &str) -> String {
        substitute(plaintext, &self.enc)
    }

    /// Inverse of [`SubstitutionCipher::encrypt`].
    pub fn decrypt(&self, ciphertext: &str) -> String {
        substitute(ciphertext, &self.dec)
    }

    /// Encrypt an optionally signed decimal number.
    ///
    /// Input that is not `-?[0-9]+` is returned unchanged; `"-0"` becomes `"0"`.
    pub fn encrypt_number(&self, plaintext: &str) -> String {
        let Some((negative, digits)) = split_number(plaintext) else {
            return String::from(plaintext);
        };
        if negative && digits == "0" {
            return String::from("0");
        }
        substitute_number(negative, digits, &self.first_enc, &self.enc)
    }

    /// Inverse of [`SubstitutionCipher::encrypt_number`], with the same no-op policy.
    pub fn decrypt_number(&self, ciphertext: &str) -> String {
        let Some((negative, digits)) = split_number(ciphertext) else {
            return String::from(ciphertext);
        };
        if digits == "0" {
            return String::from("0");
        }
        substitute_number(negative, digits, &self.first_dec, &self.dec)
    }
}

fn substitute_number(
    negative: bool,
    digits: &str,
    first: &[u8; 10],
    rest: &[u8; 256],
) -> String {
    let bytes = digits.as_bytes();
    let mut out = String::with_capacity(bytes.len() + 1);
    if negative {
        out.push('-');
    }
    out.push(char::from(first[usize::from(bytes[0] - b'0')]));
    for &b in &bytes[1..] {
        out.push(char::from(rest[usize::from(b)]));
    }
    out
}

fn substitute(text: &str, table: &[u8; 256]) -> String {
    text.chars()
        .map(|c| {
            if c.is_ascii() {
                char::from(table[c as usize])
            } else {
                c
            }
        })
        .collect()
}
