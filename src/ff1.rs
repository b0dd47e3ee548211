#![allow(deprecated)]
//! FF1 format-preserving block cipher (NIST SP 800-38G).
//!
//! FF1 is a ten-round Feistel network over strings of radix-`r` numerals. The
//! round function is an AES CBC-MAC over a fixed header, the tweak and one
//! half of the input, expanded with AES in counter fashion when more than one
//! block of output is needed.
//!
//! Properties:
//! - Ciphertext length equals plaintext length
//! - All ciphertext numerals are in range [0, radix)
//! - Keyed and tweaked: the same key under two tweaks gives unrelated permutations
//! - Minimum message length: smallest `n` with `radix^n >= 100`
//!
//! Numeral strings of any length are supported; the numeric steps of the
//! Feistel rounds are carried out on byte and digit vectors instead of fixed
//! width integers.

#[allow(deprecated)]
use aes::cipher::{Array, BlockCipherEncrypt, KeyInit};
use aes::{Aes128, Aes192, Aes256};
use alloc::string::String;
use alloc::vec;
use alloc::vec::Vec;
use tracing::debug;

use crate::alphabet::{MAX_RADIX, decode_radix_alphabet, encode_radix_alphabet};
use crate::common::{BLOCK_LENGTH, Direction, Error, xor_block};

/// Smallest domain size `radix^n` accepted for one message.
pub const MIN_DOMAIN_SIZE: u32 = 100;

/// Number of Feistel rounds.
const ROUNDS: u8 = 10;

/// Trait for AES ciphers used as the FF1 round function.
pub trait AesCipher: BlockCipherEncrypt + KeyInit + Clone {
    const KEY_LEN: usize;
}

impl AesCipher for Aes128 {
    const KEY_LEN: usize = 16;
}

impl AesCipher for Aes192 {
    const KEY_LEN: usize = 24;
}

impl AesCipher for Aes256 {
    const KEY_LEN: usize = 32;
}

/// A keyed bijection over fixed-length strings written in the radix alphabet.
///
/// `decrypt` must be the exact inverse of `encrypt` for every string of
/// digits in `[0, radix)` the permutation accepts.
pub trait DigitPermutation {
    /// Size of the digit alphabet.
    fn radix(&self) -> u32;

    fn encrypt(&self, x: &str) -> Result<String, Error>;

    fn decrypt(&self, x: &str) -> Result<String, Error>;

    /// Run the permutation in the given direction.
    fn apply(&self, x: &str, direction: Direction) -> Result<String, Error> {
        match direction {
            Direction::Encrypt => self.encrypt(x),
            Direction::Decrypt => self.decrypt(x),
        }
    }
}

/// Smallest message length whose domain reaches [`MIN_DOMAIN_SIZE`].
pub const fn min_length(radix: u32) -> usize {
    let mut n = 1;
    let mut domain = radix;
    while domain < MIN_DOMAIN_SIZE {
        domain *= radix;
        n += 1;
    }
    if n < 2 { 2 } else { n }
}

/// Generic FF1 cipher bound to one radix and one tweak.
#[derive(Clone)]
pub struct Ff1<Aes: AesCipher> {
    ks: Aes,
    radix: u32,
    tweak: Vec<u8>,
    min_len: usize,
}

/// FF1 with AES-128.
#[allow(non_camel_case_types)]
pub type Ff1_128 = Ff1<Aes128>;

/// FF1 with AES-192.
#[allow(non_camel_case_types)]
pub type Ff1_192 = Ff1<Aes192>;

/// FF1 with AES-256.
#[allow(non_camel_case_types)]
pub type Ff1_256 = Ff1<Aes256>;

impl<Aes: AesCipher> Ff1<Aes> {
    /// Encryption key length in bytes.
    pub const KEY_LENGTH: usize = Aes::KEY_LEN;

    /// Initialize an FF1 instance.
    ///
    /// # Errors
    /// - `Error::InvalidRadix` if `radix` is not in `2..=36`
    /// - `Error::InvalidKeyLength` if `key` does not fit the AES variant
    /// - `Error::TweakTooLong` if `tweak` is longer than `max_tweak_len`
    pub fn new(radix: u32, max_tweak_len: usize, key: &[u8], tweak: &[u8]) -> Result<Self, Error> {
        if !(2..=MAX_RADIX).contains(&radix) {
            return Err(Error::InvalidRadix);
        }
        if key.len() != Aes::KEY_LEN {
            return Err(Error::InvalidKeyLength);
        }
        if tweak.len() > max_tweak_len {
            return Err(Error::TweakTooLong);
        }
        let ks = Aes::new_from_slice(key).map_err(|_| Error::InvalidKeyLength)?;

        debug!(
            radix,
            tweak_len = tweak.len(),
            key_bits = Aes::KEY_LEN * 8,
            "FF1 cipher initialized"
        );
        Ok(Self {
            ks,
            radix,
            tweak: tweak.to_vec(),
            min_len: min_length(radix),
        })
    }

    /// Minimum message length in numerals.
    pub fn min_message_length(&self) -> usize {
        self.min_len
    }

    /// Encrypt a numeral string (each value in `[0, radix)`).
    ///
    /// # Errors
    /// - `Error::InputTooShort` if the input is below the minimum length
    /// - `Error::InvalidDigitSymbol` if a numeral is out of range
    pub fn encrypt_numerals(&self, plaintext: &[u8]) -> Result<Vec<u8>, Error> {
        self.ff1(plaintext, Direction::Encrypt)
    }

    /// Decrypt a numeral string produced by [`Ff1::encrypt_numerals`].
    pub fn decrypt_numerals(&self, ciphertext: &[u8]) -> Result<Vec<u8>, Error> {
        self.ff1(ciphertext, Direction::Decrypt)
    }

    fn ff1(&self, src: &[u8], direction: Direction) -> Result<Vec<u8>, Error> {
        let n = src.len();
        if n < self.min_len {
            return Err(Error::InputTooShort);
        }
        if src.iter().any(|&d| u32::from(d) >= self.radix) {
            return Err(Error::InvalidDigitSymbol);
        }

        let u = n / 2;
        let v = n - u;
        let b = byte_length(self.radix, v);
        let d = 4 * b.div_ceil(4) + 4;
        let p = self.header(u, n);

        let t = self.tweak.len();
        let pad = (BLOCK_LENGTH - (t + b + 1) % BLOCK_LENGTH) % BLOCK_LENGTH;
        let mut q = vec![0u8; t + pad + 1 + b];
        q[..t].copy_from_slice(&self.tweak);

        let mut a = src[..u].to_vec();
        let mut bb = src[u..].to_vec();

        match direction {
            Direction::Encrypt => {
                for i in 0..ROUNDS {
                    let m = if i % 2 == 0 { u } else { v };
                    let y = self.round(&p, &mut q, i, &bb, b, d);
                    let c = add_mod(&a, &digits_mod(&y, self.radix, m), self.radix);
                    a = core::mem::replace(&mut bb, c);
                }
            }
            Direction::Decrypt => {
                for i in (0..ROUNDS).rev() {
                    let m = if i % 2 == 0 { u } else { v };
                    let y = self.round(&p, &mut q, i, &a, b, d);
                    let c = sub_mod(&bb, &digits_mod(&y, self.radix, m), self.radix);
                    bb = core::mem::replace(&mut a, c);
                }
            }
        }

        a.extend_from_slice(&bb);
        Ok(a)
    }

    /// Fixed first PRF block: version, method, radix, rounds, split and lengths.
    fn header(&self, u: usize, n: usize) -> [u8; BLOCK_LENGTH] {
        let mut p = [0u8; BLOCK_LENGTH];
        p[0] = 1;
        p[1] = 2;
        p[2] = 1;
        p[3..6].copy_from_slice(&self.radix.to_be_bytes()[1..]);
        p[6] = ROUNDS;
        p[7] = (u % 256) as u8;
        p[8..12].copy_from_slice(&(n as u32).to_be_bytes());
        p[12..16].copy_from_slice(&(self.tweak.len() as u32).to_be_bytes());
        p
    }

    /// Round output `S` (d bytes) for round `i` over the half `half`.
    fn round(
        &self,
        p: &[u8; BLOCK_LENGTH],
        q: &mut [u8],
        i: u8,
        half: &[u8],
        b: usize,
        d: usize,
    ) -> Vec<u8> {
        let tail = q.len() - b;
        q[tail - 1] = i;
        q[tail..].copy_from_slice(&numerals_to_bytes(half, self.radix, b));

        let r = self.prf(p, q);

        let mut s = Vec::with_capacity(d + BLOCK_LENGTH);
        s.extend_from_slice(&r);
        let mut j: u128 = 1;
        while s.len() < d {
            let mut block = r;
            xor_block(&mut block, &j.to_be_bytes());
            s.extend_from_slice(&self.ciph(&block));
            j += 1;
        }
        s.truncate(d);
        s
    }

    /// AES CBC-MAC with a zero IV over `p || q`.
    fn prf(&self, p: &[u8; BLOCK_LENGTH], q: &[u8]) -> [u8; BLOCK_LENGTH] {
        debug_assert_eq!(q.len() % BLOCK_LENGTH, 0);
        let mut y = self.ciph(p);
        for chunk in q.chunks_exact(BLOCK_LENGTH) {
            let mut block = [0u8; BLOCK_LENGTH];
            block.copy_from_slice(chunk);
            xor_block(&mut block, &y);
            y = self.ciph(&block);
        }
        y
    }

    fn ciph(&self, input: &[u8; BLOCK_LENGTH]) -> [u8; BLOCK_LENGTH] {
        let mut block = Array::clone_from_slice(input);
        self.ks.encrypt_block(&mut block);
        let mut out = [0u8; BLOCK_LENGTH];
        out.copy_from_slice(block.as_slice());
        out
    }
}

impl<Aes: AesCipher> DigitPermutation for Ff1<Aes> {
    fn radix(&self) -> u32 {
        self.radix
    }

    fn encrypt(&self, x: &str) -> Result<String, Error> {
        let numerals = decode_radix_alphabet(x, self.radix)?;
        encode_radix_alphabet(&self.encrypt_numerals(&numerals)?)
    }

    fn decrypt(&self, x: &str) -> Result<String, Error> {
        let numerals = decode_radix_alphabet(x, self.radix)?;
        encode_radix_alphabet(&self.decrypt_numerals(&numerals)?)
    }
}

/// Bytes needed to hold `radix^v - 1`, i.e. `ceil(ceil(v * log2(radix)) / 8)`.
fn byte_length(radix: u32, v: usize) -> usize {
    // little-endian accumulator for radix^v
    let mut acc: Vec<u8> = vec![1];
    for _ in 0..v {
        let mut carry = 0u32;
        for byte in acc.iter_mut() {
            let cur = u32::from(*byte) * radix + carry;
            *byte = cur as u8;
            carry = cur >> 8;
        }
        while carry > 0 {
            acc.push(carry as u8);
            carry >>= 8;
        }
    }
    for byte in acc.iter_mut() {
        if *byte == 0 {
            *byte = 0xFF;
        } else {
            *byte -= 1;
            break;
        }
    }
    while acc.last() == Some(&0) {
        acc.pop();
    }
    acc.len().max(1)
}

/// `NUM_radix(x)` as a big-endian byte string of exactly `len` bytes.
fn numerals_to_bytes(x: &[u8], radix: u32, len: usize) -> Vec<u8> {
    let mut out = vec![0u8; len];
    for &digit in x {
        let mut carry = u32::from(digit);
        for byte in out.iter_mut().rev() {
            let cur = u32::from(*byte) * radix + carry;
            *byte = cur as u8;
            carry = cur >> 8;
        }
        debug_assert_eq!(carry, 0);
    }
    out
}

/// `NUM(bytes) mod radix^m` as `m` numerals, most significant first.
fn digits_mod(bytes: &[u8], radix: u32, m: usize) -> Vec<u8> {
    let mut work = bytes.to_vec();
    let mut out = vec![0u8; m];
    for slot in out.iter_mut().rev() {
        let mut rem = 0u32;
        for byte in work.iter_mut() {
            let cur = (rem << 8) | u32::from(*byte);
            *byte = (cur / radix) as u8;
            rem = cur % radix;
        }
        *slot = rem as u8;
    }
    out
}

/// `(x + y) mod radix^m` over equal-length numeral strings.
fn add_mod(x: &[u8], y: &[u8], radix: u32) -> Vec<u8> {
    debug_assert_eq!(x.len(), y.len());
    let mut out = vec![0u8; x.len()];
    let mut carry = 0u32;
    for k in (0..x.len()).rev() {
        let sum = u32::from(x[k]) + u32::from(y[k]) + carry;
        out[k] = (sum % radix) as u8;
        carry = sum / radix;
    }
    out
}

/// `(x - y) mod radix^m` over equal-length numeral strings.
fn sub_mod(x: &[u8], y: &[u8], radix: u32) -> Vec<u8> {
    debug_assert_eq!(x.len(), y.len());
    let mut out = vec![0u8; x.len()];
    let mut borrow = 0u32;
    for k in (0..x.len()).rev() {
        let sub = u32::from(y[k]) + borrow;
        let cur = u32::from(x[k]);
        if cur >= sub {
            out[k] = (cur - sub) as u8;
            borrow = 0;
        } else {
            out[k] = (cur + radix - sub) as u8;
            borrow = 1;
        }
    }
    out
}
