//! Shape-preserving encryption for text and numbers.
//!
//! This crate encrypts strings so the ciphertext keeps the surface format of the
//! plaintext: digits stay digits, uppercase letters stay uppercase, lowercase
//! letters stay lowercase, and every other character stays where it was.
//!
//! # Overview
//!
//! Two interchangeable ciphers implement the [`Cipher`] trait:
//! - **FPE**: FF1 (NIST SP 800-38G) over AES, applied per run of digits or letters
//! - **Substitution**: keyed per-character permutations derived from SHA-256 of the key
//!
//! Typical uses are masking identifiers, account numbers and amounts in test data
//! or logs while keeping them parseable by the systems that consume them.
//!
//! # Quick Start
//!
//! ## FPE encryption
//!
//! ```rust
//! use shapecrypt::{Cipher, new_fpe_cipher};
//!
//! let key = [0x2Bu8; 32];
//! let cipher = new_fpe_cipher(&key).unwrap();
//!
//! let ciphertext = cipher.encrypt("ORDER AB-1234").unwrap();
//! assert_eq!(ciphertext.len(), 13);
//! assert_eq!(cipher.decrypt(&ciphertext).unwrap(), "ORDER AB-1234");
//!
//! // Numbers keep their sign and never gain a leading zero
//! let n = cipher.encrypt_number("-48213").unwrap();
//! assert!(n.starts_with('-') && !n[1..].starts_with('0'));
//! assert_eq!(cipher.decrypt_number(&n).unwrap(), "-48213");
//! ```
//!
//! ## Substitution cipher
//!
//! ```rust
//! use shapecrypt::{Cipher, new_substitution_cipher};
//!
//! let cipher = new_substitution_cipher("my key");
//! let ciphertext = cipher.encrypt("Route 66").unwrap();
//! assert_eq!(cipher.decrypt(&ciphertext).unwrap(), "Route 66");
//! ```
//!
//! # Security Considerations
//!
//! - **Deterministic**: equal plaintexts under the same key give equal ciphertexts
//! - **No authentication**: ciphertexts can be altered without detection
//! - **Substitution is not FPE**: it is a monoalphabetic cipher, suitable only for
//!   obfuscation
//! - **Minimum run length**: FPE runs must be at least 2 characters long
//!
//! # Feature Flags
//!
//! - `std` (default): Enable standard library support
//! - When disabled, the crate is `no_std` compatible (requires `alloc`)

#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;

pub mod alphabet;
pub mod cipher;
pub mod common;
pub mod ff1;
pub mod fpe;
pub mod segment;
pub mod substitution;

#[cfg(test)]
mod cross_check;

pub use alphabet::{AlphabetClass, decode_radix_alphabet, encode_radix_alphabet};
pub use cipher::{BoxedCipher, Cipher, new_fpe_cipher, new_substitution_cipher};
pub use common::{Direction, Error};
pub use ff1::{AesCipher, DigitPermutation, Ff1, Ff1_128, Ff1_192, Ff1_256};
pub use fpe::{FpeCipher128, FpeCipher192, FpeCipher256, FpeConfig, FpeEngine, cycle_walk};
pub use segment::{Run, RunClass, Segmenter, segment};
pub use substitution::SubstitutionCipher;
