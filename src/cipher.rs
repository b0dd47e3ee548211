//! The capability shared by both ciphers.

use alloc::boxed::Box;
use alloc::string::String;

use crate::common::Error;
use crate::ff1::DigitPermutation;
use crate::fpe::{FpeCipher128, FpeCipher192, FpeCipher256, FpeEngine};
use crate::substitution::SubstitutionCipher;

/// Text and number encryption that keeps the surface format of its input.
///
/// `encrypt_number` and `decrypt_number` return input that is not an
/// optionally signed decimal number unchanged. Callers that need to know
/// whether a field was transformed must check its shape themselves.
pub trait Cipher {
    fn encrypt(&self, plaintext: &str) -> Result<String, Error>;

    fn decrypt(&self, ciphertext: &str) -> Result<String, Error>;

    fn encrypt_number(&self, plaintext: &str) -> Result<String, Error>;

    fn decrypt_number(&self, ciphertext: &str) -> Result<String, Error>;
}

impl Cipher for SubstitutionCipher {
    fn encrypt(&self, plaintext: &str) -> Result<String, Error> {
        Ok(SubstitutionCipher::encrypt(self, plaintext))
    }

    fn decrypt(&self, ciphertext: &str) -> Result<String, Error> {
        Ok(SubstitutionCipher::decrypt(self, ciphertext))
    }

    fn encrypt_number(&self, plaintext: &str) -> Result<String, Error> {
        Ok(SubstitutionCipher::encrypt_number(self, plaintext))
    }

    fn decrypt_number(&self, ciphertext: &str) -> Result<String, Error> {
        Ok(SubstitutionCipher::decrypt_number(self, ciphertext))
    }
}

impl<P: DigitPermutation> Cipher for FpeEngine<P> {
    fn encrypt(&self, plaintext: &str) -> Result<String, Error> {
        self.encrypt_preserving(plaintext)
    }

    fn decrypt(&self, ciphertext: &str) -> Result<String, Error> {
        self.decrypt_preserving(ciphertext)
    }

    fn encrypt_number(&self, plaintext: &str) -> Result<String, Error> {
        FpeEngine::encrypt_number(self, plaintext)
    }

    fn decrypt_number(&self, ciphertext: &str) -> Result<String, Error> {
        FpeEngine::decrypt_number(self, ciphertext)
    }
}

/// Shareable cipher handle.
pub type BoxedCipher = Box<dyn Cipher + Send + Sync>;

/// Substitution cipher for `key`. Never fails.
pub fn new_substitution_cipher(key: &str) -> BoxedCipher {
    Box::new(SubstitutionCipher::new(key))
}

/// FF1-based FPE cipher, with AES-128, AES-192 or AES-256 chosen by key length.
///
/// # Errors
/// Returns `Error::InvalidKeyLength` unless `key` is 16, 24 or 32 bytes.
pub fn new_fpe_cipher(key: &[u8]) -> Result<BoxedCipher, Error> {
    let cipher: BoxedCipher = match key.len() {
        16 => Box::new(FpeCipher128::new(key)?),
        24 => Box::new(FpeCipher192::new(key)?),
        32 => Box::new(FpeCipher256::new(key)?),
        _ => return Err(Error::InvalidKeyLength),
    };
    Ok(cipher)
}
