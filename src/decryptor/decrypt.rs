//! src/decryptor/decrypt.rs
//! Message decryption: IV → Base64 → key → AES-CBC → UTF-8

use crate::consts::KEY_ITERATION_COUNT;
use crate::crypto::iv::derive_iv;
use crate::crypto::kdf::derive_message_key;
use crate::decryptor::cbc::decrypt_cbc;
use crate::encoding::decode;
use crate::error::SecureStorageError;
use tracing::debug;

/// Decrypt Base64 `ciphertext_text` produced by
/// [`encrypt_message`](crate::encrypt_message) with the same identifier and
/// password.
///
/// Line breaks and other ASCII whitespace in `ciphertext_text` are ignored.
///
/// A wrong password or identifier is not reported as such: it surfaces as
/// [`SecureStorageError::Cipher`] (bad padding), the same as corruption. In
/// rare cases (about 1 in 256) garbage happens to pass the padding check and
/// surfaces as [`SecureStorageError::EncodingMismatch`] or, rarer still, as
/// wrong plaintext. Retrying with the same inputs fails the same way.
///
/// # Errors
///
/// - [`SecureStorageError::InvalidIdentifier`] if `identifier` is shorter than 16 bytes
/// - [`SecureStorageError::Encoding`] if `ciphertext_text` is not valid Base64
/// - [`SecureStorageError::KeyDerivation`] if PBKDF2 fails
/// - [`SecureStorageError::Cipher`] on misaligned ciphertext or bad padding
/// - [`SecureStorageError::EncodingMismatch`] if the plaintext is not UTF-8
#[inline]
pub fn decrypt_message(
    identifier: &str,
    ciphertext_text: &str,
    password: &str,
) -> Result<String, SecureStorageError> {
    decrypt_message_with(identifier, ciphertext_text, password, KEY_ITERATION_COUNT)
}

pub(crate) fn decrypt_message_with(
    identifier: &str,
    ciphertext_text: &str,
    password: &str,
    iterations: u32,
) -> Result<String, SecureStorageError> {
    let run = || -> Result<String, SecureStorageError> {
        let iv = derive_iv(identifier)?;
        let ciphertext = decode(ciphertext_text)?;
        let key = derive_message_key(identifier, password, iterations)?;

        let plaintext = decrypt_cbc(&key, &iv, &ciphertext)?;
        debug!(
            ciphertext_len = ciphertext.len(),
            plaintext_len = plaintext.len(),
            "message decrypted"
        );

        Ok(String::from_utf8(plaintext)?)
    };

    run().inspect_err(|e| debug!(kind = ?e.kind(), "message decryption failed"))
}
