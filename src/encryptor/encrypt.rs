//! src/encryptor/encrypt.rs
//! Message encryption: IV → key → AES-CBC → Base64

use crate::consts::KEY_ITERATION_COUNT;
use crate::crypto::iv::derive_iv;
use crate::crypto::kdf::derive_message_key;
use crate::encoding::{encode_with, Base64Layout};
use crate::encryptor::cbc::encrypt_cbc;
use crate::error::SecureStorageError;
use tracing::debug;

/// Encrypt `plaintext` under `(identifier, password)` and return Base64 text.
///
/// Deterministic: the IV is the first 16 bytes of `identifier` and the key
/// is PBKDF2-HMAC-SHA1(password, identifier, 100 iterations), so the same
/// triple always yields the same text. Equal plaintexts stored under the
/// same identifier and password are therefore visible as equal.
///
/// The identifier is not embedded in the output; keep it alongside the
/// ciphertext, unmodified, to decrypt later.
///
/// # Errors
///
/// - [`SecureStorageError::InvalidIdentifier`] if `identifier` is shorter than
///   16 bytes (checked before any key derivation runs)
/// - [`SecureStorageError::KeyDerivation`] if PBKDF2 fails
///
/// # Example
///
/// ```
/// use secure_storage_rs::{decrypt_message, encrypt_message};
///
/// let text = encrypt_message("0123456789ABCDEF", "secret-value", "correct-password")?;
/// assert_eq!(text, "RNyT56c1dIMWujZJ+1WwXA==");
/// assert_eq!(
///     decrypt_message("0123456789ABCDEF", &text, "correct-password")?,
///     "secret-value"
/// );
/// # Ok::<(), secure_storage_rs::SecureStorageError>(())
/// ```
#[inline]
pub fn encrypt_message(
    identifier: &str,
    plaintext: &str,
    password: &str,
) -> Result<String, SecureStorageError> {
    encrypt_message_with(
        identifier,
        plaintext,
        password,
        KEY_ITERATION_COUNT,
        Base64Layout::Standard,
    )
}

pub(crate) fn encrypt_message_with(
    identifier: &str,
    plaintext: &str,
    password: &str,
    iterations: u32,
    layout: Base64Layout,
) -> Result<String, SecureStorageError> {
    let run = || -> Result<String, SecureStorageError> {
        let iv = derive_iv(identifier)?;
        let key = derive_message_key(identifier, password, iterations)?;

        let ciphertext = encrypt_cbc(&key, &iv, plaintext.as_bytes());
        debug!(
            plaintext_len = plaintext.len(),
            ciphertext_len = ciphertext.len(),
            "message encrypted"
        );

        Ok(encode_with(&ciphertext, layout))
    };

    run().inspect_err(|e| debug!(kind = ?e.kind(), "message encryption failed"))
}
