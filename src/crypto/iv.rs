//! src/crypto/iv.rs
//! IV derivation from the caller's identifier.

use crate::aliases::Iv16;
use crate::consts::IV_LENGTH;
use crate::error::SecureStorageError;

/// Take the first 16 bytes of `identifier`'s UTF-8 encoding as the CBC IV.
///
/// The bytes are used verbatim (no hashing), so the cut may fall inside a
/// multi-byte character. Every message under one identifier shares this IV:
/// equal plaintexts under the same identifier and password encrypt to equal
/// ciphertexts.
///
/// # Errors
///
/// [`SecureStorageError::InvalidIdentifier`] if the encoding is shorter than
/// 16 bytes.
#[inline]
pub fn derive_iv(identifier: &str) -> Result<Iv16, SecureStorageError> {
    let bytes = identifier.as_bytes();
    if bytes.len() < IV_LENGTH {
        return Err(SecureStorageError::InvalidIdentifier { len: bytes.len() });
    }

    let mut iv = Iv16::new([0u8; IV_LENGTH]);
    iv.expose_secret_mut().copy_from_slice(&bytes[..IV_LENGTH]);
    Ok(iv)
}
