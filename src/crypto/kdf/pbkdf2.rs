//! src/crypto/kdf/pbkdf2.rs

use crate::aliases::{Aes256Key32, HmacSha1};
use crate::error::SecureStorageError;

use pbkdf2::pbkdf2;

/// Derive PBKDF2-HMAC-SHA1 directly into an `Aes256Key32` buffer.
///
/// Zero iterations is rejected; every other input (including an empty
/// password or salt) is accepted.
#[inline(always)]
pub fn derive_pbkdf2_sha1_key(
    password: &[u8],
    salt: &[u8],
    iterations: u32,
    out_key: &mut Aes256Key32,
) -> Result<(), SecureStorageError> {
    if iterations == 0 {
        return Err(SecureStorageError::KeyDerivation(
            "PBKDF2 iterations must be ≥1".into(),
        ));
    }

    pbkdf2::<HmacSha1>(password, salt, iterations, out_key.expose_secret_mut())
        .map_err(|e| SecureStorageError::KeyDerivation(format!("PBKDF2 failed: {e}")))?;

    Ok(())
}
