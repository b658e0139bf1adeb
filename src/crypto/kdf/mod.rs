//! # Key Derivation
//!
//! Turns `(identifier, password)` into the AES-256 key for one message.
//!
//! - [`pbkdf2`] - PBKDF2-HMAC-SHA1 into a caller-provided secure buffer
//!
//! Most callers never touch this directly; [`encrypt_message`](crate::encrypt_message)
//! and [`decrypt_message`](crate::decrypt_message) run it for them.

pub mod pbkdf2;

use crate::aliases::Aes256Key32;
use crate::error::SecureStorageError;
use tracing::trace;

/// Derive the message key: PBKDF2-HMAC-SHA1 over `password`, salted with the
/// full UTF-8 bytes of `identifier`.
///
/// Deterministic. An empty password is accepted.
#[inline]
pub fn derive_message_key(
    identifier: &str,
    password: &str,
    iterations: u32,
) -> Result<Aes256Key32, SecureStorageError> {
    let mut key = Aes256Key32::new([0u8; 32]);
    pbkdf2::derive_pbkdf2_sha1_key(
        password.as_bytes(),
        identifier.as_bytes(),
        iterations,
        &mut key,
    )?;
    trace!(
        salt_len = identifier.len(),
        iterations,
        "message key derived"
    );
    Ok(key)
}
