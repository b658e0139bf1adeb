//! Parallel encryption/decryption of many `(identifier, payload)` pairs.
//!
//! Results keep input order. The first failure aborts the batch.

use rayon::prelude::*;

use crate::error::SecureStorageError;
use crate::{decrypt_message, encrypt_message};

/// Encrypt every `(identifier, plaintext)` pair under `password`.
pub fn encrypt_batch(
    items: &[(&str, &str)],
    password: &str,
) -> Result<Vec<String>, SecureStorageError> {
    items
        .par_iter()
        .map(|(identifier, plaintext)| encrypt_message(identifier, plaintext, password))
        .collect()
}

/// Decrypt every `(identifier, ciphertext_text)` pair under `password`.
pub fn decrypt_batch(
    items: &[(&str, &str)],
    password: &str,
) -> Result<Vec<String>, SecureStorageError> {
    items
        .par_iter()
        .map(|(identifier, ciphertext_text)| decrypt_message(identifier, ciphertext_text, password))
        .collect()
}
