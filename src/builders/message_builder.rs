//! src/builders/message_builder.rs
//! Configurable message encryption: iteration count + output layout

use crate::consts::{KEY_ITERATION_COUNT, PBKDF2_MAX_ITER, PBKDF2_MIN_ITER};
use crate::decryptor::decrypt_message_with;
use crate::encoding::Base64Layout;
use crate::encryptor::encrypt_message_with;
use crate::error::SecureStorageError;

/// Message encryption with non-default parameters.
///
/// Defaults reproduce [`encrypt_message`](crate::encrypt_message) and
/// [`decrypt_message`](crate::decrypt_message) exactly: 100 PBKDF2 iterations
/// and single-line Base64. A message encrypted with a non-default iteration
/// count only decrypts with that same count.
///
/// # Thread Safety
///
/// `Copy + Send + Sync`, holds no secrets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MessageCipherBuilder {
    iterations: u32,
    layout: Base64Layout,
}

impl MessageCipherBuilder {
    /// Create a builder with the storage-compatible defaults.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            iterations: KEY_ITERATION_COUNT,
            layout: Base64Layout::Standard,
        }
    }

    /// Set the PBKDF2 iteration count, clamped to
    /// [`PBKDF2_MIN_ITER`]`..=`[`PBKDF2_MAX_ITER`].
    #[must_use]
    pub fn with_iterations(mut self, iterations: u32) -> Self {
        self.iterations = iterations.clamp(PBKDF2_MIN_ITER, PBKDF2_MAX_ITER);
        self
    }

    /// Set the Base64 layout used on encryption. Decryption accepts both.
    #[must_use]
    pub const fn with_layout(mut self, layout: Base64Layout) -> Self {
        self.layout = layout;
        self
    }

    /// Current iteration count
    #[must_use]
    pub const fn iterations(&self) -> u32 {
        self.iterations
    }

    /// Current output layout
    #[must_use]
    pub const fn layout(&self) -> Base64Layout {
        self.layout
    }

    /// Encrypt with this configuration. See [`encrypt_message`](crate::encrypt_message).
    pub fn encrypt(
        &self,
        identifier: &str,
        plaintext: &str,
        password: &str,
    ) -> Result<String, SecureStorageError> {
        encrypt_message_with(identifier, plaintext, password, self.iterations, self.layout)
    }

    /// Decrypt with this configuration. See [`decrypt_message`](crate::decrypt_message).
    pub fn decrypt(
        &self,
        identifier: &str,
        ciphertext_text: &str,
        password: &str,
    ) -> Result<String, SecureStorageError> {
        decrypt_message_with(identifier, ciphertext_text, password, self.iterations)
    }
}

impl Default for MessageCipherBuilder {
    fn default() -> Self {
        Self::new()
    }
}
