//! # Error Types
//!
//! Every operation returns [`Result<T, SecureStorageError>`](SecureStorageError).
//! Each variant keeps its underlying cause reachable through
//! [`std::error::Error::source`]. No message ever contains password, key, IV,
//! or plaintext bytes.

use crate::consts::IV_LENGTH;
use std::string::FromUtf8Error;
use thiserror::Error;

/// The error type for all secure-storage operations.
#[derive(Error, Debug)]
pub enum SecureStorageError {
    /// The identifier's UTF-8 encoding is too short to supply an IV.
    #[error("invalid identifier: {len} bytes, at least {min} required", min = IV_LENGTH)]
    InvalidIdentifier {
        /// Byte length of the rejected identifier.
        len: usize,
    },

    /// PBKDF2 could not be run (zero iterations, or the PRF rejected its input).
    #[error("key derivation failed: {0}")]
    KeyDerivation(String),

    /// The ciphertext text is not valid standard Base64.
    #[error("malformed ciphertext encoding: {0}")]
    Encoding(#[from] base64::DecodeError),

    /// AES-CBC rejected the ciphertext.
    ///
    /// A wrong password, a wrong identifier and a corrupted ciphertext all
    /// land here and cannot be told apart: there is no authentication tag.
    #[error("cipher error: {0}")]
    Cipher(#[from] CipherFault),

    /// Decryption succeeded but the recovered bytes are not UTF-8.
    #[error("decrypted payload is not valid UTF-8: {0}")]
    EncodingMismatch(#[from] FromUtf8Error),
}

/// Why the block cipher stage failed.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum CipherFault {
    /// Ciphertext is empty or not a whole number of AES blocks.
    #[error("ciphertext length {len} is not a positive multiple of the block size")]
    UnalignedCiphertext { len: usize },

    /// The final block does not end in valid PKCS#7 padding.
    #[error("padding check failed")]
    BadPadding,
}

/// Field-less discriminant of [`SecureStorageError`], for callers that only
/// branch on the category (and for logging).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    InvalidIdentifier,
    KeyDerivation,
    Encoding,
    Cipher,
    EncodingMismatch,
}

impl SecureStorageError {
    /// The category of this error.
    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        match self {
            SecureStorageError::InvalidIdentifier { .. } => ErrorKind::InvalidIdentifier,
            SecureStorageError::KeyDerivation(_) => ErrorKind::KeyDerivation,
            SecureStorageError::Encoding(_) => ErrorKind::Encoding,
            SecureStorageError::Cipher(_) => ErrorKind::Cipher,
            SecureStorageError::EncodingMismatch(_) => ErrorKind::EncodingMismatch,
        }
    }
}
