// src/lib.rs

//! Deterministic password-based encryption of short secrets.
//!
//! A caller-chosen *identifier* (≥ 16 UTF-8 bytes) is both the PBKDF2 salt
//! and the source of the AES-CBC IV. Ciphertext travels as standard Base64.
//!
//! **Limitations.** The IV is fixed per identifier, so equal plaintexts under
//! one identifier and password produce equal ciphertexts. There is no MAC:
//! tampering is not detected, and a wrong password is indistinguishable from
//! corruption.

pub mod aliases;
#[cfg(feature = "batch-ops")]
pub mod batch_ops;
pub mod builders;
pub mod consts;
pub mod crypto;
pub mod decryptor;
pub mod encoding;
pub mod encryptor;
pub mod error;
pub mod utils;

// High-level API
pub use decryptor::decrypt_message;
pub use encryptor::encrypt_message;
pub use error::{CipherFault, ErrorKind, SecureStorageError};

pub use builders::message_builder::MessageCipherBuilder;
pub use encoding::Base64Layout;

// Pipeline stages, for custom flows
pub use crypto::iv::derive_iv;
pub use crypto::kdf::derive_message_key;
pub use crypto::kdf::pbkdf2::derive_pbkdf2_sha1_key;
pub use decryptor::decrypt_cbc;
pub use encryptor::encrypt_cbc;

#[cfg(feature = "batch-ops")]
pub use batch_ops::{decrypt_batch, encrypt_batch};
