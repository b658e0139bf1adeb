// src/encryptor/mod.rs

//! High-level encryption facade.
//!
//! Core API: `encrypt_message(identifier, plaintext, password)?`.
//! Building block: `encrypt_cbc(key, iv, bytes)` for custom flows.

pub(crate) mod cbc;
pub(crate) mod encrypt;

pub use cbc::encrypt_cbc;
pub use encrypt::encrypt_message;
pub(crate) use encrypt::encrypt_message_with;
