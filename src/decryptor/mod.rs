// src/decryptor/mod.rs

//! High-level decryption facade.
//!
//! Core API: `decrypt_message(identifier, text, password)?`.
//! Building block: `decrypt_cbc(key, iv, bytes)?` for custom flows.

pub(crate) mod cbc;
pub(crate) mod decrypt;

pub use cbc::decrypt_cbc;
pub use decrypt::decrypt_message;
pub(crate) use decrypt::decrypt_message_with;
