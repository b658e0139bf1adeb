// src/crypto/mod.rs

//! Low-level crypto primitives: key derivation and IV derivation.
//!
//! See crate root for re-exports. The PRF type lives in `aliases.rs`.

pub mod iv;
pub mod kdf;
