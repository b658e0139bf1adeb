//! # Constants
//!
//! Fixed parameters of the storage format. Changing any of these breaks
//! decryption of every message written with the previous value.

/// PBKDF2 iteration count used by [`encrypt_message`](crate::encrypt_message)
/// and [`decrypt_message`](crate::decrypt_message).
///
/// Low by modern standards. It is kept at `100` because existing stored
/// secrets were derived with exactly this count.
pub const KEY_ITERATION_COUNT: u32 = 100;

/// Derived key length in bytes (AES-256).
pub const KEY_LENGTH: usize = 32;

/// IV length in bytes, and the minimum UTF-8 length of an identifier.
pub const IV_LENGTH: usize = 16;

/// AES block size in bytes.
pub const BLOCK_SIZE: usize = 16;

/// Minimum allowed PBKDF2 iteration count.
pub const PBKDF2_MIN_ITER: u32 = 1;

/// Maximum allowed PBKDF2 iteration count (5 million).
pub const PBKDF2_MAX_ITER: u32 = 5_000_000;

/// Line width of [`Base64Layout::Mime`](crate::encoding::Base64Layout::Mime) output.
pub const MIME_LINE_LENGTH: usize = 76;
