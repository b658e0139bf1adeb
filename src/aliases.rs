//! # Secure-Gate Type Aliases
//!
//! Secret-bearing buffers used by the pipeline. Every type here is a
//! [`secure_gate::Fixed`] and is zeroized on drop when the `zeroize` feature
//! is enabled (default).
//!
//! - [`HmacSha1`] - PRF for PBKDF2 key derivation
//! - [`Aes256Key32`] - 32-byte derived AES-256 key
//! - [`Iv16`] - 16-byte IV taken from the identifier
//! - [`Block16`] - one AES block of plaintext or chaining state
//!
//! All access goes through `.expose_secret()` / `.expose_secret_mut()`.

use hmac::Hmac;
use sha1::Sha1;

pub type HmacSha1 = Hmac<Sha1>;

// ─────────────────────────────────────────────────────────────────────────────
// SpanBuffer: generic secure stack buffer (direct alias to secure-gate's Fixed)
// ─────────────────────────────────────────────────────────────────────────────
pub type SpanBuffer<const N: usize> = secure_gate::Fixed<[u8; N]>;

pub type Aes256Key32 = SpanBuffer<32>; // PBKDF2 output, AES key
pub type Iv16 = SpanBuffer<16>; // leading identifier bytes
pub type Block16 = SpanBuffer<16>; // one AES block
