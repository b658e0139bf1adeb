//! Utility functions shared by the encrypt and decrypt paths.

/// XORs two 16-byte blocks and writes the result to `output`.
///
/// Used for CBC chaining on both paths.
///
/// # Panics (by contract)
///
/// Panics if any of the three slices is shorter than 16 bytes. Callers only
/// pass `expose_secret()` views of 16-byte [`Block16`](crate::aliases::Block16)
/// / [`Iv16`](crate::aliases::Iv16) buffers or `chunks_exact(16)` slices.
#[inline(always)]
pub const fn xor_blocks(block_a: &[u8], block_b: &[u8], output: &mut [u8]) {
    let mut i = 0;
    while i < 16 {
        output[i] = block_a[i] ^ block_b[i];
        i += 1;
    }
}
