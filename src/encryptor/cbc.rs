//! src/encryptor/cbc.rs
//! AES-256-CBC encryption with PKCS#7 padding

use crate::aliases::{Aes256Key32, Block16, Iv16};
use crate::consts::BLOCK_SIZE;
use crate::utils::xor_blocks;
use aes::cipher::{BlockEncrypt, KeyInit};
use aes::{Aes256Enc, Block as AesBlock};

/// Encrypt `plaintext` with AES-256-CBC and PKCS#7 padding.
///
/// Total over any input. Output length is always the next multiple of 16
/// strictly greater than `plaintext.len()`: block-aligned input gets a full
/// block of padding.
#[inline]
pub fn encrypt_cbc(key: &Aes256Key32, iv: &Iv16, plaintext: &[u8]) -> Vec<u8> {
    let cipher = Aes256Enc::new(key.expose_secret().into());

    let padded_len = (plaintext.len() / BLOCK_SIZE + 1) * BLOCK_SIZE;
    let mut ciphertext = Vec::with_capacity(padded_len);

    // previous ciphertext block, seeded with the IV
    let mut prev_block: [u8; BLOCK_SIZE] = *iv.expose_secret();
    let mut plaintext_block = Block16::new([0u8; BLOCK_SIZE]);

    let mut chunks = plaintext.chunks_exact(BLOCK_SIZE);
    for chunk in chunks.by_ref() {
        plaintext_block.expose_secret_mut().copy_from_slice(chunk);
        prev_block = chain_block(&cipher, &plaintext_block, &prev_block);
        ciphertext.extend_from_slice(&prev_block);
    }

    // Final block: remainder + padding
    let tail = chunks.remainder();
    let pad = (BLOCK_SIZE - tail.len()) as u8;
    {
        let block = plaintext_block.expose_secret_mut();
        block[..tail.len()].copy_from_slice(tail);
        block[tail.len()..].fill(pad);
    }
    prev_block = chain_block(&cipher, &plaintext_block, &prev_block);
    ciphertext.extend_from_slice(&prev_block);

    ciphertext
}

#[inline(always)]
fn chain_block(
    cipher: &Aes256Enc,
    plaintext_block: &Block16,
    prev_block: &[u8; BLOCK_SIZE],
) -> [u8; BLOCK_SIZE] {
    let mut xor_output = Block16::new([0u8; BLOCK_SIZE]);
    xor_blocks(
        plaintext_block.expose_secret(),
        prev_block,
        xor_output.expose_secret_mut(),
    );

    let mut aes_block = AesBlock::from(*xor_output.expose_secret());
    cipher.encrypt_block(&mut aes_block);

    let mut ct_array = [0u8; BLOCK_SIZE];
    ct_array.copy_from_slice(aes_block.as_slice());
    ct_array
}
