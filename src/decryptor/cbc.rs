//! src/decryptor/cbc.rs
//! AES-256-CBC decryption with PKCS#7 padding removal

use crate::aliases::{Aes256Key32, Block16, Iv16};
use crate::consts::BLOCK_SIZE;
use crate::error::{CipherFault, SecureStorageError};
use crate::utils::xor_blocks;
use aes::cipher::{BlockDecrypt, KeyInit};
use aes::{Aes256Dec, Block as AesBlock};

/// Decrypt AES-256-CBC `ciphertext` and strip its PKCS#7 padding.
///
/// There is no authentication: a modified ciphertext whose last block still
/// decrypts to valid padding is returned as (garbage) plaintext.
///
/// # Errors
///
/// - [`CipherFault::UnalignedCiphertext`] if `ciphertext` is empty or not a
///   multiple of 16 bytes
/// - [`CipherFault::BadPadding`] if the recovered padding is malformed, which
///   is what a wrong key or IV almost always produces
#[inline]
pub fn decrypt_cbc(
    key: &Aes256Key32,
    iv: &Iv16,
    ciphertext: &[u8],
) -> Result<Vec<u8>, SecureStorageError> {
    if ciphertext.is_empty() || ciphertext.len() % BLOCK_SIZE != 0 {
        return Err(CipherFault::UnalignedCiphertext {
            len: ciphertext.len(),
        }
        .into());
    }

    let cipher = Aes256Dec::new(key.expose_secret().into());
    let mut plaintext = Vec::with_capacity(ciphertext.len());

    let mut previous_block = Block16::new(*iv.expose_secret());
    let mut plaintext_block = Block16::new([0u8; BLOCK_SIZE]);

    for chunk in ciphertext.chunks_exact(BLOCK_SIZE) {
        let mut block = *AesBlock::from_slice(chunk);
        cipher.decrypt_block(&mut block);

        xor_blocks(
            block.as_slice(),
            previous_block.expose_secret(),
            plaintext_block.expose_secret_mut(),
        );
        plaintext.extend_from_slice(plaintext_block.expose_secret());

        previous_block.expose_secret_mut().copy_from_slice(chunk);
    }

    let unpadded_len = unpadded_len(&plaintext)?;
    plaintext.truncate(unpadded_len);
    Ok(plaintext)
}

/// Length of `data` once its PKCS#7 padding is removed.
fn unpadded_len(data: &[u8]) -> Result<usize, CipherFault> {
    let pad = match data.last() {
        Some(&last) => usize::from(last),
        None => return Err(CipherFault::BadPadding),
    };

    if pad == 0 || pad > BLOCK_SIZE || pad > data.len() {
        return Err(CipherFault::BadPadding);
    }

    let (content, padding) = data.split_at(data.len() - pad);
    if padding.iter().any(|&b| usize::from(b) != pad) {
        return Err(CipherFault::BadPadding);
    }

    Ok(content.len())
}
