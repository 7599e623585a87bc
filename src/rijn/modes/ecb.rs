use rayon::prelude::*;

use crate::rijn::core::{BlockParams, decrypt_block, encrypt_block};
use crate::rijn::error::Result;
use crate::rijn::modes::util::check_aligned;

/// Core ECB encryption algorithm. Encrypts a block-aligned buffer one block at a
/// time, each block independent. No padding: callers supply aligned buffers.
pub(crate) fn ecb_core_enc_serial(
    plaintext: &[u8],
    round_keys: &[Vec<u8>],
    p: &BlockParams,
) -> Result<Vec<u8>> {
    let bb = p.block_bytes();
    check_aligned(plaintext, bb, "ECB plaintext not a multiple of the block size")?;

    let mut ciphertext = plaintext.to_vec();
    for block in ciphertext.chunks_exact_mut(bb) {
        encrypt_block(block, round_keys, p);
    }

    Ok(ciphertext)
}

/// Core ECB decryption algorithm.
pub(crate) fn ecb_core_dec_serial(
    ciphertext: &[u8],
    round_keys: &[Vec<u8>],
    p: &BlockParams,
) -> Result<Vec<u8>> {
    let bb = p.block_bytes();
    check_aligned(
        ciphertext,
        bb,
        "ECB ciphertext not a multiple of the block size",
    )?;

    let mut plaintext = ciphertext.to_vec();
    for block in plaintext.chunks_exact_mut(bb) {
        decrypt_block(block, round_keys, p);
    }

    Ok(plaintext)
}

/// Parallel ECB encryption. Blocks are independent, so the buffer is split across
/// the rayon pool; output matches the serial path exactly.
pub(crate) fn ecb_core_enc_parallel(
    plaintext: &[u8],
    round_keys: &[Vec<u8>],
    p: &BlockParams,
) -> Result<Vec<u8>> {
    let bb = p.block_bytes();
    check_aligned(plaintext, bb, "ECB plaintext not a multiple of the block size")?;

    let mut ciphertext = plaintext.to_vec();
    ciphertext
        .par_chunks_exact_mut(bb)
        .for_each(|block| encrypt_block(block, round_keys, p));

    Ok(ciphertext)
}

/// Parallel ECB decryption.
pub(crate) fn ecb_core_dec_parallel(
    ciphertext: &[u8],
    round_keys: &[Vec<u8>],
    p: &BlockParams,
) -> Result<Vec<u8>> {
    let bb = p.block_bytes();
    check_aligned(
        ciphertext,
        bb,
        "ECB ciphertext not a multiple of the block size",
    )?;

    let mut plaintext = ciphertext.to_vec();
    plaintext
        .par_chunks_exact_mut(bb)
        .for_each(|block| decrypt_block(block, round_keys, p));

    Ok(plaintext)
}
