use rayon::prelude::*;

use crate::rijn::core::{BlockParams, MAX_BLOCK_BYTES, decrypt_block, encrypt_block};
use crate::rijn::error::Result;
use crate::rijn::modes::util::{check_aligned, check_iv};

/// Core CBC encryption algorithm. Each plaintext block is XORed with the previous
/// ciphertext block (the IV for the first) before encryption. Inherently sequential:
/// block i cannot start until block i-1 has been produced.
pub(crate) fn cbc_core_enc_serial(
    plaintext: &[u8],
    iv: &[u8],
    round_keys: &[Vec<u8>],
    p: &BlockParams,
) -> Result<Vec<u8>> {
    let bb = p.block_bytes();
    check_iv(iv, bb)?;
    check_aligned(plaintext, bb, "CBC plaintext not a multiple of the block size")?;

    let mut ciphertext = vec![0u8; plaintext.len()];
    let mut prev = [0u8; MAX_BLOCK_BYTES];
    prev[..bb].copy_from_slice(iv);

    for (pt, ct) in plaintext
        .chunks_exact(bb)
        .zip(ciphertext.chunks_exact_mut(bb))
    {
        for i in 0..bb {
            ct[i] = pt[i] ^ prev[i];
        }
        encrypt_block(ct, round_keys, p);
        prev[..bb].copy_from_slice(ct);
    }

    Ok(ciphertext)
}

/// Core CBC decryption algorithm. Each ciphertext block is decrypted and XORed with
/// the previous ciphertext block (not the decrypted value) to recover plaintext.
pub(crate) fn cbc_core_dec_serial(
    ciphertext: &[u8],
    iv: &[u8],
    round_keys: &[Vec<u8>],
    p: &BlockParams,
) -> Result<Vec<u8>> {
    let bb = p.block_bytes();
    check_iv(iv, bb)?;
    check_aligned(
        ciphertext,
        bb,
        "CBC ciphertext not a multiple of the block size",
    )?;

    let mut plaintext = vec![0u8; ciphertext.len()];
    let mut prev = [0u8; MAX_BLOCK_BYTES];
    prev[..bb].copy_from_slice(iv);

    for (ct, pt) in ciphertext
        .chunks_exact(bb)
        .zip(plaintext.chunks_exact_mut(bb))
    {
        pt.copy_from_slice(ct);
        decrypt_block(pt, round_keys, p);
        for i in 0..bb {
            pt[i] ^= prev[i];
        }
        prev[..bb].copy_from_slice(ct);
    }

    Ok(plaintext)
}

/// Parallel CBC decryption. Unlike encryption, decryption has no dependency on
/// derived values: block i needs only ciphertext blocks i and i-1, both available
/// up front, so the chain is decrypted block-parallel. Output matches the serial
/// path exactly.
pub(crate) fn cbc_core_dec_parallel(
    ciphertext: &[u8],
    iv: &[u8],
    round_keys: &[Vec<u8>],
    p: &BlockParams,
) -> Result<Vec<u8>> {
    let bb = p.block_bytes();
    check_iv(iv, bb)?;
    check_aligned(
        ciphertext,
        bb,
        "CBC ciphertext not a multiple of the block size",
    )?;

    let mut plaintext = vec![0u8; ciphertext.len()];
    plaintext
        .par_chunks_exact_mut(bb)
        .enumerate()
        .for_each(|(i, pt)| {
            pt.copy_from_slice(&ciphertext[i * bb..(i + 1) * bb]);
            decrypt_block(pt, round_keys, p);
            let prev = if i == 0 {
                iv
            } else {
                &ciphertext[(i - 1) * bb..i * bb]
            };
            for j in 0..bb {
                pt[j] ^= prev[j];
            }
        });

    Ok(plaintext)
}
