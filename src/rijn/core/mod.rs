//! Core Rijndael round pipeline for encryption and decryption of a single block of
//! 16, 24, or 32 bytes. Exports encrypt_block and decrypt_block over an in-place state.

mod constants;
mod decryption;
mod encryption;
mod gf;
mod sbox;

pub(crate) use constants::RCON;
pub(crate) use decryption::decrypt_block;
pub(crate) use encryption::encrypt_block;
pub(crate) use sbox::SBOXES;

use crate::rijn::key::BlockSize;

/// Largest supported block (256 bits). Used to size stack scratch buffers so the
/// hot loops never allocate.
pub(crate) const MAX_BLOCK_BYTES: usize = 32;

/// Constant tables derived from the block size: per-row shift offsets and the
/// MixColumns diffusion polynomial with its circulant inverse. Selected once at
/// context construction so the round loops never branch on Nb.
pub(crate) struct BlockParams {
    /// Block size in 32-bit words (Nb).
    pub nb: usize,
    pub shifts: [usize; 4],
    pub poly: [u8; 4],
    pub inv_poly: [u8; 4],
}

impl BlockParams {
    pub(crate) fn for_block(block: BlockSize) -> Self {
        let nb = block.words();
        let (poly, inv_poly) = constants::mix_poly(nb);
        Self {
            nb,
            shifts: constants::shift_offsets(nb),
            poly,
            inv_poly,
        }
    }

    pub(crate) fn block_bytes(&self) -> usize {
        self.nb * 4
    }
}

#[inline(always)]
pub(crate) fn add_round_key(state: &mut [u8], round_key: &[u8]) {
    for (s, k) in state.iter_mut().zip(round_key) {
        *s ^= k;
    }
}
