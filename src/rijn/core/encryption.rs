use super::gf::gmul;
use super::sbox::SBOXES;
use super::{BlockParams, MAX_BLOCK_BYTES, add_round_key};

/// Core Rijndael encryption function. Transforms one block in place using the
/// provided round keys. `state` is column-major (byte i lives at column i/4,
/// row i%4) and must be exactly 4*Nb bytes; the caller upholds this.
#[inline(always)]
pub(crate) fn encrypt_block(state: &mut [u8], round_keys: &[Vec<u8>], p: &BlockParams) {
    debug_assert_eq!(state.len(), p.block_bytes());
    let last_key_idx = round_keys.len() - 1;

    // round 0: add first round key only
    add_round_key(state, &round_keys[0]);

    // perform all rounds except for the last
    for round_key in &round_keys[1..last_key_idx] {
        sub_bytes(state);
        shift_rows(state, p);
        mix_columns(state, &p.poly, p.nb);
        add_round_key(state, round_key);
    }

    // last round skips MixColumns
    sub_bytes(state);
    shift_rows(state, p);
    add_round_key(state, &round_keys[last_key_idx]);
}

/// SubBytes step. Each byte is substituted using the forward S-box.
#[inline(always)]
pub(crate) fn sub_bytes(state: &mut [u8]) {
    let sbox = &SBOXES.forward;
    for byte in state {
        *byte = sbox[*byte as usize];
    }
}

/// ShiftRows step. Row r rotates left by the offset at index r of the shift table
/// for the configured block size.
#[inline(always)]
pub(crate) fn shift_rows(state: &mut [u8], p: &BlockParams) {
    let mut scratch = [0u8; MAX_BLOCK_BYTES];
    let s = &mut scratch[..state.len()];
    s.copy_from_slice(state);

    for row in 0..4 {
        let shift = p.shifts[row];
        for col in 0..p.nb {
            state[col * 4 + row] = s[((col + shift) % p.nb) * 4 + row];
        }
    }
}

/// MixColumns step. Each column, read as a 4-term polynomial over GF(2^8), is
/// multiplied by the configured diffusion polynomial mod x^4 + 1. The matrix is
/// circulant: row r of it is the polynomial rotated right r positions.
#[inline(always)]
pub(crate) fn mix_columns(state: &mut [u8], poly: &[u8; 4], nb: usize) {
    for col in 0..nb {
        let i = col * 4;
        let a = [state[i], state[i + 1], state[i + 2], state[i + 3]];
        for r in 0..4 {
            let mut acc = 0u8;
            for j in 0..4 {
                acc ^= gmul(poly[(j + 4 - r) & 3], a[j]);
            }
            state[i + r] = acc;
        }
    }
}
