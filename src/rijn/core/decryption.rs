use super::encryption::mix_columns;
use super::sbox::SBOXES;
use super::{BlockParams, MAX_BLOCK_BYTES, add_round_key};

/// Core Rijndael decryption function. Transforms one block in place using the
/// provided round keys, consuming them from the last round down to round 0.
/// Same state layout and length precondition as `encrypt_block`.
#[inline(always)]
pub(crate) fn decrypt_block(state: &mut [u8], round_keys: &[Vec<u8>], p: &BlockParams) {
    debug_assert_eq!(state.len(), p.block_bytes());
    let last_key_idx = round_keys.len() - 1;

    add_round_key(state, &round_keys[last_key_idx]);

    for round_key in round_keys[1..last_key_idx].iter().rev() {
        shift_rows_inv(state, p);
        sub_bytes_inv(state);
        add_round_key(state, round_key);
        mix_columns(state, &p.inv_poly, p.nb);
    }

    shift_rows_inv(state, p);
    sub_bytes_inv(state);
    add_round_key(state, &round_keys[0]);
}

/// InvSubBytes step. Each byte is substituted using the inverse S-box.
#[inline(always)]
pub(crate) fn sub_bytes_inv(state: &mut [u8]) {
    let sbox_inv = &SBOXES.inverse;
    for byte in state {
        *byte = sbox_inv[*byte as usize];
    }
}

/// InvShiftRows step. Row r rotates right by the same per-row offset the forward
/// step rotates left.
#[inline(always)]
pub(crate) fn shift_rows_inv(state: &mut [u8], p: &BlockParams) {
    let mut scratch = [0u8; MAX_BLOCK_BYTES];
    let s = &mut scratch[..state.len()];
    s.copy_from_slice(state);

    for row in 0..4 {
        let shift = p.shifts[row];
        for col in 0..p.nb {
            state[((col + shift) % p.nb) * 4 + row] = s[col * 4 + row];
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rijn::core::encryption;
    use crate::rijn::key::BlockSize;

    fn numbered_state(len: usize) -> Vec<u8> {
        (0..len).map(|i| i as u8).collect()
    }

    #[test]
    fn shift_rows_round_trips_every_block_size() {
        for block in [BlockSize::Bits128, BlockSize::Bits192, BlockSize::Bits256] {
            let p = BlockParams::for_block(block);
            let mut state = numbered_state(block.bytes());
            let expected = state.clone();

            encryption::shift_rows(&mut state, &p);
            shift_rows_inv(&mut state, &p);

            assert_eq!(
                state, expected,
                "shift rows inverse does not exactly reverse shift rows for {block:?}"
            );
        }
    }

    #[test]
    fn sub_bytes_round_trips() {
        let mut state = numbered_state(24);
        let expected = state.clone();

        encryption::sub_bytes(&mut state);
        sub_bytes_inv(&mut state);

        assert_eq!(
            state, expected,
            "sub bytes inverse does not exactly reverse sub bytes"
        );
    }

    #[test]
    fn mix_columns_round_trips_every_block_size() {
        for block in [BlockSize::Bits128, BlockSize::Bits192, BlockSize::Bits256] {
            let p = BlockParams::for_block(block);
            let mut state = numbered_state(block.bytes());
            let expected = state.clone();

            mix_columns(&mut state, &p.poly, p.nb);
            mix_columns(&mut state, &p.inv_poly, p.nb);

            assert_eq!(
                state, expected,
                "mix columns inverse does not exactly reverse mix columns for {block:?}"
            );
        }
    }
}
