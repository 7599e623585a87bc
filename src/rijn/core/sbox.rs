//! Substitution box construction. The forward and inverse tables are derived from
//! multiplicative inverses in GF(2^8) composed with the fixed affine transform,
//! rather than pasted in as literal constants, so their correctness follows from
//! the field arithmetic alone.

use std::sync::LazyLock;

use super::gf::ginv;

pub(crate) struct SBoxes {
    pub forward: [u8; 256],
    pub inverse: [u8; 256],
}

/// Built once per process on first use; referentially constant afterwards.
pub(crate) static SBOXES: LazyLock<SBoxes> = LazyLock::new(build_sboxes);

fn build_sboxes() -> SBoxes {
    let mut forward = [0u8; 256];
    let mut inverse = [0u8; 256];

    for v in 0..=255u8 {
        let b = ginv(v);
        // affine transform: s = b ^ (b <<< 1) ^ (b <<< 2) ^ (b <<< 3) ^ (b <<< 4) ^ 0x63
        let s = b
            ^ b.rotate_left(1)
            ^ b.rotate_left(2)
            ^ b.rotate_left(3)
            ^ b.rotate_left(4)
            ^ 0x63;
        forward[v as usize] = s;
        inverse[s as usize] = v;
    }

    SBoxes { forward, inverse }
}
