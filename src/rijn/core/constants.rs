//! Parameter-dependent constant tables of the Rijndael specification. Shift offsets
//! and the diffusion polynomial vary with the block size; both are looked up once at
//! context construction rather than branched on inside the round loops.

/// Round-constant sequence consumed by the key schedule, RCON[i] = 2^(i-1) in
/// GF(2^8). Index 0 is never used; the table is long enough for the largest
/// schedule (Nb = 8 with Nk = 4 reaches RCON[29]).
pub(crate) const RCON: [u8; 30] = [
    0x8d, 0x01, 0x02, 0x04, 0x08, 0x10, 0x20, 0x40, 0x80, 0x1b, 0x36, 0x6c, 0xd8, 0xab, 0x4d,
    0x9a, 0x2f, 0x5e, 0xbc, 0x63, 0xc6, 0x97, 0x35, 0x6a, 0xd4, 0xb3, 0x7d, 0xfa, 0xef, 0xc5,
];

/// Per-row ShiftRows rotation amounts for a given block size in words.
pub(crate) fn shift_offsets(nb: usize) -> [usize; 4] {
    match nb {
        8 => [0, 1, 3, 4],
        _ => [0, 1, 2, 3],
    }
}

/// Forward and inverse MixColumns polynomials for a given block size in words.
/// The 256-bit block uses a different diffusion polynomial to preserve its branch
/// number; each inverse is the circulant inverse of the forward polynomial
/// mod x^4 + 1 over GF(2^8).
pub(crate) fn mix_poly(nb: usize) -> ([u8; 4], [u8; 4]) {
    match nb {
        8 => ([0x04, 0x05, 0x06, 0x08], [0x15, 0x48, 0x5d, 0xc7]),
        _ => ([0x02, 0x03, 0x01, 0x01], [0x0e, 0x0b, 0x0d, 0x09]),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rijn::core::gf::gmul;

    #[test]
    fn rcon_is_powers_of_two() {
        for i in 2..RCON.len() {
            assert_eq!(RCON[i], gmul(RCON[i - 1], 0x02));
        }
        assert_eq!(RCON[1], 0x01);
    }

    // circulant product of two first rows: e[k] = sum_i c[i] * d[(k - i) mod 4]
    fn circ_mul(c: [u8; 4], d: [u8; 4]) -> [u8; 4] {
        let mut e = [0u8; 4];
        for k in 0..4 {
            for i in 0..4 {
                e[k] ^= gmul(c[i], d[(k + 4 - i) & 3]);
            }
        }
        e
    }

    #[test]
    fn mix_polys_are_circulant_inverses() {
        for nb in [4, 6, 8] {
            let (fwd, inv) = mix_poly(nb);
            assert_eq!(
                circ_mul(fwd, inv),
                [1, 0, 0, 0],
                "inverse polynomial wrong for nb={nb}"
            );
        }
    }
}
