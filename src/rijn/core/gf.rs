//! Arithmetic in GF(2^8) modulo the Rijndael polynomial x^8 + x^4 + x^3 + x + 1.

/// Carry-less multiplication of two field elements, reducing each overflow bit by
/// XOR with 0x1B. Branchless mask technique as in <https://crypto.stackexchange.com/a/71206>.
#[inline(always)]
pub(crate) fn gmul(mut a: u8, mut b: u8) -> u8 {
    let mut p = 0u8;
    for _ in 0..8 {
        p ^= a & 0u8.wrapping_sub(b & 1);
        let hi = a >> 7;
        a = (a << 1) ^ (0x1B & 0u8.wrapping_sub(hi));
        b >>= 1;
    }
    p
}

/// Multiplicative inverse in GF(2^8), with 0 mapping to 0 by convention.
/// Computed as a^254 by square-and-multiply (the group of units has order 255).
pub(crate) fn ginv(a: u8) -> u8 {
    if a == 0 {
        return 0;
    }
    let mut result = 1u8;
    let mut base = a;
    let mut exp = 254u8;
    while exp > 0 {
        if exp & 1 == 1 {
            result = gmul(result, base);
        }
        base = gmul(base, base);
        exp >>= 1;
    }
    result
}
