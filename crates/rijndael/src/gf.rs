//! Arithmetic in GF(2^8) modulo the AES polynomial x^8 + x^4 + x^3 + x + 1.

/// Low byte of the reducing polynomial 0x11B.
const REDUCTION: u8 = 0x1b;

/// Multiplies `a` by `x` (i.e. by 0x02).
#[inline]
pub const fn xtime(a: u8) -> u8 {
    let shifted = a << 1;
    if a & 0x80 != 0 {
        shifted ^ REDUCTION
    } else {
        shifted
    }
}

/// Multiplies two field elements with the shift-and-add ("peasant") method.
#[inline]
pub fn mul(mut a: u8, mut b: u8) -> u8 {
    let mut product = 0u8;
    for _ in 0..8 {
        if a == 0 || b == 0 {
            break;
        }
        if b & 1 != 0 {
            product ^= a;
        }
        b >>= 1;
        a = xtime(a);
    }
    product
}
