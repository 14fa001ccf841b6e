//! Round transformations, applied in place to blocks of any width.

use crate::block::{from_lanes, to_lanes, xor_in_place, Word};
use crate::gf::mul;
use crate::sbox::{substitute_block, SboxPair};
use crate::state::{rotate_rows_left, rotate_rows_right};

/// MixColumns coefficients.
const MIX: [[u8; 4]; 4] = [
    [0x02, 0x03, 0x01, 0x01],
    [0x01, 0x02, 0x03, 0x01],
    [0x01, 0x01, 0x02, 0x03],
    [0x03, 0x01, 0x01, 0x02],
];

/// Inverse MixColumns coefficients.
const INV_MIX: [[u8; 4]; 4] = [
    [0x0e, 0x0b, 0x0d, 0x09],
    [0x09, 0x0e, 0x0b, 0x0d],
    [0x0d, 0x09, 0x0e, 0x0b],
    [0x0b, 0x0d, 0x09, 0x0e],
];

/// Applies SubBytes with the forward table of `sboxes`.
#[inline]
pub fn sub_bytes(state: &mut [Word], sboxes: &SboxPair) {
    substitute_block(&sboxes.forward, state);
}

/// Undoes [`sub_bytes`] with the inverse table of `sboxes`.
#[inline]
pub fn inv_sub_bytes(state: &mut [Word], sboxes: &SboxPair) {
    substitute_block(&sboxes.inverse, state);
}

/// Performs ShiftRows in place.
#[inline]
pub fn shift_rows(state: &mut [Word]) {
    rotate_rows_left(state);
}

/// Performs the inverse of ShiftRows in place.
#[inline]
pub fn inv_shift_rows(state: &mut [Word]) {
    rotate_rows_right(state);
}

fn mix_single_column(column: Word, matrix: &[[u8; 4]; 4]) -> Word {
    let a = to_lanes(column);
    let mut out = [0u8; 4];
    for (dst, coeffs) in out.iter_mut().zip(matrix.iter()) {
        *dst = coeffs
            .iter()
            .zip(a.iter())
            .fold(0u8, |acc, (&k, &x)| acc ^ mul(k, x));
    }
    from_lanes(out)
}

/// MixColumns over every column.
#[inline]
pub fn mix_columns(state: &mut [Word]) {
    for column in state.iter_mut() {
        *column = mix_single_column(*column, &MIX);
    }
}

/// Inverse MixColumns over every column.
#[inline]
pub fn inv_mix_columns(state: &mut [Word]) {
    for column in state.iter_mut() {
        *column = mix_single_column(*column, &INV_MIX);
    }
}

/// Adds (XORs) a round key into the state.
#[inline]
pub fn add_round_key(state: &mut [Word], round_key: &[Word]) {
    xor_in_place(state, round_key);
}
