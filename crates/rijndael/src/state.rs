//! Block geometry: a block viewed as a 4-row byte matrix.
//!
//! Word `c` of the block is column `c`, and lane `r` of that word is the cell
//! at row `r`. Rotations move cells within a row and never change their values.

use crate::block::{lane, with_lane, Word};

/// Number of rows in the state matrix.
pub const ROWS: usize = 4;

/// Reads the cell at (`row`, `col`).
#[inline]
pub fn cell(block: &[Word], row: usize, col: usize) -> u8 {
    lane(block[col], row)
}

/// Writes the cell at (`row`, `col`).
#[inline]
pub fn set_cell(block: &mut [Word], row: usize, col: usize, value: u8) {
    block[col] = with_lane(block[col], row, value);
}

fn swap_cells(block: &mut [Word], row: usize, a: usize, b: usize) {
    let va = cell(block, row, a);
    let vb = cell(block, row, b);
    set_cell(block, row, a, vb);
    set_cell(block, row, b, va);
}

fn reverse_row(block: &mut [Word], row: usize, mut start: usize, mut end: usize) {
    while start + 1 < end {
        end -= 1;
        swap_cells(block, row, start, end);
        start += 1;
    }
}

/// Cyclically shifts `row` left by `by` columns.
pub fn rotate_row_left(block: &mut [Word], row: usize, by: usize) {
    let width = block.len();
    if width == 0 {
        return;
    }
    let by = by % width;
    if by == 0 {
        return;
    }
    reverse_row(block, row, 0, by);
    reverse_row(block, row, by, width);
    reverse_row(block, row, 0, width);
}

/// Cyclically shifts `row` right by `by` columns.
pub fn rotate_row_right(block: &mut [Word], row: usize, by: usize) {
    let width = block.len();
    if width == 0 {
        return;
    }
    rotate_row_left(block, row, width - by % width);
}

/// ShiftRows: row `r` moves left by `r` columns.
#[inline]
pub fn rotate_rows_left(block: &mut [Word]) {
    for row in 1..ROWS {
        rotate_row_left(block, row, row);
    }
}

/// Inverse ShiftRows: row `r` moves right by `r` columns.
#[inline]
pub fn rotate_rows_right(block: &mut [Word]) {
    for row in 1..ROWS {
        rotate_row_right(block, row, row);
    }
}
