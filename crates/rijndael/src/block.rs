//! Word and block representation helpers.
//!
//! A [`Word`] carries four byte lanes, most-significant byte first: lane 0 is
//! bits 31..24 and lane 3 is bits 7..0. Byte streams are marshalled into words
//! big-endian so that ciphertexts line up with the published test vectors.

use crate::error::{Error, Result};

/// Four byte lanes handled as one value for XOR.
pub type Word = u32;

/// Number of byte lanes in a [`Word`].
pub const WORD_BYTES: usize = 4;

/// Block of the standard AES variant (four words, 16 bytes).
pub type Block128 = [Word; 4];

/// Returns lane `index` (0 = most significant) of `word`.
#[inline]
pub const fn lane(word: Word, index: usize) -> u8 {
    (word >> (24 - 8 * index)) as u8
}

/// Replaces lane `index` of `word` with `value`.
#[inline]
pub const fn with_lane(word: Word, index: usize, value: u8) -> Word {
    let shift = 24 - 8 * index;
    (word & !(0xff << shift)) | ((value as Word) << shift)
}

/// Assembles a word from its lanes, lane 0 first.
#[inline]
pub const fn from_lanes(lanes: [u8; 4]) -> Word {
    Word::from_be_bytes(lanes)
}

/// Splits a word into its lanes, lane 0 first.
#[inline]
pub const fn to_lanes(word: Word) -> [u8; 4] {
    word.to_be_bytes()
}

/// XORs `rhs` into `dst` word by word.
///
/// # Panics
///
/// Panics if the slices differ in length.
#[inline]
pub fn xor_in_place(dst: &mut [Word], rhs: &[Word]) {
    assert_eq!(dst.len(), rhs.len(), "xor_in_place length mismatch");
    for (d, r) in dst.iter_mut().zip(rhs.iter()) {
        *d ^= *r;
    }
}

/// Packs a byte stream into words, four bytes per word, big-endian.
pub fn words_from_bytes(bytes: &[u8]) -> Result<Vec<Word>> {
    if bytes.len() % WORD_BYTES != 0 {
        return Err(Error::ByteLength {
            actual: bytes.len(),
        });
    }
    Ok(bytes
        .chunks_exact(WORD_BYTES)
        .map(|chunk| from_lanes([chunk[0], chunk[1], chunk[2], chunk[3]]))
        .collect())
}

/// Unpacks words into a byte stream, big-endian.
pub fn bytes_from_words(words: &[Word]) -> Vec<u8> {
    words.iter().flat_map(|w| to_lanes(*w)).collect()
}

/// Writes `words` into `out`, which must hold exactly `4 * words.len()` bytes.
pub(crate) fn store_words(words: &[Word], out: &mut [u8]) {
    for (word, chunk) in words.iter().zip(out.chunks_exact_mut(WORD_BYTES)) {
        chunk.copy_from_slice(&to_lanes(*word));
    }
}
