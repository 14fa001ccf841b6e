//! Key expansion.
//!
//! The schedule holds `block_size * (rounds + 1)` words. The first
//! `key_length` words are the raw key; every later word is the word
//! `key_length` positions back XORed with a perturbed copy of its predecessor:
//!
//! - at multiples of `key_length`: RotWord, SubWord, then the round constant;
//! - for keys longer than six words, at offset 4 within a stride: SubWord only;
//! - elsewhere: the predecessor unchanged.

use core::fmt;

use log::debug;
use zeroize::{Zeroize, ZeroizeOnDrop};

use crate::block::Word;
use crate::error::{Error, Result};
use crate::gf::xtime;
use crate::params::CipherParams;
use crate::sbox::{substitute_word, SubstitutionTable};

/// Rotates a word left by one lane; the most significant byte wraps to the bottom.
#[inline]
pub fn rot_word(word: Word) -> Word {
    word.rotate_left(8)
}

/// Round constant for the `step`-th key-length stride (0-based).
///
/// This is `x^step` in GF(2^8) placed in the most significant lane: a single
/// bit walking up the lane for the first eight strides, then reduced
/// (`0x1b`, `0x36`, ...).
pub fn round_constant(step: usize) -> Word {
    let mut rc = 1u8;
    for _ in 0..step {
        rc = xtime(rc);
    }
    Word::from(rc) << 24
}

/// Expanded round-key words, wiped from memory on drop.
#[derive(Clone, PartialEq, Eq)]
pub struct KeySchedule {
    words: Vec<Word>,
    block_size: usize,
}

impl KeySchedule {
    /// Expands `raw_key` into a full schedule using the forward `table`.
    ///
    /// `raw_key` must hold exactly `params.key_length` words.
    pub fn expand(
        raw_key: &[Word],
        params: &CipherParams,
        table: &SubstitutionTable,
    ) -> Result<Self> {
        params.validate()?;
        if raw_key.len() != params.key_length {
            return Err(Error::KeyLength {
                expected: params.key_length,
                actual: raw_key.len(),
            });
        }

        let total = params.schedule_len();
        let mut words: Vec<Word> = Vec::new();
        words
            .try_reserve_exact(total)
            .map_err(|_| Error::Allocation { words: total })?;
        words.extend_from_slice(raw_key);

        let nk = params.key_length;
        let mut rc = 1u8;
        for i in nk..total {
            let mut prev = words[i - 1];
            if i % nk == 0 {
                prev = substitute_word(table, rot_word(prev)) ^ (Word::from(rc) << 24);
                rc = xtime(rc);
            } else if nk > 6 && i % nk == 4 {
                prev = substitute_word(table, prev);
            }
            words.push(words[i - nk] ^ prev);
        }

        debug!(
            "expanded {}-word key into {} schedule words ({} rounds, {}-word blocks)",
            nk, total, params.rounds, params.block_size
        );

        Ok(Self {
            words,
            block_size: params.block_size,
        })
    }

    /// Returns the round key for `round` (`0..=rounds`).
    ///
    /// # Panics
    ///
    /// Panics if `round` is past the final round.
    #[inline]
    pub fn round_key(&self, round: usize) -> &[Word] {
        let start = round * self.block_size;
        &self.words[start..start + self.block_size]
    }

    /// All schedule words in order.
    pub fn words(&self) -> &[Word] {
        &self.words
    }

    /// Number of schedule words.
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Whether the schedule is empty (never true for a validated schedule).
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Number of rounds this schedule covers.
    pub fn rounds(&self) -> usize {
        (self.words.len() / self.block_size).saturating_sub(1)
    }
}

impl Drop for KeySchedule {
    fn drop(&mut self) {
        self.words.zeroize();
    }
}

impl ZeroizeOnDrop for KeySchedule {}

impl fmt::Debug for KeySchedule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("KeySchedule")
            .field("len", &self.words.len())
            .field("block_size", &self.block_size)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::block::words_from_bytes;
    use crate::sbox::FORWARD_SBOX;
    use rand::{Rng, SeedableRng};
    use rand_chacha::ChaCha20Rng;

    fn key(hex_str: &str) -> Vec<Word> {
        words_from_bytes(&hex::decode(hex_str).expect("hex")).expect("whole words")
    }

    #[test]
    fn round_constants_match_fips197() {
        let expected = [0x01, 0x02, 0x04, 0x08, 0x10, 0x20, 0x40, 0x80, 0x1b, 0x36];
        for (step, rc) in expected.iter().enumerate() {
            assert_eq!(round_constant(step), (*rc as Word) << 24);
        }
    }

    #[test]
    fn rot_word_moves_top_lane_to_bottom() {
        assert_eq!(rot_word(0x09cf_4f3c), 0xcf4f_3c09);
    }

    #[test]
    fn aes128_appendix_a1() {
        let schedule = KeySchedule::expand(
            &key("2b7e151628aed2a6abf7158809cf4f3c"),
            &CipherParams::AES_128,
            &FORWARD_SBOX,
        )
        .expect("expand");
        let w = schedule.words();
        assert_eq!(w.len(), 44);
        assert_eq!(w[4], 0xa0fa_fe17);
        assert_eq!(w[5], 0x8854_2cb1);
        assert_eq!(w[43], 0xb663_0ca6);
        assert_eq!(schedule.round_key(10)[3], 0xb663_0ca6);
        assert_eq!(schedule.rounds(), 10);
    }

    #[test]
    fn aes192_appendix_a2() {
        let schedule = KeySchedule::expand(
            &key("8e73b0f7da0e6452c810f32b809079e562f8ead2522c6b7b"),
            &CipherParams::AES_192,
            &FORWARD_SBOX,
        )
        .expect("expand");
        let w = schedule.words();
        assert_eq!(w.len(), 52);
        assert_eq!(w[6], 0xfe0c_91f7);
        assert_eq!(w[51], 0x0100_2202);
    }

    #[test]
    fn aes256_appendix_a3() {
        let schedule = KeySchedule::expand(
            &key("603deb1015ca71be2b73aef0857d77811f352c073b6108d72d9810a30914dff4"),
            &CipherParams::AES_256,
            &FORWARD_SBOX,
        )
        .expect("expand");
        let w = schedule.words();
        assert_eq!(w.len(), 60);
        assert_eq!(w[8], 0x9ba3_5411);
        assert_eq!(w[12], 0xa8b0_9c1a);
        assert_eq!(w[59], 0x706c_631e);
    }

    #[test]
    fn raw_key_is_copied_verbatim_and_expansion_is_deterministic() {
        let mut rng = ChaCha20Rng::from_seed([11u8; 32]);
        for params in CipherParams::STANDARD {
            let raw: Vec<Word> = (0..params.key_length).map(|_| rng.gen()).collect();
            let a = KeySchedule::expand(&raw, &params, &FORWARD_SBOX).expect("expand");
            let b = KeySchedule::expand(&raw, &params, &FORWARD_SBOX).expect("expand");
            assert_eq!(a, b);
            assert_eq!(&a.words()[..params.key_length], raw.as_slice());
        }
    }

    #[test]
    fn schedule_size_follows_block_size_and_rounds() {
        for params in [
            CipherParams::AES_128,
            CipherParams::AES_256,
            CipherParams::new(4, 10, 6),
            CipherParams::new(8, 3, 8),
            CipherParams::new(2, 1, 1),
        ] {
            let raw = vec![0x0102_0304; params.key_length];
            let schedule = KeySchedule::expand(&raw, &params, &FORWARD_SBOX).expect("expand");
            assert_eq!(schedule.len(), params.block_size * (params.rounds + 1));
            assert_eq!(schedule.round_key(params.rounds).len(), params.block_size);
        }
    }

    #[test]
    fn wrong_key_length_is_rejected() {
        let err = KeySchedule::expand(&[0; 5], &CipherParams::AES_128, &FORWARD_SBOX)
            .expect_err("short key");
        assert_eq!(
            err,
            Error::KeyLength {
                expected: 4,
                actual: 5
            }
        );
    }

    #[test]
    fn debug_output_hides_key_material() {
        let schedule =
            KeySchedule::expand(&[0xdead_beef; 4], &CipherParams::AES_128, &FORWARD_SBOX)
                .expect("expand");
        let rendered = format!("{schedule:?}");
        assert!(!rendered.contains("deadbeef"));
        assert!(!rendered.to_lowercase().contains(&0xdead_beefu32.to_string()));
        assert!(rendered.contains("len: 44"));
    }

    #[test]
    fn long_schedules_follow_the_positional_recurrence() {
        // One-word keys put a stride boundary on every word, so the round
        // constant cycles through its full period many times.
        let params = CipherParams::new(1, 20_000, 4);
        let schedule = KeySchedule::expand(&[7], &params, &FORWARD_SBOX).expect("expand");
        let w = schedule.words();
        assert_eq!(w.len(), 80_004);
        for i in 1..200 {
            let prev =
                substitute_word(&FORWARD_SBOX, rot_word(w[i - 1])) ^ round_constant(i - 1);
            assert_eq!(w[i], w[i - 1] ^ prev, "word {i}");
        }
        assert_eq!(schedule.rounds(), 20_000);
    }

    #[test]
    fn unallocatable_schedule_reports_allocation_error() {
        let params = CipherParams::new(4, usize::MAX / 8, 4);
        let err = KeySchedule::expand(&[0; 4], &params, &FORWARD_SBOX).expect_err("too large");
        assert_eq!(
            err,
            Error::Allocation {
                words: params.schedule_len()
            }
        );
    }

    #[test]
    fn schedule_wipes_itself_on_drop_and_stays_usable_while_alive() {
        fn assert_zeroize_on_drop<T: ZeroizeOnDrop>() {}
        assert_zeroize_on_drop::<KeySchedule>();

        let schedule =
            KeySchedule::expand(&[1, 2, 3, 4], &CipherParams::AES_128, &FORWARD_SBOX)
                .expect("expand");
        let copy = schedule.clone();
        drop(copy);
        assert_eq!(schedule.rounds(), 10);
        assert_eq!(schedule.round_key(0), &[1, 2, 3, 4]);
    }
}
