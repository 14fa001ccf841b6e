//! Cipher state and the forward/inverse round engines.

use log::{debug, warn};
use zeroize::Zeroizing;

use crate::block::{store_words, words_from_bytes, Word};
use crate::error::{Error, Result};
use crate::params::CipherParams;
use crate::round::{
    add_round_key, inv_mix_columns, inv_shift_rows, inv_sub_bytes, mix_columns, shift_rows,
    sub_bytes,
};
use crate::sbox::{SboxPair, SubstitutionTable};
use crate::schedule::KeySchedule;

/// An expanded key together with the tables and parameters it was built for.
///
/// A `Cipher` never changes after construction, so one instance can be shared
/// by reference across threads to transform independent blocks. Dropping it
/// wipes the key schedule.
#[derive(Clone, Debug)]
pub struct Cipher {
    params: CipherParams,
    sboxes: SboxPair,
    schedule: KeySchedule,
}

impl Cipher {
    /// Builds a cipher with the Rijndael tables.
    pub fn new(params: CipherParams, raw_key: &[Word]) -> Result<Self> {
        Self::with_sboxes(params, SboxPair::RIJNDAEL, raw_key)
    }

    /// Builds a cipher from optional custom tables.
    ///
    /// If either table is `None`, both fall back to the Rijndael pair.
    pub fn build(
        params: CipherParams,
        forward: Option<SubstitutionTable>,
        inverse: Option<SubstitutionTable>,
        raw_key: &[Word],
    ) -> Result<Self> {
        let sboxes = match (forward, inverse) {
            (Some(forward), Some(inverse)) => SboxPair::new(forward, inverse),
            _ => SboxPair::RIJNDAEL,
        };
        Self::with_sboxes(params, sboxes, raw_key)
    }

    /// Builds a cipher with a caller-supplied table pair.
    ///
    /// The tables are used as given: if `sboxes.inverse` does not undo
    /// `sboxes.forward`, decryption will not recover the plaintext. Use
    /// [`SboxPair::is_consistent`] to check a pair beforehand.
    pub fn with_sboxes(params: CipherParams, sboxes: SboxPair, raw_key: &[Word]) -> Result<Self> {
        params.validate()?;
        if !params.is_standard() {
            warn!(
                "non-standard parameters (key_length={}, rounds={}, block_size={}); \
                 no security guarantees apply",
                params.key_length, params.rounds, params.block_size
            );
        }
        let schedule = KeySchedule::expand(raw_key, &params, &sboxes.forward)?;
        debug!(
            "cipher ready: {} rounds over {}-byte blocks",
            params.rounds,
            params.block_bytes()
        );
        Ok(Self {
            params,
            sboxes,
            schedule,
        })
    }

    /// Builds a standard AES cipher from a 16, 24 or 32-byte key.
    pub fn from_key_bytes(key: &[u8]) -> Result<Self> {
        let params = CipherParams::for_key_bytes(key.len())?;
        let words = Zeroizing::new(words_from_bytes(key)?);
        Self::new(params, &words)
    }

    /// Parameters this cipher was built with.
    pub fn params(&self) -> &CipherParams {
        &self.params
    }

    /// Substitution tables in use.
    pub fn sboxes(&self) -> &SboxPair {
        &self.sboxes
    }

    /// The expanded key schedule.
    pub fn schedule(&self) -> &KeySchedule {
        &self.schedule
    }

    /// A zeroed block of the right size for this cipher.
    pub fn new_block(&self) -> Vec<Word> {
        vec![0; self.params.block_size]
    }

    /// Encrypts one block in place.
    pub fn encrypt_block(&self, block: &mut [Word]) -> Result<()> {
        self.check_block(block)?;
        let rounds = self.params.rounds;

        add_round_key(block, self.schedule.round_key(0));

        for round in 1..rounds {
            sub_bytes(block, &self.sboxes);
            shift_rows(block);
            mix_columns(block);
            add_round_key(block, self.schedule.round_key(round));
        }

        sub_bytes(block, &self.sboxes);
        shift_rows(block);
        add_round_key(block, self.schedule.round_key(rounds));

        Ok(())
    }

    /// Decrypts one block in place.
    pub fn decrypt_block(&self, block: &mut [Word]) -> Result<()> {
        self.check_block(block)?;
        let rounds = self.params.rounds;

        add_round_key(block, self.schedule.round_key(rounds));

        for round in (1..rounds).rev() {
            inv_shift_rows(block);
            inv_sub_bytes(block, &self.sboxes);
            add_round_key(block, self.schedule.round_key(round));
            inv_mix_columns(block);
        }

        inv_sub_bytes(block, &self.sboxes);
        inv_shift_rows(block);
        add_round_key(block, self.schedule.round_key(0));

        Ok(())
    }

    /// Encrypts one block given as bytes, in place.
    pub fn encrypt_bytes(&self, block: &mut [u8]) -> Result<()> {
        self.transform_bytes(block, Self::encrypt_block)
    }

    /// Decrypts one block given as bytes, in place.
    pub fn decrypt_bytes(&self, block: &mut [u8]) -> Result<()> {
        self.transform_bytes(block, Self::decrypt_block)
    }

    fn transform_bytes(
        &self,
        block: &mut [u8],
        op: fn(&Self, &mut [Word]) -> Result<()>,
    ) -> Result<()> {
        let expected = self.params.block_bytes();
        if block.len() != expected {
            return Err(Error::BlockLength {
                expected,
                actual: block.len(),
            });
        }
        let mut words = Zeroizing::new(words_from_bytes(block)?);
        op(self, &mut words)?;
        store_words(&words, block);
        Ok(())
    }

    fn check_block(&self, block: &[Word]) -> Result<()> {
        if block.len() != self.params.block_size {
            return Err(Error::BlockLength {
                expected: self.params.block_size,
                actual: block.len(),
            });
        }
        Ok(())
    }
}
