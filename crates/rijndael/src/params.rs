//! Cipher parameters: key length, round count and block size.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::block::WORD_BYTES;
use crate::error::{Error, Result};

/// Static parameters describing a cipher instance.
///
/// Only the three standard triplets ([`AES_128`](Self::AES_128),
/// [`AES_192`](Self::AES_192), [`AES_256`](Self::AES_256)) carry correctness
/// and security guarantees. Other combinations are accepted as long as they
/// pass [`validate`](Self::validate).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct CipherParams {
    /// Number of words in the raw key.
    pub key_length: usize,
    /// Number of rounds.
    pub rounds: usize,
    /// Number of words per block.
    pub block_size: usize,
}

impl CipherParams {
    /// AES-128: 4-word key, 10 rounds.
    pub const AES_128: Self = Self::new(4, 10, 4);
    /// AES-192: 6-word key, 12 rounds.
    pub const AES_192: Self = Self::new(6, 12, 4);
    /// AES-256: 8-word key, 14 rounds.
    pub const AES_256: Self = Self::new(8, 14, 4);

    /// Standard triplets, shortest key first.
    pub const STANDARD: [Self; 3] = [Self::AES_128, Self::AES_192, Self::AES_256];

    /// Constructs parameters from components.
    pub const fn new(key_length: usize, rounds: usize, block_size: usize) -> Self {
        Self {
            key_length,
            rounds,
            block_size,
        }
    }

    /// Picks the standard parameters for a key of `len` bytes.
    pub fn for_key_bytes(len: usize) -> Result<Self> {
        Self::STANDARD
            .into_iter()
            .find(|p| p.key_bytes() == len)
            .ok_or(Error::KeyLength {
                expected: Self::AES_128.key_bytes(),
                actual: len,
            })
    }

    /// Key size in bytes.
    pub const fn key_bytes(&self) -> usize {
        self.key_length * WORD_BYTES
    }

    /// Block size in bytes.
    pub const fn block_bytes(&self) -> usize {
        self.block_size * WORD_BYTES
    }

    /// Number of words in the expanded key schedule.
    pub const fn schedule_len(&self) -> usize {
        self.block_size * (self.rounds + 1)
    }

    /// Whether this is one of the three standard AES triplets.
    pub fn is_standard(&self) -> bool {
        Self::STANDARD.contains(self)
    }

    /// Checks the structural constraints the key schedule depends on.
    pub fn validate(&self) -> Result<()> {
        if self.key_length == 0 {
            return Err(Error::InvalidParameters {
                reason: "key_length must be non-zero",
            });
        }
        if self.rounds == 0 {
            return Err(Error::InvalidParameters {
                reason: "rounds must be non-zero",
            });
        }
        if self.block_size == 0 {
            return Err(Error::InvalidParameters {
                reason: "block_size must be non-zero",
            });
        }
        let schedule_len = self
            .rounds
            .checked_add(1)
            .and_then(|r| r.checked_mul(self.block_size))
            .ok_or(Error::InvalidParameters {
                reason: "key schedule size overflows",
            })?;
        if self.key_length > schedule_len {
            return Err(Error::InvalidParameters {
                reason: "key_length exceeds the key schedule",
            });
        }
        Ok(())
    }
}

impl Default for CipherParams {
    fn default() -> Self {
        Self::AES_128
    }
}
