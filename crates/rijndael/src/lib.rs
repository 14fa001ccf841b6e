//! Reference Rijndael/AES block cipher.
//!
//! This crate follows FIPS-197 and provides:
//! - GF(2^8) arithmetic and the Rijndael substitution tables.
//! - Key expansion for any key length / round count / block width, with the
//!   standard AES-128, AES-192 and AES-256 triplets as named presets.
//! - Single-block encryption and decryption in place.
//!
//! Modes of operation, padding and key management are left to the caller.
//!
//! The implementation aims for clarity and testability rather than constant-time
//! guarantees; table lookups and field multiplication depend on secret data, so
//! it should not be treated as side-channel hardened.
//!
//! ```
//! use rijndael::Cipher;
//!
//! let key: Vec<u8> = (0u8..16).collect();
//! let cipher = Cipher::from_key_bytes(&key)?;
//!
//! let mut block = [0x0011_2233, 0x4455_6677, 0x8899_aabb, 0xccdd_eeff];
//! cipher.encrypt_block(&mut block)?;
//! assert_eq!(block, [0x69c4_e0d8, 0x6a7b_0430, 0xd8cd_b780, 0x70b4_c55a]);
//!
//! cipher.decrypt_block(&mut block)?;
//! assert_eq!(block[0], 0x0011_2233);
//! # Ok::<(), rijndael::Error>(())
//! ```

#![forbid(unsafe_code)]
#![deny(missing_docs)]

pub mod block;
mod cipher;
mod error;
pub mod gf;
mod params;
pub mod round;
pub mod sbox;
mod schedule;
pub mod state;

pub use crate::block::{Block128, Word};
pub use crate::cipher::Cipher;
pub use crate::error::{Error, Result};
pub use crate::params::CipherParams;
pub use crate::sbox::{SboxPair, SubstitutionTable, FORWARD_SBOX, INVERSE_SBOX};
pub use crate::schedule::{round_constant, rot_word, KeySchedule};
