//! Serialization of the configuration types (requires the `serde` feature).

#![cfg(feature = "serde")]

use rijndael::{Cipher, CipherParams, SboxPair, SubstitutionTable, FORWARD_SBOX};

#[test]
fn params_survive_bincode() {
    for params in CipherParams::STANDARD {
        let bytes = bincode::serialize(&params).expect("serialize");
        let decoded: CipherParams = bincode::deserialize(&bytes).expect("deserialize");
        assert_eq!(decoded, params);
    }
}

#[test]
fn sbox_pair_survives_bincode() {
    let bytes = bincode::serialize(&SboxPair::RIJNDAEL).expect("serialize");
    let decoded: SboxPair = bincode::deserialize(&bytes).expect("deserialize");
    assert_eq!(decoded, SboxPair::RIJNDAEL);
    assert!(decoded.is_consistent());

    let key = [0x0001_0203, 0x0405_0607, 0x0809_0a0b, 0x0c0d_0e0f];
    let cipher = Cipher::with_sboxes(CipherParams::AES_128, decoded, &key).expect("cipher");
    let mut block = [0x0011_2233, 0x4455_6677, 0x8899_aabb, 0xccdd_eeff];
    cipher.encrypt_block(&mut block).expect("encrypt");
    assert_eq!(block, [0x69c4_e0d8, 0x6a7b_0430, 0xd8cd_b780, 0x70b4_c55a]);
}

#[test]
fn single_table_survives_bincode() {
    let bytes = bincode::serialize(&FORWARD_SBOX).expect("serialize");
    assert_eq!(bytes.len(), 256);
    let decoded: SubstitutionTable = bincode::deserialize(&bytes).expect("deserialize");
    assert_eq!(decoded, FORWARD_SBOX);
}
