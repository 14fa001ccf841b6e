//! Encrypts and decrypts one block with each standard key size.

use rijndael::{Cipher, Result};

fn main() -> Result<()> {
    let plaintext = *b"sixteen byte msg";

    for key_len in [16usize, 24, 32] {
        // Deterministic key for reproducibility in the example.
        let key: Vec<u8> = (0..key_len as u8).collect();
        let cipher = Cipher::from_key_bytes(&key)?;

        let mut block = plaintext;
        cipher.encrypt_bytes(&mut block)?;
        println!("AES-{}: {}", key_len * 8, hex::encode(block));

        cipher.decrypt_bytes(&mut block)?;
        assert_eq!(block, plaintext);
    }

    println!("example succeeded; every block decrypted back to the plaintext");
    Ok(())
}
