//! One immutable cipher shared by many threads.

use std::thread;

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha20Rng;
use rijndael::{Block128, Cipher, CipherParams};

#[test]
fn threads_share_one_cipher() {
    let mut rng = ChaCha20Rng::from_seed([5u8; 32]);
    let key: [u32; 8] = rng.gen();
    let cipher = Cipher::new(CipherParams::AES_256, &key).expect("cipher");

    let blocks: Vec<Block128> = (0..64).map(|_| rng.gen()).collect();
    let expected: Vec<Block128> = blocks
        .iter()
        .map(|b| {
            let mut out = *b;
            cipher.encrypt_block(&mut out).expect("encrypt");
            out
        })
        .collect();

    let results: Vec<Vec<Block128>> = thread::scope(|scope| {
        let handles: Vec<_> = blocks
            .chunks(16)
            .map(|chunk| {
                let cipher = &cipher;
                scope.spawn(move || {
                    chunk
                        .iter()
                        .map(|b| {
                            let mut out = *b;
                            cipher.encrypt_block(&mut out).expect("encrypt");
                            out
                        })
                        .collect::<Vec<_>>()
                })
            })
            .collect();
        handles
            .into_iter()
            .map(|h| h.join().expect("worker panicked"))
            .collect()
    });

    let flattened: Vec<Block128> = results.into_iter().flatten().collect();
    assert_eq!(flattened, expected);

    for (ct, pt) in expected.iter().zip(blocks.iter()) {
        let mut out = *ct;
        cipher.decrypt_block(&mut out).expect("decrypt");
        assert_eq!(&out, pt);
    }
}

#[test]
fn cipher_is_send_and_sync() {
    fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<Cipher>();
}
