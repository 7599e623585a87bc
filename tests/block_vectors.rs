//! Single-block known-answer tests across all nine block/key size combinations.
//!
//! The 128-bit block path is AES proper and is checked against FIPS-197 and the
//! classic all-zero vectors. The 192 and 256-bit block paths fall outside AES;
//! their vectors are pinned from an independent reference evaluation of this
//! cipher whose 128-bit block output matches FIPS-197 bit-for-bit.

use hex_literal::hex;
use rijn::{BlockSize, Cipher, Key, Result};

fn cipher_for(key_bytes: &[u8], block: BlockSize) -> Result<Cipher> {
    let key = Key::try_from_slice(key_bytes)?;
    Ok(Cipher::new(&key, block))
}

fn sequential(len: usize) -> Vec<u8> {
    (0..len as u8).collect()
}

#[test]
fn fips197_appendix_c_vectors() -> Result<()> {
    // FIPS-197 appendix C.1 - C.3: key 000102...; plaintext 00112233445566778899aabbccddeeff
    let pt = hex!("00112233445566778899aabbccddeeff");

    let c128 = cipher_for(&sequential(16), BlockSize::Bits128)?;
    assert_eq!(
        c128.encrypt_block(&pt)?,
        hex!("69c4e0d86a7b0430d8cdb78070b4c55a")
    );

    let c192 = cipher_for(&sequential(24), BlockSize::Bits128)?;
    assert_eq!(
        c192.encrypt_block(&pt)?,
        hex!("dda97ca4864cdfe06eaf70a0ec0d7191")
    );

    let c256 = cipher_for(&sequential(32), BlockSize::Bits128)?;
    assert_eq!(
        c256.encrypt_block(&pt)?,
        hex!("8ea2b7ca516745bfeafc49904b496089")
    );

    Ok(())
}

#[test]
fn zero_key_zero_plaintext_all_combinations() -> Result<()> {
    let cases: [(BlockSize, usize, &[u8]); 9] = [
        (
            BlockSize::Bits128,
            16,
            &hex!("66e94bd4ef8a2c3b884cfa59ca342b2e"),
        ),
        (
            BlockSize::Bits128,
            24,
            &hex!("aae06992acbf52a3e8f4a96ec9300bd7"),
        ),
        (
            BlockSize::Bits128,
            32,
            &hex!("dc95c078a2408989ad48a21492842087"),
        ),
        (
            BlockSize::Bits192,
            16,
            &hex!("a92732eb488d8bb98ecd8d95dc9c02e052f250ad369b3849"),
        ),
        (
            BlockSize::Bits192,
            24,
            &hex!("c6348be20007bac4a8bd62890c8147a2432e760e9a9f9ab8"),
        ),
        (
            BlockSize::Bits192,
            32,
            &hex!("17004e806faef168fc9cd56f98f070982075c70c8132b945"),
        ),
        (
            BlockSize::Bits256,
            16,
            &hex!("535f8b9e89935d3959d5dc51e2bcb3a91338f726d8efd0032b2181de27f90850"),
        ),
        (
            BlockSize::Bits256,
            24,
            &hex!("3b53b5dcec6312f03b112bf3d7ca06fe8d140aa04e17339eda9b834bf266bb8c"),
        ),
        (
            BlockSize::Bits256,
            32,
            &hex!("9a2377727d28e548be1ff18a8c7bd4981640c56fe5b004bbba9e58902ce94137"),
        ),
    ];

    for (block, key_len, expected) in cases {
        let cipher = cipher_for(&vec![0u8; key_len], block)?;
        let pt = vec![0u8; block.bytes()];
        let ct = cipher.encrypt_block(&pt)?;
        assert_eq!(
            ct.as_slice(),
            expected,
            "zero vector mismatch for {block:?} with {key_len}-byte key"
        );
        assert_eq!(cipher.decrypt_block(&ct)?, pt);
    }

    Ok(())
}

#[test]
fn sequential_vectors_wide_blocks() -> Result<()> {
    // key = 00 01 02 ..., plaintext = 00 01 02 ... over one block
    let cases: [(BlockSize, usize, &[u8]); 6] = [
        (
            BlockSize::Bits192,
            16,
            &hex!("54030626e366bba5827f46be060b53c75668fc25fb1a6074"),
        ),
        (
            BlockSize::Bits192,
            24,
            &hex!("7a5a73c8fbdbb2aa6866cc951b3e059a631cfefc09c424cf"),
        ),
        (
            BlockSize::Bits192,
            32,
            &hex!("b5e5bb698a33a80e4daed256760f1a5f08cc6f181e67b5bc"),
        ),
        (
            BlockSize::Bits256,
            16,
            &hex!("f4261ad0e6dd05543922eea47de928af452039360586c686add8fc2d606e59ac"),
        ),
        (
            BlockSize::Bits256,
            24,
            &hex!("7a17cb26ce6041804ebfc9c7218c8083a378dea68ec83117f17fa1b09bf622fb"),
        ),
        (
            BlockSize::Bits256,
            32,
            &hex!("9da61be0e4f900e555bb12dee407877d74be4720f9028ec381ca314a3fcef9ec"),
        ),
    ];

    for (block, key_len, expected) in cases {
        let cipher = cipher_for(&sequential(key_len), block)?;
        let pt = sequential(block.bytes());
        let ct = cipher.encrypt_block(&pt)?;
        assert_eq!(
            ct.as_slice(),
            expected,
            "sequential vector mismatch for {block:?} with {key_len}-byte key"
        );
        assert_eq!(cipher.decrypt_block(&ct)?, pt);
    }

    Ok(())
}

#[test]
fn ecb_round_trip_all_combinations() -> Result<()> {
    for block in [BlockSize::Bits128, BlockSize::Bits192, BlockSize::Bits256] {
        for key_len in [16usize, 24, 32] {
            let key_bytes: Vec<u8> = (0..key_len).map(|i| (i * 41 + 9) as u8).collect();
            let cipher = cipher_for(&key_bytes, block)?;

            let plaintext: Vec<u8> = (0..block.bytes() * 5).map(|i| (i * 11 + 2) as u8).collect();
            let ciphertext = cipher.encrypt_ecb(&plaintext)?;
            assert_eq!(ciphertext.len(), plaintext.len());
            assert_ne!(ciphertext, plaintext);
            assert_eq!(cipher.decrypt_ecb(&ciphertext)?, plaintext);
        }
    }
    Ok(())
}

#[test]
fn configuration_errors() {
    assert!(Cipher::from_sizes(&[0u8; 16], 127, 128).is_err());
    assert!(Cipher::from_sizes(&[0u8; 16], 128, 512).is_err());
    assert!(Key::try_from_slice(&[0u8; 17]).is_err());
    assert!(BlockSize::try_from_bits(64).is_err());
}
