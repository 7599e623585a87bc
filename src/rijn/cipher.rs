use crate::rijn::core::{self, BlockParams, RCON, SBOXES};
use crate::rijn::error::{Error, Result};
use crate::rijn::key::{BlockSize, Key};
use crate::rijn::modes::*;

/// Provides encryption and decryption for the original Rijndael cipher in single-block,
/// [ECB](Cipher::encrypt_ecb), and [CBC](Cipher::encrypt_cbc) forms, at any combination
/// of 128/192/256-bit block and key sizes. Instantiated from a [Key] and a [BlockSize];
/// the key is expanded into round keys stored in the instance. A `Cipher` is immutable
/// once built and may be shared freely across threads.
pub struct Cipher {
    params: BlockParams,
    rounds: usize,
    round_keys: Vec<Vec<u8>>,
}

impl Cipher {
    /// Expands the provided key for the chosen block size and stores the schedule in
    /// the returned instance.
    pub fn new(key: &Key, block: BlockSize) -> Self {
        let params = BlockParams::for_block(block);
        let round_keys = Self::expand_key(key, params.nb);
        Self {
            rounds: round_keys.len() - 1,
            params,
            round_keys,
        }
    }

    /// Builds a cipher from raw key bytes and explicit bit sizes, mirroring the
    /// classic `set_key(key, keybits, blockbits)` surface. Fails on any size outside
    /// {128, 192, 256} or a key slice that does not match its declared size.
    pub fn from_sizes(key: &[u8], key_bits: u32, block_bits: u32) -> Result<Self> {
        if !matches!(key_bits, 128 | 192 | 256) {
            return Err(Error::UnsupportedKeySize { bits: key_bits });
        }
        if key.len() * 8 != key_bits as usize {
            return Err(Error::InvalidKeyLength { len: key.len() });
        }
        let block = BlockSize::try_from_bits(block_bits)?;
        let key = Key::try_from_slice(key)?;
        Ok(Self::new(&key, block))
    }

    /// Configured block size in bytes (16, 24, or 32).
    pub fn block_bytes(&self) -> usize {
        self.params.block_bytes()
    }

    /// Number of transformation rounds (Nr = max(Nb, Nk) + 6).
    pub fn rounds(&self) -> usize {
        self.rounds
    }

    /// Encrypts exactly one block. The input must be exactly [block_bytes](Cipher::block_bytes)
    /// long; anything else returns an InvalidLength error.
    pub fn encrypt_block(&self, plaintext: &[u8]) -> Result<Vec<u8>> {
        let mut block = self.checked_block(plaintext)?;
        core::encrypt_block(&mut block, &self.round_keys, &self.params);
        Ok(block)
    }

    /// Decrypts exactly one block. Structural inverse of [encrypt_block](Cipher::encrypt_block).
    pub fn decrypt_block(&self, ciphertext: &[u8]) -> Result<Vec<u8>> {
        let mut block = self.checked_block(ciphertext)?;
        core::decrypt_block(&mut block, &self.round_keys, &self.params);
        Ok(block)
    }

    /// **Electronic codebook** encryption over a block-aligned buffer, each block
    /// entirely independent. No padding is applied; the input length must be a
    /// multiple of the block size. **Vulnerable to pattern emergence in the ciphertext.**
    ///
    /// Large inputs are processed in parallel; output is identical either way.
    pub fn encrypt_ecb(&self, plaintext: &[u8]) -> Result<Vec<u8>> {
        if plaintext.len() >= PARALLEL_THRESHOLD {
            ecb_core_enc_parallel(plaintext, &self.round_keys, &self.params)
        } else {
            ecb_core_enc_serial(plaintext, &self.round_keys, &self.params)
        }
    }

    /// **Electronic codebook** decryption over a block-aligned buffer.
    pub fn decrypt_ecb(&self, ciphertext: &[u8]) -> Result<Vec<u8>> {
        if ciphertext.len() >= PARALLEL_THRESHOLD {
            ecb_core_dec_parallel(ciphertext, &self.round_keys, &self.params)
        } else {
            ecb_core_dec_serial(ciphertext, &self.round_keys, &self.params)
        }
    }

    /// **Cipher block chaining** encryption. Each plaintext block is XORed with the
    /// previous ciphertext block (the IV for the first) before encryption, so the
    /// chain is inherently sequential. The IV must be exactly one block and the input
    /// a multiple of the block size.
    ///
    /// The IV is read-only: to stream a single logical chain across multiple calls,
    /// pass the last ciphertext block of the previous chunk as the next call's IV.
    pub fn encrypt_cbc(&self, iv: &[u8], plaintext: &[u8]) -> Result<Vec<u8>> {
        cbc_core_enc_serial(plaintext, iv, &self.round_keys, &self.params)
    }

    /// **Cipher block chaining** decryption. Each ciphertext block depends only on its
    /// own bytes and the preceding ciphertext block, both available up front, so large
    /// inputs are decrypted block-parallel; output is identical to the serial path.
    pub fn decrypt_cbc(&self, iv: &[u8], ciphertext: &[u8]) -> Result<Vec<u8>> {
        if ciphertext.len() >= PARALLEL_THRESHOLD {
            cbc_core_dec_parallel(ciphertext, iv, &self.round_keys, &self.params)
        } else {
            cbc_core_dec_serial(ciphertext, iv, &self.round_keys, &self.params)
        }
    }

    /// Getter for internal round keys. Returned as a slice of 4*Nb-byte blocks.
    pub(crate) fn get_round_keys(&self) -> &[Vec<u8>] {
        &self.round_keys
    }

    pub(crate) fn params(&self) -> &BlockParams {
        &self.params
    }

    fn checked_block(&self, input: &[u8]) -> Result<Vec<u8>> {
        if input.len() != self.block_bytes() {
            return Err(Error::InvalidLength {
                len: input.len(),
                context: "input must be exactly one block",
            });
        }
        Ok(input.to_vec())
    }

    /// Rijndael key schedule. Expands an Nk-word key into Nb * (Nr + 1) words, then
    /// regroups them into Nr + 1 round-key blocks of Nb words each.
    ///
    /// Variable names match FIPS-197 where the two coincide:
    /// - Nk: number of 32-bit words comprising the key
    /// - Nb: number of 32-bit words comprising a block
    /// - Nr: number of rounds, max(Nb, Nk) + 6
    /// - w:  the expanded word array
    fn expand_key(key: &Key, nb: usize) -> Vec<Vec<u8>> {
        let key = key.as_bytes();
        let sbox = &SBOXES.forward;

        let nk = key.len() / 4;
        let nr = nk.max(nb) + 6;
        let nw = (nr + 1) * nb; // total number of words resulting from expansion

        // initialise w, vector comprising 4-byte words of the schedule
        let mut w: Vec<[u8; 4]> = vec![[0u8; 4]; nw];

        // first nk words of w are filled with the initial key
        for i in 0..key.len() {
            w[i / 4][i % 4] = key[i];
        }

        let mut temp = w[nk - 1];
        for i in nk..nw {
            if i % nk == 0 {
                // rot_word, sub_word, and rcon on temp
                temp = [
                    sbox[temp[1] as usize] ^ RCON[i / nk],
                    sbox[temp[2] as usize],
                    sbox[temp[3] as usize],
                    sbox[temp[0] as usize],
                ];
            } else if nk > 6 && i % nk == 4 {
                // additional substitution for 256-bit keys only
                temp = [
                    sbox[temp[0] as usize],
                    sbox[temp[1] as usize],
                    sbox[temp[2] as usize],
                    sbox[temp[3] as usize],
                ];
            }

            // w[i] = temp XOR w[i - nk]
            w[i] = xor_words(&temp, &w[i - nk]);
            temp = w[i];
        }

        // regroup words into column-major round-key blocks of nb words each
        let mut round_keys = vec![vec![0u8; 4 * nb]; nr + 1];
        for (round, rk) in round_keys.iter_mut().enumerate() {
            for col in 0..nb {
                let word = w[round * nb + col];
                for row in 0..4 {
                    rk[col * 4 + row] = word[row];
                }
            }
        }

        round_keys
    }
}

#[inline(always)]
fn xor_words(a: &[u8; 4], b: &[u8; 4]) -> [u8; 4] {
    [a[0] ^ b[0], a[1] ^ b[1], a[2] ^ b[2], a[3] ^ b[3]]
}
