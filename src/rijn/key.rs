//! Defines the [`Key`] struct, which holds a valid Rijndael key of 128, 192, or 256 bits,
//! and the [`BlockSize`] enum selecting one of the three Rijndael block sizes.
//! Keys can be randomly generated or constructed from an existing byte slice.

use rand::TryRngCore;
use rand::rngs::OsRng;

use crate::rijn::error::{Error, Result};

#[derive(Copy, Clone, PartialEq, Eq, Debug)]
enum KeyBytes {
    K128([u8; 16]),
    K192([u8; 24]),
    K256([u8; 32]),
}

/// Contains a valid Rijndael key. Can be instantiated with a random key, or built from a
/// slice of bytes that is 16, 24, or 32 bytes long.
/// A `Key` object is required to instantiate a [Cipher](crate::Cipher).
///
/// ## Examples
/// ```
/// # fn main() -> rijn::Result<()> {
/// use rijn::Key;
///
/// // Instantiate random keys:
/// let rk_128 = Key::rand_key_128()?;
/// let rk_192 = Key::rand_key_192()?;
/// let rk_256 = Key::rand_key_256()?;
///
/// // Instantiate keys from slice:
/// let key_bytes: [u8; 32] = [0xBA, 0x32, 0x82, 0x9A, 0x43, 0x8A, 0x48, 0xED,
///                            0xC2, 0xEA, 0x10, 0x73, 0x26, 0xF8, 0xA9, 0x62,
///                            0xDE, 0x82, 0x06, 0xBA, 0x53, 0xC2, 0xC7, 0x55,
///                            0x2C, 0x72, 0xC5, 0x37, 0xBF, 0xD4, 0xDB, 0x5E];
/// let my_key_128 = Key::try_from_slice(&key_bytes[..16])?;
/// let my_key_256 = Key::try_from_slice(&key_bytes[..32])?;
///
/// // Internal bytes of Key objects are accessible and match the original key:
/// assert_eq!(my_key_128.as_bytes(), &key_bytes[..16]);
///
/// // Attempting to instantiate with an invalid key size (not 16, 24, or 32 bytes)
/// // returns an InvalidKeyLength error:
/// assert!(Key::try_from_slice(&key_bytes[..20]).is_err());
/// # Ok(())
/// # }
/// ```
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct Key {
    bytes: KeyBytes,
}

impl Key {
    /// Generate a random 128-bit key. Returns Error if OsRng fails.
    pub fn rand_key_128() -> Result<Self> {
        let mut k = [0u8; 16];
        OsRng.try_fill_bytes(&mut k)?;
        Ok(Self {
            bytes: KeyBytes::K128(k),
        })
    }

    /// Generate a random 192-bit key. Returns Error if OsRng fails.
    pub fn rand_key_192() -> Result<Self> {
        let mut k = [0u8; 24];
        OsRng.try_fill_bytes(&mut k)?;
        Ok(Self {
            bytes: KeyBytes::K192(k),
        })
    }

    /// Generate a random 256-bit key. Returns Error if OsRng fails.
    pub fn rand_key_256() -> Result<Self> {
        let mut k = [0u8; 32];
        OsRng.try_fill_bytes(&mut k)?;
        Ok(Self {
            bytes: KeyBytes::K256(k),
        })
    }

    /// Attempts to build a key from a slice of bytes. Will return an InvalidKeyLength error
    /// if the input slice is anything other than 16, 24, or 32 bytes long.
    pub fn try_from_slice(bytes: &[u8]) -> Result<Self> {
        Ok(match bytes.len() {
            16 => Self {
                bytes: KeyBytes::K128(bytes.try_into().unwrap()), // match condition guarantees safe unwrap
            },
            24 => Self {
                bytes: KeyBytes::K192(bytes.try_into().unwrap()),
            },
            32 => Self {
                bytes: KeyBytes::K256(bytes.try_into().unwrap()),
            },
            _ => return Err(Error::InvalidKeyLength { len: bytes.len() }),
        })
    }

    /// Returns a reference to the internal key as an array of bytes.
    pub fn as_bytes(&self) -> &[u8] {
        match &self.bytes {
            KeyBytes::K128(k) => k,
            KeyBytes::K192(k) => k,
            KeyBytes::K256(k) => k,
        }
    }

    /// Key size in 32-bit words (Nk): 4, 6, or 8.
    pub fn words(&self) -> usize {
        self.as_bytes().len() / 4
    }
}

/// Rijndael block size. Unlike AES, which fixes the block at 128 bits, the original
/// Rijndael cipher accepts 128, 192, and 256-bit blocks in any combination with the
/// three key sizes.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub enum BlockSize {
    Bits128,
    Bits192,
    Bits256,
}

impl BlockSize {
    /// Builds a block size from a bit count. Returns an UnsupportedBlockSize error for
    /// anything other than 128, 192, or 256.
    pub fn try_from_bits(bits: u32) -> Result<Self> {
        match bits {
            128 => Ok(Self::Bits128),
            192 => Ok(Self::Bits192),
            256 => Ok(Self::Bits256),
            _ => Err(Error::UnsupportedBlockSize { bits }),
        }
    }

    /// Block size in 32-bit words (Nb): 4, 6, or 8.
    pub const fn words(self) -> usize {
        match self {
            Self::Bits128 => 4,
            Self::Bits192 => 6,
            Self::Bits256 => 8,
        }
    }

    /// Block size in bytes: 16, 24, or 32.
    pub const fn bytes(self) -> usize {
        self.words() * 4
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn block_size_from_bits() -> Result<()> {
        assert_eq!(BlockSize::try_from_bits(128)?, BlockSize::Bits128);
        assert_eq!(BlockSize::try_from_bits(192)?, BlockSize::Bits192);
        assert_eq!(BlockSize::try_from_bits(256)?, BlockSize::Bits256);
        assert!(BlockSize::try_from_bits(160).is_err());
        assert!(BlockSize::try_from_bits(0).is_err());
        Ok(())
    }

    #[test]
    fn block_size_dimensions() {
        assert_eq!(BlockSize::Bits128.words(), 4);
        assert_eq!(BlockSize::Bits192.words(), 6);
        assert_eq!(BlockSize::Bits256.words(), 8);
        assert_eq!(BlockSize::Bits256.bytes(), 32);
    }

    #[test]
    fn key_words() -> Result<()> {
        assert_eq!(Key::try_from_slice(&[0u8; 16])?.words(), 4);
        assert_eq!(Key::try_from_slice(&[0u8; 24])?.words(), 6);
        assert_eq!(Key::try_from_slice(&[0u8; 32])?.words(), 8);
        Ok(())
    }
}
