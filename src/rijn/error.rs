use rand::rand_core;
use thiserror::Error;

/// Rijndael Result type.
pub type Result<T> = std::result::Result<T, Error>;

/// Rijndael Error type.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum Error {
    /// Attempted to configure a cipher with a key size that is not 128, 192, or 256 bits.
    #[error("unsupported key size: {bits} bits (expected 128, 192, or 256)")]
    UnsupportedKeySize { bits: u32 },

    /// Attempted to configure a cipher with a block size that is not 128, 192, or 256 bits.
    #[error("unsupported block size: {bits} bits (expected 128, 192, or 256)")]
    UnsupportedBlockSize { bits: u32 },

    /// Attempted to instantiate a key from a slice that is not 16, 24, or 32 bytes long.
    #[error("invalid key length: {len} bytes (expected 16, 24, or 32)")]
    InvalidKeyLength { len: usize },

    /// Provided a buffer whose length does not fit the configured block size.
    #[error("invalid buffer length: {len} bytes ({context})")]
    InvalidLength { len: usize, context: &'static str },

    /// OS RNG failed during random key or IV generation.
    #[error("OS RNG failed in random key/IV generation")]
    Rng(#[from] rand_core::OsError),
}
