use rand::TryRngCore;
use rand::rngs::OsRng;

use crate::rijn::error::Result;
use crate::rijn::key::BlockSize;

/// Generates a random IV of exactly one block for the given block size.
/// Returns Error if OsRng fails.
pub fn random_iv(block: BlockSize) -> Result<Vec<u8>> {
    let mut iv = vec![0u8; block.bytes()];
    OsRng.try_fill_bytes(&mut iv)?;
    Ok(iv)
}
