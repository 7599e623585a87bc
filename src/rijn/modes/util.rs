use crate::rijn::error::{Error, Result};

// process in parallel if input size is at least 4 KiB
pub(crate) const PARALLEL_THRESHOLD: usize = 4 * 1024;

/// Rejects buffers whose length is not a whole number of blocks.
#[inline]
pub(crate) fn check_aligned(input: &[u8], block_bytes: usize, context: &'static str) -> Result<()> {
    if input.len() % block_bytes != 0 {
        return Err(Error::InvalidLength {
            len: input.len(),
            context,
        });
    }
    Ok(())
}

/// Rejects IVs that are not exactly one block.
#[inline]
pub(crate) fn check_iv(iv: &[u8], block_bytes: usize) -> Result<()> {
    if iv.len() != block_bytes {
        return Err(Error::InvalidLength {
            len: iv.len(),
            context: "IV must be exactly one block",
        });
    }
    Ok(())
}
