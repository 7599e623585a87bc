mod cbc;
mod ecb;
mod util;

pub(crate) use cbc::{cbc_core_dec_parallel, cbc_core_dec_serial, cbc_core_enc_serial};
pub(crate) use ecb::{
    ecb_core_dec_parallel, ecb_core_dec_serial, ecb_core_enc_parallel, ecb_core_enc_serial,
};
pub(crate) use util::PARALLEL_THRESHOLD;

#[cfg(test)]
pub(crate) use util::test_util;
