mod cipher;
mod core;
mod error;
mod key;
mod modes;
mod util;

pub use cipher::Cipher;
pub use error::{Error, Result};
pub use key::{BlockSize, Key};
pub use util::random_iv;
