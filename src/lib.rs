mod rijn;

pub use rijn::{BlockSize, Cipher, Error, Key, Result, random_iv};
