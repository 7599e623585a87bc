mod args;

use args::{Cli, Commands};
use clap::Parser;

use std::fs;
use std::time::Instant;

use thiserror::Error;

use rijn::{BlockSize, Cipher, Key, random_iv};

#[derive(Debug, Error)]
pub enum CliError {
    #[error("ciphertext too short to contain a CBC IV")]
    MissingIv,

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Rijn(#[from] rijn::Error),
}

fn main() {
    if let Err(e) = rijn_cli() {
        eprintln!("error: {e}");
    }
}

fn block_size(arg: args::BlockBits) -> BlockSize {
    match arg {
        args::BlockBits::Bits128 => BlockSize::Bits128,
        args::BlockBits::Bits192 => BlockSize::Bits192,
        args::BlockBits::Bits256 => BlockSize::Bits256,
    }
}

fn rijn_cli() -> Result<(), CliError> {
    let args = Cli::parse();

    match args.command {
        Commands::Encrypt(enc) => {
            // common args:
            let input_path = enc.common.input; // move ownership
            let output_path = enc.common.output;
            let key_path = enc.common.key;
            let mode = enc.common.mode;
            let block = block_size(enc.common.block_size);

            // read plaintext from input_path
            let plaintext = fs::read(input_path)?;

            // read or generate key
            let key_bytes = if enc.gen_key {
                let rand_key = match enc.key_size {
                    args::KeyBits::Bits128 => Key::rand_key_128()?,
                    args::KeyBits::Bits192 => Key::rand_key_192()?,
                    args::KeyBits::Bits256 => Key::rand_key_256()?,
                };
                fs::write(key_path, rand_key.as_bytes())?;
                rand_key.as_bytes().to_vec()
            } else {
                // read key from key_path
                fs::read(key_path)?
            };
            let key = Key::try_from_slice(&key_bytes)?;
            let cipher = Cipher::new(&key, block);

            let start = Instant::now();

            // encrypt plaintext and write output
            let ciphertext = match mode {
                args::Mode::ModeECB => cipher.encrypt_ecb(&plaintext)?,
                args::Mode::ModeCBC => {
                    // generate a fresh IV and prepend it to the ciphertext
                    let iv = random_iv(block)?;
                    let mut out = iv.clone();
                    out.extend_from_slice(&cipher.encrypt_cbc(&iv, &plaintext)?);
                    out
                }
            };

            let duration = start.elapsed();

            fs::write(output_path, &ciphertext)?;
            println!(
                "Encrypted {} bytes in {} ms",
                plaintext.len(),
                duration.as_millis()
            );
            Ok(())
        }
        Commands::Decrypt(common) => {
            let input_path = common.input; // move ownership
            let output_path = common.output;
            let key_path = common.key;
            let mode = common.mode;
            let block = block_size(common.block_size);

            // read inputs
            let ciphertext = fs::read(input_path)?;
            let key_bytes = fs::read(key_path)?;
            let key = Key::try_from_slice(&key_bytes)?;
            let cipher = Cipher::new(&key, block);

            let start = Instant::now();

            // decrypt ciphertext and write output
            let plaintext = match mode {
                args::Mode::ModeECB => cipher.decrypt_ecb(&ciphertext)?,
                args::Mode::ModeCBC => {
                    // extract the prepended IV
                    if ciphertext.len() < block.bytes() {
                        return Err(CliError::MissingIv);
                    }
                    let (iv, ciphertext) = ciphertext.split_at(block.bytes());
                    cipher.decrypt_cbc(iv, ciphertext)?
                }
            };

            let duration = start.elapsed();

            fs::write(output_path, &plaintext)?;
            println!(
                "Decrypted {} bytes in {} ms",
                plaintext.len(),
                duration.as_millis()
            );

            Ok(())
        }
    }
}
