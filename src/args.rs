use clap::{Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(version, about, arg_required_else_help = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Encrypt input to output
    Encrypt(EncryptArgs),

    /// Decrypt input to output
    Decrypt(CommonArgs),
}

#[derive(Args, Debug)]
#[command(arg_required_else_help = true)]
pub struct CommonArgs {
    /// Mode of operation.
    #[arg(
        short = 'm',
        long = "mode",
        value_enum,
        default_value_t = Mode::ModeCBC,
    )]
    pub mode: Mode,

    /// Cipher block size in bits.
    #[arg(
        short = 'b',
        long = "block-size",
        value_enum,
        default_value_t = BlockBits::Bits128,
    )]
    pub block_size: BlockBits,

    /// Input file path.
    #[arg(short = 'i', long = "input")]
    pub input: PathBuf,

    /// Output file path.
    #[arg(short = 'o', long = "output")]
    pub output: PathBuf,

    /// Key file path.
    #[arg(short = 'k', long = "key")]
    pub key: PathBuf,
}

#[derive(Args, Debug)]
#[command(arg_required_else_help = true)]
pub struct EncryptArgs {
    #[command(flatten)]
    pub common: CommonArgs,

    /// Generate a random key (written to path specified by key)
    #[arg(long = "gen-key")]
    pub gen_key: bool,

    /// Only valid with --gen-key.
    #[arg(
        long = "key-size",
        value_enum,
        default_value_t = KeyBits::Bits256,
        requires = "gen_key"
    )]
    pub key_size: KeyBits,
}

#[derive(Copy, Clone, Debug, ValueEnum, Eq, PartialEq)]
pub enum KeyBits {
    #[value(name = "128")]
    Bits128,
    #[value(name = "192")]
    Bits192,
    #[value(name = "256")]
    Bits256,
}

#[derive(Copy, Clone, Debug, ValueEnum, Eq, PartialEq)]
pub enum BlockBits {
    #[value(name = "128")]
    Bits128,
    #[value(name = "192")]
    Bits192,
    #[value(name = "256")]
    Bits256,
}

#[derive(Copy, Clone, Debug, ValueEnum, Eq, PartialEq)]
pub enum Mode {
    #[value(name = "ecb")]
    ModeECB,
    #[value(name = "cbc")]
    ModeCBC,
}
