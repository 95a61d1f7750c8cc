//! # CLI Interface
//!
//! Command-line structure for `nacl-keys`, built with `clap` derive.
//! Subcommands: `generate`, `encode`, `decode`, `recognize` and `version`.

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

use nacl_keys::KeyFormat;

/// Deterministic miniLock, CurveLock and bytejail identities.
///
/// Derives a Curve25519 keypair from an email and passphrase (or two
/// arbitrary strings for bytejail) and prints the public identity.
#[derive(Parser, Debug)]
#[command(
    name = "nacl-keys",
    about = "Deterministic miniLock, CurveLock and bytejail identities",
    version,
    propagate_version = true
)]
pub struct NaclKeysCli {
    /// Log output format on stderr: "pretty" or "json".
    #[arg(long, global = true, env = "NACL_KEYS_LOG_FORMAT", default_value = "pretty")]
    pub log_format: String,

    /// Default log filter when RUST_LOG is unset.
    #[arg(long, global = true, default_value = "warn")]
    pub log_level: String,

    /// JSON file with generator settings (entropy floor, scrypt costs).
    ///
    /// Missing fields fall back to the interoperable defaults.
    #[arg(long, short = 'c', global = true, env = "NACL_KEYS_CONFIG")]
    pub config: Option<PathBuf>,

    /// Print machine-readable JSON instead of plain text.
    #[arg(long, global = true)]
    pub json: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Top-level subcommands.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Derive a keypair and print its identity.
    Generate(GenerateArgs),
    /// Encode a hex public key as an identity.
    Encode(EncodeArgs),
    /// Decode an identity back to its hex public key.
    Decode(DecodeArgs),
    /// Report which format one or more identities are in.
    Recognize(RecognizeArgs),
    /// Print version information and exit.
    Version,
}

/// Arguments for `generate`.
#[derive(Args, Debug)]
pub struct GenerateArgs {
    /// Identity format: minilock, curvelock or bytejail.
    #[arg(long, short = 'f')]
    pub format: KeyFormat,

    /// Email address (miniLock, CurveLock) or first input (bytejail).
    #[arg(long, short = 'e', visible_alias = "input-one")]
    pub email: String,

    /// Passphrase (miniLock, CurveLock) or second input (bytejail).
    ///
    /// Read from the first line of stdin when not given. Passing it on the
    /// command line leaves it in your shell history.
    #[arg(long, env = "NACL_KEYS_PASSPHRASE", hide_env_values = true)]
    pub passphrase: Option<String>,

    /// Also print the private key.
    #[arg(long)]
    pub show_private: bool,
}

/// Arguments for `encode`.
#[derive(Args, Debug)]
pub struct EncodeArgs {
    /// Identity format: minilock, curvelock or bytejail.
    #[arg(long, short = 'f')]
    pub format: KeyFormat,

    /// Hex-encoded 32-byte public key.
    pub public_key: String,
}

/// Arguments for `decode`.
#[derive(Args, Debug)]
pub struct DecodeArgs {
    /// Identity format. Detected automatically when omitted.
    #[arg(long, short = 'f')]
    pub format: Option<KeyFormat>,

    /// The identity to decode.
    pub identity: String,
}

/// Arguments for `recognize`.
#[derive(Args, Debug)]
pub struct RecognizeArgs {
    /// Check only length and version byte, not checksums.
    #[arg(long)]
    pub shape_only: bool,

    /// Identities to classify.
    #[arg(required = true)]
    pub identities: Vec<String>,
}
