//! # Identity Formats
//!
//! An *identity* is the text form of a Curve25519 public key that people
//! paste into chat windows and email signatures. Three formats are
//! supported, each with its own layout, checksum and key derivation:
//!
//! - [`MiniLock`]: key plus a one-byte BLAKE2s checksum. Generation
//!   enforces a password entropy floor.
//! - [`CurveLock`]: version byte `0x0A` plus key, base58-check encoded.
//! - [`Bytejail`]: version byte `0x29`, key, and a four-byte double
//!   BLAKE2b-512 checksum. Takes two arbitrary inputs rather than an email.
//!
//! All three implement [`IdentityCodec`]; [`KeyFormat`] selects one at
//! runtime and [`KeyGenerator`] bundles them with configuration.
//! [`recognize`] works out which format a string is in.

pub mod bytejail;
pub mod checksum;
pub mod curvelock;
pub mod format;
pub mod generator;
pub mod minilock;
pub mod recognize;
pub mod secret;

pub use bytejail::Bytejail;
pub use checksum::{bytejail_checksum, minilock_checksum};
pub use curvelock::CurveLock;
pub use format::{IdentityCodec, KeyFormat, KeyType, ParseKeyFormatError};
pub use generator::KeyGenerator;
pub use minilock::MiniLock;
pub use recognize::recognize;
pub use secret::SecretInput;
