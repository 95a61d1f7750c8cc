// Copyright (c) 2026 ALAS Technology. MIT License.
// See LICENSE for details.

//! # nacl-keys: Deterministic Curve25519 Identities
//!
//! Turns something a human can remember (an email and a passphrase, or any
//! two strings) into a Curve25519 box keypair, and renders the public half
//! as one of three base58 identity formats that circulated in the
//! miniLock-era tooling:
//!
//! | Format    | Raw layout                        | Raw bytes | Checksum                       |
//! |-----------|-----------------------------------|-----------|--------------------------------|
//! | miniLock  | `key ‖ blake2s₁(key)`             | 33        | 1-byte BLAKE2s                 |
//! | CurveLock | `0x0A ‖ key` + base58-check bytes | 37        | double-SHA256 (base58-check)   |
//! | bytejail  | `0x29 ‖ key ‖ sum₄`               | 37        | BLAKE2b-512², first 4 bytes    |
//!
//! ## Architecture
//!
//! - **config**: Wire constants and the tunable [`GeneratorConfig`].
//! - **crypto**: Hashing, scrypt and the seed-to-keypair step. Thin wrappers
//!   over audited crates, nothing clever.
//! - **identity**: The codecs, the checksum engine and the format recognizer.
//! - **validation**: Email syntax check and the pluggable entropy gate.
//! - **error**: One error type for the whole crate.
//!
//! ## Quick start
//!
//! ```
//! use nacl_keys::{KeyFormat, KeyGenerator, KeyType};
//!
//! let generator = KeyGenerator::default();
//! let key = [7u8; 32];
//!
//! let id = generator.encode(KeyFormat::Bytejail, &key).unwrap();
//! assert_eq!(generator.recognize(&id), KeyType::Bytejail);
//! assert_eq!(generator.decode(KeyFormat::Bytejail, &id).unwrap(), key);
//! ```

pub mod config;
pub mod crypto;
pub mod error;
pub mod identity;
pub mod validation;

pub use config::GeneratorConfig;
pub use crypto::keys::BoxKeyPair;
pub use error::{DecodeFailure, IdentityError};
pub use identity::{
    recognize, Bytejail, CurveLock, IdentityCodec, KeyFormat, KeyGenerator, KeyType, MiniLock,
    SecretInput,
};
pub use validation::{CharsetEstimator, EntropyEstimator, PatternEstimator};
