//! # Cryptographic Primitives
//!
//! Everything below the identity codecs: hashing, the password KDF and the
//! seed-to-keypair step. Each function is a thin, typed wrapper around an
//! audited crate:
//!
//! - **BLAKE2s / BLAKE2b** (`blake2`): checksums and secret pre-hashing.
//! - **scrypt** (`scrypt`): the memory-hard seed derivation.
//! - **X25519** (`x25519-dalek`): public key from seed, box-compatible.
//!
//! Nothing in here knows about identity formats. If you find yourself
//! adding a version byte to this module, you are in the wrong file.

pub mod hash;
pub mod kdf;
pub mod keys;

pub use hash::{blake2b, blake2s_256, blake2s_var};
pub use kdf::{derive_seed, ScryptCost};
pub use keys::BoxKeyPair;
