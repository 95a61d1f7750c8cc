//! # Wire Constants & Generator Configuration
//!
//! Every magic number of the three identity formats lives here. These are
//! wire-format facts, not preferences: change a version byte or a checksum
//! length and every identity ever published stops decoding.
//!
//! The only knobs are in [`GeneratorConfig`] (KDF cost and the entropy
//! floor), and even those change which keypair a given secret produces.
//! The defaults are the interoperable values.

use serde::{Deserialize, Serialize};

use crate::crypto::kdf::ScryptCost;

// ---------------------------------------------------------------------------
// Key Material
// ---------------------------------------------------------------------------

/// Curve25519 public key length. Every identity wraps exactly this many bytes.
pub const PUBLIC_KEY_LENGTH: usize = 32;

/// Curve25519 private key length. The private key *is* the KDF seed.
pub const PRIVATE_KEY_LENGTH: usize = 32;

/// Length of the seed produced by the password KDF.
pub const SEED_LENGTH: usize = 32;

// ---------------------------------------------------------------------------
// Version Bytes
// ---------------------------------------------------------------------------

/// Length of a format version prefix.
pub const VERSION_LENGTH: usize = 1;

/// Leading byte of every CurveLock payload.
pub const CURVELOCK_VERSION: u8 = 0x0A;

/// Leading byte of every bytejail payload.
pub const BYTEJAIL_VERSION: u8 = 0x29;

// ---------------------------------------------------------------------------
// Checksums & Raw Lengths
// ---------------------------------------------------------------------------

/// miniLock appends a single BLAKE2s byte. Catches most typos, not all.
pub const MINILOCK_CHECKSUM_LENGTH: usize = 1;

/// bytejail appends four bytes of a double BLAKE2b-512.
pub const BYTEJAIL_CHECKSUM_LENGTH: usize = 4;

/// BLAKE2b digest length used by both bytejail checksum rounds.
pub const BYTEJAIL_HASH_LENGTH: usize = 64;

/// Checksum bytes base58-check appends (first 4 bytes of double SHA-256).
pub const BASE58_CHECK_LENGTH: usize = 4;

/// Raw length of a miniLock identity after plain base58 decoding.
pub const MINILOCK_RAW_LENGTH: usize = PUBLIC_KEY_LENGTH + MINILOCK_CHECKSUM_LENGTH;

/// CurveLock payload before base58-check adds its own checksum.
pub const CURVELOCK_PAYLOAD_LENGTH: usize = VERSION_LENGTH + PUBLIC_KEY_LENGTH;

/// Raw length of a CurveLock identity when decoded as *plain* base58,
/// i.e. with the check bytes still attached. This is what the recognizer sees.
pub const CURVELOCK_RAW_LENGTH: usize = CURVELOCK_PAYLOAD_LENGTH + BASE58_CHECK_LENGTH;

/// Raw length of a bytejail identity after plain base58 decoding.
pub const BYTEJAIL_RAW_LENGTH: usize =
    VERSION_LENGTH + PUBLIC_KEY_LENGTH + BYTEJAIL_CHECKSUM_LENGTH;

// ---------------------------------------------------------------------------
// Key Derivation
// ---------------------------------------------------------------------------

/// Salt length for CurveLock and bytejail: BLAKE2b-256 of the first input.
pub const SALT_HASH_LENGTH: usize = 32;

/// bytejail pre-hashes its second input to a full BLAKE2b-512 digest.
pub const BYTEJAIL_PASSWORD_HASH_LENGTH: usize = 64;

/// miniLock refuses passwords estimated below this many bits of entropy.
pub const MINILOCK_MIN_ENTROPY_BITS: f64 = 100.0;

// ---------------------------------------------------------------------------
// GeneratorConfig
// ---------------------------------------------------------------------------

/// Tunable parameters for keypair generation.
///
/// The defaults reproduce the published formats bit for bit. Lowering the
/// costs is useful in tests and benchmarks; anything else yields keys that
/// no other implementation will derive from the same secret.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneratorConfig {
    /// Minimum estimated password entropy (bits) accepted by miniLock.
    pub min_entropy_bits: f64,

    /// scrypt cost for miniLock (N = 2^17, r = 8, p = 1).
    pub minilock_cost: ScryptCost,

    /// scrypt cost shared by CurveLock and bytejail (libsodium's
    /// "medium slow" limits: N = 2^16, r = 8, p = 4).
    pub box_cost: ScryptCost,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            min_entropy_bits: MINILOCK_MIN_ENTROPY_BITS,
            minilock_cost: ScryptCost::MINILOCK,
            box_cost: ScryptCost::MEDIUM_SLOW,
        }
    }
}

impl GeneratorConfig {
    /// Use the same scrypt cost for every format. Handy for tests, where the
    /// reference costs would dominate the runtime.
    pub fn with_uniform_cost(cost: ScryptCost) -> Self {
        Self {
            minilock_cost: cost,
            box_cost: cost,
            ..Self::default()
        }
    }
}
