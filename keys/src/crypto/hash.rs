//! # Hashing Utilities
//!
//! Two members of the BLAKE2 family, because the formats we speak picked
//! them years ago and we are not in a position to argue:
//!
//! - **BLAKE2s**: miniLock pre-hashes the password with BLAKE2s-256 and
//!   checksums identities with a BLAKE2s configured for a *1-byte* digest.
//! - **BLAKE2b**: libsodium's `crypto_generichash`. CurveLock and bytejail
//!   use it with 32- and 64-byte outputs for salts, pre-hashing and the
//!   bytejail checksum.
//!
//! ## Variable output is not truncation
//!
//! BLAKE2 mixes the requested digest length into its parameter block, so a
//! 1-byte BLAKE2s is *not* the first byte of BLAKE2s-256. Every function
//! here that takes an output length uses the variable-output mode for
//! exactly that reason.

use blake2::digest::{Update, VariableOutput};
use blake2::{Blake2bVar, Blake2s256, Blake2sVar, Digest};

/// BLAKE2s with a 32-byte digest and no key.
pub fn blake2s_256(data: &[u8]) -> [u8; 32] {
    Blake2s256::digest(data).into()
}

/// BLAKE2s with an `N`-byte digest, `1 <= N <= 32`.
///
/// `N` is always a crate constant, so an out-of-range length is a
/// programming error rather than an input error.
pub fn blake2s_var<const N: usize>(data: &[u8]) -> [u8; N] {
    let mut hasher = Blake2sVar::new(N).expect("BLAKE2s digest length is within 1..=32");
    hasher.update(data);
    let mut out = [0u8; N];
    hasher
        .finalize_variable(&mut out)
        .expect("output buffer matches the configured digest length");
    out
}

/// BLAKE2b (libsodium `generichash`) with an `N`-byte digest, `1 <= N <= 64`.
pub fn blake2b<const N: usize>(data: &[u8]) -> [u8; N] {
    let mut hasher = Blake2bVar::new(N).expect("BLAKE2b digest length is within 1..=64");
    hasher.update(data);
    let mut out = [0u8; N];
    hasher
        .finalize_variable(&mut out)
        .expect("output buffer matches the configured digest length");
    out
}
