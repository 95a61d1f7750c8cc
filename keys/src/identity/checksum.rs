//! Checksums embedded in miniLock and bytejail identities.
//!
//! CurveLock has no function here: base58-check supplies its checksum.

use crate::config::{
    BYTEJAIL_CHECKSUM_LENGTH, BYTEJAIL_HASH_LENGTH, MINILOCK_CHECKSUM_LENGTH, PUBLIC_KEY_LENGTH,
    VERSION_LENGTH,
};
use crate::crypto::hash::{blake2b, blake2s_var};
use crate::error::IdentityError;

use super::format::require_public_key;

/// miniLock checksum: BLAKE2s configured for a one-byte digest over the key.
pub fn minilock_checksum(public_key: &[u8]) -> Result<u8, IdentityError> {
    let key = require_public_key(public_key)?;
    let [byte] = blake2s_var::<MINILOCK_CHECKSUM_LENGTH>(key);
    Ok(byte)
}

/// bytejail checksum: the first four bytes of
/// `BLAKE2b-512(BLAKE2b-512(version ‖ public_key))`.
pub fn bytejail_checksum(
    version: &[u8],
    public_key: &[u8],
) -> Result<[u8; BYTEJAIL_CHECKSUM_LENGTH], IdentityError> {
    if version.len() != VERSION_LENGTH {
        return Err(IdentityError::KeyLengthOutOfRange {
            name: "version",
            expected: VERSION_LENGTH,
            actual: version.len(),
        });
    }
    let key = require_public_key(public_key)?;

    let mut preimage = [0u8; VERSION_LENGTH + PUBLIC_KEY_LENGTH];
    preimage[..VERSION_LENGTH].copy_from_slice(version);
    preimage[VERSION_LENGTH..].copy_from_slice(key);

    let first = blake2b::<BYTEJAIL_HASH_LENGTH>(&preimage);
    let second = blake2b::<BYTEJAIL_HASH_LENGTH>(&first);

    let mut checksum = [0u8; BYTEJAIL_CHECKSUM_LENGTH];
    checksum.copy_from_slice(&second[..BYTEJAIL_CHECKSUM_LENGTH]);
    Ok(checksum)
}
