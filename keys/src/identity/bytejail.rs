//! # bytejail Identities
//!
//! ```text
//! raw      = 0x29 ‖ public_key (32) ‖ checksum (4)
//! checksum = blake2b64(blake2b64(0x29 ‖ public_key))[..4]
//! identity = base58(raw)
//! ```
//!
//! bytejail is CurveLock with the email requirement dropped: both inputs
//! are opaque strings. The seed is
//! `scrypt(blake2b64(input_two), blake2b32(input_one), N=2^16, r=8, p=4)`.

use zeroize::Zeroizing;

use crate::config::{
    GeneratorConfig, BYTEJAIL_PASSWORD_HASH_LENGTH, BYTEJAIL_RAW_LENGTH, BYTEJAIL_VERSION,
    PUBLIC_KEY_LENGTH, SALT_HASH_LENGTH, VERSION_LENGTH,
};
use crate::crypto::hash::blake2b;
use crate::crypto::kdf::derive_seed;
use crate::crypto::keys::BoxKeyPair;
use crate::error::{DecodeFailure, IdentityError};
use crate::validation::EntropyEstimator;

use super::checksum::bytejail_checksum;
use super::format::{require_public_key, IdentityCodec, KeyFormat};
use super::secret::SecretInput;

/// Offset of the checksum within the raw identity.
const CHECKSUM_OFFSET: usize = VERSION_LENGTH + PUBLIC_KEY_LENGTH;

/// The bytejail codec.
#[derive(Debug, Clone, Copy, Default)]
pub struct Bytejail;

impl IdentityCodec for Bytejail {
    fn format(&self) -> KeyFormat {
        KeyFormat::Bytejail
    }

    fn generate(
        &self,
        input: &SecretInput,
        config: &GeneratorConfig,
        _estimator: &dyn EntropyEstimator,
    ) -> Result<BoxKeyPair, IdentityError> {
        let input_one = input.require_first("input_one")?;
        let input_two = input.require_second("input_two")?;

        let salt = blake2b::<SALT_HASH_LENGTH>(input_one.as_bytes());
        let password = Zeroizing::new(blake2b::<BYTEJAIL_PASSWORD_HASH_LENGTH>(
            input_two.as_bytes(),
        ));
        let seed = derive_seed(&password[..], &salt, config.box_cost)?;
        Ok(BoxKeyPair::from_seed(&seed))
    }

    fn encode(&self, public_key: &[u8]) -> Result<String, IdentityError> {
        let key = require_public_key(public_key)?;
        let mut raw = Vec::with_capacity(BYTEJAIL_RAW_LENGTH);
        raw.push(BYTEJAIL_VERSION);
        raw.extend_from_slice(key);
        raw.extend_from_slice(&bytejail_checksum(&[BYTEJAIL_VERSION], key)?);
        Ok(bs58::encode(raw).into_string())
    }

    fn decode(&self, encoded: &str) -> Result<[u8; PUBLIC_KEY_LENGTH], IdentityError> {
        let corrupt = |cause| IdentityError::corrupt(KeyFormat::Bytejail, cause);

        let raw = bs58::decode(encoded)
            .into_vec()
            .map_err(|e| corrupt(DecodeFailure::from(e)))?;
        if raw.len() != BYTEJAIL_RAW_LENGTH {
            return Err(corrupt(DecodeFailure::Length {
                expected: BYTEJAIL_RAW_LENGTH,
                actual: raw.len(),
            }));
        }
        if raw[0] != BYTEJAIL_VERSION {
            return Err(corrupt(DecodeFailure::Version {
                expected: BYTEJAIL_VERSION,
                found: raw[0],
            }));
        }

        let (version, rest) = raw.split_at(VERSION_LENGTH);
        let (key, checksum) = rest.split_at(PUBLIC_KEY_LENGTH);
        if checksum != bytejail_checksum(version, key)? {
            return Err(corrupt(DecodeFailure::Checksum));
        }

        let mut public_key = [0u8; PUBLIC_KEY_LENGTH];
        public_key.copy_from_slice(&raw[VERSION_LENGTH..CHECKSUM_OFFSET]);
        Ok(public_key)
    }
}
