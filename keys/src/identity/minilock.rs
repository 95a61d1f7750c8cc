//! # miniLock Identities
//!
//! ```text
//! raw      = public_key (32) ‖ blake2s₁(public_key) (1)
//! identity = base58(raw)
//! ```
//!
//! Key generation refuses weak passwords: the password must clear the
//! configured entropy floor (100 bits by default) before any hashing is
//! done. The seed is `scrypt(blake2s256(password), email, N=2^17, r=8, p=1)`.

use zeroize::Zeroizing;

use crate::config::{GeneratorConfig, MINILOCK_RAW_LENGTH, PUBLIC_KEY_LENGTH};
use crate::crypto::hash::blake2s_256;
use crate::crypto::kdf::derive_seed;
use crate::crypto::keys::BoxKeyPair;
use crate::error::{DecodeFailure, IdentityError};
use crate::validation::{is_valid_email, EntropyEstimator};

use super::checksum::minilock_checksum;
use super::format::{require_public_key, IdentityCodec, KeyFormat};
use super::secret::SecretInput;

/// The miniLock codec.
#[derive(Debug, Clone, Copy, Default)]
pub struct MiniLock;

impl IdentityCodec for MiniLock {
    fn format(&self) -> KeyFormat {
        KeyFormat::MiniLock
    }

    fn generate(
        &self,
        input: &SecretInput,
        config: &GeneratorConfig,
        estimator: &dyn EntropyEstimator,
    ) -> Result<BoxKeyPair, IdentityError> {
        let email = input.require_first("email")?;
        if !is_valid_email(email) {
            return Err(IdentityError::InvalidEmailFormat);
        }
        let password = input.require_second("password")?;

        let actual = estimator.estimate_bits(password);
        if actual < config.min_entropy_bits {
            return Err(IdentityError::InsufficientEntropy {
                required: config.min_entropy_bits,
                actual,
            });
        }

        let password_hash = Zeroizing::new(blake2s_256(password.as_bytes()));
        let seed = derive_seed(&password_hash[..], email.as_bytes(), config.minilock_cost)?;
        Ok(BoxKeyPair::from_seed(&seed))
    }

    fn encode(&self, public_key: &[u8]) -> Result<String, IdentityError> {
        let key = require_public_key(public_key)?;
        let mut raw = Vec::with_capacity(MINILOCK_RAW_LENGTH);
        raw.extend_from_slice(key);
        raw.push(minilock_checksum(key)?);
        Ok(bs58::encode(raw).into_string())
    }

    fn decode(&self, encoded: &str) -> Result<[u8; PUBLIC_KEY_LENGTH], IdentityError> {
        let corrupt = |cause| IdentityError::corrupt(KeyFormat::MiniLock, cause);

        let raw = bs58::decode(encoded)
            .into_vec()
            .map_err(|e| corrupt(DecodeFailure::from(e)))?;
        if raw.len() != MINILOCK_RAW_LENGTH {
            return Err(corrupt(DecodeFailure::Length {
                expected: MINILOCK_RAW_LENGTH,
                actual: raw.len(),
            }));
        }

        let (key, checksum) = raw.split_at(PUBLIC_KEY_LENGTH);
        if checksum != [minilock_checksum(key)?] {
            return Err(corrupt(DecodeFailure::Checksum));
        }

        let mut public_key = [0u8; PUBLIC_KEY_LENGTH];
        public_key.copy_from_slice(key);
        Ok(public_key)
    }
}
