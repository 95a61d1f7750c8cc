//! # CurveLock Identities
//!
//! ```text
//! payload  = 0x0A ‖ public_key (32)
//! identity = base58check(payload)      // + sha256(sha256(payload))[..4]
//! ```
//!
//! The seed is `scrypt(password, blake2b32(email), N=2^16, r=8, p=4)`, the
//! parameters libsodium picks for its "medium slow" limits. There is no
//! entropy floor.

use crate::config::{
    GeneratorConfig, CURVELOCK_PAYLOAD_LENGTH, CURVELOCK_VERSION, PUBLIC_KEY_LENGTH,
    SALT_HASH_LENGTH, VERSION_LENGTH,
};
use crate::crypto::hash::blake2b;
use crate::crypto::kdf::derive_seed;
use crate::crypto::keys::BoxKeyPair;
use crate::error::{DecodeFailure, IdentityError};
use crate::validation::{is_valid_email, EntropyEstimator};

use super::format::{require_public_key, IdentityCodec, KeyFormat};
use super::secret::SecretInput;

/// The CurveLock codec.
#[derive(Debug, Clone, Copy, Default)]
pub struct CurveLock;

impl IdentityCodec for CurveLock {
    fn format(&self) -> KeyFormat {
        KeyFormat::CurveLock
    }

    fn generate(
        &self,
        input: &SecretInput,
        config: &GeneratorConfig,
        _estimator: &dyn EntropyEstimator,
    ) -> Result<BoxKeyPair, IdentityError> {
        let email = input.require_first("email")?;
        if !is_valid_email(email) {
            return Err(IdentityError::InvalidEmailFormat);
        }
        let password = input.require_second("password")?;

        let salt = blake2b::<SALT_HASH_LENGTH>(email.as_bytes());
        let seed = derive_seed(password.as_bytes(), &salt, config.box_cost)?;
        Ok(BoxKeyPair::from_seed(&seed))
    }

    fn encode(&self, public_key: &[u8]) -> Result<String, IdentityError> {
        let key = require_public_key(public_key)?;
        let mut payload = Vec::with_capacity(CURVELOCK_PAYLOAD_LENGTH);
        payload.push(CURVELOCK_VERSION);
        payload.extend_from_slice(key);
        Ok(bs58::encode(payload).with_check().into_string())
    }

    fn decode(&self, encoded: &str) -> Result<[u8; PUBLIC_KEY_LENGTH], IdentityError> {
        let corrupt = |cause| IdentityError::corrupt(KeyFormat::CurveLock, cause);

        // `with_check` verifies and strips the four check bytes.
        let payload = bs58::decode(encoded)
            .with_check(None)
            .into_vec()
            .map_err(|e| corrupt(DecodeFailure::from(e)))?;
        if payload.len() != CURVELOCK_PAYLOAD_LENGTH {
            return Err(corrupt(DecodeFailure::Length {
                expected: CURVELOCK_PAYLOAD_LENGTH,
                actual: payload.len(),
            }));
        }
        if payload[0] != CURVELOCK_VERSION {
            return Err(corrupt(DecodeFailure::Version {
                expected: CURVELOCK_VERSION,
                found: payload[0],
            }));
        }

        let mut public_key = [0u8; PUBLIC_KEY_LENGTH];
        public_key.copy_from_slice(&payload[VERSION_LENGTH..]);
        Ok(public_key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::crypto::kdf::ScryptCost;
    use crate::validation::CharsetEstimator;
    use sha2::{Digest, Sha256};

    const EMAIL: &str = "someone@example.com";
    const PASSPHRASE: &str = "magnetometers payee induce tangibly polonaises unrestricted oilfield";
    const IDENTITY: &str = "NMgsvm7ytEHdGEuj9QEaoW7uH2tMQe9Ji2h9viw7kzFkgApVkH";
    const PUBLIC_KEY: &str = "fc97747205619f7a7c6e5b6c9179d38a87f33bf3c350c8c1ce06df26999df256";

    fn generate(input: SecretInput) -> Result<BoxKeyPair, IdentityError> {
        let config = GeneratorConfig::with_uniform_cost(ScryptCost::new(10, 8, 1));
        CurveLock.generate(&input, &config, &CharsetEstimator)
    }

    #[test]
    fn encodes_reference_key() {
        let key = hex::decode(PUBLIC_KEY).unwrap();
        assert_eq!(CurveLock.encode(&key).unwrap(), IDENTITY);
    }

    #[test]
    fn decodes_reference_identity() {
        assert_eq!(hex::encode(CurveLock.decode(IDENTITY).unwrap()), PUBLIC_KEY);
    }

    #[test]
    fn check_bytes_are_double_sha256() {
        let raw = bs58::decode(IDENTITY).into_vec().unwrap();
        assert_eq!(raw.len(), 37);
        assert_eq!(raw[0], CURVELOCK_VERSION);
        let digest = Sha256::digest(Sha256::digest(&raw[..33]));
        assert_eq!(&raw[33..], &digest[..4]);
        assert_eq!(hex::encode(&raw[33..]), "4059b6c6");
    }

    #[test]
    fn zero_key_encoding() {
        assert_eq!(
            CurveLock.encode(&[0u8; 32]).unwrap(),
            "LSSmKVKXFmGMCp44oCzYCzkA9ABW3RksPi5SVsxwZ4swEBHVSf"
        );
    }

    #[test]
    fn cheap_cost_generation() {
        let kp = generate(SecretInput::email_password(EMAIL, PASSPHRASE)).unwrap();
        assert_eq!(
            kp.private_key_hex().as_str(),
            "4e71dc62046495dcd095e89a56430740ec3ba3bd25f3208ab51b8ee700a2fb0d"
        );
        assert_eq!(
            CurveLock.encode(kp.public_key()).unwrap(),
            "MqZQtDQSoY5U5ddX6cj9Stw76J4E2t4awFjNFJTzheviczAhxM"
        );
    }

    #[test]
    fn weak_password_is_accepted() {
        assert!(generate(SecretInput::email_password(EMAIL, "pw")).is_ok());
    }

    #[test]
    fn input_validation_order() {
        assert!(matches!(
            generate(SecretInput::new()).unwrap_err(),
            IdentityError::MissingArgument { name: "email" }
        ));
        assert!(matches!(
            generate(SecretInput::new().email("someoneexample.com")).unwrap_err(),
            IdentityError::InvalidEmailFormat
        ));
        assert!(matches!(
            generate(SecretInput::new().email(EMAIL)).unwrap_err(),
            IdentityError::MissingArgument { name: "password" }
        ));
    }

    #[test]
    fn encode_rejects_wrong_length() {
        let err = CurveLock.encode(&[7u8; 16]).unwrap_err();
        assert!(matches!(
            err,
            IdentityError::KeyLengthOutOfRange { expected: 32, actual: 16, .. }
        ));
    }

    #[test]
    fn decode_rejects_bad_check_bytes() {
        let err = CurveLock
            .decode("LkDFX3Q25RHeuPnCfPD2yiAkjA8wur9NvYB4nARhuiA4iG1pjH")
            .unwrap_err();
        assert!(matches!(
            err,
            IdentityError::CorruptIdentity {
                format: KeyFormat::CurveLock,
                cause: DecodeFailure::Base58(_)
            }
        ));
    }

    #[test]
    fn decode_rejects_wrong_version() {
        let mut payload = vec![0x0B];
        payload.extend_from_slice(&[5u8; 32]);
        let encoded = bs58::encode(payload).with_check().into_string();
        let err = CurveLock.decode(&encoded).unwrap_err();
        assert!(matches!(
            err,
            IdentityError::CorruptIdentity {
                cause: DecodeFailure::Version { expected: 0x0A, found: 0x0B },
                ..
            }
        ));
    }

    #[test]
    fn decode_rejects_wrong_payload_length() {
        let encoded = bs58::encode([CURVELOCK_VERSION; 20]).with_check().into_string();
        let err = CurveLock.decode(&encoded).unwrap_err();
        assert!(matches!(
            err,
            IdentityError::CorruptIdentity {
                cause: DecodeFailure::Length { expected: 33, actual: 20 },
                ..
            }
        ));
    }

    #[test]
    fn decode_rejects_minilock_identity() {
        let err = CurveLock
            .decode("Cz5bEJLKdSib9kWxkmskExaaLdRg8tVA2qsFBnfdQwkMe")
            .unwrap_err();
        assert!(err.is_corrupt_identity());
    }
}
