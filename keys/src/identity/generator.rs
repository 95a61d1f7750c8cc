//! The [`KeyGenerator`] facade: one object holding configuration and the
//! entropy estimator, with every format behind a [`KeyFormat`] argument.

use std::fmt;

use crate::config::{GeneratorConfig, PUBLIC_KEY_LENGTH};
use crate::crypto::keys::BoxKeyPair;
use crate::error::IdentityError;
use crate::validation::{EntropyEstimator, PatternEstimator};

use super::format::{KeyFormat, KeyType};
use super::recognize::recognize;
use super::secret::SecretInput;

/// Generates, encodes, decodes and recognizes identities.
///
/// Cheap to construct and immutable once built, so share it freely across
/// threads (it is `Send + Sync`).
///
/// ```
/// use nacl_keys::{KeyFormat, KeyGenerator};
///
/// let generator = KeyGenerator::default();
/// let id = generator.encode(KeyFormat::CurveLock, &[0u8; 32]).unwrap();
/// assert_eq!(generator.decode(KeyFormat::CurveLock, &id).unwrap(), [0u8; 32]);
/// ```
pub struct KeyGenerator {
    config: GeneratorConfig,
    estimator: Box<dyn EntropyEstimator>,
}

impl Default for KeyGenerator {
    fn default() -> Self {
        Self::new(GeneratorConfig::default())
    }
}

impl fmt::Debug for KeyGenerator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("KeyGenerator")
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

impl KeyGenerator {
    /// A generator with the given configuration and the default estimator.
    pub fn new(config: GeneratorConfig) -> Self {
        Self {
            config,
            estimator: Box::new(PatternEstimator),
        }
    }

    /// Replace the entropy estimator used for miniLock passwords.
    pub fn with_estimator(mut self, estimator: impl EntropyEstimator + 'static) -> Self {
        self.estimator = Box::new(estimator);
        self
    }

    /// The settings this generator was built with.
    pub fn config(&self) -> &GeneratorConfig {
        &self.config
    }

    /// Derive the keypair `input` produces under `format`.
    ///
    /// This runs scrypt at the configured cost and takes hundreds of
    /// milliseconds at the reference settings.
    pub fn generate(
        &self,
        format: KeyFormat,
        input: &SecretInput,
    ) -> Result<BoxKeyPair, IdentityError> {
        let cost = match format {
            KeyFormat::MiniLock => self.config.minilock_cost,
            KeyFormat::CurveLock | KeyFormat::Bytejail => self.config.box_cost,
        };
        tracing::debug!(%format, log_n = cost.log_n, r = cost.r, p = cost.p, "deriving keypair");

        let keypair = format
            .codec()
            .generate(input, &self.config, self.estimator.as_ref())?;

        tracing::info!(%format, public_key = %keypair.public_key_hex(), "keypair derived");
        Ok(keypair)
    }

    /// [`generate`](Self::generate) followed by [`encode`](Self::encode).
    pub fn generate_identity(
        &self,
        format: KeyFormat,
        input: &SecretInput,
    ) -> Result<(BoxKeyPair, String), IdentityError> {
        let keypair = self.generate(format, input)?;
        let identity = self.encode(format, keypair.public_key())?;
        Ok((keypair, identity))
    }

    /// Encode a 32-byte public key as a `format` identity.
    pub fn encode(&self, format: KeyFormat, public_key: &[u8]) -> Result<String, IdentityError> {
        format.encode(public_key)
    }

    /// Decode a `format` identity back to its public key.
    pub fn decode(
        &self,
        format: KeyFormat,
        encoded: &str,
    ) -> Result<[u8; PUBLIC_KEY_LENGTH], IdentityError> {
        format.decode(encoded)
    }

    /// Recognize with full validation.
    pub fn recognize(&self, encoded: &str) -> KeyType {
        recognize(encoded, true)
    }

    /// Recognize, optionally checking shape only.
    pub fn recognize_with(&self, encoded: &str, validate: bool) -> KeyType {
        recognize(encoded, validate)
    }

    /// Detect the format of `encoded` and decode it with that format.
    ///
    /// Fails with [`IdentityError::UnrecognizedFormat`] if the string has no
    /// known shape, or with the codec's own error if it has one but does not
    /// validate.
    pub fn decode_any(
        &self,
        encoded: &str,
    ) -> Result<(KeyFormat, [u8; PUBLIC_KEY_LENGTH]), IdentityError> {
        let format = recognize(encoded, false)
            .format()
            .ok_or(IdentityError::UnrecognizedFormat)?;
        let public_key = format.decode(encoded)?;
        Ok((format, public_key))
    }
}
