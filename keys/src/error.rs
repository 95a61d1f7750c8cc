//! Error types for identity generation and the identity codecs.
//!
//! Every fallible operation in the crate returns an [`IdentityError`].
//! Decoding collapses all failure modes into a single
//! [`IdentityError::CorruptIdentity`] on purpose; the precise reason is
//! still there for diagnostics, one level down, as a [`DecodeFailure`].

use thiserror::Error;

use crate::identity::KeyFormat;

/// Errors that can occur while generating, encoding or decoding identities.
#[derive(Debug, Error)]
pub enum IdentityError {
    /// A required input was not supplied.
    #[error("{name} cannot be missing")]
    MissingArgument {
        /// Which input was missing.
        name: &'static str,
    },

    /// The email address failed the syntax check.
    #[error("the given email address seems to be invalid")]
    InvalidEmailFormat,

    /// The password is too guessable for the format's entropy floor.
    #[error(
        "at least {required} bits of entropy are needed, the given password only has {actual:.1}"
    )]
    InsufficientEntropy {
        /// Minimum bits required.
        required: f64,
        /// Bits the estimator assigned to the password.
        actual: f64,
    },

    /// A key (or version prefix) does not have the exact required length.
    /// An absent key is reported with `actual == 0`.
    #[error("{name} must be {expected} bytes in length, got {actual}")]
    KeyLengthOutOfRange {
        /// What was measured ("publicKey", "version").
        name: &'static str,
        /// Required length in bytes.
        expected: usize,
        /// Length that was supplied.
        actual: usize,
    },

    /// The encoded identity failed to decode for its claimed format.
    #[error("the given identity seems to be an invalid {format} ID")]
    CorruptIdentity {
        /// The format the identity was decoded as.
        format: KeyFormat,
        /// What exactly went wrong.
        #[source]
        cause: DecodeFailure,
    },

    /// The string is not shaped like any format we know, so there is no
    /// codec to hand it to.
    #[error("the given identity does not match any known format")]
    UnrecognizedFormat,

    /// The configured scrypt cost was rejected by the KDF.
    #[error("invalid KDF parameters: {0}")]
    InvalidKdfParameters(String),
}

impl IdentityError {
    pub(crate) fn corrupt(format: KeyFormat, cause: DecodeFailure) -> Self {
        tracing::trace!(%format, %cause, "identity rejected");
        Self::CorruptIdentity { format, cause }
    }

    pub(crate) fn public_key_length(actual: usize) -> Self {
        Self::KeyLengthOutOfRange {
            name: "publicKey",
            expected: crate::config::PUBLIC_KEY_LENGTH,
            actual,
        }
    }

    /// Whether this is a decode-time failure.
    pub fn is_corrupt_identity(&self) -> bool {
        matches!(self, Self::CorruptIdentity { .. })
    }
}

/// The underlying reason an identity failed to decode.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DecodeFailure {
    /// Not valid base58, or (for CurveLock) the base58-check bytes mismatched.
    #[error("malformed base58: {0}")]
    Base58(#[from] bs58::decode::Error),

    /// The decoded payload has the wrong number of bytes.
    #[error("expected {expected} raw bytes, got {actual}")]
    Length {
        /// Raw length the format requires.
        expected: usize,
        /// Raw length that was decoded.
        actual: usize,
    },

    /// The leading byte is not this format's version.
    #[error("unexpected version byte 0x{found:02x}, expected 0x{expected:02x}")]
    Version {
        /// The format's version byte.
        expected: u8,
        /// The byte that was found.
        found: u8,
    },

    /// The embedded checksum does not match the recomputed one.
    #[error("checksum mismatch")]
    Checksum,
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error as _;

    #[test]
    fn corrupt_identity_keeps_cause_as_source() {
        let err = IdentityError::corrupt(KeyFormat::Bytejail, DecodeFailure::Checksum);
        assert!(err.is_corrupt_identity());
        assert_eq!(
            err.to_string(),
            "the given identity seems to be an invalid bytejail ID"
        );
        let source = err.source().expect("nested cause");
        assert_eq!(source.to_string(), "checksum mismatch");
    }

    #[test]
    fn key_length_message_names_required_length() {
        let err = IdentityError::public_key_length(31);
        assert_eq!(err.to_string(), "publicKey must be 32 bytes in length, got 31");
        assert!(!err.is_corrupt_identity());
    }

    #[test]
    fn entropy_error_carries_both_values() {
        let err = IdentityError::InsufficientEntropy {
            required: 100.0,
            actual: 61.1,
        };
        match err {
            IdentityError::InsufficientEntropy { required, actual } => {
                assert_eq!(required, 100.0);
                assert!(actual < required);
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn version_failure_formats_as_hex() {
        let cause = DecodeFailure::Version {
            expected: 0x29,
            found: 0x0a,
        };
        assert_eq!(
            cause.to_string(),
            "unexpected version byte 0x0a, expected 0x29"
        );
    }
}
