//! Identity format tags and the codec contract.
//!
//! [`KeyFormat`] is the closed set of formats we can produce. [`KeyType`]
//! is what the recognizer answers with: one of those formats, or a verdict
//! that the string is none of them ([`KeyType::Unknown`]) or looks like one
//! but fails validation ([`KeyType::Invalid`]).

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::secret::SecretInput;
use super::{bytejail::Bytejail, curvelock::CurveLock, minilock::MiniLock};
use crate::config::{
    GeneratorConfig, BYTEJAIL_RAW_LENGTH, BYTEJAIL_VERSION, CURVELOCK_RAW_LENGTH,
    CURVELOCK_VERSION, MINILOCK_RAW_LENGTH, PUBLIC_KEY_LENGTH,
};
use crate::crypto::keys::BoxKeyPair;
use crate::error::IdentityError;
use crate::validation::EntropyEstimator;

// ---------------------------------------------------------------------------
// IdentityCodec
// ---------------------------------------------------------------------------

/// What every identity format can do.
///
/// Implementations are stateless unit structs; all tunables arrive through
/// the arguments, so a single `&'static` instance serves every thread.
pub trait IdentityCodec: Send + Sync {
    /// The tag this codec implements.
    fn format(&self) -> KeyFormat;

    /// Derive a keypair from secret material.
    ///
    /// Inputs are validated before any hashing happens, so rejected inputs
    /// cost microseconds rather than a full scrypt run.
    fn generate(
        &self,
        input: &SecretInput,
        config: &GeneratorConfig,
        estimator: &dyn EntropyEstimator,
    ) -> Result<BoxKeyPair, IdentityError>;

    /// Encode a 32-byte public key into this format's base58 text.
    fn encode(&self, public_key: &[u8]) -> Result<String, IdentityError>;

    /// Decode and fully validate an identity, returning the public key.
    fn decode(&self, encoded: &str) -> Result<[u8; PUBLIC_KEY_LENGTH], IdentityError>;
}

/// Borrow `public_key` as a fixed-size array, or fail with the length error
/// every `encode` reports.
pub(crate) fn require_public_key(
    public_key: &[u8],
) -> Result<&[u8; PUBLIC_KEY_LENGTH], IdentityError> {
    public_key
        .try_into()
        .map_err(|_| IdentityError::public_key_length(public_key.len()))
}

// ---------------------------------------------------------------------------
// KeyFormat
// ---------------------------------------------------------------------------

/// The identity formats this crate can generate, encode and decode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum KeyFormat {
    /// `key ‖ blake2s₁(key)`, plain base58.
    MiniLock,
    /// `0x0A ‖ key`, base58-check.
    CurveLock,
    /// `0x29 ‖ key ‖ blake2b²(0x29 ‖ key)[..4]`, plain base58.
    Bytejail,
}

impl KeyFormat {
    /// Every format, in declaration order.
    pub const ALL: [KeyFormat; 3] = [KeyFormat::MiniLock, KeyFormat::CurveLock, KeyFormat::Bytejail];

    /// The codec implementing this format.
    pub fn codec(self) -> &'static dyn IdentityCodec {
        match self {
            KeyFormat::MiniLock => &MiniLock,
            KeyFormat::CurveLock => &CurveLock,
            KeyFormat::Bytejail => &Bytejail,
        }
    }

    /// Leading version byte, for the formats that have one.
    pub fn version_byte(self) -> Option<u8> {
        match self {
            KeyFormat::MiniLock => None,
            KeyFormat::CurveLock => Some(CURVELOCK_VERSION),
            KeyFormat::Bytejail => Some(BYTEJAIL_VERSION),
        }
    }

    /// Length of the identity after *plain* base58 decoding.
    pub fn raw_length(self) -> usize {
        match self {
            KeyFormat::MiniLock => MINILOCK_RAW_LENGTH,
            KeyFormat::CurveLock => CURVELOCK_RAW_LENGTH,
            KeyFormat::Bytejail => BYTEJAIL_RAW_LENGTH,
        }
    }

    /// Shorthand for `self.codec().encode(..)`.
    pub fn encode(self, public_key: &[u8]) -> Result<String, IdentityError> {
        self.codec().encode(public_key)
    }

    /// Shorthand for `self.codec().decode(..)`.
    pub fn decode(self, encoded: &str) -> Result<[u8; PUBLIC_KEY_LENGTH], IdentityError> {
        self.codec().decode(encoded)
    }
}

impl fmt::Display for KeyFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            KeyFormat::MiniLock => "miniLock",
            KeyFormat::CurveLock => "CurveLock",
            KeyFormat::Bytejail => "bytejail",
        })
    }
}

/// Returned when a format name is not one of `minilock`, `curvelock`,
/// `bytejail`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown identity format '{0}' (expected minilock, curvelock or bytejail)")]
pub struct ParseKeyFormatError(String);

impl FromStr for KeyFormat {
    type Err = ParseKeyFormatError;

    /// Case-insensitive, so `miniLock` and `MINILOCK` both parse.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "minilock" => Ok(KeyFormat::MiniLock),
            "curvelock" => Ok(KeyFormat::CurveLock),
            "bytejail" => Ok(KeyFormat::Bytejail),
            _ => Err(ParseKeyFormatError(s.to_string())),
        }
    }
}

// ---------------------------------------------------------------------------
// KeyType
// ---------------------------------------------------------------------------

/// Result of [`recognize`](super::recognize).
///
/// The numeric codes leave a gap between the known formats and the two
/// verdicts so new formats can slot in without renumbering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
#[repr(u8)]
pub enum KeyType {
    MiniLock = 0,
    CurveLock = 1,
    Bytejail = 2,
    /// Not shaped like any known format.
    Unknown = 9,
    /// Shaped like a known format (or not even base58) but fails validation.
    Invalid = 10,
}

impl KeyType {
    /// Stable numeric code.
    pub fn code(self) -> u8 {
        self as u8
    }

    /// The format, if this is a positive identification.
    pub fn format(self) -> Option<KeyFormat> {
        match self {
            KeyType::MiniLock => Some(KeyFormat::MiniLock),
            KeyType::CurveLock => Some(KeyFormat::CurveLock),
            KeyType::Bytejail => Some(KeyFormat::Bytejail),
            KeyType::Unknown | KeyType::Invalid => None,
        }
    }
}

impl From<KeyFormat> for KeyType {
    fn from(format: KeyFormat) -> Self {
        match format {
            KeyFormat::MiniLock => KeyType::MiniLock,
            KeyFormat::CurveLock => KeyType::CurveLock,
            KeyFormat::Bytejail => KeyType::Bytejail,
        }
    }
}

impl fmt::Display for KeyType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.format() {
            Some(format) => format.fmt(f),
            None if *self == KeyType::Unknown => f.write_str("unknown"),
            None => f.write_str("invalid"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn format_names_roundtrip_through_display_and_parse() {
        for format in KeyFormat::ALL {
            let parsed: KeyFormat = format.to_string().parse().unwrap();
            assert_eq!(parsed, format);
        }
    }

    #[test]
    fn unknown_format_name_rejected() {
        let err = "saltpack".parse::<KeyFormat>().unwrap_err();
        assert!(err.to_string().contains("saltpack"));
    }

    #[test]
    fn codec_reports_its_own_format() {
        for format in KeyFormat::ALL {
            assert_eq!(format.codec().format(), format);
        }
    }

    #[test]
    fn key_type_codes_leave_room_for_new_formats() {
        assert_eq!(KeyType::MiniLock.code(), 0);
        assert_eq!(KeyType::CurveLock.code(), 1);
        assert_eq!(KeyType::Bytejail.code(), 2);
        assert_eq!(KeyType::Unknown.code(), 9);
        assert_eq!(KeyType::Invalid.code(), 10);
    }

    #[test]
    fn key_type_format_mapping() {
        for format in KeyFormat::ALL {
            assert_eq!(KeyType::from(format).format(), Some(format));
        }
        assert_eq!(KeyType::Unknown.format(), None);
        assert_eq!(KeyType::Invalid.format(), None);
    }

    #[test]
    fn serde_uses_lowercase_names() {
        assert_eq!(
            serde_json::to_string(&KeyFormat::CurveLock).unwrap(),
            "\"curvelock\""
        );
        assert_eq!(serde_json::to_string(&KeyType::Invalid).unwrap(), "\"invalid\"");
        let parsed: KeyType = serde_json::from_str("\"minilock\"").unwrap();
        assert_eq!(parsed, KeyType::MiniLock);
    }

    #[test]
    fn display_matches_format_names() {
        assert_eq!(KeyType::MiniLock.to_string(), "miniLock");
        assert_eq!(KeyType::Unknown.to_string(), "unknown");
        assert_eq!(KeyType::Invalid.to_string(), "invalid");
    }

    #[test]
    fn require_public_key_enforces_length() {
        assert!(require_public_key(&[0u8; 32]).is_ok());
        for len in [0usize, 31, 33, 64] {
            match require_public_key(&vec![0u8; len]) {
                Err(IdentityError::KeyLengthOutOfRange {
                    expected, actual, ..
                }) => {
                    assert_eq!(expected, 32);
                    assert_eq!(actual, len);
                }
                other => panic!("unexpected result for {len} bytes: {other:?}"),
            }
        }
    }
}
