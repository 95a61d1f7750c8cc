//! Format detection for identity strings of unknown provenance.
//!
//! Detection is by shape after plain base58 decoding:
//!
//! | raw length | first byte | candidate |
//! |-----------:|:----------:|-----------|
//! | 33         | any        | miniLock  |
//! | 37         | `0x0A`     | CurveLock |
//! | 37         | `0x29`     | bytejail  |
//! | otherwise  |            | unknown   |
//!
//! With validation on, the candidate's own decoder then has to accept the
//! string as well; a candidate it rejects is reported as invalid.

use crate::config::{
    BYTEJAIL_RAW_LENGTH, BYTEJAIL_VERSION, CURVELOCK_RAW_LENGTH, CURVELOCK_VERSION,
    MINILOCK_RAW_LENGTH,
};

use super::format::{KeyFormat, KeyType};

/// Classify `encoded`.
///
/// Never fails: strings that are not base58 come back as
/// [`KeyType::Invalid`], strings with an unfamiliar shape as
/// [`KeyType::Unknown`]. When `validate` is false only the shape is checked,
/// so a typo in a checksummed identity still reports its format.
///
/// ```
/// use nacl_keys::{recognize, KeyType};
///
/// let id = "Cz5bEJLKdSib9kWxkmskExaaLdRg8tVA2qsFBnfdQwkMe";
/// assert_eq!(recognize(id, true), KeyType::MiniLock);
/// assert_eq!(recognize("0OIl", true), KeyType::Invalid);
/// ```
pub fn recognize(encoded: &str, validate: bool) -> KeyType {
    let raw = match bs58::decode(encoded).into_vec() {
        Ok(raw) => raw,
        Err(err) => {
            tracing::debug!(error = %err, "identity is not base58");
            return KeyType::Invalid;
        }
    };

    let candidate = match (raw.len(), raw.first().copied()) {
        (MINILOCK_RAW_LENGTH, _) => KeyFormat::MiniLock,
        (CURVELOCK_RAW_LENGTH, Some(CURVELOCK_VERSION)) => KeyFormat::CurveLock,
        (BYTEJAIL_RAW_LENGTH, Some(BYTEJAIL_VERSION)) => KeyFormat::Bytejail,
        (len, first) => {
            tracing::debug!(raw_length = len, first_byte = ?first, "identity shape not recognized");
            return KeyType::Unknown;
        }
    };

    if !validate {
        return candidate.into();
    }

    match candidate.decode(encoded) {
        Ok(_) => candidate.into(),
        Err(err) => {
            tracing::debug!(format = %candidate, error = %err, "identity failed validation");
            KeyType::Invalid
        }
    }
}
