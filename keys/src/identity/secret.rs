//! Secret material handed to keypair generation.
//!
//! Every format takes two inputs. miniLock and CurveLock call them *email*
//! and *password*; bytejail calls them *input one* and *input two* and does
//! not care what they contain. [`SecretInput`] carries both halves as
//! optional values so a caller that forgot one gets a
//! [`MissingArgument`](crate::IdentityError::MissingArgument) naming it,
//! instead of silently hashing an empty string.

use std::fmt;

use zeroize::Zeroizing;

use crate::error::IdentityError;

/// The two secret inputs of a generation request.
///
/// The first half (email or input one) acts as a salt and is not treated as
/// secret. The second half (password or input two) is wiped on drop and
/// never appears in `Debug` output.
///
/// ```
/// use nacl_keys::SecretInput;
///
/// let input = SecretInput::new()
///     .email("someone@example.com")
///     .password("correct horse battery staple");
/// assert_eq!(input.first(), Some("someone@example.com"));
/// assert!(!format!("{input:?}").contains("horse"));
/// ```
#[derive(Clone, Default)]
pub struct SecretInput {
    first: Option<String>,
    second: Option<Zeroizing<String>>,
}

impl SecretInput {
    /// An input with both halves missing.
    pub fn new() -> Self {
        Self::default()
    }

    /// Both halves of a miniLock or CurveLock request.
    pub fn email_password(email: impl Into<String>, password: impl Into<String>) -> Self {
        Self::new().email(email).password(password)
    }

    /// Both halves of a bytejail request.
    pub fn pair(input_one: impl Into<String>, input_two: impl Into<String>) -> Self {
        Self::new().input_one(input_one).input_two(input_two)
    }

    /// Set the email (first half).
    pub fn email(self, email: impl Into<String>) -> Self {
        self.input_one(email)
    }

    /// Set the password (second half).
    pub fn password(self, password: impl Into<String>) -> Self {
        self.input_two(password)
    }

    /// Set the first half.
    pub fn input_one(mut self, value: impl Into<String>) -> Self {
        self.first = Some(value.into());
        self
    }

    /// Set the second half.
    pub fn input_two(mut self, value: impl Into<String>) -> Self {
        self.second = Some(Zeroizing::new(value.into()));
        self
    }

    /// The first half, if present.
    pub fn first(&self) -> Option<&str> {
        self.first.as_deref()
    }

    /// The second half, if present.
    pub fn second(&self) -> Option<&str> {
        self.second.as_deref().map(String::as_str)
    }

    pub(crate) fn require_first(&self, name: &'static str) -> Result<&str, IdentityError> {
        self.first().ok_or(IdentityError::MissingArgument { name })
    }

    pub(crate) fn require_second(&self, name: &'static str) -> Result<&str, IdentityError> {
        self.second().ok_or(IdentityError::MissingArgument { name })
    }
}

impl fmt::Debug for SecretInput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SecretInput")
            .field("first", &self.first)
            .field("second", &self.second.as_ref().map(|_| "<redacted>"))
            .finish()
    }
}
