//! # Input Validation
//!
//! The cheap checks that run before any expensive ones: is the email
//! shaped like an email, and is the password worth spending 128 MiB of
//! scrypt on. Both run before a single byte is hashed.

pub mod email;
pub mod entropy;

pub use email::is_valid_email;
pub use entropy::{CharsetEstimator, EntropyEstimator, PatternEstimator};
