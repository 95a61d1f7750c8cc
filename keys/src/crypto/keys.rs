//! # Box Keypairs
//!
//! Curve25519 keypairs as produced by NaCl's `crypto_box` key generation
//! when handed a 32-byte secret: the secret *is* the private key, and the
//! public key is that scalar (clamped) times the X25519 base point.
//!
//! ## Security considerations
//!
//! - Private key bytes sit in a [`Zeroizing`] buffer and are wiped on drop.
//! - `Debug` prints the public key only. Do not add a `Display` that prints
//!   the private half.
//! - Key bytes are never logged.

use std::fmt;

use x25519_dalek::{x25519, X25519_BASEPOINT_BYTES};
use zeroize::Zeroizing;

use crate::config::{PRIVATE_KEY_LENGTH, PUBLIC_KEY_LENGTH, SEED_LENGTH};

/// A Curve25519 box keypair derived from a seed.
///
/// # Examples
///
/// ```
/// use nacl_keys::BoxKeyPair;
///
/// let kp = BoxKeyPair::from_seed(&[42u8; 32]);
/// assert_eq!(kp.public_key().len(), 32);
/// assert_eq!(kp.private_key(), &[42u8; 32]);
/// ```
pub struct BoxKeyPair {
    public_key: [u8; PUBLIC_KEY_LENGTH],
    private_key: Zeroizing<[u8; PRIVATE_KEY_LENGTH]>,
}

impl BoxKeyPair {
    /// Build the keypair for a 32-byte seed.
    ///
    /// The seed is stored unclamped as the private key; clamping happens
    /// inside the scalar multiplication, same as libsodium.
    pub fn from_seed(seed: &[u8; SEED_LENGTH]) -> Self {
        Self {
            public_key: x25519(*seed, X25519_BASEPOINT_BYTES),
            private_key: Zeroizing::new(*seed),
        }
    }

    /// The public key. This is the only part any identity format encodes.
    pub fn public_key(&self) -> &[u8; PUBLIC_KEY_LENGTH] {
        &self.public_key
    }

    /// The private key. Handle with care.
    pub fn private_key(&self) -> &[u8; PRIVATE_KEY_LENGTH] {
        &self.private_key
    }

    /// Hex-encoded public key.
    pub fn public_key_hex(&self) -> String {
        hex::encode(self.public_key)
    }

    /// Hex-encoded private key, wiped when the returned buffer is dropped.
    pub fn private_key_hex(&self) -> Zeroizing<String> {
        Zeroizing::new(hex::encode(*self.private_key))
    }
}

impl Clone for BoxKeyPair {
    fn clone(&self) -> Self {
        Self {
            public_key: self.public_key,
            private_key: Zeroizing::new(*self.private_key),
        }
    }
}

impl fmt::Debug for BoxKeyPair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "BoxKeyPair(pub={})", self.public_key_hex())
    }
}

impl PartialEq for BoxKeyPair {
    /// Keypairs compare by public key; comparing secrets in variable time
    /// is a habit worth not having.
    fn eq(&self, other: &Self) -> bool {
        self.public_key == other.public_key
    }
}

impl Eq for BoxKeyPair {}
