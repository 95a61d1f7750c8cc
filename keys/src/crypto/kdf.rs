//! # Password-Based Seed Derivation
//!
//! All three formats turn secrets into a 32-byte seed with scrypt. They
//! differ only in what they feed it and how hard they make it work:
//!
//! ```text
//! miniLock   scrypt(blake2s256(password), email,            N=2^17 r=8 p=1)
//! CurveLock  scrypt(password,             blake2b32(email), N=2^16 r=8 p=4)
//! bytejail   scrypt(blake2b64(input2),    blake2b32(input1), N=2^16 r=8 p=4)
//! ```
//!
//! CurveLock and bytejail were specified in terms of libsodium's
//! `opslimit`/`memlimit` pair rather than raw (N, r, p).
//! [`ScryptCost::from_limits`] reproduces libsodium's parameter picking so
//! the two descriptions can be checked against each other.

use serde::{Deserialize, Serialize};
use zeroize::Zeroizing;

use crate::config::SEED_LENGTH;
use crate::error::IdentityError;

/// libsodium `crypto_pwhash_scryptsalsa208sha256` "interactive" opslimit.
pub const INTERACTIVE_OPSLIMIT: u64 = 524_288;
/// libsodium "interactive" memlimit (16 MiB).
pub const INTERACTIVE_MEMLIMIT: u64 = 16_777_216;
/// The "medium slow" opslimit CurveLock settled on.
pub const MEDIUM_SLOW_OPSLIMIT: u64 = 8_388_608;
/// The "medium slow" memlimit (100 MB, decimal).
pub const MEDIUM_SLOW_MEMLIMIT: u64 = 100_000_000;

/// scrypt cost parameters: `N = 2^log_n`, block size `r`, parallelism `p`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ScryptCost {
    /// Base-2 logarithm of the CPU/memory cost `N`.
    pub log_n: u8,
    /// Block size.
    pub r: u32,
    /// Parallelization.
    pub p: u32,
}

impl ScryptCost {
    /// miniLock's fixed cost.
    pub const MINILOCK: Self = Self::new(17, 8, 1);

    /// What [`MEDIUM_SLOW_OPSLIMIT`]/[`MEDIUM_SLOW_MEMLIMIT`] resolve to.
    pub const MEDIUM_SLOW: Self = Self::new(16, 8, 4);

    /// What the interactive limits resolve to. Not used by any format; kept
    /// as the cheapest libsodium-sanctioned setting for local tooling.
    pub const INTERACTIVE: Self = Self::new(14, 8, 1);

    pub const fn new(log_n: u8, r: u32, p: u32) -> Self {
        Self { log_n, r, p }
    }

    /// Pick (N, r, p) from an operations limit and a memory limit, exactly
    /// like libsodium's `pickparams`.
    ///
    /// `r` is always 8. When memory is the looser constraint, `N` is sized
    /// from the ops limit and `p` stays 1. Otherwise `N` fills the memory
    /// limit and the remaining ops budget goes into `p`.
    pub fn from_limits(opslimit: u64, memlimit: u64) -> Self {
        const R: u32 = 8;
        let opslimit = opslimit.max(32_768);

        if opslimit < memlimit / 32 {
            let max_n = opslimit / (u64::from(R) * 4);
            Self::new(pick_log_n(max_n), R, 1)
        } else {
            let max_n = memlimit / (u64::from(R) * 128);
            let log_n = pick_log_n(max_n);
            let max_rp = ((opslimit / 4) / (1u64 << log_n)).min(0x3fff_ffff);
            Self::new(log_n, R, max_rp as u32 / R)
        }
    }

    /// Approximate peak memory for one derivation: `128 · r · N` bytes.
    pub fn memory_bytes(&self) -> u64 {
        (128 * u64::from(self.r)) << self.log_n
    }
}

/// Smallest `log_n` (at least 1) with `2^log_n > max_n / 2`.
fn pick_log_n(max_n: u64) -> u8 {
    let mut log_n = 1u8;
    while log_n < 63 && (1u64 << log_n) <= max_n / 2 {
        log_n += 1;
    }
    log_n
}

/// Derive a 32-byte seed with scrypt.
///
/// Deterministic: identical password, salt and cost always give identical
/// seeds. The seed is returned in a [`Zeroizing`] wrapper because it *is*
/// the private key.
pub fn derive_seed(
    password: &[u8],
    salt: &[u8],
    cost: ScryptCost,
) -> Result<Zeroizing<[u8; SEED_LENGTH]>, IdentityError> {
    let params = scrypt::Params::new(cost.log_n, cost.r, cost.p, SEED_LENGTH)
        .map_err(|e| IdentityError::InvalidKdfParameters(format!("{e} ({cost:?})")))?;

    tracing::trace!(
        log_n = cost.log_n,
        r = cost.r,
        p = cost.p,
        memory_bytes = cost.memory_bytes(),
        "running scrypt"
    );

    let mut seed = Zeroizing::new([0u8; SEED_LENGTH]);
    scrypt::scrypt(password, salt, &params, &mut seed[..])
        .map_err(|e| IdentityError::InvalidKdfParameters(e.to_string()))?;
    Ok(seed)
}
