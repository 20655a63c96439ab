//! Crate-wide error type.
//!
//! Mirrors the teacher crate's `errors::{Error, Result}` pattern: one
//! `thiserror`-derived enum, one `Result<T>` alias, no panics on the
//! fallible paths a caller can legitimately hit.

use num_bigint::BigUint;
use thiserror::Error;

/// Errors produced by parameter derivation, key generation, encryption
/// and decryption.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// `lambda < 2`, `m_max < 1`, or `alpha < 2`.
    #[error("invalid parameter: {0}")]
    InvalidParameter(&'static str),

    /// The message did not satisfy `0 <= m < 2^m_max`.
    #[error("message {value} is out of range for m_max = {m_max} (must be < 2^{m_max})")]
    InvalidMessage { value: BigUint, m_max: u32 },

    /// The CSPRNG refused a draw.
    #[error("CSPRNG refused a draw")]
    RngFailure,

    /// Prime search did not converge. Should be unreachable; surfaced
    /// only to point at a broken RNG rather than looping forever.
    #[error("prime generation did not converge")]
    PrimeGenerationFailure,
}

/// Crate-local result alias, following the teacher's `errors::Result<T>`.
pub type Result<T> = core::result::Result<T, Error>;
