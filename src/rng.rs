//! CSPRNG adapter.
//!
//! The source this crate is derived from drew randomness through four
//! different APIs (`secrets.randbits`, `secrets.randbelow`,
//! `random.randrange`, `random.getrandbits`), mixing a non-cryptographic
//! generator into code paths that touch keys and ciphertexts. This
//! module unifies every such draw behind one trait with two operations
//! and forbids anything that isn't a `CryptoRngCore` from implementing
//! it.

use num_bigint::BigUint;
use num_traits::Zero;
use rand_core::CryptoRngCore;

use crate::errors::{Error, Result};

/// Uniform randomness for key generation and encryption.
///
/// Blanket-implemented for every [`CryptoRngCore`], so any RNG from the
/// `rand`/`rand_chacha` family works out of the box; tests substitute a
/// fixed-seed `ChaCha8Rng` here to get reproducible ciphertexts without
/// threading a concrete RNG type through every call site.
pub trait Csprng {
    /// Draws a uniform integer in `[0, 2^bits)`.
    ///
    /// `bits == 0` returns zero without touching the RNG, matching
    /// `secrets.randbits(0) == 0`.
    fn uniform_bits(&mut self, bits: u32) -> Result<BigUint>;

    /// Draws a uniform integer in `[0, bound]` (inclusive).
    fn uniform_below_inclusive(&mut self, bound: &BigUint) -> Result<BigUint>;
}

impl<R: CryptoRngCore + ?Sized> Csprng for R {
    fn uniform_bits(&mut self, bits: u32) -> Result<BigUint> {
        if bits == 0 {
            return Ok(BigUint::zero());
        }

        let nbytes = ((bits as usize) + 7) / 8;
        let mut buf = vec![0u8; nbytes];
        self.try_fill_bytes(&mut buf).map_err(|_| Error::RngFailure)?;

        // Clear the excess high bits of the top byte so the value is
        // exactly `bits` bits wide, not rounded up to a byte boundary.
        let excess = nbytes * 8 - bits as usize;
        if excess > 0 {
            buf[0] &= 0xffu8 >> excess;
        }

        Ok(BigUint::from_bytes_be(&buf))
    }

    fn uniform_below_inclusive(&mut self, bound: &BigUint) -> Result<BigUint> {
        if bound.is_zero() {
            return Ok(BigUint::zero());
        }

        let bits = bound.bits() as u32;
        loop {
            let candidate = self.uniform_bits(bits)?;
            if &candidate <= bound {
                return Ok(candidate);
            }
        }
    }
}

/// Draws `q` uniform in `[0, bound)`, the paper's exclusive formulation,
/// built on top of [`Csprng::uniform_below_inclusive`] rather than
/// exposed as a third trait method (the only caller is the `q` draw in
/// `fahe1`/`fahe2`, and the source's `+1` discrepancy is easiest to see
/// as a one-line adjustment at the call site, not a separate primitive).
pub(crate) fn uniform_below_exclusive<C: Csprng + ?Sized>(
    rng: &mut C,
    bound: &BigUint,
) -> Result<BigUint> {
    if bound.is_zero() {
        return Ok(BigUint::zero());
    }
    rng.uniform_below_inclusive(&(bound - 1u32))
}
