//! Generates the secret prime `p` for a FAHE key.

use crypto_bigint::BoxedUint;
use crypto_primes::{
    hazmat::{SetBits, SmallPrimesSieveFactory},
    is_prime_with_rng, sieve_and_find,
};
use num_bigint::BigUint;
use rand_core::CryptoRngCore;
use tracing::debug;

use crate::errors::{Error, Result};

/// Generates a uniformly random prime `p` with exactly `bits` bits, i.e.
/// `p` in `[2^(bits-1), 2^bits)`.
///
/// Does the search in `crypto_bigint`'s `BoxedUint` via `crypto_primes`
/// (the same sieve-then-Miller–Rabin pipeline RSA key generation in this
/// family uses for its factors) and converts the result into a
/// `BigUint`, which the rest of the crate uses for its bit-layout
/// arithmetic. Unlike RSA, which sets the top *two* bits of each factor
/// so their product reliably spans the full modulus width, FAHE only
/// needs `p` itself to land in `[2^(eta-1), 2^eta)`, so only the top bit
/// is forced here.
pub fn generate_prime<R: CryptoRngCore + ?Sized>(rng: &mut R, bits: u32) -> Result<BigUint> {
    if bits < 2 {
        return Err(Error::PrimeGenerationFailure);
    }

    let p = sieve_and_find(
        rng,
        SmallPrimesSieveFactory::new(bits, SetBits::Msb),
        is_prime_with_rng,
    )
    .ok_or(Error::PrimeGenerationFailure)?;

    debug!(bits, "generated FAHE prime");

    Ok(to_biguint(&p))
}

fn to_biguint(uint: &BoxedUint) -> BigUint {
    BigUint::from_bytes_be(&uint.to_be_bytes())
}

/// Overridable source of the secret prime `p`, mirroring [`crate::Csprng`]:
/// the library provides [`DefaultPrimeGenerator`], and callers who need a
/// deterministic or otherwise substituted prime source for testing can
/// supply their own by implementing this trait and calling
/// [`crate::Scheme::new_with_prime_generator`].
pub trait PrimeGenerator {
    /// Produces a prime of exactly `bits` bits.
    fn generate<R: CryptoRngCore + ?Sized>(&self, rng: &mut R, bits: u32) -> Result<BigUint>;
}

/// The library's own prime source: sieve + Miller–Rabin via
/// [`generate_prime`].
#[derive(Debug, Clone, Copy, Default)]
pub struct DefaultPrimeGenerator;

impl PrimeGenerator for DefaultPrimeGenerator {
    fn generate<R: CryptoRngCore + ?Sized>(&self, rng: &mut R, bits: u32) -> Result<BigUint> {
        generate_prime(rng, bits)
    }
}
