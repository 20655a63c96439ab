//! Key material for both scheme variants.
//!
//! The two halves of a key carry different data: the encrypting party
//! needs `p` and the bound on `q`, the decrypting party needs `p` and
//! `m_max` (and, for FAHE2, the padding offset `pos`). Rather than a
//! single struct both parties share with fields the other ignores, this
//! module keeps the projection each side actually uses, tagged by
//! variant so encrypt/decrypt never has to guess which layout applies.

use num_bigint::BigUint;
use num_traits::{One, ToPrimitive};
use rand_core::CryptoRngCore;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::algorithms::generate::PrimeGenerator;
use crate::errors::{Error, Result};
use crate::params::{Derived, Variant};
use crate::rng::Csprng;

/// The half of a key an encrypting party holds.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum EncryptKey {
    Fahe1 {
        p: BigUint,
        x_bound: BigUint,
        rho: u32,
        alpha: u32,
    },
    Fahe2 {
        p: BigUint,
        x_bound: BigUint,
        pos: u32,
        m_max: u32,
        lambda: u32,
        alpha: u32,
    },
}

/// The half of a key a decrypting party holds.
///
/// `p` is the only secret either projection carries; the other fields
/// are public layout parameters reproduced here so decryption doesn't
/// need the [`crate::Scheme`] that created the key still in scope.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum DecryptKey {
    Fahe1 {
        p: BigUint,
        m_max: u32,
        rho: u32,
        alpha: u32,
    },
    Fahe2 {
        p: BigUint,
        pos: u32,
        m_max: u32,
        alpha: u32,
    },
}

impl Drop for DecryptKey {
    fn drop(&mut self) {
        // `BigUint` has no `Zeroize` impl (its backing `Vec<u32>` can be
        // reallocated across arithmetic, so there is no single buffer a
        // derive could scrub); this overwrite is a best-effort reset of
        // the value this struct currently holds, not a guarantee that no
        // copy of `p` was ever left behind in memory reclaimed earlier.
        let p = match self {
            DecryptKey::Fahe1 { p, .. } => p,
            DecryptKey::Fahe2 { p, .. } => p,
        };
        *p = BigUint::from(0u32);
    }
}

/// A freshly generated key pair.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyPair {
    pub encrypt: EncryptKey,
    pub decrypt: DecryptKey,
}

/// Generates a key pair for `variant` from the derived (ρ, η, γ)
/// bit-widths and the caller's (λ, m_max, α). `prime_gen` is the
/// overridable source of the secret prime `p` (see
/// [`crate::Scheme::new_with_prime_generator`]).
pub fn generate<R: CryptoRngCore + ?Sized, G: PrimeGenerator>(
    rng: &mut R,
    prime_gen: &G,
    variant: Variant,
    lambda: u32,
    m_max: u32,
    alpha: u32,
    derived: &Derived,
) -> Result<KeyPair> {
    let p = prime_gen.generate(rng, derived.eta)?;
    let x_bound = compute_x_bound(derived.gamma, &p);

    let pair = match variant {
        Variant::Fahe1 => KeyPair {
            encrypt: EncryptKey::Fahe1 {
                p: p.clone(),
                x_bound,
                rho: derived.rho,
                alpha,
            },
            decrypt: DecryptKey::Fahe1 {
                p,
                m_max,
                rho: derived.rho,
                alpha,
            },
        },
        Variant::Fahe2 => {
            let pos = draw_pos(rng, lambda)?;
            KeyPair {
                encrypt: EncryptKey::Fahe2 {
                    p: p.clone(),
                    x_bound,
                    pos,
                    m_max,
                    lambda,
                    alpha,
                },
                decrypt: DecryptKey::Fahe2 {
                    p,
                    pos,
                    m_max,
                    alpha,
                },
            }
        }
    };

    Ok(pair)
}

/// `q` is drawn from `[0, floor(2^gamma / p))`; this is the exclusive
/// upper bound on that range, computed once at keygen time so encryption
/// doesn't repeat the division on every call.
fn compute_x_bound(gamma: u32, p: &BigUint) -> BigUint {
    let numerator = BigUint::one() << gamma as usize;
    &numerator / p
}

/// FAHE2 places the message at a random bit offset `pos` in
/// `[0, lambda]`, uniform over the whole padding budget rather than
/// fixed, so a ciphertext's message position cannot be inferred from
/// the scheme's public parameters alone.
fn draw_pos<R: CryptoRngCore + ?Sized>(rng: &mut R, lambda: u32) -> Result<u32> {
    let bound = BigUint::from(lambda);
    let pos = rng.uniform_below_inclusive(&bound)?;
    pos.to_u32().ok_or(Error::RngFailure)
}
