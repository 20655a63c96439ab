//! Derivation of the noise/prime/ciphertext bit-widths (ρ, η, γ) from the
//! caller-supplied security parameters (λ, m_max, α).

use crate::errors::{Error, Result};

/// Which of the two ACD-based schemes a [`crate::Scheme`] runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Variant {
    Fahe1,
    Fahe2,
}

/// Derived bit-widths shared by the encrypt and decrypt projections of a
/// key generated under a given (variant, λ, m_max, α).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Derived {
    /// Bit-width of the noise term.
    pub rho: u32,
    /// Bit-width of the secret prime `p`.
    pub eta: u32,
    /// Bit-width of the ciphertext multiplier `q`'s domain.
    pub gamma: u32,
}

/// Computes (ρ, η, γ) for `variant` from (λ, m_max, α).
///
/// Rejects `lambda < 2`, `m_max < 1`, or `alpha < 2` before any
/// randomness is drawn (§8 property 5): with `alpha < 2` the scheme
/// admits no additions and provides no guarantee, and `lambda < 2`
/// would leave `log2(rho)` undefined or non-positive for FAHE1, where
/// `rho == lambda`.
pub fn derive(variant: Variant, lambda: u32, m_max: u32, alpha: u32) -> Result<Derived> {
    if lambda < 2 {
        return Err(Error::InvalidParameter("lambda must be >= 2"));
    }
    if m_max < 1 {
        return Err(Error::InvalidParameter("m_max must be >= 1"));
    }
    if alpha < 2 {
        return Err(Error::InvalidParameter("alpha must be >= 2"));
    }

    let (rho, eta) = match variant {
        Variant::Fahe1 => {
            let rho = lambda;
            let eta = rho + 2 * alpha + m_max;
            (rho, eta)
        }
        Variant::Fahe2 => {
            let rho = lambda + alpha + m_max;
            let eta = rho + alpha;
            (rho, eta)
        }
    };

    let gamma = gamma_bits(rho, eta);

    Ok(Derived { rho, eta, gamma })
}

/// γ = ⌈ρ / log₂(ρ) · (η − ρ)²⌉, computed in `f64` (ρ and η − ρ are
/// always small enough that this never loses the precision that would
/// matter for a bit count) then rounded up to the integer bit-width the
/// rest of the crate shifts and allocates by.
fn gamma_bits(rho: u32, eta: u32) -> u32 {
    let rho_f = f64::from(rho);
    let spread = f64::from(eta - rho);
    let gamma_f = rho_f / rho_f.log2() * spread * spread;
    gamma_f.ceil() as u32
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_small_lambda() {
        assert_eq!(
            derive(Variant::Fahe1, 1, 32, 6),
            Err(Error::InvalidParameter("lambda must be >= 2"))
        );
    }

    #[test]
    fn rejects_zero_m_max() {
        assert_eq!(
            derive(Variant::Fahe1, 128, 0, 6),
            Err(Error::InvalidParameter("m_max must be >= 1"))
        );
    }

    #[test]
    fn rejects_small_alpha() {
        assert_eq!(
            derive(Variant::Fahe1, 128, 32, 1),
            Err(Error::InvalidParameter("alpha must be >= 2"))
        );
    }

    #[test]
    fn fahe1_derivation_matches_formula() {
        let derived = derive(Variant::Fahe1, 128, 32, 6).unwrap();
        assert_eq!(derived.rho, 128);
        assert_eq!(derived.eta, 128 + 12 + 32);
    }

    #[test]
    fn fahe2_derivation_matches_formula() {
        let derived = derive(Variant::Fahe2, 128, 32, 29).unwrap();
        assert_eq!(derived.rho, 128 + 29 + 32);
        assert_eq!(derived.eta, derived.rho + 29);
    }
}
