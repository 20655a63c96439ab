//! FAHE1: a single noise band between the message and the padding.
//!
//! Ciphertext layout, high to low bit: `q*p | m | noise`, where `m`
//! occupies the top `m_max` bits of the non-multiple-of-p remainder and
//! `noise` the low `rho` bits. `alpha` bits of headroom sit above `m`
//! so that summing ciphertexts can't carry the noise band into the
//! message band before the accumulated noise itself overflows `rho`.

use num_bigint::BigUint;

use crate::errors::Result;
use crate::layout::mask;
use crate::rng::{uniform_below_exclusive, Csprng};

pub(crate) fn encrypt<C: Csprng + ?Sized>(
    p: &BigUint,
    x_bound: &BigUint,
    rho: u32,
    alpha: u32,
    m: &BigUint,
    rng: &mut C,
) -> Result<BigUint> {
    let q = uniform_below_exclusive(rng, x_bound)?;
    let noise = rng.uniform_bits(rho)?;
    let encoded = (m << (rho + alpha) as usize) + noise;
    Ok(p * &q + encoded)
}

pub(crate) fn decrypt(p: &BigUint, m_max: u32, rho: u32, alpha: u32, c: &BigUint) -> BigUint {
    let reduced = c % p;
    let shifted = reduced >> (rho + alpha) as usize;
    mask(shifted, m_max)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand_chacha::{rand_core::SeedableRng, ChaCha8Rng};

    use crate::algorithms::generate::DefaultPrimeGenerator;
    use crate::key::generate;
    use crate::params::{derive, Variant};

    #[test]
    fn encrypt_then_decrypt_recovers_message() {
        let mut rng = ChaCha8Rng::from_seed([42; 32]);
        let derived = derive(Variant::Fahe1, 64, 16, 6).unwrap();
        let pair = generate(
            &mut rng,
            &DefaultPrimeGenerator,
            Variant::Fahe1,
            64,
            16,
            6,
            &derived,
        )
        .unwrap();

        let (p, x_bound, rho, alpha) = match &pair.encrypt {
            crate::key::EncryptKey::Fahe1 {
                p,
                x_bound,
                rho,
                alpha,
            } => (p.clone(), x_bound.clone(), *rho, *alpha),
            _ => unreachable!(),
        };
        let dp = match &pair.decrypt {
            crate::key::DecryptKey::Fahe1 { p, .. } => p.clone(),
            _ => unreachable!(),
        };

        for m in [0u32, 1, 255, 1000, 65535] {
            let m = BigUint::from(m);
            let c = encrypt(&p, &x_bound, rho, alpha, &m, &mut rng).unwrap();
            let recovered = decrypt(&dp, 16, rho, alpha, &c);
            assert_eq!(recovered, m);
        }
    }

    #[test]
    fn additive_homomorphism_holds_within_budget() {
        let mut rng = ChaCha8Rng::from_seed([7; 32]);
        let derived = derive(Variant::Fahe1, 64, 16, 6).unwrap();
        let pair = generate(
            &mut rng,
            &DefaultPrimeGenerator,
            Variant::Fahe1,
            64,
            16,
            6,
            &derived,
        )
        .unwrap();

        let (p, x_bound, rho, alpha) = match &pair.encrypt {
            crate::key::EncryptKey::Fahe1 {
                p,
                x_bound,
                rho,
                alpha,
            } => (p.clone(), x_bound.clone(), *rho, *alpha),
            _ => unreachable!(),
        };
        let dp = match &pair.decrypt {
            crate::key::DecryptKey::Fahe1 { p, .. } => p.clone(),
            _ => unreachable!(),
        };

        let m1 = BigUint::from(123u32);
        let m2 = BigUint::from(456u32);
        let c1 = encrypt(&p, &x_bound, rho, alpha, &m1, &mut rng).unwrap();
        let c2 = encrypt(&p, &x_bound, rho, alpha, &m2, &mut rng).unwrap();
        let sum_c = c1 + c2;
        let recovered = decrypt(&dp, 16, rho, alpha, &sum_c);
        assert_eq!(recovered, m1 + m2);
    }
}
