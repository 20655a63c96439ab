//! Public facade: construct a [`Scheme`] once, then `encrypt`/`decrypt`
//! through it without re-deriving parameters or re-touching key
//! generation on every call.

use num_bigint::BigUint;
use num_traits::One;
use rand_core::CryptoRngCore;
use tracing::{debug, instrument};

use crate::algorithms::generate::{DefaultPrimeGenerator, PrimeGenerator};
use crate::errors::{Error, Result};
use crate::key::{self, DecryptKey, EncryptKey, KeyPair};
use crate::params::{derive, Derived, Variant};
use crate::{fahe1, fahe2};

/// A configured instance of FAHE1 or FAHE2: derived bit-widths plus a
/// generated key pair, ready to encrypt and decrypt messages bounded by
/// `m_max` bits.
#[derive(Debug, Clone)]
pub struct Scheme {
    variant: Variant,
    lambda: u32,
    m_max: u32,
    alpha: u32,
    /// Advisory upper bound on message width used by callers to size
    /// random message draws; the core itself only enforces `m_max`.
    msg_size: u32,
    /// The caller's declared homomorphic-addition budget. Stored for
    /// callers that want to track it; never enforced by `encrypt`,
    /// `encrypt_batch`, or `decrypt`.
    num_additions: u64,
    derived: Derived,
    encrypt_key: EncryptKey,
    decrypt_key: DecryptKey,
}

impl Scheme {
    /// Derives (ρ, η, γ) from (λ, m_max, α) and generates a fresh key
    /// pair for `variant`, using the library's own prime generator.
    pub fn new<R: CryptoRngCore + ?Sized>(
        rng: &mut R,
        variant: Variant,
        lambda: u32,
        m_max: u32,
        alpha: u32,
        msg_size: u32,
        num_additions: u64,
    ) -> Result<Self> {
        Self::new_with_prime_generator(
            rng,
            &DefaultPrimeGenerator,
            variant,
            lambda,
            m_max,
            alpha,
            msg_size,
            num_additions,
        )
    }

    /// Same as [`Scheme::new`], but with the prime source overridden by
    /// `prime_gen` instead of [`DefaultPrimeGenerator`] — the seam a
    /// deterministic test suite substitutes a fixed or otherwise
    /// scripted prime for.
    #[instrument(skip(rng, prime_gen), fields(?variant, lambda, m_max, alpha))]
    pub fn new_with_prime_generator<R: CryptoRngCore + ?Sized, G: PrimeGenerator>(
        rng: &mut R,
        prime_gen: &G,
        variant: Variant,
        lambda: u32,
        m_max: u32,
        alpha: u32,
        msg_size: u32,
        num_additions: u64,
    ) -> Result<Self> {
        let derived = derive(variant, lambda, m_max, alpha)?;
        let KeyPair {
            encrypt: encrypt_key,
            decrypt: decrypt_key,
        } = key::generate(rng, prime_gen, variant, lambda, m_max, alpha, &derived)?;

        debug!(rho = derived.rho, eta = derived.eta, gamma = derived.gamma, "scheme ready");

        Ok(Scheme {
            variant,
            lambda,
            m_max,
            alpha,
            msg_size,
            num_additions,
            derived,
            encrypt_key,
            decrypt_key,
        })
    }

    /// Builds a scheme from a key pair generated elsewhere, e.g. one
    /// whose [`EncryptKey`] was transmitted to a different party than
    /// the one holding the matching [`DecryptKey`].
    pub fn from_keys(
        variant: Variant,
        lambda: u32,
        m_max: u32,
        alpha: u32,
        msg_size: u32,
        num_additions: u64,
        encrypt_key: EncryptKey,
        decrypt_key: DecryptKey,
    ) -> Result<Self> {
        let derived = derive(variant, lambda, m_max, alpha)?;
        Ok(Scheme {
            variant,
            lambda,
            m_max,
            alpha,
            msg_size,
            num_additions,
            derived,
            encrypt_key,
            decrypt_key,
        })
    }

    /// Encrypts `m`, which must satisfy `0 <= m < 2^m_max`.
    pub fn encrypt<R: CryptoRngCore + ?Sized>(&self, m: &BigUint, rng: &mut R) -> Result<BigUint> {
        self.validate_message(m)?;
        match &self.encrypt_key {
            EncryptKey::Fahe1 {
                p,
                x_bound,
                rho,
                alpha,
            } => fahe1::encrypt(p, x_bound, *rho, *alpha, m, rng),
            EncryptKey::Fahe2 {
                p,
                x_bound,
                pos,
                m_max,
                lambda,
                alpha,
            } => fahe2::encrypt(p, x_bound, *pos, *m_max, *lambda, *alpha, m, rng),
        }
    }

    /// Encrypts each message independently; ciphertext `i` corresponds
    /// to `ms[i]`.
    pub fn encrypt_batch<R: CryptoRngCore + ?Sized>(
        &self,
        ms: &[BigUint],
        rng: &mut R,
    ) -> Result<Vec<BigUint>> {
        ms.iter().map(|m| self.encrypt(m, rng)).collect()
    }

    /// Decrypts `c`, returning whatever `m_max`-bit value the ciphertext
    /// reduces to. A ciphertext whose accumulated noise exceeded the
    /// scheme's budget decrypts to garbage rather than an error; callers
    /// that add ciphertexts must track that budget themselves (§8, S5).
    pub fn decrypt(&self, c: &BigUint) -> BigUint {
        match &self.decrypt_key {
            DecryptKey::Fahe1 {
                p,
                m_max,
                rho,
                alpha,
            } => fahe1::decrypt(p, *m_max, *rho, *alpha, c),
            DecryptKey::Fahe2 {
                p,
                pos,
                m_max,
                alpha,
            } => fahe2::decrypt(p, *pos, *m_max, *alpha, c),
        }
    }

    pub fn variant(&self) -> Variant {
        self.variant
    }

    pub fn lambda(&self) -> u32 {
        self.lambda
    }

    pub fn m_max(&self) -> u32 {
        self.m_max
    }

    pub fn alpha(&self) -> u32 {
        self.alpha
    }

    pub fn msg_size(&self) -> u32 {
        self.msg_size
    }

    pub fn num_additions(&self) -> u64 {
        self.num_additions
    }

    pub fn derived(&self) -> Derived {
        self.derived
    }

    pub fn encrypt_key(&self) -> &EncryptKey {
        &self.encrypt_key
    }

    pub fn decrypt_key(&self) -> &DecryptKey {
        &self.decrypt_key
    }

    fn validate_message(&self, m: &BigUint) -> Result<()> {
        let bound = BigUint::one() << self.m_max as usize;
        if m >= &bound {
            return Err(Error::InvalidMessage {
                value: m.clone(),
                m_max: self.m_max,
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand_chacha::{rand_core::SeedableRng, ChaCha8Rng};

    #[test]
    fn fahe1_round_trip_through_scheme() {
        let mut rng = ChaCha8Rng::from_seed([42; 32]);
        let scheme = Scheme::new(&mut rng, Variant::Fahe1, 64, 16, 6, 16, 1_000).unwrap();
        let m = BigUint::from(12345u32);
        let c = scheme.encrypt(&m, &mut rng).unwrap();
        assert_eq!(scheme.decrypt(&c), m);
    }

    #[test]
    fn fahe2_round_trip_through_scheme() {
        let mut rng = ChaCha8Rng::from_seed([43; 32]);
        let scheme = Scheme::new(&mut rng, Variant::Fahe2, 48, 16, 5, 16, 1_000).unwrap();
        let m = BigUint::from(777u32);
        let c = scheme.encrypt(&m, &mut rng).unwrap();
        assert_eq!(scheme.decrypt(&c), m);
    }

    #[test]
    fn rejects_out_of_range_message() {
        let mut rng = ChaCha8Rng::from_seed([44; 32]);
        let scheme = Scheme::new(&mut rng, Variant::Fahe1, 64, 8, 6, 8, 1_000).unwrap();
        let too_big = BigUint::from(256u32);
        let err = scheme.encrypt(&too_big, &mut rng).unwrap_err();
        assert_eq!(
            err,
            Error::InvalidMessage {
                value: too_big,
                m_max: 8
            }
        );
    }

    #[test]
    fn encrypt_batch_preserves_order() {
        let mut rng = ChaCha8Rng::from_seed([45; 32]);
        let scheme = Scheme::new(&mut rng, Variant::Fahe1, 64, 16, 6, 16, 1_000).unwrap();
        let ms: Vec<BigUint> = (0u32..10).map(BigUint::from).collect();
        let cs = scheme.encrypt_batch(&ms, &mut rng).unwrap();
        let decrypted: Vec<BigUint> = cs.iter().map(|c| scheme.decrypt(c)).collect();
        assert_eq!(decrypted, ms);
    }

    #[test]
    fn from_keys_reconstructs_working_scheme() {
        let mut rng = ChaCha8Rng::from_seed([46; 32]);
        let original = Scheme::new(&mut rng, Variant::Fahe1, 64, 16, 6, 16, 1_000).unwrap();
        let rebuilt = Scheme::from_keys(
            Variant::Fahe1,
            64,
            16,
            6,
            16,
            1_000,
            original.encrypt_key().clone(),
            original.decrypt_key().clone(),
        )
        .unwrap();
        let m = BigUint::from(999u32);
        let c = rebuilt.encrypt(&m, &mut rng).unwrap();
        assert_eq!(rebuilt.decrypt(&c), m);
    }

    #[test]
    fn accessors_expose_construction_parameters() {
        let mut rng = ChaCha8Rng::from_seed([47; 32]);
        let scheme = Scheme::new(&mut rng, Variant::Fahe2, 48, 16, 5, 16, 2_048).unwrap();
        assert_eq!(scheme.variant(), Variant::Fahe2);
        assert_eq!(scheme.lambda(), 48);
        assert_eq!(scheme.m_max(), 16);
        assert_eq!(scheme.alpha(), 5);
        assert_eq!(scheme.msg_size(), 16);
        assert_eq!(scheme.num_additions(), 2_048);
    }

    #[test]
    fn new_with_prime_generator_overrides_prime_source() {
        use crate::algorithms::generate::PrimeGenerator;
        use crate::errors::Error as FaheError;
        use rand_core::CryptoRngCore;

        struct AlwaysFailGenerator;
        impl PrimeGenerator for AlwaysFailGenerator {
            fn generate<R: CryptoRngCore + ?Sized>(
                &self,
                _rng: &mut R,
                _bits: u32,
            ) -> crate::errors::Result<BigUint> {
                Err(FaheError::PrimeGenerationFailure)
            }
        }

        let mut rng = ChaCha8Rng::from_seed([48; 32]);
        let err = Scheme::new_with_prime_generator(
            &mut rng,
            &AlwaysFailGenerator,
            Variant::Fahe1,
            64,
            16,
            6,
            16,
            1_000,
        )
        .unwrap_err();
        assert_eq!(err, FaheError::PrimeGenerationFailure);
    }
}
