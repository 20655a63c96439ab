//! Fast Additive Homomorphic Encryption: FAHE1 and FAHE2.
//!
//! Both schemes encode a bounded non-negative integer message into a
//! large integer ciphertext using noise drawn from the Approximate
//! Common Divisor problem, and support adding ciphertexts directly —
//! `decrypt(c1 + c2) == decrypt(c1) + decrypt(c2)` as long as the
//! accumulated noise stays under the scheme's budget. Neither scheme
//! supports multiplication, subtraction, or message comparison on
//! ciphertexts.
//!
//! ```
//! use fahe_core::{Scheme, Variant};
//! use num_bigint::BigUint;
//! use rand::rngs::OsRng;
//!
//! let mut rng = OsRng;
//! let scheme = Scheme::new(&mut rng, Variant::Fahe1, 64, 16, 6, 16, 1_000).unwrap();
//!
//! let a = BigUint::from(40u32);
//! let b = BigUint::from(2u32);
//! let ca = scheme.encrypt(&a, &mut rng).unwrap();
//! let cb = scheme.encrypt(&b, &mut rng).unwrap();
//!
//! assert_eq!(scheme.decrypt(&(ca + cb)), a + b);
//! ```

mod algorithms;
mod errors;
mod fahe1;
mod fahe2;
mod key;
mod layout;
mod params;
mod rng;
mod scheme;

pub use algorithms::generate::{DefaultPrimeGenerator, PrimeGenerator};
pub use errors::{Error, Result};
pub use key::{DecryptKey, EncryptKey, KeyPair};
pub use params::{derive, Derived, Variant};
pub use rng::Csprng;
pub use scheme::Scheme;

pub use num_bigint::BigUint;
