//! FAHE2: a noise band split on either side of the message, offset by a
//! per-key random position `pos`.
//!
//! Ciphertext layout, high to low bit: `q*p | noise2 | m | noise1`,
//! where `m` sits at bit offset `pos + alpha` and `noise1` fills the low
//! `pos` bits. `noise2` fills the remaining `lambda - pos` bits above
//! the message so the total noise budget is always `lambda` bits
//! regardless of where `pos` lands, while hiding the message's bit
//! position from anyone without the key.

use num_bigint::BigUint;

use crate::errors::Result;
use crate::layout::mask;
use crate::rng::{uniform_below_exclusive, Csprng};

pub(crate) fn encrypt<C: Csprng + ?Sized>(
    p: &BigUint,
    x_bound: &BigUint,
    pos: u32,
    m_max: u32,
    lambda: u32,
    alpha: u32,
    m: &BigUint,
    rng: &mut C,
) -> Result<BigUint> {
    let q = uniform_below_exclusive(rng, x_bound)?;
    let noise1 = rng.uniform_bits(pos)?;
    let noise2 = rng.uniform_bits(lambda - pos)?;
    let high = noise2 << (pos + m_max + alpha) as usize;
    let mid = m << (pos + alpha) as usize;
    let encoded = high + mid + noise1;
    Ok(p * &q + encoded)
}

pub(crate) fn decrypt(p: &BigUint, pos: u32, m_max: u32, alpha: u32, c: &BigUint) -> BigUint {
    let reduced = c % p;
    let shifted = reduced >> (pos + alpha) as usize;
    mask(shifted, m_max)
}
