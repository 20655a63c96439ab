//! Bit-layout helpers shared by [`crate::fahe1`] and [`crate::fahe2`].

use num_bigint::BigUint;
use num_traits::One;

/// Keeps only the low `bits` bits of `value`, i.e. `value mod 2^bits`.
///
/// Both schemes decrypt by reducing mod `p` and shifting off the noise;
/// what's left still has the high bits of `p` itself polluting it when
/// the shifted value exceeds `2^m_max`, so the final step is always this
/// mask against the message width.
pub(crate) fn mask(value: BigUint, bits: u32) -> BigUint {
    let bitmask = (BigUint::one() << bits as usize) - BigUint::one();
    value & bitmask
}
