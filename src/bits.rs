//! Bit and block utilities shared by the permutation and the sponge.

use ruint::Uint;
use ruint::aliases::U256;

/// Extract bit `i` (0 = least significant) of `value` as `0` or `1`.
///
/// Bits beyond the container width read as `0`.
#[inline(always)]
pub const fn get_bit(value: u128, i: u32) -> u128 {
    if i >= u128::BITS {
        0
    } else {
        (value >> i) & 1
    }
}

/// `k` low one-bits, `0 <= k <= 128`.
#[inline(always)]
pub(crate) const fn mask128(k: u32) -> u128 {
    if k == 0 { 0 } else { u128::MAX >> (u128::BITS - k) }
}

/// `k` low one-bits, `0 <= k <= 64`.
#[inline(always)]
pub(crate) const fn mask64(k: u32) -> u64 {
    if k == 0 { 0 } else { u64::MAX >> (u64::BITS - k) }
}

/// Smallest `k` with `2^k >= n`, for `n >= 2`.
#[inline(always)]
pub(crate) const fn ceil_log2(n: u32) -> u32 {
    u32::BITS - (n - 1).leading_zeros()
}

/// Low 128 bits of a `U256`.
#[inline(always)]
pub(crate) fn low_u128(value: &U256) -> u128 {
    let limbs = value.as_limbs();
    (limbs[1] as u128) << 64 | limbs[0] as u128
}

/// Split `value` into `count` blocks of `width` bits each, taken from the
/// least-significant end, yielded most-significant block first.
///
/// Absorb relies on this exact ordering. `width` must be in `1..=64`.
pub fn to_blocks<const BITS: usize, const LIMBS: usize>(
    value: Uint<BITS, LIMBS>,
    width: u32,
    count: usize,
) -> impl Iterator<Item = u64> {
    debug_assert!(width >= 1 && width <= u64::BITS);
    (0..count)
        .rev()
        .map(move |i| (value >> (i * width as usize)).as_limbs()[0] & mask64(width))
}
