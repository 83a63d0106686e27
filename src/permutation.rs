//! # QUARK permutation P
//!
//! The state is a pair of NLFSR halves `X` and `Y` of `b/2` bits each,
//! `b = r + c`. One call runs `4·b` rounds; each round shifts both halves
//! left by one and feeds in a new bit built from the variant's Boolean
//! network, with an auxiliary accumulator `L` of `ceil(log2(4b))` bits
//! driving the shared tap `h`.

use crate::bits::{ceil_log2, get_bit, mask128};
use crate::config::Config;
use zeroize::{Zeroize, ZeroizeOnDrop};

/// Sponge state: the two register halves of `b/2` bits each.
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
pub(crate) struct State {
    pub(crate) x: u128,
    pub(crate) y: u128,
}

/// Apply the permutation P for `config` to `state`.
///
/// All three register updates in a round read the pre-round values of
/// `X`, `Y` and `L`; the NLFSR update is synchronous, not sequential.
pub(crate) fn permute(config: &Config, state: &State) -> State {
    let b = config.width();
    let half = b / 2;
    let mask_half = mask128(half);
    let mask_l = mask128(ceil_log2(4 * b));

    let mut x = state.x;
    let mut y = state.y;
    let mut l = mask_l;

    for _ in 0..4 * b {
        let ht = (config.h)(x, y, l);
        let x_next = ((x << 1) | (get_bit(y, half - 1) ^ (config.f)(x) ^ ht)) & mask_half;
        let y_next = ((y << 1) | ((config.g)(y) ^ ht)) & mask_half;
        let l_next = ((y << 1) | ((config.p)(l) ^ ht)) & mask_l;
        x = x_next;
        y = y_next;
        l = l_next;
    }

    State { x, y }
}
