//! # Sponge core: padding, absorb, squeeze
//!
//! The message is an arbitrary-precision non-negative integer with
//! big-endian bit semantics, carried in any `ruint::Uint` wide enough to
//! hold the padded form (the message plus one appended bit plus up to `r`
//! zero bits). The digest is the `n`-bit result as a `U256`.
//!
//! # Usage
//!
//! ```
//! use quark_crypto::{u_quark, U256};
//!
//! let quark = u_quark();
//! let digest = quark.hash(U256::from(0x1234u64), 0);
//! assert_eq!(digest, quark.hash(U256::from(0x1234u64), 0));
//! ```

use crate::bits::{mask128, to_blocks};
use crate::config::Config;
use crate::permutation::{State, permute};
use ruint::{Uint, aliases::U256};

impl Config {
    /// Pad `message` to a whole number of rate-sized blocks.
    ///
    /// Appends a single `1` bit (`m' = m << 1 | 1`), then zero-fills up to
    /// the next block boundary; a message that is already aligned after
    /// the appended bit gains a full extra block of zeros. `prefix_zeros`
    /// counts implicit leading zero bits of the message. Returns the
    /// padded integer and the number of blocks to absorb.
    pub fn initialise<const BITS: usize, const LIMBS: usize>(
        &self,
        message: Uint<BITS, LIMBS>,
        prefix_zeros: usize,
    ) -> (Uint<BITS, LIMBS>, usize) {
        let rate = self.rate as usize;
        let mut padded = message << 1usize;
        padded.set_bit(0, true);
        let length = padded.bit_len() + prefix_zeros;
        padded <<= rate - length % rate;
        (padded, (prefix_zeros + length).div_ceil(rate))
    }

    /// Absorb `blocks` rate-sized blocks of the padded message, most
    /// significant block first, into a fresh IV-loaded state.
    pub(crate) fn absorb<const BITS: usize, const LIMBS: usize>(
        &self,
        padded: Uint<BITS, LIMBS>,
        blocks: usize,
    ) -> State {
        let mut state = self.initial_state();
        for block in to_blocks(padded, self.rate, blocks) {
            state.y ^= block as u128;
            state = permute(self, &state);
        }
        state
    }

    /// Extract the `n`-bit digest from the absorbed state, `r` bits per
    /// permutation call; the last extraction is OR'd in without a further
    /// shift or permutation.
    pub(crate) fn squeeze(&self, state: State) -> U256 {
        let rate_mask = mask128(self.rate);
        let mut state = state;
        let mut digest = U256::ZERO;
        for _ in 0..self.output_bits / self.rate - 1 {
            digest |= U256::from(state.y & rate_mask);
            digest <<= self.rate as usize;
            state = permute(self, &state);
        }
        digest | U256::from(state.y & rate_mask)
    }

    /// Hash `message` under this configuration.
    ///
    /// Pure and deterministic; cannot fail once the configuration exists.
    pub fn hash<const BITS: usize, const LIMBS: usize>(
        &self,
        message: Uint<BITS, LIMBS>,
        prefix_zeros: usize,
    ) -> U256 {
        let (padded, blocks) = self.initialise(message, prefix_zeros);
        self.squeeze(self.absorb(padded, blocks))
    }
}
