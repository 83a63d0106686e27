#![no_std]
#![doc = include_str!("../README.md")]

mod bits;
mod config;
mod permutation;
mod sponge;
mod variants;

pub use bits::{get_bit, to_blocks};
pub use config::{Config, ConfigBuilder, ConfigError, FeedbackFn, Params, TapFn};
pub use variants::{D_QUARK, S_QUARK, U_QUARK, u_quark};

pub use ruint::{self, Uint, aliases::U256}; // For message and digest handling

/// Widest supported sponge state in bits (`r + c`).
pub const MAX_STATE_BITS: u32 = 256;

/// Widest supported rate in bits (message blocks are carried as `u64`).
pub const MAX_RATE_BITS: u32 = 64;
