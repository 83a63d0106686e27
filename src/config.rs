//! Variant configuration records and their construction-time validation.
//!
//! A [`Config`] is an immutable `{r, c, n, IV, f, g, h, p}` record. All
//! validation happens when the record is built; once a `Config` exists,
//! hashing with it cannot fail. Incomplete variants (published parameters
//! without their Boolean functions) are rejected by the builder instead of
//! defaulting to zero or identity.

use crate::bits::{low_u128, mask128};
use crate::permutation::State;
use crate::{MAX_RATE_BITS, MAX_STATE_BITS};
use ruint::aliases::U256;

/// Single-register Boolean feedback function (`f`, `g`, `p`); returns `0` or `1`.
pub type FeedbackFn = fn(u128) -> u128;

/// Shared feedback tap `h(X, Y, L)`; returns `0` or `1`.
pub type TapFn = fn(u128, u128, u128) -> u128;

/// Published geometry of a QUARK variant: rate `r`, capacity `c`, output
/// length `n` (all in bits) and the `r + c`-bit initialisation vector.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Params {
    pub rate: u32,
    pub capacity: u32,
    pub output_bits: u32,
    pub iv: U256,
}

/// Rejected configuration, detected when building a [`Config`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigError {
    /// A Boolean feedback function was not supplied (incomplete configuration).
    MissingFunction(&'static str),
    /// `r`, `c` or `n` is zero.
    ZeroGeometry,
    /// `n` is not a positive multiple of `r`; squeeze works in `r`-bit steps.
    OutputNotRateMultiple { output_bits: u32, rate: u32 },
    /// `r + c` is odd and cannot be split into two register halves.
    OddStateWidth { width: u32 },
    /// `r + c` exceeds the 256-bit state container.
    StateTooWide { width: u32 },
    /// `r > c`; absorbed blocks must fit inside the low state half.
    RateExceedsCapacity { rate: u32, capacity: u32 },
    /// `r` exceeds the 64-bit block container.
    RateTooWide { rate: u32 },
    /// The initialisation vector does not fit in `r + c` bits.
    IvTooWide { iv_bits: usize, width: u32 },
}

impl core::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::MissingFunction(name) => {
                write!(f, "incomplete configuration: Boolean function `{name}` not supplied")
            }
            Self::ZeroGeometry => write!(f, "rate, capacity and output length must be positive"),
            Self::OutputNotRateMultiple { output_bits, rate } => {
                write!(f, "output length {output_bits} is not a multiple of rate {rate}")
            }
            Self::OddStateWidth { width } => {
                write!(f, "state width {width} is odd and cannot be halved")
            }
            Self::StateTooWide { width } => {
                write!(f, "state width {width} exceeds {MAX_STATE_BITS} bits")
            }
            Self::RateExceedsCapacity { rate, capacity } => {
                write!(f, "rate {rate} exceeds capacity {capacity}")
            }
            Self::RateTooWide { rate } => {
                write!(f, "rate {rate} exceeds {MAX_RATE_BITS} bits")
            }
            Self::IvTooWide { iv_bits, width } => {
                write!(f, "initialisation vector has {iv_bits} bits, state only {width}")
            }
        }
    }
}

impl core::error::Error for ConfigError {}

/// A complete, validated QUARK variant configuration.
#[derive(Clone, Debug)]
pub struct Config {
    pub(crate) rate: u32,
    pub(crate) capacity: u32,
    pub(crate) output_bits: u32,
    pub(crate) iv: U256,
    pub(crate) f: FeedbackFn,
    pub(crate) g: FeedbackFn,
    pub(crate) h: TapFn,
    pub(crate) p: FeedbackFn,
}

impl Config {
    /// Start building a configuration from published parameters.
    pub fn builder(params: Params) -> ConfigBuilder {
        ConfigBuilder {
            params,
            f: None,
            g: None,
            h: None,
            p: None,
        }
    }

    /// Rate `r` in bits.
    pub const fn rate(&self) -> u32 {
        self.rate
    }

    /// Capacity `c` in bits.
    pub const fn capacity(&self) -> u32 {
        self.capacity
    }

    /// Output length `n` in bits.
    pub const fn output_bits(&self) -> u32 {
        self.output_bits
    }

    /// State width `b = r + c` in bits.
    pub(crate) const fn width(&self) -> u32 {
        self.rate + self.capacity
    }

    /// Fresh sponge state loaded with the IV, split into register halves.
    pub(crate) fn initial_state(&self) -> State {
        let half = self.width() / 2;
        State {
            x: low_u128(&(self.iv >> half as usize)) & mask128(half),
            y: low_u128(&self.iv) & mask128(half),
        }
    }
}

/// Builder collecting the Boolean functions for a [`Params`] record.
#[derive(Clone)]
pub struct ConfigBuilder {
    params: Params,
    f: Option<FeedbackFn>,
    g: Option<FeedbackFn>,
    h: Option<TapFn>,
    p: Option<FeedbackFn>,
}

impl ConfigBuilder {
    /// Feedback function of the X register.
    pub fn f(mut self, f: FeedbackFn) -> Self {
        self.f = Some(f);
        self
    }

    /// Feedback function of the Y register.
    pub fn g(mut self, g: FeedbackFn) -> Self {
        self.g = Some(g);
        self
    }

    /// Shared feedback tap over `X`, `Y` and `L`.
    pub fn h(mut self, h: TapFn) -> Self {
        self.h = Some(h);
        self
    }

    /// Feedback function of the accumulator `L`.
    pub fn p(mut self, p: FeedbackFn) -> Self {
        self.p = Some(p);
        self
    }

    /// Validate and freeze the configuration.
    pub fn build(self) -> Result<Config, ConfigError> {
        let Params {
            rate,
            capacity,
            output_bits,
            iv,
        } = self.params;

        let f = self.f.ok_or(ConfigError::MissingFunction("f"))?;
        let g = self.g.ok_or(ConfigError::MissingFunction("g"))?;
        let h = self.h.ok_or(ConfigError::MissingFunction("h"))?;
        let p = self.p.ok_or(ConfigError::MissingFunction("p"))?;

        if rate == 0 || capacity == 0 || output_bits == 0 {
            return Err(ConfigError::ZeroGeometry);
        }
        if output_bits % rate != 0 {
            return Err(ConfigError::OutputNotRateMultiple { output_bits, rate });
        }
        let width = rate + capacity;
        if width % 2 != 0 {
            return Err(ConfigError::OddStateWidth { width });
        }
        if width > MAX_STATE_BITS {
            return Err(ConfigError::StateTooWide { width });
        }
        if rate > capacity {
            return Err(ConfigError::RateExceedsCapacity { rate, capacity });
        }
        if rate > MAX_RATE_BITS {
            return Err(ConfigError::RateTooWide { rate });
        }
        if iv.bit_len() > width as usize {
            return Err(ConfigError::IvTooWide {
                iv_bits: iv.bit_len(),
                width,
            });
        }

        Ok(Config {
            rate,
            capacity,
            output_bits,
            iv,
            f,
            g,
            h,
            p,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::variants::{D_QUARK, S_QUARK, U_QUARK, u_quark};

    fn zero_feedback(_reg: u128) -> u128 {
        0
    }

    fn zero_tap(_x: u128, _y: u128, _l: u128) -> u128 {
        0
    }

    #[test]
    fn d_quark_without_functions_is_rejected() {
        let err = Config::builder(D_QUARK).build().unwrap_err();
        assert_eq!(err, ConfigError::MissingFunction("f"));
    }

    #[test]
    fn s_quark_without_functions_is_rejected() {
        let err = Config::builder(S_QUARK).build().unwrap_err();
        assert_eq!(err, ConfigError::MissingFunction("f"));
    }

    #[test]
    fn missing_functions_are_named_individually() {
        let err = Config::builder(D_QUARK).f(zero_feedback).build().unwrap_err();
        assert_eq!(err, ConfigError::MissingFunction("g"));

        let err = Config::builder(D_QUARK)
            .f(zero_feedback)
            .g(zero_feedback)
            .build()
            .unwrap_err();
        assert_eq!(err, ConfigError::MissingFunction("h"));

        let err = Config::builder(D_QUARK)
            .f(zero_feedback)
            .g(zero_feedback)
            .h(zero_tap)
            .build()
            .unwrap_err();
        assert_eq!(err, ConfigError::MissingFunction("p"));
    }

    #[test]
    fn d_quark_with_supplied_functions_builds() {
        let config = Config::builder(D_QUARK)
            .f(zero_feedback)
            .g(zero_feedback)
            .h(zero_tap)
            .p(zero_feedback)
            .build()
            .unwrap();
        assert_eq!(config.rate(), 16);
        assert_eq!(config.capacity(), 160);
        assert_eq!(config.output_bits(), 176);
    }

    fn complete(params: Params) -> Result<Config, ConfigError> {
        Config::builder(params)
            .f(zero_feedback)
            .g(zero_feedback)
            .h(zero_tap)
            .p(zero_feedback)
            .build()
    }

    #[test]
    fn geometry_rejection() {
        let err = complete(Params { rate: 0, ..U_QUARK }).unwrap_err();
        assert_eq!(err, ConfigError::ZeroGeometry);

        let err = complete(Params {
            output_bits: 133,
            ..U_QUARK
        })
        .unwrap_err();
        assert_eq!(
            err,
            ConfigError::OutputNotRateMultiple {
                output_bits: 133,
                rate: 8
            }
        );

        let err = complete(Params {
            capacity: 127,
            output_bits: 136,
            ..U_QUARK
        })
        .unwrap_err();
        assert_eq!(err, ConfigError::OddStateWidth { width: 135 });

        let err = complete(Params {
            rate: 32,
            capacity: 226,
            output_bits: 256,
            ..U_QUARK
        })
        .unwrap_err();
        assert_eq!(err, ConfigError::StateTooWide { width: 258 });

        let err = complete(Params {
            rate: 64,
            capacity: 62,
            output_bits: 128,
            iv: ruint::aliases::U256::ZERO,
        })
        .unwrap_err();
        assert_eq!(
            err,
            ConfigError::RateExceedsCapacity {
                rate: 64,
                capacity: 62
            }
        );

        // U-QUARK's 136-bit IV does not fit a narrower state.
        let err = complete(Params {
            rate: 8,
            capacity: 120,
            output_bits: 128,
            ..U_QUARK
        })
        .unwrap_err();
        assert_eq!(
            err,
            ConfigError::IvTooWide {
                iv_bits: 136,
                width: 128
            }
        );
    }

    #[test]
    fn built_in_u_quark_geometry() {
        let config = u_quark();
        assert_eq!(config.rate(), 8);
        assert_eq!(config.capacity(), 128);
        assert_eq!(config.output_bits(), 136);
        assert_eq!(config.width(), 136);
    }

    #[test]
    fn iv_splits_into_register_halves() {
        let state = u_quark().initial_state();
        assert_eq!(state.x, 0xD8DACA44414A09971);
        assert_eq!(state.y, 0x9C80AA3AF065644DB);
    }

    #[test]
    fn error_messages_name_the_missing_component() {
        extern crate std;
        use std::string::ToString;

        let err = Config::builder(S_QUARK).build().unwrap_err();
        assert!(err.to_string().contains("incomplete configuration"));
        assert!(err.to_string().contains("`f`"));
    }
}
