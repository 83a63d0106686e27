//! Published QUARK variant parameters and the U-QUARK Boolean network.
//!
//! Only U-QUARK carries its feedback functions here. The D-QUARK and
//! S-QUARK parameter sets are published, but their `f`/`g`/`h`/`p`
//! networks are per-variant and not derivable from U-QUARK by analogy;
//! they must be transcribed from the QUARK paper and supplied through
//! [`Config::builder`] before either variant can hash anything.

use crate::bits::get_bit;
use crate::config::{Config, Params};
use ruint::uint;

/// U-QUARK: r = 8, c = 128, n = 136.
pub const U_QUARK: Params = Params {
    rate: 8,
    capacity: 128,
    output_bits: 136,
    iv: uint!(0xD8DACA44414A099719C80AA3AF065644DB_U256),
};

/// D-QUARK: r = 16, c = 160, n = 176. Boolean functions not included.
pub const D_QUARK: Params = Params {
    rate: 16,
    capacity: 160,
    output_bits: 176,
    iv: uint!(0xCC6C4AB7D11FA9BDF6EEDE03D87B68F91BAA706C20E9_U256),
};

/// S-QUARK: r = 32, c = 224, n = 256. Boolean functions not included.
pub const S_QUARK: Params = Params {
    rate: 32,
    capacity: 224,
    output_bits: 256,
    iv: uint!(0x397251CEE1DE8AA73EA26250C6D7BE128CD3E79DD718C24B8A19D09C2492DA5D_U256),
};

/// The complete U-QUARK configuration.
pub fn u_quark() -> Config {
    Config {
        rate: U_QUARK.rate,
        capacity: U_QUARK.capacity,
        output_bits: U_QUARK.output_bits,
        iv: U_QUARK.iv,
        f,
        g,
        h,
        p,
    }
}

// The tap positions below index from the most-significant bit of each
// register, as the QUARK paper writes them: bit i of a 68-bit half is
// container bit 67 - i. A single transposed index silently yields a
// different hash, so the expressions are kept term-for-term in the
// paper's order and covered by the known-answer tests.

/// X-register feedback of U-QUARK.
fn f(x: u128) -> u128 {
    let b = |i: u32| get_bit(x, 67 - i);
    b(0) ^ b(9)
        ^ b(14)
        ^ b(21)
        ^ b(28)
        ^ b(33)
        ^ b(37)
        ^ b(45)
        ^ b(50)
        ^ b(52)
        ^ b(55)
        ^ (b(55) & b(59))
        ^ (b(33) & b(37))
        ^ (b(9) & b(15))
        ^ (b(45) & b(52) & b(55))
        ^ (b(21) & b(28) & b(33))
        ^ (b(9) & b(28) & b(45) & b(59))
        ^ (b(33) & b(37) & b(52) & b(55))
        ^ (b(15) & b(21) & b(55) & b(59))
        ^ (b(37) & b(45) & b(52) & b(55) & b(59))
        ^ (b(9) & b(15) & b(21) & b(28) & b(33))
        ^ (b(21) & b(28) & b(33) & b(37) & b(45) & b(52))
}

/// Y-register feedback of U-QUARK.
fn g(y: u128) -> u128 {
    let b = |i: u32| get_bit(y, 67 - i);
    b(0) ^ b(7)
        ^ b(16)
        ^ b(20)
        ^ b(30)
        ^ b(35)
        ^ b(37)
        ^ b(42)
        ^ b(49)
        ^ b(51)
        ^ b(54)
        ^ (b(54) & b(58))
        ^ (b(35) & b(37))
        ^ (b(7) & b(15))
        ^ (b(42) & b(51) & b(54))
        ^ (b(20) & b(30) & b(35))
        ^ (b(7) & b(30) & b(42) & b(58))
        ^ (b(35) & b(37) & b(51) & b(54))
        ^ (b(15) & b(20) & b(54) & b(58))
        ^ (b(37) & b(42) & b(51) & b(54) & b(58))
        ^ (b(7) & b(15) & b(20) & b(30) & b(35))
        ^ (b(20) & b(30) & b(35) & b(37) & b(42) & b(51))
}

/// Shared feedback tap of U-QUARK over both halves and the accumulator.
fn h(x: u128, y: u128, l: u128) -> u128 {
    let bx = |i: u32| get_bit(x, 67 - i);
    let by = |i: u32| get_bit(y, 67 - i);
    let bl = |i: u32| get_bit(l, 9 - i);
    bl(0)
        ^ bx(1)
        ^ by(2)
        ^ bx(4)
        ^ by(10)
        ^ bx(25)
        ^ bx(31)
        ^ by(43)
        ^ bx(56)
        ^ by(59)
        ^ (by(3) & bx(55))
        ^ (bx(46) & bx(55))
        ^ (bx(55) & by(59))
        ^ (by(3) & bx(25) & bx(46))
        ^ (by(3) & bx(46) & bx(55))
        ^ (by(3) & bx(46) & by(59))
        ^ (bl(0) & bx(25) & bx(46) & by(59))
        ^ (bl(0) & bx(25))
}

/// Accumulator feedback of U-QUARK.
fn p(l: u128) -> u128 {
    let b = |i: u32| get_bit(l, 9 - i);
    b(0) ^ b(3)
}
