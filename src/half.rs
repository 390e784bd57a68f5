//! IEEE-754 binary16 conversions.
//!
//! SWF stores 16-bit floats with 1 sign bit, 5 exponent bits and 10 fraction
//! bits. Rust has no native `f16`, so both directions work directly on the
//! raw bit pattern. Every binary16 value is exactly representable in `f32`,
//! so `f32` is the in-memory type on both sides.

const SIGN_MASK: u16 = 0x8000;
const EXPONENT_MASK: u16 = 0x7c00;
const FRACTION_MASK: u16 = 0x03ff;

/// Width of the fraction field.
const FRACTION_BITS: u16 = 10;

/// Exponent bias, and the fixed exponent (-14) shared by all subnormals.
const EXPONENT_BIAS: i32 = 15;
const SUBNORMAL_EXPONENT: i32 = -14;

/// Largest finite binary16 value: (2 - 2^-10) * 2^15.
const MAX_FINITE: f32 = 65504.0;

/// 2^exp as `f32`, for exponents within the normal `f32` range.
///
/// Built from the bit pattern so the module works without `std` float math.
fn exp2(exp: i32) -> f32 {
    f32::from_bits(((exp + 127) as u32) << 23)
}

/// Round a non-negative fraction count to the nearest integer.
fn round_fraction(value: f32) -> u16 {
    (value + 0.5) as u16
}

/// Decodes a binary16 bit pattern.
pub(crate) fn from_bits(bits: u16) -> f32 {
    let sign = if bits & SIGN_MASK != 0 { -1.0f32 } else { 1.0 };
    let exponent = (bits & EXPONENT_MASK) >> FRACTION_BITS;
    let fraction = bits & FRACTION_MASK;
    match exponent {
        // No implicit leading one below the normal range.
        0 => sign * (f32::from(fraction) / 1024.0) * exp2(SUBNORMAL_EXPONENT),
        0x1f => {
            if fraction == 0 {
                sign * f32::INFINITY
            } else {
                f32::NAN
            }
        }
        _ => {
            let scale = exp2(i32::from(exponent) - EXPONENT_BIAS);
            sign * (1.0 + f32::from(fraction) / 1024.0) * scale
        }
    }
}

/// Encodes a value as a binary16 bit pattern.
///
/// NaN always becomes the canonical all-ones pattern. Magnitudes above the
/// largest finite binary16 value become infinity. A fraction that rounds up
/// to 1024 carries into the exponent field through plain addition, which
/// also turns the largest normal bucket into infinity when it overflows.
pub(crate) fn to_bits(value: f32) -> u16 {
    if value.is_nan() {
        return 0xffff;
    }
    let sign = if value.is_sign_negative() { SIGN_MASK } else { 0 };
    let magnitude = f32::from_bits(value.to_bits() & 0x7fff_ffff);
    if magnitude > MAX_FINITE {
        return sign | EXPONENT_MASK;
    }
    if magnitude < exp2(SUBNORMAL_EXPONENT) {
        let fraction = round_fraction(magnitude * exp2(-SUBNORMAL_EXPONENT) * 1024.0);
        return sign | fraction;
    }
    // Find the bucket with 2^(e-15) <= magnitude < 2^(e-14), then express
    // the magnitude as (1 + fraction/1024) * 2^(e-15).
    let mut exponent: u16 = 1;
    while exponent < 30 && exp2(i32::from(exponent) - EXPONENT_BIAS + 1) <= magnitude {
        exponent += 1;
    }
    let scaled = magnitude * exp2(EXPONENT_BIAS - i32::from(exponent));
    let fraction = round_fraction((scaled - 1.0) * 1024.0);
    sign | ((exponent << FRACTION_BITS) + fraction)
}
