//! Fixed-point scalar conventions and the two blending primitives.
//!
//! Noise coordinates and results are Q16.16 (`1.0 == 65536`). Blend factors are
//! Q12 (`1.0 == 4096`), which keeps the `lerp` product inside 64 bits.

use crate::tables::{ftable, unpack_fade};

/// Q16.16 fixed-point scalar.
///
/// Arithmetic on this type wraps; keeping magnitudes in range is the caller's job.
pub type Fixed = i32;

/// Number of fractional bits in a [`Fixed`].
pub const FRACTION_BITS: u32 = 16;
/// `1.0` in Q16.16.
pub const ONE: Fixed = 1 << FRACTION_BITS;
/// `0.5` in Q16.16.
pub const HALF: Fixed = ONE >> 1;
/// Mask selecting the in-cell fraction of a [`Fixed`].
pub const FRACTION_MASK: Fixed = ONE - 1;

/// Number of fractional bits in a blend factor.
pub const BLEND_BITS: u32 = 12;
/// `1.0` as a Q12 blend factor.
pub const BLEND_ONE: i32 = 1 << BLEND_BITS;

/// Bits of a Q16.16 fraction that select a fade table segment.
const FADE_SEGMENT_SHIFT: u32 = 8;
const FADE_SUBSTEP_MASK: i32 = (1 << FADE_SEGMENT_SHIFT) - 1;

/// Linear interpolation from `a` to `b` with a Q12 blend factor `t`.
///
/// Computes `a + ((t * (b - a)) >> 12)`. The difference and product are widened to
/// `i64` first: a Q16.16 difference (33 bits) times a Q12 factor needs 46 bits.
/// The shift is arithmetic, so descending ranges interpolate correctly.
#[inline]
#[must_use]
pub const fn lerp(t: i32, a: Fixed, b: Fixed) -> Fixed {
    let delta = b as i64 - a as i64;
    (a as i64 + ((t as i64 * delta) >> BLEND_BITS)) as Fixed
}

/// Smoothed Q12 blend factor for a Q16.16 fraction `t` in `[0, 65536)`.
///
/// The top 8 fraction bits pick one of the 256 linear segments of the sampled
/// `6t^5 - 15t^4 + 10t^3` curve; the low 8 bits interpolate inside that segment.
/// The result lies in `[0, 4096]`.
#[inline]
#[must_use]
pub const fn fade(t: Fixed) -> i32 {
    let (lower, upper) = unpack_fade(ftable(t >> FADE_SEGMENT_SHIFT));
    let frac = t & FADE_SUBSTEP_MASK;
    lower + ((frac * (upper - lower)) >> FADE_SEGMENT_SHIFT)
}

/// Converts a real number to Q16.16, truncating toward zero.
///
/// Only meant for presenting or accepting values at the edges of a program; the
/// noise functions never touch floating point.
#[must_use]
pub fn from_f64(value: f64) -> Fixed {
    (value * f64::from(ONE)) as Fixed
}

/// Converts a Q16.16 value back to a real number.
#[must_use]
pub fn to_f64(value: Fixed) -> f64 {
    f64::from(value) / f64::from(ONE)
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLES: [Fixed; 9] = [
        0,
        1,
        -1,
        HALF,
        -ONE,
        3 * ONE + 1234,
        -7 * ONE - 99,
        i32::MAX,
        i32::MIN,
    ];

    #[test]
    fn lerp_endpoints_are_exact() {
        for &a in &SAMPLES {
            for &b in &SAMPLES {
                assert_eq!(lerp(0, a, b), a, "lerp(0, {a}, {b})");
                assert_eq!(lerp(BLEND_ONE, a, b), b, "lerp(4096, {a}, {b})");
            }
        }
    }

    #[test]
    fn lerp_midpoint() {
        assert_eq!(lerp(BLEND_ONE / 2, 0, ONE), HALF);
        assert_eq!(lerp(BLEND_ONE / 2, ONE, 0), HALF);
        assert_eq!(lerp(BLEND_ONE / 4, -ONE, ONE), -HALF);
    }

    #[test]
    fn lerp_descending_uses_arithmetic_shift() {
        // (1 * -1) >> 12 rounds toward negative infinity.
        assert_eq!(lerp(1, 1, 0), 0);
        assert_eq!(lerp(1, 0, -1), -1);
    }

    #[test]
    fn fade_endpoints() {
        assert_eq!(fade(0), 0);
        assert_eq!(fade(HALF), BLEND_ONE / 2);
        assert_eq!(fade(FRACTION_MASK), BLEND_ONE);
    }

    #[test]
    fn fade_is_monotonic() {
        let mut previous = fade(0);
        for t in 1..ONE {
            let current = fade(t);
            assert!(
                current >= previous,
                "fade({t}) = {current} < fade({}) = {previous}",
                t - 1
            );
            previous = current;
        }
    }

    #[test]
    fn fade_stays_in_blend_range() {
        for t in (0..ONE).step_by(97) {
            assert!((0..=BLEND_ONE).contains(&fade(t)));
        }
    }

    #[test]
    fn fade_is_symmetric_around_half() {
        // fade(1 - t) == 1 - fade(t) survives rounding at segment starts.
        for segment in 1..256 {
            let t = segment << 8;
            assert_eq!(fade(t) + fade(ONE - t), BLEND_ONE, "segment {segment}");
        }
    }

    #[test]
    fn real_conversions() {
        assert_eq!(from_f64(1.0), ONE);
        assert_eq!(from_f64(-0.5), -HALF);
        assert!((to_f64(3 * ONE + HALF) - 3.5).abs() < f64::EPSILON);
    }
}
