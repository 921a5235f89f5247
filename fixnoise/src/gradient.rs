//! Gradient selection for lattice corners.
//!
//! A corner hash picks one gradient direction; the functions return the dot product
//! of that gradient with the Q16.16 offset from the corner, without multiplying.

use crate::fixed::Fixed;

/// Dot product of one of the 4 diagonal 2D gradients with `(x, y)`.
///
/// Bit 0 of `hash` negates `x`, bit 1 negates `y`.
#[inline]
#[must_use]
pub const fn grad2(hash: i32, x: Fixed, y: Fixed) -> Fixed {
    let h = hash & 3;
    let u = if h & 1 == 0 { x } else { -x };
    let v = if h & 2 == 0 { y } else { -y };
    u + v
}

/// Dot product of one of the 12 improved-noise edge gradients with `(x, y, z)`.
///
/// Uses the low 4 bits of `hash`; entries 12 to 15 repeat four of the first twelve
/// directions so the selection needs no modulo.
#[inline]
#[must_use]
pub const fn grad3(hash: i32, x: Fixed, y: Fixed, z: Fixed) -> Fixed {
    let h = hash & 15;
    let u = if h < 8 { x } else { y };
    let v = if h < 4 {
        y
    } else if h == 12 || h == 14 {
        x
    } else {
        z
    };
    (if h & 1 == 0 { u } else { -u }) + (if h & 2 == 0 { v } else { -v })
}
