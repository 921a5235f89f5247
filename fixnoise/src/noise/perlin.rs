//! Lattice evaluation for 2D and 3D Perlin noise.
//!
//! Integer coordinates pick the lattice cell (wrapped to 256), fractional bits give
//! the offset inside it. Corner hashes chain the permutation table once per axis.

use crate::fixed::{FRACTION_BITS, FRACTION_MASK, Fixed, ONE, fade, lerp};
use crate::gradient::{grad2, grad3};
use crate::tables::ptable;

/// Splits a Q16.16 coordinate into its wrapped cell index and in-cell fraction.
#[inline]
const fn split(v: Fixed) -> (i32, Fixed) {
    ((v >> FRACTION_BITS) & 0xFF, v & FRACTION_MASK)
}

/// Sample 2D Perlin noise at Q16.16 coordinates.
///
/// Returns a Q16.16 value; lattice points evaluate to exactly `0`.
#[must_use]
pub const fn noise2d(x: Fixed, y: Fixed) -> Fixed {
    let (cx, x) = split(x);
    let (cy, y) = split(y);

    let a = ptable(cx);
    let b = ptable(cx + 1);
    let aa = ptable(a + cy);
    let ab = ptable(a + cy + 1);
    let ba = ptable(b + cy);
    let bb = ptable(b + cy + 1);

    let u = fade(x);
    let v = fade(y);

    let x1 = x - ONE;
    let y1 = y - ONE;

    let bottom = lerp(u, grad2(aa, x, y), grad2(ba, x1, y));
    let top = lerp(u, grad2(ab, x, y1), grad2(bb, x1, y1));
    lerp(v, bottom, top)
}

/// Sample 3D Perlin noise at Q16.16 coordinates.
///
/// Blends along x, then y, then z. Returns a Q16.16 value; lattice points evaluate
/// to exactly `0`.
#[must_use]
pub const fn noise3d(x: Fixed, y: Fixed, z: Fixed) -> Fixed {
    let (cx, x) = split(x);
    let (cy, y) = split(y);
    let (cz, z) = split(z);

    let a = ptable(cx) + cy;
    let b = ptable(cx + 1) + cy;
    let aa = ptable(a) + cz;
    let ab = ptable(a + 1) + cz;
    let ba = ptable(b) + cz;
    let bb = ptable(b + 1) + cz;

    let u = fade(x);
    let v = fade(y);
    let w = fade(z);

    let x1 = x - ONE;
    let y1 = y - ONE;
    let z1 = z - ONE;

    let near = lerp(
        v,
        lerp(u, grad3(ptable(aa), x, y, z), grad3(ptable(ba), x1, y, z)),
        lerp(u, grad3(ptable(ab), x, y1, z), grad3(ptable(bb), x1, y1, z)),
    );
    let far = lerp(
        v,
        lerp(
            u,
            grad3(ptable(aa + 1), x, y, z1),
            grad3(ptable(ba + 1), x1, y, z1),
        ),
        lerp(
            u,
            grad3(ptable(ab + 1), x, y1, z1),
            grad3(ptable(bb + 1), x1, y1, z1),
        ),
    );
    lerp(w, near, far)
}
