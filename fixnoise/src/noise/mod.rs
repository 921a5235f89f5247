//! Fixed-point Perlin noise fields.
//!
//! - [`noise2d`] - 4-corner lattice noise over Q16.16 `(x, y)`
//! - [`noise3d`] - 8-corner lattice noise over Q16.16 `(x, y, z)`
//!
//! Both fields repeat every 256 units along each axis, are zero on every lattice
//! point, and are never clamped.

mod perlin;

pub use perlin::{noise2d, noise3d};
