//! Deterministic Perlin noise built on fixed-point integer arithmetic.
//!
//! Every value flowing through the public API is a Q16.16 integer, so results are
//! bit-identical on any target, with or without a floating-point unit.
//!
//! # Modules
//!
//! - [`fixed`] - Q16.16 / Q12 conventions, `lerp` and `fade`
//! - [`tables`] - Permutation and fade tables
//! - [`gradient`] - Gradient selection and dot products
//! - [`noise`] - 2D and 3D noise fields
//! - [`codec`] - Decision-tree encoding used to generate the constant tables

pub mod codec;
pub mod fixed;
pub mod gradient;
pub mod noise;
pub mod tables;

pub use fixed::Fixed;
pub use noise::{noise2d, noise3d};
pub use tables::ptable;
