//! Constant lookup tables: Ken Perlin's permutation and the sampled fade curve.
//!
//! Both tables are process-wide `const` data. The decision-tree form produced by
//! [`crate::codec`] is equivalent to these arrays; a flat array is what Rust wants.

mod fade_data;

pub use fade_data::FADE_TABLE;

/// Width of each field in a packed [`FADE_TABLE`] entry.
///
/// `fade(1.0)` samples to 4096, which needs 13 bits, so fields are 16 bits wide.
pub const FADE_FIELD_BITS: u32 = 16;
const FADE_FIELD_MASK: u32 = (1 << FADE_FIELD_BITS) - 1;

/// Ken Perlin's reference permutation of `0..=255`.
#[rustfmt::skip]
pub const PERMUTATION: [u8; 256] = [
    151, 160, 137, 91, 90, 15, 131, 13, 201, 95, 96, 53, 194, 233, 7, 225,
    140, 36, 103, 30, 69, 142, 8, 99, 37, 240, 21, 10, 23, 190, 6, 148,
    247, 120, 234, 75, 0, 26, 197, 62, 94, 252, 219, 203, 117, 35, 11, 32,
    57, 177, 33, 88, 237, 149, 56, 87, 174, 20, 125, 136, 171, 168, 68, 175,
    74, 165, 71, 134, 139, 48, 27, 166, 77, 146, 158, 231, 83, 111, 229, 122,
    60, 211, 133, 230, 220, 105, 92, 41, 55, 46, 245, 40, 244, 102, 143, 54,
    65, 25, 63, 161, 1, 216, 80, 73, 209, 76, 132, 187, 208, 89, 18, 169,
    200, 196, 135, 130, 116, 188, 159, 86, 164, 100, 109, 198, 173, 186, 3, 64,
    52, 217, 226, 250, 124, 123, 5, 202, 38, 147, 118, 126, 255, 82, 85, 212,
    207, 206, 59, 227, 47, 16, 58, 17, 182, 189, 28, 42, 223, 183, 170, 213,
    119, 248, 152, 2, 44, 154, 163, 70, 221, 153, 101, 155, 167, 43, 172, 9,
    129, 22, 39, 253, 19, 98, 108, 110, 79, 113, 224, 232, 178, 185, 112, 104,
    218, 246, 97, 228, 251, 34, 242, 193, 238, 210, 144, 12, 191, 179, 162, 241,
    81, 51, 145, 235, 249, 14, 239, 107, 49, 192, 214, 31, 181, 199, 106, 157,
    184, 84, 204, 176, 115, 121, 50, 45, 127, 4, 150, 254, 138, 236, 205, 93,
    222, 114, 67, 29, 24, 72, 243, 141, 128, 195, 78, 66, 215, 61, 156, 180,
];

/// Permutation lookup. Any integer is accepted; only its low 8 bits are used.
#[inline]
#[must_use]
pub const fn ptable(i: i32) -> i32 {
    PERMUTATION[(i & 0xFF) as usize] as i32
}

/// Packed fade segment for `i` in `0..=255`.
///
/// The index is not masked: it comes from `t >> 8` on a 16-bit fraction, and any
/// other value panics on the bounds check.
#[inline]
#[must_use]
pub const fn ftable(i: i32) -> u32 {
    FADE_TABLE[i as usize]
}

/// Splits a packed fade entry into its `(lower, upper)` Q12 endpoints.
#[inline]
#[must_use]
pub const fn unpack_fade(packed: u32) -> (i32, i32) {
    (
        (packed >> FADE_FIELD_BITS) as i32,
        (packed & FADE_FIELD_MASK) as i32,
    )
}

/// Packs two Q12 endpoints into one fade entry. Inverse of [`unpack_fade`].
#[inline]
#[must_use]
pub const fn pack_fade(lower: u32, upper: u32) -> u32 {
    (lower << FADE_FIELD_BITS) | (upper & FADE_FIELD_MASK)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ptable_reference_endpoints() {
        assert_eq!(ptable(0), 151);
        assert_eq!(ptable(1), 160);
        assert_eq!(ptable(254), 156);
        assert_eq!(ptable(255), 180);
    }

    #[test]
    fn ptable_wraps_every_256() {
        for i in 0..256 {
            assert_eq!(ptable(i), ptable(i + 256));
            assert_eq!(ptable(i), ptable(i - 256));
            assert_eq!(ptable(i), ptable(i + 0x7FFF_FF00));
        }
    }

    #[test]
    fn permutation_is_a_bijection() {
        let mut seen = [false; 256];
        for &value in &PERMUTATION {
            assert!(!seen[usize::from(value)], "{value} appears twice");
            seen[usize::from(value)] = true;
        }
    }

    #[test]
    fn fade_segments_are_contiguous() {
        for i in 0..255 {
            let (_, upper) = unpack_fade(ftable(i));
            let (next_lower, _) = unpack_fade(ftable(i + 1));
            assert_eq!(upper, next_lower, "segment {i} does not meet segment {}", i + 1);
        }
    }

    #[test]
    fn fade_table_covers_unit_range() {
        assert_eq!(unpack_fade(ftable(0)), (0, 0));
        assert_eq!(unpack_fade(ftable(255)), (4096, 4096));
        assert_eq!(unpack_fade(ftable(128)).0, 2048);
    }

    #[test]
    fn pack_round_trip_keeps_full_blend_range() {
        assert_eq!(unpack_fade(pack_fade(4096, 4096)), (4096, 4096));
        assert_eq!(unpack_fade(pack_fade(2047, 2048)), (2047, 2048));
    }
}
