//! Codec inputs for the two tables the noise functions need.
//!
//! The fade samples are the only place floating point appears in this crate. They
//! are evaluated once, when tables are generated, and the embedded result is what
//! the noise functions read.

use super::{CodecError, ConstantTable};
use crate::fixed::BLEND_ONE;
use crate::tables::{PERMUTATION, pack_fade};

/// Number of fade curve segments (and table entries).
pub const FADE_SEGMENTS: usize = 256;

/// The tables that can be encoded.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TableKind {
    /// Ken Perlin's permutation, looked up through `ptable`.
    Permutation,
    /// Packed fade curve segments, looked up through `ftable`.
    Fade,
}

impl TableKind {
    /// Every table, in emission order.
    pub const ALL: [Self; 2] = [Self::Permutation, Self::Fade];

    /// Materializes the table as codec input.
    pub fn table(self) -> Result<ConstantTable, CodecError> {
        match self {
            Self::Permutation => permutation_table(),
            Self::Fade => fade_table(),
        }
    }

    /// Name of the generated lookup function.
    #[must_use]
    pub const fn lookup_name(self) -> &'static str {
        match self {
            Self::Permutation => "ptable",
            Self::Fade => "ftable",
        }
    }

    /// Name of the generated flat array.
    #[must_use]
    pub const fn array_name(self) -> &'static str {
        match self {
            Self::Permutation => "PERMUTATION",
            Self::Fade => "FADE_TABLE",
        }
    }

    /// Rust type of a single table value.
    #[must_use]
    pub const fn value_type(self) -> &'static str {
        match self {
            Self::Permutation => "u8",
            Self::Fade => "u32",
        }
    }

    /// Mask applied to the index before lookup, if the table wraps.
    #[must_use]
    pub const fn index_mask(self) -> Option<i32> {
        match self {
            Self::Permutation => Some(0xFF),
            Self::Fade => None,
        }
    }
}

/// The reference permutation as a table over `0..=255`.
pub fn permutation_table() -> Result<ConstantTable, CodecError> {
    ConstantTable::new(0, PERMUTATION.iter().map(|&v| i64::from(v)).collect())
}

/// `6t^5 - 15t^4 + 10t^3`.
fn fade_curve(t: f64) -> f64 {
    t * t * t * (t * (t * 6.0 - 15.0) + 10.0)
}

/// `round(4096 * fade(i / 256))` for `i` in `0..=256`.
///
/// Holds one more sample than there are segments, so segment `i` can read both of
/// its endpoints.
#[must_use]
pub fn fade_samples() -> Vec<u32> {
    let scale = f64::from(BLEND_ONE);
    (0..=FADE_SEGMENTS)
        .map(|i| (scale * fade_curve(i as f64 / FADE_SEGMENTS as f64)).round() as u32)
        .collect()
}

/// Fade segments over `0..=255`, each packing its two adjacent samples.
pub fn fade_table() -> Result<ConstantTable, CodecError> {
    let samples = fade_samples();
    let packed: Vec<i64> = samples
        .windows(2)
        .map(|pair| i64::from(pack_fade(pair[0], pair[1])))
        .collect();
    ConstantTable::new(0, packed)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tables::{FADE_TABLE, ftable, ptable};

    #[test]
    fn fade_samples_span_blend_range() {
        let samples = fade_samples();
        assert_eq!(samples.len(), FADE_SEGMENTS + 1);
        assert_eq!(samples[0], 0);
        assert_eq!(samples[128], 2048);
        assert_eq!(samples[FADE_SEGMENTS], 4096);
        assert!(samples.windows(2).all(|w| w[0] <= w[1]));
    }

    #[test]
    fn embedded_fade_table_matches_generator() {
        let generated = fade_table().expect("fade table is non-empty");
        let embedded: Vec<i64> = FADE_TABLE.iter().map(|&v| i64::from(v)).collect();
        assert_eq!(generated.values(), embedded.as_slice());
    }

    #[test]
    fn decision_trees_agree_with_lookups() {
        let permutation = permutation_table().expect("valid").decision_tree();
        let fade = fade_table().expect("valid").decision_tree();
        for i in 0..256 {
            assert_eq!(permutation.lookup(i), i64::from(ptable(i)));
            assert_eq!(fade.lookup(i), i64::from(ftable(i)));
        }
        assert_eq!(permutation.depth(), 8);
        assert_eq!(fade.depth(), 8);
    }

    #[test]
    fn table_kinds_materialize() {
        for kind in TableKind::ALL {
            let table = kind.table().expect("valid");
            assert_eq!((table.low(), table.high()), (0, 255), "{kind:?}");
        }
    }
}
