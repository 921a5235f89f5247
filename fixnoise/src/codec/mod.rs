//! Constant table codec: immutable integer tables as balanced decision trees.
//!
//! Some execution environments cannot own array storage inside shared code, so a
//! table has to be compiled into control flow instead. The codec turns a small
//! table into a balanced tree of `<=` guards ending in two-way `==` leaves, which
//! gives `ceil(log2 N)` comparisons per lookup and no loops or memory access.
//!
//! # Key Types
//!
//! - [`ConstantTable`] - A validated table over a contiguous integer domain
//! - [`DecisionTree`] - The balanced tree built from a table
//! - [`sources`] - The permutation and fade tables as codec input
//!
//! Emitting the tree (or a flat array) as Rust source lives in `emit`, gated
//! behind the `codegen` feature.

#[cfg(feature = "codegen")]
pub mod emit;
pub mod sources;

use thiserror::Error;

/// A range holding fewer indices than this becomes a leaf.
pub const LEAF_WIDTH: i64 = 3;

/// Errors raised while defining a table for encoding.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CodecError {
    /// The table has no values.
    #[error("constant table is empty")]
    EmptyTable,
    /// `low + len - 1` does not fit in an `i32` index.
    #[error("table domain starting at {low} with {len} entries overflows i32")]
    DomainOverflow {
        /// First index of the domain.
        low: i32,
        /// Number of values.
        len: usize,
    },
}

/// An immutable function from the contiguous domain `low..=high` to integers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConstantTable {
    low: i32,
    values: Vec<i64>,
}

impl ConstantTable {
    /// Creates a table whose first value sits at index `low`.
    pub fn new(low: i32, values: Vec<i64>) -> Result<Self, CodecError> {
        if values.is_empty() {
            return Err(CodecError::EmptyTable);
        }
        let len = values.len();
        let fits = i32::try_from(len - 1)
            .ok()
            .and_then(|span| low.checked_add(span))
            .is_some();
        if !fits {
            return Err(CodecError::DomainOverflow { low, len });
        }
        Ok(Self { low, values })
    }

    /// First index of the domain.
    #[must_use]
    pub const fn low(&self) -> i32 {
        self.low
    }

    /// Last index of the domain.
    #[must_use]
    pub fn high(&self) -> i32 {
        self.low + (self.values.len() - 1) as i32
    }

    /// Materialized values, in index order.
    #[must_use]
    pub fn values(&self) -> &[i64] {
        &self.values
    }

    /// Value at `index`, or `None` outside the domain.
    #[must_use]
    pub fn get(&self, index: i32) -> Option<i64> {
        let offset = usize::try_from(i64::from(index) - i64::from(self.low)).ok()?;
        self.values.get(offset).copied()
    }

    /// Builds the balanced decision tree for this table.
    #[must_use]
    pub fn decision_tree(&self) -> DecisionTree {
        let tree = self.build(self.low, self.high());
        tracing::debug!(
            low = self.low,
            high = self.high(),
            depth = tree.depth(),
            leaves = tree.leaf_count(),
            "built constant table decision tree"
        );
        tree
    }

    fn build(&self, low: i32, high: i32) -> DecisionTree {
        if i64::from(high) - i64::from(low) + 1 < LEAF_WIDTH {
            return DecisionTree::Leaf {
                index: low,
                hit: self.value(low),
                miss: self.value(high),
            };
        }

        let pivot = ((i64::from(low) + i64::from(high)) >> 1) as i32;
        DecisionTree::Split {
            pivot,
            below: Box::new(self.build(low, pivot)),
            above: Box::new(self.build(pivot + 1, high)),
        }
    }

    fn value(&self, index: i32) -> i64 {
        self.values[(index - self.low) as usize]
    }
}

/// Balanced binary decision tree encoding a [`ConstantTable`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DecisionTree {
    /// Compares the input against `index`; returns `hit` when equal, `miss` otherwise.
    Leaf {
        /// The single index compared for equality.
        index: i32,
        /// Value at `index`.
        hit: i64,
        /// Value of the other index in the range (equal to `hit` for width-1 ranges).
        miss: i64,
    },
    /// Tests `index <= pivot` and descends into one half.
    Split {
        /// Last index of the lower half.
        pivot: i32,
        /// Subtree for `index <= pivot`.
        below: Box<DecisionTree>,
        /// Subtree for `index > pivot`.
        above: Box<DecisionTree>,
    },
}

impl DecisionTree {
    /// Evaluates the tree the same way the emitted code does.
    ///
    /// Out-of-domain indices are not detected; they land in whichever leaf the
    /// comparisons lead to.
    #[must_use]
    pub fn lookup(&self, index: i32) -> i64 {
        let mut node = self;
        loop {
            match node {
                Self::Leaf {
                    index: leaf,
                    hit,
                    miss,
                } => return if index == *leaf { *hit } else { *miss },
                Self::Split {
                    pivot,
                    below,
                    above,
                } => node = if index <= *pivot { &**below } else { &**above },
            }
        }
    }

    /// Number of comparisons on the longest path, leaf test included.
    #[must_use]
    pub fn depth(&self) -> usize {
        match self {
            Self::Leaf { .. } => 1,
            Self::Split { below, above, .. } => 1 + below.depth().max(above.depth()),
        }
    }

    /// Number of leaves.
    #[must_use]
    pub fn leaf_count(&self) -> usize {
        match self {
            Self::Leaf { .. } => 1,
            Self::Split { below, above, .. } => below.leaf_count() + above.leaf_count(),
        }
    }
}
