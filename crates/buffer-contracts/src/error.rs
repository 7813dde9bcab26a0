use thiserror::Error;

use crate::buffer::Dim;

/// A caller-contract violation detected before a kernel mutates anything.
///
/// The variants fall into three families:
/// - shape: [`Rank`](ContractError::Rank), [`Shape`](ContractError::Shape),
///   [`NegativeExtent`](ContractError::NegativeExtent)
/// - bounds: [`IndexOutOfRange`](ContractError::IndexOutOfRange),
///   [`Storage`](ContractError::Storage)
/// - aliasing: [`Alias`](ContractError::Alias)
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ContractError {
    #[error("rank mismatch: expected {expected} axes, got {actual}")]
    Rank { expected: usize, actual: usize },

    #[error("axis {axis}: expected {expected:?}, got {actual:?}")]
    Shape { axis: usize, expected: Dim, actual: Dim },

    #[error("axis {axis}: negative extent {extent}")]
    NegativeExtent { axis: usize, extent: i32 },

    #[error("axis {axis} out of range for rank-{rank} buffer")]
    Axis { axis: usize, rank: usize },

    #[error("index {index} out of range [0, {extent}) on axis {axis}")]
    IndexOutOfRange { axis: usize, index: i32, extent: i32 },

    #[error("backing store holds {len} elements, footprint requires {required}")]
    Storage { len: usize, required: usize },

    #[error("input and output buffers share a backing store")]
    Alias,
}

impl ContractError {
    /// True for the shape family (dimensionality or per-axis metadata).
    #[must_use]
    pub fn is_shape(&self) -> bool {
        matches!(
            self,
            Self::Rank { .. } | Self::Shape { .. } | Self::NegativeExtent { .. }
        )
    }

    /// True for the bounds family (an offset or index would escape the
    /// backing store).
    #[must_use]
    pub fn is_bounds(&self) -> bool {
        matches!(
            self,
            Self::Axis { .. } | Self::IndexOutOfRange { .. } | Self::Storage { .. }
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rank_display() {
        let e = ContractError::Rank {
            expected: 2,
            actual: 1,
        };
        let s = e.to_string();
        assert!(s.contains("expected 2 axes"));
        assert!(s.contains("got 1"));
        assert!(e.is_shape());
        assert!(!e.is_bounds());
    }

    #[test]
    fn shape_display_carries_both_triples() {
        let e = ContractError::Shape {
            axis: 0,
            expected: Dim::new(0, 42, 1),
            actual: Dim::new(0, 41, 1),
        };
        let s = e.to_string();
        assert!(s.contains("extent: 42"));
        assert!(s.contains("extent: 41"));
        assert!(e.is_shape());
    }

    #[test]
    fn bounds_family() {
        let idx = ContractError::IndexOutOfRange {
            axis: 1,
            index: 10,
            extent: 10,
        };
        let sto = ContractError::Storage {
            len: 419,
            required: 420,
        };
        assert!(idx.is_bounds());
        assert!(sto.is_bounds());
        assert!(!idx.is_shape());
    }

    #[test]
    fn alias_is_neither_family() {
        assert!(!ContractError::Alias.is_shape());
        assert!(!ContractError::Alias.is_bounds());
    }
}
