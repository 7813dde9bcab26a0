//! Positive-count reduction kernel.
//!
//! For each outer index `x`, counts the strictly positive values along the
//! reduction axis:
//! `output[x] = |{ r in [0, reduction) : input[r * outer + x] > 0 }|`.
//!
//! The input is laid out with the outer axis fastest-varying (stride 1)
//! and the reduction axis strided by the outer extent, so consecutive `x`
//! touch consecutive storage. The reduction is exact integer counting;
//! iteration order does not affect the result, but the chosen order
//! (outer `x`, inner `r`) keeps the accumulator equal to the count over
//! the prefix `[0, r)` at every step.

use crate::buffer::{Dim, StridedBuffer};
use crate::error::ContractError;

use super::expect_dims;

/// Outer extent of the pinned kernel contract.
pub const OUTER: usize = 42;
/// Reduction extent of the pinned kernel contract.
pub const REDUCTION: usize = 10;

/// Exact input shape required by [`count`]: `42 x 10`, outer axis fastest.
pub const INPUT_DIMS: [Dim; 2] = [Dim::new(0, 42, 1), Dim::new(0, 10, 42)];
/// Exact output shape required by [`count`]: `42`, dense.
pub const OUTPUT_DIMS: [Dim; 1] = [Dim::new(0, 42, 1)];

// ────────────────────────────────────────────────────────────────────────────
// Scalar implementation
// ────────────────────────────────────────────────────────────────────────────

/// Scalar reference implementation of the positive-count reduction.
///
/// `input` is flattened `reduction x outer` with the outer axis
/// fastest-varying; `output` holds one count per outer index.
///
/// Two deterministic phases: zero-initialize the output, then for each
/// `x` accumulate over `r`, adding 1 whenever `input[r * outer + x] > 0`.
/// On return every `output[x]` lies in `[0, reduction]`.
///
/// # Panics
///
/// Panics if `input.len() != outer * reduction` or
/// `output.len() != outer`.
pub fn count_scalar(input: &[i32], outer: usize, reduction: usize, output: &mut [i32]) {
    assert_eq!(
        input.len(),
        outer * reduction,
        "input length mismatch: expected {} got {}",
        outer * reduction,
        input.len()
    );
    assert_eq!(
        output.len(),
        outer,
        "output length mismatch: expected {outer} got {}",
        output.len()
    );

    // Phase 1: zero-initialize the output.
    for x in 0..outer {
        output[x] = 0;
    }
    // Phase 2: accumulate along the reduction axis.
    for x in 0..outer {
        for r in 0..reduction {
            if input[r * outer + x] > 0 {
                output[x] += 1;
            }
        }
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Contract-checked entry point
// ────────────────────────────────────────────────────────────────────────────

/// Counts strictly positive values along the reduction axis of a `42 x 10`
/// input, writing one count per outer index into a length-42 output.
///
/// The caller contract is validated in full before the first write, so an
/// error never leaves partial output:
/// - input shape exactly [`INPUT_DIMS`], output shape exactly
///   [`OUTPUT_DIMS`]
/// - distinct backing stores
///
/// Postcondition: `output[x]` equals the exact count for every
/// `x in [0, 42)`, hence `0 <= output[x] <= 10`.
///
/// # Errors
///
/// - [`ContractError::Alias`] if the buffers share a backing store
/// - [`ContractError::Rank`] / [`ContractError::Shape`] on any deviation
///   from the pinned shapes
pub fn count(input: &StridedBuffer, output: &mut StridedBuffer) -> Result<(), ContractError> {
    if input.shares_backing(output) {
        return Err(ContractError::Alias);
    }
    expect_dims(input, &INPUT_DIMS)?;
    expect_dims(output, &OUTPUT_DIMS)?;

    let elems = OUTER * REDUCTION;
    count_scalar(
        &input.data()[..elems],
        OUTER,
        REDUCTION,
        &mut output.data_mut()[..OUTER],
    );
    Ok(())
}
