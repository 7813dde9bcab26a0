//! Transposing increment kernel with a zeroed diagonal.
//!
//! `output[x, y] = input[y, x] + 1` for all `x, y`, followed by the update
//! `output[x, x] = 0`. The property of interest: when every input element
//! is odd, every output element is even (off-diagonal odd + 1, diagonal
//! zero).

use crate::buffer::{Dim, StridedBuffer};
use crate::error::ContractError;

use super::expect_dims;

// ────────────────────────────────────────────────────────────────────────────
// Scalar implementation
// ────────────────────────────────────────────────────────────────────────────

/// Scalar reference implementation over flattened `n x n` stores (axis 0
/// fastest-varying, so logical `(x, y)` lives at `x + n * y`).
///
/// # Panics
///
/// Panics if `input.len() != n * n` or `output.len() != n * n`.
pub fn transpose_increment_scalar(input: &[i32], n: usize, output: &mut [i32]) {
    assert_eq!(
        input.len(),
        n * n,
        "input length mismatch: expected {} got {}",
        n * n,
        input.len()
    );
    assert_eq!(
        output.len(),
        n * n,
        "output length mismatch: expected {} got {}",
        n * n,
        output.len()
    );

    for y in 0..n {
        for x in 0..n {
            output[y * n + x] = input[x * n + y] + 1;
        }
    }
    // Update definition: zero the diagonal.
    for x in 0..n {
        output[x * n + x] = 0;
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Contract-checked entry point
// ────────────────────────────────────────────────────────────────────────────

/// Applies the transposing increment over square dense buffers.
///
/// Both buffers must be rank 2 with shape
/// `[{min 0, extent n, stride 1}, {min 0, extent n, stride n}]` for the
/// same `n` (taken from the input's axis 0) and must not share a backing
/// store. Validation completes before the first write.
///
/// # Errors
///
/// - [`ContractError::Alias`] if the buffers share a backing store
/// - [`ContractError::Rank`] / [`ContractError::Shape`] when either
///   buffer deviates from the square dense contract
pub fn transpose_increment(
    input: &StridedBuffer,
    output: &mut StridedBuffer,
) -> Result<(), ContractError> {
    if input.shares_backing(output) {
        return Err(ContractError::Alias);
    }
    if input.rank() != 2 {
        return Err(ContractError::Rank {
            expected: 2,
            actual: input.rank(),
        });
    }
    let n = input.extent(0)?;
    let square = [Dim::new(0, n, 1), Dim::new(0, n, n)];
    expect_dims(input, &square)?;
    expect_dims(output, &square)?;

    let n = n as usize;
    transpose_increment_scalar(
        &input.data()[..n * n],
        n,
        &mut output.data_mut()[..n * n],
    );
    Ok(())
}
