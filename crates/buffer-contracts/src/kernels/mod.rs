//! Kernel implementations: contract-checked buffer entry points plus their
//! scalar ground truth.
//!
//! Each submodule provides two layers:
//! - `fn {name}_scalar(...)` — slice-level reference implementation,
//!   assert-guarded, parameterized over extents
//! - `fn {name}(&StridedBuffer, &mut StridedBuffer) -> Result<(), ContractError>`
//!   — the pinned-shape entry point that validates the caller contract
//!   before any write and then delegates to the scalar layer

// Kernel code naturally uses single-character loop variables (x, y, r, n)
// and explicit index arithmetic mirroring the flattened addressing scheme.
#![allow(clippy::many_single_char_names, clippy::needless_range_loop)]

pub mod ops;

pub mod count;
pub mod transpose_increment;

#[cfg(kani)]
mod kani_proofs;

use crate::buffer::{Dim, StridedBuffer};
use crate::error::ContractError;

/// Checks a buffer against an exact per-axis `(min, extent, stride)`
/// contract, rank first.
pub(crate) fn expect_dims(buf: &StridedBuffer, expected: &[Dim]) -> Result<(), ContractError> {
    if buf.rank() != expected.len() {
        return Err(ContractError::Rank {
            expected: expected.len(),
            actual: buf.rank(),
        });
    }
    for (axis, (&want, &got)) in expected.iter().zip(buf.dims()).enumerate() {
        if want != got {
            return Err(ContractError::Shape {
                axis,
                expected: want,
                actual: got,
            });
        }
    }
    Ok(())
}
