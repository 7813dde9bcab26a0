//! # buffer-contracts
//!
//! Contract-checked strided buffers and verified integer kernels.
//!
//! The library pairs a strided N-dimensional buffer descriptor with small
//! reduction/elementwise kernels whose caller contracts — exact shapes,
//! in-bounds offsets, distinct backing stores — are validated at runtime
//! before any write. The correctness properties a formal verifier would
//! discharge as proof obligations are restated here as property-based
//! falsification tests and Kani bounded harnesses.
//!
//! ## Modules
//!
//! - [`buffer`] — `Dim` axis metadata and the owned, bounds-checked
//!   [`StridedBuffer`]
//! - [`kernels`] — contract-checked kernel entry points with scalar
//!   ground-truth implementations
//! - [`error`] — the [`ContractError`] taxonomy (shape / bounds / alias)

pub mod buffer;
pub mod error;
pub mod kernels;

pub use buffer::{Dim, StridedBuffer};
pub use error::ContractError;
