//! Strided N-dimensional integer buffer descriptor.
//!
//! A [`StridedBuffer`] pairs per-axis `(min, extent, stride)` metadata with
//! an owned flat backing store, giving every multi-dimensional view a
//! canonical flattened-offset addressing scheme:
//! `offset(i_0, .., i_{n-1}) = base + sum_k stride_k * i_k`.
//!
//! Where a C buffer descriptor would rely on caller-discharged proof
//! obligations, this type enforces the same facts structurally: extents are
//! validated at construction, the backing store must cover the full
//! footprint `1 + sum_k |stride_k| * (extent_k - 1)`, and every index is
//! bounds-checked on access.

use crate::error::ContractError;

/// One axis of an N-dimensional view: starting logical index, number of
/// elements, and flat-memory step per logical increment.
///
/// `extent` must be non-negative; `stride` may be any sign or magnitude
/// (negative strides describe reversed views, zero strides broadcast).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Dim {
    pub min: i32,
    pub extent: i32,
    pub stride: i32,
}

impl Dim {
    #[must_use]
    pub const fn new(min: i32, extent: i32, stride: i32) -> Self {
        Self {
            min,
            extent,
            stride,
        }
    }
}

/// Number of backing-store elements a dims sequence can reach.
///
/// Zero when any extent is zero (no addressable element), otherwise
/// `1 + sum_k |stride_k| * (extent_k - 1)`. Saturates instead of wrapping
/// on pathological metadata so the storage check stays sound.
#[must_use]
pub fn footprint(dims: &[Dim]) -> usize {
    if dims.iter().any(|d| d.extent == 0) {
        return 0;
    }
    let mut required: u64 = 1;
    for d in dims {
        let span = u64::from(d.stride.unsigned_abs()).saturating_mul(d.extent as u64 - 1);
        required = required.saturating_add(span);
    }
    usize::try_from(required).unwrap_or(usize::MAX)
}

/// An owned strided buffer: shape/stride metadata plus flat `i32` storage.
///
/// The descriptor is validated once at construction; afterwards every
/// reachable flat offset is guaranteed to land inside `data`. Kernels
/// borrow buffers (`&` input, `&mut` output) and never allocate, free, or
/// consume them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StridedBuffer {
    dims: Vec<Dim>,
    /// Origin shift: distance from `data[0]` to the element at logical
    /// coordinate zero. Non-zero only when some stride is negative, so
    /// reversed axes stay inside the owned store.
    base: usize,
    data: Vec<i32>,
}

impl StridedBuffer {
    /// Builds a buffer from per-axis metadata and a caller-supplied backing
    /// store.
    ///
    /// # Errors
    ///
    /// - [`ContractError::NegativeExtent`] if any axis has `extent < 0`
    /// - [`ContractError::Storage`] if `data` is shorter than the footprint
    pub fn new(dims: Vec<Dim>, data: Vec<i32>) -> Result<Self, ContractError> {
        for (axis, d) in dims.iter().enumerate() {
            if d.extent < 0 {
                return Err(ContractError::NegativeExtent {
                    axis,
                    extent: d.extent,
                });
            }
        }
        let required = footprint(&dims);
        if data.len() < required {
            return Err(ContractError::Storage {
                len: data.len(),
                required,
            });
        }
        let base: usize = dims
            .iter()
            .filter(|d| d.stride < 0 && d.extent > 0)
            .map(|d| d.stride.unsigned_abs() as usize * (d.extent as usize - 1))
            .sum();
        Ok(Self { dims, base, data })
    }

    /// Dense zero-filled buffer with axis 0 fastest-varying: `stride_0 = 1`
    /// and `stride_k` the product of all lower extents.
    ///
    /// # Errors
    ///
    /// [`ContractError::NegativeExtent`] if any extent is negative.
    pub fn contiguous(extents: &[i32]) -> Result<Self, ContractError> {
        let dims = dense_dims(extents)?;
        let len = footprint(&dims);
        Self::new(dims, vec![0; len])
    }

    /// Dense buffer whose element at flat offset `o` is `f(o)`.
    ///
    /// This is the runtime face of the "pure function of the offset"
    /// device used to state kernel postconditions abstractly; the tests
    /// use it to lay out known inputs.
    ///
    /// # Errors
    ///
    /// [`ContractError::NegativeExtent`] if any extent is negative.
    pub fn from_fn(extents: &[i32], f: impl Fn(usize) -> i32) -> Result<Self, ContractError> {
        let dims = dense_dims(extents)?;
        let len = footprint(&dims);
        Self::new(dims, (0..len).map(f).collect())
    }

    /// Number of axes.
    #[must_use]
    pub fn rank(&self) -> usize {
        self.dims.len()
    }

    /// Per-axis metadata, in axis order.
    #[must_use]
    pub fn dims(&self) -> &[Dim] {
        &self.dims
    }

    /// Metadata for one axis.
    ///
    /// # Errors
    ///
    /// [`ContractError::Axis`] if `axis >= rank()`.
    pub fn dim(&self, axis: usize) -> Result<Dim, ContractError> {
        self.dims.get(axis).copied().ok_or(ContractError::Axis {
            axis,
            rank: self.dims.len(),
        })
    }

    /// Starting logical index of one axis.
    ///
    /// # Errors
    ///
    /// [`ContractError::Axis`] if `axis` is out of range.
    pub fn min(&self, axis: usize) -> Result<i32, ContractError> {
        Ok(self.dim(axis)?.min)
    }

    /// Number of valid logical indices along one axis.
    ///
    /// # Errors
    ///
    /// [`ContractError::Axis`] if `axis` is out of range.
    pub fn extent(&self, axis: usize) -> Result<i32, ContractError> {
        Ok(self.dim(axis)?.extent)
    }

    /// Flat-memory step per logical increment along one axis.
    ///
    /// # Errors
    ///
    /// [`ContractError::Axis`] if `axis` is out of range.
    pub fn stride(&self, axis: usize) -> Result<i32, ContractError> {
        Ok(self.dim(axis)?.stride)
    }

    /// Flat storage offset of a logical multi-index.
    ///
    /// Each `indices[k]` must lie in `[0, extent_k)`; out-of-range indices
    /// are rejected rather than left as caller proof obligations.
    ///
    /// # Errors
    ///
    /// - [`ContractError::Rank`] if `indices.len() != rank()`
    /// - [`ContractError::IndexOutOfRange`] for any index outside its extent
    pub fn offset(&self, indices: &[i32]) -> Result<usize, ContractError> {
        if indices.len() != self.dims.len() {
            return Err(ContractError::Rank {
                expected: self.dims.len(),
                actual: indices.len(),
            });
        }
        let mut off = self.base as i64;
        for (axis, (&i, d)) in indices.iter().zip(&self.dims).enumerate() {
            if i < 0 || i >= d.extent {
                return Err(ContractError::IndexOutOfRange {
                    axis,
                    index: i,
                    extent: d.extent,
                });
            }
            off += i64::from(d.stride) * i64::from(i);
        }
        // In-range indices cannot escape the validated footprint.
        debug_assert!(off >= 0 && (off as usize) < self.data.len());
        Ok(off as usize)
    }

    /// Checked element read at a logical multi-index.
    ///
    /// # Errors
    ///
    /// Same conditions as [`offset`](Self::offset).
    pub fn get(&self, indices: &[i32]) -> Result<i32, ContractError> {
        Ok(self.data[self.offset(indices)?])
    }

    /// Checked element write at a logical multi-index.
    ///
    /// # Errors
    ///
    /// Same conditions as [`offset`](Self::offset).
    pub fn set(&mut self, indices: &[i32], value: i32) -> Result<(), ContractError> {
        let off = self.offset(indices)?;
        self.data[off] = value;
        Ok(())
    }

    /// Read access to the flat backing store (the `get_host` analogue).
    #[must_use]
    pub fn data(&self) -> &[i32] {
        &self.data
    }

    /// Write access to the flat backing store.
    pub fn data_mut(&mut self) -> &mut [i32] {
        &mut self.data
    }

    /// Overwrites every backing-store element.
    pub fn fill(&mut self, value: i32) {
        self.data.fill(value);
    }

    /// True when both descriptors refer to the same backing store.
    ///
    /// Owned buffers can only alias themselves, so through the safe API
    /// this is equivalent to identity; kernels still call it so the alias
    /// contract is checked where the check belongs.
    #[must_use]
    pub fn shares_backing(&self, other: &Self) -> bool {
        !self.data.is_empty() && std::ptr::eq(self.data.as_ptr(), other.data.as_ptr())
    }
}

fn dense_dims(extents: &[i32]) -> Result<Vec<Dim>, ContractError> {
    let mut dims = Vec::with_capacity(extents.len());
    let mut stride: i64 = 1;
    for (axis, &extent) in extents.iter().enumerate() {
        if extent < 0 {
            return Err(ContractError::NegativeExtent { axis, extent });
        }
        dims.push(Dim::new(0, extent, stride as i32));
        stride *= i64::from(extent);
    }
    Ok(dims)
}
