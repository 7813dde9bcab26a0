//! Shared helpers for the falsification suites.

use buffer_contracts::StridedBuffer;

/// Builds the pinned 42x10 count input from a function of the logical
/// coordinates `(x, r)`.
pub fn count_input(f: impl Fn(i32, i32) -> i32) -> StridedBuffer {
    StridedBuffer::from_fn(&[42, 10], |o| f((o % 42) as i32, (o / 42) as i32))
        .expect("42x10 input must construct")
}

/// Fresh zeroed length-42 count output.
pub fn fresh_count_output() -> StridedBuffer {
    StridedBuffer::contiguous(&[42]).expect("dense 42 output must construct")
}

/// Independent brute-force count of strictly positive values along the
/// reduction axis, computed through checked multi-index access in the
/// reverse iteration order of the kernel.
pub fn count_oracle(input: &StridedBuffer, x: i32) -> i32 {
    let mut acc = 0;
    for r in (0..10).rev() {
        if input.get(&[x, r]).expect("oracle index in range") > 0 {
            acc += 1;
        }
    }
    acc
}
