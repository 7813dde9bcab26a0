//! Falsification tests for the transposing increment kernel.

use buffer_contracts::kernels::transpose_increment::transpose_increment;
use buffer_contracts::StridedBuffer;
use proptest::prelude::*;

fn square_input(n: i32, seed: &[i32], f: impl Fn(i32) -> i32) -> StridedBuffer {
    StridedBuffer::from_fn(&[n, n], |o| f(seed[o % seed.len()])).unwrap()
}

proptest! {
    /// FALSIFY-TRI-001: Parity
    /// Prediction: odd input everywhere gives even output everywhere
    /// If fails: the increment or the diagonal update drops parity
    #[test]
    fn falsify_tri_001_parity(
        n in 1i32..9,
        seed in proptest::collection::vec(-100i32..100, 81)
    ) {
        let input = square_input(n, &seed, |v| 2 * v + 1);
        let mut output = StridedBuffer::contiguous(&[n, n]).unwrap();
        transpose_increment(&input, &mut output).unwrap();
        for (o, &v) in output.data().iter().enumerate() {
            prop_assert_eq!(v % 2, 0, "FALSIFY-TRI-001 failed at offset {}", o);
        }
    }

    /// FALSIFY-TRI-002: Transpose oracle
    /// Prediction: output[x, y] == input[y, x] + 1 off the diagonal and 0
    /// on it
    /// If fails: axes swapped the wrong way or the update misses/overruns
    /// the diagonal
    #[test]
    fn falsify_tri_002_oracle(
        n in 1i32..8,
        seed in proptest::collection::vec(-50i32..50, 64)
    ) {
        let input = square_input(n, &seed, |v| v);
        let mut output = StridedBuffer::contiguous(&[n, n]).unwrap();
        transpose_increment(&input, &mut output).unwrap();
        for x in 0..n {
            for y in 0..n {
                let expected = if x == y { 0 } else { input.get(&[y, x]).unwrap() + 1 };
                prop_assert_eq!(
                    output.get(&[x, y]).unwrap(),
                    expected,
                    "FALSIFY-TRI-002 failed at ({}, {})", x, y
                );
            }
        }
    }

    /// FALSIFY-TRI-003: Determinism
    /// Prediction: repeated invocations with fresh outputs agree and never
    /// mutate the input
    #[test]
    fn falsify_tri_003_determinism(
        n in 1i32..8,
        seed in proptest::collection::vec(-50i32..50, 64)
    ) {
        let input = square_input(n, &seed, |v| v);
        let before = input.clone();
        let mut first = StridedBuffer::contiguous(&[n, n]).unwrap();
        let mut second = StridedBuffer::contiguous(&[n, n]).unwrap();
        transpose_increment(&input, &mut first).unwrap();
        transpose_increment(&input, &mut second).unwrap();
        prop_assert_eq!(first.data(), second.data());
        prop_assert_eq!(input, before);
    }
}

/// FALSIFY-TRI-004: Shape rejection
/// Prediction: a rectangular input or mismatched output is rejected before
/// any write
#[test]
fn falsify_tri_004_shape_rejection() {
    let input = StridedBuffer::contiguous(&[4, 3]).unwrap();
    let mut output = StridedBuffer::from_fn(&[4, 4], |_| 13).unwrap();
    let err = transpose_increment(&input, &mut output).unwrap_err();
    assert!(err.is_shape(), "expected shape family, got {err}");
    assert!(output.data().iter().all(|&v| v == 13));
}
