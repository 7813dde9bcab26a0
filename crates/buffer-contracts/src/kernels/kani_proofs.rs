//! Kani bounded proof harnesses for the kernel contracts.
//!
//! Promotes key properties from statistically-tested (proptest) to bounded
//! mathematical proof for all inputs up to the stated extents. All code
//! here is behind `#[cfg(kani)]` and invisible to normal builds.

use super::count;
use super::ops;
use super::transpose_increment;

/// KANI-CNT-001: every count lies in [0, reduction].
/// Bound: outer 4, reduction 3.
#[kani::proof]
#[kani::unwind(13)]
fn verify_count_range() {
    const OUTER: usize = 4;
    const REDUCTION: usize = 3;
    let input: [i32; OUTER * REDUCTION] = kani::any();

    let mut output = [i32::MIN; OUTER];
    count::count_scalar(&input, OUTER, REDUCTION, &mut output);

    for x in 0..OUTER {
        assert!(
            output[x] >= 0 && output[x] <= REDUCTION as i32,
            "KANI-CNT-001: output[{}] = {} outside [0, {}]",
            x,
            output[x],
            REDUCTION
        );
    }
}

/// KANI-CNT-002: an all-nonpositive input counts to zero everywhere.
/// Bound: outer 4, reduction 3.
#[kani::proof]
#[kani::unwind(13)]
fn verify_count_zero_on_nonpositive() {
    const OUTER: usize = 4;
    const REDUCTION: usize = 3;
    let input: [i32; OUTER * REDUCTION] = kani::any();
    kani::assume(input.iter().all(|&v| v <= 0));

    let mut output = [7i32; OUTER];
    count::count_scalar(&input, OUTER, REDUCTION, &mut output);

    for x in 0..OUTER {
        assert!(output[x] == 0, "KANI-CNT-002: output[{}] != 0", x);
    }
}

/// KANI-CNT-003: the kernel agrees with an independent brute-force count.
/// Bound: outer 3, reduction 3.
#[kani::proof]
#[kani::unwind(10)]
fn verify_count_matches_oracle() {
    const OUTER: usize = 3;
    const REDUCTION: usize = 3;
    let input: [i32; OUTER * REDUCTION] = kani::any();

    let mut output = [0i32; OUTER];
    count::count_scalar(&input, OUTER, REDUCTION, &mut output);

    for x in 0..OUTER {
        let mut expected = 0;
        for r in 0..REDUCTION {
            if input[r * OUTER + x] > 0 {
                expected += 1;
            }
        }
        assert!(
            output[x] == expected,
            "KANI-CNT-003: output[{}] = {}, oracle {}",
            x,
            output[x],
            expected
        );
    }
}

/// KANI-TRI-001: odd input everywhere yields even output everywhere.
/// Bound: n = 3.
#[kani::proof]
#[kani::unwind(10)]
fn verify_transpose_increment_parity() {
    const N: usize = 3;
    let input: [i32; N * N] = kani::any();
    kani::assume(input.iter().all(|&v| v > i32::MIN && v < i32::MAX && v % 2 != 0));

    let mut output = [0i32; N * N];
    transpose_increment::transpose_increment_scalar(&input, N, &mut output);

    for o in 0..N * N {
        assert!(output[o] % 2 == 0, "KANI-TRI-001: output[{}] is odd", o);
    }
}

/// KANI-OPS-001: division identity and remainder range for hdiv/hmod.
#[kani::proof]
fn verify_hdiv_hmod_identity() {
    let x: i32 = kani::any();
    let y: i32 = kani::any();
    kani::assume(y != 0 && y != -1 && y > i32::MIN && x > i32::MIN);
    kani::assume(x.checked_div_euclid(y).is_some());

    let q = ops::hdiv(x, y);
    let r = ops::hmod(x, y);
    assert!(x == y.wrapping_mul(q).wrapping_add(r), "KANI-OPS-001: identity");
    assert!(r >= 0 && r < y.abs(), "KANI-OPS-001: remainder range");
}
