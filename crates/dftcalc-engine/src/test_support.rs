//! Reference implementations and fixtures for unit tests.

use std::f64::consts::TAU;

use crate::complex::Complex;
use crate::twiddle::Direction;

/// Deterministic pseudo-random data in `[-1, 1)²`.
#[allow(clippy::cast_precision_loss)]
pub(crate) fn sample(n: usize, seed: u64) -> Vec<Complex> {
    let mut state = seed.wrapping_mul(6_364_136_223_846_793_005).wrapping_add(1);
    let mut next = move || {
        state = state
            .wrapping_mul(6_364_136_223_846_793_005)
            .wrapping_add(1_442_695_040_888_963_407);
        ((state >> 11) as f64 / (1u64 << 53) as f64) * 2.0 - 1.0
    };
    (0..n).map(|_| Complex::new(next(), next())).collect()
}

/// Textbook DFT with angles computed per term.
#[allow(clippy::cast_precision_loss)]
pub(crate) fn naive_dft(data: &[Complex], direction: Direction) -> Vec<Complex> {
    let n = data.len();
    (0..n)
        .map(|k| {
            data.iter()
                .enumerate()
                .map(|(j, &x)| {
                    let angle = direction.sign() * TAU * ((j * k) % n) as f64 / n as f64;
                    x * Complex::cis(angle)
                })
                .sum()
        })
        .collect()
}

/// `h[i] = Σ_j f[j]·g[(i − j) mod N]`.
pub(crate) fn naive_convolution(f: &[Complex], g: &[Complex]) -> Vec<Complex> {
    let n = f.len();
    (0..n)
        .map(|i| (0..n).map(|j| f[j] * g[(i + n - j) % n]).sum())
        .collect()
}

pub(crate) fn assert_all_close(got: &[Complex], expected: &[Complex], tol: f64) {
    assert_eq!(got.len(), expected.len(), "length mismatch");
    for (i, (a, b)) in got.iter().zip(expected).enumerate() {
        assert!(
            (*a - *b).abs() <= tol,
            "index {i}: got {a:?}, expected {b:?} (tol {tol:e})"
        );
    }
}
