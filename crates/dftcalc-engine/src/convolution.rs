//! Cyclic convolution of arbitrary length through power-of-two transforms.

use crate::complex::Complex;
use crate::constants::MAX_SEQUENCE_SIZE;
use crate::error::{check_length, DftError};
use crate::power2::power2_transform;
use crate::twiddle::{Direction, TwiddleBasis};

/// `h[i] = Σ_j f[j]·g[(i − j) mod N]` for any length `N`.
///
/// Both operands are embedded in a power-of-two length `M ≥ 2N − 1` so that
/// the length-`M` wraparound reproduces the length-`N` one on the first `N`
/// outputs: `f` keeps `f[0]` in front and moves `f[1..]` to the tail, `g` is
/// tiled end to end.
pub fn cyclic_convolution(f: &[Complex], g: &[Complex]) -> Result<Vec<Complex>, DftError> {
    let n = f.len();
    if n != g.len() {
        return Err(DftError::LengthMismatch {
            left: n,
            right: g.len(),
        });
    }
    check_length(n, MAX_SEQUENCE_SIZE)?;

    let m = padded_length(n);
    if m == n {
        return power2_cyclic_convolution(f, g);
    }

    let mut f_ext = vec![Complex::ZERO; m];
    f_ext[0] = f[0];
    f_ext[m - n + 1..].copy_from_slice(&f[1..]);

    let g_ext: Vec<Complex> = g.iter().copied().cycle().take(m).collect();

    let mut h = power2_cyclic_convolution(&f_ext, &g_ext)?;
    h.truncate(n);
    Ok(h)
}

/// Smallest power of two that convolves length `n` without aliasing.
#[must_use]
pub fn padded_length(n: usize) -> usize {
    if n.is_power_of_two() {
        n
    } else {
        (2 * n - 1).next_power_of_two()
    }
}

/// Cyclic convolution of two sequences of the same power-of-two length `M`.
///
/// Forward-transforms both, multiplies pointwise, inverse-transforms, and
/// divides by `M`: the forward/inverse pair alone scales by `M`.
pub fn power2_cyclic_convolution(f: &[Complex], g: &[Complex]) -> Result<Vec<Complex>, DftError> {
    let m = f.len();
    if m != g.len() {
        return Err(DftError::LengthMismatch {
            left: m,
            right: g.len(),
        });
    }
    if !m.is_power_of_two() {
        return Err(DftError::NotPowerOfTwo(m));
    }

    let forward = TwiddleBasis::for_length(m, Direction::Forward)?;
    let inverse = TwiddleBasis::for_length(m, Direction::Inverse)?;

    let f_hat = power2_transform(f, &forward)?;
    let g_hat = power2_transform(g, &forward)?;
    let product: Vec<Complex> = f_hat.into_iter().zip(g_hat).map(|(a, b)| a * b).collect();

    let h = power2_transform(&product, &inverse)?;
    #[allow(clippy::cast_precision_loss)]
    let scale = 1.0 / m as f64;
    Ok(h.into_iter().map(|value| value.scale(scale)).collect())
}
