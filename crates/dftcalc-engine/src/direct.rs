//! O(N²) transform by direct summation, the recursion leaf for small blocks.

use crate::complex::Complex;
use crate::error::DftError;
use crate::twiddle::TwiddleBasis;

/// `A[k] = Σ_j data[j]·w^(j·k mod N)` with `w` taken from `basis`.
///
/// The exponent `j·k mod N` is advanced by `k` per term and wrapped, so every
/// factor is an exact table lookup.
pub fn direct_transform(data: &[Complex], basis: &TwiddleBasis) -> Result<Vec<Complex>, DftError> {
    let n = data.len();
    let view = basis.view(n)?;
    if n == 1 {
        return Ok(data.to_vec());
    }

    let mut result = Vec::with_capacity(n);
    for k in 0..n {
        let mut sum = Complex::ZERO;
        let mut index = 0;
        for &value in data {
            sum += value * view.value_at(index);
            index += k;
            if index >= n {
                index -= n;
            }
        }
        result.push(sum);
    }
    Ok(result)
}
