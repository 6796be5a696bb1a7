//! Radix-4 transform for power-of-two lengths.

use crate::complex::Complex;
use crate::constants::POWER2_DIRECT_THRESHOLD;
use crate::direct::direct_transform;
use crate::error::DftError;
use crate::twiddle::TwiddleBasis;

/// Transform a power-of-two length sequence.
///
/// Splits `N = 4·N2`: four-point transforms over stride-`N2` rows, twiddle by
/// `w^(j2·k1)`, then length-`N2` transforms of the columns written back to
/// `result[4·k2 + k1]`. Lengths up to 4 are summed directly.
pub fn power2_transform(data: &[Complex], basis: &TwiddleBasis) -> Result<Vec<Complex>, DftError> {
    let n = data.len();
    if !n.is_power_of_two() {
        return Err(DftError::NotPowerOfTwo(n));
    }
    if !basis.supports(n) {
        return Err(DftError::UnsupportedBasisLength {
            requested: n,
            supported: basis.supported_len(),
        });
    }
    radix4(data, basis)
}

fn radix4(data: &[Complex], basis: &TwiddleBasis) -> Result<Vec<Complex>, DftError> {
    let n = data.len();
    if n <= POWER2_DIRECT_THRESHOLD {
        return direct_transform(data, basis);
    }
    let n2 = n / 4;
    let full = basis.view(n)?;
    // w4 is -i forward and +i inverse.
    let w4 = basis.view(4)?.value_at(1);

    // columns[k1·n2 + j2] holds the twiddled output k1 of row j2.
    let mut columns = vec![Complex::ZERO; n];
    for j2 in 0..n2 {
        let x0 = data[j2];
        let x1 = data[n2 + j2];
        let x2 = data[2 * n2 + j2];
        let x3 = data[3 * n2 + j2];

        let sum02 = x0 + x2;
        let diff02 = x0 - x2;
        let sum13 = x1 + x3;
        let diff13 = (x1 - x3) * w4;

        let outputs = [sum02 + sum13, diff02 + diff13, sum02 - sum13, diff02 - diff13];
        for (k1, value) in outputs.into_iter().enumerate() {
            columns[k1 * n2 + j2] = value * full.value_at(j2 * k1);
        }
    }

    let mut result = vec![Complex::ZERO; n];
    for (k1, column) in columns.chunks_exact(n2).enumerate() {
        let spectrum = radix4(column, basis)?;
        for (k2, value) in spectrum.into_iter().enumerate() {
            result[4 * k2 + k1] = value;
        }
    }
    Ok(result)
}
