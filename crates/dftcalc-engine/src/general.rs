//! Mixed-radix transform for arbitrary lengths.

use tracing::trace;

use crate::complex::Complex;
use crate::constants::{DIRECT_TRANSFORM_THRESHOLD, MAX_DATA_SIZE};
use crate::direct::direct_transform;
use crate::error::{check_length, DftError};
use crate::number_theory::{factorize, Factorization, PrimitiveRootCache};
use crate::prime::prime_transform;
use crate::twiddle::TwiddleBasis;

/// Transform a sequence of any length supported by `basis`.
///
/// `N` is factored once; each level peels its smallest prime `N1` (two
/// factors of 2 are merged into a radix-4 step), runs `N2 = N/N1` local
/// transforms of length `N1` over stride-`N2` rows, twiddles by
/// `w^(j2·k1)`, and recurses into `N1` columns of length `N2`. Local
/// transforms below [`DIRECT_TRANSFORM_THRESHOLD`] are summed directly; longer
/// ones are prime by construction and go through Rader.
pub fn general_transform(
    data: &[Complex],
    basis: &TwiddleBasis,
    roots: &PrimitiveRootCache,
) -> Result<Vec<Complex>, DftError> {
    let n = data.len();
    check_length(n, MAX_DATA_SIZE)?;
    if !basis.supports(n) {
        return Err(DftError::UnsupportedBasisLength {
            requested: n,
            supported: basis.supported_len(),
        });
    }
    let len = u32::try_from(n).map_err(|_| DftError::SequenceTooLarge {
        len: n,
        max: MAX_DATA_SIZE,
    })?;
    let family = factorize(len)?;
    trace!(n, factors = ?family.root().factors(), "mixed-radix transform");
    transform_factored(data, basis, &family.root(), roots)
}

fn transform_factored(
    data: &[Complex],
    basis: &TwiddleBasis,
    factors: &Factorization<'_>,
    roots: &PrimitiveRootCache,
) -> Result<Vec<Complex>, DftError> {
    let n = data.len();
    if factors.is_unit() {
        return Ok(data.to_vec());
    }

    let (mut radix, mut rest) = factors.separate_lowest()?;
    if radix == 2 && rest.lowest() == Some(2) {
        let (_, tail) = rest.separate_lowest()?;
        radix = 4;
        rest = tail;
    }
    let n1 = radix as usize;
    let n2 = rest.value() as usize;

    // rows[j2·n1 + k1]: local transform of the stride-n2 row starting at j2.
    let mut rows = vec![Complex::ZERO; n];
    let mut row = Vec::with_capacity(n1);
    for j2 in 0..n2 {
        row.clear();
        row.extend((0..n1).map(|j1| data[n2 * j1 + j2]));
        let spectrum = local_transform(&row, basis, roots)?;
        rows[j2 * n1..(j2 + 1) * n1].copy_from_slice(&spectrum);
    }
    if n2 == 1 {
        return Ok(rows);
    }

    let full = basis.view(n)?;
    let mut columns = vec![Complex::ZERO; n];
    for j2 in 0..n2 {
        for k1 in 0..n1 {
            columns[k1 * n2 + j2] = rows[j2 * n1 + k1] * full.value_at((j2 * k1) % n);
        }
    }

    let mut result = vec![Complex::ZERO; n];
    for (k1, column) in columns.chunks_exact(n2).enumerate() {
        let spectrum = transform_factored(column, basis, &rest, roots)?;
        for (k2, value) in spectrum.into_iter().enumerate() {
            result[n1 * k2 + k1] = value;
        }
    }
    Ok(result)
}

fn local_transform(
    row: &[Complex],
    basis: &TwiddleBasis,
    roots: &PrimitiveRootCache,
) -> Result<Vec<Complex>, DftError> {
    if row.len() < DIRECT_TRANSFORM_THRESHOLD {
        direct_transform(row, basis)
    } else {
        prime_transform(row, basis, roots)
    }
}
