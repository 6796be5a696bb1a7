//! Rader's algorithm: a prime-length transform as one cyclic convolution.

use crate::complex::Complex;
use crate::convolution::cyclic_convolution;
use crate::error::DftError;
use crate::number_theory::PrimitiveRootCache;
use crate::twiddle::TwiddleBasis;

/// Transform a sequence whose length is an odd prime.
///
/// With `g` the minimal primitive root of `N`, indices `g^(−j)` of the input
/// and `g^j` of the roots turn the `N − 1` non-DC outputs into the cyclic
/// convolution `y = a ⊛ w`, and `out[g^q] = data[0] + y[q]`.
///
/// Primality is not checked. A composite odd length yields a wrong result
/// or a [`DftError::NoPrimitiveRoot`] error.
pub fn prime_transform(
    data: &[Complex],
    basis: &TwiddleBasis,
    roots: &PrimitiveRootCache,
) -> Result<Vec<Complex>, DftError> {
    let n = data.len();
    let view = basis.view(n)?;
    let prime = prime_modulus(n)?;
    let table = roots.table(prime)?;
    let order = table.order();

    let a: Vec<Complex> = (0..order)
        .map(|j| data[table.power((order - j) % order) as usize])
        .collect();
    let w: Vec<Complex> = (0..order)
        .map(|j| view.value_at(table.power(j) as usize))
        .collect();
    let y = cyclic_convolution(&a, &w)?;

    let mut result = vec![Complex::ZERO; n];
    result[0] = data.iter().copied().sum();
    for (q, value) in y.into_iter().enumerate() {
        result[table.power(q) as usize] = value + data[0];
    }
    Ok(result)
}

/// The length as a modulus for the root tables.
fn prime_modulus(n: usize) -> Result<u32, DftError> {
    u32::try_from(n).map_err(|_| DftError::SequenceTooLarge {
        len: n,
        max: u32::MAX as usize,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::direct::direct_transform;
    use crate::test_support::{assert_all_close, sample};
    use crate::twiddle::Direction;

    #[test]
    fn oversized_length_is_reported_as_too_large() {
        assert_eq!(prime_modulus(829), Ok(829));
        let n = u32::MAX as usize;
        assert_eq!(prime_modulus(n), Ok(u32::MAX));
        if let Some(beyond) = n.checked_add(1) {
            assert_eq!(
                prime_modulus(beyond),
                Err(DftError::SequenceTooLarge { len: beyond, max: n })
            );
        }
    }

    #[test]
    fn agrees_with_direct_summation() {
        let roots = PrimitiveRootCache::new();
        for p in [3usize, 5, 7, 13, 31, 43, 829] {
            for direction in [Direction::Forward, Direction::Inverse] {
                let basis = TwiddleBasis::new(p, direction).unwrap();
                let data = sample(p, p as u64);
                let got = prime_transform(&data, &basis, &roots).unwrap();
                let expected = direct_transform(&data, &basis).unwrap();
                #[allow(clippy::cast_precision_loss)]
                let tol = 1e-12 * p as f64;
                assert_all_close(&got, &expected, tol);
            }
        }
        assert_eq!(roots.len(), 7);
    }

    #[test]
    fn dc_bin_is_plain_sum() {
        let roots = PrimitiveRootCache::new();
        let basis = TwiddleBasis::new(11, Direction::Forward).unwrap();
        let data = sample(11, 4);
        let got = prime_transform(&data, &basis, &roots).unwrap();
        let sum: Complex = data.iter().copied().sum();
        assert_eq!(got[0], sum);
    }

    #[test]
    fn works_from_a_multiple_basis() {
        let roots = PrimitiveRootCache::new();
        let basis = TwiddleBasis::new(7 * 4, Direction::Forward).unwrap();
        let data = sample(7, 8);
        let got = prime_transform(&data, &basis, &roots).unwrap();
        let expected = direct_transform(&data, &basis).unwrap();
        assert_all_close(&got, &expected, 1e-12);
    }

    #[test]
    fn even_length_is_rejected_by_root_search() {
        let roots = PrimitiveRootCache::new();
        let basis = TwiddleBasis::new(4, Direction::Forward).unwrap();
        let data = sample(4, 1);
        assert_eq!(
            prime_transform(&data, &basis, &roots).unwrap_err(),
            DftError::InvalidModulus(4)
        );
    }
}
