//! Cyclic convolution of two equal-length sequences.

use dftcalc_engine::{Complex, FourierEngine};
use tracing::warn;

use crate::constants::MAX_CONVOLUTION_LEN;
use crate::transform::{all_finite, divide_all, peak_magnitude, TransformError};
use crate::validation::SizeRequirement;

/// Two-operand counterpart of [`Transform`](crate::transform::Transform).
pub trait Convolver: Send + Sync {
    /// `h[n] = Σ_m f[m]·g[(n − m) mod N]`.
    fn convolve(&self, f: &[Complex], g: &[Complex]) -> Result<Vec<Complex>, TransformError>;

    fn size_requirement(&self) -> SizeRequirement;
}

fn requirement(limit: usize) -> SizeRequirement {
    SizeRequirement::new(1, MAX_CONVOLUTION_LEN).capped(limit)
}

/// Validated convolution straight through the engine.
#[derive(Debug, Clone, Copy)]
pub struct CyclicConvolution {
    limit: usize,
}

impl CyclicConvolution {
    #[must_use]
    pub fn with_limit(limit: usize) -> Self {
        Self { limit }
    }
}

impl Default for CyclicConvolution {
    fn default() -> Self {
        Self::with_limit(usize::MAX)
    }
}

impl Convolver for CyclicConvolution {
    fn convolve(&self, f: &[Complex], g: &[Complex]) -> Result<Vec<Complex>, TransformError> {
        self.size_requirement().check_pair(f.len(), g.len())?;
        Ok(FourierEngine::global().convolve(f, g)?)
    }

    fn size_requirement(&self) -> SizeRequirement {
        requirement(self.limit)
    }
}

/// Convolution with each operand brought to unit peak magnitude first.
///
/// Non-finite input yields an all-NaN result. A zero operand yields zeros.
#[derive(Debug, Clone, Copy)]
pub struct ScaledConvolution {
    limit: usize,
}

impl ScaledConvolution {
    #[must_use]
    pub fn with_limit(limit: usize) -> Self {
        Self { limit }
    }
}

impl Default for ScaledConvolution {
    fn default() -> Self {
        Self::with_limit(usize::MAX)
    }
}

impl Convolver for ScaledConvolution {
    fn convolve(&self, f: &[Complex], g: &[Complex]) -> Result<Vec<Complex>, TransformError> {
        self.size_requirement().check_pair(f.len(), g.len())?;
        if !all_finite(f) || !all_finite(g) {
            warn!(len = f.len(), "non-finite convolution operand, returning NaN");
            return Ok(vec![Complex::NAN; f.len()]);
        }
        let (f_peak, g_peak) = (peak_magnitude(f), peak_magnitude(g));
        if f_peak == 0.0 || g_peak == 0.0 {
            return Ok(vec![Complex::ZERO; f.len()]);
        }
        let result = FourierEngine::global().convolve(&divide_all(f, f_peak), &divide_all(g, g_peak))?;
        // Rescale in two steps; the product of the peaks may overflow on its own.
        Ok(result
            .into_iter()
            .map(|value| value.scale(f_peak).scale(g_peak))
            .collect())
    }

    fn size_requirement(&self) -> SizeRequirement {
        requirement(self.limit)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validation::Rejection;

    fn reals(values: &[f64]) -> Vec<Complex> {
        values.iter().copied().map(Complex::from).collect()
    }

    fn assert_close(got: &[Complex], expected: &[Complex], tol: f64) {
        assert_eq!(got.len(), expected.len());
        for (a, b) in got.iter().zip(expected) {
            assert!((*a - *b).abs() <= tol, "{a:?} vs {b:?}");
        }
    }

    #[test]
    fn shift_by_one() {
        let f = reals(&[1.0, 2.0, 3.0]);
        let g = reals(&[0.0, 1.0, 0.0]);
        let expected = reals(&[3.0, 1.0, 2.0]);
        assert_close(&CyclicConvolution::default().convolve(&f, &g).unwrap(), &expected, 1e-12);
        assert_close(&ScaledConvolution::default().convolve(&f, &g).unwrap(), &expected, 1e-12);
    }

    #[test]
    fn scaled_handles_large_magnitudes() {
        let f = reals(&[1e200, 0.0, 0.0, 0.0]);
        let g = reals(&[1e100, 2e100, 0.0, 0.0]);
        let got = ScaledConvolution::default().convolve(&f, &g).unwrap();
        let expected = reals(&[1e300, 2e300, 0.0, 0.0]);
        for (a, b) in got.iter().zip(&expected) {
            assert!((a.re - b.re).abs() <= 1e288);
            assert!(a.im.abs() <= 1e288);
        }
    }

    #[test]
    fn scaled_keeps_components_near_max_finite() {
        let f = [Complex::new(1.5e308, 1.5e308), Complex::ZERO];
        let g = reals(&[1.0, 0.0]);
        let got = ScaledConvolution::default().convolve(&f, &g).unwrap();
        assert!(got.iter().all(|v| v.is_finite()), "{got:?}");
        assert!((got[0].re - 1.5e308).abs() <= 1e295);
        assert!((got[0].im - 1.5e308).abs() <= 1e295);
        assert!(got[1].abs() <= 1e295);
    }

    #[test]
    fn scaled_non_finite_is_nan() {
        let f = reals(&[1.0, f64::NAN]);
        let g = reals(&[1.0, 1.0]);
        let got = ScaledConvolution::default().convolve(&f, &g).unwrap();
        assert_eq!(got.len(), 2);
        assert!(got.iter().all(|v| v.re.is_nan() && v.im.is_nan()));
    }

    #[test]
    fn scaled_zero_operand() {
        let got = ScaledConvolution::default()
            .convolve(&reals(&[0.0; 5]), &reals(&[1.0, 2.0, 3.0, 4.0, 5.0]))
            .unwrap();
        assert_eq!(got, vec![Complex::ZERO; 5]);
    }

    #[test]
    fn mismatched_lengths_rejected() {
        let err = CyclicConvolution::default()
            .convolve(&reals(&[1.0, 2.0]), &reals(&[1.0]))
            .unwrap_err();
        assert_eq!(
            err,
            TransformError::Rejected(Rejection::LengthMismatch { left: 2, right: 1 })
        );
        assert!(ScaledConvolution::default().convolve(&[], &[]).is_err());
    }

    #[test]
    fn limit_caps_operand_length() {
        let conv = ScaledConvolution::with_limit(2);
        assert_eq!(conv.size_requirement(), SizeRequirement::new(1, 2));
        let err = conv
            .convolve(&reals(&[1.0; 3]), &reals(&[1.0; 3]))
            .unwrap_err();
        assert_eq!(err, TransformError::Rejected(Rejection::TooLong { len: 3, max: 2 }));
    }
}
