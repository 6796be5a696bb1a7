//! Engine facade owning the caches that outlive a single call.

use std::sync::OnceLock;

use tracing::debug;

use crate::complex::Complex;
use crate::constants::MAX_DATA_SIZE;
use crate::convolution::cyclic_convolution;
use crate::error::{check_length, DftError};
use crate::general::general_transform;
use crate::number_theory::PrimitiveRootCache;
use crate::twiddle::{Direction, TwiddleBasis};

/// Entry point for unnormalized DFT/IDFT and cyclic convolution.
///
/// Primitive-root tables built for Rader steps are kept for the lifetime of
/// the engine, so one engine shared across threads builds each table once.
#[derive(Debug, Default)]
pub struct FourierEngine {
    roots: PrimitiveRootCache,
}

static GLOBAL: OnceLock<FourierEngine> = OnceLock::new();

impl FourierEngine {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The process-wide engine.
    pub fn global() -> &'static Self {
        GLOBAL.get_or_init(Self::new)
    }

    /// Forward DFT: `X[k] = Σ x[j]·exp(−2πi·jk/N)`.
    pub fn forward(&self, data: &[Complex]) -> Result<Vec<Complex>, DftError> {
        self.transform(data, Direction::Forward)
    }

    /// Inverse DFT without the `1/N` factor: `inverse(forward(x)) = N·x`.
    pub fn inverse(&self, data: &[Complex]) -> Result<Vec<Complex>, DftError> {
        self.transform(data, Direction::Inverse)
    }

    pub fn transform(
        &self,
        data: &[Complex],
        direction: Direction,
    ) -> Result<Vec<Complex>, DftError> {
        check_length(data.len(), MAX_DATA_SIZE)?;
        debug!(len = data.len(), ?direction, "transform");
        let basis = TwiddleBasis::for_length(data.len(), direction)?;
        self.compute(data, &basis)
    }

    /// Transform with a caller-provided basis.
    pub fn compute(&self, data: &[Complex], basis: &TwiddleBasis) -> Result<Vec<Complex>, DftError> {
        general_transform(data, basis, &self.roots)
    }

    /// Cyclic convolution of two equal-length sequences.
    pub fn convolve(&self, f: &[Complex], g: &[Complex]) -> Result<Vec<Complex>, DftError> {
        cyclic_convolution(f, g)
    }

    /// Primitive-root tables built so far.
    #[must_use]
    pub fn cached_root_tables(&self) -> usize {
        self.roots.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{assert_all_close, naive_convolution, naive_dft, sample};

    #[test]
    fn forward_matches_naive() {
        let engine = FourierEngine::new();
        for n in [1, 2, 9, 16, 45, 128, 1024, 2048] {
            let data = sample(n, 11);
            let got = engine.forward(&data).unwrap();
            #[allow(clippy::cast_precision_loss)]
            let tol = 1e-12 * n as f64;
            assert_all_close(&got, &naive_dft(&data, Direction::Forward), tol);
        }
    }

    #[test]
    fn inverse_of_forward_scales_by_length() {
        let engine = FourierEngine::new();
        for n in [1, 6, 17, 64, 100, 337] {
            let data = sample(n, 5);
            let round_trip = engine.inverse(&engine.forward(&data).unwrap()).unwrap();
            #[allow(clippy::cast_precision_loss)]
            let scaled: Vec<Complex> = data.iter().map(|v| v.scale(n as f64)).collect();
            #[allow(clippy::cast_precision_loss)]
            let tol = 1e-11 * n as f64;
            assert_all_close(&round_trip, &scaled, tol);
        }
    }

    #[test]
    fn rader_tables_are_kept_by_the_engine() {
        let engine = FourierEngine::new();
        let data = sample(337, 1);
        engine.forward(&data).unwrap();
        engine.inverse(&data).unwrap();
        assert_eq!(engine.cached_root_tables(), 1);
    }

    #[test]
    fn size_contract() {
        let engine = FourierEngine::new();
        assert_eq!(engine.forward(&[]).unwrap_err(), DftError::EmptySequence);
    }

    #[test]
    fn convolve_delegates() {
        let engine = FourierEngine::global();
        let f = sample(12, 1);
        let g = sample(12, 2);
        assert_all_close(
            &engine.convolve(&f, &g).unwrap(),
            &naive_convolution(&f, &g),
            1e-11,
        );
    }

    #[test]
    fn global_is_a_singleton() {
        assert!(std::ptr::eq(FourierEngine::global(), FourierEngine::global()));
    }
}
