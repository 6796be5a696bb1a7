//! DFT and IDFT adapters over the process-wide engine.

use dftcalc_engine::{Complex, DftError, Direction, FourierEngine};

use crate::constants::MAX_FOURIER_LEN;
use crate::transform::CoreTransform;
use crate::validation::SizeRequirement;

/// Fourier transform in one direction.
#[derive(Debug, Clone, Copy)]
pub struct Fourier {
    direction: Direction,
}

impl Fourier {
    /// Forward DFT.
    #[must_use]
    pub fn forward() -> Self {
        Self {
            direction: Direction::Forward,
        }
    }

    /// Unnormalized inverse DFT.
    #[must_use]
    pub fn inverse() -> Self {
        Self {
            direction: Direction::Inverse,
        }
    }

    #[must_use]
    pub fn direction(&self) -> Direction {
        self.direction
    }
}

impl CoreTransform for Fourier {
    fn compute_core(&self, data: &[Complex]) -> Result<Vec<Complex>, DftError> {
        FourierEngine::global().transform(data, self.direction)
    }

    fn name(&self) -> &'static str {
        match self.direction {
            Direction::Forward => "DFT",
            Direction::Inverse => "IDFT",
        }
    }

    fn size_requirement(&self) -> SizeRequirement {
        SizeRequirement::new(1, MAX_FOURIER_LEN)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close(a: &[Complex], b: &[Complex], tol: f64) -> bool {
        a.len() == b.len() && a.iter().zip(b).all(|(x, y)| (*x - *y).abs() <= tol)
    }

    #[test]
    fn forward_four_points() {
        let data = [1.0, 2.0, 3.0, 4.0].map(Complex::from);
        let got = Fourier::forward().compute_core(&data).unwrap();
        let expected = [
            Complex::new(10.0, 0.0),
            Complex::new(-2.0, 2.0),
            Complex::new(-2.0, 0.0),
            Complex::new(-2.0, -2.0),
        ];
        assert!(close(&got, &expected, 1e-12));
    }

    #[test]
    fn inverse_is_unnormalized() {
        let data = [1.0, 0.0, 0.0, 0.0, 0.0, 0.0].map(Complex::from);
        let spectrum = Fourier::forward().compute_core(&data).unwrap();
        let back = Fourier::inverse().compute_core(&spectrum).unwrap();
        let expected = [6.0, 0.0, 0.0, 0.0, 0.0, 0.0].map(Complex::from);
        assert!(close(&back, &expected, 1e-12));
    }

    #[test]
    fn names_and_limits() {
        assert_eq!(Fourier::forward().name(), "DFT");
        assert_eq!(Fourier::inverse().name(), "IDFT");
        assert_eq!(Fourier::inverse().direction(), Direction::Inverse);
        assert_eq!(
            Fourier::forward().size_requirement(),
            SizeRequirement::new(1, MAX_FOURIER_LEN)
        );
    }
}
