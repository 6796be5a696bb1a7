//! Transform traits and the decorators layered over them.
//!
//! `CoreTransform` is the raw algorithm implemented by each adapter.
//! `Transform` is the public trait handed out by the registry.
//! `CheckedTransform` validates input length, `ScaledTransform` guards the
//! engine against non-finite input and extreme magnitudes, and
//! `NormalizedInverse` applies the `1/N` factor the engine leaves out.

use std::sync::Arc;

use dftcalc_engine::{Complex, DftError};
use tracing::{trace, warn};

use crate::validation::{Rejection, SizeRequirement};

/// Error type for transform calls.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TransformError {
    /// The input length is outside what the transform accepts.
    #[error("input rejected: {0}")]
    Rejected(#[from] Rejection),

    /// The engine refused the call.
    #[error("transform failed: {0}")]
    Engine(#[from] DftError),

    /// The registry has no transform of this name.
    #[error("unknown transform: {0}")]
    UnknownTransform(String),
}

/// Public trait for transforms, consumed by the registry and the CLI.
pub trait Transform: Send + Sync {
    /// Transform `data` into a new sequence of the same length.
    fn compute(&self, data: &[Complex]) -> Result<Vec<Complex>, TransformError>;

    /// Registry name of this transform.
    fn name(&self) -> &str;

    /// Accepted input lengths.
    fn size_requirement(&self) -> SizeRequirement;
}

/// Internal trait for transform algorithms.
/// Wrapped by `CheckedTransform`, which rejects bad lengths first.
pub trait CoreTransform: Send + Sync {
    fn compute_core(&self, data: &[Complex]) -> Result<Vec<Complex>, DftError>;

    fn name(&self) -> &str;

    fn size_requirement(&self) -> SizeRequirement;
}

/// Decorator that checks the input length before running the algorithm.
pub struct CheckedTransform {
    inner: Arc<dyn CoreTransform>,
    limit: usize,
}

impl CheckedTransform {
    #[must_use]
    pub fn new(inner: Arc<dyn CoreTransform>) -> Self {
        Self::with_limit(inner, usize::MAX)
    }

    /// Also reject inputs longer than `limit`.
    #[must_use]
    pub fn with_limit(inner: Arc<dyn CoreTransform>, limit: usize) -> Self {
        Self { inner, limit }
    }
}

impl Transform for CheckedTransform {
    fn compute(&self, data: &[Complex]) -> Result<Vec<Complex>, TransformError> {
        self.size_requirement().check(data.len())?;
        trace!(name = self.inner.name(), len = data.len(), "running transform");
        Ok(self.inner.compute_core(data)?)
    }

    fn name(&self) -> &str {
        self.inner.name()
    }

    fn size_requirement(&self) -> SizeRequirement {
        self.inner.size_requirement().capped(self.limit)
    }
}

/// Decorator that scales input to unit peak magnitude for the computation.
///
/// Any non-finite component turns the whole result into NaN without
/// touching the engine. An all-zero input is passed through unscaled.
pub struct ScaledTransform {
    inner: Arc<dyn Transform>,
}

impl ScaledTransform {
    #[must_use]
    pub fn new(inner: Arc<dyn Transform>) -> Self {
        Self { inner }
    }
}

impl Transform for ScaledTransform {
    fn compute(&self, data: &[Complex]) -> Result<Vec<Complex>, TransformError> {
        self.inner.size_requirement().check(data.len())?;
        if !all_finite(data) {
            warn!(name = self.inner.name(), "non-finite input, returning NaN");
            return Ok(vec![Complex::NAN; data.len()]);
        }
        let peak = peak_magnitude(data);
        if peak == 0.0 {
            return self.inner.compute(data);
        }
        let scaled = divide_all(data, peak);
        let result = self.inner.compute(&scaled)?;
        Ok(result.into_iter().map(|value| value.scale(peak)).collect())
    }

    fn name(&self) -> &str {
        self.inner.name()
    }

    fn size_requirement(&self) -> SizeRequirement {
        self.inner.size_requirement()
    }
}

/// Decorator dividing every output entry by the input length.
pub struct NormalizedInverse {
    inner: Arc<dyn Transform>,
}

impl NormalizedInverse {
    #[must_use]
    pub fn new(inner: Arc<dyn Transform>) -> Self {
        Self { inner }
    }
}

impl Transform for NormalizedInverse {
    fn compute(&self, data: &[Complex]) -> Result<Vec<Complex>, TransformError> {
        let result = self.inner.compute(data)?;
        #[allow(clippy::cast_precision_loss)]
        let len = data.len() as f64;
        Ok(result
            .into_iter()
            .map(|value| Complex::new(value.re / len, value.im / len))
            .collect())
    }

    fn name(&self) -> &str {
        self.inner.name()
    }

    fn size_requirement(&self) -> SizeRequirement {
        self.inner.size_requirement()
    }
}

pub(crate) fn all_finite(data: &[Complex]) -> bool {
    data.iter().all(|value| value.is_finite())
}

/// Largest real or imaginary component magnitude in `data`.
///
/// Finite for finite input, unlike `hypot`, which overflows near `f64::MAX`.
pub(crate) fn peak_magnitude(data: &[Complex]) -> f64 {
    data.iter()
        .map(|value| value.re.abs().max(value.im.abs()))
        .fold(0.0, f64::max)
}

/// Divide rather than multiply by a reciprocal, which overflows for subnormal peaks.
pub(crate) fn divide_all(data: &[Complex], divisor: f64) -> Vec<Complex> {
    data.iter()
        .map(|value| Complex::new(value.re / divisor, value.im / divisor))
        .collect()
}
