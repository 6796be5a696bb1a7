//! Thread-safe cache of roots of unity.
//!
//! A [`TwiddleBasis`] holds `exp(sign·i·2π·j/Ns)` for one supported length
//! `Ns` and hands out thinned views for every divisor of `Ns`. Views are
//! built at most once per length and shared by reference afterwards.

use std::collections::HashMap;
use std::f64::consts::TAU;
use std::sync::{Arc, OnceLock};

use parking_lot::RwLock;
use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use crate::complex::Complex;
use crate::constants::{MAX_SUPPORTED_SEQUENCE_SIZE, SHARED_BASIS_SIZE};
use crate::error::{check_length, DftError};

/// Transform direction, carried entirely by the sign of the basis angles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    Forward,
    Inverse,
}

impl Direction {
    /// Sign of the exponent: −1 forward, +1 inverse.
    #[must_use]
    pub fn sign(self) -> f64 {
        match self {
            Self::Forward => -1.0,
            Self::Inverse => 1.0,
        }
    }

    #[must_use]
    pub fn reverse(self) -> Self {
        match self {
            Self::Forward => Self::Inverse,
            Self::Inverse => Self::Forward,
        }
    }
}

/// Roots of unity for one length `L`, thinned from a supporting basis.
#[derive(Debug)]
pub struct BasisView {
    direction: Direction,
    values: Vec<Complex>,
}

impl BasisView {
    /// `exp(sign·i·2π·j/L)`.
    #[must_use]
    pub fn value_at(&self, j: usize) -> Complex {
        self.values[j]
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    #[must_use]
    pub fn direction(&self) -> Direction {
        self.direction
    }

    #[must_use]
    pub fn values(&self) -> &[Complex] {
        &self.values
    }
}

/// Roots of unity for a supported length and every divisor of it.
#[derive(Debug)]
pub struct TwiddleBasis {
    supported: usize,
    direction: Direction,
    full: Arc<BasisView>,
    views: RwLock<HashMap<usize, Arc<BasisView>>>,
}

static SHARED_FORWARD: OnceLock<Arc<TwiddleBasis>> = OnceLock::new();
static SHARED_INVERSE: OnceLock<Arc<TwiddleBasis>> = OnceLock::new();

impl TwiddleBasis {
    /// Compute all `supported` roots eagerly.
    pub fn new(supported: usize, direction: Direction) -> Result<Self, DftError> {
        check_length(supported, MAX_SUPPORTED_SEQUENCE_SIZE)?;
        debug!(supported, ?direction, "computing twiddle basis");
        let full = Arc::new(BasisView {
            direction,
            values: roots_of_unity(supported, direction),
        });
        let mut views = HashMap::new();
        views.insert(supported, Arc::clone(&full));
        Ok(Self {
            supported,
            direction,
            full,
            views: RwLock::new(views),
        })
    }

    /// A basis able to serve length `len`.
    ///
    /// Power-of-two lengths up to [`SHARED_BASIS_SIZE`] reuse one
    /// process-wide basis per direction; anything else gets a fresh basis of
    /// exactly `len` roots.
    pub fn for_length(len: usize, direction: Direction) -> Result<Arc<Self>, DftError> {
        check_length(len, MAX_SUPPORTED_SEQUENCE_SIZE)?;
        if len.is_power_of_two() && len <= SHARED_BASIS_SIZE {
            return Self::shared(direction);
        }
        Ok(Arc::new(Self::new(len, direction)?))
    }

    /// The process-wide basis of size [`SHARED_BASIS_SIZE`].
    pub fn shared(direction: Direction) -> Result<Arc<Self>, DftError> {
        let slot = match direction {
            Direction::Forward => &SHARED_FORWARD,
            Direction::Inverse => &SHARED_INVERSE,
        };
        if let Some(basis) = slot.get() {
            return Ok(Arc::clone(basis));
        }
        let basis = Arc::new(Self::new(SHARED_BASIS_SIZE, direction)?);
        Ok(Arc::clone(slot.get_or_init(|| basis)))
    }

    #[must_use]
    pub fn supported_len(&self) -> usize {
        self.supported
    }

    #[must_use]
    pub fn direction(&self) -> Direction {
        self.direction
    }

    #[must_use]
    pub fn supports(&self, len: usize) -> bool {
        len != 0 && self.supported % len == 0
    }

    /// Roots of unity for `len`, which must divide the supported length.
    pub fn view(&self, len: usize) -> Result<Arc<BasisView>, DftError> {
        if !self.supports(len) {
            return Err(DftError::UnsupportedBasisLength {
                requested: len,
                supported: self.supported,
            });
        }
        if let Some(view) = self.views.read().get(&len) {
            return Ok(Arc::clone(view));
        }
        let mut views = self.views.write();
        let view = views.entry(len).or_insert_with(|| {
            trace!(len, supported = self.supported, "thinning twiddle basis");
            let stride = self.supported / len;
            Arc::new(BasisView {
                direction: self.direction,
                values: self.full.values.iter().step_by(stride).copied().collect(),
            })
        });
        Ok(Arc::clone(view))
    }

    /// Number of views currently cached, the full one included.
    #[must_use]
    pub fn cached_views(&self) -> usize {
        self.views.read().len()
    }
}

/// `exp(sign·i·2π·j/n)` for `j` in `0..n`.
///
/// Each value is taken from the angle of its own index, folded into the first
/// half turn so that `j` and `n - j` come out exactly conjugate.
#[allow(clippy::cast_precision_loss)]
fn roots_of_unity(n: usize, direction: Direction) -> Vec<Complex> {
    let sign = direction.sign();
    let step = TAU / n as f64;
    (0..n)
        .map(|j| {
            if j == 0 {
                Complex::ONE
            } else if 2 * j <= n {
                Complex::cis(sign * step * j as f64)
            } else {
                Complex::cis(sign * step * (n - j) as f64).conj()
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_close(a: Complex, b: Complex, tol: f64) {
        assert!((a - b).abs() <= tol, "{a:?} != {b:?}");
    }

    #[test]
    fn values_match_definition() {
        for direction in [Direction::Forward, Direction::Inverse] {
            let basis = TwiddleBasis::new(12, direction).unwrap();
            for len in [1, 2, 3, 4, 6, 12] {
                let view = basis.view(len).unwrap();
                assert_eq!(view.len(), len);
                assert_eq!(view.direction(), direction);
                for j in 0..len {
                    #[allow(clippy::cast_precision_loss)]
                    let angle = direction.sign() * TAU * j as f64 / len as f64;
                    assert_close(view.value_at(j), Complex::cis(angle), 1e-14);
                }
            }
        }
    }

    #[test]
    fn view_is_cached_by_reference() {
        let basis = TwiddleBasis::new(30, Direction::Forward).unwrap();
        let first = basis.view(10).unwrap();
        let second = basis.view(10).unwrap();
        assert!(Arc::ptr_eq(&first, &second));
        assert_eq!(basis.cached_views(), 2);
    }

    #[test]
    fn full_view_is_prebuilt() {
        let basis = TwiddleBasis::new(7, Direction::Inverse).unwrap();
        assert_eq!(basis.cached_views(), 1);
        assert_eq!(basis.view(7).unwrap().value_at(0), Complex::ONE);
    }

    #[test]
    fn unsupported_length_is_rejected() {
        let basis = TwiddleBasis::new(12, Direction::Forward).unwrap();
        assert_eq!(
            basis.view(5).unwrap_err(),
            DftError::UnsupportedBasisLength {
                requested: 5,
                supported: 12
            }
        );
        assert!(basis.view(0).is_err());
        assert!(!basis.supports(24));
    }

    #[test]
    fn construction_limits() {
        assert_eq!(
            TwiddleBasis::new(0, Direction::Forward).unwrap_err(),
            DftError::EmptySequence
        );
        assert!(matches!(
            TwiddleBasis::new(MAX_SUPPORTED_SEQUENCE_SIZE + 1, Direction::Forward),
            Err(DftError::SequenceTooLarge { .. })
        ));
    }

    #[test]
    fn conjugate_symmetry_is_exact() {
        let basis = TwiddleBasis::new(10, Direction::Forward).unwrap();
        let view = basis.view(10).unwrap();
        for j in 1..5 {
            assert_eq!(view.value_at(10 - j), view.value_at(j).conj());
        }
    }

    #[test]
    fn small_powers_of_two_share_one_basis() {
        let a = TwiddleBasis::for_length(8, Direction::Forward).unwrap();
        let b = TwiddleBasis::for_length(256, Direction::Forward).unwrap();
        assert!(Arc::ptr_eq(&a, &b));
        assert_eq!(a.supported_len(), SHARED_BASIS_SIZE);

        let inverse = TwiddleBasis::for_length(8, Direction::Inverse).unwrap();
        assert!(!Arc::ptr_eq(&a, &inverse));
        assert_eq!(inverse.direction(), Direction::Inverse);
    }

    #[test]
    fn other_lengths_get_fresh_bases() {
        let a = TwiddleBasis::for_length(12, Direction::Forward).unwrap();
        let b = TwiddleBasis::for_length(12, Direction::Forward).unwrap();
        assert!(!Arc::ptr_eq(&a, &b));
        assert_eq!(a.supported_len(), 12);

        let large = TwiddleBasis::for_length(2 * SHARED_BASIS_SIZE, Direction::Forward).unwrap();
        assert_eq!(large.supported_len(), 2 * SHARED_BASIS_SIZE);
    }

    #[test]
    fn concurrent_views_are_identical() {
        use std::thread;

        let basis = Arc::new(TwiddleBasis::new(360, Direction::Forward).unwrap());
        let handles: Vec<_> = (0..8)
            .map(|_| {
                let basis = Arc::clone(&basis);
                thread::spawn(move || basis.view(45).unwrap())
            })
            .collect();
        let views: Vec<_> = handles.into_iter().map(|h| h.join().unwrap()).collect();
        for view in &views[1..] {
            assert!(Arc::ptr_eq(&views[0], view));
        }
        assert_eq!(basis.cached_views(), 2);
    }
}
