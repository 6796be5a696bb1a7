//! Discrete cosine and sine transforms, types 1 through 4.
//!
//! Each transform embeds its input in a symmetric (cosine) or antisymmetric
//! (sine) sequence, takes one forward DFT of that sequence, and reads the
//! result off a subset of bins. The definitions are unnormalized:
//!
//! | kind  | `Y_k` |
//! |-------|-------|
//! | DCT-1 | `x_0 + (−1)^k x_{N−1} + 2 Σ_{j=1}^{N−2} x_j cos(πjk/(N−1))` |
//! | DCT-2 | `2 Σ x_j cos(π(j+½)k/N)` |
//! | DCT-3 | `x_0 + 2 Σ_{j=1}^{N−1} x_j cos(πj(k+½)/N)` |
//! | DCT-4 | `2 Σ x_j cos(π(j+½)(k+½)/N)` |
//! | DST-1 | `2 Σ x_j sin(π(j+1)(k+1)/(N+1))` |
//! | DST-2 | `2 Σ x_j sin(π(j+½)(k+1)/N)` |
//! | DST-3 | `(−1)^k x_{N−1} + 2 Σ_{j=0}^{N−2} x_j sin(π(j+1)(k+½)/N)` |
//! | DST-4 | `2 Σ x_j sin(π(j+½)(k+½)/N)` |
//!
//! The transforms are linear over complex input: real and imaginary parts are
//! transformed together in the same DFT.

use std::fmt;

use dftcalc_engine::{Complex, DftError, FourierEngine};
use serde::{Deserialize, Serialize};

use crate::constants::{MAX_DCT1_LEN, MAX_DST1_LEN, MAX_TYPE23_LEN, MAX_TYPE4_LEN};
use crate::transform::CoreTransform;
use crate::validation::SizeRequirement;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TrigKind {
    Dct1,
    Dct2,
    Dct3,
    Dct4,
    Dst1,
    Dst2,
    Dst3,
    Dst4,
}

impl TrigKind {
    pub const ALL: [Self; 8] = [
        Self::Dct1,
        Self::Dct2,
        Self::Dct3,
        Self::Dct4,
        Self::Dst1,
        Self::Dst2,
        Self::Dst3,
        Self::Dst4,
    ];

    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::Dct1 => "DCT-1",
            Self::Dct2 => "DCT-2",
            Self::Dct3 => "DCT-3",
            Self::Dct4 => "DCT-4",
            Self::Dst1 => "DST-1",
            Self::Dst2 => "DST-2",
            Self::Dst3 => "DST-3",
            Self::Dst4 => "DST-4",
        }
    }

    #[must_use]
    pub fn size_requirement(self) -> SizeRequirement {
        match self {
            Self::Dct1 => SizeRequirement::new(2, MAX_DCT1_LEN),
            Self::Dst1 => SizeRequirement::new(1, MAX_DST1_LEN),
            Self::Dct2 | Self::Dct3 | Self::Dst2 | Self::Dst3 => {
                SizeRequirement::new(1, MAX_TYPE23_LEN)
            }
            Self::Dct4 | Self::Dst4 => SizeRequirement::new(1, MAX_TYPE4_LEN),
        }
    }

    fn is_sine(self) -> bool {
        matches!(self, Self::Dst1 | Self::Dst2 | Self::Dst3 | Self::Dst4)
    }
}

impl fmt::Display for TrigKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A cosine or sine transform computed through the engine.
#[derive(Debug, Clone, Copy)]
pub struct TrigonometricTransform {
    kind: TrigKind,
}

impl TrigonometricTransform {
    #[must_use]
    pub fn new(kind: TrigKind) -> Self {
        Self { kind }
    }

    #[must_use]
    pub fn kind(&self) -> TrigKind {
        self.kind
    }

    /// The (anti)symmetric sequence whose DFT carries the result.
    fn embed(&self, x: &[Complex]) -> Vec<Complex> {
        let n = x.len();
        match self.kind {
            TrigKind::Dct1 => {
                let m = 2 * (n - 1);
                let mut z = vec![Complex::ZERO; m];
                z[..n].copy_from_slice(x);
                for j in 1..n - 1 {
                    z[m - j] = x[j];
                }
                z
            }
            TrigKind::Dst1 => {
                let m = 2 * (n + 1);
                let mut z = vec![Complex::ZERO; m];
                for (j, &value) in x.iter().enumerate() {
                    z[j + 1] = value;
                    z[m - j - 1] = -value;
                }
                z
            }
            TrigKind::Dct2 | TrigKind::Dst2 => odd_samples(x, 4 * n, self.kind.is_sine()),
            TrigKind::Dct4 | TrigKind::Dst4 => odd_samples(x, 8 * n, self.kind.is_sine()),
            TrigKind::Dct3 => {
                let m = 4 * n;
                let mut z = vec![Complex::ZERO; m];
                z[0] = x[0];
                for j in 1..n {
                    z[j] = x[j];
                    z[m - j] = x[j];
                }
                z
            }
            TrigKind::Dst3 => {
                let m = 4 * n;
                let mut z = vec![Complex::ZERO; m];
                for j in 0..n - 1 {
                    z[j + 1] = x[j];
                    z[m - j - 1] = -x[j];
                }
                z[n] = x[n - 1];
                z
            }
        }
    }

    /// Output bin `k` inside the spectrum of the embedding.
    fn bin(&self, k: usize) -> usize {
        match self.kind {
            TrigKind::Dct1 | TrigKind::Dct2 => k,
            TrigKind::Dst1 | TrigKind::Dst2 => k + 1,
            TrigKind::Dct3 | TrigKind::Dct4 | TrigKind::Dst3 | TrigKind::Dst4 => 2 * k + 1,
        }
    }
}

/// `z[2j+1] = x[j]` mirrored to `z[m−2j−1]`, negated for the sine family.
fn odd_samples(x: &[Complex], m: usize, antisymmetric: bool) -> Vec<Complex> {
    let mut z = vec![Complex::ZERO; m];
    for (j, &value) in x.iter().enumerate() {
        z[2 * j + 1] = value;
        z[m - 2 * j - 1] = if antisymmetric { -value } else { value };
    }
    z
}

impl CoreTransform for TrigonometricTransform {
    fn compute_core(&self, data: &[Complex]) -> Result<Vec<Complex>, DftError> {
        let n = data.len();
        if n < self.kind.size_requirement().min {
            return Err(DftError::EmptySequence);
        }
        let spectrum = FourierEngine::global().forward(&self.embed(data))?;
        // Sine embeddings come out as −i·Y.
        let sine = self.kind.is_sine();
        Ok((0..n)
            .map(|k| {
                let value = spectrum[self.bin(k)];
                if sine {
                    value.mul_i()
                } else {
                    value
                }
            })
            .collect())
    }

    fn name(&self) -> &'static str {
        self.kind.name()
    }

    fn size_requirement(&self) -> SizeRequirement {
        self.kind.size_requirement()
    }
}
