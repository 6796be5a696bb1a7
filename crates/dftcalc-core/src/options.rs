//! Options consumed by the transform registry.

use serde::{Deserialize, Serialize};

use crate::constants::MAX_FOURIER_LEN;

/// How the registry assembles transforms.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Options {
    /// Wrap transforms and convolution in the peak-magnitude scaling decorator.
    pub scale_for_stability: bool,
    /// Divide IDFT output by the input length.
    pub normalize_inverse: bool,
    /// Additional cap on input length (0 = each transform's own maximum).
    pub length_limit: usize,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            scale_for_stability: true,
            normalize_inverse: false,
            length_limit: MAX_FOURIER_LEN,
        }
    }
}

impl Options {
    /// Normalize options, replacing a zero or oversized length limit.
    #[must_use]
    pub fn normalize(mut self) -> Self {
        if self.length_limit == 0 || self.length_limit > MAX_FOURIER_LEN {
            self.length_limit = MAX_FOURIER_LEN;
        }
        self
    }
}
