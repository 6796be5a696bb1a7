//! Input length requirements and rejection reasons.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Why an input was rejected before reaching the engine.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, thiserror::Error)]
pub enum Rejection {
    #[error("length {len} is below the minimum of {min}")]
    TooShort { len: usize, min: usize },

    #[error("length {len} exceeds the maximum of {max}")]
    TooLong { len: usize, max: usize },

    #[error("operand lengths differ: {left} vs {right}")]
    LengthMismatch { left: usize, right: usize },
}

/// Inclusive range of accepted input lengths.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SizeRequirement {
    pub min: usize,
    pub max: usize,
}

impl SizeRequirement {
    #[must_use]
    pub const fn new(min: usize, max: usize) -> Self {
        Self { min, max }
    }

    pub fn check(&self, len: usize) -> Result<(), Rejection> {
        if len < self.min {
            return Err(Rejection::TooShort { len, min: self.min });
        }
        if len > self.max {
            return Err(Rejection::TooLong { len, max: self.max });
        }
        Ok(())
    }

    /// Check two operands that must also share a length.
    pub fn check_pair(&self, left: usize, right: usize) -> Result<(), Rejection> {
        if left != right {
            return Err(Rejection::LengthMismatch { left, right });
        }
        self.check(left)
    }

    /// Lower the maximum to `limit` if it is smaller.
    #[must_use]
    pub fn capped(self, limit: usize) -> Self {
        Self {
            min: self.min,
            max: self.max.min(limit),
        }
    }

    #[must_use]
    pub fn accepts(&self, len: usize) -> bool {
        self.check(len).is_ok()
    }
}

impl fmt::Display for SizeRequirement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}..={}", self.min, self.max)
    }
}
