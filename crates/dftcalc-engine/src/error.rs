//! Error type shared by every engine component.

/// Errors raised by the transform engine.
///
/// All of them are argument or state rejections detected before any
/// computation starts; a failed call leaves every cache untouched.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DftError {
    /// The sequence has no elements.
    #[error("sequence must contain at least one element")]
    EmptySequence,

    /// The sequence is longer than the component accepts.
    #[error("sequence length {len} exceeds maximum {max}")]
    SequenceTooLarge { len: usize, max: usize },

    /// Two operands that must share a length do not.
    #[error("operand lengths differ: {left} vs {right}")]
    LengthMismatch { left: usize, right: usize },

    /// A basis was asked for a length that does not divide its supported size.
    #[error("basis of length {supported} does not support length {requested}")]
    UnsupportedBasisLength { requested: usize, supported: usize },

    /// A power-of-two-only component received another length.
    #[error("length {0} is not a power of two")]
    NotPowerOfTwo(usize),

    /// A factorization of 1 was asked to give up another factor.
    #[error("factorization is fully separated, no factors left")]
    FullyPeeled,

    /// The primitive-root search was given a modulus below 3 or an even one.
    #[error("modulus {0} must be an odd prime of at least 3")]
    InvalidModulus(u32),

    /// No candidate generated the multiplicative group (the modulus was composite).
    #[error("no primitive root exists modulo {0}")]
    NoPrimitiveRoot(u32),
}

/// Reject empty sequences and sequences longer than `max`.
pub(crate) fn check_length(len: usize, max: usize) -> Result<(), DftError> {
    if len == 0 {
        return Err(DftError::EmptySequence);
    }
    if len > max {
        return Err(DftError::SequenceTooLarge { len, max });
    }
    Ok(())
}
