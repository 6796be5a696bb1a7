//! Size limits and algorithm selection thresholds.

/// Maximum length accepted by the DFT/IDFT entry points.
pub const MAX_DATA_SIZE: usize = 1 << 28;

/// Maximum operand length for cyclic convolution.
pub const MAX_SEQUENCE_SIZE: usize = 1 << 28;

/// Maximum supported length of a twiddle basis.
pub const MAX_SUPPORTED_SEQUENCE_SIZE: usize = 1 << 30;

/// Leaf blocks shorter than this use direct summation instead of Rader.
pub const DIRECT_TRANSFORM_THRESHOLD: usize = 320;

/// Power-of-two transforms at or below this length are summed directly.
pub const POWER2_DIRECT_THRESHOLD: usize = 4;

/// Power-of-two lengths up to `2^SHARED_BASIS_MAX_EXPONENT` share one
/// process-wide basis per direction.
pub const SHARED_BASIS_MAX_EXPONENT: u32 = 10;

/// Size of the shared small basis.
pub const SHARED_BASIS_SIZE: usize = 1 << SHARED_BASIS_MAX_EXPONENT;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn limits_are_ordered() {
        assert!(MAX_DATA_SIZE <= MAX_SUPPORTED_SEQUENCE_SIZE);
        // Convolution pads to at most twice its input length.
        assert!(2 * MAX_SEQUENCE_SIZE <= MAX_SUPPORTED_SEQUENCE_SIZE);
        assert!(SHARED_BASIS_SIZE.is_power_of_two());
    }

    #[test]
    fn direct_threshold_covers_small_primes() {
        assert!(DIRECT_TRANSFORM_THRESHOLD >= 5);
    }
}
