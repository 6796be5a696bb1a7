//! Per-transform size limits and process exit codes.

use dftcalc_engine::constants::MAX_DATA_SIZE;

/// Longest DFT/IDFT input.
pub const MAX_FOURIER_LEN: usize = MAX_DATA_SIZE;

/// Longest cyclic convolution operand.
pub const MAX_CONVOLUTION_LEN: usize = dftcalc_engine::constants::MAX_SEQUENCE_SIZE;

/// Longest DCT-1 input: its even extension has `2(N − 1)` points.
pub const MAX_DCT1_LEN: usize = MAX_DATA_SIZE / 2 + 1;

/// Longest DST-1 input: its odd extension has `2(N + 1)` points.
pub const MAX_DST1_LEN: usize = MAX_DATA_SIZE / 2 - 1;

/// Longest type-2/3 input: embedded in `4N` points.
pub const MAX_TYPE23_LEN: usize = MAX_DATA_SIZE / 4;

/// Longest type-4 input: embedded in `8N` points.
pub const MAX_TYPE4_LEN: usize = MAX_DATA_SIZE / 8;

/// Exit codes for the command-line front end.
pub mod exit_codes {
    /// Successful execution.
    pub const SUCCESS: i32 = 0;
    /// Generic error.
    pub const ERROR_GENERIC: i32 = 1;
    /// Invalid configuration or unparsable input.
    pub const ERROR_CONFIG: i32 = 4;
    /// Input length rejected by the transform.
    pub const ERROR_REJECTED: i32 = 5;
}
