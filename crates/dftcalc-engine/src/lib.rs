//! # dftcalc-engine
//!
//! Discrete Fourier transforms of arbitrary length: mixed-radix recursion,
//! Rader's algorithm for large prime factors, radix-4 power-of-two
//! transforms, and cyclic convolution built on them.

pub mod complex;
pub mod constants;
pub mod convolution;
pub mod direct;
pub mod engine;
pub mod error;
pub mod general;
pub mod number_theory;
pub mod power2;
pub mod prime;
pub mod twiddle;

#[cfg(test)]
mod test_support;

// Re-exports
pub use complex::Complex;
pub use engine::FourierEngine;
pub use error::DftError;
pub use twiddle::{BasisView, Direction, TwiddleBasis};
