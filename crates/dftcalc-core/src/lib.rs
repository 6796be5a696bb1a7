//! # dftcalc-core
//!
//! Transform layer over `dftcalc-engine`: length validation, the scaling and
//! normalization decorators, DFT/IDFT and DCT/DST adapters, cyclic
//! convolution, and a name-keyed registry.

pub mod constants;
pub mod convolution;
pub mod fourier;
pub mod options;
pub mod registry;
pub mod transform;
pub mod trigonometric;
pub mod validation;

// Re-exports
pub use constants::exit_codes;
pub use convolution::{Convolver, CyclicConvolution, ScaledConvolution};
pub use dftcalc_engine::Complex;
pub use fourier::Fourier;
pub use options::Options;
pub use registry::{DefaultFactory, TransformFactory, TRANSFORM_NAMES};
pub use transform::{
    CheckedTransform, CoreTransform, NormalizedInverse, ScaledTransform, Transform, TransformError,
};
pub use trigonometric::{TrigKind, TrigonometricTransform};
pub use validation::{Rejection, SizeRequirement};
