//! Transform factory and registry.

use std::collections::HashMap;
use std::sync::Arc;

use parking_lot::RwLock;
use tracing::debug;

use crate::convolution::{Convolver, CyclicConvolution, ScaledConvolution};
use crate::fourier::Fourier;
use crate::options::Options;
use crate::transform::{
    CheckedTransform, CoreTransform, NormalizedInverse, ScaledTransform, Transform, TransformError,
};
use crate::trigonometric::{TrigKind, TrigonometricTransform};

/// Names accepted by [`TransformFactory::get`].
pub const TRANSFORM_NAMES: [&str; 10] = [
    "dft", "idft", "dct1", "dct2", "dct3", "dct4", "dst1", "dst2", "dst3", "dst4",
];

/// Factory trait for looking up transforms.
pub trait TransformFactory: Send + Sync {
    /// Get or create a transform by name.
    fn get(&self, name: &str) -> Result<Arc<dyn Transform>, TransformError>;

    /// List all available transform names.
    fn available(&self) -> Vec<&str>;

    /// The cyclic convolution matching this factory's options.
    fn convolution(&self) -> Arc<dyn Convolver>;
}

/// Default factory with lazy creation and cache.
pub struct DefaultFactory {
    options: Options,
    cache: RwLock<HashMap<String, Arc<dyn Transform>>>,
}

impl DefaultFactory {
    /// Factory using [`Options::default`].
    #[must_use]
    pub fn new() -> Self {
        Self::with_options(Options::default())
    }

    #[must_use]
    pub fn with_options(options: Options) -> Self {
        Self {
            options: options.normalize(),
            cache: RwLock::new(HashMap::new()),
        }
    }

    #[must_use]
    pub fn options(&self) -> &Options {
        &self.options
    }

    fn core(name: &str) -> Option<Arc<dyn CoreTransform>> {
        let core: Arc<dyn CoreTransform> = match name {
            "dft" => Arc::new(Fourier::forward()),
            "idft" => Arc::new(Fourier::inverse()),
            "dct1" => Arc::new(TrigonometricTransform::new(TrigKind::Dct1)),
            "dct2" => Arc::new(TrigonometricTransform::new(TrigKind::Dct2)),
            "dct3" => Arc::new(TrigonometricTransform::new(TrigKind::Dct3)),
            "dct4" => Arc::new(TrigonometricTransform::new(TrigKind::Dct4)),
            "dst1" => Arc::new(TrigonometricTransform::new(TrigKind::Dst1)),
            "dst2" => Arc::new(TrigonometricTransform::new(TrigKind::Dst2)),
            "dst3" => Arc::new(TrigonometricTransform::new(TrigKind::Dst3)),
            "dst4" => Arc::new(TrigonometricTransform::new(TrigKind::Dst4)),
            _ => return None,
        };
        Some(core)
    }

    fn create_transform(&self, name: &str) -> Result<Arc<dyn Transform>, TransformError> {
        let core = Self::core(name).ok_or_else(|| TransformError::UnknownTransform(name.to_string()))?;
        let mut transform: Arc<dyn Transform> =
            Arc::new(CheckedTransform::with_limit(core, self.options.length_limit));
        if self.options.scale_for_stability {
            transform = Arc::new(ScaledTransform::new(transform));
        }
        if self.options.normalize_inverse && name == "idft" {
            transform = Arc::new(NormalizedInverse::new(transform));
        }
        debug!(name, options = ?self.options, "created transform");
        Ok(transform)
    }
}

impl Default for DefaultFactory {
    fn default() -> Self {
        Self::new()
    }
}

impl TransformFactory for DefaultFactory {
    fn get(&self, name: &str) -> Result<Arc<dyn Transform>, TransformError> {
        if let Some(transform) = self.cache.read().get(name) {
            return Ok(Arc::clone(transform));
        }

        let created = self.create_transform(name)?;
        // A concurrent caller may have won the race; hand out whichever is cached.
        let mut cache = self.cache.write();
        let entry = cache.entry(name.to_string()).or_insert(created);
        Ok(Arc::clone(entry))
    }

    fn available(&self) -> Vec<&str> {
        TRANSFORM_NAMES.to_vec()
    }

    fn convolution(&self) -> Arc<dyn Convolver> {
        if self.options.scale_for_stability {
            Arc::new(ScaledConvolution::with_limit(self.options.length_limit))
        } else {
            Arc::new(CyclicConvolution::with_limit(self.options.length_limit))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validation::{Rejection, SizeRequirement};
    use dftcalc_engine::Complex;

    #[test]
    fn factory_creates_every_listed_transform() {
        let factory = DefaultFactory::new();
        for name in factory.available() {
            let transform = factory.get(name).unwrap();
            assert!(!transform.name().is_empty(), "{name}");
        }
        assert_eq!(factory.get("dft").unwrap().name(), "DFT");
        assert_eq!(factory.get("dst3").unwrap().name(), "DST-3");
    }

    #[test]
    fn factory_caches() {
        let factory = DefaultFactory::new();
        let first = factory.get("dct2").unwrap();
        let second = factory.get("dct2").unwrap();
        assert!(Arc::ptr_eq(&first, &second));
    }

    #[test]
    fn factory_unknown_name() {
        let factory = DefaultFactory::new();
        assert_eq!(
            factory.get("fft").err(),
            Some(TransformError::UnknownTransform("fft".to_string()))
        );
    }

    #[test]
    fn normalized_inverse_only_for_idft() {
        let factory = DefaultFactory::with_options(Options {
            normalize_inverse: true,
            ..Default::default()
        });
        let data = [Complex::ONE, Complex::ZERO, Complex::ZERO, Complex::ZERO];
        let spectrum = factory.get("dft").unwrap().compute(&data).unwrap();
        assert_eq!(spectrum.len(), 4);
        assert!(spectrum.iter().all(|v| (*v - Complex::ONE).abs() < 1e-12));
        let back = factory.get("idft").unwrap().compute(&spectrum).unwrap();
        for (a, b) in back.iter().zip(&data) {
            assert!((*a - *b).abs() < 1e-12);
        }
    }

    #[test]
    fn unscaled_factory_propagates_nan_through_engine() {
        let factory = DefaultFactory::with_options(Options {
            scale_for_stability: false,
            ..Default::default()
        });
        let got = factory
            .get("dft")
            .unwrap()
            .compute(&[Complex::NAN, Complex::ONE])
            .unwrap();
        assert!(got[0].re.is_nan());
    }

    #[test]
    fn scaled_dft_of_components_near_max_stays_finite() {
        let factory = DefaultFactory::new();
        let data = [Complex::new(1.5e308, 1.5e308), Complex::ZERO];
        let got = factory.get("dft").unwrap().compute(&data).unwrap();
        for value in &got {
            assert!(value.is_finite(), "{got:?}");
            assert!((value.re - 1.5e308).abs() <= 1e295);
            assert!((value.im - 1.5e308).abs() <= 1e295);
        }
    }

    #[test]
    fn length_limit_reaches_transforms_and_convolution() {
        let factory = DefaultFactory::with_options(Options {
            length_limit: 8,
            ..Default::default()
        });
        let dft = factory.get("dft").unwrap();
        assert_eq!(dft.size_requirement(), SizeRequirement::new(1, 8));
        assert_eq!(
            dft.compute(&[Complex::ONE; 9]).err(),
            Some(TransformError::Rejected(Rejection::TooLong { len: 9, max: 8 }))
        );
        assert_eq!(
            factory.convolution().size_requirement(),
            SizeRequirement::new(1, 8)
        );
    }

    #[test]
    fn concurrent_gets_share_one_instance() {
        let factory = Arc::new(DefaultFactory::new());
        let handles: Vec<_> = (0..8)
            .map(|_| {
                let factory = Arc::clone(&factory);
                std::thread::spawn(move || factory.get("dct4").unwrap())
            })
            .collect();
        let transforms: Vec<_> = handles.into_iter().map(|h| h.join().unwrap()).collect();
        let cached = factory.get("dct4").unwrap();
        assert!(transforms.iter().all(|t| Arc::ptr_eq(t, &cached)));
    }
}
