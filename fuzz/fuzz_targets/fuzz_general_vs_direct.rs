#![no_main]

use libfuzzer_sys::fuzz_target;

use dftcalc_engine::direct::direct_transform;
use dftcalc_engine::{Complex, Direction, FourierEngine, TwiddleBasis};

fuzz_target!(|data: &[u8]| {
    if data.len() < 3 {
        return;
    }
    // First two bytes pick the length (1..=1024), the third the direction.
    let n = usize::from(u16::from_le_bytes([data[0], data[1]])) % 1024 + 1;
    let direction = if data[2] & 1 == 0 {
        Direction::Forward
    } else {
        Direction::Inverse
    };

    // Remaining bytes seed the values in [-1, 1), cycling when short.
    let bytes = &data[3..];
    let values: Vec<Complex> = (0..n)
        .map(|j| {
            let at = |k: usize| {
                if bytes.is_empty() {
                    0.0
                } else {
                    f64::from(bytes[k % bytes.len()]) / 128.0 - 1.0
                }
            };
            Complex::new(at(2 * j), at(2 * j + 1))
        })
        .collect();

    let engine = FourierEngine::global();
    let basis = TwiddleBasis::for_length(n, direction).unwrap();
    let fast = engine.compute(&values, &basis).unwrap();
    let slow = direct_transform(&values, &basis).unwrap();

    let tolerance = 1e-11 * n as f64;
    for (k, (a, b)) in fast.iter().zip(&slow).enumerate() {
        assert!((*a - *b).abs() <= tolerance, "N={n} k={k}: {a:?} vs {b:?}");
    }
});
