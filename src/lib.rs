//! Shared fixtures for the workspace-level golden tests.

use std::path::Path;

use serde::Deserialize;

/// A complex value stored as `[re, im]`.
pub type Pair = [f64; 2];

#[derive(Debug, Deserialize)]
pub struct GoldenData {
    pub description: String,
    pub cases: Vec<GoldenCase>,
}

/// One reference computation.
#[derive(Debug, Deserialize)]
pub struct GoldenCase {
    pub name: String,
    /// Registry name, or `convolution` for a cyclic convolution with `kernel`.
    pub transform: String,
    pub input: Vec<Pair>,
    #[serde(default)]
    pub kernel: Option<Vec<Pair>>,
    pub expected: Vec<Pair>,
}

/// Load a golden file from `tests/testdata`.
pub fn load_golden(file: &str) -> Result<GoldenData, Box<dyn std::error::Error>> {
    let path = Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("testdata")
        .join(file);
    let text = std::fs::read_to_string(path)?;
    Ok(serde_json::from_str(&text)?)
}
