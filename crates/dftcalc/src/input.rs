//! Parsing of input sequences from arguments, files and stdin.

use std::io::Read;
use std::path::{Path, PathBuf};

use dftcalc_engine::Complex;
use serde::Deserialize;

/// Errors raised while reading input values.
#[derive(Debug, thiserror::Error)]
pub enum InputError {
    #[error("invalid value {0:?}: expected a, a+bi, a-bi, bi or re,im")]
    InvalidValue(String),

    #[error("cannot read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed JSON in {}: {source}", path.display())]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// One entry of a JSON input array.
#[derive(Deserialize)]
#[serde(untagged)]
enum JsonValue {
    Real(f64),
    Pair([f64; 2]),
    Object {
        re: f64,
        #[serde(default)]
        im: f64,
    },
}

impl From<JsonValue> for Complex {
    fn from(value: JsonValue) -> Self {
        match value {
            JsonValue::Real(re) => Complex::new(re, 0.0),
            JsonValue::Pair([re, im]) | JsonValue::Object { re, im } => Complex::new(re, im),
        }
    }
}

/// Parse one value token.
pub fn parse_complex(token: &str) -> Result<Complex, InputError> {
    let invalid = || InputError::InvalidValue(token.to_string());
    let text = token.trim();
    if text.is_empty() {
        return Err(invalid());
    }

    if let Some((re, im)) = text.split_once(',') {
        let re = parse_real(re).ok_or_else(invalid)?;
        let im = parse_real(im).ok_or_else(invalid)?;
        return Ok(Complex::new(re, im));
    }

    let Some(body) = text.strip_suffix(['i', 'j']) else {
        return parse_real(text).map(Complex::from).ok_or_else(invalid);
    };

    // Split `a±b` at the last sign that is not part of an exponent.
    let bytes = body.as_bytes();
    let split = (1..bytes.len())
        .rev()
        .find(|&i| matches!(bytes[i], b'+' | b'-') && !matches!(bytes[i - 1], b'e' | b'E'));
    let (re, im) = match split {
        Some(at) => (parse_real(&body[..at]).ok_or_else(invalid)?, &body[at..]),
        None => (0.0, body),
    };
    let im = match im {
        "" | "+" => 1.0,
        "-" => -1.0,
        other => parse_real(other).ok_or_else(invalid)?,
    };
    Ok(Complex::new(re, im))
}

fn parse_real(text: &str) -> Option<f64> {
    text.trim().parse().ok()
}

/// Parse whitespace-separated tokens, or a JSON array when the text starts with `[`.
pub fn parse_text(text: &str, origin: &Path) -> Result<Vec<Complex>, InputError> {
    if text.trim_start().starts_with('[') {
        let values: Vec<JsonValue> =
            serde_json::from_str(text).map_err(|source| InputError::Json {
                path: origin.to_path_buf(),
                source,
            })?;
        return Ok(values.into_iter().map(Complex::from).collect());
    }
    text.split_whitespace().map(parse_complex).collect()
}

pub fn read_file(path: &Path) -> Result<Vec<Complex>, InputError> {
    let text = std::fs::read_to_string(path).map_err(|source| InputError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    parse_text(&text, path)
}

pub fn read_stdin() -> Result<Vec<Complex>, InputError> {
    let origin = Path::new("<stdin>");
    let mut text = String::new();
    std::io::stdin()
        .read_to_string(&mut text)
        .map_err(|source| InputError::Io {
            path: origin.to_path_buf(),
            source,
        })?;
    parse_text(&text, origin)
}

/// Resolve the primary sequence: `--input`, then positional values, then stdin.
pub fn load(input: Option<&Path>, values: &[String]) -> Result<Vec<Complex>, InputError> {
    if let Some(path) = input {
        return read_file(path);
    }
    if values.is_empty() {
        return read_stdin();
    }
    values.iter().map(|token| parse_complex(token)).collect()
}
