//! Result formatting.

use std::io::{self, Write};

use clap::ValueEnum;
use dftcalc_engine::Complex;

/// How results are written to stdout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// One `re im` line per entry.
    Text,
    /// A JSON array of `{"re": .., "im": ..}` objects. NaN is written as `null`.
    Json,
}

/// Format one real component.
///
/// With a precision, values that round to zero print as `0`, never `-0`.
#[must_use]
pub fn format_real(value: f64, precision: Option<usize>) -> String {
    match precision {
        None => value.to_string(),
        Some(digits) => {
            let text = format!("{value:.digits$}");
            match text.strip_prefix('-') {
                Some(rest) if rest.bytes().all(|b| b == b'0' || b == b'.') => rest.to_string(),
                _ => text,
            }
        }
    }
}

/// Render `values` in the requested format, newline-terminated.
pub fn render(
    values: &[Complex],
    format: OutputFormat,
    precision: Option<usize>,
) -> serde_json::Result<String> {
    match format {
        OutputFormat::Text => Ok(values
            .iter()
            .map(|v| {
                format!(
                    "{} {}\n",
                    format_real(v.re, precision),
                    format_real(v.im, precision)
                )
            })
            .collect()),
        OutputFormat::Json => {
            let mut text = serde_json::to_string_pretty(values)?;
            text.push('\n');
            Ok(text)
        }
    }
}

/// Write rendered values to `out`.
pub fn write_values(
    out: &mut dyn Write,
    values: &[Complex],
    format: OutputFormat,
    precision: Option<usize>,
) -> io::Result<()> {
    let text = render(values, format, precision).map_err(io::Error::other)?;
    out.write_all(text.as_bytes())?;
    out.flush()
}
