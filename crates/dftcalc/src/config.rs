//! Application configuration from CLI flags and environment.

use std::path::PathBuf;

use clap::Parser;
use dftcalc_core::Options;

use crate::output::OutputFormat;

/// dftcalc: discrete Fourier, cosine and sine transforms of any length.
#[derive(Parser, Debug)]
#[command(name = "dftcalc", version, about)]
pub struct AppConfig {
    /// Transform to apply: dft, idft, dct1..dct4 or dst1..dst4.
    #[arg(short, long, default_value = "dft", env = "DFTCALC_TRANSFORM")]
    pub transform: String,

    /// Read input values from a file (JSON array or whitespace-separated tokens).
    #[arg(short, long, value_name = "FILE")]
    pub input: Option<PathBuf>,

    /// Compute the cyclic convolution of the input with the sequence in FILE.
    #[arg(long, value_name = "FILE")]
    pub convolve_with: Option<PathBuf>,

    /// Output format.
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    /// Digits after the decimal point in text output (full precision if omitted).
    #[arg(short, long)]
    pub precision: Option<usize>,

    /// Skip the peak-magnitude scaling step.
    #[arg(long)]
    pub no_scale: bool,

    /// Divide IDFT output by the input length.
    #[arg(long)]
    pub normalize: bool,

    /// Reject inputs longer than this (0 = no extra limit).
    #[arg(long, default_value = "0", env = "DFTCALC_MAX_LEN")]
    pub max_len: usize,

    /// Verbose logging.
    #[arg(short, long)]
    pub verbose: bool,

    /// List the available transforms and exit.
    #[arg(long)]
    pub list: bool,

    /// Generate shell completion.
    #[arg(long, value_enum)]
    pub completion: Option<clap_complete::Shell>,

    /// Input values: `a`, `a+bi`, `a-bi`, `bi` or `re,im`. Read from stdin when
    /// neither values nor --input are given.
    #[arg(allow_hyphen_values = true)]
    pub values: Vec<String>,
}

impl AppConfig {
    /// Parse CLI arguments.
    #[must_use]
    pub fn parse() -> Self {
        <Self as Parser>::parse()
    }

    /// Registry options implied by the flags.
    #[must_use]
    pub fn options(&self) -> Options {
        Options {
            scale_for_stability: !self.no_scale,
            normalize_inverse: self.normalize,
            length_limit: self.max_len,
        }
        .normalize()
    }
}
