//! Application entry point and dispatch.

use std::io::{self, Write};
use std::time::Instant;

use anyhow::{Context, Result};
use tracing::debug;

use dftcalc_core::registry::{DefaultFactory, TransformFactory};
use dftcalc_engine::Complex;

use crate::completion::generate_completion;
use crate::config::AppConfig;
use crate::input;
use crate::output::write_values;

/// Run the application.
pub fn run(config: &AppConfig) -> Result<()> {
    if let Some(shell) = config.completion {
        let mut cmd = <AppConfig as clap::CommandFactory>::command();
        generate_completion(&mut cmd, shell, &mut io::stdout());
        return Ok(());
    }

    let factory = DefaultFactory::with_options(config.options());

    if config.list {
        return list_transforms(&factory, &mut io::stdout().lock());
    }

    let data = input::load(config.input.as_deref(), &config.values)?;
    let result = compute(config, &factory, &data)?;
    write_values(&mut io::stdout().lock(), &result, config.format, config.precision)
        .context("failed to write output")?;
    Ok(())
}

fn compute(config: &AppConfig, factory: &DefaultFactory, data: &[Complex]) -> Result<Vec<Complex>> {
    let start = Instant::now();
    let result = if let Some(path) = &config.convolve_with {
        let other = input::read_file(path)?;
        factory.convolution().convolve(data, &other)?
    } else {
        factory.get(&config.transform)?.compute(data)?
    };
    debug!(
        len = data.len(),
        elapsed = ?start.elapsed(),
        "computed result"
    );
    Ok(result)
}

/// Print each transform name with the input lengths it accepts.
fn list_transforms(factory: &DefaultFactory, out: &mut dyn Write) -> Result<()> {
    for name in factory.available() {
        let transform = factory.get(name)?;
        writeln!(
            out,
            "{name:<6} {:<6} {}",
            transform.name(),
            transform.size_requirement()
        )?;
    }
    Ok(())
}
