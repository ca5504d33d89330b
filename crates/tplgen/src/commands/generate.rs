//! Generate command - expand one template through the formatter

use anyhow::{Context, Result};
use colored::Colorize;
use log::debug;
use tplgen_core::{Destination, RunConfig, RunOptions, formatter_for, generate};

/// Validate options, pick the formatter, and run the generation
///
/// Defines are validated and the formatter is resolved before the
/// destination is opened, so a bad invocation never truncates it.
pub fn run(options: RunOptions, verbose: bool) -> Result<()> {
    let config = RunConfig::from_options(options)?;
    debug!("Run configuration: {:?}", config);

    let formatter = formatter_for(&config.formatter)?;

    generate(&config, formatter.as_ref())
        .with_context(|| format!("Failed to generate from {}", config.template.display()))?;

    if verbose {
        let target = match &config.destination {
            Destination::Stdout => "standard output".to_string(),
            Destination::File(path) => path.display().to_string(),
        };
        // stdout may be the generated file itself; report on stderr.
        eprintln!("{} Generated {}", "✓".green().bold(), target);
    }

    Ok(())
}
