// src/app.rs
use anyhow::{Context, Result};
use std::io::{BufRead, Write};
use tracing::info;

use crate::{
    analyze::{analyze_breed, write_report},
    breeds::BreedCatalog,
    config::Config,
    load::load_registrations,
    prompt::resolve_breed,
};

/// Banner, load, catalog, prompt, analyze, print.
pub fn run<R, W>(config: &Config, input: &mut R, output: &mut W) -> Result<()>
where
    R: BufRead,
    W: Write,
{
    writeln!(output, "{}", config.banner)?;

    let table = load_registrations(&config.data_path)
        .with_context(|| format!("loading {}", config.data_path.display()))?;

    let catalog = BreedCatalog::from_table(&table);
    info!(breeds = catalog.len(), "catalog built");

    let breed = resolve_breed(&catalog, input, output).context("reading breed name")?;
    info!(%breed, "breed selected");

    let report = analyze_breed(&table, &breed, &config.tracked_years)
        .with_context(|| format!("analyzing '{breed}'"))?;
    write_report(&report, output)?;
    Ok(())
}
