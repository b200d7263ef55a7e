// src/prompt.rs
use std::io::{BufRead, Write};
use tracing::debug;

use crate::{breeds::BreedCatalog, error::PromptError};

pub const PROMPT: &str = "Please enter a dog breed: ";
pub const NOT_FOUND: &str = "Dog breed not found in the data. Please try again and make sure about the spelling the breed name.";

/// Ask for a breed until the answer is in `catalog`, then return the
/// canonical name. There is no attempt limit; only end of input stops it.
pub fn resolve_breed<R, W>(
    catalog: &BreedCatalog,
    input: &mut R,
    output: &mut W,
) -> Result<String, PromptError>
where
    R: BufRead,
    W: Write,
{
    let mut line = String::new();
    loop {
        write!(output, "{PROMPT}")?;
        output.flush()?;

        line.clear();
        if input.read_line(&mut line)? == 0 {
            return Err(PromptError::InputClosed);
        }

        if let Some(breed) = catalog.resolve(&line) {
            return Ok(breed.to_string());
        }

        debug!(input = line.trim(), "unknown breed");
        writeln!(output, "{NOT_FOUND}")?;
    }
}
