// curlicue-cli/src/commands.rs

use std::io::{Read, Write};

use anyhow::{Context, Result};
use tracing::warn;

use crate::contractions::Contractions;
use crate::pipeline::{Curler, FilterMode, OutputMode};

/// Reads the whole document from stdin, converts it, and writes the result
/// to stdout. Unresolved quotation marks are counted on stderr.
///
/// # Errors
/// Returns an error when stdin is not valid UTF-8 or stdout cannot be
/// written.
pub fn convert_mode(
    contractions: Contractions,
    output: OutputMode,
    filter: FilterMode,
) -> Result<()> {
    let mut text = String::new();
    std::io::stdin()
        .read_to_string(&mut text)
        .context("reading stdin")?;

    let curler = Curler::new(contractions, output, filter);
    let (converted, ambiguous) = curler.convert_annotated(&text);

    if !ambiguous.is_empty() {
        warn!(
            count = ambiguous.len(),
            "ambiguous quotation marks left unchanged"
        );
    }

    std::io::stdout()
        .write_all(converted.as_bytes())
        .context("writing stdout")?;

    Ok(())
}

/// Prints the four contraction sets and exits.
pub fn list_mode(contractions: &Contractions) {
    println!("{contractions}");
}
