// curlicue-cli/src/lib.rs

#![forbid(unsafe_code)]

pub mod commands;
pub mod contractions;
pub mod pipeline;
pub mod trace;

use anyhow::Result;
use clap::Parser;

pub use contractions::Contractions;
pub use curlicue_types::{Lexeme, LexemeKind, QuoteGlyph, Token, TokenKind};
pub use pipeline::{Curler, FilterMode, OutputMode};

/// Converts straight quotes in `text` to their typographic equivalents.
///
/// The single library entry point: lexes the document, classifies every
/// quotation mark, resolves ambiguity through the nesting tree, and splices
/// the replacements in place. Marks that stay ambiguous are left as
/// straight quotes in the output.
#[must_use]
pub fn curl(
    text: &str,
    contractions: &Contractions,
    output: OutputMode,
    filter: FilterMode,
) -> String {
    Curler::new(contractions.clone(), output, filter).convert(text)
}

#[derive(clap::Parser)]
#[command(
    name = "curlicue",
    version,
    about = "Converts straight quotes to curly quotes."
)]
struct Cli {
    /// Encode quotation marks using HTML entities
    #[arg(short = 'e', long)]
    entities: bool,

    /// Convert quotation marks within XML or HTML documents
    #[arg(short = 'x', long = "xml", visible_alias = "html", alias = "xhtml")]
    xml: bool,

    /// List all ambiguous and unambiguous contractions
    #[arg(short = 'l', long)]
    list: bool,

    /// Contraction to treat as unambiguous at its start (e.g., twas)
    #[arg(long = "unamb-began", alias = "ub", value_name = "word")]
    unamb_began: Vec<String>,

    /// Contraction to treat as unambiguous at its end (e.g., frien, thinkin)
    #[arg(long = "unamb-ended", alias = "ue", value_name = "word")]
    unamb_ended: Vec<String>,

    /// Contraction to treat as ambiguous at its start (e.g., sup, kay)
    #[arg(long = "amb-began", alias = "ab", value_name = "word")]
    amb_began: Vec<String>,

    /// Contraction to treat as ambiguous at its end (e.g., gi, o)
    #[arg(long = "amb-ended", alias = "ae", value_name = "word")]
    amb_ended: Vec<String>,
}

/// Runs the CLI with an arbitrary iterator of arguments.
///
/// # Errors
/// Returns an error when stdin or stdout fail; argument errors exit via
/// clap's own handling.
pub fn run_with_args<I, S>(args: I) -> Result<()>
where
    I: IntoIterator<Item = S>,
    S: Into<std::ffi::OsString> + Clone,
{
    let cli = Cli::parse_from(args);

    let contractions = Contractions::builder()
        .with_began_unambiguous(cli.unamb_began)
        .with_ended_unambiguous(cli.unamb_ended)
        .with_began_ambiguous(cli.amb_began)
        .with_ended_ambiguous(cli.amb_ended)
        .build();

    if cli.list {
        commands::list_mode(&contractions);
        return Ok(());
    }

    let output = if cli.entities {
        OutputMode::Entities
    } else {
        OutputMode::Glyphs
    };
    let filter = if cli.xml {
        FilterMode::Xml
    } else {
        FilterMode::Plain
    };

    commands::convert_mode(contractions, output, filter)
}
