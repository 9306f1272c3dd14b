// curlicue-cli/src/pipeline/mod.rs
//
// Unified cursor → lexeme → token → resolution → replacement pipeline.

// Invariants:
// - The lexer covers the document left to right; skip filters are the only
//   source of gaps between lexeme spans.
// - The classifier sees every lexeme exactly once through the four-slot
//   window; compound rules obliterate consumed slots.
// - Tokens reach the replacer sorted by `began`, ambiguous survivors
//   included; the replacer skips those, preserving the original bytes.
// - One `Curler` may convert many documents sequentially; a conversion
//   owns all of its mutable state, so the type is re-entrant but not
//   thread-safe for concurrent calls on shared state.

pub mod classifier;
pub mod cursor;
pub mod filter;
pub mod lexer;
pub mod replacer;
pub mod resolver;

pub use classifier::QuoteClassifier;
pub use cursor::Cursor;
pub use filter::{PlainFilter, SkipFilter, XmlFilter};
pub use lexer::lex;
pub use replacer::{OutputMode, Replacer};
pub use resolver::Resolver;

use std::time::Instant;

use curlicue_types::Token;
use tracing::{info, instrument};

use crate::contractions::Contractions;

/// Selects the preprocessor applied while scanning for quotation marks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FilterMode {
    /// Curl all quotation marks.
    Plain,
    /// Suppress curling within XML tags and untouchable elements.
    Xml,
}

impl FilterMode {
    fn filter(self) -> Box<dyn SkipFilter> {
        match self {
            Self::Plain => Box::new(PlainFilter),
            Self::Xml => Box::new(XmlFilter),
        }
    }
}

/// Converts straight quotes to curly quotes and primes throughout a
/// document. Construct once and reuse across documents.
pub struct Curler {
    contractions: Contractions,
    output: OutputMode,
    filter: FilterMode,
}

impl Curler {
    #[must_use]
    pub fn new(contractions: Contractions, output: OutputMode, filter: FilterMode) -> Self {
        Self {
            contractions,
            output,
            filter,
        }
    }

    /// Converts as many straight quotes as can be resolved; unresolved
    /// marks pass through unchanged.
    #[must_use]
    pub fn convert(&self, text: &str) -> String {
        self.convert_annotated(text).0
    }

    /// Converts the document and also returns the tokens that stayed
    /// ambiguous, in document order, for caller-side reporting.
    #[must_use]
    #[instrument(skip_all, fields(stage = "curl"))]
    pub fn convert_annotated(&self, text: &str) -> (String, Vec<Token>) {
        let start = Instant::now();

        let tokens = self.resolve(text);
        let mut replacer = Replacer::new(text, self.output);
        let mut ambiguous = Vec::new();

        for token in &tokens {
            if token.is_ambiguous() {
                ambiguous.push(*token);
            }
            replacer.apply(token);
        }

        info!(
            elapsed_ms = %start.elapsed().as_millis(),
            tokens = tokens.len(),
            ambiguous = ambiguous.len(),
            "done"
        );

        (replacer.finish(), ambiguous)
    }

    /// Returns the quotation marks that cannot be resolved, in document
    /// order.
    #[must_use]
    pub fn ambiguities(&self, text: &str) -> Vec<Token> {
        self.convert_annotated(text).1
    }

    fn resolve(&self, text: &str) -> Vec<Token> {
        let mut resolver = Resolver::new();
        let mut filter = self.filter.filter();

        {
            let mut sink = |token: Token| resolver.accept(token);
            QuoteClassifier::analyze(text, &self.contractions, &mut sink, filter.as_mut());
        }

        resolver.resolve()
    }
}
