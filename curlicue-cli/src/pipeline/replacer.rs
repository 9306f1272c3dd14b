// curlicue-cli/src/pipeline/replacer.rs

// Positional in-place rewriter. Receives resolved tokens in document order
// and splices each replacement into a copy of the source, tracking the
// cumulative length delta so later spans land where they should.

// Ambiguous tokens are skipped entirely: the original straight quote stays
// in the output as the signal that the mark could not be resolved.

use curlicue_types::{QuoteGlyph, Token, TokenKind};

/// Wire-level replacement vocabulary.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputMode {
    /// HTML entities (`&lsquo;` and friends); straight quotes stay literal.
    Entities,
    /// Unicode curly equivalents.
    Glyphs,
}

/// Stateful closure over `(output buffer, cumulative offset)`.
pub struct Replacer {
    output: String,
    offset: isize,
    mode: OutputMode,
}

impl Replacer {
    #[must_use]
    pub fn new(text: &str, mode: OutputMode) -> Self {
        Self {
            output: text.to_string(),
            offset: 0,
            mode,
        }
    }

    /// Splices the token's replacement over its span. Tokens must arrive in
    /// non-decreasing `began` order; a span driven out of the buffer means
    /// tokens came out of order or from another document, which is a
    /// programmer error.
    pub fn apply(&mut self, token: &Token) {
        let Some(replacement) = replacement_for(token, self.mode) else {
            return;
        };

        let began = checked_offset(token.began(), self.offset);
        let ended = checked_offset(token.ended(), self.offset);
        self.output.replace_range(began..ended, replacement);

        let span = token.ended() - token.began();
        self.offset += replacement.len() as isize - span as isize;
    }

    #[must_use]
    pub fn finish(self) -> String {
        self.output
    }
}

fn checked_offset(index: usize, offset: isize) -> usize {
    let Some(shifted) = index.checked_add_signed(offset) else {
        unreachable!("replacement span fell outside the output buffer");
    };
    shifted
}

/// Chooses the replacement text, or `None` for tokens that must be left
/// untouched. International marks round-trip: entity mode consults the
/// i18n entity table first, glyph mode reproduces the original glyph.
fn replacement_for(token: &Token, mode: OutputMode) -> Option<&'static str> {
    if token.kind().is_ambiguous() {
        return None;
    }

    match mode {
        OutputMode::Entities => token
            .glyph()
            .and_then(QuoteGlyph::entity)
            .or_else(|| entity_for(token.kind())),
        OutputMode::Glyphs => match token.glyph() {
            Some(glyph) => Some(glyph.as_str()),
            None => glyph_for(token.kind()),
        },
    }
}

const fn entity_for(kind: TokenKind) -> Option<&'static str> {
    match kind {
        TokenKind::OpeningSingle => Some("&lsquo;"),
        TokenKind::ClosingSingle => Some("&rsquo;"),
        TokenKind::OpeningDouble => Some("&ldquo;"),
        TokenKind::ClosingDouble => Some("&rdquo;"),
        TokenKind::Apostrophe => Some("&apos;"),
        TokenKind::StraightSingle => Some("'"),
        TokenKind::StraightDouble => Some("\""),
        TokenKind::PrimeSingle => Some("&prime;"),
        TokenKind::PrimeDouble => Some("&Prime;"),
        TokenKind::PrimeTriple => Some("&tprime;"),
        TokenKind::PrimeQuadruple => Some("&qprime;"),
        TokenKind::AmbiguousLeading | TokenKind::AmbiguousLagging | TokenKind::Ambiguous => None,
    }
}

const fn glyph_for(kind: TokenKind) -> Option<&'static str> {
    match kind {
        TokenKind::OpeningSingle => Some("\u{2018}"),
        TokenKind::ClosingSingle | TokenKind::Apostrophe => Some("\u{2019}"),
        TokenKind::OpeningDouble => Some("\u{201c}"),
        TokenKind::ClosingDouble => Some("\u{201d}"),
        TokenKind::StraightSingle => Some("'"),
        TokenKind::StraightDouble => Some("\""),
        TokenKind::PrimeSingle => Some("\u{2032}"),
        TokenKind::PrimeDouble => Some("\u{2033}"),
        TokenKind::PrimeTriple => Some("\u{2034}"),
        TokenKind::PrimeQuadruple => Some("\u{2057}"),
        TokenKind::AmbiguousLeading | TokenKind::AmbiguousLagging | TokenKind::Ambiguous => None,
    }
}
