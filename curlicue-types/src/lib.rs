// curlicue-types/src/lib.rs

// Shared value types for the curlicue pipeline.

// Invariants:
// - A `Lexeme` is a half-open byte interval `[began, ended)` into the source
//   document; `began <= ended`, with equality reserved for synthesized
//   sentinels (SOT/EOL/EOP/EOT) and obliterated slots.
// - A `Token` is minted from exactly one `Lexeme` and is ordered strictly by
//   `began`; the only mutation it permits is ambiguous → definite.
// - International quotation marks keep their originating glyph on the lexeme
//   so they can round-trip through the replacer.

#![forbid(unsafe_code)]

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

/// International quotation mark glyphs recognized by the lexer, kept so the
/// replacer can re-encode the original character when exporting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum QuoteGlyph {
    /// `‘`
    SingleOpening,
    /// `’`
    SingleClosing,
    /// `“`
    DoubleOpening,
    /// `”`
    DoubleClosing,
    /// `„` (also synthesized from a `,,` run)
    DoubleLow,
    /// `«`
    DoubleChevronLeft,
    /// `»`
    DoubleChevronRight,
    /// `‹`
    SingleChevronLeft,
    /// `›`
    SingleChevronRight,
}

impl QuoteGlyph {
    /// Maps a source character onto its glyph, if it is a recognized
    /// international quotation mark.
    #[must_use]
    pub const fn from_char(c: char) -> Option<Self> {
        match c {
            '\u{2018}' => Some(Self::SingleOpening),
            '\u{2019}' => Some(Self::SingleClosing),
            '\u{201c}' => Some(Self::DoubleOpening),
            '\u{201d}' => Some(Self::DoubleClosing),
            '\u{201e}' => Some(Self::DoubleLow),
            '\u{ab}' => Some(Self::DoubleChevronLeft),
            '\u{bb}' => Some(Self::DoubleChevronRight),
            '\u{2039}' => Some(Self::SingleChevronLeft),
            '\u{203a}' => Some(Self::SingleChevronRight),
            _ => None,
        }
    }

    /// Returns the glyph as source text.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::SingleOpening => "\u{2018}",
            Self::SingleClosing => "\u{2019}",
            Self::DoubleOpening => "\u{201c}",
            Self::DoubleClosing => "\u{201d}",
            Self::DoubleLow => "\u{201e}",
            Self::DoubleChevronLeft => "\u{ab}",
            Self::DoubleChevronRight => "\u{bb}",
            Self::SingleChevronLeft => "\u{2039}",
            Self::SingleChevronRight => "\u{203a}",
        }
    }

    /// Returns the HTML entity for glyphs that have a dedicated one. Glyphs
    /// without an entry here fall back to the per-kind entity table.
    #[must_use]
    pub const fn entity(self) -> Option<&'static str> {
        match self {
            Self::DoubleLow => Some("&#8222;"),
            Self::DoubleChevronLeft => Some("&laquo;"),
            Self::DoubleChevronRight => Some("&raquo;"),
            Self::SingleChevronLeft => Some("&lsaquo;"),
            Self::SingleChevronRight => Some("&rsaquo;"),
            _ => None,
        }
    }
}

/// Concrete category of a scanned lexeme. Opening/closing quote variants
/// carry the exact originating glyph.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LexemeKind {
    Word,
    Number,
    Space,
    Period,
    Ellipsis,
    Punct,
    Hyphen,
    Dash,
    Equals,
    OpeningGroup,
    ClosingGroup,
    QuoteSingle,
    QuoteDouble,
    QuoteSingleOpening(QuoteGlyph),
    QuoteSingleClosing(QuoteGlyph),
    QuoteDoubleOpening(QuoteGlyph),
    QuoteDoubleClosing(QuoteGlyph),
    EscSingle,
    EscDouble,
    PrimeDouble,
    Eol,
    Eop,
    Sot,
    Eot,
    None,
}

impl LexemeKind {
    /// Returns the international glyph carried by quote-glyph variants.
    #[must_use]
    pub const fn glyph(self) -> Option<QuoteGlyph> {
        match self {
            Self::QuoteSingleOpening(g)
            | Self::QuoteSingleClosing(g)
            | Self::QuoteDoubleOpening(g)
            | Self::QuoteDoubleClosing(g) => Some(g),
            _ => None,
        }
    }

    /// Collapses the kind onto its matching class, dropping any glyph.
    #[must_use]
    pub const fn class(self) -> LexemeClass {
        match self {
            Self::Word => LexemeClass::Word,
            Self::Number => LexemeClass::Number,
            Self::Space => LexemeClass::Space,
            Self::Period => LexemeClass::Period,
            Self::Ellipsis => LexemeClass::Ellipsis,
            Self::Punct => LexemeClass::Punct,
            Self::Hyphen => LexemeClass::Hyphen,
            Self::Dash => LexemeClass::Dash,
            Self::Equals => LexemeClass::Equals,
            Self::OpeningGroup => LexemeClass::OpeningGroup,
            Self::ClosingGroup => LexemeClass::ClosingGroup,
            Self::QuoteSingle => LexemeClass::QuoteSingle,
            Self::QuoteDouble => LexemeClass::QuoteDouble,
            Self::QuoteSingleOpening(_) => LexemeClass::QuoteSingleOpening,
            Self::QuoteSingleClosing(_) => LexemeClass::QuoteSingleClosing,
            Self::QuoteDoubleOpening(_) => LexemeClass::QuoteDoubleOpening,
            Self::QuoteDoubleClosing(_) => LexemeClass::QuoteDoubleClosing,
            Self::EscSingle => LexemeClass::EscSingle,
            Self::EscDouble => LexemeClass::EscDouble,
            Self::PrimeDouble => LexemeClass::PrimeDouble,
            Self::Eol => LexemeClass::Eol,
            Self::Eop => LexemeClass::Eop,
            Self::Sot => LexemeClass::Sot,
            Self::Eot => LexemeClass::Eot,
            Self::None => LexemeClass::None,
        }
    }
}

/// Pattern alphabet for the classifier's rule table. `Ending` is a
/// meta-category matching EOL, EOP, and EOT; `Any` matches every lexeme
/// except an obliterated one; `None` matches only obliterated slots.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LexemeClass {
    Word,
    Number,
    Space,
    Period,
    Ellipsis,
    Punct,
    Hyphen,
    Dash,
    Equals,
    OpeningGroup,
    ClosingGroup,
    QuoteSingle,
    QuoteDouble,
    QuoteSingleOpening,
    QuoteSingleClosing,
    QuoteDoubleOpening,
    QuoteDoubleClosing,
    EscSingle,
    EscDouble,
    PrimeDouble,
    Eol,
    Eop,
    Sot,
    Eot,
    Ending,
    Any,
    None,
}

/// A half-open byte interval of the source document tagged with its kind.
///
/// Lexemes never own text; the classifier and resolver slice the document
/// by offset when a rule needs the underlying characters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Lexeme {
    kind: LexemeKind,
    began: usize,
    ended: usize,
}

impl Lexeme {
    /// Obliterated slot marker; matches only the explicit `None` class.
    pub const NONE: Self = Self {
        kind: LexemeKind::None,
        began: 0,
        ended: 0,
    };

    /// Start-of-text sentinel preceding every lexeme stream.
    pub const SOT: Self = Self {
        kind: LexemeKind::Sot,
        began: 0,
        ended: 0,
    };

    #[must_use]
    pub const fn new(kind: LexemeKind, began: usize, ended: usize) -> Self {
        assert!(began <= ended);
        Self { kind, began, ended }
    }

    #[must_use]
    pub const fn kind(&self) -> LexemeKind {
        self.kind
    }

    #[must_use]
    pub const fn began(&self) -> usize {
        self.began
    }

    #[must_use]
    pub const fn ended(&self) -> usize {
        self.ended
    }

    /// Answers whether this lexeme matches a single pattern class.
    ///
    /// An obliterated lexeme matches nothing but the explicit `None` class,
    /// which keeps compound classifier rules from re-consuming a quote that
    /// an earlier rule already claimed.
    #[must_use]
    pub fn is(&self, class: LexemeClass) -> bool {
        if self.kind == LexemeKind::None {
            return class == LexemeClass::None;
        }
        match class {
            LexemeClass::Any => true,
            LexemeClass::None => false,
            LexemeClass::Ending => matches!(
                self.kind,
                LexemeKind::Eol | LexemeKind::Eop | LexemeKind::Eot
            ),
            c => self.kind.class() == c,
        }
    }

    /// Answers whether this lexeme matches any class in the pattern.
    #[must_use]
    pub fn is_any(&self, classes: &[LexemeClass]) -> bool {
        classes.iter().any(|c| self.is(*c))
    }

    /// Slices the captured characters out of the source document.
    ///
    /// # Panics
    /// Panics when the span does not fall on character boundaries of `text`,
    /// which indicates the lexeme was produced for a different document.
    #[must_use]
    pub fn slice<'t>(&self, text: &'t str) -> &'t str {
        &text[self.began..self.ended]
    }
}

/// Classification assigned to a quotation mark by the pipeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TokenKind {
    OpeningSingle,
    OpeningDouble,
    ClosingSingle,
    ClosingDouble,
    Apostrophe,
    StraightSingle,
    StraightDouble,
    PrimeSingle,
    PrimeDouble,
    PrimeTriple,
    PrimeQuadruple,
    /// Straight single quote before a word of unclear contraction status.
    AmbiguousLeading,
    /// Straight single quote after a word of unclear contraction status.
    AmbiguousLagging,
    /// Quotation mark with no directional hint at all.
    Ambiguous,
}

impl TokenKind {
    /// Answers whether the kind still awaits resolution.
    #[must_use]
    pub const fn is_ambiguous(self) -> bool {
        matches!(
            self,
            Self::AmbiguousLeading | Self::AmbiguousLagging | Self::Ambiguous
        )
    }
}

/// A classified quotation mark: a kind plus the lexeme it was minted from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Token {
    kind: TokenKind,
    lexeme: Lexeme,
}

impl Token {
    #[must_use]
    pub const fn new(kind: TokenKind, lexeme: Lexeme) -> Self {
        Self { kind, lexeme }
    }

    #[must_use]
    pub const fn kind(&self) -> TokenKind {
        self.kind
    }

    #[must_use]
    pub const fn lexeme(&self) -> Lexeme {
        self.lexeme
    }

    #[must_use]
    pub const fn began(&self) -> usize {
        self.lexeme.began()
    }

    #[must_use]
    pub const fn ended(&self) -> usize {
        self.lexeme.ended()
    }

    #[must_use]
    pub fn is(&self, kind: TokenKind) -> bool {
        self.kind == kind
    }

    #[must_use]
    pub const fn is_ambiguous(&self) -> bool {
        self.kind.is_ambiguous()
    }

    /// Returns the international glyph of the originating lexeme, if any.
    #[must_use]
    pub const fn glyph(&self) -> Option<QuoteGlyph> {
        self.lexeme.kind().glyph()
    }

    /// Mutates an ambiguous token into its resolved form in place,
    /// preserving the document offsets.
    pub fn resolve(&mut self, kind: TokenKind) {
        debug_assert!(self.kind.is_ambiguous());
        debug_assert!(!kind.is_ambiguous());
        self.kind = kind;
    }
}

impl PartialOrd for Token {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Token {
    fn cmp(&self, other: &Self) -> Ordering {
        self.began().cmp(&other.began())
    }
}
