// curlicue-cli/src/pipeline/lexer.rs

// Turns prose into words, numbers, punctuation, spaces, and quote glyphs.

// Role:
// - Single forward pass over the document, one lexeme per decision. The
//   branch order follows the probability of each character class in
//   English prose: letters, space, newlines, numbers, then the rest.
// - Every lexeme carries a half-open byte span; no substrings are
//   allocated here. Downstream stages slice the document on demand.

// Invariants:
// - The stream always starts with SOT and ends with EOL, EOP, EOT so the
//   classifier's four-slot window never needs boundary checks.
// - Spans of consecutive lexemes never overlap; filtered (skipped) regions
//   are the only gaps.

use curlicue_types::{Lexeme, LexemeKind, QuoteGlyph};

use crate::pipeline::cursor::{Cursor, DONE};
use crate::pipeline::filter::SkipFilter;

/// Lexes the document, feeding every lexeme to `sink`.
///
/// The filter is consulted before each lexeme and may advance the cursor
/// past regions that must not be touched; it is re-applied in a loop
/// because two skippable regions may abut.
pub fn lex(text: &str, sink: &mut dyn FnMut(Lexeme), filter: &mut dyn SkipFilter) {
    let mut i = Cursor::new(text);

    // A quotation mark is classified as the second of four window slots,
    // so at least one lexeme must precede it.
    sink(Lexeme::SOT);

    while i.has_next() {
        while filter.test(&mut i) {}

        let began = i.index();
        let curr = i.current();
        let mut kind = LexemeKind::Punct;

        if is_letter(curr) {
            // T1000 is one word, not a word and a number.
            i.skip(|_, c| is_letter(c) || is_digit(c));
            kind = LexemeKind::Word;
        } else if curr == ' ' {
            i.skip(|_, c| c == ' ');
            kind = LexemeKind::Space;
        } else if curr == '\r' || curr == '\n' {
            let mut cr = usize::from(curr == '\r');
            let mut lf = usize::from(curr == '\n');

            // Swallow all consecutive CR (legacy Mac), CRLF (Windows),
            // and/or LF (Unix).
            i.skip(|_, c| {
                cr += usize::from(c == '\r');
                lf += usize::from(c == '\n');
                c == '\r' || c == '\n'
            });

            kind = if cr + lf == 1 || (cr == 1 && lf == 1) {
                LexemeKind::Eol
            } else {
                LexemeKind::Eop
            };
        } else if curr.is_whitespace() {
            i.skip(|_, c| c.is_whitespace());
            kind = LexemeKind::Space;
        } else if is_digit(curr) || (is_numeric(curr) && is_digit(i.peek())) {
            // Consume the whole numeric run so the main loop cannot switch
            // back to word lexemes mid-number (e.g., -2,000.2^2).
            i.skip(|cur, c| is_digit(c) || (is_numeric(c) && is_digit(cur.peek())));
            kind = LexemeKind::Number;
        } else if curr == '.' {
            i.skip(|cur, c| c == '.' || (c == ' ' && cur.peek() == '.'));
            kind = if i.index() == began {
                LexemeKind::Period
            } else {
                LexemeKind::Ellipsis
            };
        } else if curr == '"' {
            kind = LexemeKind::QuoteDouble;
        } else if curr == '\'' {
            kind = LexemeKind::QuoteSingle;
        } else if curr == '-' && i.peek() != '-' {
            kind = LexemeKind::Hyphen;
        } else if is_dash(curr) {
            i.skip(|_, c| is_dash(c));
            kind = LexemeKind::Dash;
        } else if matches!(curr, '(' | '{' | '[') {
            kind = LexemeKind::OpeningGroup;
        } else if matches!(curr, ')' | '}' | ']') {
            kind = LexemeKind::ClosingGroup;
        } else if let Some(glyph) = QuoteGlyph::from_char(curr) {
            kind = classify_glyph(glyph);
        } else if curr == '\\' {
            let next = i.advance();

            if next == '\'' {
                kind = LexemeKind::EscSingle;
            } else if next == '"' {
                kind = LexemeKind::EscDouble;
            } else {
                // Not an escaped quote; emit the backslash alone and let
                // the escaped character lex normally.
                i.prev();
            }
        } else if curr == '=' {
            kind = LexemeKind::Equals;
        } else if curr == ',' && i.peek() == ',' {
            i.skip(|_, c| c == ',');
            kind = LexemeKind::QuoteDoubleOpening(QuoteGlyph::DoubleLow);
        } else if curr == DONE {
            // Either a filter consumed the rest of the document, or the
            // document itself contains the U+FFFF noncharacter; step over
            // it so the loop always makes progress.
            i.next();
            continue;
        }

        sink(Lexeme::new(kind, began, i.after_current()));
        i.next();
    }

    // Simulated line and paragraph endings let the classifier match
    // lexemes at the very end of the document without extra conditions.
    let at = i.index();
    sink(Lexeme::new(LexemeKind::Eol, at, at));
    sink(Lexeme::new(LexemeKind::Eop, at, at));
    sink(Lexeme::new(LexemeKind::Eot, at, at));
}

const fn classify_glyph(glyph: QuoteGlyph) -> LexemeKind {
    match glyph {
        QuoteGlyph::SingleOpening | QuoteGlyph::SingleChevronLeft => {
            LexemeKind::QuoteSingleOpening(glyph)
        }
        QuoteGlyph::SingleClosing | QuoteGlyph::SingleChevronRight => {
            LexemeKind::QuoteSingleClosing(glyph)
        }
        QuoteGlyph::DoubleOpening
        | QuoteGlyph::DoubleLow
        | QuoteGlyph::DoubleChevronLeft => LexemeKind::QuoteDoubleOpening(glyph),
        QuoteGlyph::DoubleClosing | QuoteGlyph::DoubleChevronRight => {
            LexemeKind::QuoteDoubleClosing(glyph)
        }
    }
}

/// Letters plus `_` and `*`, which plain-text formats use to emphasize a
/// word mid-sentence.
fn is_letter(c: char) -> bool {
    c.is_alphabetic() || c == '_' || c == '*'
}

fn is_digit(c: char) -> bool {
    c.is_ascii_digit() || "¼½¾⅐⅑⅒⅓⅔⅕⅖⅗⅘⅙⅚⅛⅜⅝⅞".contains(c)
}

/// Characters that continue a number when followed by a digit, so that
/// `-2,000.2^2` lexes as a single number.
const fn is_numeric(c: char) -> bool {
    matches!(c, '.' | ',' | '-' | '+' | '^' | '⅟' | '⁄')
}

/// En- and em-dash family. Must be checked after ruling out a lone hyphen.
const fn is_dash(c: char) -> bool {
    matches!(c, '-' | '–' | '—' | '―')
}
