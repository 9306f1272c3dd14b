use curlicue_cli::pipeline::{PlainFilter, lex};
use curlicue_types::{Lexeme, LexemeKind, QuoteGlyph};

fn lexemes(text: &str) -> Vec<Lexeme> {
    let mut out = Vec::new();
    lex(text, &mut |lexeme| out.push(lexeme), &mut PlainFilter);
    out
}

/// Kinds between the SOT sentinel and the trailing EOL/EOP/EOT triple.
fn kinds(text: &str) -> Vec<LexemeKind> {
    let all = lexemes(text);
    assert_eq!(all.first().map(Lexeme::kind), Some(LexemeKind::Sot));
    let trailer = &all[all.len() - 3..];
    assert_eq!(trailer[0].kind(), LexemeKind::Eol);
    assert_eq!(trailer[1].kind(), LexemeKind::Eop);
    assert_eq!(trailer[2].kind(), LexemeKind::Eot);
    all[1..all.len() - 3].iter().map(Lexeme::kind).collect()
}

fn texts(text: &str) -> Vec<String> {
    let all = lexemes(text);
    all[1..all.len() - 3]
        .iter()
        .map(|l| l.slice(text).to_string())
        .collect()
}

#[test]
fn words_and_numbers_keep_their_text() {
    assert_eq!(texts("abc 123"), ["abc", " ", "123"]);
    assert_eq!(texts("-123 abc"), ["-123", " ", "abc"]);
}

#[test]
fn numbers_swallow_connectors() {
    use LexemeKind::*;
    assert_eq!(kinds(".123"), [Number]);
    assert_eq!(kinds("-123."), [Number, Period]);
    assert_eq!(kinds(" 123.123.123"), [Space, Number]);
    assert_eq!(kinds("123 123\""), [Number, Space, Number, QuoteDouble]);
    assert_eq!(kinds("-123,123.123"), [Number]);
    assert_eq!(kinds("...1,023..."), [Ellipsis, Number, Ellipsis]);
}

#[test]
fn words_absorb_digits_but_not_the_reverse() {
    use LexemeKind::*;
    assert_eq!(kinds("abc"), [Word]);
    assert_eq!(kinds("T1000"), [Word]);
    assert_eq!(kinds("abc..."), [Word, Ellipsis]);
    assert_eq!(kinds("-123abc"), [Number, Word]);
    assert_eq!(
        kinds("abc-o'-abc"),
        [Word, Hyphen, Word, QuoteSingle, Hyphen, Word]
    );
}

#[test]
fn punctuation_marks_split_by_run_length() {
    use LexemeKind::*;
    assert_eq!(kinds("!"), [Punct]);
    assert_eq!(kinds(";"), [Punct]);
    assert_eq!(kinds("."), [Period]);
    assert_eq!(kinds("-"), [Hyphen]);
    assert_eq!(kinds("--"), [Dash]);
    assert_eq!(kinds("---"), [Dash]);
    assert_eq!(kinds("..."), [Ellipsis]);
    assert_eq!(kinds(". . ."), [Ellipsis]);
    assert_eq!(kinds("(x)"), [OpeningGroup, Word, ClosingGroup]);
    assert_eq!(kinds("="), [Equals]);
}

#[test]
fn quotes_lex_as_quotes() {
    use LexemeKind::*;
    assert_eq!(kinds("'"), [QuoteSingle]);
    assert_eq!(kinds("\""), [QuoteDouble]);
    assert_eq!(
        kinds("3 o'clock"),
        [Number, Space, Word, QuoteSingle, Word]
    );
}

#[test]
fn escaped_quotes_span_both_characters() {
    use LexemeKind::*;
    assert_eq!(
        kinds("123\\'456\\\""),
        [Number, EscSingle, Number, EscDouble]
    );
    assert_eq!(texts("123\\'456\\\""), ["123", "\\'", "456", "\\\""]);
    // A backslash before anything else stays a lone punctuation mark.
    assert_eq!(kinds("\\n"), [Punct, Word]);
}

#[test]
fn newline_runs_collapse_to_eol_or_eop() {
    use LexemeKind::*;
    assert_eq!(kinds("\r"), [Eol]);
    assert_eq!(kinds("\n"), [Eol]);
    assert_eq!(kinds("\r\n"), [Eol]);
    assert_eq!(kinds("\r\n\r\n"), [Eop]);
    assert_eq!(kinds("\r\n\n\r"), [Eop]);
    assert_eq!(kinds("abc \r\nabc\n"), [Word, Space, Eol, Word, Eol]);
}

#[test]
fn international_quotes_carry_their_glyph() {
    let all = lexemes("\u{ab}x\u{bb}");
    assert_eq!(
        all[1].kind(),
        LexemeKind::QuoteDoubleOpening(QuoteGlyph::DoubleChevronLeft)
    );
    assert_eq!(
        all[3].kind(),
        LexemeKind::QuoteDoubleClosing(QuoteGlyph::DoubleChevronRight)
    );
}

#[test]
fn comma_run_becomes_low_opening_quote() {
    let all = lexemes(",,Wort");
    assert_eq!(
        all[1].kind(),
        LexemeKind::QuoteDoubleOpening(QuoteGlyph::DoubleLow)
    );
    assert_eq!(all[1].slice(",,Wort"), ",,");
    // A lone comma is ordinary punctuation.
    assert_eq!(kinds("a, b"), [
        LexemeKind::Word,
        LexemeKind::Punct,
        LexemeKind::Space,
        LexemeKind::Word
    ]);
}

#[test]
fn spans_index_the_source_exactly() {
    let text = "she's 35'";
    for lexeme in &lexemes(text)[1..6] {
        assert!(lexeme.began() < lexeme.ended());
        assert!(lexeme.ended() <= text.len());
    }
}
