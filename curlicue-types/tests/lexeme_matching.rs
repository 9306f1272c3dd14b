use curlicue_types::{Lexeme, LexemeClass, LexemeKind, QuoteGlyph, Token, TokenKind};

#[test]
fn ending_matches_every_terminator() {
    for kind in [LexemeKind::Eol, LexemeKind::Eop, LexemeKind::Eot] {
        let lexeme = Lexeme::new(kind, 3, 3);
        assert!(lexeme.is(LexemeClass::Ending));
        assert!(lexeme.is(LexemeClass::Any));
    }
    assert!(!Lexeme::new(LexemeKind::Space, 0, 1).is(LexemeClass::Ending));
}

#[test]
fn obliterated_slot_matches_only_none() {
    assert!(Lexeme::NONE.is(LexemeClass::None));
    assert!(!Lexeme::NONE.is(LexemeClass::Any));
    assert!(!Lexeme::NONE.is(LexemeClass::Ending));
    assert!(!Lexeme::NONE.is(LexemeClass::QuoteSingle));
}

#[test]
fn glyph_variants_match_their_class_regardless_of_glyph() {
    let low = Lexeme::new(
        LexemeKind::QuoteDoubleOpening(QuoteGlyph::DoubleLow),
        0,
        1,
    );
    let chevron = Lexeme::new(
        LexemeKind::QuoteDoubleOpening(QuoteGlyph::DoubleChevronLeft),
        0,
        2,
    );
    assert!(low.is(LexemeClass::QuoteDoubleOpening));
    assert!(chevron.is(LexemeClass::QuoteDoubleOpening));
    assert!(low.is_any(&[LexemeClass::Word, LexemeClass::QuoteDoubleOpening]));
}

#[test]
fn tokens_order_by_starting_offset() {
    let early = Token::new(
        TokenKind::OpeningDouble,
        Lexeme::new(LexemeKind::QuoteDouble, 0, 1),
    );
    let late = Token::new(
        TokenKind::ClosingDouble,
        Lexeme::new(LexemeKind::QuoteDouble, 9, 10),
    );
    let mut tokens = vec![late, early];
    tokens.sort();
    assert_eq!(tokens[0].began(), 0);
    assert_eq!(tokens[1].began(), 9);
}

#[test]
fn ambiguous_token_resolves_in_place() {
    let mut token = Token::new(
        TokenKind::AmbiguousLagging,
        Lexeme::new(LexemeKind::QuoteSingle, 4, 5),
    );
    assert!(token.is_ambiguous());
    token.resolve(TokenKind::Apostrophe);
    assert!(token.is(TokenKind::Apostrophe));
    assert_eq!(token.began(), 4);
    assert_eq!(token.ended(), 5);
}

#[test]
fn tokens_serialize_deterministically() {
    let token = Token::new(
        TokenKind::Ambiguous,
        Lexeme::new(LexemeKind::QuoteSingle, 7, 8),
    );
    let first = serde_json::to_string(&token).unwrap();
    let second = serde_json::to_string(&token).unwrap();
    assert_eq!(first, second);
    let back: Token = serde_json::from_str(&first).unwrap();
    assert_eq!(back, token);
}
