use curlicue_cli::pipeline::{PlainFilter, QuoteClassifier, Resolver};
use curlicue_cli::{Contractions, FilterMode, OutputMode, Token, curl};
use proptest::prelude::*;

/// Runs the classifier and resolver the way `Curler` does, returning the
/// token sequence exactly as the replacer would receive it.
fn resolved_tokens(text: &str) -> Vec<Token> {
    let contractions = Contractions::default();
    let mut resolver = Resolver::new();
    {
        let mut sink = |token: Token| resolver.accept(token);
        QuoteClassifier::analyze(text, &contractions, &mut sink, &mut PlainFilter);
    }
    resolver.resolve()
}

/// Drops every character a glyph-mode replacement can produce or consume,
/// leaving only the bytes the replacer must never touch.
fn strip_quote_vocabulary(text: &str) -> String {
    text.chars()
        .filter(|c| {
            !matches!(
                c,
                '\'' | '"'
                    | '\u{2018}'
                    | '\u{2019}'
                    | '\u{201c}'
                    | '\u{201d}'
                    | '\u{2032}'
                    | '\u{2033}'
            )
        })
        .collect()
}

proptest! {
    #[test]
    fn conversion_never_panics(input in ".*") {
        let contractions = Contractions::default();
        let _ = curl(&input, &contractions, OutputMode::Entities, FilterMode::Plain);
        let _ = curl(&input, &contractions, OutputMode::Glyphs, FilterMode::Xml);
    }

    #[test]
    fn offset_invariance_preserves_non_quote_spans(
        input in "[A-Za-z0-9 '\".;:!?()\n-]{0,60}",
    ) {
        // Quote-bearing input: everything outside the classified quote
        // spans must survive byte-for-byte, so stripping the quote
        // vocabulary from both sides must yield identical text.
        let out = curl(
            &input,
            &Contractions::default(),
            OutputMode::Glyphs,
            FilterMode::Plain,
        );
        prop_assert_eq!(strip_quote_vocabulary(&out), strip_quote_vocabulary(&input));
    }

    #[test]
    fn tokens_reach_the_replacer_in_document_order(input in ".*") {
        let tokens = resolved_tokens(&input);
        for pair in tokens.windows(2) {
            prop_assert!(
                pair[0].began() <= pair[1].began(),
                "token at {} delivered after token at {}",
                pair[0].began(),
                pair[1].began(),
            );
        }
    }

    #[test]
    fn conversion_is_deterministic(input in ".*") {
        let contractions = Contractions::default();
        let first = curl(&input, &contractions, OutputMode::Entities, FilterMode::Plain);
        let second = curl(&input, &contractions, OutputMode::Entities, FilterMode::Plain);
        prop_assert_eq!(first, second);
    }

    #[test]
    fn glyph_output_is_idempotent_once_residue_free(input in "[A-Za-z '\"]{0,40}") {
        let contractions = Contractions::default();
        let once = curl(&input, &contractions, OutputMode::Glyphs, FilterMode::Plain);
        if !once.contains('\'') && !once.contains('"') {
            let twice = curl(&once, &contractions, OutputMode::Glyphs, FilterMode::Plain);
            prop_assert_eq!(twice, once);
        }
    }

    #[test]
    fn xml_tags_survive_conversion(body in "[a-z ']{0,30}") {
        let doc = format!("<p>{body}</p>");
        let out = curl(
            &doc,
            &Contractions::default(),
            OutputMode::Entities,
            FilterMode::Xml,
        );
        prop_assert!(out.starts_with("<p>"));
        prop_assert!(out.ends_with("</p>"));
    }
}
