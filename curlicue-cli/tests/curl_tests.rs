// End-to-end conversions through the public entry point.

use curlicue_cli::{Contractions, FilterMode, OutputMode, curl};

fn entities(text: &str) -> String {
    curl(
        text,
        &Contractions::default(),
        OutputMode::Entities,
        FilterMode::Plain,
    )
}

fn glyphs(text: &str) -> String {
    curl(
        text,
        &Contractions::default(),
        OutputMode::Glyphs,
        FilterMode::Plain,
    )
}

#[test]
fn mixed_primes_and_contractions() {
    assert_eq!(
        entities("That's a 35'×10\" yacht!"),
        "That&apos;s a 35&prime;×10&Prime; yacht!"
    );
}

#[test]
fn archaic_contractions_stay_apostrophes() {
    assert_eq!(
        entities("'Twas and 'tis whate'er lay 'twixt dawn and dusk 'n River Styx."),
        "&apos;Twas and &apos;tis whate&apos;er lay &apos;twixt dawn and dusk \
         &apos;n River Styx."
    );
}

#[test]
fn glyph_mode_emits_unicode() {
    assert_eq!(glyphs("\"I am Sam\""), "\u{201c}I am Sam\u{201d}");
    assert_eq!(glyphs("That's it"), "That\u{2019}s it");
    assert_eq!(glyphs("2' 4\""), "2\u{2032} 4\u{2033}");
    assert_eq!(
        glyphs("\"'I'm trouble.'\""),
        "\u{201c}\u{2018}I\u{2019}m trouble.\u{2019}\u{201d}"
    );
}

#[test]
fn international_marks_round_trip() {
    // Chevrons and low quotes keep their glyph in glyph mode and take the
    // dedicated entity in entity mode.
    assert_eq!(glyphs("\u{ab}salut\u{bb}"), "\u{ab}salut\u{bb}");
    assert_eq!(entities("\u{ab}salut\u{bb}"), "&laquo;salut\u{bb}");
    assert_eq!(glyphs(",,Wort"), "\u{201e}Wort");
    assert_eq!(entities(",,Wort"), "&#8222;Wort");
}

#[test]
fn newlines_and_non_ascii_pass_through() {
    let text = "naïve — résumé\nsecond line\r\n\r\nthird ¶";
    assert_eq!(entities(text), text);
}

#[test]
fn paragraph_boundaries_reset_nothing_but_still_lex() {
    assert_eq!(
        entities("\"One\"\n\n\"Two\""),
        "&ldquo;One&rdquo;\n\n&ldquo;Two&rdquo;"
    );
}

#[test]
fn glyph_output_is_idempotent() {
    let once = glyphs("\"'I'm trouble.'\" said the 35' llama");
    assert_eq!(glyphs(&once), once);
}

#[test]
fn conversion_is_deterministic() {
    let text = "The boys' bikes 'cause trouble, \"they\" said.";
    assert_eq!(entities(text), entities(text));
    assert_eq!(
        serde_json::to_string(&curl(
            text,
            &Contractions::default(),
            OutputMode::Entities,
            FilterMode::Plain
        ))
        .unwrap(),
        serde_json::to_string(&entities(text)).unwrap()
    );
}

#[test]
fn empty_and_trivial_inputs() {
    assert_eq!(entities(""), "");
    assert_eq!(entities("no quotes here"), "no quotes here");
    assert_eq!(entities("'"), "'");
}
