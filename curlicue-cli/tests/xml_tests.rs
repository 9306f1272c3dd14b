// XML filter behavior: markup is never mutated, untouchable elements keep
// their straight quotes, and malformed input degrades to plain lexing.

use curlicue_cli::pipeline::{XmlFilter, lex};
use curlicue_cli::{Contractions, FilterMode, OutputMode, curl};
use curlicue_types::{Lexeme, LexemeKind};

fn xml_entities(text: &str) -> String {
    curl(
        text,
        &Contractions::default(),
        OutputMode::Entities,
        FilterMode::Xml,
    )
}

#[test]
fn prose_inside_elements_still_curls() {
    assert_eq!(xml_entities("<em>'twas</em>"), "<em>&apos;twas</em>");
    assert_eq!(
        xml_entities("<bold>'twas</bold> redeemed for the <em>cat</em>'s eye"),
        "<bold>&apos;twas</bold> redeemed for the <em>cat</em>&apos;s eye"
    );
}

#[test]
fn untouchable_elements_keep_straight_quotes() {
    assert_eq!(
        xml_entities("<strong>'Twas</strong> <kbd>'</kbd> in <tex>Knuth's TeX</tex>"),
        "<strong>&apos;Twas</strong> <kbd>'</kbd> in <tex>Knuth's TeX</tex>"
    );
}

#[test]
fn attribute_values_pass_through_verbatim() {
    assert_eq!(
        xml_entities("<a href=\"https://x.org\" title=\"X's Homepage\">X11's bomb</a>"),
        "<a href=\"https://x.org\" title=\"X's Homepage\">X11&apos;s bomb</a>"
    );
}

#[test]
fn markup_between_quotes_does_not_break_pairing() {
    assert_eq!(
        xml_entities("''<em>Twas</em> happening!'"),
        "&lsquo;&apos;<em>Twas</em> happening!&rsquo;"
    );
}

#[test]
fn tags_are_invisible_to_the_lexer() {
    let text = "A <em>world's</em> aflame <pre><code>ch = '\\''</code></pre>.";
    let mut kinds = Vec::new();
    lex(text, &mut |l: Lexeme| kinds.push(l.kind()), &mut XmlFilter);

    use LexemeKind::*;
    assert_eq!(
        kinds,
        [
            Sot, Word, Space, Word, QuoteSingle, Word, Space, Word, Space,
            Period, Eol, Eop, Eot
        ]
    );
}

#[test]
fn markup_bytes_are_identical_between_input_and_output() {
    let text = "<ul>\n<li>\"quoted\"</li>\n<li>plain</li>\n</ul>";
    let out = xml_entities(text);
    assert_eq!(
        out,
        "<ul>\n<li>&ldquo;quoted&rdquo;</li>\n<li>plain</li>\n</ul>"
    );
}

#[test]
fn unterminated_tag_yields_control_instead_of_failing() {
    // The filter gives up on the dangling bracket; the conversion still
    // completes and the prose before it is curled.
    let out = xml_entities("\"done\" <em");
    assert!(out.starts_with("&ldquo;done&rdquo;"));
}
