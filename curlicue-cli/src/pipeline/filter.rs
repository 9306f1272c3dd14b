// curlicue-cli/src/pipeline/filter.rs

// Skip filters applied at every outer iteration of the lexer.

// The XML filter hides markup from the quote pipeline: tags are consumed
// wholesale, and the entire body of an untouchable element (preformatted
// text, code, and friends) is consumed along with them. Documents must be
// well-formed; `<` and `>` inside data must be entity-encoded. Attribute
// values are hidden by tag-skipping and therefore pass through verbatim.
// On malformed input the filter yields control to the lexer instead of
// failing the conversion.

use crate::pipeline::cursor::{Cursor, DONE};

/// Elements whose contents carry intentional straight quotes.
const UNTOUCHABLE: &[&str] = &[
    "pre",
    "code",
    "tt",
    "tex",
    "kbd",
    "samp",
    "var",
    "l",
    "blockcode",
];

/// Tokenization preprocessor consulted before each lexeme. Returning `true`
/// means characters were consumed and the filter must be asked again,
/// because two skippable regions may abut.
pub trait SkipFilter {
    fn test(&mut self, cursor: &mut Cursor<'_>) -> bool;
}

/// Filter that never skips anything; every quotation mark is curled.
pub struct PlainFilter;

impl SkipFilter for PlainFilter {
    fn test(&mut self, _cursor: &mut Cursor<'_>) -> bool {
        false
    }
}

/// Filter that skips XML tags and the bodies of untouchable elements.
pub struct XmlFilter;

impl SkipFilter for XmlFilter {
    fn test(&mut self, cursor: &mut Cursor<'_>) -> bool {
        if cursor.current() != '<' {
            return false;
        }

        let Some((began, ended)) = next_tag(cursor) else {
            // The document ran out of characters; the XML is not
            // well-formed. Stop filtering and let the lexer continue.
            return false;
        };

        let name = tag_name(cursor.substring(began, ended));

        if UNTOUCHABLE.contains(&name.to_lowercase().as_str()) {
            loop {
                let Some((c_began, c_ended)) = next_tag(cursor) else {
                    return false;
                };
                if cursor.substring(c_began, c_ended).ends_with(&name) {
                    break;
                }
            }
        }

        true
    }
}

/// Consumes through the next `>` (or stray `<`) and returns the byte range
/// of the bracket content, or `None` when the document ends first.
fn next_tag(cursor: &mut Cursor<'_>) -> Option<(usize, usize)> {
    let began = cursor.index();
    let first = cursor.current();

    cursor.skip(|_, c| c != '>' && c != '<');

    // Move onto the terminator, then past it.
    cursor.next();
    if cursor.current() == DONE {
        return None;
    }
    cursor.next();

    // Drop the bracket (or whatever character led the scan) and the
    // terminator; both ends stay on character boundaries.
    Some((began + first.len_utf8(), cursor.index() - 1))
}

/// First whitespace-terminated identifier inside the brackets; `<a href=…>`
/// names the element `a`.
fn tag_name(content: &str) -> String {
    content
        .split_whitespace()
        .next()
        .unwrap_or(content)
        .to_string()
}
