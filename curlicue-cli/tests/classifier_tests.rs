// Single-pass classifications: inputs whose quotes the rule window decides
// outright, no tree resolution required.

use curlicue_cli::{Contractions, FilterMode, OutputMode, curl};

fn entities(text: &str) -> String {
    curl(
        text,
        &Contractions::default(),
        OutputMode::Entities,
        FilterMode::Plain,
    )
}

#[test]
fn contractions_between_letters_are_apostrophes() {
    assert_eq!(entities("y'all"), "y&apos;all");
    assert_eq!(entities("she's"), "she&apos;s");
    assert_eq!(entities("Ph.D.'ll"), "Ph.D.&apos;ll");
    assert_eq!(entities("20's"), "20&apos;s");
}

#[test]
fn unambiguous_began_words_are_apostrophes() {
    assert_eq!(entities("'Twas brillig"), "&apos;Twas brillig");
    assert_eq!(entities("'tis"), "&apos;tis");
    assert_eq!(entities("whate'er"), "whate&apos;er");
}

#[test]
fn unambiguous_ended_words_are_apostrophes() {
    assert_eq!(entities("thinkin' aloud"), "thinkin&apos; aloud");
    assert_eq!(entities("nothin' else"), "nothin&apos; else");
}

#[test]
fn words_bounded_by_apostrophes_take_both() {
    assert_eq!(entities("Fish-'n'-chips!"), "Fish-&apos;n&apos;-chips!");
    assert_eq!(entities("rock 'N' roll"), "rock &apos;N&apos; roll");
}

#[test]
fn primes_follow_numbers() {
    assert_eq!(entities("2'"), "2&prime;");
    assert_eq!(entities("2\""), "2&Prime;");
    assert_eq!(entities("2''"), "2&Prime;");
    assert_eq!(
        entities("That's a 35'×10\" yacht!"),
        "That&apos;s a 35&prime;×10&Prime; yacht!"
    );
}

#[test]
fn year_abbreviations_are_apostrophes() {
    assert_eq!(entities("back in '02, sure"), "back in &apos;02, sure");
    assert_eq!(entities("the '20s roared"), "the &apos;20s roared");
}

#[test]
fn number_following_single_quote_opens() {
    // No trailing space, punctuation, or `s` word after the number, so the
    // mark reads as an opening quote rather than a year abbreviation.
    assert_eq!(entities("'42"), "&lsquo;42");
    assert_eq!(entities("'49ers win"), "&lsquo;49ers win");
}

#[test]
fn o_contractions_keep_the_apostrophe() {
    assert_eq!(entities("3 o'clock"), "3 o&apos;clock");
    assert_eq!(entities("jack-o'-lantern"), "jack-o&apos;-lantern");
    assert_eq!(entities("o' fellow"), "o&apos; fellow");
}

#[test]
fn escaped_quotes_unwrap_to_straight_quotes() {
    assert_eq!(entities("ch = \\'x\\'"), "ch = 'x'");
    assert_eq!(entities("say \\\"hi\\\""), "say \"hi\"");
}

#[test]
fn double_quotes_pair_around_prose() {
    assert_eq!(entities("\"I am Sam\""), "&ldquo;I am Sam&rdquo;");
    assert_eq!(entities("(\"nested\")"), "(&ldquo;nested&rdquo;)");
    assert_eq!(entities("a --\"quote\"-- b"), "a --&ldquo;quote&rdquo;-- b");
}

#[test]
fn doubled_single_quote_before_word_splits() {
    assert_eq!(entities("''E sat."), "&lsquo;&apos;E sat.");
}
