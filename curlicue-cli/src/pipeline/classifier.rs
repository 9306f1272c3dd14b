// curlicue-cli/src/pipeline/classifier.rs

// First pass of the two-pass parser: classifies every straight quotation
// mark as definite (apostrophe, prime, opening, closing, straight) or as
// one of three ambiguous kinds carrying a directional hint.

// The classifier holds a sliding window of four lexemes — left-left, left,
// candidate, right — and runs an ordered rule table against it every time
// the window is full. The first rule whose slot patterns and guard both
// match fires; the rest are skipped. Compound rules that consume a quote
// beyond the candidate slot obliterate that slot so the quote cannot be
// re-classified when the window slides over it.

use curlicue_types::{Lexeme, LexemeClass, Token, TokenKind};

use crate::contractions::Contractions;
use crate::pipeline::filter::SkipFilter;
use crate::pipeline::lexer::lex;

type Pat = &'static [LexemeClass];

const ANY: Pat = &[LexemeClass::Any];
const WORD: Pat = &[LexemeClass::Word];
const NUMBER: Pat = &[LexemeClass::Number];
const DASH: Pat = &[LexemeClass::Dash];
const ENDING: Pat = &[LexemeClass::Ending];
const QUOTE_SINGLE: Pat = &[LexemeClass::QuoteSingle];
const QUOTE_DOUBLE: Pat = &[LexemeClass::QuoteDouble];
const ESC_SINGLE: Pat = &[LexemeClass::EscSingle];
const ESC_DOUBLE: Pat = &[LexemeClass::EscDouble];
const OBLITERATED: Pat = &[LexemeClass::None];
const INTL_OPENING_DOUBLE: Pat = &[LexemeClass::QuoteDoubleOpening];

const WORD_PERIOD_NUMBER: Pat = &[LexemeClass::Word, LexemeClass::Period, LexemeClass::Number];
const PUNCT_PERIOD: Pat = &[LexemeClass::Punct, LexemeClass::Period];
const PUNCT_PERIOD_ELLIPSIS_DASH: Pat = &[
    LexemeClass::Punct,
    LexemeClass::Period,
    LexemeClass::Ellipsis,
    LexemeClass::Dash,
];
const SPACE_DASH_ENDING: Pat = &[LexemeClass::Space, LexemeClass::Dash, LexemeClass::Ending];
const SPACE_ENDING: Pat = &[LexemeClass::Space, LexemeClass::Ending];
const SPACE_HYPHEN: Pat = &[LexemeClass::Space, LexemeClass::Hyphen];
const SPACE_PUNCT: Pat = &[LexemeClass::Space, LexemeClass::Punct];
const SPACE_SOT: Pat = &[LexemeClass::Space, LexemeClass::Sot];

/// Single quotes preceded by these may be opening quotes.
const LEADING_OPENING_SINGLE: Pat = &[
    LexemeClass::Sot,
    LexemeClass::Space,
    LexemeClass::Dash,
    LexemeClass::QuoteDouble,
    LexemeClass::OpeningGroup,
    LexemeClass::Eol,
    LexemeClass::Eop,
];

/// Single quotes succeeded by these may be opening quotes.
const LAGGING_OPENING_SINGLE: Pat = &[
    LexemeClass::Word,
    LexemeClass::Ellipsis,
    LexemeClass::QuoteSingle,
    LexemeClass::QuoteDouble,
];

/// Single quotes preceded by these may be closing quotes.
const LEADING_CLOSING_SINGLE: Pat = &[
    LexemeClass::Word,
    LexemeClass::Number,
    LexemeClass::Period,
    LexemeClass::Punct,
    LexemeClass::Ellipsis,
    LexemeClass::QuoteDouble,
];

/// Single quotes succeeded by these may be closing quotes.
const LAGGING_CLOSING_SINGLE: Pat = &[
    LexemeClass::Space,
    LexemeClass::Hyphen,
    LexemeClass::Dash,
    LexemeClass::Punct,
    LexemeClass::Period,
    LexemeClass::Ellipsis,
    LexemeClass::QuoteDouble,
    LexemeClass::ClosingGroup,
    LexemeClass::Ending,
];

/// Double quotes preceded by these may be opening quotes.
const LEADING_OPENING_DOUBLE: Pat = &[
    LexemeClass::Sot,
    LexemeClass::Space,
    LexemeClass::Dash,
    LexemeClass::Equals,
    LexemeClass::OpeningGroup,
    LexemeClass::Eol,
    LexemeClass::Eop,
];

/// Double quotes succeeded by these may be opening quotes.
const LAGGING_OPENING_DOUBLE: Pat = &[
    LexemeClass::Word,
    LexemeClass::Punct,
    LexemeClass::Number,
    LexemeClass::Dash,
    LexemeClass::Ellipsis,
    LexemeClass::OpeningGroup,
    LexemeClass::QuoteSingle,
    LexemeClass::QuoteSingleOpening,
    LexemeClass::QuoteSingleClosing,
    LexemeClass::QuoteDouble,
];

/// Double quotes preceded by these may be closing quotes.
const LEADING_CLOSING_DOUBLE: Pat = &[
    LexemeClass::Word,
    LexemeClass::Number,
    LexemeClass::Period,
    LexemeClass::Punct,
    LexemeClass::Dash,
    LexemeClass::Ellipsis,
    LexemeClass::ClosingGroup,
    LexemeClass::QuoteSingle,
    LexemeClass::QuoteSingleClosing,
    LexemeClass::QuoteSingleOpening,
];

/// Double quotes succeeded by these may be closing quotes.
const LAGGING_CLOSING_DOUBLE: Pat = &[
    LexemeClass::Space,
    LexemeClass::Punct,
    LexemeClass::Period,
    LexemeClass::Equals,
    LexemeClass::Hyphen,
    LexemeClass::Dash,
    LexemeClass::QuoteSingle,
    LexemeClass::ClosingGroup,
    LexemeClass::Ending,
];

/// Semantic guard checked after the slot patterns match.
enum Guard {
    /// The candidate's right-hand word is in both unambiguous sets.
    BoundedUnambiguously,
    /// The candidate's left-hand word is in the ended-unambiguous set.
    EndedUnambiguously,
    /// Case-insensitive word equality at a window slot.
    WordIs(usize, &'static str),
}

/// What a fired rule does to the window.
enum Action {
    /// Mint a token of this kind from the lexeme at the given slot.
    Emit(TokenKind, usize),
    /// Both quotes bound a contraction: apostrophes at slots 1 and 3.
    BoundedPair,
    /// Two singles after a number fuse into one double prime.
    JoinedPrimeDouble,
    /// Escaped double quote, possibly followed by a closing single.
    StraightDouble,
    /// Doubled mark opening a quotation on a dropped-letter word.
    OpeningPair,
    /// Single quote in opening position; consult the contractions oracle.
    OpeningSingleHeuristic,
    /// Single quote in closing position; consult the contractions oracle.
    ClosingSingleHeuristic,
    /// Second of two singles directly before a word.
    DoubledSingleHeuristic,
}

struct Rule {
    window: [Pat; 4],
    guard: Option<Guard>,
    action: Action,
}

/// The classification table. Deterministic, earliest match wins. The
/// examples name the shape each rule exists for.
static RULES: &[Rule] = &[
    // y'all, Ph.D.'ll, 20's, she's
    Rule {
        window: [WORD_PERIOD_NUMBER, QUOTE_SINGLE, WORD, ANY],
        guard: None,
        action: Action::Emit(TokenKind::Apostrophe, 1),
    },
    // 'n', 'N', 'owlin'
    Rule {
        window: [ANY, QUOTE_SINGLE, WORD, QUOTE_SINGLE],
        guard: Some(Guard::BoundedUnambiguously),
        action: Action::BoundedPair,
    },
    // 2''
    Rule {
        window: [NUMBER, QUOTE_SINGLE, QUOTE_SINGLE, ANY],
        guard: None,
        action: Action::JoinedPrimeDouble,
    },
    // 2'
    Rule {
        window: [NUMBER, QUOTE_SINGLE, ANY, ANY],
        guard: None,
        action: Action::Emit(TokenKind::PrimeSingle, 1),
    },
    // 2"
    Rule {
        window: [NUMBER, QUOTE_DOUBLE, ANY, ANY],
        guard: None,
        action: Action::Emit(TokenKind::PrimeDouble, 1),
    },
    // thinkin'
    Rule {
        window: [WORD, QUOTE_SINGLE, ANY, ANY],
        guard: Some(Guard::EndedUnambiguously),
        action: Action::Emit(TokenKind::Apostrophe, 1),
    },
    // '02
    Rule {
        window: [ANY, QUOTE_SINGLE, NUMBER, SPACE_PUNCT],
        guard: None,
        action: Action::Emit(TokenKind::Apostrophe, 1),
    },
    // '20s
    Rule {
        window: [ANY, QUOTE_SINGLE, NUMBER, WORD],
        guard: Some(Guard::WordIs(3, "s")),
        action: Action::Emit(TokenKind::Apostrophe, 1),
    },
    // .'⏎
    Rule {
        window: [PUNCT_PERIOD_ELLIPSIS_DASH, QUOTE_SINGLE, ENDING, ANY],
        guard: None,
        action: Action::Emit(TokenKind::ClosingSingle, 1),
    },
    // \'
    Rule {
        window: [ESC_SINGLE, ANY, ANY, ANY],
        guard: None,
        action: Action::Emit(TokenKind::StraightSingle, 0),
    },
    // \"
    Rule {
        window: [ESC_DOUBLE, ANY, ANY, ANY],
        guard: None,
        action: Action::StraightDouble,
    },
    // ---'" followed by space or ending
    Rule {
        window: [DASH, QUOTE_SINGLE, QUOTE_DOUBLE, SPACE_ENDING],
        guard: None,
        action: Action::Emit(TokenKind::ClosingSingle, 1),
    },
    // o'clock, jack-o'-lantern, o' fellow
    Rule {
        window: [WORD, QUOTE_SINGLE, SPACE_HYPHEN, WORD],
        guard: Some(Guard::WordIs(0, "o")),
        action: Action::Emit(TokenKind::Apostrophe, 1),
    },
    // "", "..., "word, ---"word
    Rule {
        window: [LEADING_OPENING_DOUBLE, QUOTE_DOUBLE, LAGGING_OPENING_DOUBLE, ANY],
        guard: None,
        action: Action::Emit(TokenKind::OpeningDouble, 1),
    },
    // ..."', word"', ?"', word"?
    Rule {
        window: [LEADING_CLOSING_DOUBLE, QUOTE_DOUBLE, LAGGING_CLOSING_DOUBLE, ANY],
        guard: None,
        action: Action::Emit(TokenKind::ClosingDouble, 1),
    },
    // ''E — consume both immediately to avoid the false ambiguity 'e
    Rule {
        window: [SPACE_SOT, QUOTE_SINGLE, QUOTE_SINGLE, WORD],
        guard: None,
        action: Action::OpeningPair,
    },
    // '..., 'word, ---'word, 'nation
    Rule {
        window: [LEADING_OPENING_SINGLE, QUOTE_SINGLE, LAGGING_OPENING_SINGLE, ANY],
        guard: None,
        action: Action::OpeningSingleHeuristic,
    },
    // word'", ...'---, "'
    Rule {
        window: [LEADING_CLOSING_SINGLE, QUOTE_SINGLE, LAGGING_CLOSING_SINGLE, ANY],
        guard: None,
        action: Action::ClosingSingleHeuristic,
    },
    // word'; — contraction inferred by the rules above
    Rule {
        window: [WORD, QUOTE_SINGLE, PUNCT_PERIOD, ANY],
        guard: None,
        action: Action::Emit(TokenKind::Apostrophe, 1),
    },
    // ---'"
    Rule {
        window: [DASH, QUOTE_SINGLE, QUOTE_DOUBLE, ANY],
        guard: None,
        action: Action::Emit(TokenKind::ClosingSingle, 1),
    },
    // '42, '-3.14
    Rule {
        window: [ANY, QUOTE_SINGLE, NUMBER, ANY],
        guard: None,
        action: Action::Emit(TokenKind::OpeningSingle, 1),
    },
    // quote directly after a slot consumed by a compound rule
    Rule {
        window: [OBLITERATED, QUOTE_SINGLE, ANY, ANY],
        guard: None,
        action: Action::Emit(TokenKind::ClosingSingle, 1),
    },
    // ''Cause
    Rule {
        window: [QUOTE_SINGLE, QUOTE_SINGLE, WORD, ANY],
        guard: None,
        action: Action::DoubledSingleHeuristic,
    },
    // any other double quote
    Rule {
        window: [ANY, QUOTE_DOUBLE, ANY, ANY],
        guard: None,
        action: Action::Emit(TokenKind::Ambiguous, 1),
    },
    // international opening double quote
    Rule {
        window: [ANY, INTL_OPENING_DOUBLE, ANY, ANY],
        guard: None,
        action: Action::Emit(TokenKind::OpeningDouble, 1),
    },
    // any other single quote
    Rule {
        window: [ANY, QUOTE_SINGLE, ANY, ANY],
        guard: None,
        action: Action::Emit(TokenKind::Ambiguous, 1),
    },
];

/// Sliding-window rule machine fed by the lexer.
pub struct QuoteClassifier<'a> {
    text: &'a str,
    oracle: &'a Contractions,
    sink: &'a mut dyn FnMut(Token),
    window: [Lexeme; 4],
    len: usize,
}

impl<'a> QuoteClassifier<'a> {
    pub fn new(
        text: &'a str,
        oracle: &'a Contractions,
        sink: &'a mut dyn FnMut(Token),
    ) -> Self {
        Self {
            text,
            oracle,
            sink,
            window: [Lexeme::NONE; 4],
            len: 0,
        }
    }

    /// Lexes the document and streams classified tokens to `sink`.
    pub fn analyze(
        text: &'a str,
        oracle: &'a Contractions,
        sink: &'a mut dyn FnMut(Token),
        filter: &mut dyn SkipFilter,
    ) {
        let mut classifier = Self::new(text, oracle, sink);
        lex(text, &mut |lexeme| classifier.push(lexeme), filter);
    }

    /// Appends a lexeme, evicting the oldest once the window holds four.
    pub fn push(&mut self, lexeme: Lexeme) {
        if self.len == 4 {
            self.window.copy_within(1.., 0);
            self.window[3] = lexeme;
        } else {
            self.window[self.len] = lexeme;
            self.len += 1;
        }

        if self.len == 4 {
            self.classify();
        }
    }

    fn classify(&mut self) {
        for rule in RULES {
            if !self.matches(&rule.window) {
                continue;
            }
            if let Some(guard) = &rule.guard
                && !self.check(guard)
            {
                continue;
            }
            self.run(&rule.action);
            break;
        }
    }

    fn matches(&self, window: &[Pat; 4]) -> bool {
        self.window
            .iter()
            .zip(window.iter())
            .all(|(lexeme, pat)| lexeme.is_any(pat))
    }

    fn check(&self, guard: &Guard) -> bool {
        match guard {
            Guard::BoundedUnambiguously => {
                let word = self.word_at(2);
                self.oracle.began_unambiguously(word) && self.oracle.ended_unambiguously(word)
            }
            Guard::EndedUnambiguously => self.oracle.ended_unambiguously(self.word_at(0)),
            Guard::WordIs(slot, word) => self.word_at(*slot).eq_ignore_ascii_case(word),
        }
    }

    fn run(&mut self, action: &Action) {
        match action {
            Action::Emit(kind, slot) => self.emit(*kind, self.window[*slot]),
            Action::BoundedPair => {
                self.emit(TokenKind::Apostrophe, self.window[1]);
                self.emit(TokenKind::Apostrophe, self.window[3]);
                self.window[3] = Lexeme::NONE;
            }
            Action::JoinedPrimeDouble => {
                // Fuse both quote columns into one lexeme so the prime
                // replaces the full '' span.
                let fused = Lexeme::new(
                    curlicue_types::LexemeKind::PrimeDouble,
                    self.window[1].began(),
                    self.window[2].ended(),
                );
                self.emit(TokenKind::PrimeDouble, fused);
                self.window[2] = Lexeme::NONE;
            }
            Action::StraightDouble => {
                self.emit(TokenKind::StraightDouble, self.window[0]);

                // \"'--- — the single after the escape closes a quotation.
                if self.matches(&[ESC_DOUBLE, QUOTE_SINGLE, SPACE_DASH_ENDING, ANY]) {
                    self.emit(TokenKind::ClosingSingle, self.window[1]);
                }
            }
            Action::OpeningPair => {
                self.emit(TokenKind::OpeningSingle, self.window[1]);
                self.emit(TokenKind::Apostrophe, self.window[2]);
                self.window[1] = Lexeme::NONE;
                self.window[2] = Lexeme::NONE;
            }
            Action::OpeningSingleHeuristic => self.opening_single_heuristic(),
            Action::ClosingSingleHeuristic => self.closing_single_heuristic(),
            Action::DoubledSingleHeuristic => self.doubled_single_heuristic(),
        }
    }

    fn opening_single_heuristic(&mut self) {
        let word = self.word_at(2);
        let candidate = self.window[1];

        if self.oracle.began_ambiguously(word) {
            self.emit(TokenKind::AmbiguousLeading, candidate);
        } else if self.oracle.began_unambiguously(word) {
            self.emit(TokenKind::Apostrophe, candidate);
        } else if self.matches(&[QUOTE_DOUBLE, QUOTE_SINGLE, QUOTE_DOUBLE, WORD]) {
            // "'"nested
            self.emit(TokenKind::OpeningSingle, candidate);
        } else if self.matches(&[QUOTE_DOUBLE, QUOTE_SINGLE, QUOTE_DOUBLE, ANY]) {
            // "'"
            self.emit(TokenKind::Ambiguous, candidate);
        } else if self.matches(&[ANY, QUOTE_SINGLE, LAGGING_OPENING_SINGLE, ANY]) {
            // '"
            self.emit(TokenKind::OpeningSingle, candidate);
        } else {
            self.emit(TokenKind::AmbiguousLeading, candidate);
        }
    }

    fn closing_single_heuristic(&mut self) {
        let word = self.word_at(0);
        let candidate = self.window[1];

        if self.oracle.ended_ambiguously(word) {
            self.emit(TokenKind::AmbiguousLagging, candidate);
        } else {
            self.emit(TokenKind::ClosingSingle, candidate);
        }
    }

    fn doubled_single_heuristic(&mut self) {
        let word = self.word_at(2);
        let candidate = self.window[1];

        if self.oracle.began_ambiguously(word) {
            self.emit(TokenKind::AmbiguousLeading, candidate);
        } else if self.oracle.began_unambiguously(word) {
            self.emit(TokenKind::Apostrophe, candidate);
        } else {
            self.emit(TokenKind::Ambiguous, candidate);
        }
    }

    fn word_at(&self, slot: usize) -> &'a str {
        self.window[slot].slice(self.text)
    }

    fn emit(&mut self, kind: TokenKind, lexeme: Lexeme) {
        (self.sink)(Token::new(kind, lexeme));
    }
}
