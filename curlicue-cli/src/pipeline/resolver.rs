// curlicue-cli/src/pipeline/resolver.rs

// Second pass of the two-pass parser: resolves quotation marks the
// classifier could not decide from four lexemes of context.

// Nested quotations must alternate between double and single quotes, so a
// nesting tree of the definite openings and closings gives each ambiguous
// mark a scope to reason in: "Is Iris' name Greek?" resolves because the
// lone mark sits inside balanced double quotes. Tokens that survive both
// passes stay ambiguous and are skipped by the replacer, leaving the
// original characters as the signal that a human must intervene.

// The tree is an arena: nodes live in one vector and refer to each other
// by index, parent links included, so the structure is cycle-free and the
// breadth-first passes are plain queue walks over indices.

use std::collections::VecDeque;

use curlicue_types::{Token, TokenKind};

/// Child entry of a tree node, in insertion order.
#[derive(Clone, Copy)]
enum Stem {
    Subtree(usize),
    Leaf(usize),
}

struct Node {
    parent: Option<usize>,
    opening: Option<usize>,
    closing: Option<usize>,
    stems: Vec<Stem>,
}

impl Node {
    const fn root() -> Self {
        Self {
            parent: None,
            opening: None,
            closing: None,
            stems: Vec::new(),
        }
    }
}

/// Builds the nesting tree from classified tokens, then resolves as many
/// ambiguous marks as the structure allows.
pub struct Resolver {
    nodes: Vec<Node>,
    tokens: Vec<Token>,
    current: usize,
}

impl Default for Resolver {
    fn default() -> Self {
        Self::new()
    }
}

impl Resolver {
    #[must_use]
    pub fn new() -> Self {
        Self {
            nodes: vec![Node::root()],
            tokens: Vec::new(),
            current: 0,
        }
    }

    /// Accepts opening, closing, ambiguous, apostrophe, prime, and straight
    /// tokens in emission order.
    pub fn accept(&mut self, token: Token) {
        let tid = self.tokens.len();
        self.tokens.push(token);

        match token.kind() {
            TokenKind::OpeningSingle | TokenKind::OpeningDouble => {
                // Branch a subtree; tokens that follow belong to it.
                let nid = self.nodes.len();
                self.nodes.push(Node {
                    parent: Some(self.current),
                    opening: Some(tid),
                    closing: None,
                    stems: Vec::new(),
                });
                self.nodes[self.current].stems.push(Stem::Subtree(nid));
                self.current = nid;
            }
            TokenKind::ClosingSingle | TokenKind::ClosingDouble => {
                let current = self.current;
                if self.nodes[current].closing.is_none() {
                    if let Some(opening) = self.nodes[current].opening {
                        debug_assert!(self.tokens[opening].ended() <= token.began());
                    }
                    self.nodes[current].closing = Some(tid);
                    if let Some(parent) = self.nodes[current].parent {
                        self.current = parent;
                    }
                } else {
                    // Only the root can already be closed. Keep the extra
                    // mark as a leaf so it still reaches the replacer.
                    self.nodes[current].stems.push(Stem::Leaf(tid));
                }
            }
            _ => self.nodes[self.current].stems.push(Stem::Leaf(tid)),
        }
    }

    /// Runs both resolution passes and returns every token in document
    /// order, ambiguous survivors included.
    #[must_use]
    pub fn resolve(mut self) -> Vec<Token> {
        // Openings and closings need not balance, so the tree may dangle
        // anywhere below the root; both passes always walk from the top.
        let order = self.breadth_first();

        for &node in &order {
            self.disambiguate(node);
        }

        let mut sorted: Vec<usize> = (0..self.tokens.len()).collect();
        sorted.sort_by_key(|&tid| self.tokens[tid].began());

        // All laggards appearing before the first leader are apostrophes:
        // a trailing mark cannot close a quotation that never opened.
        for &tid in &sorted {
            match self.tokens[tid].kind() {
                TokenKind::AmbiguousLeading => break,
                TokenKind::AmbiguousLagging => {
                    self.tokens[tid].resolve(TokenKind::Apostrophe);
                }
                _ => {}
            }
        }

        // Replacing laggards may have made leaders resolvable.
        for &node in &order {
            self.disambiguate(node);
        }

        sorted.into_iter().map(|tid| self.tokens[tid]).collect()
    }

    fn breadth_first(&self) -> Vec<usize> {
        let mut order = Vec::with_capacity(self.nodes.len());
        let mut queue = VecDeque::from([0]);

        while let Some(node) = queue.pop_front() {
            order.push(node);
            for stem in &self.nodes[node].stems {
                if let Stem::Subtree(child) = stem {
                    queue.push_back(*child);
                }
            }
        }

        order
    }

    /// Applies the tree-local rules to one node. Counts are taken once up
    /// front; the rule blocks run in order against that snapshot.
    fn disambiguate(&mut self, node: usize) {
        let leading = self.count(node, TokenKind::AmbiguousLeading);
        let lagging = self.count(node, TokenKind::AmbiguousLagging);
        let unknown = self.count(node, TokenKind::Ambiguous);

        let opening_single = self.boundary_is(self.nodes[node].opening, TokenKind::OpeningSingle);
        let opening_double = self.boundary_is(self.nodes[node].opening, TokenKind::OpeningDouble);
        let closing_single = self.boundary_is(self.nodes[node].closing, TokenKind::ClosingSingle);
        let closing_double = self.boundary_is(self.nodes[node].closing, TokenKind::ClosingDouble);
        let balanced =
            (opening_double && closing_double) || (opening_single && closing_single);

        if opening_single && !closing_single {
            if unknown == 0 && leading == 0 && lagging == 1 {
                self.replace_all(node, TokenKind::AmbiguousLagging, TokenKind::ClosingSingle);
            } else if unknown == 1 && lagging == 0 {
                self.replace_all(node, TokenKind::Ambiguous, TokenKind::ClosingSingle);
            }
        }

        if unknown == 0 && leading == 1 && lagging == 0 && !opening_single && closing_single {
            self.replace_all(node, TokenKind::AmbiguousLeading, TokenKind::OpeningSingle);
        }

        if (!opening_single && !closing_single) || balanced {
            if unknown == 0 && leading > 0 && lagging == 0 {
                self.replace_all(node, TokenKind::AmbiguousLeading, TokenKind::Apostrophe);
            }
            if unknown == 0 && leading == 0 && lagging > 0 {
                self.replace_all(node, TokenKind::AmbiguousLagging, TokenKind::Apostrophe);
            }
        }
    }

    fn boundary_is(&self, boundary: Option<usize>, kind: TokenKind) -> bool {
        boundary.is_some_and(|tid| self.tokens[tid].is(kind))
    }

    /// Tallies leaf tokens of one kind at this node only, not ancestors or
    /// descendants.
    fn count(&self, node: usize, kind: TokenKind) -> usize {
        self.nodes[node]
            .stems
            .iter()
            .filter(|stem| match stem {
                Stem::Leaf(tid) => self.tokens[*tid].is(kind),
                Stem::Subtree(_) => false,
            })
            .count()
    }

    fn replace_all(&mut self, node: usize, from: TokenKind, to: TokenKind) {
        for index in 0..self.nodes[node].stems.len() {
            if let Stem::Leaf(tid) = self.nodes[node].stems[index]
                && self.tokens[tid].is(from)
            {
                self.tokens[tid].resolve(to);
            }
        }
    }
}
