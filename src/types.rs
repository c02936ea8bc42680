//! Fundamental types used by this crate.

use serde::{Deserialize, Serialize};
use std::ops::Range;

/// A single word together with the part-of-speech tag some tagger assigned to it.
/// The tag is kept verbatim, normalization happens while matching.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Token {
    text: String,
    tag: String,
}

impl Token {
    pub fn new<S1: Into<String>, S2: Into<String>>(text: S1, tag: S2) -> Self {
        Token {
            text: text.into(),
            tag: tag.into(),
        }
    }

    /// The text of this token.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// The raw tag as produced by the tagger.
    pub fn tag(&self) -> &str {
        &self.tag
    }
}

impl AsRef<str> for Token {
    fn as_ref(&self) -> &str {
        &self.text
    }
}

impl<S1: Into<String>, S2: Into<String>> From<(S1, S2)> for Token {
    fn from(data: (S1, S2)) -> Self {
        Token::new(data.0, data.1)
    }
}

/// One review or comment. Where one sentence ends and the next begins is decided by the tagger.
pub type TaggedSentence = Vec<Token>;

/// The text of one matched span: the token texts joined by a single space.
pub type Opinion = String;

/// Span of a match inside a sentence, in token indices.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Span {
    start: usize,
    end: usize,
}

impl Span {
    pub(crate) fn new(start: usize, end: usize) -> Self {
        debug_assert!(start < end);
        Span { start, end }
    }

    /// Index of the first token of the match (inclusive).
    pub fn start(&self) -> usize {
        self.start
    }

    /// Index after the last token of the match (exclusive).
    pub fn end(&self) -> usize {
        self.end
    }

    /// Number of tokens in the match.
    pub fn len(&self) -> usize {
        self.end - self.start
    }

    /// Spans always cover at least one token.
    pub fn is_empty(&self) -> bool {
        false
    }

    pub fn range(&self) -> Range<usize> {
        self.start..self.end
    }

    /// Joins the text of the tokens covered by this span.
    ///
    /// # Panics
    /// If the span is out of bounds for `tokens`.
    pub fn text(&self, tokens: &[Token]) -> Opinion {
        itertools::join(tokens[self.range()].iter().map(|token| token.text()), " ")
    }
}
