//! Greedy matching of one tagged sentence against a [PatternTrie].

use std::cmp;

use crate::{
    normalize::TagNormalizer,
    trie::{Lookup, PatternTrie},
    types::*,
};

/// Scans sentences for spans whose normalized tags form a pattern of the trie.
///
/// Matching starts at every index from left to right. At each start index the trie is descended one token
/// at a time, for at most [max_depth][PatternTrie::max_depth] tokens:
/// - if the tag has no child, the attempt is abandoned and nothing is emitted,
/// - if the tag is a terminal, the span is emitted and scanning resumes right after it.
///
/// There is no backtracking: a failed attempt never falls back to a shorter pattern. The last token of a
/// sentence is never tried as a start on its own.
#[derive(Debug, Clone, Copy)]
pub struct SequenceMatcher<'a> {
    trie: &'a PatternTrie,
    normalizer: &'a TagNormalizer,
}

impl<'a> SequenceMatcher<'a> {
    pub fn new(trie: &'a PatternTrie, normalizer: &'a TagNormalizer) -> Self {
        SequenceMatcher { trie, normalizer }
    }

    /// Attempts a match starting at `start`. Returns the number of tokens consumed on success.
    fn match_at(&self, sentence: &[Token], start: usize) -> Option<usize> {
        let mut node = self.trie.root();
        let limit = cmp::min(self.trie.max_depth(), sentence.len() - start);

        for (offset, token) in sentence[start..start + limit].iter().enumerate() {
            match node.lookup(self.normalizer.normalize(token.tag())) {
                Lookup::NoChild => return None,
                Lookup::Child(children) => node = children,
                Lookup::Terminal => return Some(offset + 1),
            }
        }

        None
    }

    /// Finds the spans of all matches in `sentence`, ordered from left to right. Spans never overlap.
    pub fn spans(&self, sentence: &[Token]) -> Vec<Span> {
        let mut spans = Vec::new();
        let mut i = 0;

        while i + 1 < sentence.len() {
            match self.match_at(sentence, i) {
                Some(length) => {
                    spans.push(Span::new(i, i + length));
                    i += length;
                }
                None => i += 1,
            }
        }

        spans
    }

    /// Finds all opinions in `sentence`.
    pub fn extract(&self, sentence: &[Token]) -> Vec<Opinion> {
        self.spans(sentence)
            .into_iter()
            .map(|span| span.text(sentence))
            .collect()
    }
}

/// Extracts the opinions of one sentence. Shorthand for [SequenceMatcher::extract].
pub fn extract(sentence: &[Token], trie: &PatternTrie, normalizer: &TagNormalizer) -> Vec<Opinion> {
    SequenceMatcher::new(trie, normalizer).extract(sentence)
}
