//! A trie over canonical tags encoding the tag sequences which are accepted as opinions.
//!
//! Every path from the root ends in a [PatternNode::Terminal]. A node is either a terminal or has children,
//! never both: the first terminal reached while descending ends the pattern.

use indexmap::{map::Entry, IndexMap};
use serde::{Deserialize, Serialize};
use std::convert::TryFrom;
use thiserror::Error;

#[derive(Error, Debug, PartialEq)]
#[allow(missing_docs)]
pub enum Error {
    #[error("patterns must contain at least one tag.")]
    EmptyPattern,
    #[error("pattern '{0}' is a prefix of or extends past an existing pattern.")]
    ConflictingPattern(String),
    #[error("max depth must be at least one.")]
    ZeroDepth,
    #[error("a pattern trie needs at least one pattern.")]
    NoPatterns,
    #[error("continuation after '{0}' has no children.")]
    EmptyContinuation(String),
}

/// One entry below a [Children] map.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum PatternNode {
    /// The pattern continues with one of the children.
    Continuation(Children),
    /// The path leading here is a complete pattern.
    Terminal,
}

/// The result of looking up the next tag in a [Children] map.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Lookup<'a> {
    NoChild,
    Child(&'a Children),
    Terminal,
}

/// Outgoing edges of a position in the trie, keyed by canonical tag.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Children(IndexMap<String, PatternNode>);

impl Children {
    pub fn lookup(&self, tag: &str) -> Lookup<'_> {
        match self.0.get(tag) {
            None => Lookup::NoChild,
            Some(PatternNode::Terminal) => Lookup::Terminal,
            Some(PatternNode::Continuation(children)) => Lookup::Child(children),
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &PatternNode)> {
        self.0.iter().map(|(tag, node)| (tag.as_str(), node))
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Returns `false` if the pattern conflicts with an existing one.
    fn insert(&mut self, pattern: &[String]) -> bool {
        let (first, rest) = match pattern.split_first() {
            Some(x) => x,
            None => return false,
        };

        match self.0.entry(first.clone()) {
            Entry::Vacant(entry) => {
                if rest.is_empty() {
                    entry.insert(PatternNode::Terminal);
                    true
                } else {
                    let mut children = Children::default();
                    let inserted = children.insert(rest);
                    entry.insert(PatternNode::Continuation(children));
                    inserted
                }
            }
            Entry::Occupied(mut entry) => match (entry.get_mut(), rest.is_empty()) {
                // duplicates are fine
                (PatternNode::Terminal, true) => true,
                (PatternNode::Terminal, false) | (PatternNode::Continuation(_), true) => false,
                (PatternNode::Continuation(children), false) => children.insert(rest),
            },
        }
    }

    /// Checks that every continuation has at least one child.
    fn validate(&self, prefix: &mut Vec<String>) -> Result<(), Error> {
        for (tag, node) in self.iter() {
            if let PatternNode::Continuation(children) = node {
                prefix.push(tag.to_string());
                if children.is_empty() {
                    return Err(Error::EmptyContinuation(prefix.join(" ")));
                }
                children.validate(prefix)?;
                prefix.pop();
            }
        }

        Ok(())
    }

    fn depth(&self) -> usize {
        self.0
            .values()
            .map(|node| match node {
                PatternNode::Terminal => 1,
                PatternNode::Continuation(children) => 1 + children.depth(),
            })
            .max()
            .unwrap_or(0)
    }

    fn collect_patterns(&self, prefix: &mut Vec<String>, out: &mut Vec<Vec<String>>) {
        for (tag, node) in &self.0 {
            prefix.push(tag.clone());
            match node {
                PatternNode::Terminal => out.push(prefix.clone()),
                PatternNode::Continuation(children) => children.collect_patterns(prefix, out),
            }
            prefix.pop();
        }
    }
}

/// Immutable lookup structure for the accepted tag patterns.
///
/// Deserialization checks the same invariants as [PatternTrieBuilder::build].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "PatternTrieFields")]
pub struct PatternTrie {
    root: Children,
    max_depth: usize,
}

#[derive(Deserialize)]
struct PatternTrieFields {
    root: Children,
    max_depth: usize,
}

impl TryFrom<PatternTrieFields> for PatternTrie {
    type Error = Error;

    fn try_from(fields: PatternTrieFields) -> Result<Self, Self::Error> {
        PatternTrie::validated(fields.root, fields.max_depth)
    }
}

impl Default for PatternTrie {
    /// The trie accepting `N ADJ` and `N V ADJ` with a max depth of three.
    fn default() -> Self {
        let mut verb = IndexMap::new();
        verb.insert("ADJ".to_string(), PatternNode::Terminal);

        let mut noun = IndexMap::new();
        noun.insert("ADJ".to_string(), PatternNode::Terminal);
        noun.insert(
            "V".to_string(),
            PatternNode::Continuation(Children(verb)),
        );

        let mut root = IndexMap::new();
        root.insert("N".to_string(), PatternNode::Continuation(Children(noun)));

        PatternTrie {
            root: Children(root),
            max_depth: 3,
        }
    }
}

impl PatternTrie {
    fn validated(root: Children, max_depth: usize) -> Result<Self, Error> {
        if root.is_empty() {
            return Err(Error::NoPatterns);
        }
        if max_depth == 0 {
            return Err(Error::ZeroDepth);
        }
        root.validate(&mut Vec::new())?;

        Ok(PatternTrie { root, max_depth })
    }

    pub fn builder() -> PatternTrieBuilder {
        PatternTrieBuilder::default()
    }

    /// The position where no pattern has been started yet.
    pub fn root(&self) -> &Children {
        &self.root
    }

    /// The maximum number of tokens one match may consume.
    pub fn max_depth(&self) -> usize {
        self.max_depth
    }

    /// Length of the longest path in the trie. Can be larger than [max_depth][PatternTrie::max_depth].
    pub fn depth(&self) -> usize {
        self.root.depth()
    }

    /// All accepted patterns in insertion order.
    pub fn patterns(&self) -> Vec<Vec<String>> {
        let mut out = Vec::new();
        self.root.collect_patterns(&mut Vec::new(), &mut out);
        out
    }
}

/// Builds a [PatternTrie] from a list of tag patterns.
#[derive(Debug, Clone, Default)]
pub struct PatternTrieBuilder {
    patterns: Vec<Vec<String>>,
    max_depth: Option<usize>,
}

impl PatternTrieBuilder {
    /// Adds a pattern of canonical tags.
    pub fn pattern<I, S>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.patterns.push(tags.into_iter().map(Into::into).collect());
        self
    }

    /// Sets the max depth. Defaults to the length of the longest pattern.
    pub fn max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = Some(max_depth);
        self
    }

    /// # Errors
    /// - If a pattern is empty or conflicts with another pattern.
    /// - If no patterns were added or the max depth is zero.
    pub fn build(self) -> Result<PatternTrie, Error> {
        if self.patterns.is_empty() {
            return Err(Error::NoPatterns);
        }

        let mut root = Children::default();

        for pattern in &self.patterns {
            if pattern.is_empty() {
                return Err(Error::EmptyPattern);
            }

            if !root.insert(pattern) {
                return Err(Error::ConflictingPattern(pattern.join(" ")));
            }
        }

        let max_depth = self.max_depth.unwrap_or_else(|| root.depth());
        PatternTrie::validated(root, max_depth)
    }
}
