//! Taggers turning raw text into [Token]s.
//!
//! Tagging is a capability: anything implementing [Tag] can feed the [Extractor][crate::Extractor].
//! A tagger returns `None` if it can not tag a text, which is treated as "no opinions" downstream.

use fs_err::File;
use serde::{Deserialize, Serialize};
use std::{
    collections::HashMap,
    io::{BufRead, BufReader},
    path::Path,
};

use crate::{components::Component, types::*, utils, Error};

/// Tags a text.
pub trait Tag {
    /// Splits `text` into tokens and assigns a tag to each of them.
    /// Returns `None` if the text could not be tagged.
    fn tag(&self, text: &str) -> Option<TaggedSentence>;
}

impl<'a, T> Tag for &'a T
where
    T: Tag + ?Sized,
{
    fn tag(&self, text: &str) -> Option<TaggedSentence> {
        (*self).tag(text)
    }
}

impl<T> Tag for Box<T>
where
    T: Tag + ?Sized,
{
    fn tag(&self, text: &str) -> Option<TaggedSentence> {
        (**self).tag(text)
    }
}

/// An absent tagger never produces tokens.
impl<T: Tag> Tag for Option<T> {
    fn tag(&self, text: &str) -> Option<TaggedSentence> {
        self.as_ref().and_then(|tagger| tagger.tag(text))
    }
}

/// A tagger calling a closure. See [from_fn].
#[derive(Debug, Clone, Copy)]
pub struct FromFn<F>(F);

impl<F> Tag for FromFn<F>
where
    F: Fn(&str) -> Option<TaggedSentence>,
{
    fn tag(&self, text: &str) -> Option<TaggedSentence> {
        (self.0)(text)
    }
}

/// Creates a tagger from a closure, e. g. a binding to an external model.
pub fn from_fn<F>(f: F) -> FromFn<F>
where
    F: Fn(&str) -> Option<TaggedSentence>,
{
    FromFn(f)
}

/// Reads text which is already tagged, in the form `word/TAG word/TAG ...`.
///
/// The tag is everything after the last separator so words may contain the separator themselves.
/// A text with an item lacking a word or a tag can not be tagged.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct PreTagged {
    separator: char,
}

impl Default for PreTagged {
    fn default() -> Self {
        PreTagged { separator: '/' }
    }
}

impl PreTagged {
    pub fn new(separator: char) -> Self {
        PreTagged { separator }
    }
}

impl Tag for PreTagged {
    fn tag(&self, text: &str) -> Option<TaggedSentence> {
        text.split_whitespace()
            .map(|item| match item.rsplit_once(self.separator) {
                Some((word, tag)) if !word.is_empty() && !tag.is_empty() => {
                    Some(Token::new(word, tag))
                }
                _ => None,
            })
            .collect()
    }
}

/// A dictionary-based tagger.
///
/// Text is split at whitespace and punctuation, then every token is looked up verbatim and, failing that, in lower case.
/// Words which are not in the lexicon get the unknown tag.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Lexicon {
    tags: HashMap<String, String>,
    unknown_tag: String,
}

impl Default for Lexicon {
    fn default() -> Self {
        Lexicon {
            tags: HashMap::new(),
            unknown_tag: "UNKNOWN".into(),
        }
    }
}

impl Component for Lexicon {
    fn name() -> &'static str {
        "lexicon"
    }
}

impl Lexicon {
    /// Creates a lexicon from dump files.
    ///
    /// # Arguments
    /// * `paths`: Paths to files where each line contains the word and its tag separated by a tab.
    ///   Lines may contain further columns in between (e. g. a lemma), the tag is always the last column.
    ///   If a word occurs multiple times the first tag is used.
    /// * `remove_paths`: Paths to files where each line is a line of the dumps which is to be ignored.
    ///
    /// Lines starting with `#` are comments.
    ///
    /// # Errors
    /// - If a file can not be read.
    /// - If a line has less than two columns.
    pub fn from_dumps<S1: AsRef<Path>, S2: AsRef<Path>>(
        paths: &[S1],
        remove_paths: &[S2],
    ) -> Result<Self, Error> {
        let mut lexicon = Lexicon::default();
        let mut disallowed: Vec<String> = Vec::new();

        for path in remove_paths {
            let reader = BufReader::new(File::open(path.as_ref())?);

            for line in reader.lines() {
                let line = line?;
                if line.starts_with('#') {
                    continue;
                }

                disallowed.push(line);
            }
        }

        for path in paths {
            let reader = BufReader::new(File::open(path.as_ref())?);

            for (i, line) in reader.lines().enumerate() {
                let line = line?;
                if line.starts_with('#') || line.trim().is_empty() {
                    continue;
                }

                if disallowed.contains(&line) {
                    continue;
                }

                let parts: Vec<_> = line.split('\t').collect();
                if parts.len() < 2 || parts[0].is_empty() {
                    return Err(Error::MalformedLexicon {
                        line: i + 1,
                        content: line.clone(),
                    });
                }

                lexicon
                    .tags
                    .entry(parts[0].to_string())
                    .or_insert_with(|| parts[parts.len() - 1].to_string());
            }
        }

        Ok(lexicon)
    }

    /// Sets the tag assigned to words which are not in the lexicon.
    pub fn with_unknown_tag<S: Into<String>>(mut self, tag: S) -> Self {
        self.unknown_tag = tag.into();
        self
    }

    /// Adds a word. Overwrites the existing tag, if any.
    pub fn insert<S1: Into<String>, S2: Into<String>>(&mut self, word: S1, tag: S2) {
        self.tags.insert(word.into(), tag.into());
    }

    /// Gets the tag of a word if it is in the lexicon.
    pub fn get(&self, word: &str) -> Option<&str> {
        self.tags
            .get(word)
            .or_else(|| self.tags.get(&word.to_lowercase()))
            .map(|tag| tag.as_str())
    }

    pub fn len(&self) -> usize {
        self.tags.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tags.is_empty()
    }
}

impl Tag for Lexicon {
    fn tag(&self, text: &str) -> Option<TaggedSentence> {
        Some(
            utils::split_tokens(text)
                .into_iter()
                .map(|word| {
                    let tag = self.get(word).unwrap_or_else(|| self.unknown_tag.as_str());
                    Token::new(word, tag)
                })
                .collect(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn pre_tagged() {
        let tagger = PreTagged::default();

        assert_eq!(
            tagger.tag("o/DET carro/N  bom/ADJ\n"),
            Some(vec![
                Token::new("o", "DET"),
                Token::new("carro", "N"),
                Token::new("bom", "ADJ"),
            ])
        );
        assert_eq!(
            tagger.tag("24/7/N"),
            Some(vec![Token::new("24/7", "N")])
        );
        assert_eq!(tagger.tag(""), Some(Vec::new()));
        assert_eq!(tagger.tag("carro/N bom"), None);
        assert_eq!(tagger.tag("carro/"), None);

        assert_eq!(
            PreTagged::new('_').tag("carro_N"),
            Some(vec![Token::new("carro", "N")])
        );
    }

    #[test]
    fn absent_tagger() {
        let tagger: Option<PreTagged> = None;
        assert_eq!(tagger.tag("carro/N bom/ADJ"), None);

        let tagger = Some(PreTagged::default());
        assert!(tagger.tag("carro/N bom/ADJ").is_some());
    }

    #[test]
    fn closure_tagger() {
        let tagger = from_fn(|text| {
            Some(
                text.split_whitespace()
                    .map(|word| Token::new(word, "N"))
                    .collect(),
            )
        });

        assert_eq!(tagger.tag("a b").map(|x| x.len()), Some(2));
        let boxed: Box<dyn Tag> = Box::new(tagger);
        assert_eq!(boxed.tag("a").map(|x| x.len()), Some(1));
    }

    #[test]
    fn lexicon_lookup() {
        let mut lexicon = Lexicon::default().with_unknown_tag("X");
        lexicon.insert("carro", "N");
        lexicon.insert("bom", "ADJ");

        assert_eq!(lexicon.get("Carro"), Some("N"));
        assert_eq!(lexicon.get("motor"), None);
        assert_eq!(
            lexicon.tag("Carro bom, motor!"),
            Some(vec![
                Token::new("Carro", "N"),
                Token::new("bom", "ADJ"),
                Token::new(",", "X"),
                Token::new("motor", "X"),
                Token::new("!", "X"),
            ])
        );
    }

    #[test]
    fn lexicon_from_dumps() -> Result<(), Error> {
        let dir = tempfile::tempdir()?;
        let dump = dir.path().join("output.dump");
        let removed = dir.path().join("removed.txt");

        let mut file = std::fs::File::create(&dump)?;
        writeln!(file, "# word\tlemma\ttag")?;
        writeln!(file, "carro\tcarro\tN")?;
        writeln!(file, "carro\tcarrar\tV")?;
        writeln!(file, "bom\tADJ")?;
        writeln!(file, "rodou\trodar\tV")?;
        let mut file = std::fs::File::create(&removed)?;
        writeln!(file, "rodou\trodar\tV")?;

        let lexicon = Lexicon::from_dumps(&[&dump], &[&removed])?;

        assert_eq!(lexicon.len(), 2);
        assert_eq!(lexicon.get("carro"), Some("N"));
        assert_eq!(lexicon.get("bom"), Some("ADJ"));
        assert_eq!(lexicon.get("rodou"), None);
        Ok(())
    }

    #[test]
    fn malformed_lexicon() -> Result<(), Error> {
        let dir = tempfile::tempdir()?;
        let dump = dir.path().join("output.dump");
        std::fs::write(&dump, "carro\tN\nbom\n")?;

        match Lexicon::from_dumps(&[&dump], &[] as &[&Path]) {
            Err(Error::MalformedLexicon { line, content }) => {
                assert_eq!(line, 2);
                assert_eq!(content, "bom");
            }
            x => panic!("expected malformed lexicon error, got {:?}", x),
        }
        Ok(())
    }

    #[test]
    fn missing_dump_is_an_error() {
        let result = Lexicon::from_dumps(&["does/not/exist.dump"], &[] as &[&str]);
        assert!(matches!(result, Err(Error::Io(_))));
    }
}
