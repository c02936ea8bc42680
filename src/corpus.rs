//! Extraction of opinions from a whole corpus and reading / writing of the files around it.

use fs_err::File;
use log::{debug, info};
use serde::{Deserialize, Serialize};
use std::{
    io::{BufRead, BufReader, BufWriter, Write},
    path::Path,
    time::Instant,
};

use crate::{
    components::Component,
    matcher::SequenceMatcher,
    normalize::TagNormalizer,
    tagger::Tag,
    trie::PatternTrie,
    types::*,
    Error,
};

#[allow(unused_imports)]
use crate::utils::parallelism::*;

/// Extracts opinions using a [PatternTrie] and a [TagNormalizer].
///
/// The default extractor accepts `N ADJ` and `N V ADJ` and folds `NOUN`, `NPROP` and `VERB` onto `N` and `V`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Extractor {
    trie: PatternTrie,
    normalizer: TagNormalizer,
}

impl Component for Extractor {
    fn name() -> &'static str {
        "extractor"
    }
}

impl Extractor {
    pub fn new(trie: PatternTrie, normalizer: TagNormalizer) -> Self {
        Extractor { trie, normalizer }
    }

    pub fn trie(&self) -> &PatternTrie {
        &self.trie
    }

    pub fn normalizer(&self) -> &TagNormalizer {
        &self.normalizer
    }

    pub fn matcher(&self) -> SequenceMatcher<'_> {
        SequenceMatcher::new(&self.trie, &self.normalizer)
    }

    /// Extracts the opinions of one tagged sentence.
    pub fn extract(&self, sentence: &[Token]) -> Vec<Opinion> {
        self.matcher().extract(sentence)
    }

    /// Extracts the opinions of many tagged sentences, in sentence order.
    /// Runs in parallel if the `parallel` feature is enabled.
    pub fn extract_all(&self, sentences: &[TaggedSentence]) -> Vec<Opinion> {
        let matcher = self.matcher();

        let opinions: Vec<Vec<Opinion>> = sentences
            .maybe_par_iter()
            .map(|sentence| matcher.extract(sentence))
            .collect();

        opinions.into_iter().flatten().collect()
    }

    /// Tags each review with `tagger` and extracts the opinions, in review order.
    ///
    /// A review the tagger can not tag contributes no opinions.
    pub fn process<S, T>(&self, reviews: &[S], tagger: &T) -> Vec<Opinion>
    where
        S: AsRef<str>,
        T: Tag + ?Sized,
    {
        let start = Instant::now();
        let matcher = self.matcher();
        let mut opinions = Vec::new();

        for (i, review) in reviews.iter().enumerate() {
            match tagger.tag(review.as_ref()) {
                Some(tokens) => opinions.extend(matcher.extract(&tokens)),
                None => debug!("review {} could not be tagged, skipping", i),
            }
        }

        info!(
            "extracted {} opinions from {} reviews in {:.3}s",
            opinions.len(),
            reviews.len(),
            start.elapsed().as_secs_f64()
        );

        opinions
    }
}

/// Reads a file with one review per line.
pub fn read_reviews<P: AsRef<Path>>(p: P) -> Result<Vec<String>, Error> {
    let reader = BufReader::new(File::open(p.as_ref())?);

    Ok(reader.lines().collect::<Result<_, _>>()?)
}

/// Writes one opinion per line.
pub fn write_opinions<W: Write, S: AsRef<str>>(mut writer: W, opinions: &[S]) -> Result<(), Error> {
    for opinion in opinions {
        writeln!(writer, "{}", opinion.as_ref())?;
    }

    writer.flush()?;
    Ok(())
}

/// Writes one opinion per line to a file, replacing the file if it exists.
pub fn save_opinions<P: AsRef<Path>, S: AsRef<str>>(p: P, opinions: &[S]) -> Result<(), Error> {
    let writer = BufWriter::new(File::create(p.as_ref())?);
    write_opinions(writer, opinions)
}
