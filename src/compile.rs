//! Builds an [Extractor] from a JSON configuration file.
//!
//! ```json
//! {
//!     "max_depth": 3,
//!     "patterns": [["N", "ADJ"], ["N", "V", "ADJ"]],
//!     "conversions": {"NOUN": "N", "NPROP": "N", "VERB": "V"}
//! }
//! ```
//!
//! All fields are optional and default to the values of [Extractor::default].

use fs_err::File;
use indexmap::IndexMap;
use log::info;
use serde::{Deserialize, Serialize};
use std::{
    io::{BufReader, Read},
    path::Path,
};
use thiserror::Error;

use crate::{normalize::TagNormalizer, trie::PatternTrie, Extractor};

#[derive(Error, Debug)]
#[allow(missing_docs)]
pub enum Error {
    #[error(transparent)]
    Io(#[from] std::io::Error),
    #[error(transparent)]
    Json(#[from] serde_json::Error),
    #[error(transparent)]
    Trie(#[from] crate::trie::Error),
}

/// Configuration of an [Extractor].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExtractorConfig {
    /// Maximum number of tokens one match may consume.
    /// Defaults to the length of the longest pattern.
    #[serde(default)]
    pub max_depth: Option<usize>,
    /// Patterns of canonical tags.
    #[serde(default = "default_patterns")]
    pub patterns: Vec<Vec<String>>,
    /// Mapping from raw tags to canonical tags.
    #[serde(default = "default_conversions")]
    pub conversions: IndexMap<String, String>,
}

fn default_patterns() -> Vec<Vec<String>> {
    PatternTrie::default().patterns()
}

fn default_conversions() -> IndexMap<String, String> {
    TagNormalizer::default().conversions().clone()
}

impl Default for ExtractorConfig {
    fn default() -> Self {
        ExtractorConfig {
            max_depth: None,
            patterns: default_patterns(),
            conversions: default_conversions(),
        }
    }
}

impl ExtractorConfig {
    pub fn from_reader<R: Read>(reader: R) -> Result<Self, Error> {
        Ok(serde_json::from_reader(reader)?)
    }

    pub fn from_path<P: AsRef<Path>>(p: P) -> Result<Self, Error> {
        Self::from_reader(BufReader::new(File::open(p.as_ref())?))
    }

    /// # Errors
    /// If the patterns do not form a valid [PatternTrie].
    pub fn build(self) -> Result<Extractor, Error> {
        let mut builder = self
            .patterns
            .into_iter()
            .fold(PatternTrie::builder(), |builder, pattern| {
                builder.pattern(pattern)
            });

        if let Some(max_depth) = self.max_depth {
            builder = builder.max_depth(max_depth);
        }

        let trie = builder.build()?;
        info!(
            "built pattern trie with {} patterns, max depth {}",
            trie.patterns().len(),
            trie.max_depth()
        );

        Ok(Extractor::new(trie, TagNormalizer::new(self.conversions)))
    }
}

/// Reads the configuration at `p` and builds an [Extractor] from it.
pub fn compile<P: AsRef<Path>>(p: P) -> Result<Extractor, Error> {
    ExtractorConfig::from_path(p)?.build()
}
