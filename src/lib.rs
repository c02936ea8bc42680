//! Mining of short opinion phrases from part-of-speech tagged text.
//! # Overview
//!
//! opinion_miner has the following core abstractions:
//! - A [TagNormalizer][normalize::TagNormalizer] folding tagger-specific labels onto a small canonical tag alphabet.
//! - A [PatternTrie][trie::PatternTrie] encoding the accepted tag sequences (by default `N ADJ` and `N V ADJ`).
//! - A [SequenceMatcher][matcher::SequenceMatcher] greedily scanning one tagged sentence for pattern matches.
//! - An [Extractor][corpus::Extractor] running the matcher over a whole corpus, with tagging delegated to anything
//!   implementing [Tag][tagger::Tag].
//!
//! # Examples
//!
//! Extract opinions from tagged sentences:
//!
//! ```
//! use opinion_miner::{types::Token, Extractor};
//!
//! let extractor = Extractor::default();
//!
//! let sentence = vec![
//!     Token::new("o", "DET"),
//!     Token::new("carro", "NOUN"),
//!     Token::new("rodou", "VERB"),
//!     Token::new("bem", "ADJ"),
//! ];
//!
//! assert_eq!(extractor.extract(&sentence), vec!["carro rodou bem"]);
//! ```
//!
//! Extract opinions from raw reviews with a tagger:
//!
//! ```
//! use opinion_miner::{tagger::PreTagged, Extractor};
//!
//! let extractor = Extractor::default();
//! let reviews = ["o/DET carro/N bom/ADJ", "bateria/N durou/V pouco/ADJ"];
//!
//! let opinions = extractor.process(&reviews, &PreTagged::default());
//! assert_eq!(opinions, vec!["carro bom", "bateria durou pouco"]);
//! ```

use std::io;

use thiserror::Error;

#[cfg(feature = "compile")]
pub mod compile;
pub mod components;
pub mod corpus;
pub mod matcher;
pub mod normalize;
pub mod tagger;
pub mod trie;
pub mod types;
pub(crate) mod utils;

pub use corpus::Extractor;
pub use normalize::TagNormalizer;
pub use trie::PatternTrie;

#[derive(Error, Debug)]
#[allow(missing_docs)]
pub enum Error {
    #[error(transparent)]
    Io(#[from] io::Error),
    /// (De)serialization error. Can have occured during deserialization or during serialization.
    #[error(transparent)]
    Serialization(#[from] bincode::Error),
    #[error(transparent)]
    Trie(#[from] trie::Error),
    #[error("malformed lexicon line {line}: {content:?}")]
    MalformedLexicon { line: usize, content: String },
}
