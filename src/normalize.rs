//! Folding of tagger-specific part-of-speech labels onto the canonical tag alphabet.

use indexmap::IndexMap;
use lazy_static::lazy_static;
use serde::{Deserialize, Serialize};

lazy_static! {
    static ref DEFAULT_CONVERSIONS: IndexMap<String, String> = [
        ("NOUN", "N"),
        ("NPROP", "N"),
        ("VERB", "V"),
    ]
    .iter()
    .map(|(from, to)| (from.to_string(), to.to_string()))
    .collect();
}

/// Maps raw tags to canonical tags with a fixed substitution table.
///
/// Tags without an entry are returned unchanged, so taggers whose tagset already is
/// the canonical one (`N`, `V`, `ADJ`, ...) pass straight through while e. g. universal
/// POS tags (`NOUN`, `VERB`) get folded onto it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TagNormalizer {
    conversions: IndexMap<String, String>,
}

impl Default for TagNormalizer {
    /// The table with `NOUN -> N`, `NPROP -> N` and `VERB -> V`.
    fn default() -> Self {
        TagNormalizer {
            conversions: DEFAULT_CONVERSIONS.clone(),
        }
    }
}

impl TagNormalizer {
    /// Creates a normalizer from `(raw, canonical)` pairs. Later pairs overwrite earlier ones.
    pub fn new<I, S1, S2>(conversions: I) -> Self
    where
        I: IntoIterator<Item = (S1, S2)>,
        S1: Into<String>,
        S2: Into<String>,
    {
        TagNormalizer {
            conversions: conversions
                .into_iter()
                .map(|(from, to)| (from.into(), to.into()))
                .collect(),
        }
    }

    /// A normalizer which returns every tag unchanged.
    pub fn identity() -> Self {
        TagNormalizer {
            conversions: IndexMap::new(),
        }
    }

    /// Returns the canonical tag for `raw_tag`. Never fails.
    pub fn normalize<'a>(&'a self, raw_tag: &'a str) -> &'a str {
        self.conversions
            .get(raw_tag)
            .map_or(raw_tag, |canonical| canonical.as_str())
    }

    pub fn conversions(&self) -> &IndexMap<String, String> {
        &self.conversions
    }
}
