//! Binary (de)serialization of the building blocks of an [Extractor][crate::Extractor].

use std::{
    io::{BufReader, BufWriter, Read, Write},
    path::Path,
};

use fs_err::File;
use log::debug;
use serde::{de::DeserializeOwned, Serialize};

use crate::{normalize::TagNormalizer, trie::PatternTrie};

pub trait Component: Serialize + DeserializeOwned {
    fn name() -> &'static str;

    /// Loads the component from a binary file.
    fn new<P: AsRef<Path>>(p: P) -> Result<Self, crate::Error> {
        debug!("loading {} from {}", Self::name(), p.as_ref().display());
        let reader = BufReader::new(File::open(p.as_ref())?);
        Self::from_reader(reader)
    }

    fn from_reader<R: Read>(reader: R) -> Result<Self, crate::Error> {
        Ok(bincode::deserialize_from(reader)?)
    }

    fn to_writer<W: Write>(&self, writer: W) -> Result<(), crate::Error> {
        Ok(bincode::serialize_into(writer, self)?)
    }

    /// Stores the component in a binary file, replacing the file if it exists.
    fn save<P: AsRef<Path>>(&self, p: P) -> Result<(), crate::Error> {
        debug!("saving {} to {}", Self::name(), p.as_ref().display());
        let mut writer = BufWriter::new(File::create(p.as_ref())?);
        self.to_writer(&mut writer)?;
        writer.flush()?;
        Ok(())
    }
}

impl Component for PatternTrie {
    fn name() -> &'static str {
        "pattern_trie"
    }
}

impl Component for TagNormalizer {
    fn name() -> &'static str {
        "tag_normalizer"
    }
}
