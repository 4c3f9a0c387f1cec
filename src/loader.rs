mod flate2;
mod plain;

use std::path::Path;

use anyhow::Result;

use crate::token::TokenizedLine;

pub use crate::loader::flate2::GzFileLoader;
pub use crate::loader::plain::{PlainFileLoader, TextLoader};

/// Source of tokenized bAbI lines.
pub trait LineSource {
    type Iter: Iterator<Item = Result<TokenizedLine>>;

    /// Returns an iterator over fallible tokenized lines.
    fn lines(&self) -> Result<Self::Iter>;
}

/// File formats supported.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DatasetFileFormat {
    Plain,
    Gzip,
}

impl DatasetFileFormat {
    /// Picks the format from the file extension; anything but `.gz` is read
    /// as plain text.
    pub fn from_path<P: AsRef<Path>>(path: P) -> Self {
        match path.as_ref().extension().and_then(|s| s.to_str()) {
            Some("gz") => Self::Gzip,
            _ => Self::Plain,
        }
    }
}

/// Convenience alias so callers can hold either loader's iterator.
pub type BoxedLineIter = Box<dyn Iterator<Item = Result<TokenizedLine>>>;

/// Opens `path` with the loader matching its extension.
pub fn open<P: AsRef<Path>>(path: P) -> Result<BoxedLineIter> {
    match DatasetFileFormat::from_path(&path) {
        DatasetFileFormat::Plain => Ok(Box::new(PlainFileLoader::new(path).lines()?)),
        DatasetFileFormat::Gzip => Ok(Box::new(GzFileLoader::new(path).lines()?)),
    }
}
