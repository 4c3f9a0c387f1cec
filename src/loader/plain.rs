use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

use crate::loader::LineSource;
use crate::parser::LineParser;

pub struct PlainFileLoader {
    filepath: PathBuf,
}

impl PlainFileLoader {
    pub fn new<P>(filepath: P) -> Self
    where
        P: AsRef<Path>,
    {
        Self {
            filepath: PathBuf::from(filepath.as_ref()),
        }
    }
}

impl LineSource for PlainFileLoader {
    type Iter = LineParser<BufReader<File>>;

    fn lines(&self) -> Result<Self::Iter> {
        let file = File::open(&self.filepath)
            .with_context(|| format!("failed to open {}", self.filepath.display()))?;
        LineParser::new(BufReader::new(file))
    }
}

pub struct TextLoader<'a> {
    text: &'a [u8],
}

impl<'a> TextLoader<'a> {
    pub const fn new(text: &'a [u8]) -> Self {
        Self { text }
    }
}

impl<'a> LineSource for TextLoader<'a> {
    type Iter = LineParser<&'a [u8]>;

    fn lines(&self) -> Result<Self::Iter> {
        LineParser::new(self.text)
    }
}
