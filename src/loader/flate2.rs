use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use flate2::read::GzDecoder;

use crate::loader::LineSource;
use crate::parser::LineParser;

pub struct GzFileLoader {
    filepath: PathBuf,
}

impl GzFileLoader {
    pub fn new<P>(filepath: P) -> Self
    where
        P: AsRef<Path>,
    {
        Self {
            filepath: PathBuf::from(filepath.as_ref()),
        }
    }
}

impl LineSource for GzFileLoader {
    type Iter = LineParser<BufReader<GzDecoder<File>>>;

    fn lines(&self) -> Result<Self::Iter> {
        let file = File::open(&self.filepath)
            .with_context(|| format!("failed to open {}", self.filepath.display()))?;
        let reader = GzDecoder::new(file);
        LineParser::new(BufReader::new(reader))
    }
}
