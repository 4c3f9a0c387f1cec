use std::io::BufRead;

use anyhow::{Context, Result};

use crate::token::{tokenize, TokenizedLine};

/// Fallible iterator turning a buffered reader over a bAbI file into
/// tokenized lines, tracking line numbers for error context.
pub struct LineParser<R> {
    reader: R,
    lineno: usize,
}

impl<R: BufRead> LineParser<R> {
    pub fn new(reader: R) -> Result<Self> {
        Ok(Self { reader, lineno: 0 })
    }
}

impl<R: BufRead> Iterator for LineParser<R> {
    type Item = Result<TokenizedLine>;

    fn next(&mut self) -> Option<Self::Item> {
        let mut buf = String::new();
        match self.reader.read_line(&mut buf) {
            Ok(0) => None,
            Ok(_) => {
                self.lineno += 1;
                Some(tokenize(&buf).with_context(|| format!("line {}", self.lineno)))
            }
            Err(e) => Some(Err(e.into())),
        }
    }
}
