use std::collections::HashMap;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use anyhow::{Context, Result};
use serde_json::{Map, Value};

use crate::{ANSWER_BLANK, QUESTION_BLANK};

/// Append-only mapping from tokens to unique IDs, assigned in first-sight
/// order. Seeded with the two placeholder tokens, so the answer blank is
/// always ID 0 and the question blank always ID 1.
///
/// One vocabulary lives for a whole conversion run and accumulates across
/// every input file, keeping IDs consistent between tasks.
#[derive(Debug)]
pub struct Vocabulary {
    token_to_id: HashMap<String, usize>,
    id_to_token: Vec<String>,
    answer_blank_id: usize,
    question_blank_id: usize,
}

impl Default for Vocabulary {
    fn default() -> Self {
        Self::new()
    }
}

impl Vocabulary {
    pub fn new() -> Self {
        let mut vocab = Self {
            token_to_id: HashMap::new(),
            id_to_token: Vec::new(),
            answer_blank_id: 0,
            question_blank_id: 0,
        };
        vocab.answer_blank_id = vocab.resolve(ANSWER_BLANK);
        vocab.question_blank_id = vocab.resolve(QUESTION_BLANK);
        vocab
    }

    /// Returns the token's ID, assigning the next sequential one on first
    /// sight. Any string is a valid token.
    pub fn resolve(&mut self, token: &str) -> usize {
        if let Some(&id) = self.token_to_id.get(token) {
            return id;
        }
        let id = self.id_to_token.len();
        self.token_to_id.insert(token.to_string(), id);
        self.id_to_token.push(token.to_string());
        id
    }

    /// Looks up a token without inserting it.
    pub fn get(&self, token: &str) -> Option<usize> {
        self.token_to_id.get(token).copied()
    }

    /// Gets the token for an ID, if assigned.
    pub fn token(&self, id: usize) -> Option<&str> {
        self.id_to_token.get(id).map(|s| s.as_str())
    }

    pub fn len(&self) -> usize {
        self.id_to_token.len()
    }

    pub fn is_empty(&self) -> bool {
        self.id_to_token.is_empty()
    }

    /// Walks a tokenized line once and produces the parallel question/answer
    /// ID sequences, resolving every token against this vocabulary.
    ///
    /// Positions up to and including the `?` token fill the question sequence
    /// with real IDs and the answer sequence with the answer blank; positions
    /// after the `?` swap roles, so exactly one slot per position carries a
    /// real token.
    pub fn assign(&mut self, tokens: &[String]) -> (Vec<usize>, Vec<usize>) {
        let mut questions = Vec::with_capacity(tokens.len());
        let mut answers = Vec::with_capacity(tokens.len());
        let mut past_question = false;
        for token in tokens {
            let id = self.resolve(token);
            if past_question {
                questions.push(self.question_blank_id);
                answers.push(id);
            } else {
                questions.push(id);
                answers.push(self.answer_blank_id);
                if token == "?" {
                    past_question = true;
                }
            }
        }
        (questions, answers)
    }

    /// Builds the reverse mapping (stringified ID -> token) as a JSON object,
    /// in ID order. This is what lets a human read model outputs back.
    pub fn to_reversed_json(&self) -> Value {
        let mut map = Map::with_capacity(self.id_to_token.len());
        for (id, token) in self.id_to_token.iter().enumerate() {
            map.insert(id.to_string(), Value::String(token.clone()));
        }
        Value::Object(map)
    }

    /// Persists the reverse mapping to `path` as JSON.
    pub fn save_reversed<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let path = path.as_ref();
        let mut writer = BufWriter::new(
            File::create(path)
                .with_context(|| format!("failed to create {}", path.display()))?,
        );
        serde_json::to_writer(&mut writer, &self.to_reversed_json())?;
        writer.flush()?;
        Ok(())
    }
}
