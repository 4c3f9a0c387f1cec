pub mod converter;
pub mod loader;
pub mod parser;
pub mod story;
pub mod token;
pub mod vocabulary;

pub use converter::{convert, convert_file, ConvertSummary};
pub use story::{Segmenter, Story};
pub use token::{tokenize, TokenizedLine};
pub use vocabulary::Vocabulary;

/// Reserved token filling the answer sequence while still inside the
/// question part of a line. Always vocabulary ID 0.
pub const ANSWER_BLANK: &str = "_";

/// Reserved token filling the question sequence after the `?`. Always
/// vocabulary ID 1.
pub const QUESTION_BLANK: &str = "-";
