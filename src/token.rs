use anyhow::{anyhow, bail, Result};

/// One tokenized dataset line: the story-local line ID and the normalized
/// token sequence, with the line ID and any bare numerals already removed.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TokenizedLine {
    pub id: u32,
    pub tokens: Vec<String>,
}

/// Tokenizes one raw bAbI line.
///
/// The trailing `.` or `?` is separated into its own token, fields are split
/// on whitespace and commas, the leading numeric line ID is extracted, bare
/// numerals (supporting-fact references) are dropped, and the remaining words
/// are lowercased with single-letter compass abbreviations expanded.
///
/// ```
/// use babiprep::token::tokenize;
///
/// let line = tokenize("6 Where is Mary?\tbedroom\t2").unwrap();
/// assert_eq!(line.id, 6);
/// assert_eq!(line.tokens, ["where", "is", "mary", "?", "bedroom"]);
/// ```
pub fn tokenize(line: &str) -> Result<TokenizedLine> {
    if line.trim().is_empty() {
        bail!("empty input line");
    }

    // Separate the sentence-final symbol into its own field. At most one `.`
    // or `?` per line, scanned from the end.
    let line = match line.rfind(['.', '?']) {
        Some(pos) => format!("{} {}", &line[..pos], &line[pos..]),
        None => line.to_string(),
    };

    let mut fields = line.split(|c: char| c.is_whitespace() || c == ',');

    let id_field = fields.next().unwrap_or_default();
    let id: u32 = id_field
        .parse()
        .map_err(|_| anyhow!("line does not start with a numeric ID: {:?}", id_field))?;
    if id == 0 {
        bail!("line ID must be positive, got 0");
    }

    let tokens = fields
        .filter(|t| !t.is_empty() && !t.chars().all(|c| c.is_ascii_digit()))
        .map(normalize)
        .collect();

    Ok(TokenizedLine { id, tokens })
}

/// Lowercases a token, expanding the compass abbreviations the path-finding
/// tasks use for direction answers.
fn normalize(token: &str) -> String {
    let token = token.to_lowercase();
    match token.as_str() {
        "s" => "south".to_string(),
        "n" => "north".to_string(),
        "e" => "east".to_string(),
        "w" => "west".to_string(),
        _ => token,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn statement_line() {
        let line = tokenize("1 Mary moved to the bathroom.").unwrap();
        assert_eq!(line.id, 1);
        assert_eq!(line.tokens, ["mary", "moved", "to", "the", "bathroom", "."]);
    }

    #[test]
    fn question_line_with_answer_and_fact_id() {
        let line = tokenize("15 Where is Daniel? \tkitchen\t10").unwrap();
        assert_eq!(line.id, 15);
        assert_eq!(line.tokens, ["where", "is", "daniel", "?", "kitchen"]);
    }

    #[test]
    fn compass_abbreviations_expand() {
        let line = tokenize("4 How do you go from the bedroom to the kitchen?\tn,w\t1 2").unwrap();
        assert_eq!(line.id, 4);
        assert_eq!(
            line.tokens,
            ["how", "do", "you", "go", "from", "the", "bedroom", "to", "the", "kitchen", "?",
             "north", "west"]
        );
    }

    #[test]
    fn numerals_are_never_tokens() {
        let line = tokenize("3 Sandra got the apple there.\t\t2 7").unwrap();
        assert!(line.tokens.iter().all(|t| t.parse::<u64>().is_err()));
    }

    #[test]
    fn no_terminal_symbol_is_fine() {
        let line = tokenize("2 John went home").unwrap();
        assert_eq!(line.tokens, ["john", "went", "home"]);
    }

    #[test]
    fn empty_line_is_an_error() {
        assert!(tokenize("").is_err());
        assert!(tokenize("   \t").is_err());
    }

    #[test]
    fn missing_id_is_an_error() {
        assert!(tokenize("Mary moved to the bathroom.").is_err());
        assert!(tokenize("0 Mary moved.").is_err());
    }
}
