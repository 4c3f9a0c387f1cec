use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use anyhow::{ensure, Context, Result};
use log::{debug, info};

use crate::loader;
use crate::story::{Segmenter, Story};
use crate::vocabulary::Vocabulary;

/// Totals for one conversion run, for logging and tests.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ConvertSummary {
    pub files: usize,
    pub stories: usize,
    pub vocab_size: usize,
}

/// Converts every source file into line-delimited JSON story records under
/// `target_dir`, then persists the run's reverse vocabulary as `dict.json`.
///
/// One vocabulary is shared across all files, so IDs are consistent within
/// the run. The trailing in-progress story of each file is flushed, so no
/// file loses its final story.
pub fn convert(source_files: &[PathBuf], target_dir: &Path) -> Result<ConvertSummary> {
    ensure!(!source_files.is_empty(), "no source files given");
    fs::create_dir_all(target_dir)
        .with_context(|| format!("failed to create {}", target_dir.display()))?;

    let mut vocab = Vocabulary::new();
    let mut summary = ConvertSummary::default();

    for path in source_files {
        let stories = convert_file(path, &mut vocab)
            .with_context(|| format!("failed to convert {}", path.display()))?;
        let out_path = target_dir.join(output_name(path));
        write_stories(&stories, &out_path)?;
        info!(
            "{} -> {} ({} stories)",
            path.display(),
            out_path.display(),
            stories.len()
        );
        summary.files += 1;
        summary.stories += stories.len();
    }

    let dict_path = target_dir.join("dict.json");
    vocab.save_reversed(&dict_path)?;
    summary.vocab_size = vocab.len();
    info!(
        "wrote {} ({} tokens) after {} files",
        dict_path.display(),
        vocab.len(),
        summary.files
    );
    Ok(summary)
}

/// Reads one source file and segments its lines into finished stories,
/// growing `vocab` as a side effect.
pub fn convert_file(path: &Path, vocab: &mut Vocabulary) -> Result<Vec<Story>> {
    let mut segmenter = Segmenter::new();
    let mut stories = Vec::new();

    for line in loader::open(path)? {
        let line = line?;
        let (questions, answers) = vocab.assign(&line.tokens);
        if let Some(story) = segmenter.push(line.id, questions, answers) {
            debug!("story with {} tokens", story.questions.len());
            stories.push(story);
        }
    }
    if let Some(story) = segmenter.finish() {
        stories.push(story);
    }
    Ok(stories)
}

/// Writes one JSON record per story, newline-terminated.
fn write_stories(stories: &[Story], path: &Path) -> Result<()> {
    let mut writer = BufWriter::new(
        File::create(path).with_context(|| format!("failed to create {}", path.display()))?,
    );
    for story in stories {
        serde_json::to_writer(&mut writer, story)?;
        writer.write_all(b"\n")?;
    }
    writer.flush()?;
    Ok(())
}

/// Output file name for a source path: base name without extensions, with
/// `.json` appended. A trailing `.gz` is stripped before the data extension.
fn output_name(path: &Path) -> String {
    let mut name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();
    if let Some(stripped) = name.strip_suffix(".gz") {
        name = stripped.to_string();
    }
    match name.rsplit_once('.') {
        Some((stem, _)) => format!("{stem}.json"),
        None => format!("{name}.json"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::loader::{LineSource, TextLoader};

    fn segment(text: &str, vocab: &mut Vocabulary) -> Vec<Story> {
        let mut segmenter = Segmenter::new();
        let mut stories = Vec::new();
        for line in TextLoader::new(text.as_bytes()).lines().unwrap() {
            let line = line.unwrap();
            let (q, a) = vocab.assign(&line.tokens);
            if let Some(story) = segmenter.push(line.id, q, a) {
                stories.push(story);
            }
        }
        if let Some(story) = segmenter.finish() {
            stories.push(story);
        }
        stories
    }

    #[test]
    fn output_names() {
        assert_eq!(output_name(Path::new("data/qa1_train.txt")), "qa1_train.json");
        assert_eq!(output_name(Path::new("qa1_train.txt.gz")), "qa1_train.json");
        assert_eq!(output_name(Path::new("nodot")), "nodot.json");
    }

    #[test]
    fn two_stories_from_restarting_ids() {
        let text = "\
1 Mary moved to the bathroom.
2 Where is Mary?\tbathroom\t1
1 John went to the kitchen.
2 Where is John?\tkitchen\t1
";
        let mut vocab = Vocabulary::new();
        let stories = segment(text, &mut vocab);
        assert_eq!(stories.len(), 2);
        for story in &stories {
            assert_eq!(story.questions.len(), story.answers.len());
        }
    }

    #[test]
    fn trailing_story_is_flushed() {
        let text = "1 Mary moved to the bathroom.\n";
        let mut vocab = Vocabulary::new();
        let stories = segment(text, &mut vocab);
        assert_eq!(stories.len(), 1);
    }

    #[test]
    fn empty_source_list_is_an_error() {
        assert!(convert(&[], Path::new("/tmp")).is_err());
    }
}
