use serde::{Serialize, Serializer};

/// One finished story: the flattened question and answer ID sequences of all
/// its lines, in line order.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Story {
    pub questions: Vec<usize>,
    pub answers: Vec<usize>,
}

impl Story {
    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }
}

/// Serializes to the record shape the downstream readers expect: each
/// flattened sequence is wrapped in an extra singleton list layer, matching
/// the historical output format.
impl Serialize for Story {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        ([&self.questions], [&self.answers]).serialize(serializer)
    }
}

/// Groups assigned lines into stories.
///
/// Line IDs restart at 1 for each new story; any transition to an ID not
/// greater than the previous one is a boundary. `push` returns the finished
/// story when the incoming line opens a new one, and `finish` flushes the
/// trailing in-progress story at end of file.
#[derive(Debug, Default)]
pub struct Segmenter {
    former_id: u32,
    questions: Vec<Vec<usize>>,
    answers: Vec<Vec<usize>>,
}

impl Segmenter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Buffers one assigned line, returning the previous story if this line
    /// starts a new one.
    pub fn push(&mut self, id: u32, questions: Vec<usize>, answers: Vec<usize>) -> Option<Story> {
        let finished = if id > self.former_id {
            None
        } else {
            self.flush()
        };
        self.former_id = id;
        self.questions.push(questions);
        self.answers.push(answers);
        finished
    }

    /// Flushes the trailing in-progress story, if any.
    pub fn finish(mut self) -> Option<Story> {
        self.flush()
    }

    fn flush(&mut self) -> Option<Story> {
        if self.questions.is_empty() {
            return None;
        }
        let story = Story {
            questions: self.questions.drain(..).flatten().collect(),
            answers: self.answers.drain(..).flatten().collect(),
        };
        Some(story)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn line(ids: &[usize]) -> (Vec<usize>, Vec<usize>) {
        (ids.to_vec(), vec![0; ids.len()])
    }

    #[test]
    fn non_increasing_id_starts_a_new_story() {
        let mut segmenter = Segmenter::new();
        let mut stories = Vec::new();
        for (id, toks) in [(1, &[2, 3][..]), (2, &[4][..]), (3, &[5][..]), (1, &[6][..]), (2, &[7][..])] {
            let (q, a) = line(toks);
            if let Some(story) = segmenter.push(id, q, a) {
                stories.push(story);
            }
        }
        if let Some(story) = segmenter.finish() {
            stories.push(story);
        }
        assert_eq!(stories.len(), 2);
        assert_eq!(stories[0].questions, [2, 3, 4, 5]);
        assert_eq!(stories[1].questions, [6, 7]);
    }

    #[test]
    fn equal_id_is_also_a_boundary() {
        let mut segmenter = Segmenter::new();
        let (q, a) = line(&[2]);
        assert!(segmenter.push(5, q, a).is_none());
        let (q, a) = line(&[3]);
        assert!(segmenter.push(5, q, a).is_some());
    }

    #[test]
    fn finish_on_empty_segmenter_is_none() {
        assert!(Segmenter::new().finish().is_none());
    }

    #[test]
    fn record_shape_keeps_the_singleton_layer() {
        let story = Story {
            questions: vec![2, 3],
            answers: vec![0, 0],
        };
        assert_eq!(
            serde_json::to_string(&story).unwrap(),
            "[[[2,3]],[[0,0]]]"
        );
    }
}
