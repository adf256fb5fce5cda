/// Answers of one section traversal, keyed by question index.
///
/// Keys are always exactly `0..len()`: answers are appended at the cursor and only the last one
/// can be taken back.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AnswerSet {
    answers: Vec<String>,
}

impl AnswerSet {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.answers.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.answers.is_empty()
    }

    #[must_use]
    pub fn get(&self, index: usize) -> Option<&str> {
        self.answers.get(index).map(String::as_str)
    }

    pub fn iter(&self) -> impl ExactSizeIterator<Item = (usize, &str)> {
        self.answers.iter().map(String::as_str).enumerate()
    }

    pub(crate) fn push(&mut self, token: String) {
        self.answers.push(token);
    }

    pub(crate) fn pop(&mut self) -> Option<String> {
        self.answers.pop()
    }
}

impl<S: Into<String>> FromIterator<S> for AnswerSet {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self {
            answers: iter.into_iter().map(Into::into).collect(),
        }
    }
}
