use crate::Question;

/// A logical page of the wizard grouping related questions.
///
/// Sections are immutable once constructed and are presented one at a time,
/// in order.
#[derive(Debug, Clone, PartialEq)]
pub struct Section {
    /// The questions in this section, in presentation order.
    questions: Vec<Question>,
}

impl Section {
    /// Create a new section with the given questions.
    pub fn new(questions: Vec<Question>) -> Self {
        Self { questions }
    }

    /// Get the questions.
    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    /// Get the number of questions in this section.
    pub fn len(&self) -> usize {
        self.questions.len()
    }

    /// Check if the section has no questions.
    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }
}
