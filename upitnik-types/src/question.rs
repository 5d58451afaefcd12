/// A single question in a questionnaire.
#[derive(Debug, Clone, PartialEq)]
pub struct Question {
    /// The key under which this question's answer is stored and submitted.
    id: String,

    /// The label shown to the user.
    label: String,

    /// Optional hint text (shown for empty inputs and placeholder options).
    placeholder: Option<String>,

    /// The kind of question (determines input type and validation).
    kind: QuestionKind,
}

impl Question {
    /// Create a new question.
    pub fn new(id: impl Into<String>, label: impl Into<String>, kind: QuestionKind) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
            placeholder: None,
            kind,
        }
    }

    /// Set the placeholder hint text.
    pub fn with_placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.placeholder = Some(placeholder.into());
        self
    }

    /// Get the question id.
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Get the label shown to the user.
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Get the placeholder hint, if any.
    pub fn placeholder(&self) -> Option<&str> {
        self.placeholder.as_deref()
    }

    /// Get the question kind.
    pub fn kind(&self) -> &QuestionKind {
        &self.kind
    }
}

/// The kind of question, determining input type and validation.
///
/// This is a closed set: every backend dispatches exhaustively over it.
#[derive(Debug, Clone, PartialEq)]
pub enum QuestionKind {
    /// Numeric input with inclusive bounds.
    Number(NumberQuestion),

    /// Closed single choice from an ordered list of options.
    Select(SelectQuestion),
}

impl QuestionKind {
    /// Check if this is a numeric question.
    pub fn is_number(&self) -> bool {
        matches!(self, Self::Number(_))
    }

    /// Check if this is a select question.
    pub fn is_select(&self) -> bool {
        matches!(self, Self::Select(_))
    }
}

/// Configuration for a numeric input question.
#[derive(Debug, Clone, PartialEq)]
pub struct NumberQuestion {
    /// Inclusive minimum value.
    pub min: f64,

    /// Inclusive maximum value.
    pub max: f64,
}

impl NumberQuestion {
    /// Create a numeric question with inclusive bounds.
    pub fn with_bounds(min: f64, max: f64) -> Self {
        Self { min, max }
    }
}

/// Configuration for a closed-choice question.
///
/// The first option is the empty placeholder choice; leaving it selected
/// fails validation.
#[derive(Debug, Clone, PartialEq)]
pub struct SelectQuestion {
    /// The available options, in presentation order.
    pub options: Vec<String>,
}

impl SelectQuestion {
    /// Create a select question from the given options.
    ///
    /// The options are used verbatim — the first one is expected to be the
    /// empty placeholder choice.
    pub fn new(options: impl IntoIterator<Item = impl Into<String>>) -> Self {
        Self {
            options: options.into_iter().map(Into::into).collect(),
        }
    }

    /// Convenience constructor prepending the empty placeholder choice.
    pub fn with_placeholder_option(options: impl IntoIterator<Item = impl Into<String>>) -> Self {
        let mut all = vec![String::new()];
        all.extend(options.into_iter().map(Into::into));
        Self { options: all }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accessors() {
        let q = Question::new(
            "age",
            "Godine",
            QuestionKind::Number(NumberQuestion::with_bounds(1.0, 18.0)),
        )
        .with_placeholder("Unesite godine");

        assert_eq!(q.id(), "age");
        assert_eq!(q.label(), "Godine");
        assert_eq!(q.placeholder(), Some("Unesite godine"));
        assert!(q.kind().is_number());
        assert!(!q.kind().is_select());
    }

    #[test]
    fn kind_predicates_distinguish_selects() {
        let q = Question::new(
            "gender",
            "Spol",
            QuestionKind::Select(SelectQuestion::with_placeholder_option(["Muško", "Žensko"])),
        );
        assert!(q.kind().is_select());
        assert!(!q.kind().is_number());
    }

    #[test]
    fn placeholder_option_comes_first() {
        let select = SelectQuestion::with_placeholder_option(["Da", "Ne"]);
        assert_eq!(select.options, vec!["", "Da", "Ne"]);
    }
}
