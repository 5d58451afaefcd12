use upitnik_types::{Prediction, Question};

/// Render model for one section of the wizard.
///
/// Replaces the displayed content entirely — there are no partial updates.
#[derive(Debug, Clone, PartialEq)]
pub struct SectionView {
    /// Zero-based index of this section.
    pub index: usize,

    /// Total number of sections (for a "2/3" progress indicator).
    pub total: usize,

    /// The fields to display, in question order.
    pub fields: Vec<FieldView>,

    /// Whether a back control is offered (every section but the first).
    pub has_back: bool,

    /// Whether this is the last section (submit instead of next).
    pub is_last: bool,
}

impl SectionView {
    /// One-based progress indicator, e.g. `"2/3"`.
    pub fn progress(&self) -> String {
        format!("{}/{}", self.index + 1, self.total)
    }
}

/// Render model for a single field.
#[derive(Debug, Clone, PartialEq)]
pub struct FieldView {
    /// The question definition.
    pub question: Question,

    /// Pre-filled value: the stored answer, or empty if unanswered.
    pub value: String,

    /// Whether this field failed the most recent validation pass.
    pub invalid: bool,
}

/// Render model for the result screen.
///
/// Offers exactly one control: restart (plus leaving the wizard).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ResultView {
    pub prediction: Prediction,
}

impl ResultView {
    pub fn new(prediction: Prediction) -> Self {
        Self { prediction }
    }

    /// The probability formatted for display, e.g. `"73.46%"`.
    pub fn formatted(&self) -> String {
        self.prediction.as_percent()
    }
}
