use std::collections::BTreeSet;

use upitnik_types::{Answers, Section};

use crate::backend::SectionEntries;
use crate::view::{FieldView, SectionView};

/// The wizard state machine: sections, current position, accumulated answers.
///
/// All mutation goes through the documented operations — there is no other
/// way to move the position or touch the answers.
#[derive(Debug, Clone)]
pub struct FormWizard {
    sections: Vec<Section>,
    current: usize,
    answers: Answers,
    /// Question ids that failed the most recent validation pass.
    invalid: BTreeSet<String>,
}

impl FormWizard {
    /// Create a wizard positioned on the first section with no answers.
    ///
    /// # Panics
    ///
    /// Panics if `sections` is empty — a wizard needs at least one section.
    pub fn new(sections: Vec<Section>) -> Self {
        assert!(!sections.is_empty(), "a wizard needs at least one section");
        Self {
            sections,
            current: 0,
            answers: Answers::new(),
            invalid: BTreeSet::new(),
        }
    }

    /// Get the index of the current section.
    pub fn current_index(&self) -> usize {
        self.current
    }

    /// Get the number of sections.
    pub fn section_count(&self) -> usize {
        self.sections.len()
    }

    /// Check if the wizard is on the first section.
    pub fn on_first_section(&self) -> bool {
        self.current == 0
    }

    /// Check if the wizard is on the last section.
    pub fn on_last_section(&self) -> bool {
        self.current + 1 == self.sections.len()
    }

    /// Get the accumulated answers.
    pub fn answers(&self) -> &Answers {
        &self.answers
    }

    /// Build the render model for the current section.
    ///
    /// Every question of the current section appears in order, pre-filled
    /// with its stored answer (or empty), carrying the invalid flag from the
    /// most recent validation pass. The back control is offered on every
    /// section but the first; the last section submits instead of advancing.
    pub fn section_view(&self) -> SectionView {
        let section = &self.sections[self.current];
        let fields = section
            .questions()
            .iter()
            .map(|question| FieldView {
                value: self.answers.get(question.id()).unwrap_or("").to_string(),
                invalid: self.invalid.contains(question.id()),
                question: question.clone(),
            })
            .collect();

        SectionView {
            index: self.current,
            total: self.sections.len(),
            fields,
            has_back: !self.on_first_section(),
            is_last: self.on_last_section(),
        }
    }

    /// Validate the live entries against the current section.
    ///
    /// Every value is committed to the answers, valid or not — an
    /// out-of-range number is still stored so it pre-fills on revisit.
    /// Missing entries count as empty. Records which fields failed so the
    /// next render can mark them. Returns `true` iff every field passed.
    pub fn validate(&mut self, entries: &SectionEntries) -> bool {
        let section = &self.sections[self.current];
        let mut all_valid = true;

        for question in section.questions() {
            let value = entries.get(question.id()).map(String::as_str).unwrap_or("");
            if question.check(value).is_err() {
                self.invalid.insert(question.id().to_string());
                all_valid = false;
            } else {
                self.invalid.remove(question.id());
            }
            self.answers.insert(question.id(), value);
        }

        all_valid
    }

    /// Validate and, on success, advance to the next section.
    ///
    /// A no-op (position unchanged, invalid marks shown) when validation
    /// fails or when already on the last section — the last section is left
    /// via [`try_submit`](Self::try_submit). Returns the validation verdict.
    pub fn try_advance(&mut self, entries: &SectionEntries) -> bool {
        if !self.validate(entries) {
            return false;
        }
        if !self.on_last_section() {
            self.current += 1;
            self.invalid.clear();
        }
        true
    }

    /// Move back one section, unconditionally.
    ///
    /// No validation runs and live entries are not committed — values typed
    /// on the current section and abandoned via back are discarded. Clamps
    /// at the first section.
    pub fn retreat(&mut self) {
        self.current = self.current.saturating_sub(1);
        self.invalid.clear();
    }

    /// Validate the final section ahead of submission.
    ///
    /// Commits entries like [`validate`](Self::validate). The caller only
    /// submits when this returns `true`.
    pub fn try_submit(&mut self, entries: &SectionEntries) -> bool {
        self.validate(entries)
    }

    /// Reset to the first section and clear all answers.
    pub fn restart(&mut self) {
        self.current = 0;
        self.answers.clear();
        self.invalid.clear();
    }
}
