//! Scripted backend for testing wizards without user interaction.
//!
//! `TestBackend` replays a pre-defined sequence of replies and records
//! everything it was asked to present, so tests can assert on the exact
//! sections, results, and error notifications the driver produced.
//!
//! # Example
//!
//! ```rust,ignore
//! let mut backend = TestBackend::new()
//!     .then_section(SectionReply::forward(entries([("age", "10")])))
//!     .then_result(ResultReply::Finish);
//!
//! run(&mut wizard, &mut backend, &predictor).await.unwrap();
//! assert_eq!(backend.presented_sections()[0].index, 0);
//! ```

use std::collections::VecDeque;

use crate::backend::{ResultReply, SectionEntries, SectionReply, WizardBackend};
use crate::view::{ResultView, SectionView};

/// Build section entries from id-value pairs.
pub fn entries<const N: usize>(pairs: [(&str, &str); N]) -> SectionEntries {
    pairs
        .into_iter()
        .map(|(id, value)| (id.to_string(), value.to_string()))
        .collect()
}

/// Error type for `TestBackend`.
#[derive(Debug, thiserror::Error)]
pub enum TestBackendError {
    #[error("Script exhausted: no reply left for section {0}")]
    NoSectionReply(usize),

    #[error("Script exhausted: no reply left for the result view")]
    NoResultReply,
}

/// A backend that replays scripted replies and records presented views.
#[derive(Debug, Default)]
pub struct TestBackend {
    section_replies: VecDeque<SectionReply>,
    result_replies: VecDeque<ResultReply>,
    presented_sections: Vec<SectionView>,
    presented_results: Vec<ResultView>,
    notified_errors: Vec<String>,
}

impl TestBackend {
    /// Create a new empty test backend.
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue a reply for the next presented section.
    pub fn then_section(mut self, reply: SectionReply) -> Self {
        self.section_replies.push_back(reply);
        self
    }

    /// Queue a reply for the next presented result view.
    pub fn then_result(mut self, reply: ResultReply) -> Self {
        self.result_replies.push_back(reply);
        self
    }

    /// Every section view presented so far, in order.
    pub fn presented_sections(&self) -> &[SectionView] {
        &self.presented_sections
    }

    /// Every result view presented so far, in order.
    pub fn presented_results(&self) -> &[ResultView] {
        &self.presented_results
    }

    /// Every error message surfaced so far, in order.
    pub fn notified_errors(&self) -> &[String] {
        &self.notified_errors
    }
}

impl WizardBackend for TestBackend {
    type Error = TestBackendError;

    fn present_section(&mut self, view: &SectionView) -> Result<SectionReply, Self::Error> {
        self.presented_sections.push(view.clone());
        self.section_replies
            .pop_front()
            .ok_or(TestBackendError::NoSectionReply(view.index))
    }

    fn present_result(&mut self, view: &ResultView) -> Result<ResultReply, Self::Error> {
        self.presented_results.push(*view);
        self.result_replies
            .pop_front()
            .ok_or(TestBackendError::NoResultReply)
    }

    fn notify_error(&mut self, message: &str) -> Result<(), Self::Error> {
        self.notified_errors.push(message.to_string());
        Ok(())
    }
}
