use std::collections::HashMap;

use crate::view::{ResultView, SectionView};

/// Live input values for one section, keyed by question id.
///
/// Raw strings, exactly as entered — parsing and bounds checking happen in
/// the wizard, not in backends.
pub type SectionEntries = HashMap<String, String>;

/// What the user did with a presented section.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SectionAction {
    /// Go back one section. Live entries are discarded.
    Back,

    /// Next or submit, depending on position. Gated by validation.
    Forward,

    /// Leave the wizard entirely.
    Cancel,
}

/// A backend's answer to a presented section: the chosen navigation action
/// plus the live input values captured from the fields.
#[derive(Debug, Clone, PartialEq)]
pub struct SectionReply {
    pub action: SectionAction,
    pub entries: SectionEntries,
}

impl SectionReply {
    /// A forward reply carrying the given entries.
    pub fn forward(entries: SectionEntries) -> Self {
        Self {
            action: SectionAction::Forward,
            entries,
        }
    }

    /// A back reply. Entries are empty — they would be discarded anyway.
    pub fn back() -> Self {
        Self {
            action: SectionAction::Back,
            entries: SectionEntries::new(),
        }
    }

    /// A cancel reply.
    pub fn cancel() -> Self {
        Self {
            action: SectionAction::Cancel,
            entries: SectionEntries::new(),
        }
    }
}

/// What the user did with the result screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResultReply {
    /// Start over: first section, answers cleared.
    Restart,

    /// Leave the wizard.
    Finish,
}

/// Trait for backend implementations that present the wizard to a user.
///
/// Backends receive render models and return the user's replies. They decide
/// how to present sections (terminal prompts, a form, a script) and never
/// validate — the wizard re-presents a section with invalid marks when
/// validation fails.
pub trait WizardBackend {
    /// The error type for this backend.
    type Error: Into<anyhow::Error>;

    /// Present one section and capture the user's entries and navigation.
    fn present_section(&mut self, view: &SectionView) -> Result<SectionReply, Self::Error>;

    /// Present the prediction result.
    fn present_result(&mut self, view: &ResultView) -> Result<ResultReply, Self::Error>;

    /// Surface an error message, blocking until the user acknowledges it.
    fn notify_error(&mut self, message: &str) -> Result<(), Self::Error>;
}
