//! # upitnik-wizard
//!
//! Sectioned questionnaire wizard. Backend-agnostic.
//!
//! A [`FormWizard`] owns an ordered list of sections, the current position,
//! and the accumulated [`Answers`](upitnik_types::Answers). It renders one
//! section at a time, validates input on forward navigation, and on final
//! submission hands the whole answer map to a [`Predictor`].
//!
//! The state machine is:
//!
//! ```text
//! Section[0] ⇄ Section[1] ⇄ … ⇄ Section[n-1] → Result → Section[0]
//! ```
//!
//! Forward transitions are gated by validation, backward transitions are
//! ungated, the result is reachable only from the last section via a
//! successful prediction, and restart returns unconditionally to the first
//! section with the answers cleared.
//!
//! ## Backends
//!
//! Backends are separate crates that implement [`WizardBackend`]:
//! - `upitnik-wizard-dialoguer` - terminal prompts via dialoguer
//!
//! A scripted [`TestBackend`] for driving the wizard without user
//! interaction ships with this crate.

// Re-export all questionnaire types so backends depend on one crate.
pub use upitnik_types::*;

mod wizard;
pub use wizard::FormWizard;

mod view;
pub use view::{FieldView, ResultView, SectionView};

mod backend;
pub use backend::{ResultReply, SectionAction, SectionEntries, SectionReply, WizardBackend};

mod predictor;
pub use predictor::{PredictError, Predictor};

mod error;
pub use error::WizardError;

mod driver;
pub use driver::{FALLBACK_ERROR_MESSAGE, run};

// Scripted backend for testing wizards without user interaction.
mod test_backend;
pub use test_backend::{TestBackend, TestBackendError, entries};
