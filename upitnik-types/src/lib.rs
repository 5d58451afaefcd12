//! Core types for the upitnik wizard.
//!
//! This crate provides the foundational types for defining questionnaires:
//! - `Question` and `QuestionKind` - Individual questions and their input types
//! - `Section` - A logical page grouping related questions
//! - `Answers` - Collected raw values, keyed by question id
//! - `Prediction` - The result returned by the prediction service
//!
//! Definitions are presentation-agnostic — they can be driven by a terminal
//! wizard, a form, or a scripted test backend.

mod question;
pub use question::{NumberQuestion, Question, QuestionKind, SelectQuestion};

mod section;
pub use section::Section;

mod answers;
pub use answers::Answers;

mod validation;
pub use validation::FieldError;

mod prediction;
pub use prediction::Prediction;
