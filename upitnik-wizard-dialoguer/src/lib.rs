//! # upitnik-wizard-dialoguer
//!
//! Dialoguer terminal backend for upitnik-wizard.
//!
//! Presents one section at a time in a classic CLI wizard style: each field
//! is prompted in order (text input for numbers, a closed select for
//! options), followed by a navigation choice. Validation stays in the
//! wizard — this backend only captures raw values.
//!
//! ## Example
//!
//! ```rust,ignore
//! use upitnik_wizard::{FormWizard, run};
//! use upitnik_wizard_dialoguer::DialoguerWizard;
//!
//! let mut wizard = FormWizard::new(sections);
//! let mut backend = DialoguerWizard::new();
//! run(&mut wizard, &mut backend, &client).await?;
//! ```

mod backend;

pub use backend::{DialoguerError, DialoguerWizard};
