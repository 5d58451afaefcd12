//! Dialoguer backend implementation for the WizardBackend trait.

use dialoguer::{Input, Select, theme::ColorfulTheme};
use thiserror::Error;
use upitnik_wizard::{
    FieldView, QuestionKind, ResultReply, ResultView, SectionAction, SectionEntries, SectionReply,
    SectionView, WizardBackend,
};

/// Error type for the Dialoguer backend.
#[derive(Debug, Error)]
pub enum DialoguerError {
    /// An I/O error occurred during prompting.
    #[error("Dialoguer error: {0}")]
    Dialoguer(#[from] dialoguer::Error),
}

/// Helper to check if a dialoguer error is a cancellation (Ctrl+C)
fn is_cancelled(err: &dialoguer::Error) -> bool {
    matches!(err, dialoguer::Error::IO(io_err) if io_err.kind() == std::io::ErrorKind::Interrupted)
}

/// Dialoguer backend presenting sections as step-by-step CLI prompts.
#[derive(Debug, Default, Clone)]
pub struct DialoguerWizard {
    /// Use colorful theme for prompts.
    colorful: bool,
}

impl DialoguerWizard {
    /// Create a new Dialoguer backend with default (colorful) theme.
    pub fn new() -> Self {
        Self { colorful: true }
    }

    /// Create a backend with plain (no color) theme.
    pub fn plain() -> Self {
        Self { colorful: false }
    }

    /// Prompt a numeric field as free text, pre-filled with the stored value.
    ///
    /// The raw string is returned as-is; the wizard parses and bound-checks.
    fn ask_number(&self, field: &FieldView) -> Result<Option<String>, DialoguerError> {
        let prompt = match field.question.placeholder() {
            Some(hint) => format!("{} ({hint})", field.question.label()),
            None => field.question.label().to_string(),
        };

        let _theme;
        let mut builder: Input<String>;
        if self.colorful {
            _theme = ColorfulTheme::default();
            builder = Input::with_theme(&_theme);
        } else {
            builder = Input::new();
        }

        builder = builder.with_prompt(prompt).allow_empty(true);
        if !field.value.is_empty() {
            builder = builder.with_initial_text(field.value.clone());
        }

        match builder.interact_text() {
            Ok(value) => Ok(Some(value)),
            Err(e) if is_cancelled(&e) => Ok(None),
            Err(e) => Err(DialoguerError::Dialoguer(e)),
        }
    }

    /// Prompt a select field over exactly its options, in order.
    ///
    /// The empty placeholder option is shown as the question's hint text; the
    /// captured value is the option string itself (possibly empty).
    fn ask_select(
        &self,
        field: &FieldView,
        options: &[String],
    ) -> Result<Option<String>, DialoguerError> {
        let items: Vec<&str> = options
            .iter()
            .map(|option| {
                if option.is_empty() {
                    field.question.placeholder().unwrap_or("(none)")
                } else {
                    option.as_str()
                }
            })
            .collect();

        let default = options
            .iter()
            .position(|option| *option == field.value)
            .unwrap_or(0);

        let mut builder: Select;
        let _theme;
        if self.colorful {
            _theme = ColorfulTheme::default();
            builder = Select::with_theme(&_theme);
        } else {
            builder = Select::new();
        }

        builder = builder
            .with_prompt(field.question.label())
            .items(&items)
            .default(default);

        match builder.interact() {
            Ok(idx) => Ok(Some(options[idx].clone())),
            Err(e) if is_cancelled(&e) => Ok(None),
            Err(e) => Err(DialoguerError::Dialoguer(e)),
        }
    }

    /// Prompt the navigation choice for a section.
    fn ask_navigation(&self, view: &SectionView) -> Result<SectionAction, DialoguerError> {
        let mut items = Vec::new();
        if view.has_back {
            items.push("Back");
        }
        items.push(if view.is_last { "Submit" } else { "Next" });

        let mut builder: Select;
        let _theme;
        if self.colorful {
            _theme = ColorfulTheme::default();
            builder = Select::with_theme(&_theme);
        } else {
            builder = Select::new();
        }

        builder = builder
            .with_prompt("Navigation")
            .items(&items)
            .default(items.len() - 1);

        match builder.interact() {
            Ok(idx) => {
                if view.has_back && idx == 0 {
                    Ok(SectionAction::Back)
                } else {
                    Ok(SectionAction::Forward)
                }
            }
            Err(e) if is_cancelled(&e) => Ok(SectionAction::Cancel),
            Err(e) => Err(DialoguerError::Dialoguer(e)),
        }
    }
}

impl WizardBackend for DialoguerWizard {
    type Error = DialoguerError;

    fn present_section(&mut self, view: &SectionView) -> Result<SectionReply, Self::Error> {
        println!();
        println!("Section {}", view.progress());

        let mut entries = SectionEntries::new();

        for field in &view.fields {
            if field.invalid {
                println!("Invalid value for: {}", field.question.label());
            }

            let captured = match field.question.kind() {
                QuestionKind::Number(_) => self.ask_number(field)?,
                QuestionKind::Select(select) => self.ask_select(field, &select.options)?,
            };

            match captured {
                Some(value) => entries.insert(field.question.id().to_string(), value),
                None => return Ok(SectionReply::cancel()),
            };
        }

        match self.ask_navigation(view)? {
            SectionAction::Back => Ok(SectionReply::back()),
            SectionAction::Forward => Ok(SectionReply::forward(entries)),
            SectionAction::Cancel => Ok(SectionReply::cancel()),
        }
    }

    fn present_result(&mut self, view: &ResultView) -> Result<ResultReply, Self::Error> {
        println!();
        println!("Prediction result: {}", view.formatted());

        let items = ["Restart", "Finish"];

        let mut builder: Select;
        let _theme;
        if self.colorful {
            _theme = ColorfulTheme::default();
            builder = Select::with_theme(&_theme);
        } else {
            builder = Select::new();
        }

        builder = builder.items(&items).default(1);

        match builder.interact() {
            Ok(0) => Ok(ResultReply::Restart),
            Ok(_) => Ok(ResultReply::Finish),
            Err(e) if is_cancelled(&e) => Ok(ResultReply::Finish),
            Err(e) => Err(DialoguerError::Dialoguer(e)),
        }
    }

    fn notify_error(&mut self, message: &str) -> Result<(), Self::Error> {
        println!();
        println!("Error: {message}");

        let pause: Result<String, dialoguer::Error> = Input::new()
            .with_prompt("Press Enter to continue")
            .allow_empty(true)
            .interact_text();

        match pause {
            Ok(_) => Ok(()),
            Err(e) if is_cancelled(&e) => Ok(()),
            Err(e) => Err(DialoguerError::Dialoguer(e)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn backend_creation() {
        let _backend = DialoguerWizard::new();
        let _plain = DialoguerWizard::plain();
    }

    #[test]
    fn error_display() {
        let err = DialoguerError::Dialoguer(dialoguer::Error::IO(std::io::Error::other("boom")));
        assert!(err.to_string().starts_with("Dialoguer error"));
    }
}
