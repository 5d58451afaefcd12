use crate::{Question, QuestionKind};

/// Why a field value failed validation.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum FieldError {
    /// The field was left empty (or at the placeholder option).
    #[error("field must not be empty")]
    Empty,

    /// A numeric field did not parse as a number.
    #[error("expected a number")]
    NotNumeric,

    /// A numeric field parsed but fell outside the inclusive bounds.
    #[error("value must be between {min} and {max}")]
    OutOfBounds { min: f64, max: f64 },
}

impl Question {
    /// Validate a raw value against this question.
    ///
    /// Values are parsed explicitly: a numeric field must parse as a number
    /// and fall within its inclusive `[min, max]` bounds. A select field
    /// passes with any non-empty value — the control is closed-choice, so
    /// the only invalid state is the placeholder option.
    pub fn check(&self, value: &str) -> Result<(), FieldError> {
        if value.is_empty() {
            return Err(FieldError::Empty);
        }
        match self.kind() {
            QuestionKind::Number(number) => {
                let parsed: f64 = value.trim().parse().map_err(|_| FieldError::NotNumeric)?;
                if parsed < number.min || parsed > number.max {
                    return Err(FieldError::OutOfBounds {
                        min: number.min,
                        max: number.max,
                    });
                }
                Ok(())
            }
            QuestionKind::Select(_) => Ok(()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{NumberQuestion, SelectQuestion};

    fn age() -> Question {
        Question::new(
            "age",
            "Godine",
            QuestionKind::Number(NumberQuestion::with_bounds(1.0, 18.0)),
        )
    }

    fn gender() -> Question {
        Question::new(
            "gender",
            "Spol",
            QuestionKind::Select(SelectQuestion::with_placeholder_option(["Muško", "Žensko"])),
        )
    }

    #[test]
    fn empty_fails_for_both_kinds() {
        assert_eq!(age().check(""), Err(FieldError::Empty));
        assert_eq!(gender().check(""), Err(FieldError::Empty));
    }

    #[test]
    fn number_in_bounds_passes() {
        assert_eq!(age().check("10"), Ok(()));
        assert_eq!(age().check("1"), Ok(()));
        assert_eq!(age().check("18"), Ok(()));
    }

    #[test]
    fn number_out_of_bounds_fails() {
        assert_eq!(
            age().check("0"),
            Err(FieldError::OutOfBounds {
                min: 1.0,
                max: 18.0
            })
        );
        assert_eq!(
            age().check("19"),
            Err(FieldError::OutOfBounds {
                min: 1.0,
                max: 18.0
            })
        );
    }

    #[test]
    fn number_rejects_garbage() {
        assert_eq!(age().check("ten"), Err(FieldError::NotNumeric));
    }

    #[test]
    fn number_accepts_decimals() {
        assert_eq!(age().check("2.5"), Ok(()));
    }

    #[test]
    fn select_non_empty_passes() {
        assert_eq!(gender().check("Muško"), Ok(()));
    }
}
