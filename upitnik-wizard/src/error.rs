/// Why a wizard run ended without producing a result.
///
/// Validation failures and prediction errors are handled inside the run loop
/// and never surface here; this type only covers the two ways a run stops
/// early.
#[derive(Debug, thiserror::Error)]
pub enum WizardError {
    /// The user abandoned the questionnaire before reaching a result,
    /// typically via Ctrl+C at a prompt.
    #[error("Wizard cancelled by user")]
    Cancelled,

    /// The presentation layer failed: terminal I/O broke, a prompt could not
    /// be drawn, or similar.
    #[error("Backend error: {0}")]
    Backend(#[from] anyhow::Error),
}

impl WizardError {
    /// Wrap a backend's error.
    pub fn backend(err: impl Into<anyhow::Error>) -> Self {
        Self::Backend(err.into())
    }

    /// `true` for deliberate cancellation, as opposed to a failure.
    ///
    /// Callers typically exit quietly on cancellation instead of reporting
    /// an error.
    pub fn is_cancelled(&self) -> bool {
        matches!(self, Self::Cancelled)
    }
}
