use tracing::error;

use crate::backend::{ResultReply, SectionAction, WizardBackend};
use crate::error::WizardError;
use crate::predictor::{PredictError, Predictor};
use crate::view::ResultView;
use crate::wizard::FormWizard;

/// Generic message shown when the prediction exchange itself fails.
pub const FALLBACK_ERROR_MESSAGE: &str =
    "Prediction request failed. Please check the connection to the server.";

/// Drive the wizard to completion.
///
/// Presents the current section, validates on forward navigation, and on the
/// last section submits the accumulated answers to the predictor. Prediction
/// failures are surfaced through the backend and leave the wizard on the
/// final section, ready for retry. A successful prediction shows the result
/// screen, from which the user either restarts or finishes.
///
/// The prediction call is the only suspension point; by construction there
/// is never more than one outstanding call.
///
/// # Errors
///
/// Returns [`WizardError::Cancelled`] when the user cancels, or
/// [`WizardError::Backend`] when the backend fails.
pub async fn run<B, P>(
    wizard: &mut FormWizard,
    backend: &mut B,
    predictor: &P,
) -> Result<(), WizardError>
where
    B: WizardBackend,
    P: Predictor,
{
    loop {
        let view = wizard.section_view();
        let reply = backend
            .present_section(&view)
            .map_err(WizardError::backend)?;

        match reply.action {
            SectionAction::Cancel => return Err(WizardError::Cancelled),
            SectionAction::Back => wizard.retreat(),
            SectionAction::Forward if !wizard.on_last_section() => {
                // Gated by validation; a failed pass re-presents the same
                // section with invalid marks.
                wizard.try_advance(&reply.entries);
            }
            SectionAction::Forward => {
                if !wizard.try_submit(&reply.entries) {
                    continue;
                }
                match predictor.predict(wizard.answers()).await {
                    Ok(prediction) => {
                        let result = ResultView::new(prediction);
                        match backend
                            .present_result(&result)
                            .map_err(WizardError::backend)?
                        {
                            ResultReply::Restart => wizard.restart(),
                            ResultReply::Finish => return Ok(()),
                        }
                    }
                    Err(PredictError::Service(message)) => {
                        backend
                            .notify_error(&message)
                            .map_err(WizardError::backend)?;
                    }
                    Err(err @ PredictError::Transport(_)) => {
                        error!(error = %err, "prediction request failed");
                        backend
                            .notify_error(FALLBACK_ERROR_MESSAGE)
                            .map_err(WizardError::backend)?;
                    }
                }
            }
        }
    }
}
