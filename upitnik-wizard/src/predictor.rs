use async_trait::async_trait;
use upitnik_types::{Answers, Prediction};

/// Error type for prediction calls.
#[derive(Debug, thiserror::Error)]
pub enum PredictError {
    /// The service answered with a non-success status. The message is the
    /// service's `error` field when present, otherwise a generic status
    /// description. Shown to the user verbatim.
    #[error("{0}")]
    Service(String),

    /// The exchange itself failed: network error or unparseable response.
    /// Shown to the user as a generic fallback and logged.
    #[error("prediction request failed: {0}")]
    Transport(#[from] anyhow::Error),
}

/// Trait for the external prediction service.
///
/// Receives the full answer map and returns the predicted probability. The
/// wizard treats the model as opaque — implementations live in
/// `upitnik-predict` (HTTP) and in tests (scripted).
#[async_trait]
pub trait Predictor {
    /// Submit the answers and return the prediction.
    async fn predict(&self, answers: &Answers) -> Result<Prediction, PredictError>;
}
