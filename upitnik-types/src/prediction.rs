use serde::Deserialize;

/// The result returned by the prediction service.
///
/// Transient — shown to the user and discarded, never persisted.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
pub struct Prediction {
    /// Probability as a percentage, conceptually in 0–100.
    pub probability: f64,
}

impl Prediction {
    /// Format the probability with exactly two decimal places and a percent
    /// sign, e.g. `73.456` → `"73.46%"`.
    pub fn as_percent(&self) -> String {
        format!("{:.2}%", self.probability)
    }
}
