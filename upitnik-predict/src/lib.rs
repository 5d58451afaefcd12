//! HTTP client for the prediction service.
//!
//! The service is an opaque collaborator: answers go out as a flat JSON
//! object via `POST /predict`, a probability comes back. Service-reported
//! errors (non-success status with an `error` field) are kept apart from
//! transport failures so the wizard can surface them differently.

use std::env;

use anyhow::Context;
use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use tracing::warn;
use upitnik_wizard::{Answers, PredictError, Prediction, Predictor};

/// Base address used when `UPITNIK_PREDICT_URL` is not set.
pub const DEFAULT_BASE_URL: &str = "http://127.0.0.1:5000";

/// Configuration for the prediction client.
#[derive(Clone, Debug)]
pub struct PredictConfig {
    pub base_url: String,
}

impl PredictConfig {
    /// Read the configuration from the environment, falling back to the
    /// default base address.
    #[must_use]
    pub fn from_env() -> Self {
        let base_url =
            env::var("UPITNIK_PREDICT_URL").unwrap_or_else(|_| DEFAULT_BASE_URL.into());
        Self { base_url }
    }
}

impl Default for PredictConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.into(),
        }
    }
}

/// Client for the prediction service.
#[derive(Clone, Debug)]
pub struct PredictClient {
    client: Client,
    base_url: String,
}

impl PredictClient {
    #[must_use]
    pub fn new(config: PredictConfig) -> Self {
        Self {
            client: Client::new(),
            base_url: config.base_url,
        }
    }

    #[must_use]
    pub fn from_env() -> Self {
        Self::new(PredictConfig::from_env())
    }
}

#[async_trait]
impl Predictor for PredictClient {
    async fn predict(&self, answers: &Answers) -> Result<Prediction, PredictError> {
        let url = format!("{}/predict", self.base_url.trim_end_matches('/'));

        let response = self
            .client
            .post(url)
            .json(answers)
            .send()
            .await
            .context("failed to send prediction request")?;

        let status = response.status();
        if !status.is_success() {
            // The error body is best-effort JSON; anything unparseable falls
            // back to the status line.
            let body: ServiceError = response.json().await.unwrap_or_default();
            let message = body
                .error
                .unwrap_or_else(|| format!("prediction service returned {status}"));
            warn!(%status, "prediction service rejected the request");
            return Err(PredictError::Service(message));
        }

        let prediction = response
            .json::<Prediction>()
            .await
            .context("failed to parse prediction response")?;
        Ok(prediction)
    }
}

/// Error payload of a non-success response.
#[derive(Debug, Default, Deserialize)]
struct ServiceError {
    error: Option<String>,
}
