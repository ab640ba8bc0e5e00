use async_trait::async_trait;
use reqwest::{Client, Response};
use serde::Deserialize;
use tracing::{debug, info, warn};

use lrs_core::model::{AnswerSheet, Question};
use lrs_core::ranking::RemoteScore;

use crate::config::BackendConfig;
use crate::error::{HealthError, QuestionSourceError, ScoringError};
use crate::question_source::{QuestionSource, decode_questions};
use crate::scoring::{ScoreRequest, ScoringService, decode_error_message, decode_scores};

const QUESTIONS_PATH: &str = "api/questions";
const CALCULATE_PATH: &str = "api/calculate";
const HEALTH_PATH: &str = "api/health";

/// Reply of the backend health endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct HealthStatus {
    pub status: String,
    #[serde(default)]
    pub version: Option<String>,
}

/// HTTP client for the assessment backend: question source and scoring service.
#[derive(Clone, Debug)]
pub struct HttpBackend {
    client: Client,
    config: BackendConfig,
}

impl HttpBackend {
    /// Build a client with the configured request timeout.
    ///
    /// # Errors
    ///
    /// Returns `reqwest::Error` if the TLS backend cannot be initialised.
    pub fn new(config: BackendConfig) -> Result<Self, reqwest::Error> {
        let client = Client::builder().timeout(config.request_timeout).build()?;
        Ok(Self { client, config })
    }

    /// Build a client from `LRS_*` environment variables.
    ///
    /// # Errors
    ///
    /// Returns `reqwest::Error` if the TLS backend cannot be initialised.
    pub fn from_env() -> Result<Self, reqwest::Error> {
        Self::new(BackendConfig::from_env())
    }

    #[must_use]
    pub fn config(&self) -> &BackendConfig {
        &self.config
    }

    /// Probe the backend.
    ///
    /// # Errors
    ///
    /// Returns `HealthError` when the request fails or the status is not 2xx.
    pub async fn health(&self) -> Result<HealthStatus, HealthError> {
        let url = self.config.endpoint(HEALTH_PATH);
        let response = self.client.get(url).send().await?;
        if !response.status().is_success() {
            return Err(HealthError::HttpStatus(response.status()));
        }
        Ok(response.json().await?)
    }
}

#[async_trait]
impl QuestionSource for HttpBackend {
    async fn fetch_questions(&self) -> Result<Vec<Question>, QuestionSourceError> {
        let url = self.config.endpoint(QUESTIONS_PATH);
        debug!(%url, "fetching questions");

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|err| QuestionSourceError::Network(err.to_string()))?;
        let status = response.status();
        let body = read_body(response)
            .await
            .map_err(QuestionSourceError::Network)?;

        if !status.is_success() {
            let detail = decode_error_message(&body).unwrap_or_else(|| status.to_string());
            warn!(%status, %detail, "question source returned an error status");
            return Err(QuestionSourceError::Network(format!(
                "status {}: {detail}",
                status.as_u16()
            )));
        }

        let questions = decode_questions(&body)?;
        info!(count = questions.len(), "questions fetched");
        Ok(questions)
    }
}

#[async_trait]
impl ScoringService for HttpBackend {
    async fn score(&self, answers: &AnswerSheet) -> Result<Vec<RemoteScore>, ScoringError> {
        let url = self.config.endpoint(CALCULATE_PATH);
        debug!(%url, answers = answers.len(), "submitting answers");

        let response = self
            .client
            .post(&url)
            .json(&ScoreRequest::from_sheet(answers))
            .send()
            .await
            .map_err(|err| ScoringError::Network(err.to_string()))?;
        let status = response.status();
        let body = read_body(response).await.map_err(ScoringError::Network)?;

        if !status.is_success() {
            return Err(ScoringError::Service {
                status: status.as_u16(),
                message: decode_error_message(&body),
            });
        }

        let scores = decode_scores(&body)?;
        debug!(count = scores.len(), "scores received");
        Ok(scores)
    }
}

async fn read_body(response: Response) -> Result<Vec<u8>, String> {
    response
        .bytes()
        .await
        .map(|bytes| bytes.to_vec())
        .map_err(|err| err.to_string())
}
