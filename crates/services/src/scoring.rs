use std::collections::BTreeMap;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use lrs_core::model::{AnswerSheet, AnswerValue};
use lrs_core::ranking::RemoteScore;

use crate::error::ScoringError;

/// Port for the remote scoring service.
#[async_trait]
pub trait ScoringService: Send + Sync {
    /// Score a complete answer sheet.
    ///
    /// The returned pairs are neither sorted nor guaranteed to cover every pattern.
    ///
    /// # Errors
    ///
    /// Returns `ScoringError::Network` for transport failures,
    /// `ScoringError::Service` when the service answers with an error status and
    /// `ScoringError::Malformed` for an unreadable response.
    async fn score(&self, answers: &AnswerSheet) -> Result<Vec<RemoteScore>, ScoringError>;
}

//
// ─── WIRE FORMAT ───────────────────────────────────────────────────────────────
//

/// Request body: `{"answers": {"<question id>": <value>}}`.
#[derive(Debug, Serialize)]
pub struct ScoreRequest<'a> {
    answers: BTreeMap<&'a str, Value>,
}

impl<'a> ScoreRequest<'a> {
    /// Likert answers are sent as numbers, yes/no as `1`/`0`, text as strings.
    #[must_use]
    pub fn from_sheet(sheet: &'a AnswerSheet) -> Self {
        let answers = sheet
            .iter()
            .map(|(id, value)| {
                let json = match value {
                    AnswerValue::Likert(v) => Value::from(*v),
                    AnswerValue::YesNo(yes) => Value::from(u8::from(*yes)),
                    AnswerValue::Text(text) => Value::from(text.as_str()),
                };
                (id.as_str(), json)
            })
            .collect();
        Self { answers }
    }
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum ScoreResponse {
    Wrapped { top_schemas: Vec<ScoreRecord> },
    Bare(Vec<ScoreRecord>),
}

#[derive(Debug, Deserialize)]
struct ScoreRecord {
    name: String,
    #[serde(default)]
    score: Option<f64>,
}

#[derive(Debug, Deserialize)]
struct ErrorBody {
    error: String,
}

/// Decode a successful scoring response.
///
/// Records without a score are dropped; the merge step scores them `0.0`.
///
/// # Errors
///
/// Returns `ScoringError::Malformed` if the body has neither shape.
pub fn decode_scores(body: &[u8]) -> Result<Vec<RemoteScore>, ScoringError> {
    let response: ScoreResponse =
        serde_json::from_slice(body).map_err(|err| ScoringError::Malformed(err.to_string()))?;
    let records = match response {
        ScoreResponse::Wrapped { top_schemas } => top_schemas,
        ScoreResponse::Bare(records) => records,
    };
    Ok(records
        .into_iter()
        .filter_map(|record| {
            record
                .score
                .map(|score| RemoteScore::new(record.name, score))
        })
        .collect())
}

/// Extract the `error` message from a failed response body, if present.
#[must_use]
pub fn decode_error_message(body: &[u8]) -> Option<String> {
    serde_json::from_slice::<ErrorBody>(body)
        .ok()
        .map(|body| body.error)
        .filter(|message| !message.trim().is_empty())
}
