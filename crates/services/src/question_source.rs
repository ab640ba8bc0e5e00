use std::collections::HashSet;

use async_trait::async_trait;
use serde::Deserialize;

use lrs_core::model::{Question, QuestionId, ScaleType};

use crate::error::QuestionSourceError;

/// Port for the questionnaire repository.
#[async_trait]
pub trait QuestionSource: Send + Sync {
    /// Fetch the ordered question set.
    ///
    /// # Errors
    ///
    /// Returns `QuestionSourceError::Network` if the source cannot be reached and
    /// `QuestionSourceError::Malformed` if the payload is not a question list.
    async fn fetch_questions(&self) -> Result<Vec<Question>, QuestionSourceError>;
}

//
// ─── WIRE FORMAT ───────────────────────────────────────────────────────────────
//

/// One question row as served by the backend.
///
/// Rows come from a spreadsheet export, so column names vary and blank cells
/// arrive as empty strings.
#[derive(Debug, Deserialize)]
struct QuestionRecord {
    #[serde(alias = "ID", alias = "Question ID", alias = "QuestionID")]
    id: Option<RecordId>,
    #[serde(alias = "Question Text", alias = "QuestionText", alias = "question")]
    text: Option<String>,
    #[serde(
        rename = "scaleType",
        alias = "scale_type",
        alias = "Scale Type",
        alias = "Scale",
        alias = "Type"
    )]
    scale: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum RecordId {
    Text(String),
    Number(serde_json::Number),
}

impl RecordId {
    fn into_id(self) -> QuestionId {
        match self {
            Self::Text(text) => QuestionId::new(text),
            Self::Number(number) => match (number.as_u64(), number.as_f64()) {
                (Some(n), _) => QuestionId::from(n),
                // Spreadsheet exports turn integer ids into `1.0`.
                (None, Some(f)) if f.fract() == 0.0 && f >= 0.0 => QuestionId::new(format!("{f:.0}")),
                _ => QuestionId::new(number.to_string()),
            },
        }
    }
}

impl QuestionRecord {
    fn into_question(self, position: usize) -> Result<Question, QuestionSourceError> {
        let id = self
            .id
            .map(RecordId::into_id)
            .ok_or_else(|| QuestionSourceError::Malformed(format!("row {position} has no id")))?;
        let scale = match self.scale.as_deref().map(str::trim) {
            None | Some("") => ScaleType::Likert5,
            Some(raw) => ScaleType::parse(raw)
                .map_err(|err| QuestionSourceError::Malformed(format!("row {position}: {err}")))?,
        };
        Question::new(id, self.text.unwrap_or_default(), scale)
            .map_err(|err| QuestionSourceError::Malformed(format!("row {position}: {err}")))
    }
}

/// Decode a question list payload.
///
/// # Errors
///
/// Returns `QuestionSourceError::Malformed` if the body is not a JSON array of
/// question rows, a row is invalid, two rows share an id, or the list is empty.
pub fn decode_questions(body: &[u8]) -> Result<Vec<Question>, QuestionSourceError> {
    let records: Vec<QuestionRecord> = serde_json::from_slice(body)
        .map_err(|err| QuestionSourceError::Malformed(err.to_string()))?;
    if records.is_empty() {
        return Err(QuestionSourceError::Malformed("question list is empty".into()));
    }

    let mut seen = HashSet::with_capacity(records.len());
    let mut questions = Vec::with_capacity(records.len());
    for (idx, record) in records.into_iter().enumerate() {
        let question = record.into_question(idx + 1)?;
        if !seen.insert(question.id().clone()) {
            return Err(QuestionSourceError::Malformed(format!(
                "duplicate question id {}",
                question.id()
            )));
        }
        questions.push(question);
    }
    Ok(questions)
}
