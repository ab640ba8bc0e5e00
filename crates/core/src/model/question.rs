use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::model::answer::AnswerValue;
use crate::model::ids::QuestionId;

/// Highest point on the five-point agreement scale.
pub const LIKERT_MAX: u8 = 4;

const MISSING_TEXT_PLACEHOLDER: &str = "Question missing";

//
// ─── ERRORS ────────────────────────────────────────────────────────────────────
//

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum QuestionError {
    #[error("question id cannot be empty")]
    EmptyId,

    #[error("unknown scale type: {0:?}")]
    UnknownScale(String),
}

//
// ─── SCALE TYPE ────────────────────────────────────────────────────────────────
//

/// Response scale attached to a question.
///
/// - `Likert5`: ordinal 0-4, "Strongly Disagree" to "Strongly Agree"
/// - `YesNo`: two-label choice
/// - `OpenText`: free text
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ScaleType {
    Likert5,
    YesNo,
    OpenText,
}

impl ScaleType {
    /// Parses the scale indicator string sent by the question source.
    ///
    /// Matching ignores case, whitespace and punctuation, so `"Yes/No"`,
    /// `"yes_no"` and `"yesNo"` are the same scale.
    ///
    /// # Errors
    ///
    /// Returns `QuestionError::UnknownScale` for unrecognised indicators.
    pub fn parse(raw: &str) -> Result<Self, QuestionError> {
        let normalized: String = raw
            .chars()
            .filter(char::is_ascii_alphanumeric)
            .map(|c| c.to_ascii_lowercase())
            .collect();

        match normalized.as_str() {
            "likert5" | "likert" | "scale" | "agreement" | "numeric" => Ok(Self::Likert5),
            "yesno" | "boolean" | "bool" | "binary" => Ok(Self::YesNo),
            "opentext" | "text" | "open" | "openended" | "freetext" => Ok(Self::OpenText),
            _ => Err(QuestionError::UnknownScale(raw.to_owned())),
        }
    }

    /// Returns true if `value` belongs to this scale's domain.
    #[must_use]
    pub fn accepts(self, value: &AnswerValue) -> bool {
        match (self, value) {
            (Self::Likert5, AnswerValue::Likert(v)) => *v <= LIKERT_MAX,
            (Self::YesNo, AnswerValue::YesNo(_)) | (Self::OpenText, AnswerValue::Text(_)) => true,
            _ => false,
        }
    }

    /// Parses raw user input into an answer for this scale.
    ///
    /// Returns `None` when the input does not fit the scale.
    #[must_use]
    pub fn parse_input(self, raw: &str) -> Option<AnswerValue> {
        let trimmed = raw.trim();
        match self {
            Self::Likert5 => trimmed
                .parse::<u8>()
                .ok()
                .filter(|v| *v <= LIKERT_MAX)
                .map(AnswerValue::Likert),
            Self::YesNo => match trimmed.to_ascii_lowercase().as_str() {
                "y" | "yes" | "1" | "true" => Some(AnswerValue::YesNo(true)),
                "n" | "no" | "0" | "false" => Some(AnswerValue::YesNo(false)),
                _ => None,
            },
            Self::OpenText => Some(AnswerValue::Text(raw.to_owned())),
        }
    }

    /// Display labels for the choices of a closed scale, in value order.
    ///
    /// Open text has no fixed choices and returns an empty list.
    #[must_use]
    pub fn choice_labels(self) -> Vec<String> {
        match self {
            Self::Likert5 => (0..=LIKERT_MAX).map(likert_label).collect(),
            Self::YesNo => vec!["Yes".to_owned(), "No".to_owned()],
            Self::OpenText => Vec::new(),
        }
    }
}

/// Label shown next to a likert point: the endpoints are named, the middle is numeric.
#[must_use]
pub fn likert_label(value: u8) -> String {
    match value {
        0 => "Strongly Disagree".to_owned(),
        LIKERT_MAX => "Strongly Agree".to_owned(),
        other => other.to_string(),
    }
}

//
// ─── QUESTION ──────────────────────────────────────────────────────────────────
//

/// A questionnaire item. Immutable once loaded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Question {
    id: QuestionId,
    text: String,
    scale: ScaleType,
}

impl Question {
    /// Creates a question.
    ///
    /// Blank text is accepted and rendered with a placeholder.
    ///
    /// # Errors
    ///
    /// Returns `QuestionError::EmptyId` if the id is blank.
    pub fn new(
        id: QuestionId,
        text: impl Into<String>,
        scale: ScaleType,
    ) -> Result<Self, QuestionError> {
        if id.is_empty() {
            return Err(QuestionError::EmptyId);
        }
        Ok(Self {
            id,
            text: text.into().trim().to_owned(),
            scale,
        })
    }

    #[must_use]
    pub fn id(&self) -> &QuestionId {
        &self.id
    }

    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    #[must_use]
    pub fn scale(&self) -> ScaleType {
        self.scale
    }

    /// Text to show the user; falls back to a placeholder when blank.
    #[must_use]
    pub fn display_text(&self) -> &str {
        if self.text.is_empty() {
            MISSING_TEXT_PLACEHOLDER
        } else {
            &self.text
        }
    }
}
