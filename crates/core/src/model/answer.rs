use std::collections::BTreeMap;

use thiserror::Error;

use crate::model::ids::QuestionId;
use crate::model::question::{LIKERT_MAX, Question, ScaleType};

/// Upper bound on free-text answers, in characters.
pub const MAX_OPEN_TEXT_CHARS: usize = 2000;

//
// ─── ERRORS ────────────────────────────────────────────────────────────────────
//

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum AnswerError {
    #[error("no question with id {0}")]
    UnknownQuestion(QuestionId),

    #[error("answer for {id} does not fit a {expected:?} scale")]
    ScaleMismatch { id: QuestionId, expected: ScaleType },

    #[error("answer for {id} must be between 0 and {max}, got {value}")]
    OutOfRange { id: QuestionId, value: u8, max: u8 },

    #[error("answer for {id} is {len} characters, limit is {max}")]
    TooLong { id: QuestionId, len: usize, max: usize },
}

//
// ─── ANSWER VALUE ──────────────────────────────────────────────────────────────
//

/// A single response. The valid variant is decided by the question's scale.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AnswerValue {
    Likert(u8),
    YesNo(bool),
    Text(String),
}

impl AnswerValue {
    /// Whether this value counts toward completeness. Blank text does not.
    #[must_use]
    pub fn is_answered(&self) -> bool {
        match self {
            Self::Text(text) => !text.trim().is_empty(),
            Self::Likert(_) | Self::YesNo(_) => true,
        }
    }
}

//
// ─── ANSWER SHEET ──────────────────────────────────────────────────────────────
//

/// Answers keyed by question id, one per question.
///
/// Entries are only ever added through [`AnswerSheet::record`], which checks
/// the id against the loaded questions, so the sheet never holds an answer
/// for an unknown question.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AnswerSheet {
    values: BTreeMap<QuestionId, AnswerValue>,
}

impl AnswerSheet {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Record `value` for question `id`, replacing any earlier answer.
    ///
    /// Setting the same value twice leaves the sheet unchanged.
    ///
    /// # Errors
    ///
    /// Returns `AnswerError::UnknownQuestion` if `id` is not in `questions`,
    /// `AnswerError::ScaleMismatch`/`OutOfRange` if the value does not fit the
    /// question's scale, and `AnswerError::TooLong` for oversized text.
    pub fn record(
        &mut self,
        questions: &[Question],
        id: &QuestionId,
        value: AnswerValue,
    ) -> Result<(), AnswerError> {
        let question = questions
            .iter()
            .find(|q| q.id() == id)
            .ok_or_else(|| AnswerError::UnknownQuestion(id.clone()))?;
        validate(question, &value)?;
        self.values.insert(id.clone(), value);
        Ok(())
    }

    #[must_use]
    pub fn get(&self, id: &QuestionId) -> Option<&AnswerValue> {
        self.values.get(id)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&QuestionId, &AnswerValue)> {
        self.values.iter()
    }

    /// Whether `question` has an answer that counts toward completeness.
    #[must_use]
    pub fn is_answered(&self, question: &Question) -> bool {
        self.values
            .get(question.id())
            .is_some_and(AnswerValue::is_answered)
    }

    /// Number of questions without a counting answer.
    #[must_use]
    pub fn missing_count(&self, questions: &[Question]) -> usize {
        questions.iter().filter(|q| !self.is_answered(q)).count()
    }

    /// True iff every question has a counting answer.
    #[must_use]
    pub fn is_complete(&self, questions: &[Question]) -> bool {
        self.missing_count(questions) == 0
    }
}

fn validate(question: &Question, value: &AnswerValue) -> Result<(), AnswerError> {
    match (question.scale(), value) {
        (ScaleType::Likert5, AnswerValue::Likert(v)) if *v > LIKERT_MAX => {
            Err(AnswerError::OutOfRange {
                id: question.id().clone(),
                value: *v,
                max: LIKERT_MAX,
            })
        }
        (ScaleType::OpenText, AnswerValue::Text(text)) => {
            let len = text.chars().count();
            if len > MAX_OPEN_TEXT_CHARS {
                return Err(AnswerError::TooLong {
                    id: question.id().clone(),
                    len,
                    max: MAX_OPEN_TEXT_CHARS,
                });
            }
            Ok(())
        }
        (scale, value) if scale.accepts(value) => Ok(()),
        (scale, _) => Err(AnswerError::ScaleMismatch {
            id: question.id().clone(),
            expected: scale,
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn questions() -> Vec<Question> {
        vec![
            Question::new(QuestionId::new("1"), "I worry people will leave", ScaleType::Likert5)
                .unwrap(),
            Question::new(QuestionId::new("2"), "Do you live alone?", ScaleType::YesNo).unwrap(),
            Question::new(QuestionId::new("3"), "Describe a recent worry", ScaleType::OpenText)
                .unwrap(),
        ]
    }

    #[test]
    fn record_is_idempotent() {
        let qs = questions();
        let id = QuestionId::new("1");
        let mut sheet = AnswerSheet::new();
        sheet.record(&qs, &id, AnswerValue::Likert(2)).unwrap();
        let once = sheet.clone();
        sheet.record(&qs, &id, AnswerValue::Likert(2)).unwrap();
        assert_eq!(sheet, once);
        assert_eq!(sheet.len(), 1);
    }

    #[test]
    fn record_overwrites_previous_answer() {
        let qs = questions();
        let id = QuestionId::new("1");
        let mut sheet = AnswerSheet::new();
        sheet.record(&qs, &id, AnswerValue::Likert(0)).unwrap();
        sheet.record(&qs, &id, AnswerValue::Likert(4)).unwrap();
        assert_eq!(sheet.get(&id), Some(&AnswerValue::Likert(4)));
    }

    #[test]
    fn unknown_question_is_rejected() {
        let qs = questions();
        let mut sheet = AnswerSheet::new();
        let err = sheet
            .record(&qs, &QuestionId::new("99"), AnswerValue::Likert(1))
            .unwrap_err();
        assert!(matches!(err, AnswerError::UnknownQuestion(_)));
        assert!(sheet.is_empty());
    }

    #[test]
    fn values_must_fit_the_scale() {
        let qs = questions();
        let mut sheet = AnswerSheet::new();
        assert!(matches!(
            sheet.record(&qs, &QuestionId::new("1"), AnswerValue::Likert(5)),
            Err(AnswerError::OutOfRange { value: 5, .. })
        ));
        assert!(matches!(
            sheet.record(&qs, &QuestionId::new("2"), AnswerValue::Likert(1)),
            Err(AnswerError::ScaleMismatch {
                expected: ScaleType::YesNo,
                ..
            })
        ));
        let long = "x".repeat(MAX_OPEN_TEXT_CHARS + 1);
        assert!(matches!(
            sheet.record(&qs, &QuestionId::new("3"), AnswerValue::Text(long)),
            Err(AnswerError::TooLong { .. })
        ));
        assert!(sheet.is_empty());
    }

    #[test]
    fn completeness_requires_every_question() {
        let qs = questions();
        let mut sheet = AnswerSheet::new();
        assert_eq!(sheet.missing_count(&qs), 3);

        sheet
            .record(&qs, &QuestionId::new("1"), AnswerValue::Likert(3))
            .unwrap();
        sheet
            .record(&qs, &QuestionId::new("2"), AnswerValue::YesNo(false))
            .unwrap();
        assert!(!sheet.is_complete(&qs));
        assert_eq!(sheet.missing_count(&qs), 1);

        sheet
            .record(&qs, &QuestionId::new("3"), AnswerValue::Text("late nights".into()))
            .unwrap();
        assert!(sheet.is_complete(&qs));
    }

    #[test]
    fn blank_text_does_not_count() {
        let qs = questions();
        let mut sheet = AnswerSheet::new();
        sheet
            .record(&qs, &QuestionId::new("3"), AnswerValue::Text("   ".into()))
            .unwrap();
        assert_eq!(sheet.len(), 1);
        assert!(!sheet.is_answered(&qs[2]));
        assert_eq!(sheet.missing_count(&qs), 3);
    }
}
