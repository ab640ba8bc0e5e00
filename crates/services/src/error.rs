//! Shared error types for the services crate.

use thiserror::Error;

use lrs_core::model::AnswerError;

use crate::sessions::{NavAction, View};

/// Errors emitted while loading the questionnaire.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum QuestionSourceError {
    #[error("question source unreachable: {0}")]
    Network(String),
    #[error("question source returned malformed data: {0}")]
    Malformed(String),
}

/// Errors emitted by the scoring service.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum ScoringError {
    #[error("scoring service unreachable: {0}")]
    Network(String),
    #[error("scoring service failed with status {status}: {}", .message.as_deref().unwrap_or("no details"))]
    Service {
        status: u16,
        message: Option<String>,
    },
    #[error("scoring service returned malformed data: {0}")]
    Malformed(String),
}

/// Errors emitted by the backend health probe.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum HealthError {
    #[error("backend health check failed with status {0}")]
    HttpStatus(reqwest::StatusCode),
    #[error(transparent)]
    Http(#[from] reqwest::Error),
}

/// Errors emitted by the assessment session.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum SessionError {
    #[error("{missing} question(s) still need an answer")]
    Incomplete { missing: usize },
    #[error("questions are still loading")]
    QuestionsLoading,
    #[error("questions could not be loaded: {0}")]
    QuestionsUnavailable(String),
    #[error("questions were already requested for this session")]
    AlreadyLoaded,
    #[error("cannot {action} from the {from:?} view")]
    InvalidTransition { from: View, action: NavAction },
    #[error("{operation} is not available from the {view:?} view")]
    WrongView { view: View, operation: &'static str },
    #[error("a submission is already in flight")]
    SubmissionPending,
    #[error("submission result does not match the pending request")]
    StaleSubmission,
    #[error("no scored pattern named {0:?}")]
    UnknownPattern(String),
    #[error("no pattern at rank {0}")]
    UnknownRank(usize),
    #[error(transparent)]
    Answer(#[from] AnswerError),
}
