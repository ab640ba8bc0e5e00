#![forbid(unsafe_code)]

pub mod backend;
pub mod config;
pub mod error;
pub mod question_source;
pub mod scoring;
pub mod sessions;

pub use lrs_core::Clock;
pub use sessions as session;

pub use backend::{HealthStatus, HttpBackend};
pub use config::BackendConfig;
pub use error::{HealthError, QuestionSourceError, ScoringError, SessionError};
pub use question_source::QuestionSource;
pub use scoring::ScoringService;

pub use sessions::{
    AssessmentSession, LoadState, NavAction, OverviewCard, PatternDetail, QuestionItem,
    QuizProgress, SubmissionStatus, SubmissionTicket, View, WeekRow,
};
