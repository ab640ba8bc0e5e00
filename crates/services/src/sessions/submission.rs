use chrono::{DateTime, Utc};
use tracing::warn;

use lrs_core::PatternLibrary;
use lrs_core::model::AnswerSheet;
use lrs_core::ranking::{Ranking, RemoteScore};

use crate::error::ScoringError;

/// Handle for the single in-flight submission.
///
/// Carries a snapshot of the answers being scored. The session only accepts a
/// result that comes back with the ticket it is currently waiting on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmissionTicket {
    id: u64,
    answers: AnswerSheet,
}

impl SubmissionTicket {
    pub(crate) fn new(id: u64, answers: AnswerSheet) -> Self {
        Self { id, answers }
    }

    #[must_use]
    pub fn id(&self) -> u64 {
        self.id
    }

    #[must_use]
    pub fn answers(&self) -> &AnswerSheet {
        &self.answers
    }
}

/// Turn a scoring result into a ranking; any failure yields the fallback.
pub(crate) fn resolve(
    library: &PatternLibrary,
    result: Result<Vec<RemoteScore>, ScoringError>,
    now: DateTime<Utc>,
) -> Ranking {
    match result {
        Ok(scores) => Ranking::scored(library, &scores, now),
        Err(err) => {
            warn!(error = %err, "scoring failed, showing unranked library");
            Ranking::fallback(library, now)
        }
    }
}
