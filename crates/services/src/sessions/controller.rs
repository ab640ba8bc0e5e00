use std::fmt;

use tracing::{debug, info, warn};

use lrs_core::export::{self, ExportDocument};
use lrs_core::model::{AnswerSheet, AnswerValue, Question, QuestionId, ScoredPattern};
use lrs_core::progress::ProgressTracker;
use lrs_core::ranking::{Ranking, RemoteScore};
use lrs_core::{Clock, PatternLibrary};

use super::state::{LoadState, NavAction, SubmissionStatus, View};
use super::submission::{self, SubmissionTicket};
use crate::error::{QuestionSourceError, ScoringError, SessionError};
use crate::question_source::QuestionSource;
use crate::scoring::ScoringService;

//
// ─── SESSION ───────────────────────────────────────────────────────────────────
//

/// One pass through the assessment, from landing to results.
///
/// Owns every piece of mutable session state. Views read through the
/// accessors; all changes go through the methods below.
///
/// Network calls are split into a synchronous begin/apply pair
/// (`apply_questions`, `begin_submission`/`finish_submission`) so a UI event
/// loop can run the request itself. `load_questions` and `submit` do both
/// halves in one call.
pub struct AssessmentSession {
    clock: Clock,
    library: PatternLibrary,
    load: LoadState,
    questions: Vec<Question>,
    answers: AnswerSheet,
    view: View,
    ranking: Option<Ranking>,
    selected: Option<usize>,
    progress: ProgressTracker,
    status: SubmissionStatus,
    pending: Option<u64>,
    next_ticket: u64,
}

impl AssessmentSession {
    /// Create a session on the landing view with no questions requested yet.
    #[must_use]
    pub fn new(library: PatternLibrary, clock: Clock) -> Self {
        Self {
            clock,
            library,
            load: LoadState::NotRequested,
            questions: Vec::new(),
            answers: AnswerSheet::new(),
            view: View::Landing,
            ranking: None,
            selected: None,
            progress: ProgressTracker::new(),
            status: SubmissionStatus::NotSubmitted,
            pending: None,
            next_ticket: 1,
        }
    }

    #[must_use]
    pub fn view(&self) -> View {
        self.view
    }

    #[must_use]
    pub fn load_state(&self) -> &LoadState {
        &self.load
    }

    #[must_use]
    pub fn library(&self) -> &PatternLibrary {
        &self.library
    }

    #[must_use]
    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    #[must_use]
    pub fn answers(&self) -> &AnswerSheet {
        &self.answers
    }

    #[must_use]
    pub fn submission_status(&self) -> SubmissionStatus {
        self.status
    }

    /// True when the current ranking is the zero-scored fallback.
    #[must_use]
    pub fn is_degraded(&self) -> bool {
        self.status == SubmissionStatus::Degraded
    }

    #[must_use]
    pub fn ranking(&self) -> Option<&Ranking> {
        self.ranking.as_ref()
    }

    /// Ranked patterns, empty before the first submission.
    #[must_use]
    pub fn ranked(&self) -> &[ScoredPattern] {
        match &self.ranking {
            Some(ranking) => ranking.patterns(),
            None => &[],
        }
    }

    #[must_use]
    pub fn selected(&self) -> Option<&ScoredPattern> {
        self.selected.and_then(|idx| self.ranked().get(idx))
    }

    #[must_use]
    pub fn progress(&self) -> &ProgressTracker {
        &self.progress
    }

    //
    // ─── QUESTION LOADING ──────────────────────────────────────────────────────
    //

    /// Fetch the questionnaire. Allowed once per session.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::AlreadyLoaded` on a second call and
    /// `SessionError::QuestionsUnavailable` if the source fails; the session
    /// then stays blocked.
    pub async fn load_questions(
        &mut self,
        source: &dyn QuestionSource,
    ) -> Result<usize, SessionError> {
        if self.load != LoadState::NotRequested {
            return Err(SessionError::AlreadyLoaded);
        }
        self.load = LoadState::Loading;
        let result = source.fetch_questions().await;
        self.apply_questions(result)
    }

    /// Apply the outcome of a question fetch started outside the session.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::AlreadyLoaded` if questions were already applied
    /// or failed, and `SessionError::QuestionsUnavailable` for a failed fetch.
    pub fn apply_questions(
        &mut self,
        result: Result<Vec<Question>, QuestionSourceError>,
    ) -> Result<usize, SessionError> {
        if !matches!(self.load, LoadState::NotRequested | LoadState::Loading) {
            return Err(SessionError::AlreadyLoaded);
        }
        match result {
            Ok(questions) => {
                let count = questions.len();
                self.questions = questions;
                self.load = LoadState::Ready;
                info!(count, "questionnaire ready");
                Ok(count)
            }
            Err(err) => {
                let message = err.to_string();
                warn!(error = %message, "questionnaire could not be loaded");
                self.load = LoadState::Failed(message.clone());
                Err(SessionError::QuestionsUnavailable(message))
            }
        }
    }

    //
    // ─── NAVIGATION ────────────────────────────────────────────────────────────
    //

    /// Leave the landing view for the questionnaire.
    ///
    /// Allowed while questions are still loading; the quiz shows as blocked
    /// until they arrive.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::QuestionsUnavailable` if the load failed, and
    /// `SessionError::InvalidTransition` outside the landing view.
    pub fn start(&mut self) -> Result<(), SessionError> {
        self.check_transition(NavAction::Start)?;
        if let LoadState::Failed(message) = &self.load {
            return Err(SessionError::QuestionsUnavailable(message.clone()));
        }
        self.enter(NavAction::Start);
        Ok(())
    }

    /// Open the detail view for the pattern named `name`.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::InvalidTransition` outside the results overview and
    /// `SessionError::UnknownPattern` if no ranked pattern has that name.
    pub fn select(&mut self, name: &str) -> Result<&ScoredPattern, SessionError> {
        self.check_transition(NavAction::Select)?;
        let idx = self
            .ranking
            .as_ref()
            .and_then(|ranking| ranking.position(name))
            .ok_or_else(|| SessionError::UnknownPattern(name.to_owned()))?;
        self.select_index(idx)
    }

    /// Open the detail view for the pattern at 1-based `rank`.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::InvalidTransition` outside the results overview and
    /// `SessionError::UnknownRank` if `rank` is out of range.
    pub fn select_rank(&mut self, rank: usize) -> Result<&ScoredPattern, SessionError> {
        self.check_transition(NavAction::Select)?;
        let idx = rank
            .checked_sub(1)
            .filter(|idx| *idx < self.ranked().len())
            .ok_or(SessionError::UnknownRank(rank))?;
        self.select_index(idx)
    }

    fn select_index(&mut self, idx: usize) -> Result<&ScoredPattern, SessionError> {
        self.selected = Some(idx);
        self.enter(NavAction::Select);
        self.ranked().get(idx).ok_or(SessionError::UnknownRank(idx + 1))
    }

    /// Return from the detail view to the overview, clearing the selection.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::InvalidTransition` outside the detail view.
    pub fn back(&mut self) -> Result<(), SessionError> {
        self.check_transition(NavAction::Back)?;
        self.selected = None;
        self.enter(NavAction::Back);
        Ok(())
    }

    fn check_transition(&self, action: NavAction) -> Result<View, SessionError> {
        self.view.after(action).ok_or(SessionError::InvalidTransition {
            from: self.view,
            action,
        })
    }

    fn enter(&mut self, action: NavAction) {
        if let Some(next) = self.view.after(action) {
            debug!(from = ?self.view, to = ?next, %action, "view transition");
            self.view = next;
        }
    }

    //
    // ─── ANSWERS ───────────────────────────────────────────────────────────────
    //

    /// Record an answer, replacing any earlier one for the same question.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::WrongView` outside the quiz, a loading error if
    /// the questions are not ready, `SessionError::SubmissionPending` while a
    /// submission is in flight, and `SessionError::Answer` for an unknown id
    /// or a value that does not fit the question's scale.
    pub fn set_answer(&mut self, id: &QuestionId, value: AnswerValue) -> Result<(), SessionError> {
        self.ensure_quiz_open("answering")?;
        if self.pending.is_some() {
            return Err(SessionError::SubmissionPending);
        }
        self.answers.record(&self.questions, id, value)?;
        Ok(())
    }

    #[must_use]
    pub fn missing_answers(&self) -> usize {
        self.answers.missing_count(&self.questions)
    }

    /// True iff questions are loaded and every one has a counting answer.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.load.is_ready() && self.answers.is_complete(&self.questions)
    }

    fn ensure_quiz_open(&self, operation: &'static str) -> Result<(), SessionError> {
        if self.view != View::Quiz {
            return Err(SessionError::WrongView {
                view: self.view,
                operation,
            });
        }
        match &self.load {
            LoadState::Ready => Ok(()),
            LoadState::Failed(message) => Err(SessionError::QuestionsUnavailable(message.clone())),
            LoadState::NotRequested | LoadState::Loading => Err(SessionError::QuestionsLoading),
        }
    }

    //
    // ─── SUBMISSION ────────────────────────────────────────────────────────────
    //

    /// Validate the answers and mark a submission as in flight.
    ///
    /// Nothing is sent; the caller scores `ticket.answers()` and hands the
    /// result to [`AssessmentSession::finish_submission`].
    ///
    /// # Errors
    ///
    /// Returns `SessionError::SubmissionPending` if a submission is already in
    /// flight and `SessionError::Incomplete` with the missing count if any
    /// question is unanswered. Neither changes the session.
    pub fn begin_submission(&mut self) -> Result<SubmissionTicket, SessionError> {
        self.check_transition(NavAction::Submit)?;
        self.ensure_quiz_open("submitting")?;
        if self.pending.is_some() {
            debug!("submission ignored, one is already in flight");
            return Err(SessionError::SubmissionPending);
        }
        let missing = self.missing_answers();
        if missing > 0 {
            info!(missing, "submission rejected, answers incomplete");
            return Err(SessionError::Incomplete { missing });
        }

        let id = self.next_ticket;
        self.next_ticket += 1;
        self.pending = Some(id);
        self.status = SubmissionStatus::Pending;
        info!(ticket = id, answers = self.answers.len(), "submission started");
        Ok(SubmissionTicket::new(id, self.answers.clone()))
    }

    /// Apply the scoring result for `ticket` and show the ranked results.
    ///
    /// Failed scoring still reaches the results, ranked by the fallback, with
    /// the status set to [`SubmissionStatus::Degraded`]. Progress flags start
    /// fresh with every applied ranking.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::StaleSubmission` if `ticket` is not the one in
    /// flight; the result is discarded.
    pub fn finish_submission(
        &mut self,
        ticket: SubmissionTicket,
        result: Result<Vec<RemoteScore>, ScoringError>,
    ) -> Result<&Ranking, SessionError> {
        if self.pending != Some(ticket.id()) {
            warn!(ticket = ticket.id(), pending = ?self.pending, "discarding stale scoring result");
            return Err(SessionError::StaleSubmission);
        }
        self.pending = None;

        let ranking = submission::resolve(&self.library, result, self.clock.now());
        self.status = if ranking.is_degraded() {
            SubmissionStatus::Degraded
        } else {
            SubmissionStatus::Scored
        };
        info!(
            ticket = ticket.id(),
            patterns = ranking.len(),
            degraded = ranking.is_degraded(),
            "results ready"
        );
        self.selected = None;
        self.progress.clear();
        self.enter(NavAction::Submit);
        Ok(&*self.ranking.insert(ranking))
    }

    /// Validate, score and apply in one step.
    ///
    /// # Errors
    ///
    /// Returns the validation errors of [`AssessmentSession::begin_submission`].
    /// Scoring failures are not errors; they produce a degraded ranking.
    pub async fn submit(
        &mut self,
        scorer: &dyn ScoringService,
    ) -> Result<&Ranking, SessionError> {
        let ticket = self.begin_submission()?;
        let result = scorer.score(ticket.answers()).await;
        self.finish_submission(ticket, result)
    }

    //
    // ─── PROGRESS & EXPORT ─────────────────────────────────────────────────────
    //

    /// Flip the completion flag of one plan week and return the new value.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::WrongView` before results are shown.
    pub fn toggle_week(&mut self, pattern: &str, week: &str) -> Result<bool, SessionError> {
        if !self.view.shows_results() {
            return Err(SessionError::WrongView {
                view: self.view,
                operation: "tracking progress",
            });
        }
        let done = self.progress.toggle(pattern, week);
        debug!(pattern, week, done, "week toggled");
        Ok(done)
    }

    #[must_use]
    pub fn is_week_complete(&self, pattern: &str, week: &str) -> bool {
        self.progress.is_complete(pattern, week)
    }

    /// Export payload for the ranked pattern named `name`.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::UnknownPattern` if no ranked pattern has that name.
    pub fn export(&self, name: &str) -> Result<ExportDocument, SessionError> {
        self.ranked()
            .iter()
            .find(|pattern| pattern.name() == name)
            .map(export::format)
            .ok_or_else(|| SessionError::UnknownPattern(name.to_owned()))
    }

    /// Export payload for the pattern open in the detail view.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::WrongView` when no pattern is selected.
    pub fn export_selected(&self) -> Result<ExportDocument, SessionError> {
        self.selected()
            .map(export::format)
            .ok_or(SessionError::WrongView {
                view: self.view,
                operation: "exporting",
            })
    }
}

impl fmt::Debug for AssessmentSession {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AssessmentSession")
            .field("view", &self.view)
            .field("load", &self.load)
            .field("questions_len", &self.questions.len())
            .field("answers_len", &self.answers.len())
            .field("ranked_len", &self.ranked().len())
            .field("selected", &self.selected)
            .field("status", &self.status)
            .field("pending", &self.pending)
            .finish_non_exhaustive()
    }
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//

#[cfg(test)]
mod tests {
    use super::*;
    use lrs_core::model::ScaleType;
    use lrs_core::time::fixed_clock;

    fn questions(n: usize) -> Vec<Question> {
        (1..=n)
            .map(|i| {
                Question::new(QuestionId::from(i as u64), format!("Q{i}"), ScaleType::Likert5)
                    .unwrap()
            })
            .collect()
    }

    fn quiz_session(n: usize) -> AssessmentSession {
        let mut session = AssessmentSession::new(PatternLibrary::builtin().unwrap(), fixed_clock());
        session.apply_questions(Ok(questions(n))).unwrap();
        session.start().unwrap();
        session
    }

    fn answer_all(session: &mut AssessmentSession) {
        let ids: Vec<_> = session.questions().iter().map(|q| q.id().clone()).collect();
        for id in ids {
            session.set_answer(&id, AnswerValue::Likert(2)).unwrap();
        }
    }

    #[test]
    fn new_session_starts_on_landing() {
        let session = AssessmentSession::new(PatternLibrary::builtin().unwrap(), fixed_clock());
        assert_eq!(session.view(), View::Landing);
        assert_eq!(session.load_state(), &LoadState::NotRequested);
        assert_eq!(session.submission_status(), SubmissionStatus::NotSubmitted);
        assert!(session.ranked().is_empty());
        assert!(session.selected().is_none());
    }

    #[test]
    fn quiz_is_blocked_until_questions_arrive() {
        let mut session = AssessmentSession::new(PatternLibrary::builtin().unwrap(), fixed_clock());
        session.start().unwrap();
        assert_eq!(session.view(), View::Quiz);
        assert_eq!(
            session.set_answer(&QuestionId::new("1"), AnswerValue::Likert(1)),
            Err(SessionError::QuestionsLoading)
        );
        assert!(!session.is_complete());

        session.apply_questions(Ok(questions(1))).unwrap();
        session
            .set_answer(&QuestionId::new("1"), AnswerValue::Likert(1))
            .unwrap();
        assert!(session.is_complete());
    }

    #[test]
    fn failed_load_blocks_the_quiz() {
        let mut session = AssessmentSession::new(PatternLibrary::builtin().unwrap(), fixed_clock());
        let err = session
            .apply_questions(Err(QuestionSourceError::Network("timed out".into())))
            .unwrap_err();
        assert!(matches!(err, SessionError::QuestionsUnavailable(_)));
        assert!(matches!(session.start(), Err(SessionError::QuestionsUnavailable(_))));
        assert_eq!(session.view(), View::Landing);
        assert_eq!(
            session.apply_questions(Ok(questions(1))),
            Err(SessionError::AlreadyLoaded)
        );
    }

    #[test]
    fn incomplete_submission_names_missing_count() {
        let mut session = quiz_session(3);
        session
            .set_answer(&QuestionId::new("1"), AnswerValue::Likert(4))
            .unwrap();
        assert_eq!(
            session.begin_submission(),
            Err(SessionError::Incomplete { missing: 2 })
        );
        assert_eq!(session.view(), View::Quiz);
        assert_eq!(session.submission_status(), SubmissionStatus::NotSubmitted);
    }

    #[test]
    fn second_submission_is_refused_while_pending() {
        let mut session = quiz_session(2);
        answer_all(&mut session);
        let ticket = session.begin_submission().unwrap();
        assert_eq!(session.submission_status(), SubmissionStatus::Pending);
        assert_eq!(session.begin_submission(), Err(SessionError::SubmissionPending));
        assert_eq!(
            session.set_answer(&QuestionId::new("1"), AnswerValue::Likert(0)),
            Err(SessionError::SubmissionPending)
        );

        session.finish_submission(ticket, Ok(Vec::new())).unwrap();
        assert_eq!(session.view(), View::ResultsOverview);
    }

    #[test]
    fn stale_ticket_is_discarded() {
        let mut session = quiz_session(1);
        answer_all(&mut session);
        let ticket = session.begin_submission().unwrap();
        let stale = SubmissionTicket::new(ticket.id() + 7, AnswerSheet::new());

        assert_eq!(
            session
                .finish_submission(stale, Ok(vec![RemoteScore::new("Failure", 9.0)]))
                .map(|_| ()),
            Err(SessionError::StaleSubmission)
        );
        assert_eq!(session.view(), View::Quiz);
        assert!(session.ranked().is_empty());

        session.finish_submission(ticket, Ok(Vec::new())).unwrap();
        assert_eq!(session.submission_status(), SubmissionStatus::Scored);
    }

    #[test]
    fn scoring_failure_degrades_to_library_order() {
        let mut session = quiz_session(2);
        answer_all(&mut session);
        let ticket = session.begin_submission().unwrap();
        session
            .finish_submission(ticket, Err(ScoringError::Network("refused".into())))
            .unwrap();

        assert_eq!(session.view(), View::ResultsOverview);
        assert!(session.is_degraded());
        let library: Vec<_> = session
            .library()
            .patterns()
            .iter()
            .map(|p| p.name().to_owned())
            .collect();
        let ranked: Vec<_> = session.ranked().iter().map(|p| p.name().to_owned()).collect();
        assert_eq!(ranked, library);
        assert!(session.ranked().iter().all(|p| p.score() == 0.0));
    }

    #[test]
    fn select_and_back_manage_selection() {
        let mut session = quiz_session(1);
        answer_all(&mut session);
        let ticket = session.begin_submission().unwrap();
        session
            .finish_submission(ticket, Ok(vec![RemoteScore::new("Failure", 4.0)]))
            .unwrap();

        assert_eq!(
            session.back(),
            Err(SessionError::InvalidTransition {
                from: View::ResultsOverview,
                action: NavAction::Back,
            })
        );
        assert!(matches!(
            session.select("Nope"),
            Err(SessionError::UnknownPattern(_))
        ));
        assert_eq!(session.view(), View::ResultsOverview);

        assert_eq!(session.select("Failure").unwrap().score(), 4.0);
        assert_eq!(session.view(), View::ResultsDetail);
        assert!(session.select_rank(2).is_err());

        session.back().unwrap();
        assert!(session.selected().is_none());
        assert_eq!(session.select_rank(1).unwrap().name(), "Failure");
        assert_eq!(
            session.select_rank(0).map(|_| ()),
            Err(SessionError::InvalidTransition {
                from: View::ResultsDetail,
                action: NavAction::Select,
            })
        );
    }

    #[test]
    fn out_of_range_rank_is_rejected() {
        let mut session = quiz_session(1);
        answer_all(&mut session);
        let ticket = session.begin_submission().unwrap();
        session.finish_submission(ticket, Ok(Vec::new())).unwrap();
        assert_eq!(session.select_rank(0).map(|_| ()), Err(SessionError::UnknownRank(0)));
        assert_eq!(session.select_rank(19).map(|_| ()), Err(SessionError::UnknownRank(19)));
        assert_eq!(session.view(), View::ResultsOverview);
    }

    #[test]
    fn progress_is_only_tracked_on_results() {
        let mut session = quiz_session(1);
        assert!(matches!(
            session.toggle_week("Failure", "week1"),
            Err(SessionError::WrongView { .. })
        ));
        answer_all(&mut session);
        let ticket = session.begin_submission().unwrap();
        session.finish_submission(ticket, Ok(Vec::new())).unwrap();

        assert!(session.toggle_week("Failure", "week1").unwrap());
        assert!(session.is_week_complete("Failure", "week1"));
        assert!(!session.toggle_week("Failure", "week1").unwrap());
        assert!(!session.is_week_complete("Failure", "week1"));
    }

    #[test]
    fn export_does_not_depend_on_progress() {
        let mut session = quiz_session(1);
        answer_all(&mut session);
        let ticket = session.begin_submission().unwrap();
        session.finish_submission(ticket, Ok(Vec::new())).unwrap();

        let before = session.export("Failure").unwrap();
        session.toggle_week("Failure", "week2").unwrap();
        assert_eq!(session.export("Failure").unwrap(), before);
        assert!(matches!(
            session.export_selected(),
            Err(SessionError::WrongView { .. })
        ));

        session.select("Failure").unwrap();
        assert_eq!(session.export_selected().unwrap(), before);
        assert!(matches!(
            session.export("Unknown"),
            Err(SessionError::UnknownPattern(_))
        ));
    }
}
