use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;
use lrs_core::PatternLibrary;
use lrs_core::model::{AnswerSheet, AnswerValue, Question, QuestionId, ScaleType};
use lrs_core::ranking::RemoteScore;
use lrs_core::time::{fixed_clock, fixed_now};
use services::{
    AssessmentSession, QuestionSource, QuestionSourceError, ScoringError, ScoringService,
    SessionError, SubmissionStatus, View,
};

struct FixedQuestions {
    questions: Vec<Question>,
    calls: AtomicUsize,
}

impl FixedQuestions {
    fn new(n: usize) -> Self {
        let questions = (1..=n)
            .map(|i| {
                let scale = if i % 3 == 0 {
                    ScaleType::YesNo
                } else {
                    ScaleType::Likert5
                };
                Question::new(QuestionId::from(i as u64), format!("Statement {i}"), scale)
                    .unwrap()
            })
            .collect();
        Self {
            questions,
            calls: AtomicUsize::new(0),
        }
    }
}

#[async_trait]
impl QuestionSource for FixedQuestions {
    async fn fetch_questions(&self) -> Result<Vec<Question>, QuestionSourceError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Ok(self.questions.clone())
    }
}

struct BrokenSource;

#[async_trait]
impl QuestionSource for BrokenSource {
    async fn fetch_questions(&self) -> Result<Vec<Question>, QuestionSourceError> {
        Err(QuestionSourceError::Malformed("expected a list".into()))
    }
}

/// Scorer returning a canned result and remembering what it was sent.
struct CannedScorer {
    result: Result<Vec<RemoteScore>, ScoringError>,
    calls: AtomicUsize,
    last_sheet: Mutex<Option<AnswerSheet>>,
}

impl CannedScorer {
    fn new(result: Result<Vec<RemoteScore>, ScoringError>) -> Self {
        Self {
            result,
            calls: AtomicUsize::new(0),
            last_sheet: Mutex::new(None),
        }
    }

    fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl ScoringService for CannedScorer {
    async fn score(&self, answers: &AnswerSheet) -> Result<Vec<RemoteScore>, ScoringError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        *self.last_sheet.lock().unwrap() = Some(answers.clone());
        self.result.clone()
    }
}

async fn open_session(source: &dyn QuestionSource) -> AssessmentSession {
    let mut session = AssessmentSession::new(PatternLibrary::builtin().unwrap(), fixed_clock());
    session.load_questions(source).await.unwrap();
    session
}

fn answer_everything(session: &mut AssessmentSession) {
    let questions: Vec<Question> = session.questions().to_vec();
    for question in questions {
        let value = match question.scale() {
            ScaleType::Likert5 => AnswerValue::Likert(3),
            ScaleType::YesNo => AnswerValue::YesNo(false),
            ScaleType::OpenText => AnswerValue::Text("something".into()),
        };
        session.set_answer(question.id(), value).unwrap();
    }
}

#[tokio::test]
async fn full_navigation_scenario() {
    let source = FixedQuestions::new(6);
    let mut session = open_session(&source).await;
    assert_eq!(session.view(), View::Landing);

    session.start().unwrap();
    assert_eq!(session.view(), View::Quiz);
    answer_everything(&mut session);
    assert!(session.is_complete());

    let scorer = CannedScorer::new(Ok(vec![
        RemoteScore::new("Failure", 8.0),
        RemoteScore::new("Subjugation", 5.0),
        RemoteScore::new("Punitiveness", 6.5),
    ]));
    let ranking = session.submit(&scorer).await.unwrap();
    assert!(!ranking.is_degraded());
    assert_eq!(ranking.ranked_at(), fixed_now());

    assert_eq!(session.view(), View::ResultsOverview);
    assert_eq!(session.submission_status(), SubmissionStatus::Scored);
    assert_eq!(session.ranked().len(), session.library().len());
    let top: Vec<_> = session.ranked()[..3].iter().map(|p| p.name()).collect();
    assert_eq!(top, ["Failure", "Punitiveness", "Subjugation"]);

    let third = session.ranked()[2].name().to_owned();
    session.select(&third).unwrap();
    assert_eq!(session.view(), View::ResultsDetail);
    assert_eq!(session.selected().map(|p| p.name()), Some(third.as_str()));

    session.back().unwrap();
    assert_eq!(session.view(), View::ResultsOverview);
    assert!(session.selected().is_none());

    assert_eq!(source.calls.load(Ordering::SeqCst), 1);
    assert_eq!(scorer.calls(), 1);
}

#[tokio::test]
async fn incomplete_answers_never_reach_the_scorer() {
    let source = FixedQuestions::new(4);
    let mut session = open_session(&source).await;
    session.start().unwrap();
    session
        .set_answer(&QuestionId::new("1"), AnswerValue::Likert(0))
        .unwrap();

    let scorer = CannedScorer::new(Ok(Vec::new()));
    let err = session.submit(&scorer).await.unwrap_err();
    assert_eq!(err, SessionError::Incomplete { missing: 3 });
    assert_eq!(scorer.calls(), 0);
    assert_eq!(session.view(), View::Quiz);
}

#[tokio::test]
async fn gate_opens_at_exactly_n_answers() {
    let source = FixedQuestions::new(5);
    let mut session = open_session(&source).await;
    session.start().unwrap();
    let scorer = CannedScorer::new(Ok(Vec::new()));

    let ids: Vec<QuestionId> = session.questions().iter().map(|q| q.id().clone()).collect();
    for (answered, id) in ids.iter().enumerate() {
        assert_eq!(
            session.submit(&scorer).await.map(|_| ()),
            Err(SessionError::Incomplete {
                missing: ids.len() - answered
            })
        );
        let question = session
            .questions()
            .iter()
            .find(|q| q.id() == id)
            .unwrap()
            .clone();
        let value = match question.scale() {
            ScaleType::YesNo => AnswerValue::YesNo(true),
            _ => AnswerValue::Likert(1),
        };
        session.set_answer(id, value).unwrap();
    }

    session.submit(&scorer).await.unwrap();
    assert_eq!(scorer.calls(), 1);
    assert_eq!(scorer.last_sheet.lock().unwrap().as_ref().map(AnswerSheet::len), Some(5));
}

#[tokio::test]
async fn service_failure_still_reaches_results() {
    let source = FixedQuestions::new(3);
    let mut session = open_session(&source).await;
    session.start().unwrap();
    answer_everything(&mut session);

    let scorer = CannedScorer::new(Err(ScoringError::Service {
        status: 500,
        message: Some("Server data files missing".into()),
    }));
    let ranking = session.submit(&scorer).await.unwrap();
    assert!(ranking.is_degraded());

    assert_eq!(session.view(), View::ResultsOverview);
    assert_eq!(session.submission_status(), SubmissionStatus::Degraded);
    let expected: Vec<_> = session
        .library()
        .patterns()
        .iter()
        .map(|p| p.name().to_owned())
        .collect();
    let ranked: Vec<_> = session.ranked().iter().map(|p| p.name().to_owned()).collect();
    assert_eq!(ranked, expected);
    assert!(session.ranked().iter().all(|p| p.score() == 0.0));
}

#[tokio::test]
async fn load_failure_blocks_the_questionnaire() {
    let mut session = AssessmentSession::new(PatternLibrary::builtin().unwrap(), fixed_clock());
    let err = session.load_questions(&BrokenSource).await.unwrap_err();
    assert!(matches!(err, SessionError::QuestionsUnavailable(_)));
    assert!(matches!(
        session.start(),
        Err(SessionError::QuestionsUnavailable(_))
    ));
    assert_eq!(
        session.load_questions(&BrokenSource).await,
        Err(SessionError::AlreadyLoaded)
    );
}

#[tokio::test]
async fn questions_load_only_once() {
    let source = FixedQuestions::new(2);
    let mut session = open_session(&source).await;
    assert_eq!(
        session.load_questions(&source).await,
        Err(SessionError::AlreadyLoaded)
    );
    assert_eq!(source.calls.load(Ordering::SeqCst), 1);
}

#[tokio::test]
async fn progress_flags_survive_navigation() {
    let source = FixedQuestions::new(2);
    let mut session = open_session(&source).await;
    session.start().unwrap();
    answer_everything(&mut session);
    session
        .submit(&CannedScorer::new(Ok(Vec::new())))
        .await
        .unwrap();

    let first = session.ranked()[0].name().to_owned();
    session.select(&first).unwrap();
    session.toggle_week(&first, "week3").unwrap();
    session.back().unwrap();
    session.select(&first).unwrap();

    let detail = session.detail().unwrap();
    assert!(detail.weeks[2].completed);
    assert_eq!(detail.completed_weeks, 1);

    let doc = session.export_selected().unwrap();
    assert_eq!(doc.title, first);
    assert_eq!(doc.plan_sections().count(), 4);
}
