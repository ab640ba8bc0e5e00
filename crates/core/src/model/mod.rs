mod answer;
mod ids;
mod pattern;
mod question;

pub use answer::{AnswerError, AnswerSheet, AnswerValue, MAX_OPEN_TEXT_CHARS};
pub use ids::QuestionId;
pub use pattern::{PLAN_WEEKS, PatternDefinition, PatternError, PlanWeek, ScoredPattern, WeekPlan};
pub use question::{LIKERT_MAX, Question, QuestionError, ScaleType, likert_label};
