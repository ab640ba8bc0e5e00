use lrs_core::export::{MISSING_TEXT, PLAN_HEADING};
use lrs_core::model::{AnswerValue, QuestionId, ScaleType};

use super::controller::AssessmentSession;

const MISSING_CATEGORY: &str = "Schema Pattern";

/// Shown under every pattern detail.
pub const DISCLAIMER: &str =
    "This is a self-help tool created by the LRS team. It is not a substitute for professional therapy.";

/// Questionnaire completion counts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuizProgress {
    pub total: usize,
    pub answered: usize,
    pub missing: usize,
    pub is_complete: bool,
}

/// One questionnaire row with its current answer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuestionItem {
    pub number: usize,
    pub id: QuestionId,
    pub text: String,
    pub scale: ScaleType,
    pub choices: Vec<String>,
    pub answer: Option<AnswerValue>,
}

/// A pattern card on the results overview.
#[derive(Debug, Clone, PartialEq)]
pub struct OverviewCard {
    /// 1-based position in the ranking.
    pub rank: usize,
    pub name: String,
    pub score: f64,
    pub summary: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WeekRow {
    /// 1-based position in the plan.
    pub number: usize,
    pub label: String,
    pub text: String,
    pub completed: bool,
}

impl WeekRow {
    #[must_use]
    pub fn heading(&self) -> String {
        format!("Week {}", self.number)
    }

    #[must_use]
    pub fn caption(&self) -> &'static str {
        if self.completed {
            "COMPLETED"
        } else {
            "MARK COMPLETE"
        }
    }
}

/// Everything the detail view shows for the selected pattern.
#[derive(Debug, Clone, PartialEq)]
pub struct PatternDetail {
    pub name: String,
    pub category: String,
    pub score: f64,
    pub causes: String,
    pub symptoms: String,
    pub manifestations: String,
    pub plan_heading: &'static str,
    pub weeks: Vec<WeekRow>,
    pub completed_weeks: usize,
}

impl AssessmentSession {
    #[must_use]
    pub fn quiz_progress(&self) -> QuizProgress {
        let total = self.questions().len();
        let missing = self.missing_answers();
        QuizProgress {
            total,
            answered: total - missing,
            missing,
            is_complete: self.is_complete(),
        }
    }

    #[must_use]
    pub fn question_items(&self) -> Vec<QuestionItem> {
        self.questions()
            .iter()
            .enumerate()
            .map(|(idx, question)| QuestionItem {
                number: idx + 1,
                id: question.id().clone(),
                text: question.display_text().to_owned(),
                scale: question.scale(),
                choices: question.scale().choice_labels(),
                answer: self.answers().get(question.id()).cloned(),
            })
            .collect()
    }

    #[must_use]
    pub fn overview_cards(&self) -> Vec<OverviewCard> {
        self.ranked()
            .iter()
            .enumerate()
            .map(|(idx, pattern)| OverviewCard {
                rank: idx + 1,
                name: pattern.name().to_owned(),
                score: pattern.score(),
                summary: pattern
                    .definition()
                    .symptoms()
                    .unwrap_or(MISSING_TEXT)
                    .to_owned(),
            })
            .collect()
    }

    /// Detail for the selected pattern, `None` outside the detail view.
    #[must_use]
    pub fn detail(&self) -> Option<PatternDetail> {
        let pattern = self.selected()?;
        let definition = pattern.definition();
        let weeks = definition
            .plan()
            .iter()
            .enumerate()
            .map(|(idx, week)| WeekRow {
                number: idx + 1,
                label: week.label().to_owned(),
                text: week.text().to_owned(),
                completed: self.is_week_complete(definition.name(), week.label()),
            })
            .collect();
        let category = if definition.category().is_empty() {
            MISSING_CATEGORY
        } else {
            definition.category()
        };

        Some(PatternDetail {
            name: definition.name().to_owned(),
            category: category.to_owned(),
            score: pattern.score(),
            causes: definition.causes().unwrap_or(MISSING_TEXT).to_owned(),
            symptoms: definition.symptoms().unwrap_or(MISSING_TEXT).to_owned(),
            manifestations: definition.manifestations().unwrap_or(MISSING_TEXT).to_owned(),
            plan_heading: PLAN_HEADING,
            weeks,
            completed_weeks: self.progress().completed_weeks(definition),
        })
    }
}
