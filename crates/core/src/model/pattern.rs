use thiserror::Error;

/// Every action plan spans exactly this many weeks.
pub const PLAN_WEEKS: usize = 4;

//
// ─── ERRORS ────────────────────────────────────────────────────────────────────
//

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum PatternError {
    #[error("pattern name cannot be empty")]
    EmptyName,

    #[error("plan week label cannot be empty")]
    EmptyWeekLabel,

    #[error("plan week label {0:?} appears more than once")]
    DuplicateWeek(String),

    #[error("plan must have exactly {PLAN_WEEKS} weeks, got {0}")]
    WrongWeekCount(usize),
}

//
// ─── WEEK PLAN ─────────────────────────────────────────────────────────────────
//

/// One entry of an action plan: the authored label (e.g. `week1`) and its task.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlanWeek {
    label: String,
    text: String,
}

impl PlanWeek {
    #[must_use]
    pub fn new(label: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            text: text.into(),
        }
    }

    #[must_use]
    pub fn label(&self) -> &str {
        &self.label
    }

    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }
}

/// A four-week action plan, kept in authoring order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WeekPlan {
    weeks: [PlanWeek; PLAN_WEEKS],
}

impl WeekPlan {
    /// Build a plan from exactly four weeks.
    ///
    /// # Errors
    ///
    /// Returns `PatternError::EmptyWeekLabel` for a blank label and
    /// `PatternError::DuplicateWeek` if two weeks share a label.
    pub fn new(weeks: [PlanWeek; PLAN_WEEKS]) -> Result<Self, PatternError> {
        for (idx, week) in weeks.iter().enumerate() {
            if week.label.trim().is_empty() {
                return Err(PatternError::EmptyWeekLabel);
            }
            if weeks[..idx].iter().any(|prev| prev.label == week.label) {
                return Err(PatternError::DuplicateWeek(week.label.clone()));
            }
        }
        Ok(Self { weeks })
    }

    /// Build a plan from `(label, text)` pairs in authoring order.
    ///
    /// # Errors
    ///
    /// Returns `PatternError::WrongWeekCount` unless exactly four pairs are given,
    /// plus the label errors of [`WeekPlan::new`].
    pub fn from_entries<I, L, T>(entries: I) -> Result<Self, PatternError>
    where
        I: IntoIterator<Item = (L, T)>,
        L: Into<String>,
        T: Into<String>,
    {
        let weeks: Vec<PlanWeek> = entries
            .into_iter()
            .map(|(label, text)| PlanWeek::new(label, text))
            .collect();
        let count = weeks.len();
        let weeks: [PlanWeek; PLAN_WEEKS] = weeks
            .try_into()
            .map_err(|_| PatternError::WrongWeekCount(count))?;
        Self::new(weeks)
    }

    #[must_use]
    pub fn weeks(&self) -> &[PlanWeek; PLAN_WEEKS] {
        &self.weeks
    }

    pub fn iter(&self) -> impl Iterator<Item = &PlanWeek> {
        self.weeks.iter()
    }

    #[must_use]
    pub fn get(&self, label: &str) -> Option<&PlanWeek> {
        self.weeks.iter().find(|week| week.label == label)
    }
}

//
// ─── PATTERN DEFINITION ────────────────────────────────────────────────────────
//

/// Static content for one schema pattern.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PatternDefinition {
    name: String,
    category: String,
    causes: Option<String>,
    symptoms: Option<String>,
    manifestations: Option<String>,
    plan: WeekPlan,
}

impl PatternDefinition {
    /// Create a pattern with no descriptive text; use the `with_*` builders to add it.
    ///
    /// # Errors
    ///
    /// Returns `PatternError::EmptyName` if `name` is blank.
    pub fn new(
        name: impl Into<String>,
        category: impl Into<String>,
        plan: WeekPlan,
    ) -> Result<Self, PatternError> {
        let name = name.into().trim().to_owned();
        if name.is_empty() {
            return Err(PatternError::EmptyName);
        }
        Ok(Self {
            name,
            category: category.into().trim().to_owned(),
            causes: None,
            symptoms: None,
            manifestations: None,
            plan,
        })
    }

    #[must_use]
    pub fn with_causes(mut self, causes: impl Into<String>) -> Self {
        self.causes = non_blank(causes.into());
        self
    }

    #[must_use]
    pub fn with_symptoms(mut self, symptoms: impl Into<String>) -> Self {
        self.symptoms = non_blank(symptoms.into());
        self
    }

    #[must_use]
    pub fn with_manifestations(mut self, manifestations: impl Into<String>) -> Self {
        self.manifestations = non_blank(manifestations.into());
        self
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Category heading; empty when the author left it out.
    #[must_use]
    pub fn category(&self) -> &str {
        &self.category
    }

    #[must_use]
    pub fn causes(&self) -> Option<&str> {
        self.causes.as_deref()
    }

    #[must_use]
    pub fn symptoms(&self) -> Option<&str> {
        self.symptoms.as_deref()
    }

    #[must_use]
    pub fn manifestations(&self) -> Option<&str> {
        self.manifestations.as_deref()
    }

    #[must_use]
    pub fn plan(&self) -> &WeekPlan {
        &self.plan
    }
}

fn non_blank(value: String) -> Option<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_owned())
    }
}

//
// ─── SCORED PATTERN ────────────────────────────────────────────────────────────
//

/// A library pattern paired with the score from one submission.
#[derive(Debug, Clone, PartialEq)]
pub struct ScoredPattern {
    definition: PatternDefinition,
    score: f64,
}

impl ScoredPattern {
    #[must_use]
    pub fn new(definition: PatternDefinition, score: f64) -> Self {
        Self { definition, score }
    }

    #[must_use]
    pub fn definition(&self) -> &PatternDefinition {
        &self.definition
    }

    #[must_use]
    pub fn name(&self) -> &str {
        self.definition.name()
    }

    #[must_use]
    pub fn score(&self) -> f64 {
        self.score
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn plan() -> WeekPlan {
        WeekPlan::from_entries([
            ("week1", "Notice"),
            ("week2", "Name"),
            ("week3", "Practice"),
            ("week4", "Review"),
        ])
        .unwrap()
    }

    #[test]
    fn plan_keeps_authoring_order() {
        let plan = WeekPlan::from_entries([
            ("week4", "d"),
            ("week10", "a"),
            ("week2", "b"),
            ("week1", "c"),
        ])
        .unwrap();
        let labels: Vec<_> = plan.iter().map(PlanWeek::label).collect();
        assert_eq!(labels, ["week4", "week10", "week2", "week1"]);
    }

    #[test]
    fn plan_requires_four_weeks() {
        let err = WeekPlan::from_entries([("week1", "a"), ("week2", "b")]).unwrap_err();
        assert_eq!(err, PatternError::WrongWeekCount(2));
    }

    #[test]
    fn plan_rejects_duplicate_labels() {
        let err = WeekPlan::from_entries([
            ("week1", "a"),
            ("week2", "b"),
            ("week1", "c"),
            ("week4", "d"),
        ])
        .unwrap_err();
        assert_eq!(err, PatternError::DuplicateWeek("week1".into()));
    }

    #[test]
    fn blank_optional_text_is_absent() {
        let pattern = PatternDefinition::new("Failure", "Impaired Autonomy", plan())
            .unwrap()
            .with_causes("  ")
            .with_symptoms("Avoidance of challenges");
        assert_eq!(pattern.causes(), None);
        assert_eq!(pattern.symptoms(), Some("Avoidance of challenges"));
        assert_eq!(pattern.plan().get("week3").map(PlanWeek::text), Some("Practice"));
    }

    #[test]
    fn pattern_name_is_required() {
        assert_eq!(
            PatternDefinition::new(" ", "x", plan()).unwrap_err(),
            PatternError::EmptyName
        );
    }
}
