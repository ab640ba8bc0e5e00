use std::collections::HashMap;

use crate::model::PatternDefinition;

/// Per-(pattern, week) completion flags for the current session.
///
/// Flags are created on first toggle; anything never toggled reads as not done.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProgressTracker {
    flags: HashMap<(String, String), bool>,
}

impl ProgressTracker {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Flip the flag for `(pattern, week)` and return its new value.
    pub fn toggle(&mut self, pattern: &str, week: &str) -> bool {
        let flag = self
            .flags
            .entry((pattern.to_owned(), week.to_owned()))
            .or_insert(false);
        *flag = !*flag;
        *flag
    }

    #[must_use]
    pub fn is_complete(&self, pattern: &str, week: &str) -> bool {
        self.flags
            .get(&(pattern.to_owned(), week.to_owned()))
            .copied()
            .unwrap_or(false)
    }

    /// Number of weeks of `pattern`'s plan currently marked done.
    #[must_use]
    pub fn completed_weeks(&self, pattern: &PatternDefinition) -> usize {
        pattern
            .plan()
            .iter()
            .filter(|week| self.is_complete(pattern.name(), week.label()))
            .count()
    }

    pub fn clear(&mut self) {
        self.flags.clear();
    }
}
