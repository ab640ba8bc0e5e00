mod builtin;

use thiserror::Error;

use crate::model::{PatternDefinition, PatternError, WeekPlan};

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum LibraryError {
    #[error("pattern library is empty")]
    Empty,

    #[error("pattern {0:?} is defined more than once")]
    DuplicateName(String),

    #[error("invalid pattern {name:?}: {source}")]
    Pattern {
        name: String,
        #[source]
        source: PatternError,
    },
}

/// Authoritative, ordered list of pattern definitions.
///
/// Authoring order matters: it is the tie-break order for ranking and the
/// display order when no scores are available.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PatternLibrary {
    patterns: Vec<PatternDefinition>,
}

impl PatternLibrary {
    /// Build a library from definitions in authoring order.
    ///
    /// # Errors
    ///
    /// Returns `LibraryError::Empty` for an empty list and
    /// `LibraryError::DuplicateName` if two patterns share a name.
    pub fn new(patterns: Vec<PatternDefinition>) -> Result<Self, LibraryError> {
        if patterns.is_empty() {
            return Err(LibraryError::Empty);
        }
        for (idx, pattern) in patterns.iter().enumerate() {
            if patterns[..idx].iter().any(|p| p.name() == pattern.name()) {
                return Err(LibraryError::DuplicateName(pattern.name().to_owned()));
            }
        }
        Ok(Self { patterns })
    }

    /// The library bundled with the application.
    ///
    /// # Errors
    ///
    /// Returns `LibraryError` if the bundled content is inconsistent.
    pub fn builtin() -> Result<Self, LibraryError> {
        let patterns = builtin::SEEDS
            .iter()
            .map(|seed| {
                let to_err = |source| LibraryError::Pattern {
                    name: seed.name.to_owned(),
                    source,
                };
                let plan = WeekPlan::from_entries(seed.plan).map_err(to_err)?;
                Ok(PatternDefinition::new(seed.name, seed.category, plan)
                    .map_err(to_err)?
                    .with_causes(seed.causes)
                    .with_symptoms(seed.symptoms)
                    .with_manifestations(seed.manifestations))
            })
            .collect::<Result<Vec<_>, LibraryError>>()?;
        Self::new(patterns)
    }

    #[must_use]
    pub fn patterns(&self) -> &[PatternDefinition] {
        &self.patterns
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.patterns.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.patterns.is_empty()
    }

    #[must_use]
    pub fn get(&self, name: &str) -> Option<&PatternDefinition> {
        self.patterns.iter().find(|p| p.name() == name)
    }
}
