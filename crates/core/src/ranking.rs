//! Merge remote scores into the pattern library and rank the result.
//!
//! The merged set always has exactly one entry per library pattern. Scores the
//! remote side did not report default to `0.0`; names the library does not
//! know are ignored.

use std::cmp::Ordering;
use std::collections::HashMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::library::PatternLibrary;
use crate::model::ScoredPattern;

/// One `{name, score}` pair as reported by the scoring service.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RemoteScore {
    pub name: String,
    pub score: f64,
}

impl RemoteScore {
    #[must_use]
    pub fn new(name: impl Into<String>, score: f64) -> Self {
        Self {
            name: name.into(),
            score,
        }
    }
}

/// Ranked patterns produced by one submission.
#[derive(Debug, Clone, PartialEq)]
pub struct Ranking {
    patterns: Vec<ScoredPattern>,
    degraded: bool,
    ranked_at: DateTime<Utc>,
}

impl Ranking {
    /// Rank the library using scores from the scoring service.
    #[must_use]
    pub fn scored(library: &PatternLibrary, remote: &[RemoteScore], ranked_at: DateTime<Utc>) -> Self {
        let mut patterns = merge_scores(library, remote);
        sort_descending(&mut patterns);
        Self {
            patterns,
            degraded: false,
            ranked_at,
        }
    }

    /// Zero-scored library in authoring order, used when scoring failed.
    #[must_use]
    pub fn fallback(library: &PatternLibrary, ranked_at: DateTime<Utc>) -> Self {
        Self {
            patterns: merge_scores(library, &[]),
            degraded: true,
            ranked_at,
        }
    }

    #[must_use]
    pub fn patterns(&self) -> &[ScoredPattern] {
        &self.patterns
    }

    /// True when the ranking came from the fallback path rather than real scores.
    #[must_use]
    pub fn is_degraded(&self) -> bool {
        self.degraded
    }

    #[must_use]
    pub fn ranked_at(&self) -> DateTime<Utc> {
        self.ranked_at
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
    pub fn position(&self, name: &str) -> Option<usize> {
        self.patterns.iter().position(|p| p.name() == name)
    }
}

/// Pair every library pattern with its remote score, in library order.
///
/// Lookup is by exact name. When a name is reported more than once the first
/// report wins. Non-finite scores are treated as missing.
#[must_use]
pub fn merge_scores(library: &PatternLibrary, remote: &[RemoteScore]) -> Vec<ScoredPattern> {
    let mut by_name: HashMap<&str, f64> = HashMap::with_capacity(remote.len());
    for entry in remote {
        by_name.entry(entry.name.as_str()).or_insert(entry.score);
    }

    library
        .patterns()
        .iter()
        .map(|definition| {
            let score = by_name
                .get(definition.name())
                .copied()
                .filter(|s| s.is_finite())
                .unwrap_or(0.0);
            ScoredPattern::new(definition.clone(), score)
        })
        .collect()
}

/// Stable sort, highest score first; equal scores keep their current order.
pub fn sort_descending(patterns: &mut [ScoredPattern]) {
    patterns.sort_by(|a, b| b.score().partial_cmp(&a.score()).unwrap_or(Ordering::Equal));
}
