//! Turn a ranked pattern into the payload handed to the document renderer.
//!
//! Layout is fixed: title, root cause, symptoms, then the four plan weeks in
//! authoring order. Completion flags are not part of the export.

use serde::Serialize;

use crate::model::ScoredPattern;

/// Substituted for descriptive text the pattern does not provide.
pub const MISSING_TEXT: &str = "N/A";

pub const PLAN_HEADING: &str = "4-Week Plan";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SectionKind {
    RootCause,
    Symptoms,
    PlanWeek,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ExportSection {
    pub kind: SectionKind,
    pub heading: String,
    pub body: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ExportDocument {
    pub title: String,
    pub file_name: String,
    pub plan_heading: String,
    pub sections: Vec<ExportSection>,
}

impl ExportDocument {
    /// Plan week sections, in order.
    pub fn plan_sections(&self) -> impl Iterator<Item = &ExportSection> {
        self.sections
            .iter()
            .filter(|section| section.kind == SectionKind::PlanWeek)
    }
}

#[must_use]
pub fn format(pattern: &ScoredPattern) -> ExportDocument {
    let definition = pattern.definition();
    let mut sections = Vec::with_capacity(6);

    sections.push(ExportSection {
        kind: SectionKind::RootCause,
        heading: "Root Cause".to_owned(),
        body: definition.causes().unwrap_or(MISSING_TEXT).to_owned(),
    });
    sections.push(ExportSection {
        kind: SectionKind::Symptoms,
        heading: "Symptoms".to_owned(),
        body: definition.symptoms().unwrap_or(MISSING_TEXT).to_owned(),
    });
    for week in definition.plan().iter() {
        sections.push(ExportSection {
            kind: SectionKind::PlanWeek,
            heading: week.label().to_owned(),
            body: week.text().to_owned(),
        });
    }

    ExportDocument {
        title: definition.name().to_owned(),
        file_name: file_name_for(definition.name()),
        plan_heading: PLAN_HEADING.to_owned(),
        sections,
    }
}

/// `"Abandonment / Instability"` becomes `"Abandonment_Instability_Plan.pdf"`.
#[must_use]
pub fn file_name_for(name: &str) -> String {
    let mut stem = String::with_capacity(name.len());
    for c in name.chars() {
        if c.is_alphanumeric() {
            stem.push(c);
        } else if !stem.is_empty() && !stem.ends_with('_') {
            stem.push('_');
        }
    }
    let stem = stem.trim_end_matches('_');
    let stem = if stem.is_empty() { "Pattern" } else { stem };
    format!("{stem}_Plan.pdf")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{PatternDefinition, WeekPlan};

    fn pattern(causes: Option<&str>) -> ScoredPattern {
        let plan = WeekPlan::from_entries([
            ("week1", "Trigger mapping"),
            ("week2", "Healthy adult voice"),
            ("week3", "Planned separation"),
            ("week4", "Relapse prevention"),
        ])
        .unwrap();
        let mut definition = PatternDefinition::new("Abandonment / Instability", "Disconnection", plan)
            .unwrap()
            .with_symptoms("Fear of loss");
        if let Some(causes) = causes {
            definition = definition.with_causes(causes);
        }
        ScoredPattern::new(definition, 12.5)
    }

    #[test]
    fn sections_follow_fixed_layout() {
        let doc = format(&pattern(Some("Unstable caregiving")));
        assert_eq!(doc.title, "Abandonment / Instability");
        assert_eq!(doc.plan_heading, "4-Week Plan");
        let kinds: Vec<_> = doc.sections.iter().map(|s| s.kind).collect();
        assert_eq!(
            kinds,
            [
                SectionKind::RootCause,
                SectionKind::Symptoms,
                SectionKind::PlanWeek,
                SectionKind::PlanWeek,
                SectionKind::PlanWeek,
                SectionKind::PlanWeek,
            ]
        );
        assert_eq!(doc.sections[0].body, "Unstable caregiving");
        let weeks: Vec<_> = doc.plan_sections().map(|s| s.heading.as_str()).collect();
        assert_eq!(weeks, ["week1", "week2", "week3", "week4"]);
        assert_eq!(doc.sections[5].body, "Relapse prevention");
    }

    #[test]
    fn missing_causes_use_placeholder() {
        let doc = format(&pattern(None));
        assert_eq!(doc.sections[0].kind, SectionKind::RootCause);
        assert_eq!(doc.sections[0].body, MISSING_TEXT);
        assert_eq!(doc.sections[1].body, "Fear of loss");
    }

    #[test]
    fn file_names_are_path_safe() {
        assert_eq!(
            file_name_for("Abandonment / Instability"),
            "Abandonment_Instability_Plan.pdf"
        );
        assert_eq!(file_name_for("Failure"), "Failure_Plan.pdf");
        assert_eq!(file_name_for("Self-Sacrifice"), "Self_Sacrifice_Plan.pdf");
        assert_eq!(file_name_for("///"), "Pattern_Plan.pdf");
    }

    #[test]
    fn payload_serializes_with_snake_case_kinds() {
        let doc = format(&pattern(None));
        let json = serde_json::to_value(&doc).unwrap();
        assert_eq!(json["title"], "Abandonment / Instability");
        assert_eq!(json["sections"][0]["kind"], "root_cause");
        assert_eq!(json["sections"][2]["kind"], "plan_week");
    }
}
