use crate::assessment::{CategoryResult, ProjectAssessment, ProjectSummary, TargetAdvice};
use chrono::{Local, NaiveDateTime, Timelike};
use serde::Serialize;

pub const DEFAULT_PROJECT_NAME: &str = "Unnamed_Project";

/// Local wall-clock time truncated to whole seconds.
pub fn now_timestamp() -> NaiveDateTime {
    let now = Local::now().naive_local();
    now.with_nanosecond(0).unwrap_or(now)
}

/// Persisted assessment artifact consumed by the JSON and text exporters.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AssessmentReport {
    pub project: String,
    pub generated_at: NaiveDateTime,
    pub results: Vec<CategoryResult>,
    pub summary: ProjectSummary,
    pub meets_target_level: bool,
    pub target_advice: Vec<TargetAdvice>,
    pub conclusion: String,
}

impl AssessmentReport {
    pub fn new(
        project: impl AsRef<str>,
        assessment: ProjectAssessment,
        generated_at: NaiveDateTime,
    ) -> Self {
        let project = match project.as_ref().trim() {
            "" => DEFAULT_PROJECT_NAME.to_string(),
            name => name.to_string(),
        };
        let target_advice = assessment.target_advice();
        let conclusion = assessment.conclusion(generated_at);
        let ProjectAssessment { results, summary } = assessment;

        Self {
            project,
            generated_at,
            meets_target_level: summary.meets_target_level,
            results,
            summary,
            target_advice,
            conclusion,
        }
    }
}
