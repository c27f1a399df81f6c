mod recommendations;
mod rules;

pub use recommendations::{
    not_implemented_message, partially_implemented_message, recommendations_for,
    ALL_PRACTICES_SATISFIED,
};

use super::domain::{
    Answer, AnsweredQuestion, AnswerSheet, AssessmentError, Category, CategoryResult,
};
use super::rubric::Rubric;
use super::summary::{summarize, ProjectAssessment, ProjectSummary};
use tracing::{debug, info};

/// Stateless scorer that applies the rubric to collected answers.
#[derive(Debug, Clone)]
pub struct ScoringEngine {
    rubric: Rubric,
}

impl ScoringEngine {
    pub fn new(rubric: Rubric) -> Self {
        Self { rubric }
    }

    pub fn standard() -> Self {
        Self::new(Rubric::cmmi_level_two())
    }

    pub fn rubric(&self) -> &Rubric {
        &self.rubric
    }

    /// Scores the named rubric category against positionally aligned answers.
    pub fn score_category(
        &self,
        category: &str,
        answers: &[Answer],
    ) -> Result<CategoryResult, AssessmentError> {
        let definition =
            self.rubric
                .category(category)
                .ok_or_else(|| AssessmentError::UnknownCategory {
                    category: category.to_string(),
                })?;

        self.score(definition, answers)
    }

    /// Scores an arbitrary category definition using this engine's catalog.
    pub fn score(
        &self,
        category: &Category,
        answers: &[Answer],
    ) -> Result<CategoryResult, AssessmentError> {
        let result = rules::score_answers(category, answers, self.rubric.catalog())?;
        debug!(
            category = %result.category,
            percentage = result.percentage,
            tier = result.tier_label,
            "category scored"
        );
        Ok(result)
    }

    pub fn recommend(&self, category: &str, answered: &[AnsweredQuestion]) -> Vec<String> {
        recommendations_for(self.rubric.catalog(), category, answered)
    }

    pub fn summarize(&self, results: &[CategoryResult]) -> ProjectSummary {
        summarize(results, &self.rubric)
    }

    /// Scores every category in the sheet, in sheet order, and aggregates the verdict.
    pub fn assess(&self, sheet: &AnswerSheet) -> Result<ProjectAssessment, AssessmentError> {
        let results = sheet
            .entries()
            .iter()
            .map(|entry| self.score_category(&entry.category, &entry.answers))
            .collect::<Result<Vec<_>, _>>()?;

        let summary = self.summarize(&results);
        info!(
            evaluated = summary.evaluated,
            implemented = summary.implemented,
            meets_target_level = summary.meets_target_level,
            "assessment completed"
        );

        Ok(ProjectAssessment { results, summary })
    }
}

impl Default for ScoringEngine {
    fn default() -> Self {
        Self::standard()
    }
}
