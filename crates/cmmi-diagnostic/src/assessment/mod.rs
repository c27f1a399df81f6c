//! CMMI Level 2 questionnaire scoring.
//!
//! Answers are valued, averaged per category into a compliance percentage,
//! classified into a maturity tier, and turned into improvement
//! recommendations. Everything here is pure: collection of answers and
//! rendering of results belong to the callers.

pub mod domain;
pub mod router;
pub mod rubric;
pub mod scoring;
pub mod summary;
pub mod views;

#[cfg(test)]
mod tests;

pub use domain::{
    Answer, AnswerSheet, AnsweredQuestion, AssessmentError, Category, CategoryAnswers,
    CategoryResult, Tier, IMPLEMENTED_THRESHOLD, PARTIAL_THRESHOLD,
};
pub use router::assessment_router;
pub use rubric::{RecommendationCatalog, Rubric};
pub use scoring::{
    not_implemented_message, partially_implemented_message, recommendations_for, ScoringEngine,
    ALL_PRACTICES_SATISFIED,
};
pub use summary::{
    conclusion_message, summarize, CategoryScore, ProjectAssessment, ProjectSummary,
    TargetAdvice, TARGET_LEVEL_MET,
};
pub use views::{CategoryView, QuestionView, RubricView};
