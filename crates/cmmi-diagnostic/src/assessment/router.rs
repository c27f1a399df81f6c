use std::sync::Arc;

use axum::{
    extract::{rejection::JsonRejection, State},
    routing::{get, post},
    Json, Router,
};
use serde::Deserialize;

use super::domain::{Answer, AnswerSheet, AssessmentError, CategoryResult};
use super::scoring::ScoringEngine;
use super::views::RubricView;
use crate::error::AppError;
use crate::report::{now_timestamp, AssessmentReport};

/// Single-category scoring request. Answers stay raw tokens until the handler
/// parses them so a bad token is reported like any other engine error.
#[derive(Debug, Deserialize)]
pub struct ScoreCategoryRequest {
    pub category: String,
    pub answers: Vec<String>,
}

/// Full questionnaire submission, as produced by a form front-end.
#[derive(Debug, Deserialize)]
pub struct AssessmentRequest {
    #[serde(default)]
    pub project: Option<String>,
    pub categories: Vec<ScoreCategoryRequest>,
}

/// Router builder exposing the rubric and the scoring endpoints.
pub fn assessment_router(engine: Arc<ScoringEngine>) -> Router {
    Router::new()
        .route("/api/v1/rubric", get(rubric_handler))
        .route("/api/v1/assessments", post(assessment_handler))
        .route("/api/v1/assessments/score", post(score_handler))
        .with_state(engine)
}

pub(crate) async fn rubric_handler(State(engine): State<Arc<ScoringEngine>>) -> Json<RubricView> {
    Json(engine.rubric().view())
}

pub(crate) async fn score_handler(
    State(engine): State<Arc<ScoringEngine>>,
    payload: Result<Json<ScoreCategoryRequest>, JsonRejection>,
) -> Result<Json<CategoryResult>, AppError> {
    let Json(request) = payload?;
    let answers = parse_tokens(&request.answers)?;
    let result = engine.score_category(&request.category, &answers)?;
    Ok(Json(result))
}

pub(crate) async fn assessment_handler(
    State(engine): State<Arc<ScoringEngine>>,
    payload: Result<Json<AssessmentRequest>, JsonRejection>,
) -> Result<Json<AssessmentReport>, AppError> {
    let Json(AssessmentRequest {
        project,
        categories,
    }) = payload?;

    let mut sheet = AnswerSheet::new();
    for entry in categories {
        let answers = parse_tokens(&entry.answers)?;
        sheet.push(entry.category, answers);
    }

    let assessment = engine.assess(&sheet)?;
    Ok(Json(AssessmentReport::new(
        project.as_deref().unwrap_or_default(),
        assessment,
        now_timestamp(),
    )))
}

fn parse_tokens(tokens: &[String]) -> Result<Vec<Answer>, AssessmentError> {
    tokens.iter().map(|token| Answer::from_token(token)).collect()
}
