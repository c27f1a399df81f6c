use crate::assessment::domain::{Answer, Category, CategoryResult};
use crate::assessment::rubric::{RecommendationCatalog, Rubric};
use crate::assessment::scoring::ScoringEngine;

pub(super) fn engine() -> ScoringEngine {
    ScoringEngine::standard()
}

pub(super) fn answers(tokens: &str) -> Vec<Answer> {
    tokens
        .split_whitespace()
        .map(|token| Answer::from_token(token).expect("valid test token"))
        .collect()
}

pub(super) fn uniform(answer: Answer, count: usize) -> Vec<Answer> {
    vec![answer; count]
}

/// Six-question rubric whose averages can land just below a threshold.
pub(super) fn six_question_rubric() -> Rubric {
    let category = Category::new(
        "Peer Reviews",
        [
            "Are reviews scheduled?",
            "Are review findings tracked?",
            "Are reviewers trained?",
            "Are checklists used?",
            "Is review coverage measured?",
            "Are review results shared?",
        ],
    );
    let catalog = RecommendationCatalog::new().with_entry(
        "Peer Reviews",
        ["Publish a peer review procedure and keep it current."],
    );
    Rubric::new(vec![category], catalog)
}

pub(super) fn score(engine: &ScoringEngine, category: &str, tokens: &str) -> CategoryResult {
    engine
        .score_category(category, &answers(tokens))
        .expect("category scores")
}
