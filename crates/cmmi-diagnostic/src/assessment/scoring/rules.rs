use super::super::domain::{
    Answer, AnsweredQuestion, AssessmentError, Category, CategoryResult, Tier,
};
use super::super::rubric::RecommendationCatalog;
use super::recommendations::recommendations_for;

/// Unrounded average weight scaled to 0-100.
pub(crate) fn compliance_percentage(
    category: &Category,
    answers: &[Answer],
) -> Result<f64, AssessmentError> {
    if category.is_empty() {
        return Err(AssessmentError::EmptyCategory {
            category: category.name.clone(),
        });
    }

    if answers.len() != category.len() {
        return Err(AssessmentError::AnswerCountMismatch {
            category: category.name.clone(),
            expected: category.len(),
            found: answers.len(),
        });
    }

    let total: f64 = answers.iter().copied().map(Answer::weight).sum();
    Ok(total / answers.len() as f64 * 100.0)
}

/// Rounds half-up to two decimals; percentages are never negative.
pub(crate) fn round_percentage(raw: f64) -> f64 {
    (raw * 100.0).round() / 100.0
}

pub(crate) fn score_answers(
    category: &Category,
    answers: &[Answer],
    catalog: &RecommendationCatalog,
) -> Result<CategoryResult, AssessmentError> {
    let raw = compliance_percentage(category, answers)?;
    // Thresholds use the raw value so rounding can never promote a category.
    let tier = Tier::from_percentage(raw);

    let answered: Vec<AnsweredQuestion> = category
        .questions
        .iter()
        .zip(answers.iter().copied())
        .enumerate()
        .map(|(index, (question, answer))| AnsweredQuestion::new(index + 1, question, answer))
        .collect();

    let recommendations = recommendations_for(catalog, &category.name, &answered);

    Ok(CategoryResult {
        category: category.name.clone(),
        answers: answered,
        percentage: round_percentage(raw),
        tier,
        tier_label: tier.label(),
        recommendations,
    })
}
