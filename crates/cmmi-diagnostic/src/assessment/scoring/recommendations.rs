use super::super::domain::{Answer, AnsweredQuestion};
use super::super::rubric::RecommendationCatalog;
use std::collections::HashSet;

pub const ALL_PRACTICES_SATISFIED: &str =
    "All key practices appear to be satisfied. Maintain current processes and evidence.";

pub fn not_implemented_message(question: &str) -> String {
    format!("Problem detected: '{question}' -> Not implemented. Review and prioritize its correction.")
}

pub fn partially_implemented_message(question: &str) -> String {
    format!("Partial problem: '{question}' -> Improve formality and consistency.")
}

/// Builds the ordered, duplicate-free improvement list for one category.
pub fn recommendations_for(
    catalog: &RecommendationCatalog,
    category: &str,
    answered: &[AnsweredQuestion],
) -> Vec<String> {
    let problems: Vec<&AnsweredQuestion> = answered
        .iter()
        .filter(|entry| !entry.answer.is_satisfactory())
        .collect();

    if problems.is_empty() {
        return vec![ALL_PRACTICES_SATISFIED.to_string()];
    }

    let mut combined: Vec<String> = catalog.generic_for(category).to_vec();
    combined.extend(problems.into_iter().filter_map(|entry| match entry.answer {
        Answer::No => Some(not_implemented_message(&entry.question)),
        Answer::Partial => Some(partially_implemented_message(&entry.question)),
        Answer::Yes => None,
    }));

    dedup_preserving_order(combined)
}

fn dedup_preserving_order(items: Vec<String>) -> Vec<String> {
    let mut seen = HashSet::new();
    items
        .into_iter()
        .filter(|item| seen.insert(item.clone()))
        .collect()
}
