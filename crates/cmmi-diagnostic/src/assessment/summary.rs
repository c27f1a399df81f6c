use super::domain::{CategoryResult, Tier};
use super::rubric::Rubric;
use chrono::NaiveDateTime;
use serde::Serialize;
use std::collections::HashSet;

pub const TARGET_LEVEL_MET: &str =
    "The project meets the CMMI Level 2 requirements. Maintain current practices.";

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CategoryScore {
    pub category: String,
    pub percentage: f64,
    pub tier: Tier,
}

/// Project-wide tier counts and the overall verdict.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProjectSummary {
    pub implemented: usize,
    pub partially_implemented: usize,
    pub deficient: usize,
    pub evaluated: usize,
    pub rubric_size: usize,
    pub by_category: Vec<CategoryScore>,
    pub meets_target_level: bool,
}

impl ProjectSummary {
    pub fn count(&self, tier: Tier) -> usize {
        match tier {
            Tier::Implemented => self.implemented,
            Tier::PartiallyImplemented => self.partially_implemented,
            Tier::Deficient => self.deficient,
        }
    }

    pub fn verification_label(&self) -> &'static str {
        if self.meets_target_level {
            "Meets"
        } else {
            "Does not meet"
        }
    }
}

/// Buckets results by tier. The verdict requires every category of the full
/// rubric to be implemented and nothing evaluated below that tier, so a run
/// covering a subset never passes, even with repeated entries.
pub fn summarize(results: &[CategoryResult], rubric: &Rubric) -> ProjectSummary {
    let rubric_size = rubric.len();
    let mut implemented = 0;
    let mut partially_implemented = 0;
    let mut deficient = 0;

    for result in results {
        match result.tier {
            Tier::Implemented => implemented += 1,
            Tier::PartiallyImplemented => partially_implemented += 1,
            Tier::Deficient => deficient += 1,
        }
    }

    let by_category = results
        .iter()
        .map(|result| CategoryScore {
            category: result.category.clone(),
            percentage: result.percentage,
            tier: result.tier,
        })
        .collect();

    ProjectSummary {
        implemented,
        partially_implemented,
        deficient,
        evaluated: results.len(),
        rubric_size,
        by_category,
        meets_target_level: rubric_size > 0
            && implemented == rubric_size
            && partially_implemented + deficient == 0
            && covers_rubric(results, rubric),
    }
}

fn covers_rubric(results: &[CategoryResult], rubric: &Rubric) -> bool {
    let implemented: HashSet<&str> = results
        .iter()
        .filter(|result| result.tier == Tier::Implemented)
        .map(|result| result.category.as_str())
        .collect();

    rubric
        .categories()
        .iter()
        .all(|category| implemented.contains(category.name.as_str()))
}

/// Remediation focus for a category that has not reached the target tier.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TargetAdvice {
    pub category: String,
    pub tier: Tier,
    pub tier_label: &'static str,
    pub recommendations: Vec<String>,
}

/// Results of one assessment run together with their aggregate.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProjectAssessment {
    pub results: Vec<CategoryResult>,
    pub summary: ProjectSummary,
}

impl ProjectAssessment {
    pub fn meets_target_level(&self) -> bool {
        self.summary.meets_target_level
    }

    /// Categories still short of `Implemented`, in evaluation order.
    pub fn target_advice(&self) -> Vec<TargetAdvice> {
        self.results
            .iter()
            .filter(|result| result.tier != Tier::Implemented)
            .map(|result| TargetAdvice {
                category: result.category.clone(),
                tier: result.tier,
                tier_label: result.tier_label,
                recommendations: result.recommendations.clone(),
            })
            .collect()
    }

    pub fn conclusion(&self, at: NaiveDateTime) -> String {
        conclusion_message(self.meets_target_level(), at)
    }
}

pub fn conclusion_message(meets_target_level: bool, at: NaiveDateTime) -> String {
    let stamp = at.format("%Y-%m-%d %H:%M:%S");
    if meets_target_level {
        format!("Conclusion ({stamp}): The project meets CMMI Level 2.")
    } else {
        format!(
            "Conclusion ({stamp}): The project does NOT meet CMMI Level 2. Work on the deficient and partially implemented areas is recommended."
        )
    }
}
