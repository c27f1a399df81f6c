use super::domain::Category;
use super::views::{CategoryView, QuestionView, RubricView};
use std::collections::HashMap;

pub const REQUIREMENTS_MANAGEMENT: &str = "Requirements Management";
pub const PROJECT_PLANNING: &str = "Project Planning";
pub const PROJECT_MONITORING_AND_CONTROL: &str = "Project Monitoring and Control";
pub const CONFIGURATION_MANAGEMENT: &str = "Configuration Management";
pub const QUALITY_ASSURANCE: &str = "Quality Assurance";

/// Generic remediation steps keyed by category name.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RecommendationCatalog {
    entries: HashMap<String, Vec<String>>,
}

impl RecommendationCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn standard() -> Self {
        standard_catalog()
    }

    pub fn with_entry<I, S>(mut self, category: impl Into<String>, recommendations: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.entries.insert(
            category.into(),
            recommendations.into_iter().map(Into::into).collect(),
        );
        self
    }

    /// Catalog entry for a category; a missing entry yields an empty slice.
    pub fn generic_for(&self, category: &str) -> &[String] {
        self.entries
            .get(category)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }
}

/// Immutable questionnaire: ordered categories plus their recommendation catalog.
#[derive(Debug, Clone)]
pub struct Rubric {
    categories: Vec<Category>,
    catalog: RecommendationCatalog,
}

impl Rubric {
    pub fn new(categories: Vec<Category>, catalog: RecommendationCatalog) -> Self {
        Self {
            categories,
            catalog,
        }
    }

    /// The five Key Process Areas of CMMI maturity level 2.
    pub fn cmmi_level_two() -> Self {
        Self::new(standard_categories(), standard_catalog())
    }

    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    pub fn category(&self, name: &str) -> Option<&Category> {
        self.categories
            .iter()
            .find(|category| category.name == name)
    }

    /// Menu-style lookup using a 1-based index.
    pub fn category_at(&self, index: usize) -> Option<&Category> {
        index
            .checked_sub(1)
            .and_then(|position| self.categories.get(position))
    }

    pub fn position_of(&self, name: &str) -> Option<usize> {
        self.categories
            .iter()
            .position(|category| category.name == name)
    }

    pub fn catalog(&self) -> &RecommendationCatalog {
        &self.catalog
    }

    pub fn len(&self) -> usize {
        self.categories.len()
    }

    pub fn is_empty(&self) -> bool {
        self.categories.is_empty()
    }

    pub fn view(&self) -> RubricView {
        let categories = self
            .categories
            .iter()
            .enumerate()
            .map(|(index, category)| CategoryView {
                index: index + 1,
                name: category.name.clone(),
                questions: category
                    .questions
                    .iter()
                    .enumerate()
                    .map(|(position, text)| QuestionView {
                        position: position + 1,
                        text: text.clone(),
                    })
                    .collect(),
            })
            .collect();

        RubricView { categories }
    }
}

impl Default for Rubric {
    fn default() -> Self {
        Self::cmmi_level_two()
    }
}

fn standard_categories() -> Vec<Category> {
    vec![
        Category::new(
            REQUIREMENTS_MANAGEMENT,
            [
                "Are functional and non-functional requirements documented?",
                "Is there traceability between requirements and deliverables?",
                "Are requirement changes managed formally?",
                "Are requirements reviewed with stakeholders?",
                "Are requirements stored in an accessible repository?",
            ],
        ),
        Category::new(
            PROJECT_PLANNING,
            [
                "Is there a formally defined project plan?",
                "Are resources and schedules estimated realistically?",
                "Are risks and mitigation plans identified?",
                "Are responsibilities assigned clearly?",
                "Is the plan updated after relevant changes?",
            ],
        ),
        Category::new(
            PROJECT_MONITORING_AND_CONTROL,
            [
                "Is progress measured regularly (metrics)?",
                "Are deviations and corrective actions documented?",
                "Are periodic follow-up meetings held?",
                "Are issues and decisions managed formally?",
                "Is project status reported to stakeholders?",
            ],
        ),
        Category::new(
            CONFIGURATION_MANAGEMENT,
            [
                "Is version control used for the code?",
                "Are software releases and versions documented?",
                "Is there an established branching/merging policy?",
                "Are changes and their reasons recorded?",
                "Are artifacts (builds, deliverables) kept under control?",
            ],
        ),
        Category::new(
            QUALITY_ASSURANCE,
            [
                "Are quality criteria defined for deliveries?",
                "Are unit and integration tests performed systematically?",
                "Are defects recorded and analyzed?",
                "Are quality reviews and audits performed?",
                "Are tests and/or CI processes automated?",
            ],
        ),
    ]
}

fn standard_catalog() -> RecommendationCatalog {
    RecommendationCatalog::new()
        .with_entry(
            REQUIREMENTS_MANAGEMENT,
            [
                "Formalize complete requirements documentation (functional and non-functional).",
                "Implement a traceability matrix between requirements and deliverables/test cases.",
                "Establish periodic reviews with stakeholders to validate requirements.",
            ],
        )
        .with_entry(
            PROJECT_PLANNING,
            [
                "Draw up a formal project plan: objectives, scope, schedule and resources.",
                "Include risk analysis and mitigation plans in the planning.",
                "Review and update the plan periodically with the team.",
            ],
        )
        .with_entry(
            PROJECT_MONITORING_AND_CONTROL,
            [
                "Define progress and performance metrics (for example: percentage of tasks completed).",
                "Establish weekly follow-up meetings and record minutes.",
                "Document deviations and corrective actions.",
            ],
        )
        .with_entry(
            CONFIGURATION_MANAGEMENT,
            [
                "Adopt version control (for example Git) with a branching policy.",
                "Document changes, versions and releases of the software.",
                "Establish a configuration management policy and artifact tracking.",
            ],
        )
        .with_entry(
            QUALITY_ASSURANCE,
            [
                "Define quality criteria for each delivery and review compliance with them.",
                "Implement unit and integration tests and record their results.",
                "Establish a process to record and analyze defects and corrective actions.",
            ],
        )
}
