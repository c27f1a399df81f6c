use serde::{Deserialize, Serialize};

/// Compliance percentage at or above which a category counts as implemented.
pub const IMPLEMENTED_THRESHOLD: f64 = 80.0;
/// Compliance percentage at or above which a category counts as partially implemented.
pub const PARTIAL_THRESHOLD: f64 = 50.0;

/// Closed set of answers a respondent can give to a rubric question.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", try_from = "String")]
pub enum Answer {
    Yes,
    Partial,
    No,
}

impl Answer {
    pub const fn ordered() -> [Self; 3] {
        [Self::Yes, Self::Partial, Self::No]
    }

    /// Fixed weight contributed to the category average.
    pub const fn weight(self) -> f64 {
        match self {
            Self::Yes => 1.0,
            Self::Partial => 0.5,
            Self::No => 0.0,
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Yes => "Yes",
            Self::Partial => "Partial",
            Self::No => "No",
        }
    }

    pub const fn is_satisfactory(self) -> bool {
        matches!(self, Self::Yes)
    }

    /// Translates a presentation-layer token (menu digit, radio value, or word) into an answer.
    pub fn from_token(token: &str) -> Result<Self, AssessmentError> {
        let trimmed = token.trim();
        match trimmed.to_lowercase().as_str() {
            "yes" | "y" | "1" | "si" | "sí" => Ok(Self::Yes),
            "partial" | "p" | "parcial" | "2" => Ok(Self::Partial),
            "no" | "n" | "3" => Ok(Self::No),
            _ => Err(AssessmentError::InvalidAnswer {
                token: trimmed.to_string(),
            }),
        }
    }
}

impl TryFrom<String> for Answer {
    type Error = AssessmentError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::from_token(&value)
    }
}

/// Maturity classification derived from a compliance percentage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Tier {
    Deficient,
    PartiallyImplemented,
    Implemented,
}

impl Tier {
    pub const fn ordered() -> [Self; 3] {
        [Self::Implemented, Self::PartiallyImplemented, Self::Deficient]
    }

    pub fn from_percentage(percentage: f64) -> Self {
        if percentage >= IMPLEMENTED_THRESHOLD {
            Self::Implemented
        } else if percentage >= PARTIAL_THRESHOLD {
            Self::PartiallyImplemented
        } else {
            Self::Deficient
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Implemented => "Implemented",
            Self::PartiallyImplemented => "Partially implemented",
            Self::Deficient => "Deficient",
        }
    }
}

/// Named group of questions (a Key Process Area).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    pub name: String,
    pub questions: Vec<String>,
}

impl Category {
    pub fn new<N, I, Q>(name: N, questions: I) -> Self
    where
        N: Into<String>,
        I: IntoIterator<Item = Q>,
        Q: Into<String>,
    {
        Self {
            name: name.into(),
            questions: questions.into_iter().map(Into::into).collect(),
        }
    }

    /// Looks up a question by its 1-based position.
    pub fn question(&self, position: usize) -> Option<&str> {
        position
            .checked_sub(1)
            .and_then(|index| self.questions.get(index))
            .map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.questions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }
}

/// A question paired with the answer it received.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AnsweredQuestion {
    pub position: usize,
    pub question: String,
    pub answer: Answer,
    pub answer_label: &'static str,
    pub weight: f64,
}

impl AnsweredQuestion {
    pub fn new(position: usize, question: impl Into<String>, answer: Answer) -> Self {
        Self {
            position,
            question: question.into(),
            answer,
            answer_label: answer.label(),
            weight: answer.weight(),
        }
    }
}

/// Outcome of scoring a single category.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CategoryResult {
    pub category: String,
    pub answers: Vec<AnsweredQuestion>,
    pub percentage: f64,
    pub tier: Tier,
    pub tier_label: &'static str,
    pub recommendations: Vec<String>,
}

/// Answers collected for one category, aligned with its question order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryAnswers {
    pub category: String,
    pub answers: Vec<Answer>,
}

impl CategoryAnswers {
    pub fn new(category: impl Into<String>, answers: Vec<Answer>) -> Self {
        Self {
            category: category.into(),
            answers,
        }
    }
}

/// Ordered batch of category answers submitted for a single assessment run.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AnswerSheet {
    entries: Vec<CategoryAnswers>,
}

impl AnswerSheet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_category(mut self, category: impl Into<String>, answers: Vec<Answer>) -> Self {
        self.push(category, answers);
        self
    }

    pub fn push(&mut self, category: impl Into<String>, answers: Vec<Answer>) {
        self.entries.push(CategoryAnswers::new(category, answers));
    }

    pub fn entries(&self) -> &[CategoryAnswers] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl From<Vec<CategoryAnswers>> for AnswerSheet {
    fn from(entries: Vec<CategoryAnswers>) -> Self {
        Self { entries }
    }
}

/// Contract violations raised by the scoring engine.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AssessmentError {
    #[error("invalid answer '{token}': expected yes, partial or no")]
    InvalidAnswer { token: String },
    #[error("category '{category}' has no questions to score")]
    EmptyCategory { category: String },
    #[error("category '{category}' is not part of the rubric")]
    UnknownCategory { category: String },
    #[error("category '{category}' expects {expected} answers, found {found}")]
    AnswerCountMismatch {
        category: String,
        expected: usize,
        found: usize,
    },
}
