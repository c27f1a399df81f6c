use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
pub struct QuestionView {
    pub position: usize,
    pub text: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct CategoryView {
    pub index: usize,
    pub name: String,
    pub questions: Vec<QuestionView>,
}

#[derive(Debug, Clone, Serialize)]
pub struct RubricView {
    pub categories: Vec<CategoryView>,
}
