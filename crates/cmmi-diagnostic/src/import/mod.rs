mod normalizer;
mod parser;

use crate::assessment::{Answer, AnswerSheet, AssessmentError, Category, Rubric};
use normalizer::normalize_text;
use parser::SheetRecord;
use std::collections::HashMap;
use std::io::Read;
use std::path::Path;
use tracing::info;

#[derive(Debug)]
pub enum AnswerSheetImportError {
    Io(std::io::Error),
    Csv(csv::Error),
    Answer { line: u64, source: AssessmentError },
    UnknownCategory { line: u64, category: String },
    UnknownQuestion {
        line: u64,
        category: String,
        question: String,
    },
    DuplicateAnswer {
        line: u64,
        category: String,
        position: usize,
    },
    MissingAnswer { category: String, position: usize },
    EmptySheet,
}

impl std::fmt::Display for AnswerSheetImportError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AnswerSheetImportError::Io(err) => write!(f, "failed to read answer sheet: {}", err),
            AnswerSheetImportError::Csv(err) => write!(f, "invalid answer sheet CSV: {}", err),
            AnswerSheetImportError::Answer { line, source } => {
                write!(f, "line {}: {}", line, source)
            }
            AnswerSheetImportError::UnknownCategory { line, category } => write!(
                f,
                "line {}: category '{}' is not part of the rubric",
                line, category
            ),
            AnswerSheetImportError::UnknownQuestion {
                line,
                category,
                question,
            } => write!(
                f,
                "line {}: '{}' does not match any question of '{}'",
                line, question, category
            ),
            AnswerSheetImportError::DuplicateAnswer {
                line,
                category,
                position,
            } => write!(
                f,
                "line {}: question {} of '{}' was already answered",
                line, position, category
            ),
            AnswerSheetImportError::MissingAnswer { category, position } => write!(
                f,
                "question {} of '{}' has no answer",
                position, category
            ),
            AnswerSheetImportError::EmptySheet => write!(f, "answer sheet contains no answers"),
        }
    }
}

impl std::error::Error for AnswerSheetImportError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            AnswerSheetImportError::Io(err) => Some(err),
            AnswerSheetImportError::Csv(err) => Some(err),
            AnswerSheetImportError::Answer { source, .. } => Some(source),
            _ => None,
        }
    }
}

impl From<std::io::Error> for AnswerSheetImportError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err)
    }
}

impl From<csv::Error> for AnswerSheetImportError {
    fn from(err: csv::Error) -> Self {
        Self::Csv(err)
    }
}

/// Loads `Category,Question,Answer` CSV sheets into an [`AnswerSheet`].
///
/// `Question` may be the 1-based position or the question text. Categories
/// appear in the resulting sheet in rubric order, and each one present must
/// answer all of its questions exactly once.
pub struct AnswerSheetImporter;

impl AnswerSheetImporter {
    pub fn from_path<P: AsRef<Path>>(
        path: P,
        rubric: &Rubric,
    ) -> Result<AnswerSheet, AnswerSheetImportError> {
        let file = std::fs::File::open(path.as_ref())?;
        let sheet = Self::from_reader(file, rubric)?;
        info!(
            path = %path.as_ref().display(),
            categories = sheet.len(),
            "answer sheet imported"
        );
        Ok(sheet)
    }

    pub fn from_reader<R: Read>(
        reader: R,
        rubric: &Rubric,
    ) -> Result<AnswerSheet, AnswerSheetImportError> {
        let records = parser::parse_records(reader)?;
        if records.is_empty() {
            return Err(AnswerSheetImportError::EmptySheet);
        }

        let mut slots: HashMap<usize, Vec<Option<Answer>>> = HashMap::new();
        for record in records {
            apply_record(record, rubric, &mut slots)?;
        }

        let mut sheet = AnswerSheet::new();
        for (index, category) in rubric.categories().iter().enumerate() {
            let Some(answers) = slots.remove(&index) else {
                continue;
            };

            let answers = answers
                .into_iter()
                .enumerate()
                .map(|(offset, answer)| {
                    answer.ok_or_else(|| AnswerSheetImportError::MissingAnswer {
                        category: category.name.clone(),
                        position: offset + 1,
                    })
                })
                .collect::<Result<Vec<_>, _>>()?;

            sheet.push(category.name.clone(), answers);
        }

        Ok(sheet)
    }
}

fn apply_record(
    record: SheetRecord,
    rubric: &Rubric,
    slots: &mut HashMap<usize, Vec<Option<Answer>>>,
) -> Result<(), AnswerSheetImportError> {
    let SheetRecord {
        line,
        category,
        question,
        answer,
    } = record;

    let wanted = normalize_text(&category);
    let (index, definition) = rubric
        .categories()
        .iter()
        .enumerate()
        .find(|(_, candidate)| normalize_text(&candidate.name) == wanted)
        .ok_or(AnswerSheetImportError::UnknownCategory { line, category })?;

    let position = resolve_position(definition, &question).ok_or_else(|| {
        AnswerSheetImportError::UnknownQuestion {
            line,
            category: definition.name.clone(),
            question,
        }
    })?;

    let answer = Answer::from_token(&answer)
        .map_err(|source| AnswerSheetImportError::Answer { line, source })?;

    let answers = slots
        .entry(index)
        .or_insert_with(|| vec![None; definition.len()]);
    let slot = &mut answers[position - 1];
    if slot.is_some() {
        return Err(AnswerSheetImportError::DuplicateAnswer {
            line,
            category: definition.name.clone(),
            position,
        });
    }
    *slot = Some(answer);

    Ok(())
}

/// Accepts a 1-based position or the question text.
fn resolve_position(category: &Category, question: &str) -> Option<usize> {
    if let Ok(position) = question.parse::<usize>() {
        return category.question(position).map(|_| position);
    }

    let wanted = normalize_text(question);
    category
        .questions
        .iter()
        .position(|candidate| normalize_text(candidate) == wanted)
        .map(|index| index + 1)
}
