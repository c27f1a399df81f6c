use serde::Deserialize;
use std::io::Read;

#[derive(Debug)]
pub(crate) struct SheetRecord {
    pub(crate) line: u64,
    pub(crate) category: String,
    pub(crate) question: String,
    pub(crate) answer: String,
}

/// Reads every non-blank row along with the 1-based source line it starts on.
pub(crate) fn parse_records<R: Read>(mut reader: R) -> Result<Vec<SheetRecord>, csv::Error> {
    let mut raw = String::new();
    reader.read_to_string(&mut raw)?;
    let raw = raw.strip_prefix('\u{feff}').unwrap_or(raw.as_str());

    let mut csv_reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(raw.as_bytes());
    let headers = csv_reader.headers()?.clone();

    let mut records = Vec::new();
    let mut record = csv::StringRecord::new();
    let mut consumed = csv_reader.position().byte();
    // The reader drops empty lines silently, so the start line is recovered
    // from the bytes consumed since the previous record.
    while csv_reader.read_record(&mut record)? {
        let line = start_line(raw, consumed);
        consumed = csv_reader.position().byte();

        let row: SheetRow = record.deserialize(Some(&headers))?;
        if row.is_blank() {
            continue;
        }

        records.push(SheetRecord {
            line,
            category: row.category,
            question: row.question,
            answer: row.answer,
        });
    }

    Ok(records)
}

fn start_line(raw: &str, from: u64) -> u64 {
    let from = usize::try_from(from).unwrap_or(raw.len()).min(raw.len());
    let start = raw
        .get(from..)
        .and_then(|rest| rest.find(|c: char| c != '\r' && c != '\n'))
        .map_or(raw.len(), |offset| from + offset);
    let preceding = raw.get(..start).unwrap_or(raw);
    preceding.matches('\n').count() as u64 + 1
}

#[derive(Debug, Deserialize)]
struct SheetRow {
    #[serde(rename = "Category", alias = "category")]
    category: String,
    #[serde(rename = "Question", alias = "question")]
    question: String,
    #[serde(rename = "Answer", alias = "answer", default)]
    answer: String,
}

impl SheetRow {
    fn is_blank(&self) -> bool {
        self.category.is_empty() && self.question.is_empty() && self.answer.is_empty()
    }
}
