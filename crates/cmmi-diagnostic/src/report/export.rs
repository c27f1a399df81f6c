use super::document::AssessmentReport;
use super::text::render_text;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::info;

pub const JSON_REPORT_FILE: &str = "full_report.json";
pub const TEXT_REPORT_FILE: &str = "readable_report.txt";

#[derive(Debug, thiserror::Error)]
pub enum ExportError {
    #[error("failed to write report to {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to serialize report: {0}")]
    Json(#[from] serde_json::Error),
}

/// Locations of the files produced by a single export.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportedReport {
    pub folder: PathBuf,
    pub json_path: PathBuf,
    pub text_path: PathBuf,
}

/// Writes reports into `<root>/reports_<project>/`.
#[derive(Debug, Clone)]
pub struct ReportWriter {
    root: PathBuf,
}

impl ReportWriter {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Always a direct child of the root: spaces and path separators in the
    /// project name become `_`.
    pub fn folder_for(&self, project: &str) -> PathBuf {
        let name: String = project
            .chars()
            .map(|c| match c {
                ' ' | '/' | '\\' | ':' => '_',
                c if c.is_control() => '_',
                c => c,
            })
            .collect();
        self.root.join(format!("reports_{name}"))
    }

    pub fn write(&self, report: &AssessmentReport) -> Result<ExportedReport, ExportError> {
        let folder = self.folder_for(&report.project);
        fs::create_dir_all(&folder).map_err(|source| ExportError::Io {
            path: folder.clone(),
            source,
        })?;

        let json_path = folder.join(JSON_REPORT_FILE);
        let json = serde_json::to_string_pretty(report)?;
        write_file(&json_path, &json)?;
        info!(path = %json_path.display(), "json report written");

        let text_path = folder.join(TEXT_REPORT_FILE);
        write_file(&text_path, &render_text(report))?;
        info!(path = %text_path.display(), "text report written");

        Ok(ExportedReport {
            folder,
            json_path,
            text_path,
        })
    }
}

fn write_file(path: &Path, contents: &str) -> Result<(), ExportError> {
    fs::write(path, contents).map_err(|source| ExportError::Io {
        path: path.to_path_buf(),
        source,
    })
}
