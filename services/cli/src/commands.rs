use crate::prompt::Prompter;
use crate::questionnaire::Questionnaire;
use crate::render;
use clap::Args;
use cmmi_diagnostic::assessment::ScoringEngine;
use cmmi_diagnostic::config::AppConfig;
use cmmi_diagnostic::error::AppError;
use cmmi_diagnostic::import::AnswerSheetImporter;
use cmmi_diagnostic::report::{now_timestamp, AssessmentReport, ReportWriter};
use cmmi_diagnostic::telemetry;
use std::io::{self, Write};
use std::path::PathBuf;

/// Questionnaire commands log only warnings unless told otherwise.
const CLI_LOG_LEVEL: &str = "warn";

#[derive(Args, Debug, Default)]
pub(crate) struct AssessArgs {
    /// Project name used in the report (prompted for when omitted)
    #[arg(long)]
    pub(crate) project: Option<String>,
    /// Evaluate a single key process area by name instead of showing the menu
    #[arg(long)]
    pub(crate) category: Option<String>,
    /// Write JSON and text reports into the configured report directory
    #[arg(long)]
    pub(crate) export: bool,
}

#[derive(Args, Debug)]
pub(crate) struct ScoreArgs {
    /// CSV answer sheet with Category,Question,Answer columns
    #[arg(long)]
    pub(crate) answers: PathBuf,
    /// Project name used in the report
    #[arg(long)]
    pub(crate) project: Option<String>,
    /// Write JSON and text reports into the configured report directory
    #[arg(long)]
    pub(crate) export: bool,
}

pub(crate) fn run_assess(args: AssessArgs) -> Result<(), AppError> {
    let AssessArgs {
        project,
        category,
        export,
    } = args;

    let config = AppConfig::load()?;
    telemetry::init(&config.telemetry, CLI_LOG_LEVEL)?;

    let engine = ScoringEngine::standard();
    let stdin = io::stdin();
    let mut prompter = Prompter::new(stdin.lock(), io::stdout(), config.prompts.max_attempts);

    writeln!(prompter.output(), "Welcome to the CMMI Level 2 diagnostic tool.")?;
    let project = match project {
        Some(name) => name,
        None => prompter.project_name()?,
    };
    let project = resolve_project(Some(project), &config.reports.default_project);
    let writer = export.then(|| ReportWriter::new(config.reports.output_dir.clone()));

    let mut questionnaire = Questionnaire::new(&engine, prompter, project, writer);
    match category {
        Some(name) => questionnaire.run_category(&name).map(|_| ()),
        None => questionnaire.run_menu().map(|_| ()),
    }
}

pub(crate) fn run_score(args: ScoreArgs) -> Result<(), AppError> {
    let ScoreArgs {
        answers,
        project,
        export,
    } = args;

    let config = AppConfig::load()?;
    telemetry::init(&config.telemetry, CLI_LOG_LEVEL)?;

    let engine = ScoringEngine::standard();
    let sheet = AnswerSheetImporter::from_path(&answers, engine.rubric())?;
    let assessment = engine.assess(&sheet)?;
    let project = resolve_project(project, &config.reports.default_project);
    let report = AssessmentReport::new(project, assessment, now_timestamp());

    let mut out = io::stdout().lock();
    render::write_assessment(&mut out, &report)?;
    if export {
        let exported = ReportWriter::new(config.reports.output_dir.clone()).write(&report)?;
        render::write_export(&mut out, &exported)?;
    }

    Ok(())
}

pub(crate) fn run_rubric() -> Result<(), AppError> {
    let engine = ScoringEngine::standard();
    let mut out = io::stdout().lock();
    render::write_rubric(&mut out, &engine.rubric().view())?;
    Ok(())
}

fn resolve_project(project: Option<String>, default_project: &str) -> String {
    project
        .map(|name| name.trim().to_string())
        .filter(|name| !name.is_empty())
        .unwrap_or_else(|| default_project.to_string())
}
