use crate::prompt::{MenuChoice, NextStep, Prompter};
use crate::render;
use cmmi_diagnostic::assessment::{AnswerSheet, AssessmentError, Category, ScoringEngine};
use cmmi_diagnostic::error::AppError;
use cmmi_diagnostic::report::{now_timestamp, AssessmentReport, ReportWriter};
use std::io::{BufRead, Write};
use tracing::info;

/// Interactive assessment session for one project.
pub(crate) struct Questionnaire<'e, R, W> {
    engine: &'e ScoringEngine,
    prompter: Prompter<R, W>,
    project: String,
    writer: Option<ReportWriter>,
}

impl<'e, R: BufRead, W: Write> Questionnaire<'e, R, W> {
    pub(crate) fn new(
        engine: &'e ScoringEngine,
        prompter: Prompter<R, W>,
        project: String,
        writer: Option<ReportWriter>,
    ) -> Self {
        Self {
            engine,
            prompter,
            project,
            writer,
        }
    }

    /// Menu loop: runs until the respondent quits and returns every report produced.
    pub(crate) fn run_menu(&mut self) -> Result<Vec<AssessmentReport>, AppError> {
        let engine = self.engine;
        let mut reports = Vec::new();

        loop {
            match self.prompter.menu()? {
                MenuChoice::EvaluateAll => {
                    let categories: Vec<&Category> = engine.rubric().categories().iter().collect();
                    let report = self.evaluate(&categories)?;
                    render::write_assessment(self.prompter.output(), &report)?;
                    self.export(&report)?;
                    reports.push(report);

                    if !self
                        .prompter
                        .confirm("\nWould you like to run another assessment? (y/n): ")?
                    {
                        writeln!(self.prompter.output(), "Done. Good luck with the practice!")?;
                        break;
                    }
                }
                MenuChoice::EvaluateOne => {
                    let category = self.prompter.choose_category(engine.rubric())?;
                    let report = self.evaluate_single(category)?;
                    reports.push(report);

                    if self.prompter.next_step()? == NextStep::Quit {
                        writeln!(self.prompter.output(), "Done. Good luck with the practice!")?;
                        break;
                    }
                }
                MenuChoice::Quit => {
                    writeln!(self.prompter.output(), "Exiting. Goodbye!")?;
                    break;
                }
            }
        }

        Ok(reports)
    }

    /// Evaluates one named category without showing the menu.
    pub(crate) fn run_category(&mut self, name: &str) -> Result<AssessmentReport, AppError> {
        let engine = self.engine;
        let category = engine
            .rubric()
            .category(name)
            .ok_or_else(|| AssessmentError::UnknownCategory {
                category: name.to_string(),
            })?;
        self.evaluate_single(category)
    }

    fn evaluate_single(&mut self, category: &Category) -> Result<AssessmentReport, AppError> {
        let report = self.evaluate(&[category])?;
        for result in &report.results {
            render::write_category(self.prompter.output(), result)?;
        }
        self.export(&report)?;
        Ok(report)
    }

    fn evaluate(&mut self, categories: &[&Category]) -> Result<AssessmentReport, AppError> {
        let mut sheet = AnswerSheet::new();
        for category in categories {
            let answers = self.prompter.answer_category(category)?;
            sheet.push(category.name.clone(), answers);
        }

        let assessment = self.engine.assess(&sheet)?;
        info!(
            project = %self.project,
            categories = sheet.len(),
            meets_target_level = assessment.meets_target_level(),
            "questionnaire completed"
        );
        Ok(AssessmentReport::new(&self.project, assessment, now_timestamp()))
    }

    fn export(&mut self, report: &AssessmentReport) -> Result<(), AppError> {
        if let Some(writer) = &self.writer {
            let exported = writer.write(report)?;
            render::write_export(self.prompter.output(), &exported)?;
        }
        Ok(())
    }
}
