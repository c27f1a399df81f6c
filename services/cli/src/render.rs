use cmmi_diagnostic::assessment::{CategoryResult, RubricView, TARGET_LEVEL_MET};
use cmmi_diagnostic::report::{AssessmentReport, ExportedReport};
use std::io::{self, Write};

const RULE_WIDTH: usize = 80;
const DETAIL_WIDTH: usize = 60;

pub(crate) fn write_rubric<W: Write>(out: &mut W, rubric: &RubricView) -> io::Result<()> {
    writeln!(out, "CMMI Level 2 key process areas")?;
    for category in &rubric.categories {
        writeln!(out, "\n{}. {}", category.index, category.name)?;
        for question in &category.questions {
            writeln!(out, "   {}) {}", question.position, question.text)?;
        }
    }
    Ok(())
}

/// Full-run console report: every category, the overall summary, what is
/// still needed for Level 2, and the conclusion.
pub(crate) fn write_assessment<W: Write>(out: &mut W, report: &AssessmentReport) -> io::Result<()> {
    let rule = "=".repeat(RULE_WIDTH);
    writeln!(out, "\n{rule}")?;
    writeln!(out, "SUMMARY REPORT (all KPAs) - Project: {}", report.project)?;
    writeln!(out, "{rule}")?;

    for result in &report.results {
        writeln!(out, "\nKPA: {}", result.category)?;
        writeln!(out, "  - Compliance: {:.2}%", result.percentage)?;
        writeln!(out, "  - Status: {}", result.tier_label)?;
        writeln!(out, "  - Answers:")?;
        for answered in &result.answers {
            writeln!(out, "     * {} -> {}", answered.question, answered.answer_label)?;
        }
        writeln!(out, "  - Recommendations:")?;
        for recommendation in &result.recommendations {
            writeln!(out, "     - {recommendation}")?;
        }
    }

    let summary = &report.summary;
    writeln!(out, "\n{rule}")?;
    writeln!(out, "Overall summary:")?;
    writeln!(out, "  Implemented KPAs: {}", summary.implemented)?;
    writeln!(
        out,
        "  Partially implemented KPAs: {}",
        summary.partially_implemented
    )?;
    writeln!(out, "  Deficient KPAs: {}", summary.deficient)?;

    writeln!(out, "\nReaching Level 2:")?;
    if report.target_advice.is_empty() {
        writeln!(out, "  {TARGET_LEVEL_MET}")?;
    } else {
        for advice in &report.target_advice {
            writeln!(out, "  {} ({})", advice.category, advice.tier_label)?;
            for recommendation in &advice.recommendations {
                writeln!(out, "     - {recommendation}")?;
            }
        }
    }

    writeln!(
        out,
        "\nLevel 2 verification: {}",
        summary.verification_label()
    )?;
    writeln!(out, "{}", report.conclusion)
}

pub(crate) fn write_category<W: Write>(out: &mut W, result: &CategoryResult) -> io::Result<()> {
    let rule = "=".repeat(DETAIL_WIDTH);
    writeln!(out, "\n{rule}")?;
    writeln!(out, "Selected KPA report: {}", result.category)?;
    writeln!(out, "{rule}")?;
    writeln!(out, "Compliance: {:.2}%", result.percentage)?;
    writeln!(out, "Status: {}", result.tier_label)?;

    writeln!(out, "\nAnswers:")?;
    for answered in &result.answers {
        writeln!(out, " - {} -> {}", answered.question, answered.answer_label)?;
    }

    writeln!(out, "\nRecommendations:")?;
    for recommendation in &result.recommendations {
        writeln!(out, " - {recommendation}")?;
    }
    Ok(())
}

pub(crate) fn write_export<W: Write>(out: &mut W, exported: &ExportedReport) -> io::Result<()> {
    writeln!(out, "\nReports saved in {}", exported.folder.display())?;
    writeln!(out, "  - {}", exported.json_path.display())?;
    writeln!(out, "  - {}", exported.text_path.display())
}
