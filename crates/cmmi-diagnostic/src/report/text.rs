use super::document::AssessmentReport;

const RULE_WIDTH: usize = 80;

/// Human-readable rendering written next to the JSON report.
pub fn render_text(report: &AssessmentReport) -> String {
    let rule = "=".repeat(RULE_WIDTH);
    let mut lines = vec![
        format!("CMMI Level 2 Diagnostic - Project: {}", report.project),
        format!(
            "Date: {}",
            report.generated_at.format("%Y-%m-%dT%H:%M:%S")
        ),
        rule.clone(),
    ];

    for result in &report.results {
        lines.push(format!("\nKPA: {}", result.category));
        lines.push(format!(
            "  - Compliance percentage: {:.2}%",
            result.percentage
        ));
        lines.push(format!("  - Status: {}", result.tier_label));
        lines.push("  - Answers:".to_string());
        for answered in &result.answers {
            lines.push(format!(
                "     * {} -> {}",
                answered.question, answered.answer_label
            ));
        }
        lines.push("  - Recommendations:".to_string());
        for recommendation in &result.recommendations {
            lines.push(format!("     - {recommendation}"));
        }
    }

    let summary = &report.summary;
    lines.push(format!("\n{rule}"));
    lines.push("\nOverall summary:".to_string());
    lines.push(format!("  Implemented KPAs: {}", summary.implemented));
    lines.push(format!(
        "  Partially implemented KPAs: {}",
        summary.partially_implemented
    ));
    lines.push(format!("  Deficient KPAs: {}", summary.deficient));
    lines.push(format!(
        "\nLevel 2 verification: {}",
        summary.verification_label()
    ));
    lines.push("\nConclusion:".to_string());
    lines.push(report.conclusion.clone());

    lines.join("\n")
}
