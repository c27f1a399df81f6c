use cmmi_diagnostic::assessment::{Answer, Category, Rubric};
use cmmi_diagnostic::error::AppError;
use std::fmt;
use std::io::{self, BufRead, Write};
use tracing::warn;

const BANNER_WIDTH: usize = 60;

#[derive(Debug)]
pub(crate) enum PromptError {
    Io(io::Error),
    InputClosed,
    AttemptsExhausted { attempts: u8 },
}

impl fmt::Display for PromptError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PromptError::Io(err) => write!(f, "failed to read questionnaire input: {err}"),
            PromptError::InputClosed => {
                write!(f, "input closed before the questionnaire finished")
            }
            PromptError::AttemptsExhausted { attempts } => {
                write!(f, "no valid answer after {attempts} attempt(s)")
            }
        }
    }
}

impl std::error::Error for PromptError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            PromptError::Io(err) => Some(err),
            PromptError::InputClosed | PromptError::AttemptsExhausted { .. } => None,
        }
    }
}

impl From<io::Error> for PromptError {
    fn from(value: io::Error) -> Self {
        Self::Io(value)
    }
}

impl From<PromptError> for AppError {
    fn from(value: PromptError) -> Self {
        match value {
            PromptError::Io(err) => AppError::Io(err),
            other => AppError::Prompt(other.to_string()),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum MenuChoice {
    EvaluateAll,
    EvaluateOne,
    Quit,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum NextStep {
    Menu,
    Quit,
}

/// Line-oriented prompts with a bounded number of attempts per question.
pub(crate) struct Prompter<R, W> {
    input: R,
    output: W,
    max_attempts: u8,
}

impl<R: BufRead, W: Write> Prompter<R, W> {
    pub(crate) fn new(input: R, output: W, max_attempts: u8) -> Self {
        Self {
            input,
            output,
            max_attempts: max_attempts.max(1),
        }
    }

    pub(crate) fn output(&mut self) -> &mut W {
        &mut self.output
    }

    #[cfg(test)]
    pub(crate) fn into_output(self) -> W {
        self.output
    }

    pub(crate) fn project_name(&mut self) -> Result<String, PromptError> {
        self.read_line("Project name: ")
    }

    pub(crate) fn menu(&mut self) -> Result<MenuChoice, PromptError> {
        let banner = "#".repeat(BANNER_WIDTH);
        writeln!(self.output, "\n{banner}")?;
        writeln!(self.output, "CMMI LEVEL 2 DIAGNOSTIC TOOL")?;
        writeln!(self.output, "{banner}")?;
        writeln!(self.output, "Options:")?;
        writeln!(self.output, "  1) Evaluate all KPAs (recommended)")?;
        writeln!(self.output, "  2) Evaluate a specific KPA")?;
        writeln!(self.output, "  3) Quit")?;

        self.ask("Choose an option (1/2/3): ", |input| match input {
            "1" => Some(MenuChoice::EvaluateAll),
            "2" => Some(MenuChoice::EvaluateOne),
            "3" => Some(MenuChoice::Quit),
            _ => None,
        })
    }

    pub(crate) fn choose_category<'r>(
        &mut self,
        rubric: &'r Rubric,
    ) -> Result<&'r Category, PromptError> {
        writeln!(self.output, "\nSelect the KPA to evaluate:")?;
        for (index, category) in rubric.categories().iter().enumerate() {
            writeln!(self.output, "  {}) {}", index + 1, category.name)?;
        }

        let prompt = format!("Choose (1-{}): ", rubric.len());
        self.ask(&prompt, |input| {
            input
                .parse::<usize>()
                .ok()
                .and_then(|index| rubric.category_at(index))
        })
    }

    pub(crate) fn answer_category(&mut self, category: &Category) -> Result<Vec<Answer>, PromptError> {
        let rule = "=".repeat(BANNER_WIDTH);
        writeln!(self.output, "\n{rule}")?;
        writeln!(self.output, "Evaluating KPA: {}", category.name)?;
        writeln!(self.output, "{rule}")?;

        let mut answers = Vec::with_capacity(category.len());
        for question in &category.questions {
            writeln!(self.output, "\n{question}")?;
            for (index, answer) in Answer::ordered().iter().enumerate() {
                writeln!(self.output, "  {}) {}", index + 1, answer.label())?;
            }
            let answer = self.ask("Choose an option (1/2/3): ", |input| {
                Answer::from_token(input).ok()
            })?;
            answers.push(answer);
        }

        Ok(answers)
    }

    /// Anything other than an explicit yes declines.
    pub(crate) fn confirm(&mut self, prompt: &str) -> Result<bool, PromptError> {
        let line = self.read_line(prompt)?;
        Ok(matches!(line.to_lowercase().as_str(), "y" | "yes"))
    }

    pub(crate) fn next_step(&mut self) -> Result<NextStep, PromptError> {
        self.ask(
            "\nEvaluate another KPA or return to the main menu? (b=back, q=quit): ",
            |input| match input.to_lowercase().as_str() {
                "b" | "back" => Some(NextStep::Menu),
                "q" | "quit" => Some(NextStep::Quit),
                _ => None,
            },
        )
    }

    fn ask<T>(
        &mut self,
        prompt: &str,
        mut parse: impl FnMut(&str) -> Option<T>,
    ) -> Result<T, PromptError> {
        for attempt in 1..=self.max_attempts {
            let line = self.read_line(prompt)?;
            if let Some(value) = parse(&line) {
                return Ok(value);
            }

            warn!(
                attempt,
                max_attempts = self.max_attempts,
                input = %line,
                "rejected questionnaire input"
            );
            writeln!(self.output, "Invalid option. Try again.")?;
        }

        Err(PromptError::AttemptsExhausted {
            attempts: self.max_attempts,
        })
    }

    fn read_line(&mut self, prompt: &str) -> Result<String, PromptError> {
        write!(self.output, "{prompt}")?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Err(PromptError::InputClosed);
        }
        Ok(line.trim().to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cmmi_diagnostic::assessment::rubric::QUALITY_ASSURANCE;
    use std::io::Cursor;

    fn prompter(input: &str, attempts: u8) -> Prompter<Cursor<Vec<u8>>, Vec<u8>> {
        Prompter::new(Cursor::new(input.as_bytes().to_vec()), Vec::new(), attempts)
    }

    #[test]
    fn menu_accepts_numbered_options() {
        let mut prompter = prompter("2\n", 3);
        assert_eq!(prompter.menu().expect("menu choice"), MenuChoice::EvaluateOne);

        let output = String::from_utf8(prompter.into_output()).expect("utf8");
        assert!(output.contains("CMMI LEVEL 2 DIAGNOSTIC TOOL"));
        assert!(output.contains("  3) Quit"));
    }

    #[test]
    fn invalid_input_is_reprompted_until_valid() {
        let mut prompter = prompter("9\nmaybe\n3\n", 3);
        assert_eq!(prompter.menu().expect("menu choice"), MenuChoice::Quit);

        let output = String::from_utf8(prompter.into_output()).expect("utf8");
        assert_eq!(output.matches("Invalid option. Try again.").count(), 2);
    }

    #[test]
    fn retries_are_bounded() {
        let mut prompter = prompter("x\ny\nz\n1\n", 3);
        match prompter.menu() {
            Err(PromptError::AttemptsExhausted { attempts }) => assert_eq!(attempts, 3),
            other => panic!("expected exhausted attempts, got {other:?}"),
        }
    }

    #[test]
    fn closed_input_aborts() {
        let mut prompter = prompter("", 3);
        assert!(matches!(prompter.menu(), Err(PromptError::InputClosed)));
    }

    #[test]
    fn answers_accept_digits_and_words() {
        let rubric = Rubric::cmmi_level_two();
        let category = rubric.category(QUALITY_ASSURANCE).expect("category");
        let mut prompter = prompter("1\nno\nparcial\n\n2\nyes\n", 2);

        let answers = prompter.answer_category(category).expect("answers");

        assert_eq!(
            answers,
            vec![
                Answer::Yes,
                Answer::No,
                Answer::Partial,
                Answer::Partial,
                Answer::Yes,
            ]
        );
        let output = String::from_utf8(prompter.into_output()).expect("utf8");
        assert!(output.contains("Evaluating KPA: Quality Assurance"));
        assert!(output.contains("  2) Partial"));
    }

    #[test]
    fn category_choice_uses_one_based_index() {
        let rubric = Rubric::cmmi_level_two();
        let mut prompter = prompter("0\n4\n", 3);

        let category = prompter.choose_category(&rubric).expect("category");

        assert_eq!(category.name, "Configuration Management");
    }

    #[test]
    fn exhausted_prompt_becomes_app_error() {
        let err: AppError = PromptError::AttemptsExhausted { attempts: 3 }.into();
        assert!(matches!(err, AppError::Prompt(_)));
        assert_eq!(
            err.to_string(),
            "questionnaire aborted: no valid answer after 3 attempt(s)"
        );
    }

    #[test]
    fn confirm_only_accepts_explicit_yes() {
        let mut prompter = prompter("Y\nsure\n", 3);
        assert!(prompter.confirm("Again? ").expect("confirm"));
        assert!(!prompter.confirm("Again? ").expect("confirm"));
    }
}
