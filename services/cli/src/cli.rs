use crate::commands::{run_assess, run_rubric, run_score, AssessArgs, ScoreArgs};
use crate::server;
use clap::{Args, Parser, Subcommand};
use cmmi_diagnostic::error::AppError;

#[derive(Parser, Debug)]
#[command(
    name = "cmmi-diagnostic",
    about = "Self-assess a project against the CMMI Level 2 key process areas",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Run the interactive questionnaire (default command)
    Assess(AssessArgs),
    /// Score a completed CSV answer sheet without prompting
    Score(ScoreArgs),
    /// Print the key process areas and their questions
    Rubric,
    /// Start the HTTP service
    Serve(ServeArgs),
}

#[derive(Args, Debug, Default)]
pub(crate) struct ServeArgs {
    /// Override the configured host for the HTTP server
    #[arg(long)]
    pub(crate) host: Option<String>,
    /// Override the configured port for the HTTP server
    #[arg(long)]
    pub(crate) port: Option<u16>,
}

pub(crate) async fn run() -> Result<(), AppError> {
    let cli = Cli::parse();
    let command = cli
        .command
        .unwrap_or_else(|| Command::Assess(AssessArgs::default()));

    match command {
        Command::Assess(args) => run_assess(args),
        Command::Score(args) => run_score(args),
        Command::Rubric => run_rubric(),
        Command::Serve(args) => server::run(args).await,
    }
}
