mod cli;
mod commands;
mod infra;
mod prompt;
mod questionnaire;
mod render;
mod routes;
mod server;

use cmmi_diagnostic::error::AppError;

pub async fn run() -> Result<(), AppError> {
    cli::run().await
}
