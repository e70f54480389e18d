use anyhow::Result;
use clap::{CommandFactory, Parser};

use kenyaqa::app::{run_ask_mode, run_web_server, setup_from_cli};
use kenyaqa::Cli;

#[tokio::main]
async fn main() -> Result<()> {
    // Load environment variables from .env file if it exists
    dotenvy::dotenv().ok();

    // Parse CLI arguments
    let cli = Cli::parse();

    if let Some(shell) = cli.generate {
        clap_complete::generate(shell, &mut Cli::command(), "kenyaqa", &mut std::io::stdout());
        return Ok(());
    }

    kenyaqa_logging::init_tracing(cli.verbose);

    // Missing credentials stop the process here, before anything is served
    let app_config = setup_from_cli(&cli)?;

    // Handle ask mode if requested
    if let Some(question) = cli.ask.clone() {
        return run_ask_mode(&cli, question, app_config).await;
    }

    run_web_server(&cli, app_config).await
}
