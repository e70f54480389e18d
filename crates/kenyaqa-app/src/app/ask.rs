use anyhow::Result;
use colored::Colorize;
use std::error::Error;

use kenyaqa_types::QueryRequest;

use crate::app::AppConfig;
use crate::cli::Cli;

/// Run in ask mode - answer a single question and exit
pub async fn run_ask_mode(cli: &Cli, question: String, app_config: AppConfig) -> Result<()> {
    let service = app_config.query_service();

    eprintln!("{}", format!("Question: {}", question).bright_yellow());

    let result = match service.ask(&QueryRequest::new(question)).await {
        Ok(result) => result,
        Err(e) => {
            eprintln!("{} {}", "Error:".bright_red().bold(), e);
            if let Some(source) = e.source() {
                eprintln!("  {}", source.to_string().bright_black());
            }
            return Err(e.into());
        }
    };

    if cli.pretty {
        println!("{}", serde_json::to_string_pretty(&result)?);
    } else {
        println!("{}", serde_json::to_string(&result)?);
    }

    Ok(())
}
