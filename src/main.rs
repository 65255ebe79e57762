// file: src/main.rs
// description: commandline application entry point with command handling
// reference: application bootstrap and orchestration

use anyhow::{Context, Result};
use clap::{ArgAction, Parser, Subcommand};
use colored::Colorize;
use helpdesk_summarize::{Config, IntakeWorkflow, SummarizePipeline, Validator};
use std::path::PathBuf;
use tracing::{info, warn};

#[derive(Parser)]
#[command(name = "helpdesk_summarize")]
#[command(version = "0.1.0")]
#[command(about = "Confluence knowledge summarization and help desk intake pipelines", long_about = None)]
struct Cli {
    #[arg(
        short,
        long,
        value_name = "FILE",
        default_value = "config/default.toml"
    )]
    config: PathBuf,

    #[arg(long, default_value_t = true, action = ArgAction::Set)]
    color: bool,

    #[arg(short, long, action = ArgAction::SetTrue)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Summarize Confluence knowledge about a software or tool
    Summarize {
        /// Software or tool name to search for
        keyword: String,
    },

    /// Run a free-text support request through the intake workflow
    Intake {
        /// The support request text
        query: String,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    helpdesk_summarize::utils::logging::init_logger(cli.color, cli.verbose);

    info!("Help Desk Summarization Pipelines");
    info!("Loading configuration from: {}", cli.config.display());

    let config = if cli.config.exists() {
        Config::load(Some(cli.config.as_path())).context("Failed to load configuration")?
    } else {
        warn!(
            "Config file {} not found, using default configuration",
            cli.config.display()
        );
        Config::load(None).unwrap_or_else(|e| {
            warn!("Falling back to built-in defaults: {}", e);
            Config::default_config()
        })
    };

    match cli.command {
        Commands::Summarize { keyword } => {
            cmd_summarize(&config, &keyword).await?;
        }
        Commands::Intake { query } => {
            cmd_intake(&config, &query).await?;
        }
    }

    Ok(())
}

async fn cmd_summarize(config: &Config, keyword: &str) -> Result<()> {
    Validator::validate_keyword(keyword).context("Invalid search keyword")?;

    info!("Summarizing data for '{}' from Confluence...", keyword);

    let pipeline =
        SummarizePipeline::new(config).context("Failed to initialize summarization pipeline")?;
    let summary = pipeline.summarize_software(keyword).await;

    println!("{}", "----- COMPREHENSIVE SUMMARY -----".cyan().bold());
    println!("{}", summary);

    Ok(())
}

async fn cmd_intake(config: &Config, query: &str) -> Result<()> {
    Validator::validate_keyword(query).context("Invalid support query")?;

    info!("Handling support request");

    let workflow = IntakeWorkflow::new(config).context("Failed to initialize intake workflow")?;
    let outcome = workflow
        .handle_query(query)
        .await
        .context("Intake workflow failed")?;

    println!("{}", "Final Summary:".cyan().bold());
    println!("{}", outcome);

    Ok(())
}
