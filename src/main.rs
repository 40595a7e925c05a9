//! debrief - Turn meeting transcripts into structured executive reports
//!
//! Entry point for the debrief CLI application.

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use debrief::cli::{Cli, Commands};
use debrief::config::Settings;

#[tokio::main]
async fn main() -> Result<()> {
    // Parse CLI arguments
    let cli = Cli::parse();

    match cli.command {
        Commands::Completions { shell } => {
            debrief::cli::commands::print_completions(shell);
        }
        Commands::Sample => {
            debrief::cli::commands::print_sample();
        }
        command => {
            // Picks up OPENROUTER_API_KEY from a local .env, if present
            dotenvy::dotenv().ok();

            // Load configuration only for runtime commands.
            let settings = Settings::load()?;

            let default_level = if cli.verbose {
                "debug"
            } else {
                settings.general.log_level.as_str()
            };
            init_logging(default_level);

            // Execute command
            match command {
                Commands::Analyze {
                    transcript,
                    model,
                    report,
                } => {
                    debrief::cli::commands::analyze_transcript(&settings, transcript, model, report)
                        .await?;
                }
                Commands::Parse { completion, report } => {
                    debrief::cli::commands::parse_completion(&settings, completion, report)?;
                }
                Commands::Models => {
                    debrief::cli::commands::list_models(&settings);
                }
                Commands::Config(config_cmd) => {
                    debrief::cli::commands::config_command(&settings, config_cmd)?;
                }
                Commands::Completions { .. } | Commands::Sample => unreachable!(),
            }
        }
    }

    Ok(())
}

fn init_logging(default_level: &str) {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)))
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_writer(std::io::stderr),
        )
        .init();
}
