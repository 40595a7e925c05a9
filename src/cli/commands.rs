//! CLI command implementations

use anyhow::{Context, Result};
use clap::CommandFactory;
use clap_complete::Shell;
use std::path::{Path, PathBuf};

use crate::analysis::{self, read_input, SAMPLE_TRANSCRIPT};
use crate::cli::args::{Cli, ConfigCommand, ReportArgs};
use crate::config::Settings;
use crate::llm::{build_provider, MODEL_CATALOG};
use crate::render::{self, default_file_stem, render_actions_csv, OutputFormat};
use crate::report::{parse_report, ExecutiveReport, MeetingRequest};
use crate::DebriefError;

/// Generate an executive report for a transcript
pub async fn analyze_transcript(
    settings: &Settings,
    transcript: Option<PathBuf>,
    model: Option<String>,
    args: ReportArgs,
) -> Result<()> {
    let transcript = read_input(transcript.as_deref()).context("Failed to read transcript")?;
    if transcript.trim().is_empty() {
        return Err(DebriefError::EmptyTranscript.into());
    }

    let request = build_request(settings, &args, transcript);
    let provider = build_provider(settings, model.as_deref())?;

    let report = match analysis::analyze(provider.as_ref(), &request).await {
        Ok(report) => report,
        Err(DebriefError::Provider(err)) => anyhow::bail!("{}", err.user_message()),
        Err(err) => return Err(err.into()),
    };

    emit_report(settings, &args, &request, &report)?;
    eprintln!("✅ Executive report complete");

    Ok(())
}

/// Build a report from a completion saved earlier
pub fn parse_completion(
    settings: &Settings,
    completion: PathBuf,
    args: ReportArgs,
) -> Result<()> {
    let raw = read_input(Some(completion.as_path()))
        .with_context(|| format!("Failed to read completion: {}", completion.display()))?;

    let request = build_request(settings, &args, String::new());
    let report = parse_report(&raw);

    emit_report(settings, &args, &request, &report)
}

/// Print the bundled sample transcript
pub fn print_sample() {
    print!("{}", SAMPLE_TRANSCRIPT);
}

/// List suggested models, marking the configured one
pub fn list_models(settings: &Settings) {
    let configured = settings.llm.model.trim();

    for model in MODEL_CATALOG {
        let marker = if model == configured { "*" } else { " " };
        println!("{} {}", marker, model);
    }

    if !configured.is_empty() && !MODEL_CATALOG.iter().any(|model| *model == configured) {
        println!("* {} (configured)", configured);
    }
    println!();
    println!("Switch models with --model if a provider is rate limiting you.");
}

/// Handle config subcommands
pub fn config_command(settings: &Settings, cmd: ConfigCommand) -> Result<()> {
    match cmd {
        ConfigCommand::Show => {
            let mut shown = settings.clone();
            if !shown.llm.api_key.trim().is_empty() {
                shown.llm.api_key = "********".to_string();
            }
            let toml = toml::to_string_pretty(&shown)?;
            println!("{}", toml);
        }
        ConfigCommand::Path => {
            let path = Settings::config_path()?;
            println!("{}", path.display());
        }
        ConfigCommand::Init { force } => {
            let path = Settings::config_path()?;
            if path.exists() && !force {
                anyhow::bail!(
                    "Config file already exists at {}. Use --force to overwrite.",
                    path.display()
                );
            }
            Settings::write_default(&path)?;
            println!("Configuration initialized at: {}", path.display());
        }
    }

    Ok(())
}

/// Print completion script for the requested shell to stdout.
pub fn print_completions(shell: Shell) {
    let mut cmd = Cli::command();
    let command_name = cmd.get_name().to_string();
    clap_complete::generate(shell, &mut cmd, command_name, &mut std::io::stdout());
}

// Helper functions

fn build_request(settings: &Settings, args: &ReportArgs, transcript: String) -> MeetingRequest {
    let owner = args
        .owner
        .clone()
        .unwrap_or_else(|| settings.report.focus_owner.clone());

    MeetingRequest::new(args.name.clone(), args.date.clone(), owner, transcript)
}

fn emit_report(
    settings: &Settings,
    args: &ReportArgs,
    request: &MeetingRequest,
    report: &ExecutiveReport,
) -> Result<()> {
    let format = args.format.unwrap_or(settings.report.default_format);
    let content = render::render(format, request, report)?;

    match &args.output {
        Some(path) => {
            let path = resolve_output_path(path, &request.name, "report", format);
            std::fs::write(&path, content)
                .with_context(|| format!("Failed to write report: {}", path.display()))?;
            eprintln!("Exported to: {}", path.display());
        }
        None => print!("{}", content),
    }

    if let Some(path) = &args.actions_csv {
        if report.action_items.is_empty() {
            eprintln!("No action items found, skipping {}", path.display());
        } else {
            let path = resolve_output_path(path, &request.name, "actions", OutputFormat::Csv);
            std::fs::write(&path, render_actions_csv(report))
                .with_context(|| format!("Failed to write action items: {}", path.display()))?;
            eprintln!("Action items exported to: {}", path.display());
        }
    }

    Ok(())
}

/// Directories get a file named after the meeting; anything else is used as is.
fn resolve_output_path(
    path: &Path,
    meeting_name: &str,
    suffix: &str,
    format: OutputFormat,
) -> PathBuf {
    if path.is_dir() {
        path.join(format!(
            "{}.{}",
            default_file_stem(meeting_name, suffix),
            format.extension()
        ))
    } else {
        path.to_path_buf()
    }
}
