//! CLI argument definitions using clap

use clap::{Args, Parser, Subcommand};
use clap_complete::Shell;
use std::path::PathBuf;

use crate::render::OutputFormat;

/// debrief - Turn meeting transcripts into structured executive reports
#[derive(Parser, Debug)]
#[command(name = "debrief")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Generate an executive report from a meeting transcript
    Analyze {
        /// Transcript file (reads stdin when omitted or "-")
        transcript: Option<PathBuf>,

        /// Model to use instead of the configured one
        #[arg(short, long)]
        model: Option<String>,

        #[command(flatten)]
        report: ReportArgs,
    },

    /// Build a report from a saved model completion, without calling the model
    Parse {
        /// Completion file (reads stdin when "-")
        completion: PathBuf,

        #[command(flatten)]
        report: ReportArgs,
    },

    /// Print a sample meeting transcript
    Sample,

    /// List the suggested models
    Models,

    /// Configuration management
    #[command(subcommand)]
    Config(ConfigCommand),

    /// Generate shell completion scripts
    Completions {
        /// Target shell
        #[arg(value_enum)]
        shell: Shell,
    },
}

/// Meeting metadata and output options shared by `analyze` and `parse`
#[derive(Args, Debug, Clone, Default)]
pub struct ReportArgs {
    /// Meeting name (defaults to "Meeting <date>")
    #[arg(long)]
    pub name: Option<String>,

    /// Meeting date (defaults to now)
    #[arg(long)]
    pub date: Option<String>,

    /// Highlight action items owned by this person
    #[arg(long)]
    pub owner: Option<String>,

    /// Output format
    #[arg(short, long, value_enum)]
    pub format: Option<OutputFormat>,

    /// Output file or directory (defaults to stdout)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Also write the action items as CSV to this path
    #[arg(long)]
    pub actions_csv: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
pub enum ConfigCommand {
    /// Show current configuration
    Show,

    /// Show configuration file path
    Path,

    /// Initialize default configuration
    Init {
        /// Force overwrite existing config
        #[arg(short, long)]
        force: bool,
    },
}
