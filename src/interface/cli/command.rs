//! CLI 명령 파싱 모듈.

use clap::{Parser, Subcommand};

use crate::domain::campaign::RunOptions;

#[derive(Debug, Parser)]
#[command(name = "campaignpilot")]
#[command(about = "Generate WhatsApp marketing messages for the next pending campaign")]
pub struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Run the full pipeline but skip the document update
    #[arg(long)]
    dry_run: bool,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Show effective merged config and credential resolution
    Config,
}

pub enum CliAction {
    InspectConfig,
    Process(RunOptions),
}

impl Cli {
    pub fn parse_action() -> CliAction {
        let cli = Cli::parse();

        match cli.command {
            Some(Commands::Config) => CliAction::InspectConfig,
            None => CliAction::Process(RunOptions {
                dry_run: cli.dry_run,
            }),
        }
    }
}
