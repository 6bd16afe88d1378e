//! CLI argument definitions using clap.
//!
//! ## Commands
//!
//! - `generate`: Extract fragments from the raw listings (the default)
//! - `init`: Write a default `.wowchunksrc.json`

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use crate::generate::Component;

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
pub struct Arguments {
    #[command(subcommand)]
    pub command: Option<Command>,
}

impl Arguments {
    /// The command to run; no subcommand means `generate` with defaults.
    pub fn command_or_default(self) -> Command {
        self.command
            .unwrap_or_else(|| Command::Generate(GenerateCommand::default()))
    }
}

/// Input locations. Flags override `.wowchunksrc.json`, which overrides defaults.
#[derive(Debug, Clone, Default, Args)]
pub struct InputArgs {
    /// Directory containing the listings and config file
    #[arg(long)]
    pub root: Option<PathBuf>,

    /// Global function listing (default: raw_api)
    #[arg(long)]
    pub api: Option<String>,

    /// FrameXML function listing (default: raw_framexml)
    #[arg(long)]
    pub framexml: Option<String>,

    /// Widget method listing (default: raw_widget)
    #[arg(long)]
    pub widget: Option<String>,

    /// Event listing (default: raw_events)
    #[arg(long)]
    pub events: Option<String>,
}

#[derive(Debug, Clone, Default, Parser)]
pub struct GenerateArgs {
    #[command(flatten)]
    pub inputs: InputArgs,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

#[derive(Debug, Clone, Default, Args)]
pub struct GenerateCommand {
    /// Components to generate (default: all)
    #[arg(value_enum)]
    pub components: Vec<Component>,
    #[command(flatten)]
    pub args: GenerateArgs,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Print grammar fragments for functions, widgets and events
    Generate(GenerateCommand),
    /// Initialize a new .wowchunksrc.json configuration file
    Init,
}
