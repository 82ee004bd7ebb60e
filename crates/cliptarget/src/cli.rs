//! Command-line surface.

use std::io::{self, Write};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{ArgAction, CommandFactory, Parser, Subcommand};
use clap_complete::Shell;

use crate::app::pipeline::Pipeline;
use crate::app::wire::OutputStyle;
use crate::domain::token::keyword;
use crate::infra::config::Config;

#[derive(Parser, Debug)]
#[command(
    name = "cliptarget",
    version,
    about = "Resolve spoken clipboard targets into RPC payloads"
)]
pub struct Cli {
    #[arg(long, global = true, help = "Pretty-print JSON output")]
    pub pretty: bool,
    #[arg(
        short,
        long,
        global = true,
        action = ArgAction::Count,
        help = "Increase log verbosity (repeatable)"
    )]
    pub verbose: u8,
    #[arg(long, global = true, help = "Use this config file instead of the workspace config")]
    pub config: Option<PathBuf>,
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Print the target payload for an utterance
    Resolve {
        #[arg(required = true, num_args = 1..)]
        words: Vec<String>,
    },
    /// Print the remote command carrying the payload
    Rpc {
        #[arg(required = true, num_args = 1..)]
        words: Vec<String>,
        #[arg(long, help = "Command id (defaults to rpc.command from config)")]
        command: Option<String>,
    },
    /// List keywords and configured search types
    Vocabulary,
    /// Generate shell completions
    Completions { shell: Shell },
}

pub fn run(cli: Cli) -> Result<()> {
    let mut stdout = io::stdout().lock();
    match cli.command {
        Commands::Completions { shell } => {
            clap_complete::generate(shell, &mut Cli::command(), "cliptarget", &mut stdout);
        }
        Commands::Resolve { words } => {
            let (pipeline, style) = prepare(cli.config.as_deref(), cli.pretty)?;
            let payload = pipeline.payload(&words.join(" "))?;
            writeln!(stdout, "{}", payload.render(style)?)?;
        }
        Commands::Rpc { words, command } => {
            let (pipeline, style) = prepare(cli.config.as_deref(), cli.pretty)?;
            let request = pipeline.rpc_command(&words.join(" "), command.as_deref())?;
            writeln!(stdout, "{}", request.render(style)?)?;
        }
        Commands::Vocabulary => {
            let (pipeline, _) = prepare(cli.config.as_deref(), cli.pretty)?;
            writeln!(stdout, "keywords: {}", keyword::ALL.join(", "))?;
            writeln!(stdout, "search types:")?;
            for (spoken, label) in pipeline.vocabulary().search_types() {
                writeln!(stdout, "  {spoken} -> {label}")?;
            }
        }
    }
    stdout.flush().context("failed to flush stdout")?;
    Ok(())
}

fn prepare(config_path: Option<&Path>, pretty: bool) -> Result<(Pipeline, OutputStyle)> {
    let config = match config_path {
        Some(path) => Config::load_from(path)?,
        None => Config::load()?,
    };
    let configured = config
        .defaults
        .output_style()
        .context("invalid output setting in [defaults] or CLIPTARGET_OUTPUT")?;
    let style = if pretty {
        OutputStyle::Pretty
    } else {
        configured
    };
    tracing::debug!(command = %config.rpc.command(), style = style.as_str(), "loaded config");
    Ok((Pipeline::from_config(&config)?, style))
}
