//! sshmgr CLI - Manage SSH config entries
//!
//! Thin presentation layer over sshmgr-core: argument dispatch, table
//! rendering, and confirmation prompts.

mod commands;
mod output;
mod prompt;

use std::path::PathBuf;

use anyhow::Result;
use clap::{CommandFactory, Parser, Subcommand};
use sshmgr_core::ssh_config_path;

use prompt::TerminalConfirmation;

/// Manage SSH config entries from the command line
#[derive(Parser)]
#[command(name = "sshmgr")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Manage SSH config entries from the command line", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Path to the SSH config file (default: ~/.ssh/config)
    #[arg(short, long, global = true, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Suppress non-error output
    #[arg(short, long, global = true)]
    quiet: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    no_color: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Add a new SSH config entry
    Add(commands::AddArgs),
    /// List all SSH config entries
    List(commands::ListArgs),
    /// Search entries by host alias or hostname
    Search(commands::SearchArgs),
    /// Show details for one host
    Show(commands::ShowArgs),
    /// Edit a field of an existing entry
    Edit(commands::EditArgs),
    /// Delete an SSH config entry
    Delete(commands::DeleteArgs),
}

pub fn run() -> Result<()> {
    tracing_subscriber::fmt::init();

    // Unrecognized commands get usage help and a clean exit, like running
    // with no command at all
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) if err.kind() == clap::error::ErrorKind::InvalidSubcommand => {
            Cli::command().print_help()?;
            return Ok(());
        }
        Err(err) => err.exit(),
    };

    if cli.no_color {
        console::set_colors_enabled(false);
    }

    let config_path = match cli.config {
        Some(path) => path,
        None => {
            ssh_config_path().ok_or_else(|| anyhow::anyhow!("Could not determine home directory"))?
        }
    };

    match cli.command {
        Some(Commands::Add(args)) => commands::cmd_add(&args, &config_path, cli.quiet),
        Some(Commands::List(args)) => commands::cmd_list(&args, &config_path, cli.quiet),
        Some(Commands::Search(args)) => commands::cmd_search(&args, &config_path, cli.quiet),
        Some(Commands::Show(args)) => commands::cmd_show(&args, &config_path, cli.quiet),
        Some(Commands::Edit(args)) => commands::cmd_edit(&args, &config_path, cli.quiet),
        Some(Commands::Delete(args)) => {
            commands::cmd_delete(&args, &config_path, cli.quiet, &TerminalConfirmation)
        }
        None => {
            // No command: print usage and exit cleanly
            Cli::command().print_help()?;
            Ok(())
        }
    }
}
