//! sshmgr list - List all SSH config entries

use std::path::Path;

use anyhow::Result;
use clap::Args;
use console::style;
use sshmgr_core::load_document;

use crate::output::host_table;

/// Arguments for the list command
#[derive(Args)]
pub struct ListArgs {
    /// Include the IdentityFile column
    #[arg(short, long)]
    pub verbose: bool,

    /// Show only host aliases (for scripting)
    #[arg(long)]
    pub names_only: bool,
}

pub fn cmd_list(args: &ListArgs, config_path: &Path, quiet: bool) -> Result<()> {
    let doc = load_document(config_path)?;

    if doc.is_empty() {
        if !quiet && !args.names_only {
            println!("No SSH entries found.");
            println!();
            println!(
                "  {} {}",
                style("Add one with:").dim(),
                style("sshmgr add <host> <hostname> <user> <port>").yellow()
            );
        }
        return Ok(());
    }

    if args.names_only || quiet {
        for host in doc.hosts() {
            println!("{}", host.alias());
        }
        return Ok(());
    }

    println!("{}", host_table(doc.hosts(), args.verbose));

    Ok(())
}
