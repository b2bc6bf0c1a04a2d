//! sshmgr delete - Delete an SSH config entry

use std::path::Path;

use anyhow::Result;
use clap::Args;
use console::style;
use sshmgr_core::{load_document, save_document};

use crate::prompt::Confirmation;

/// Arguments for the delete command
#[derive(Args)]
pub struct DeleteArgs {
    /// Host alias
    pub host: String,

    /// Skip the confirmation prompt
    #[arg(short, long)]
    pub yes: bool,
}

pub fn cmd_delete(
    args: &DeleteArgs,
    config_path: &Path,
    quiet: bool,
    confirm: &dyn Confirmation,
) -> Result<()> {
    let mut doc = load_document(config_path)?;

    // Missing host fails before the operator is prompted
    if doc.get(&args.host).is_none() {
        anyhow::bail!("Host '{}' not found.", args.host);
    }

    if !args.yes {
        let accepted = confirm.confirm(&format!("Delete host '{}'?", args.host))?;
        if !accepted {
            if !quiet {
                println!("Cancelled.");
            }
            return Ok(());
        }
    }

    doc.remove_host(&args.host)?;
    save_document(config_path, &doc)?;

    if !quiet {
        println!(
            "{} Host '{}' deleted.",
            style("Deleted:").green(),
            style(&args.host).cyan()
        );
    }

    Ok(())
}
