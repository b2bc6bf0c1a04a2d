//! sshmgr search - Search entries by host alias or hostname

use std::path::Path;

use anyhow::Result;
use clap::Args;
use sshmgr_core::load_document;

use crate::output::host_table;

/// Arguments for the search command
#[derive(Args)]
pub struct SearchArgs {
    /// Literal substring to match against alias and hostname
    pub query: String,
}

pub fn cmd_search(args: &SearchArgs, config_path: &Path, quiet: bool) -> Result<()> {
    let doc = load_document(config_path)?;
    let matches = doc.find(&args.query);

    if matches.is_empty() {
        if !quiet {
            println!("No matches found for query: {}", args.query);
        }
        return Ok(());
    }

    if quiet {
        for host in &matches {
            println!("{}", host.alias());
        }
        return Ok(());
    }

    println!("{}", host_table(matches, false));

    Ok(())
}
