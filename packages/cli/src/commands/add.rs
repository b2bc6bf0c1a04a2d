//! sshmgr add - Add a new SSH config entry

use std::path::Path;

use anyhow::{Result, bail};
use clap::Args;
use console::style;
use sshmgr_core::{HostEntry, load_document, save_document};

/// Arguments for the add command
#[derive(Args)]
pub struct AddArgs {
    /// Host alias (e.g. "db1", "staging")
    pub host: String,

    /// Server hostname or IP address
    pub hostname: String,

    /// Username to connect as
    pub user: String,

    /// Port number
    pub port: u16,

    /// Path to the private key file
    #[arg(long, value_name = "PATH")]
    pub identity_file: Option<String>,
}

pub fn cmd_add(args: &AddArgs, config_path: &Path, quiet: bool) -> Result<()> {
    if args.host.is_empty() || args.host.chars().any(char::is_whitespace) {
        bail!("Host alias must be non-empty and contain no whitespace: '{}'", args.host);
    }

    let mut doc = load_document(config_path)?;

    let mut entry = HostEntry::new(&args.host)
        .with_hostname(&args.hostname)
        .with_user(&args.user)
        .with_port(args.port);
    if let Some(key) = &args.identity_file {
        entry = entry.with_identity_file(key);
    }

    doc.add_host(entry)?;
    save_document(config_path, &doc)?;

    if !quiet {
        println!(
            "{} Host '{}' added ({}).",
            style("Added:").green(),
            style(&args.host).cyan(),
            args.hostname
        );
    }

    Ok(())
}
