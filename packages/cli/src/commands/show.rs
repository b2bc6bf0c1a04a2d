//! sshmgr show - Show details for one host

use std::path::Path;

use anyhow::Result;
use clap::Args;
use serde::Serialize;
use sshmgr_core::{Field, load_document};

use crate::output::detail_table;

/// Arguments for the show command
#[derive(Args)]
pub struct ShowArgs {
    /// Host alias
    pub host: String,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// Managed-field snapshot used for JSON output
#[derive(Serialize)]
struct HostSnapshot<'a> {
    host: &'a str,
    hostname: Option<&'a str>,
    user: Option<&'a str>,
    port: Option<&'a str>,
    identity_file: Option<&'a str>,
}

pub fn cmd_show(args: &ShowArgs, config_path: &Path, quiet: bool) -> Result<()> {
    let doc = load_document(config_path)?;

    let host = doc
        .get(&args.host)
        .ok_or_else(|| anyhow::anyhow!("Host '{}' not found.", args.host))?;

    if args.json || quiet {
        let snapshot = HostSnapshot {
            host: host.alias(),
            hostname: host.field(Field::Hostname),
            user: host.field(Field::User),
            port: host.field(Field::Port),
            identity_file: host.field(Field::IdentityFile),
        };
        println!("{}", serde_json::to_string_pretty(&snapshot)?);
        return Ok(());
    }

    println!("{}", detail_table(host));

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use sshmgr_core::{ConfigDocument, HostEntry, save_document};

    #[test]
    fn test_show_missing_host_fails() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config");
        save_document(&path, &ConfigDocument::new()).unwrap();

        let args = ShowArgs {
            host: "nope".to_string(),
            json: false,
        };
        let err = cmd_show(&args, &path, false).unwrap_err();
        assert!(err.to_string().contains("not found"));
    }

    #[test]
    fn test_show_existing_host_succeeds() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config");

        let mut doc = ConfigDocument::new();
        doc.add_host(
            HostEntry::new("db1")
                .with_hostname("10.0.0.5")
                .with_user("admin")
                .with_port(2222),
        )
        .unwrap();
        save_document(&path, &doc).unwrap();

        let args = ShowArgs {
            host: "db1".to_string(),
            json: true,
        };
        cmd_show(&args, &path, false).unwrap();
    }
}
