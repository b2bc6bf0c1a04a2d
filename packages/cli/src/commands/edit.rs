//! sshmgr edit - Edit a field of an existing entry

use std::path::Path;

use anyhow::{Context, Result};
use clap::Args;
use console::style;
use sshmgr_core::{Field, load_document, save_document};

/// Arguments for the edit command
#[derive(Args)]
pub struct EditArgs {
    /// Host alias
    pub host: String,

    /// Field to update: hostname, user, port, or identityfile
    pub field: String,

    /// New value for the field
    pub value: String,
}

pub fn cmd_edit(args: &EditArgs, config_path: &Path, quiet: bool) -> Result<()> {
    let field: Field = args.field.parse().map_err(|e: String| anyhow::anyhow!(e))?;

    // Stored as text like every other directive, but still has to be a port
    if field == Field::Port {
        args.value
            .parse::<u16>()
            .with_context(|| format!("Invalid port number: '{}'", args.value))?;
    }

    let mut doc = load_document(config_path)?;
    doc.set_field(&args.host, field, &args.value)?;
    save_document(config_path, &doc)?;

    if !quiet {
        println!(
            "{} Host '{}' updated. Field '{}' set to '{}'.",
            style("Updated:").green(),
            style(&args.host).cyan(),
            field.display_name(),
            args.value
        );
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use sshmgr_core::{ConfigDocument, HostEntry, save_document};

    fn seed(dir: &tempfile::TempDir) -> std::path::PathBuf {
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
        path
    }

    fn edit_args(field: &str, value: &str) -> EditArgs {
        EditArgs {
            host: "db1".to_string(),
            field: field.to_string(),
            value: value.to_string(),
        }
    }

    #[test]
    fn test_edit_port_then_reload() {
        let dir = tempfile::tempdir().unwrap();
        let path = seed(&dir);

        cmd_edit(&edit_args("port", "2200"), &path, true).unwrap();

        let doc = load_document(&path).unwrap();
        let host = doc.get("db1").unwrap();
        assert_eq!(host.field(Field::Port), Some("2200"));
        // Never-set field stays absent
        assert_eq!(host.field(Field::IdentityFile), None);
    }

    #[test]
    fn test_edit_creates_never_set_field() {
        let dir = tempfile::tempdir().unwrap();
        let path = seed(&dir);

        cmd_edit(&edit_args("identityfile", "~/.ssh/db_key"), &path, true).unwrap();

        let doc = load_document(&path).unwrap();
        assert_eq!(
            doc.get("db1").unwrap().field(Field::IdentityFile),
            Some("~/.ssh/db_key")
        );
    }

    #[test]
    fn test_field_name_is_case_insensitive() {
        let dir = tempfile::tempdir().unwrap();
        let path = seed(&dir);

        cmd_edit(&edit_args("HostName", "db.internal"), &path, true).unwrap();

        let doc = load_document(&path).unwrap();
        assert_eq!(
            doc.get("db1").unwrap().field(Field::Hostname),
            Some("db.internal")
        );
    }

    #[test]
    fn test_unknown_field_is_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let path = seed(&dir);

        let err = cmd_edit(&edit_args("proxyjump", "bastion"), &path, true).unwrap_err();
        assert!(err.to_string().contains("unknown field"));
    }

    #[test]
    fn test_invalid_port_value_is_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let path = seed(&dir);
        let before = std::fs::read_to_string(&path).unwrap();

        let err = cmd_edit(&edit_args("port", "banana"), &path, true).unwrap_err();
        assert!(err.to_string().contains("Invalid port number"));
        assert_eq!(std::fs::read_to_string(&path).unwrap(), before);
    }

    #[test]
    fn test_edit_missing_host_fails() {
        let dir = tempfile::tempdir().unwrap();
        let path = seed(&dir);

        let args = EditArgs {
            host: "nope".to_string(),
            field: "user".to_string(),
            value: "root".to_string(),
        };
        let err = cmd_edit(&args, &path, true).unwrap_err();
        assert!(err.to_string().contains("Host not found"));
    }
}
