//! Load and save the SSH config file
//!
//! A missing file loads as an empty document so first use needs no setup.
//! Saves render the whole document to a temp file in the target directory
//! and rename it into place, so readers never observe a half-written
//! config. Concurrent invocations are not coordinated: last writer wins.

use std::fs;
use std::io::Write;
use std::path::Path;

use tempfile::NamedTempFile;

use crate::document::{self, ConfigDocument};
use crate::error::ConfigError;

/// Load a config document from `path`
///
/// Returns an empty document if the file does not exist.
pub fn load_document(path: &Path) -> Result<ConfigDocument, ConfigError> {
    if !path.exists() {
        tracing::debug!("SSH config not found, starting empty: {}", path.display());
        return Ok(ConfigDocument::new());
    }

    let contents = fs::read_to_string(path)
        .map_err(|e| ConfigError::Read(format!("{}: {}", path.display(), e)))?;

    let doc = document::parse(&contents);
    tracing::debug!("Loaded {} hosts from {}", doc.len(), path.display());
    Ok(doc)
}

/// Save a config document to `path`, atomically
///
/// Creates the parent directory (mode 700 on Unix) if needed and writes the
/// file with mode 600, matching what OpenSSH expects of `~/.ssh/config`.
pub fn save_document(path: &Path, doc: &ConfigDocument) -> Result<(), ConfigError> {
    // Relative paths like "config" have an empty parent
    let dir = match path.parent() {
        Some(dir) if !dir.as_os_str().is_empty() => dir,
        _ => Path::new("."),
    };

    if !dir.exists() {
        fs::create_dir_all(dir)
            .map_err(|e| ConfigError::Write(format!("Failed to create {}: {}", dir.display(), e)))?;

        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            fs::set_permissions(dir, fs::Permissions::from_mode(0o700)).map_err(|e| {
                ConfigError::Write(format!(
                    "Failed to set permissions on {}: {}",
                    dir.display(),
                    e
                ))
            })?;
        }
    }

    let mut tmp = NamedTempFile::new_in(dir).map_err(|e| {
        ConfigError::Write(format!("Failed to create temp file in {}: {}", dir.display(), e))
    })?;

    tmp.write_all(document::render(doc).as_bytes())
        .map_err(|e| ConfigError::Write(format!("{}: {}", path.display(), e)))?;

    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        tmp.as_file()
            .set_permissions(fs::Permissions::from_mode(0o600))
            .map_err(|e| {
                ConfigError::Write(format!(
                    "Failed to set permissions on {}: {}",
                    path.display(),
                    e
                ))
            })?;
    }

    tmp.persist(path)
        .map_err(|e| ConfigError::Write(format!("{}: {}", path.display(), e)))?;

    tracing::debug!("Saved {} hosts to {}", doc.len(), path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::document::{Field, HostEntry};

    #[test]
    fn test_load_missing_file_returns_empty_document() {
        let dir = tempfile::tempdir().unwrap();
        let doc = load_document(&dir.path().join("config")).unwrap();
        assert!(doc.is_empty());
        assert!(doc.hosts().is_empty());
    }

    #[test]
    fn test_save_then_load_round_trips_hosts() {
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

        let loaded = load_document(&path).unwrap();
        let host = loaded.get("db1").unwrap();
        assert_eq!(host.field(Field::Hostname), Some("10.0.0.5"));
        assert_eq!(host.field(Field::User), Some("admin"));
        assert_eq!(host.field(Field::Port), Some("2222"));
        assert_eq!(host.field(Field::IdentityFile), None);
    }

    #[test]
    fn test_save_creates_missing_parent_directory() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(".ssh").join("config");

        save_document(&path, &ConfigDocument::new()).unwrap();

        assert!(path.exists());

        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            let dir_mode = fs::metadata(path.parent().unwrap()).unwrap().permissions().mode();
            let file_mode = fs::metadata(&path).unwrap().permissions().mode();
            assert_eq!(dir_mode & 0o777, 0o700);
            assert_eq!(file_mode & 0o777, 0o600);
        }
    }

    #[test]
    fn test_save_leaves_no_temp_files_behind() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config");

        save_document(&path, &ConfigDocument::new()).unwrap();

        let entries: Vec<_> = fs::read_dir(dir.path())
            .unwrap()
            .map(|e| e.unwrap().file_name())
            .collect();
        assert_eq!(entries, vec!["config"]);
    }

    #[test]
    fn test_save_preserves_unmanaged_content() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config");
        fs::write(
            &path,
            "# team defaults\nHost *\n    ServerAliveInterval 60\n",
        )
        .unwrap();

        let mut doc = load_document(&path).unwrap();
        doc.add_host(
            HostEntry::new("db1")
                .with_hostname("10.0.0.5")
                .with_user("admin")
                .with_port(2222),
        )
        .unwrap();
        save_document(&path, &doc).unwrap();

        let written = fs::read_to_string(&path).unwrap();
        assert!(written.starts_with("# team defaults\n"));
        assert!(written.contains("Host *\n    ServerAliveInterval 60\n"));
        assert!(written.contains("Host db1\n"));
    }

    #[test]
    fn test_load_unreadable_path_fails_with_read_error() {
        // A directory exists but cannot be read as a file, regardless of
        // the uid the tests run under
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config");
        fs::create_dir(&path).unwrap();

        let err = load_document(&path).unwrap_err();
        assert!(matches!(err, ConfigError::Read(_)));
    }
}
