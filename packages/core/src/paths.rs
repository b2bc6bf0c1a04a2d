//! Path resolution for the user's SSH client configuration

use std::path::PathBuf;

/// Get the path to the user's SSH config file (`~/.ssh/config`)
pub fn ssh_config_path() -> Option<PathBuf> {
    dirs::home_dir().map(|home| home.join(".ssh").join("config"))
}
