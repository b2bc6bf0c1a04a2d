//! Table construction for host listings

use comfy_table::{Cell, Table};
use sshmgr_core::{Field, HostEntry, display_keyword};

/// Placeholder for directives a host does not set
const MISSING: &str = "N/A";

/// Build the multi-host listing table
pub fn host_table<'a, I>(hosts: I, verbose: bool) -> Table
where
    I: IntoIterator<Item = &'a HostEntry>,
{
    let mut table = Table::new();
    let mut header = vec!["Host", "Hostname", "User", "Port"];
    if verbose {
        header.push("IdentityFile");
    }
    table.set_header(header);

    for host in hosts {
        let mut row = vec![
            Cell::new(host.alias()),
            Cell::new(host.field(Field::Hostname).unwrap_or(MISSING)),
            Cell::new(host.field(Field::User).unwrap_or(MISSING)),
            Cell::new(host.field(Field::Port).unwrap_or(MISSING)),
        ];
        if verbose {
            row.push(Cell::new(host.field(Field::IdentityFile).unwrap_or(MISSING)));
        }
        table.add_row(row);
    }

    table
}

/// Build the key/value table for a single host
pub fn detail_table(host: &HostEntry) -> Table {
    let mut table = Table::new();
    table.set_header(vec!["Field", "Value"]);
    table.add_row(vec![Cell::new("Host"), Cell::new(host.alias())]);

    for (keyword, value) in host.directives() {
        table.add_row(vec![Cell::new(display_keyword(keyword)), Cell::new(value)]);
    }

    table
}

#[cfg(test)]
mod tests {
    use super::*;
    use sshmgr_core::HostEntry;

    fn host() -> HostEntry {
        HostEntry::new("db1")
            .with_hostname("10.0.0.5")
            .with_user("admin")
            .with_port(2222)
    }

    #[test]
    fn test_host_table_fills_missing_with_placeholder() {
        let bare = HostEntry::new("bare");
        let table = host_table([&bare], false);
        let rendered = table.to_string();

        assert!(rendered.contains("bare"));
        assert!(rendered.contains(MISSING));
    }

    #[test]
    fn test_verbose_adds_identity_file_column() {
        let entry = host();
        assert!(!host_table([&entry], false).to_string().contains("IdentityFile"));
        assert!(host_table([&entry], true).to_string().contains("IdentityFile"));
    }

    #[test]
    fn test_detail_table_uses_display_casing() {
        let entry = host();
        let rendered = detail_table(&entry).to_string();

        assert!(rendered.contains("HostName"));
        assert!(rendered.contains("10.0.0.5"));
        assert!(rendered.contains("Port"));
        assert!(rendered.contains("2222"));
    }
}
