//! In-memory model of an SSH client config file
//!
//! A parsed file is an ordered sequence of `Host` blocks plus any
//! surrounding content (comments, global directives, malformed lines) kept
//! so a load/save cycle does not destroy lines this tool does not manage.

mod parser;
mod writer;

pub use parser::parse;
pub use writer::{display_keyword, render};

use std::str::FromStr;

use crate::error::ConfigError;

/// The directive set this tool manages
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Hostname,
    User,
    Port,
    IdentityFile,
}

impl Field {
    /// Lowercase directive keyword used for lookups
    pub fn keyword(self) -> &'static str {
        match self {
            Field::Hostname => "hostname",
            Field::User => "user",
            Field::Port => "port",
            Field::IdentityFile => "identityfile",
        }
    }

    /// Canonical SSH casing for display and serialization
    pub fn display_name(self) -> &'static str {
        match self {
            Field::Hostname => "HostName",
            Field::User => "User",
            Field::Port => "Port",
            Field::IdentityFile => "IdentityFile",
        }
    }
}

impl FromStr for Field {
    type Err = String;

    // Field names are accepted in any casing and normalized, matching how
    // directive keywords are handled elsewhere.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "hostname" => Ok(Field::Hostname),
            "user" => Ok(Field::User),
            "port" => Ok(Field::Port),
            "identityfile" => Ok(Field::IdentityFile),
            other => Err(format!(
                "unknown field '{other}' (expected hostname, user, port, or identityfile)"
            )),
        }
    }
}

/// One line inside a host block
#[derive(Debug, Clone, PartialEq)]
pub(crate) enum BodyLine {
    /// `<Keyword> <value>` line; keyword normalized to lowercase
    Directive { keyword: String, value: String },
    /// Comment, blank, or otherwise unsplittable line, kept as trimmed text
    Opaque(String),
}

/// One `Host` block: an alias plus its ordered directives
#[derive(Debug, Clone, PartialEq)]
pub struct HostEntry {
    alias: String,
    body: Vec<BodyLine>,
}

impl HostEntry {
    /// Create an empty host block
    pub fn new(alias: impl Into<String>) -> Self {
        Self {
            alias: alias.into(),
            body: Vec::new(),
        }
    }

    /// Builder pattern: set hostname
    pub fn with_hostname(self, hostname: impl Into<String>) -> Self {
        self.with_field(Field::Hostname, hostname)
    }

    /// Builder pattern: set user
    pub fn with_user(self, user: impl Into<String>) -> Self {
        self.with_field(Field::User, user)
    }

    /// Builder pattern: set port
    pub fn with_port(self, port: u16) -> Self {
        self.with_field(Field::Port, port.to_string())
    }

    /// Builder pattern: set identity file
    pub fn with_identity_file(self, path: impl Into<String>) -> Self {
        self.with_field(Field::IdentityFile, path)
    }

    fn with_field(mut self, field: Field, value: impl Into<String>) -> Self {
        self.set_field(field, value);
        self
    }

    pub fn alias(&self) -> &str {
        &self.alias
    }

    /// Value of a directive by lowercase keyword; first occurrence wins
    pub fn directive(&self, keyword: &str) -> Option<&str> {
        let keyword = keyword.to_ascii_lowercase();
        self.body.iter().find_map(|line| match line {
            BodyLine::Directive { keyword: k, value } if *k == keyword => Some(value.as_str()),
            _ => None,
        })
    }

    /// Update a directive in place, or append it if the block never set it
    pub fn set_directive(&mut self, keyword: &str, value: impl Into<String>) {
        let keyword = keyword.to_ascii_lowercase();
        let value = value.into();

        for line in &mut self.body {
            if let BodyLine::Directive { keyword: k, value: v } = line {
                if *k == keyword {
                    *v = value;
                    return;
                }
            }
        }

        // Insert after the last directive so trailing comments and blank
        // separator lines stay at the end of the block.
        let insert_at = self
            .body
            .iter()
            .rposition(|line| matches!(line, BodyLine::Directive { .. }))
            .map_or(0, |i| i + 1);
        self.body.insert(insert_at, BodyLine::Directive { keyword, value });
    }

    pub fn field(&self, field: Field) -> Option<&str> {
        self.directive(field.keyword())
    }

    pub fn set_field(&mut self, field: Field, value: impl Into<String>) {
        self.set_directive(field.keyword(), value);
    }

    /// Convenience accessor for the hostname directive
    pub fn hostname(&self) -> Option<&str> {
        self.field(Field::Hostname)
    }

    /// All directives in block order as (lowercase keyword, value) pairs
    pub fn directives(&self) -> impl Iterator<Item = (&str, &str)> {
        self.body.iter().filter_map(|line| match line {
            BodyLine::Directive { keyword, value } => Some((keyword.as_str(), value.as_str())),
            BodyLine::Opaque(_) => None,
        })
    }

    pub(crate) fn push_line(&mut self, line: BodyLine) {
        self.body.push(line);
    }

    pub(crate) fn lines(&self) -> &[BodyLine] {
        &self.body
    }
}

/// The whole config file: preamble plus ordered host blocks
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ConfigDocument {
    /// Lines before the first `Host` block, byte-for-byte
    preamble: Vec<String>,
    hosts: Vec<HostEntry>,
}

impl ConfigDocument {
    /// Create an empty document
    pub fn new() -> Self {
        Self::default()
    }

    /// Host blocks in document order
    pub fn hosts(&self) -> &[HostEntry] {
        &self.hosts
    }

    /// Number of host blocks
    pub fn len(&self) -> usize {
        self.hosts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.hosts.is_empty()
    }

    /// Look up a host by alias (case-sensitive exact match, first wins)
    pub fn get(&self, alias: &str) -> Option<&HostEntry> {
        self.hosts.iter().find(|h| h.alias == alias)
    }

    /// Append a new host block at the end of the document
    pub fn add_host(&mut self, entry: HostEntry) -> Result<(), ConfigError> {
        if self.get(&entry.alias).is_some() {
            return Err(ConfigError::DuplicateHost(entry.alias));
        }

        // Blank line between blocks, matching hand-written config conventions
        if let Some(prev) = self.hosts.last_mut() {
            if !matches!(prev.body.last(), Some(BodyLine::Opaque(text)) if text.is_empty()) {
                prev.body.push(BodyLine::Opaque(String::new()));
            }
        } else if self.preamble.last().is_some_and(|line| !line.trim().is_empty()) {
            self.preamble.push(String::new());
        }

        self.hosts.push(entry);
        Ok(())
    }

    /// Update one field of an existing host, creating the directive if the
    /// block never set it
    pub fn set_field(
        &mut self,
        alias: &str,
        field: Field,
        value: impl Into<String>,
    ) -> Result<(), ConfigError> {
        let host = self
            .hosts
            .iter_mut()
            .find(|h| h.alias == alias)
            .ok_or_else(|| ConfigError::HostNotFound(alias.to_string()))?;
        host.set_field(field, value);
        Ok(())
    }

    /// Remove a host block, preserving the order of the remaining entries
    pub fn remove_host(&mut self, alias: &str) -> Result<HostEntry, ConfigError> {
        let pos = self
            .hosts
            .iter()
            .position(|h| h.alias == alias)
            .ok_or_else(|| ConfigError::HostNotFound(alias.to_string()))?;
        Ok(self.hosts.remove(pos))
    }

    /// Hosts whose alias or hostname contains `query` as a case-sensitive
    /// literal substring, in document order
    pub fn find(&self, query: &str) -> Vec<&HostEntry> {
        self.hosts
            .iter()
            .filter(|h| h.alias.contains(query) || h.hostname().unwrap_or("").contains(query))
            .collect()
    }

    pub(crate) fn push_preamble_line(&mut self, line: String) {
        self.preamble.push(line);
    }

    pub(crate) fn push_host(&mut self, entry: HostEntry) {
        self.hosts.push(entry);
    }

    pub(crate) fn preamble_lines(&self) -> &[String] {
        &self.preamble
    }
}
