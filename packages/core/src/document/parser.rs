//! SSH config text to ConfigDocument
//!
//! Best-effort parsing of a semi-free-form format: anything that does not
//! split into a keyword/value pair is preserved as opaque content instead
//! of being rejected, so a later save does not lose it.

use super::{BodyLine, ConfigDocument, HostEntry};

/// Parse SSH config content into a document
pub fn parse(content: &str) -> ConfigDocument {
    let mut doc = ConfigDocument::new();
    let mut current: Option<HostEntry> = None;

    for raw in content.lines() {
        let line = raw.trim();

        // Comments and blank lines travel with the block they sit in
        if line.is_empty() || line.starts_with('#') {
            match current.as_mut() {
                Some(host) => host.push_line(BodyLine::Opaque(line.to_string())),
                None => doc.push_preamble_line(raw.to_string()),
            }
            continue;
        }

        let Some((keyword, value)) = split_directive(line) else {
            // No keyword/value split; keep the line rather than drop it
            match current.as_mut() {
                Some(host) => host.push_line(BodyLine::Opaque(line.to_string())),
                None => doc.push_preamble_line(raw.to_string()),
            }
            continue;
        };

        if keyword == "host" {
            if let Some(done) = current.take() {
                doc.push_host(done);
            }
            current = Some(HostEntry::new(value));
            continue;
        }

        match current.as_mut() {
            Some(host) => host.push_line(BodyLine::Directive { keyword, value }),
            // Global directives before any Host block stay in the preamble
            None => doc.push_preamble_line(raw.to_string()),
        }
    }

    if let Some(done) = current {
        doc.push_host(done);
    }

    doc
}

/// Split a config line into lowercase keyword and trimmed value
///
/// Accepts both `Keyword value` and `Keyword=value` syntax. Returns None
/// when the line has no value part.
fn split_directive(line: &str) -> Option<(String, String)> {
    let split_at = line.find(|c: char| c.is_whitespace() || c == '=')?;
    let keyword = &line[..split_at];
    let value = line[split_at..]
        .trim_start_matches(|c: char| c.is_whitespace() || c == '=')
        .trim_end();

    if keyword.is_empty() || value.is_empty() {
        return None;
    }

    Some((keyword.to_ascii_lowercase(), value.to_string()))
}
