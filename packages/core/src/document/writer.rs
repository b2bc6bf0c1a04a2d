//! ConfigDocument to SSH config text
//!
//! Rewrites the full file: preamble verbatim, then each host block with
//! consistently indented directives. The output must stay valid input for
//! stock OpenSSH clients, which also read this file.

use super::{BodyLine, ConfigDocument};

const INDENT: &str = "    ";

/// Render a document to SSH config text
pub fn render(doc: &ConfigDocument) -> String {
    let mut out = String::new();

    for line in doc.preamble_lines() {
        out.push_str(line);
        out.push('\n');
    }

    for host in doc.hosts() {
        out.push_str("Host ");
        out.push_str(host.alias());
        out.push('\n');

        for line in host.lines() {
            match line {
                BodyLine::Directive { keyword, value } => {
                    out.push_str(INDENT);
                    out.push_str(display_keyword(keyword));
                    out.push(' ');
                    out.push_str(value);
                    out.push('\n');
                }
                BodyLine::Opaque(text) if text.is_empty() => out.push('\n'),
                BodyLine::Opaque(text) => {
                    out.push_str(INDENT);
                    out.push_str(text);
                    out.push('\n');
                }
            }
        }
    }

    out
}

/// Canonical display casing for directive keywords
///
/// Keywords outside this table are emitted in their stored lowercase form,
/// which OpenSSH treats the same.
pub fn display_keyword(keyword: &str) -> &str {
    match keyword {
        "hostname" => "HostName",
        "user" => "User",
        "port" => "Port",
        "identityfile" => "IdentityFile",
        "identitiesonly" => "IdentitiesOnly",
        "proxyjump" => "ProxyJump",
        "proxycommand" => "ProxyCommand",
        "forwardagent" => "ForwardAgent",
        "localforward" => "LocalForward",
        "remoteforward" => "RemoteForward",
        "dynamicforward" => "DynamicForward",
        "stricthostkeychecking" => "StrictHostKeyChecking",
        "userknownhostsfile" => "UserKnownHostsFile",
        "serveraliveinterval" => "ServerAliveInterval",
        "serveralivecountmax" => "ServerAliveCountMax",
        "connecttimeout" => "ConnectTimeout",
        "compression" => "Compression",
        "controlmaster" => "ControlMaster",
        "controlpath" => "ControlPath",
        "controlpersist" => "ControlPersist",
        "addkeystoagent" => "AddKeysToAgent",
        "preferredauthentications" => "PreferredAuthentications",
        "pubkeyauthentication" => "PubkeyAuthentication",
        "passwordauthentication" => "PasswordAuthentication",
        "loglevel" => "LogLevel",
        other => other,
    }
}
