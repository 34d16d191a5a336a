//! Localized descriptions from a Java-style `.properties` bundle.
//!
//! Supported syntax:
//! - `key=value`, `key: value` and `key value`
//! - `#` and `!` comment lines, blank lines
//! - trailing-backslash line continuation
//! - `\t`, `\n`, `\r`, `\f`, `\uXXXX` and escaped separators

use std::collections::HashMap;
use std::fs;
use std::path::Path;
use zapgen_core::{Error, MessageCatalog, Result};

const fn is_blank(c: char) -> bool {
    matches!(c, ' ' | '\t' | '\x0c')
}

/// Message catalog parsed from a `.properties` file.
///
/// # Examples
///
/// ```
/// use zapgen_core::MessageCatalog;
/// use zapgen_registry::PropertiesCatalog;
///
/// let catalog = PropertiesCatalog::parse(
///     "# core\ncore.api.view.alerts = Gets the alerts raised by ZAP\n",
/// );
/// assert_eq!(
///     catalog.message("core.api.view.alerts"),
///     Some("Gets the alerts raised by ZAP")
/// );
/// assert_eq!(catalog.message("core.api.view.missing"), None);
/// ```
#[derive(Debug, Clone, Default)]
pub struct PropertiesCatalog {
    entries: HashMap<String, String>,
}

impl PropertiesCatalog {
    /// Parses catalog entries from `.properties` text.
    ///
    /// Later duplicates replace earlier ones.
    #[must_use]
    pub fn parse(content: &str) -> Self {
        let mut entries = HashMap::new();
        let mut lines = content.lines();

        while let Some(raw) = lines.next() {
            let line = raw.trim_start_matches(is_blank);
            if line.is_empty() || line.starts_with('#') || line.starts_with('!') {
                continue;
            }

            let mut logical = line.to_string();
            while ends_with_continuation(&logical) {
                logical.pop();
                match lines.next() {
                    Some(next) => logical.push_str(next.trim_start_matches(is_blank)),
                    None => break,
                }
            }

            let (key, value) = split_entry(&logical);
            entries.insert(unescape(key), unescape(value));
        }

        Self { entries }
    }

    /// Reads and parses a `.properties` file.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Io`] if the file cannot be read.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|source| Error::Io {
            path: path.display().to_string(),
            source,
        })?;
        let catalog = Self::parse(&content);

        tracing::info!("Loaded {} messages from {}", catalog.len(), path.display());
        Ok(catalog)
    }

    /// Adds or replaces one entry.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.entries.insert(key.into(), value.into());
    }

    /// Number of entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if the catalog has no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl MessageCatalog for PropertiesCatalog {
    fn message(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }
}

/// An odd number of trailing backslashes continues the line.
fn ends_with_continuation(line: &str) -> bool {
    line.chars().rev().take_while(|c| *c == '\\').count() % 2 == 1
}

/// Splits a logical line at the first unescaped separator.
fn split_entry(line: &str) -> (&str, &str) {
    let mut escaped = false;
    for (idx, ch) in line.char_indices() {
        if escaped {
            escaped = false;
            continue;
        }
        match ch {
            '\\' => escaped = true,
            '=' | ':' | ' ' | '\t' | '\x0c' => {
                let key = &line[..idx];
                let mut rest = line[idx..].trim_start_matches(is_blank);
                if let Some(stripped) = rest.strip_prefix(['=', ':']) {
                    rest = stripped.trim_start_matches(is_blank);
                }
                return (key, rest);
            }
            _ => {}
        }
    }
    (line, "")
}

fn unescape(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    let mut chars = raw.chars();

    while let Some(ch) = chars.next() {
        if ch != '\\' {
            out.push(ch);
            continue;
        }
        match chars.next() {
            Some('t') => out.push('\t'),
            Some('n') => out.push('\n'),
            Some('r') => out.push('\r'),
            Some('f') => out.push('\x0c'),
            Some('u') => {
                let hex: String = chars.by_ref().take(4).collect();
                let decoded = match u32::from_str_radix(&hex, 16) {
                    Ok(high @ 0xD800..=0xDBFF) => low_surrogate(&mut chars).and_then(|low| {
                        char::from_u32(0x10000 + ((high - 0xD800) << 10) + (low - 0xDC00))
                    }),
                    Ok(unit) => char::from_u32(unit),
                    Err(_) => None,
                };
                match decoded {
                    Some(decoded) => out.push(decoded),
                    None => {
                        out.push_str("\\u");
                        out.push_str(&hex);
                    }
                }
            }
            Some(other) => out.push(other),
            None => {}
        }
    }

    out
}

/// Consumes a `\uXXXX` low surrogate escape if one comes next.
fn low_surrogate(chars: &mut std::str::Chars<'_>) -> Option<u32> {
    let mut ahead = chars.clone();
    if ahead.next() != Some('\\') || ahead.next() != Some('u') {
        return None;
    }
    let hex: String = ahead.by_ref().take(4).collect();
    match u32::from_str_radix(&hex, 16) {
        Ok(low @ 0xDC00..=0xDFFF) => {
            *chars = ahead;
            Some(low)
        }
        _ => None,
    }
}
