//! Line-oriented INI parser.
//!
//! Dialect:
//! - `[section]` headers (text after the closing `]` is ignored),
//!   `key = value` or `key: value` options
//! - full-line comments starting with `#` or `;`
//! - lines indented deeper than their key line continue its value
//! - option names are case-insensitive and stored lowercased
//! - duplicate sections or options are rejected

use std::path::Path;

use indexmap::IndexMap;
use indexmap::map::Entry;

use super::Section;
use super::error::{ConfigError, ParseErrorKind};
use crate::constants::DEFAULT_SECTION;

/// Result of parsing a whole file: the `DEFAULT` section and every other
/// section in file order.
#[derive(Debug, Default)]
pub(crate) struct ParsedIni {
    pub defaults: Section,
    pub sections: IndexMap<String, Section>,
}

pub(crate) fn parse(text: &str, path: &Path) -> Result<ParsedIni, ConfigError> {
    let fail = |line: usize, kind: ParseErrorKind| ConfigError::Parse {
        path: path.to_path_buf(),
        line,
        kind,
    };

    let mut sections: IndexMap<String, Section> = IndexMap::new();
    let mut current: Option<String> = None;
    // Key of the value being built and the indent of its line.
    let mut last_key: Option<(String, usize)> = None;

    for (idx, raw) in text.lines().enumerate() {
        let line_no = idx + 1;
        let trimmed = raw.trim();
        let indent = raw.len() - raw.trim_start().len();

        if trimmed.is_empty() {
            last_key = None;
            continue;
        }
        if trimmed.starts_with('#') || trimmed.starts_with(';') {
            continue;
        }

        // Continuation of the previous value
        if let (Some(section), Some((key, key_indent))) = (&current, &last_key)
            && indent > *key_indent
            && let Some(value) = sections.get_mut(section).and_then(|s| s.get_mut(key))
        {
            if !value.is_empty() {
                value.push('\n');
            }
            value.push_str(trimmed);
            continue;
        }

        if trimmed.starts_with('[')
            && let Some(end) = trimmed.rfind(']')
        {
            let name = trimmed[1..end].trim();
            if name.is_empty() {
                return Err(fail(line_no, ParseErrorKind::EmptySectionName));
            }
            if sections.contains_key(name) {
                return Err(fail(line_no, ParseErrorKind::DuplicateSection(name.to_string())));
            }
            sections.insert(name.to_string(), Section::new());
            current = Some(name.to_string());
            last_key = None;
            continue;
        }

        let Some(section) = &current else {
            return Err(fail(line_no, ParseErrorKind::MissingSectionHeader));
        };

        let Some(split) = trimmed.find(['=', ':']) else {
            return Err(fail(line_no, ParseErrorKind::MissingDelimiter(trimmed.to_string())));
        };
        let key = trimmed[..split].trim().to_lowercase();
        let value = trimmed[split + 1..].trim().to_string();
        if key.is_empty() {
            return Err(fail(line_no, ParseErrorKind::EmptyKey));
        }

        let options = sections.entry(section.clone()).or_default();
        match options.entry(key.clone()) {
            Entry::Occupied(_) => {
                return Err(fail(
                    line_no,
                    ParseErrorKind::DuplicateOption {
                        section: section.clone(),
                        key,
                    },
                ));
            }
            Entry::Vacant(slot) => {
                slot.insert(value);
            }
        }
        last_key = Some((key, indent));
    }

    let defaults = sections.shift_remove(DEFAULT_SECTION).unwrap_or_default();
    Ok(ParsedIni { defaults, sections })
}
