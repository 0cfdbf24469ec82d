//! The application configuration handle.
//!
//! [`ConfigReader`] owns the parsed contents of `config.ini` and answers
//! lookups by section and option name. Options of the `DEFAULT` section are
//! visible through every other section unless overridden there.

use std::path::{Path, PathBuf};
use std::str::FromStr;

use indexmap::IndexMap;

use super::error::ConfigError;
use super::parser;
use super::{Document, Section};
use crate::constants::{DEFAULT_SECTION, MAX_INTERPOLATION_DEPTH};

/// A loaded, read-only view over an INI configuration file.
#[derive(Debug, Clone)]
pub struct ConfigReader {
    path: PathBuf,
    defaults: Section,
    sections: IndexMap<String, Section>,
}

impl ConfigReader {
    /// Read and parse the file at `path`.
    pub fn open(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::ReadFile {
            path: path.to_path_buf(),
            source: e,
        })?;
        Self::from_str_with_path(&content, path)
    }

    /// Parse in-memory INI text, recording `path` as its origin.
    pub fn from_str_with_path(text: &str, path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let parsed = parser::parse(text, path)?;
        Ok(Self {
            path: path.to_path_buf(),
            defaults: parsed.defaults,
            sections: parsed.sections,
        })
    }

    /// Path the configuration was loaded from.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Section names in file order, excluding `DEFAULT`.
    pub fn sections(&self) -> impl Iterator<Item = &str> {
        self.sections.keys().map(String::as_str)
    }

    pub fn has_section(&self, section: &str) -> bool {
        self.sections.contains_key(section)
    }

    /// Whether `key` resolves in `section`, either directly or via `DEFAULT`.
    pub fn has_option(&self, section: &str, key: &str) -> bool {
        self.get_raw(section, key).is_ok()
    }

    /// Options declared directly in `section`, without inherited defaults.
    pub fn section(&self, section: &str) -> Option<&Section> {
        if section == DEFAULT_SECTION {
            return Some(&self.defaults);
        }
        self.sections.get(section)
    }

    /// Options of the `DEFAULT` section.
    pub fn defaults(&self) -> &Section {
        &self.defaults
    }

    /// Option names visible in `section`: its own first, then inherited ones.
    pub fn options(&self, section: &str) -> Result<Vec<&str>, ConfigError> {
        let own = self.lookup_section(section)?;
        let mut names: Vec<&str> = own.keys().map(String::as_str).collect();
        names.extend(
            self.defaults
                .keys()
                .filter(|k| !own.contains_key(*k))
                .map(String::as_str),
        );
        Ok(names)
    }

    /// Uninterpolated value of `key` in `section`.
    pub fn get_raw(&self, section: &str, key: &str) -> Result<&str, ConfigError> {
        let key = key.to_lowercase();
        let own = self.lookup_section(section)?;
        own.get(&key)
            .or_else(|| self.defaults.get(&key))
            .map(String::as_str)
            .ok_or_else(|| ConfigError::NoOption {
                section: section.to_string(),
                key,
            })
    }

    /// Value of `key` in `section` with `%(name)s` references expanded.
    pub fn get(&self, section: &str, key: &str) -> Result<String, ConfigError> {
        let raw = self.get_raw(section, key)?;
        let mut out = String::with_capacity(raw.len());
        self.interpolate(section, key, raw, 1, &mut out)?;
        Ok(out)
    }

    /// Like [`get`](Self::get), but returns `default` when the section or
    /// option does not exist. Other errors still propagate.
    pub fn get_or(&self, section: &str, key: &str, default: &str) -> Result<String, ConfigError> {
        match self.get(section, key) {
            Err(e) if e.is_missing() => Ok(default.to_string()),
            other => other,
        }
    }

    /// Parse the value of `key` with [`FromStr`].
    ///
    /// `expected` names the target type in the error message.
    pub fn get_parsed<T: FromStr>(
        &self,
        section: &str,
        key: &str,
        expected: &'static str,
    ) -> Result<T, ConfigError> {
        let value = self.get(section, key)?;
        value.trim().parse().map_err(|_| ConfigError::InvalidValue {
            section: section.to_string(),
            key: key.to_lowercase(),
            value,
            expected,
        })
    }

    pub fn get_int(&self, section: &str, key: &str) -> Result<i64, ConfigError> {
        self.get_parsed(section, key, "an integer")
    }

    pub fn get_float(&self, section: &str, key: &str) -> Result<f64, ConfigError> {
        self.get_parsed(section, key, "a number")
    }

    /// Boolean value: `1/yes/true/on` or `0/no/false/off`, any case.
    pub fn get_bool(&self, section: &str, key: &str) -> Result<bool, ConfigError> {
        let value = self.get(section, key)?;
        match value.trim().to_lowercase().as_str() {
            "1" | "yes" | "true" | "on" => Ok(true),
            "0" | "no" | "false" | "off" => Ok(false),
            _ => Err(ConfigError::InvalidValue {
                section: section.to_string(),
                key: key.to_lowercase(),
                value,
                expected: "a boolean",
            }),
        }
    }

    /// Comma- or newline-separated list, trimmed, with empty items dropped.
    pub fn get_list(&self, section: &str, key: &str) -> Result<Vec<String>, ConfigError> {
        let value = self.get(section, key)?;
        Ok(value
            .split([',', '\n'])
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(str::to_string)
            .collect())
    }

    /// Interpolated `(name, value)` pairs visible in `section`.
    pub fn items(&self, section: &str) -> Result<Vec<(String, String)>, ConfigError> {
        self.options(section)?
            .into_iter()
            .map(|key| Ok((key.to_string(), self.get(section, key)?)))
            .collect()
    }

    /// The whole configuration as an ordered map, `DEFAULT` first when
    /// non-empty. With `resolve` set, values are interpolated and inherited
    /// defaults are folded into each section.
    pub fn document(&self, resolve: bool) -> Result<Document, ConfigError> {
        let mut doc = Document::new();
        if !self.defaults.is_empty() {
            let defaults: Section = if resolve {
                self.items(DEFAULT_SECTION)?.into_iter().collect()
            } else {
                self.defaults.clone()
            };
            doc.insert(DEFAULT_SECTION.to_string(), defaults);
        }
        for (name, own) in &self.sections {
            let section: Section = if resolve {
                self.items(name)?.into_iter().collect()
            } else {
                own.clone()
            };
            doc.insert(name.clone(), section);
        }
        Ok(doc)
    }

    fn lookup_section(&self, section: &str) -> Result<&Section, ConfigError> {
        self.section(section)
            .ok_or_else(|| ConfigError::NoSection(section.to_string()))
    }

    fn interpolate(
        &self,
        section: &str,
        key: &str,
        value: &str,
        depth: usize,
        out: &mut String,
    ) -> Result<(), ConfigError> {
        if depth > MAX_INTERPOLATION_DEPTH {
            return Err(ConfigError::InterpolationDepth {
                section: section.to_string(),
                key: key.to_lowercase(),
                depth: MAX_INTERPOLATION_DEPTH,
            });
        }
        let syntax = |detail: &'static str| ConfigError::InterpolationSyntax {
            section: section.to_string(),
            key: key.to_lowercase(),
            detail,
        };

        let mut rest = value;
        while let Some(pos) = rest.find('%') {
            out.push_str(&rest[..pos]);
            let after = &rest[pos + 1..];
            if let Some(tail) = after.strip_prefix('%') {
                out.push('%');
                rest = tail;
            } else if let Some(body) = after.strip_prefix('(') {
                let end = body
                    .find(')')
                    .ok_or_else(|| syntax("unterminated %(name)s reference"))?;
                if !body[end + 1..].starts_with('s') {
                    return Err(syntax("%(name) must be followed by 's'"));
                }
                let reference = body[..end].to_lowercase();
                let target = self.get_raw(section, &reference).map_err(|_| {
                    ConfigError::InterpolationMissing {
                        section: section.to_string(),
                        key: key.to_lowercase(),
                        reference: reference.clone(),
                    }
                })?;
                if target.contains('%') {
                    self.interpolate(section, key, target, depth + 1, out)?;
                } else {
                    out.push_str(target);
                }
                rest = &body[end + 2..];
            } else {
                return Err(syntax("'%' must be followed by '%' or '('"));
            }
        }
        out.push_str(rest);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    const SAMPLE: &str = r#"
[DEFAULT]
base_dir = /srv/agro
threads = 4

[paths]
data = %(base_dir)s/data
outputs = %(data)s/outputs
discount = 5%%

[model]
Start_Year = 2020
end_year: 2050
discount_rate = 0.035
use_cache = Yes
crops = wheat, barley,
    oats
threads = 8
"#;

    fn sample() -> ConfigReader {
        ConfigReader::from_str_with_path(SAMPLE, "/srv/agro\\config.ini").unwrap()
    }

    #[test]
    fn sections_exclude_default() {
        let config = sample();
        assert_eq!(config.sections().collect::<Vec<_>>(), vec!["paths", "model"]);
        assert!(config.has_section("model"));
        assert!(!config.has_section("DEFAULT"));
    }

    #[test]
    fn path_is_recorded() {
        assert_eq!(sample().path(), Path::new("/srv/agro\\config.ini"));
    }

    #[test]
    fn lookups_are_case_insensitive_on_keys() {
        let config = sample();
        assert_eq!(config.get("model", "START_YEAR").unwrap(), "2020");
        assert!(config.has_option("model", "Start_Year"));
    }

    #[test]
    fn defaults_are_inherited_and_overridable() {
        let config = sample();
        assert_eq!(config.get("paths", "threads").unwrap(), "4");
        assert_eq!(config.get("model", "threads").unwrap(), "8");
        assert_eq!(config.get("DEFAULT", "base_dir").unwrap(), "/srv/agro");
        assert_eq!(config.defaults()["threads"], "4");
        assert!(!config.section("paths").unwrap().contains_key("threads"));
    }

    #[test]
    fn options_lists_own_then_inherited() {
        let config = sample();
        assert_eq!(
            config.options("paths").unwrap(),
            vec!["data", "outputs", "discount", "base_dir", "threads"]
        );
    }

    #[test]
    fn interpolation_expands_nested_references() {
        let config = sample();
        assert_eq!(config.get("paths", "outputs").unwrap(), "/srv/agro/data/outputs");
        assert_eq!(config.get_raw("paths", "outputs").unwrap(), "%(data)s/outputs");
    }

    #[test]
    fn double_percent_is_literal() {
        assert_eq!(sample().get("paths", "discount").unwrap(), "5%");
    }

    #[test]
    fn typed_accessors() {
        let config = sample();
        assert_eq!(config.get_int("model", "end_year").unwrap(), 2050);
        assert_eq!(config.get_float("model", "discount_rate").unwrap(), 0.035);
        assert!(config.get_bool("model", "use_cache").unwrap());
        assert_eq!(
            config.get_list("model", "crops").unwrap(),
            vec!["wheat", "barley", "oats"]
        );
        let year: u16 = config.get_parsed("model", "start_year", "a year").unwrap();
        assert_eq!(year, 2020);
    }

    #[test]
    fn invalid_typed_value_reports_expectation() {
        let err = sample().get_int("paths", "data").unwrap_err();
        assert!(matches!(err, ConfigError::InvalidValue { expected: "an integer", .. }));
        let err = sample().get_bool("model", "end_year").unwrap_err();
        assert!(err.to_string().contains("a boolean"));
    }

    #[test]
    fn missing_section_and_option() {
        let config = sample();
        assert!(matches!(
            config.get("climate", "x").unwrap_err(),
            ConfigError::NoSection(s) if s == "climate"
        ));
        assert!(matches!(
            config.get("model", "nope").unwrap_err(),
            ConfigError::NoOption { .. }
        ));
    }

    #[test]
    fn get_or_falls_back_only_when_missing() {
        let config = sample();
        assert_eq!(config.get_or("model", "nope", "x").unwrap(), "x");
        assert_eq!(config.get_or("climate", "nope", "y").unwrap(), "y");
        assert_eq!(config.get_or("model", "end_year", "x").unwrap(), "2050");
    }

    #[test]
    fn get_or_propagates_interpolation_errors() {
        let config = ConfigReader::from_str_with_path("[a]\nx = %(missing)s\n", "c.ini").unwrap();
        assert!(matches!(
            config.get_or("a", "x", "fallback").unwrap_err(),
            ConfigError::InterpolationMissing { .. }
        ));
    }

    #[test]
    fn self_reference_hits_depth_limit() {
        let config = ConfigReader::from_str_with_path("[a]\nx = %(x)s\n", "c.ini").unwrap();
        assert!(matches!(
            config.get("a", "x").unwrap_err(),
            ConfigError::InterpolationDepth { depth: 10, .. }
        ));
    }

    #[test]
    fn malformed_interpolation() {
        let config =
            ConfigReader::from_str_with_path("[a]\nx = 50% off\ny = %(open\n", "c.ini").unwrap();
        assert!(matches!(
            config.get("a", "x").unwrap_err(),
            ConfigError::InterpolationSyntax { .. }
        ));
        assert!(matches!(
            config.get("a", "y").unwrap_err(),
            ConfigError::InterpolationSyntax { .. }
        ));
        // Raw access still works.
        assert_eq!(config.get_raw("a", "x").unwrap(), "50% off");
    }

    #[test]
    fn reference_without_s_does_not_swallow_the_next_one() {
        let config =
            ConfigReader::from_str_with_path("[a]\nb = 1\nx = %(a)x %(b)s\n", "c.ini").unwrap();
        assert!(matches!(
            config.get("a", "x").unwrap_err(),
            ConfigError::InterpolationSyntax { .. }
        ));
    }

    #[test]
    fn items_are_interpolated() {
        let items = sample().items("paths").unwrap();
        assert_eq!(items[0], ("data".to_string(), "/srv/agro/data".to_string()));
        assert_eq!(items.len(), 5);
    }

    #[test]
    fn document_raw_and_resolved() {
        let config = sample();
        let raw = config.document(false).unwrap();
        assert_eq!(raw.keys().collect::<Vec<_>>(), vec!["DEFAULT", "paths", "model"]);
        assert_eq!(raw["paths"]["data"], "%(base_dir)s/data");
        assert!(!raw["paths"].contains_key("threads"));

        let resolved = config.document(true).unwrap();
        assert_eq!(resolved["paths"]["data"], "/srv/agro/data");
        assert_eq!(resolved["paths"]["threads"], "4");
    }

    #[test]
    fn open_missing_file_is_read_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = ConfigReader::open(dir.path().join("config.ini")).unwrap_err();
        assert!(matches!(err, ConfigError::ReadFile { .. }));
        assert!(err.to_string().contains("read"));
    }

    #[test]
    fn open_reads_file_from_disk() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.ini");
        std::fs::write(&path, "[model]\nyears = 30\n").unwrap();

        let config = ConfigReader::open(&path).unwrap();
        assert_eq!(config.path(), path);
        assert_eq!(config.get_int("model", "years").unwrap(), 30);
    }
}
