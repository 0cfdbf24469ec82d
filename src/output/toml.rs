//! TOML output renderer: one table per section.

use std::path::Path;

use crate::config::Document;
use crate::output::OutputRenderer;

/// TOML output renderer.
pub struct TomlRenderer;

impl OutputRenderer for TomlRenderer {
    fn render(&self, _path: &Path, doc: &Document) -> String {
        toml::to_string(doc).unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Section;

    #[test]
    fn render_toml_tables() {
        let mut doc = Document::new();
        doc.insert(
            "model".into(),
            Section::from([
                ("start_year".to_string(), "2020".to_string()),
                ("crop list".to_string(), "wheat, oats".to_string()),
            ]),
        );

        let output = TomlRenderer.render(Path::new("config.ini"), &doc);
        let parsed: toml::Table = output.parse().unwrap();

        let model = parsed["model"].as_table().unwrap();
        assert_eq!(model["start_year"].as_str(), Some("2020"));
        assert_eq!(model["crop list"].as_str(), Some("wheat, oats"));
    }
}
