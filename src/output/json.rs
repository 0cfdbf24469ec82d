//! JSON output renderer.
//!
//! Outputs `{"path": "...", "sections": {...}}` format.

use std::path::Path;

use serde::Serialize;

use crate::config::Document;
use crate::output::OutputRenderer;

#[derive(Serialize)]
struct JsonDocument<'a> {
    path: String,
    sections: &'a Document,
}

/// JSON output renderer.
pub struct JsonRenderer;

impl OutputRenderer for JsonRenderer {
    fn render(&self, path: &Path, doc: &Document) -> String {
        let output = JsonDocument {
            path: path.display().to_string(),
            sections: doc,
        };
        serde_json::to_string_pretty(&output).unwrap_or_else(|_| "{}".to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Section;

    #[test]
    fn render_json_keeps_section_order() {
        let mut doc = Document::new();
        doc.insert("zeta".into(), Section::from([("k".to_string(), "v".to_string())]));
        doc.insert("alpha".into(), Section::new());

        let output = JsonRenderer.render(Path::new("/app\\config.ini"), &doc);
        let parsed: serde_json::Value = serde_json::from_str(&output).unwrap();

        assert_eq!(parsed["path"], "/app\\config.ini");
        assert_eq!(parsed["sections"]["zeta"]["k"], "v");
        assert!(output.find("zeta").unwrap() < output.find("alpha").unwrap());
    }

    #[test]
    fn render_empty_json() {
        let output = JsonRenderer.render(Path::new("config.ini"), &Document::new());
        let parsed: serde_json::Value = serde_json::from_str(&output).unwrap();
        assert!(parsed["sections"].as_object().unwrap().is_empty());
    }
}
