//! Terminal renderer: colored sections with aligned keys.

use std::path::Path;

use colored::Colorize;

use crate::config::Document;
use crate::output::OutputRenderer;

/// Terminal output renderer with colored text.
pub struct TerminalRenderer;

impl OutputRenderer for TerminalRenderer {
    fn render(&self, path: &Path, doc: &Document) -> String {
        let mut output = format!("  {} {}\n", "config:".dimmed(), path.display());

        if doc.is_empty() {
            output.push_str(&format!("{}", "  (no sections)\n".yellow()));
            return output;
        }

        for (name, options) in doc {
            output.push('\n');
            output.push_str(&format!("  {}\n", format!("[{name}]").cyan().bold()));

            let width = options.keys().map(|k| k.len()).max().unwrap_or(0);
            for (key, value) in options {
                let value = value.replace('\n', &format!("\n    {:width$}   ", ""));
                output.push_str(&format!("    {:width$} = {}\n", key.bold(), value));
            }
        }

        output
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Section;

    #[test]
    fn render_lists_sections_and_keys() {
        colored::control::set_override(false);
        let mut doc = Document::new();
        doc.insert(
            "model".into(),
            Section::from([
                ("years".to_string(), "30".to_string()),
                ("scenario".to_string(), "rcp60".to_string()),
            ]),
        );

        let output = TerminalRenderer.render(Path::new("/app\\config.ini"), &doc);
        assert!(output.contains("/app\\config.ini"));
        assert!(output.contains("[model]"));
        assert!(output.contains("years    = 30"));
        assert!(output.contains("scenario = rcp60"));
    }

    #[test]
    fn render_empty() {
        colored::control::set_override(false);
        let output = TerminalRenderer.render(Path::new("config.ini"), &Document::new());
        assert!(output.contains("no sections"));
    }
}
