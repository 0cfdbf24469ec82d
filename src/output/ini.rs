//! INI output renderer.
//!
//! Multi-line values are written as indented continuation lines so the
//! output parses back into the same document. Resolved documents have `%`
//! escaped as `%%` so re-reading them does not interpolate again.

use std::fmt::Write;
use std::path::Path;

use crate::config::Document;
use crate::output::OutputRenderer;

/// INI output renderer.
pub struct IniRenderer {
    /// Values are already interpolated.
    pub resolved: bool,
}

impl IniRenderer {
    fn escape<'a>(&self, line: &'a str) -> std::borrow::Cow<'a, str> {
        if self.resolved && line.contains('%') {
            line.replace('%', "%%").into()
        } else {
            line.into()
        }
    }
}

impl OutputRenderer for IniRenderer {
    fn render(&self, _path: &Path, doc: &Document) -> String {
        let mut output = String::new();
        for (i, (name, options)) in doc.iter().enumerate() {
            if i > 0 {
                output.push('\n');
            }
            let _ = writeln!(output, "[{name}]");
            for (key, value) in options {
                let mut lines = value.lines();
                let first = lines.next().unwrap_or_default();
                let _ = writeln!(output, "{key} = {}", self.escape(first));
                for line in lines {
                    let _ = writeln!(output, "    {}", self.escape(line));
                }
            }
        }
        output
    }
}
