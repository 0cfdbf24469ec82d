//! Output renderers for `show`: terminal, INI, JSON, TOML.

pub mod ini;
pub mod json;
pub mod terminal;
pub mod toml;

use std::path::Path;

use crate::config::Document;

/// Trait for rendering a configuration document to an output format.
pub trait OutputRenderer {
    /// Render the document loaded from `path` to a string.
    fn render(&self, path: &Path, doc: &Document) -> String;
}
