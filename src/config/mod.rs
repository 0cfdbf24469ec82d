//! Configuration reading.
//!
//! Parses `config.ini` into a [`ConfigReader`] with typed accessors,
//! `DEFAULT` section inheritance and `%(name)s` interpolation.

mod error;
mod parser;
pub mod reader;

use indexmap::IndexMap;

pub use error::{ConfigError, ParseErrorKind};
pub use reader::ConfigReader;

/// Options of one section, in file order.
pub type Section = IndexMap<String, String>;

/// Every section of a configuration, in file order.
pub type Document = IndexMap<String, Section>;
