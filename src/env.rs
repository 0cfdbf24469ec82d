//! Reads `AGROMANAGEMENT_*` variables. Tests substitute a fixed map via
//! [`Env::mock`] instead of mutating the process environment.

use std::collections::HashMap;

#[derive(Clone, Debug)]
pub struct Env {
    vars: Option<HashMap<String, String>>,
}

impl Env {
    /// The process environment.
    pub fn real() -> Self {
        Self { vars: None }
    }

    #[cfg(test)]
    pub fn mock(vars: impl IntoIterator<Item = (impl Into<String>, impl Into<String>)>) -> Self {
        let vars = vars.into_iter().map(|(k, v)| (k.into(), v.into())).collect();
        Self { vars: Some(vars) }
    }

    pub fn var(&self, name: &str) -> Option<String> {
        match &self.vars {
            Some(map) => map.get(name).cloned(),
            None => std::env::var(name).ok(),
        }
    }

    /// Trimmed value of `name`; blank counts as unset.
    pub fn non_empty(&self, name: &str) -> Option<String> {
        self.var(name)
            .map(|v| v.trim().to_string())
            .filter(|v| !v.is_empty())
    }
}
