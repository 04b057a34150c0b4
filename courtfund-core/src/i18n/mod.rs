use crate::error::Result;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::Path;

/// Fallback language for unknown language codes.
pub const DEFAULT_LANGUAGE: &str = "en";

const BUILTIN_LOCALES: &str = include_str!("locales.json");

/// Per-language string tables, loaded once at startup and passed to whoever
/// renders text. No module-level globals.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Catalog {
    tables: HashMap<String, HashMap<String, String>>,
}

impl Catalog {
    /// The locale table shipped with the crate.
    pub fn builtin() -> Self {
        serde_json::from_str(BUILTIN_LOCALES).expect("embedded locale table is valid JSON")
    }

    /// Load a locale table from a JSON file with the same shape as the
    /// embedded one: `{ "en": { "key": "string", ... }, ... }`.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let raw = std::fs::read_to_string(path)?;
        Ok(serde_json::from_str(&raw)?)
    }

    /// Resolve `key` in `language`.
    ///
    /// Unknown languages fall back to English; a key missing from the
    /// resolved table comes back verbatim as a last resort.
    pub fn lookup<'a>(&'a self, language: &str, key: &'a str) -> &'a str {
        self.tables
            .get(language)
            .or_else(|| self.tables.get(DEFAULT_LANGUAGE))
            .and_then(|table| table.get(key))
            .map(String::as_str)
            .unwrap_or(key)
    }

    /// Available language codes, sorted.
    pub fn languages(&self) -> Vec<&str> {
        let mut codes: Vec<&str> = self.tables.keys().map(String::as_str).collect();
        codes.sort_unstable();
        codes
    }

    pub fn has_language(&self, language: &str) -> bool {
        self.tables.contains_key(language)
    }
}
