//! Label translation used by the form renderers.

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use thiserror::Error;

/// Localized label lookup.
pub trait Translator: Send + Sync {
    /// Translate `key`. Unknown keys come back unchanged.
    fn trans(&self, key: &str) -> String;
}

/// Translator that echoes the key. Used when no catalog is configured.
#[derive(Debug, Clone, Copy, Default)]
pub struct KeyTranslator;

impl Translator for KeyTranslator {
    fn trans(&self, key: &str) -> String {
        key.to_string()
    }
}

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("failed to read catalog {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed catalog: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Flat `{ "key": "text" }` translation catalog.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Catalog {
    entries: HashMap<String, String>,
}

impl Catalog {
    pub fn from_json_str(json: &str) -> Result<Self, CatalogError> {
        let entries: HashMap<String, String> = serde_json::from_str(json)?;
        Ok(Self { entries })
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, CatalogError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|source| CatalogError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let catalog = Self::from_json_str(&json)?;
        tracing::info!(
            path = %path.display(),
            entries = catalog.len(),
            "translation catalog loaded"
        );
        Ok(catalog)
    }

    pub fn insert(&mut self, key: impl Into<String>, text: impl Into<String>) {
        self.entries.insert(key.into(), text.into());
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Translator for Catalog {
    fn trans(&self, key: &str) -> String {
        match self.entries.get(key) {
            Some(text) => text.clone(),
            None => key.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn catalog_translates_known_keys_and_echoes_unknown() {
        let catalog = Catalog::from_json_str(r#"{"save":"Guardar","delete":"Eliminar"}"#).unwrap();
        assert_eq!(catalog.trans("save"), "Guardar");
        assert_eq!(catalog.trans("taxes"), "taxes");
        assert_eq!(catalog.len(), 2);
    }

    #[test]
    fn catalog_rejects_non_string_values() {
        let err = Catalog::from_json_str(r#"{"save": 1}"#).unwrap_err();
        assert!(matches!(err, CatalogError::Parse(_)));
    }

    #[test]
    fn load_reports_missing_file_path() {
        let err = Catalog::load("/definitely/not/here.json").unwrap_err();
        match err {
            CatalogError::Io { path, .. } => assert!(path.ends_with("here.json")),
            other => panic!("expected Io error, got {other:?}"),
        }
    }

    #[test]
    fn key_translator_echoes() {
        assert_eq!(KeyTranslator.trans("global-dto"), "global-dto");
    }
}
