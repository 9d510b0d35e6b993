//! Remembered inputs between runs.
//!
//! The last key, plaintext and ciphertext are kept in a small TOML file so
//! a later run can pick them up when the command line leaves them out.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Field store file name inside the user config directory.
const FILE_NAME: &str = "fields.toml";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Key,
    Plaintext,
    Ciphertext,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
struct Fields {
    key: Option<String>,
    plaintext: Option<String>,
    ciphertext: Option<String>,
}

impl Fields {
    fn value(&self, field: Field) -> Option<&String> {
        match field {
            Field::Key => self.key.as_ref(),
            Field::Plaintext => self.plaintext.as_ref(),
            Field::Ciphertext => self.ciphertext.as_ref(),
        }
    }

    fn slot(&mut self, field: Field) -> &mut Option<String> {
        match field {
            Field::Key => &mut self.key,
            Field::Plaintext => &mut self.plaintext,
            Field::Ciphertext => &mut self.ciphertext,
        }
    }
}

/// TOML-backed store for the last used inputs.
///
/// A disabled store answers nothing and never touches the disk.
#[derive(Debug)]
pub struct FieldStore {
    path: PathBuf,
    enabled: bool,
    fields: Fields,
}

impl FieldStore {
    /// Opens the store at `path`. A missing file is an empty store.
    pub fn open(path: PathBuf, enabled: bool) -> Result<Self> {
        let fields = if enabled && path.exists() {
            let contents = std::fs::read_to_string(&path)
                .with_context(|| format!("reading field store {}", path.display()))?;
            toml::from_str(&contents)
                .with_context(|| format!("parsing field store {}", path.display()))?
        } else {
            Fields::default()
        };
        Ok(Self {
            path,
            enabled,
            fields,
        })
    }

    pub fn get(&self, field: Field) -> Option<String> {
        if !self.enabled {
            return None;
        }
        self.fields.value(field).cloned()
    }

    pub fn set(&mut self, field: Field, value: &str) {
        *self.fields.slot(field) = Some(value.to_string());
    }

    /// Writes the store back to disk, creating the parent directory if needed.
    pub fn save(&self) -> Result<()> {
        if !self.enabled {
            return Ok(());
        }
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("creating {}", parent.display()))?;
        }
        let contents = toml::to_string(&self.fields).context("serializing field store")?;
        std::fs::write(&self.path, contents)
            .with_context(|| format!("writing field store {}", self.path.display()))?;
        tracing::debug!(path = %self.path.display(), "saved field store");
        Ok(())
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

/// Default field store location: `$XDG_CONFIG_HOME/pontifex/fields.toml`,
/// then `$HOME/.config/pontifex/fields.toml`, then the working directory.
pub fn default_path() -> PathBuf {
    let base = std::env::var_os("XDG_CONFIG_HOME")
        .map(PathBuf::from)
        .or_else(|| std::env::var_os("HOME").map(|home| PathBuf::from(home).join(".config")));
    match base {
        Some(dir) => dir.join("pontifex").join(FILE_NAME),
        None => PathBuf::from(FILE_NAME),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_file_is_empty() {
        let dir = tempfile::tempdir().unwrap();
        let store = FieldStore::open(dir.path().join("fields.toml"), true).unwrap();
        assert_eq!(store.get(Field::Key), None);
        assert_eq!(store.get(Field::Plaintext), None);
    }

    #[test]
    fn test_save_and_reopen() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("fields.toml");

        let mut store = FieldStore::open(path.clone(), true).unwrap();
        store.set(Field::Key, "CRYPTONOMICON");
        store.set(Field::Ciphertext, "KIRAK SFJAN");
        store.save().unwrap();

        let reopened = FieldStore::open(path, true).unwrap();
        assert_eq!(reopened.get(Field::Key).as_deref(), Some("CRYPTONOMICON"));
        assert_eq!(reopened.get(Field::Ciphertext).as_deref(), Some("KIRAK SFJAN"));
        assert_eq!(reopened.get(Field::Plaintext), None);
    }

    #[test]
    fn test_disabled_store_ignores_disk() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("fields.toml");
        std::fs::write(&path, "key = \"SECRET\"\n").unwrap();

        let mut store = FieldStore::open(path.clone(), false).unwrap();
        assert_eq!(store.get(Field::Key), None);
        store.set(Field::Key, "OTHER");
        store.save().unwrap();
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "key = \"SECRET\"\n");
    }

    #[test]
    fn test_corrupt_file_is_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("fields.toml");
        std::fs::write(&path, "key = ").unwrap();
        assert!(FieldStore::open(path, true).is_err());
    }
}
