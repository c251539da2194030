//! Translation catalog files.
//!
//! A catalog maps template text to a map of context → rendered string:
//!
//! ```json
//! {
//!   "Hello {name}": {
//!     "default": "Hello {name}",
//!     "greeting": "MISSING: Hello {name}"
//!   }
//! }
//! ```
//!
//! Both levels are `BTreeMap`s, so every write is sorted by key regardless of
//! the order entries were read or inserted in.

use std::{
    collections::BTreeMap,
    fs,
    path::{Path, PathBuf},
};

use anyhow::{Context, Result, bail};
use colored::Colorize;
use serde_json::Value;

/// Context → rendered string, for one text.
pub type ContextMap = BTreeMap<String, String>;

/// Text → contexts.
pub type Catalog = BTreeMap<String, ContextMap>;

/// Check that a decoded JSON value has the catalog shape:
/// an object of objects of strings.
pub fn is_valid_catalog(value: &Value) -> bool {
    let Value::Object(texts) = value else {
        return false;
    };

    texts.values().all(|contexts| match contexts {
        Value::Object(contexts) => contexts.values().all(Value::is_string),
        _ => false,
    })
}

/// Read and validate a catalog file.
pub fn try_load_catalog(path: &Path) -> Result<Catalog> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read catalog: {}", path.display()))?;
    let value: Value = serde_json::from_str(&content)
        .with_context(|| format!("Failed to parse catalog JSON: {}", path.display()))?;

    if !is_valid_catalog(&value) {
        bail!(
            "Catalog must map text to objects of context strings: {}",
            path.display()
        );
    }

    serde_json::from_value(value)
        .with_context(|| format!("Failed to decode catalog: {}", path.display()))
}

/// Load a catalog, substituting an empty one when the file is missing or invalid.
///
/// The failure cause is only shown in verbose mode.
pub fn load_catalog(path: &Path, verbose: bool) -> Catalog {
    match try_load_catalog(path) {
        Ok(catalog) => catalog,
        Err(e) => {
            if verbose {
                eprintln!(
                    "{} {:#} (using an empty catalog)",
                    "warning:".bold().yellow(),
                    e
                );
            }
            Catalog::new()
        }
    }
}

/// Writes a catalog as pretty JSON (2-space indentation, trailing newline).
pub struct CatalogWriter {
    file_path: PathBuf,
}

impl CatalogWriter {
    pub fn new(path: &Path) -> Self {
        Self {
            file_path: path.to_path_buf(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.file_path
    }

    pub fn save(&self, catalog: &Catalog) -> Result<()> {
        // Create parent directories if they don't exist
        if let Some(parent) = self.file_path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create directory: {}", parent.display()))?;
        }

        let content = serde_json::to_string_pretty(catalog).context("Failed to serialize JSON")?;

        fs::write(&self.file_path, format!("{}\n", content))
            .with_context(|| format!("Failed to write file: {}", self.file_path.display()))?;

        Ok(())
    }
}
