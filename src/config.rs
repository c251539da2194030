use std::{
    fs,
    path::{Path, PathBuf},
};

use anyhow::{Context, Ok, Result, bail};
use glob::Pattern;
use serde::{Deserialize, Serialize};

use crate::utils::is_valid_identifier;

pub const CONFIG_FILE_NAME: &str = ".taglinerc.json";

pub const TEST_FILE_PATTERNS: &[&str] = &[
    "**/*.test.tsx",
    "**/*.test.ts",
    "**/*.test.jsx",
    "**/*.test.js",
    "**/*.spec.tsx",
    "**/*.spec.ts",
    "**/*.spec.jsx",
    "**/*.spec.js",
    "**/__tests__/**",
];

#[derive(Debug, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Config {
    #[serde(default = "default_tag_name")]
    pub tag_name: String,
    #[serde(default = "default_translations_input")]
    pub translations_input: String,
    #[serde(default = "default_translations_output")]
    pub translations_output: String,
    #[serde(default = "default_missing_text")]
    pub missing_text: String,
    #[serde(default = "default_includes")]
    pub includes: Vec<String>,
    #[serde(default)]
    pub ignores: Vec<String>,
    #[serde(default)]
    pub ignore_test_files: bool,
    #[serde(default = "default_out_dir")]
    pub out_dir: String,
}

fn default_tag_name() -> String {
    "t".to_string()
}

fn default_translations_input() -> String {
    "./translations/input.json".to_string()
}

fn default_translations_output() -> String {
    "./translations/output.json".to_string()
}

fn default_missing_text() -> String {
    "MISSING: ".to_string()
}

fn default_includes() -> Vec<String> {
    vec!["src".to_string()]
}

fn default_out_dir() -> String {
    "./dist".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            tag_name: default_tag_name(),
            translations_input: default_translations_input(),
            translations_output: default_translations_output(),
            missing_text: default_missing_text(),
            includes: default_includes(),
            ignores: Vec::new(),
            ignore_test_files: false,
            out_dir: default_out_dir(),
        }
    }
}

impl Config {
    /// Validate configuration values.
    ///
    /// Returns an error if the tag name is not an identifier, a translations
    /// path is empty, or a glob pattern in `ignores` or `includes` is invalid.
    pub fn validate(&self) -> Result<()> {
        if !is_valid_identifier(&self.tag_name) {
            bail!(
                "Invalid 'tagName': \"{}\" is not a JavaScript identifier",
                self.tag_name
            );
        }

        if self.translations_input.is_empty() {
            bail!("'translationsInput' must not be empty");
        }
        if self.translations_output.is_empty() {
            bail!("'translationsOutput' must not be empty");
        }
        if self.out_dir.is_empty() {
            bail!("'outDir' must not be empty");
        }

        for pattern in &self.ignores {
            Pattern::new(pattern)
                .with_context(|| format!("Invalid glob pattern in 'ignores': \"{}\"", pattern))?;
        }

        // Patterns without wildcards are literal directory paths
        for pattern in &self.includes {
            if pattern.contains('*') || pattern.contains('?') {
                Pattern::new(pattern).with_context(|| {
                    format!("Invalid glob pattern in 'includes': \"{}\"", pattern)
                })?;
            }
        }

        Ok(())
    }
}

pub fn default_config_json() -> Result<String> {
    let config = Config::default();
    serde_json::to_string_pretty(&config).context("Failed to generate default config.")
}

pub fn find_config_file(start_dir: &Path) -> Option<PathBuf> {
    let mut current = start_dir.to_path_buf();

    loop {
        let config_path = current.join(CONFIG_FILE_NAME);
        if config_path.exists() {
            return Some(config_path);
        }
        if current.join(".git").exists() {
            return None;
        }
        if !current.pop() {
            return None;
        }
    }
}

/// Result of loading configuration.
pub struct ConfigLoadResult {
    pub config: Config,
    /// True if config was loaded from a file, false if using defaults.
    pub from_file: bool,
}

pub fn load_config(start_dir: &Path) -> Result<ConfigLoadResult> {
    match find_config_file(start_dir) {
        Some(path) => {
            let content = fs::read_to_string(&path)?;
            let config: Config = serde_json::from_str(&content)
                .with_context(|| format!("Failed to parse config file: {:?}", path))?;
            config.validate()?;
            Ok(ConfigLoadResult {
                config,
                from_file: true,
            })
        }
        None => Ok(ConfigLoadResult {
            config: Config::default(),
            from_file: false,
        }),
    }
}
