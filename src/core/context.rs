use std::{
    collections::BTreeSet,
    path::{Component, Path, PathBuf},
};

use anyhow::{Context as _, Result, anyhow, bail};

use crate::{
    cli::args::CommonArgs,
    config::{Config, load_config},
    core::{RunContext, TransformOptions, file_scanner::scan_files},
};

/// Project-level settings and the source files of one invocation.
///
/// # Configuration Priority
///
/// 1. CLI arguments (e.g., `--tag-name __`)
/// 2. `.taglinerc.json` config file
/// 3. Built-in defaults
pub struct ProjectContext {
    /// Merged configuration (CLI args > config file > defaults).
    pub config: Config,

    /// Project root directory. Relative paths in the config resolve against it.
    pub root_dir: PathBuf,

    /// Source files to transform, sorted.
    pub files: BTreeSet<String>,

    pub verbose: bool,
}

impl ProjectContext {
    /// Create a context from command line arguments.
    ///
    /// `out_dir` overrides the config's `outDir`. The output directory is never
    /// scanned for sources.
    pub fn new(common_args: &CommonArgs, out_dir: Option<&Path>) -> Result<Self> {
        let verbose = common_args.verbose;

        let root_dir = common_args
            .source_root
            .clone()
            .unwrap_or_else(|| PathBuf::from("."));
        let path = root_dir
            .to_str()
            .with_context(|| anyhow!("Invalid path: {:?}", root_dir))?;

        let config_result = load_config(Path::new(path))?;

        if verbose && !config_result.from_file {
            eprintln!("Note: No .taglinerc.json found, using default configuration");
        }

        let mut config = config_result.config;

        if let Some(ref tag_name) = common_args.tag_name {
            config.tag_name = tag_name.clone();
        }
        if let Some(ref input) = common_args.translations_input {
            config.translations_input = input.to_string_lossy().to_string();
        }
        if let Some(ref output) = common_args.translations_output {
            config.translations_output = output.to_string_lossy().to_string();
        }
        if let Some(ref missing_text) = common_args.missing_text {
            config.missing_text = missing_text.clone();
        }
        if let Some(out_dir) = out_dir {
            config.out_dir = out_dir.to_string_lossy().to_string();
        }

        config.validate()?;

        let mut ignores = config.ignores.clone();
        ignores.push(config.out_dir.clone());

        let scan_result = scan_files(
            path,
            &config.includes,
            &ignores,
            config.ignore_test_files,
            verbose,
        );

        if scan_result.skipped_count > 0 {
            eprintln!(
                "Warning: {} path(s) skipped due to access errors{}",
                scan_result.skipped_count,
                if verbose { "" } else { " (use -v for details)" }
            );
        }

        Ok(Self {
            config,
            root_dir,
            files: scan_result.files,
            verbose,
        })
    }

    /// Resolve a config path against the project root.
    pub fn resolve_path(&self, p: &str) -> PathBuf {
        let p = Path::new(p);
        if p.is_absolute() {
            return p.to_path_buf();
        }

        let is_cur_dir = self
            .root_dir
            .components()
            .all(|c| matches!(c, Component::CurDir));
        if is_cur_dir {
            p.to_path_buf()
        } else {
            let rel = p.strip_prefix(Path::new(".")).unwrap_or(p);
            self.root_dir.join(rel)
        }
    }

    pub fn translations_input(&self) -> PathBuf {
        self.resolve_path(&self.config.translations_input)
    }

    pub fn translations_output(&self) -> PathBuf {
        self.resolve_path(&self.config.translations_output)
    }

    pub fn out_dir(&self) -> PathBuf {
        self.resolve_path(&self.config.out_dir)
    }

    pub fn options(&self) -> TransformOptions {
        TransformOptions {
            tag_name: self.config.tag_name.clone(),
            missing_text: self.config.missing_text.clone(),
        }
    }

    /// Start a run: load the input and output catalogs.
    pub fn start_run(&self) -> RunContext {
        RunContext::load(
            self.options(),
            &self.translations_input(),
            &self.translations_output(),
            self.verbose,
        )
    }

    /// Where the transformed copy of `file_path` goes.
    pub fn output_path(&self, file_path: &str) -> Result<PathBuf> {
        let Ok(relative) = Path::new(file_path).strip_prefix(&self.root_dir) else {
            bail!("Source file is outside the source root: {}", file_path);
        };
        Ok(self.out_dir().join(relative))
    }
}
