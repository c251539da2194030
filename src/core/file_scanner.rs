//! Discovery of the source files a run transforms.

use std::{
    collections::BTreeSet,
    path::{Path, PathBuf},
};

use colored::Colorize;
use glob::{Pattern, glob};
use walkdir::{DirEntry, WalkDir};

use crate::config::TEST_FILE_PATTERNS;

/// Extensions of the sources the parser understands.
const SOURCE_EXTENSIONS: &[&str] = &["tsx", "ts", "jsx", "js", "mjs", "cjs", "mts", "cts"];

/// Declaration files carry no runtime templates.
const DECLARATION_SUFFIXES: &[&str] = &[".d.ts", ".d.mts", ".d.cts"];

/// Patterns without `*` or `?` name literal directories.
fn is_glob_pattern(pattern: &str) -> bool {
    pattern.contains('*') || pattern.contains('?')
}

fn warn(verbose: bool, message: std::fmt::Arguments<'_>) {
    if verbose {
        eprintln!("{} {}", "warning:".bold().yellow(), message);
    }
}

/// Result of scanning files.
pub struct ScanResult {
    /// Source files, sorted so runs are reproducible.
    pub files: BTreeSet<String>,
    pub skipped_count: usize,
}

/// Paths excluded from a scan.
///
/// Literal entries exclude a whole subtree and stop the walk from descending
/// into it. Globs are matched against every visited path.
struct IgnoreRules {
    subtrees: Vec<PathBuf>,
    globs: Vec<Pattern>,
}

impl IgnoreRules {
    fn new(base_dir: &Path, patterns: &[String], ignore_test_files: bool, verbose: bool) -> Self {
        let mut subtrees = Vec::new();
        let mut globs = Vec::new();

        for p in patterns {
            if !is_glob_pattern(p) {
                subtrees.push(base_dir.join(p));
                continue;
            }
            match Pattern::new(p) {
                Ok(pattern) => globs.push(pattern),
                Err(e) => warn(verbose, format_args!("Invalid ignore pattern '{}': {}", p, e)),
            }
        }

        if ignore_test_files {
            globs.extend(TEST_FILE_PATTERNS.iter().filter_map(|p| Pattern::new(p).ok()));
        }

        Self { subtrees, globs }
    }

    fn is_ignored(&self, path: &Path) -> bool {
        self.subtrees.iter().any(|root| path.starts_with(root))
            || self
                .globs
                .iter()
                .any(|p| p.matches(&path.to_string_lossy()))
    }
}

/// Directories a scan starts from: `base_dir` itself when `includes` is empty.
fn scan_roots(base_dir: &Path, includes: &[String], verbose: bool) -> Vec<PathBuf> {
    if includes.is_empty() {
        return vec![base_dir.to_path_buf()];
    }

    let mut roots = Vec::new();
    for inc in includes {
        let path = base_dir.join(inc);
        if !is_glob_pattern(inc) {
            if path.exists() {
                roots.push(path);
            } else {
                warn(
                    verbose,
                    format_args!("Include path does not exist: {}", path.display()),
                );
            }
            continue;
        }

        match glob(&path.to_string_lossy()) {
            Ok(entries) => roots.extend(entries.flatten().filter(|entry| entry.is_dir())),
            Err(e) => warn(verbose, format_args!("Invalid glob pattern '{}': {}", inc, e)),
        }
    }
    roots
}

/// Collect the source files under `base_dir`.
///
/// Entries that cannot be read are counted in `skipped_count` instead of
/// failing the scan.
pub fn scan_files(
    base_dir: &str,
    includes: &[String],
    ignore_patterns: &[String],
    ignore_test_files: bool,
    verbose: bool,
) -> ScanResult {
    let base_dir = Path::new(base_dir);
    let ignore = IgnoreRules::new(base_dir, ignore_patterns, ignore_test_files, verbose);

    let mut files = BTreeSet::new();
    let mut skipped_count = 0;

    for root in scan_roots(base_dir, includes, verbose) {
        let walker = WalkDir::new(root)
            .into_iter()
            .filter_entry(|entry| !ignore.is_ignored(entry.path()));

        for entry in walker {
            match entry {
                Ok(entry) if is_source_file(&entry) => {
                    files.insert(entry.path().to_string_lossy().into_owned());
                }
                Ok(_) => {}
                Err(e) => {
                    skipped_count += 1;
                    warn(verbose, format_args!("Cannot access path: {}", e));
                }
            }
        }
    }

    ScanResult {
        files,
        skipped_count,
    }
}

fn is_source_file(entry: &DirEntry) -> bool {
    if !entry.file_type().is_file() {
        return false;
    }

    let name = entry.file_name().to_string_lossy();
    if DECLARATION_SUFFIXES.iter().any(|suffix| name.ends_with(suffix)) {
        return false;
    }

    entry
        .path()
        .extension()
        .and_then(|e| e.to_str())
        .is_some_and(|ext| SOURCE_EXTENSIONS.contains(&ext))
}
