//! Content globs - which source files get scanned for class usage
//!
//! Patterns are compiled with `globset`, which handles `{a,b,c}` groups.
//! A leading `!` turns a pattern into an exclusion; an excluded path stays
//! excluded whatever the pattern order. The walk never descends into
//! `node_modules` or `.git` below the base directory.

use std::collections::BTreeSet;
use std::path::{Component, Path, PathBuf};

use globset::{Glob, GlobBuilder, GlobSet, GlobSetBuilder};
use ignore::{DirEntry, WalkBuilder};
use tracing::{debug, instrument, warn};

use crate::error::{Result, ThemeConfigError};

/// Directories never worth scanning
const SKIPPED_DIRS: &[&str] = &["node_modules", ".git"];

/// Drop `.` components so `./src/a.rs` and `src/a.rs` compare equal
fn normalize(path: &Path) -> PathBuf {
    path.components()
        .filter(|c| !matches!(c, Component::CurDir))
        .collect()
}

fn is_skipped_dir(entry: &DirEntry) -> bool {
    entry.depth() > 0
        && entry.file_type().is_some_and(|kind| kind.is_dir())
        && entry
            .file_name()
            .to_str()
            .is_some_and(|name| SKIPPED_DIRS.contains(&name))
}

fn compile(raw: &str, body: &str) -> Result<Glob> {
    GlobBuilder::new(body.trim_start_matches("./"))
        .literal_separator(true)
        .build()
        .map_err(|source| ThemeConfigError::InvalidGlob {
            pattern: raw.to_string(),
            source,
        })
}

fn build_set(globs: Vec<Glob>, patterns: &[String]) -> Result<GlobSet> {
    let mut builder = GlobSetBuilder::new();
    for glob in globs {
        builder.add(glob);
    }
    builder
        .build()
        .map_err(|source| ThemeConfigError::InvalidGlob {
            pattern: patterns.join(", "),
            source,
        })
}

/// Compiled content patterns, anchored at a base directory
#[derive(Debug, Clone)]
pub struct ContentMatcher {
    base_dir: PathBuf,
    includes: GlobSet,
    excludes: GlobSet,
}

impl ContentMatcher {
    pub fn new(patterns: &[String], base_dir: impl Into<PathBuf>) -> Result<Self> {
        let base_dir = base_dir.into();
        let mut includes = Vec::new();
        let mut excludes = Vec::new();

        for raw in patterns {
            let trimmed = raw.trim();
            match trimmed.strip_prefix('!') {
                Some(body) => excludes.push(compile(raw, body)?),
                None => includes.push(compile(raw, trimmed)?),
            }
        }

        debug!(
            base_dir = %base_dir.display(),
            includes = includes.len(),
            excludes = excludes.len(),
            "Compiled content patterns"
        );

        Ok(ContentMatcher {
            base_dir,
            includes: build_set(includes, patterns)?,
            excludes: build_set(excludes, patterns)?,
        })
    }

    pub fn base_dir(&self) -> &Path {
        &self.base_dir
    }

    pub fn is_empty(&self) -> bool {
        self.includes.is_empty()
    }

    /// Does `path` (absolute, or relative to the base dir) fall in the scan set?
    pub fn matches(&self, path: &Path) -> bool {
        let path = normalize(path);
        let base = normalize(&self.base_dir);
        let relative = path.strip_prefix(&base).unwrap_or(&path);

        self.includes.is_match(relative) && !self.excludes.is_match(relative)
    }

    /// Walk the base directory for every file in the scan set.
    ///
    /// Results are de-duplicated and sorted. No patterns means no files;
    /// that is not an error.
    #[instrument(level = "debug", skip_all, fields(base_dir = %self.base_dir.display()))]
    pub fn scan(&self) -> Vec<PathBuf> {
        if self.is_empty() {
            return Vec::new();
        }

        let walker = WalkBuilder::new(&self.base_dir)
            .standard_filters(false)
            .follow_links(false)
            .filter_entry(|entry| !is_skipped_dir(entry))
            .build();

        let mut files = BTreeSet::new();
        for entry in walker {
            let entry = match entry {
                Ok(entry) => entry,
                Err(e) => {
                    warn!(error = %e, "Failed to walk content directory");
                    continue;
                }
            };
            let is_file = entry.file_type().is_some_and(|kind| kind.is_file());
            if is_file && self.matches(entry.path()) {
                files.insert(normalize(entry.path()));
            }
        }

        debug!(count = files.len(), "Scanned content files");
        files.into_iter().collect()
    }
}

#[cfg(test)]
#[path = "content_tests.rs"]
mod tests;
