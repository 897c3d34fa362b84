//! A loaded config together with everything derived from it
//!
//! This is the one-shot pipeline a build runs: load the file, resolve the
//! theme onto the defaults, lint it, compile the content globs. The result
//! is read-only.

use std::path::{Path, PathBuf};

use tracing::{info, instrument, warn};

use crate::config::{load_config, LoaderOptions, TailwindConfig};
use crate::content::ContentMatcher;
use crate::css::{extract_candidates, render, Candidates};
use crate::error::{Result, ResultExt};
use crate::theme::{lint_theme, Theme, ThemeIssue};

#[derive(Debug, Clone)]
pub struct Project {
    pub config_path: PathBuf,
    pub config: TailwindConfig,
    pub theme: Theme,
    pub issues: Vec<ThemeIssue>,
    pub content: ContentMatcher,
}

impl Project {
    /// Load `config_path` and resolve it. Relative content globs are
    /// anchored at `cwd` unless the config asks for `relative: true`.
    #[instrument(name = "project_load", skip(options, cwd), fields(path = %config_path.display()))]
    pub fn load(config_path: &Path, options: &LoaderOptions, cwd: &Path) -> Result<Self> {
        let config = load_config(config_path, options)?;
        Self::from_config(config_path, config, cwd)
    }

    pub fn from_config(config_path: &Path, config: TailwindConfig, cwd: &Path) -> Result<Self> {
        let theme = config.resolved_theme()?;

        let issues = lint_theme(&theme);
        for issue in &issues {
            warn!(event_type = "theme_lint", issue = %issue, "Likely authoring error in theme");
        }

        let base_dir = config.content.base_dir(config_path, cwd);
        let content = ContentMatcher::new(config.content.patterns(), base_dir)?;
        if content.is_empty() {
            info!("No content globs configured; nothing will be scanned");
        }

        Ok(Project {
            config_path: config_path.to_path_buf(),
            config,
            theme,
            issues,
            content,
        })
    }

    pub fn scan(&self) -> Vec<PathBuf> {
        self.content.scan()
    }

    /// Class candidates from every scanned file. Unreadable files are
    /// logged and skipped.
    pub fn candidates(&self) -> Candidates {
        let mut candidates = Candidates::new();
        for path in self.scan() {
            if let Some(text) = std::fs::read_to_string(&path).warn_on_err() {
                candidates.extend(extract_candidates(&text));
            }
        }
        candidates
    }

    /// Scan content and render the stylesheet
    pub fn build_css(&self) -> String {
        let candidates = self.candidates();
        let css = render(&self.theme, &candidates);
        info!(
            event_type = "build",
            candidates = candidates.len(),
            bytes = css.len(),
            "Built stylesheet"
        );
        css
    }
}
