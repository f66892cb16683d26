//! Effective settings for a run.
//!
//! Combines typed-css.toml with command-line overrides.

use std::path::{Path, PathBuf};

use typed_css_codegen::BannerOptions;
use typed_css_config::Config;
use typed_css_core::declaration_path;

/// Settings shared by the generate and check operations.
#[derive(Debug, Clone)]
pub struct Settings {
    /// Banner written at the top of each declaration.
    pub banner: BannerOptions,
    /// Directory for declaration files (next to the inputs when unset).
    pub out_dir: Option<PathBuf>,
    /// Declaration file suffix.
    pub extension: String,
}

impl Settings {
    /// Start from a parsed config.
    pub fn from_config(config: &Config) -> Self {
        Self {
            banner: config.banner_options(),
            out_dir: config.out_dir.clone(),
            extension: config.extension.clone(),
        }
    }

    /// Replace the banner with a custom line.
    pub fn with_banner_text(mut self, text: impl Into<String>) -> Self {
        self.banner = BannerOptions::text(text);
        self
    }

    /// Suppress the banner.
    pub fn without_banner(mut self) -> Self {
        self.banner = BannerOptions::disabled();
        self
    }

    /// Write declarations into `dir`.
    pub fn with_out_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.out_dir = Some(dir.into());
        self
    }

    /// Where the declaration for `input` is written.
    pub fn declaration_path(&self, input: &Path) -> PathBuf {
        declaration_path(input, self.out_dir.as_deref(), &self.extension)
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self::from_config(&Config::default())
    }
}
