use std::{
    path::{Path, PathBuf},
    str::FromStr,
};

use serde::Deserialize;
use typed_css_codegen::{Banner, BannerOptions};

use crate::{Error, Result, error::SourceContext, validate};

/// Config file looked up in the working directory when none is given.
pub const DEFAULT_CONFIG_FILE: &str = "typed-css.toml";

/// Suffix of generated declaration files.
pub const DEFAULT_EXTENSION: &str = ".d.ts";

/// Root of typed-css.toml
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Banner at the top of every declaration file
    #[serde(default)]
    pub banner: Option<Banner>,

    /// Directory for declaration files (next to the inputs when unset)
    #[serde(default)]
    pub out_dir: Option<PathBuf>,

    /// Declaration file suffix
    #[serde(default = "default_extension")]
    pub extension: String,
}

fn default_extension() -> String {
    DEFAULT_EXTENSION.to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            banner: None,
            out_dir: None,
            extension: default_extension(),
        }
    }
}

impl FromStr for Config {
    type Err = Box<Error>;

    fn from_str(s: &str) -> Result<Self> {
        parse_config(s, DEFAULT_CONFIG_FILE)
    }
}

impl Config {
    /// Parse a typed-css.toml file from the given path.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| {
            Box::new(Error::Io {
                path: path.to_path_buf(),
                source: e,
            })
        })?;
        parse_config(&content, &path.display().to_string())
    }

    /// Load the configuration.
    ///
    /// An explicit path must exist. Without one, `typed-css.toml` in `dir` is
    /// used when present and the defaults otherwise.
    pub fn load(explicit: Option<&Path>, dir: &Path) -> Result<Self> {
        if let Some(path) = explicit {
            return Self::from_file(path);
        }

        let default_path = dir.join(DEFAULT_CONFIG_FILE);
        if default_path.is_file() {
            Self::from_file(default_path)
        } else {
            Ok(Self::default())
        }
    }

    /// Banner options for the declaration generator.
    pub fn banner_options(&self) -> BannerOptions {
        BannerOptions {
            banner: self.banner.clone(),
        }
    }
}

/// Parse a config from content with the given filename for error reporting.
fn parse_config(content: &str, filename: &str) -> Result<Config> {
    let source_ctx = SourceContext::new(content, filename);
    let config: Config = toml::from_str(content).map_err(|e| source_ctx.parse_error(e))?;
    validate::validate_config(&config, &source_ctx)?;
    Ok(config)
}
