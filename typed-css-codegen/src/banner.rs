//! Banner comment at the top of a declaration file.

use serde::Deserialize;

use crate::builder::CodeBuilder;

/// Lines of the banner used when no banner is configured.
pub const DEFAULT_BANNER: &[&str] = &["This is an auto generated file.", "Please do not edit."];

/// Banner setting, written as `banner = false` or `banner = "text"`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum Banner {
    /// `false` disables the banner; `true` keeps the default notice.
    Enabled(bool),
    /// A single-line custom banner.
    Text(String),
}

/// Options controlling the banner.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct BannerOptions {
    #[serde(default)]
    pub banner: Option<Banner>,
}

impl BannerOptions {
    /// Options that suppress the banner entirely.
    pub fn disabled() -> Self {
        Self {
            banner: Some(Banner::Enabled(false)),
        }
    }

    /// Options with a custom single-line banner.
    pub fn text(text: impl Into<String>) -> Self {
        Self {
            banner: Some(Banner::Text(text.into())),
        }
    }
}

/// Build the banner comment, followed by a blank line unless it is empty.
///
/// ```
/// use typed_css_codegen::{BannerOptions, build_banner};
///
/// assert_eq!(build_banner(Some(&BannerOptions::text("X"))), "// X\n\n");
/// assert_eq!(build_banner(Some(&BannerOptions::disabled())), "");
/// ```
pub fn build_banner(options: Option<&BannerOptions>) -> String {
    let builder = CodeBuilder::declaration();

    let builder = match options.and_then(|o| o.banner.as_ref()) {
        Some(Banner::Enabled(false)) => return String::new(),
        Some(Banner::Text(text)) => builder.comment(text),
        Some(Banner::Enabled(true)) | None => {
            builder.each(DEFAULT_BANNER, |b, line| b.comment(line))
        }
    };

    builder.blank().build()
}
