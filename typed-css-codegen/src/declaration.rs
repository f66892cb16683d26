//! Full declaration file for one CSS module.

use typed_css_core::extract;

use crate::{BannerOptions, build_banner, build_ts_exports};

/// Render the declaration file for raw CSS-module build output.
///
/// Returns `None` when the output has no class names, in which case nothing
/// should be written.
///
/// ```
/// use typed_css_codegen::{BannerOptions, render_declaration};
///
/// let raw = r#"module.exports = { "title": "_title_a1" };"#;
/// let dts = render_declaration(raw, Some(&BannerOptions::disabled())).unwrap();
/// assert!(dts.starts_with("export const title: string;\n"));
///
/// assert_eq!(render_declaration("module.exports = {};", None), None);
/// ```
pub fn render_declaration(raw: &str, options: Option<&BannerOptions>) -> Option<String> {
    let keys = extract(raw)?;
    Some(format!("{}{}", build_banner(options), build_ts_exports(&keys)))
}
