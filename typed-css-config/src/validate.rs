//! Checks applied after typed-css.toml has been parsed.

use miette::SourceSpan;
use typed_css_codegen::Banner;

use crate::{Config, Result, error::SourceContext};

/// Whether banner text fits in the single `//` comment it is written as.
pub fn is_single_line_banner(text: &str) -> bool {
    !text.contains(['\n', '\r'])
}

pub(crate) fn validate_config(config: &Config, ctx: &SourceContext) -> Result<()> {
    if let Some(Banner::Text(text)) = &config.banner
        && !is_single_line_banner(text)
    {
        return Err(ctx.validation_error(
            "banner must be a single line",
            "the banner is written as one `//` comment; remove the line breaks",
            find_value_span(ctx.src(), "banner"),
        ));
    }

    if !config.extension.starts_with('.') || !config.extension.ends_with(".ts") {
        return Err(ctx.validation_error(
            format!("invalid extension '{}'", config.extension),
            "the extension must start with '.' and end with '.ts', e.g. '.d.ts'",
            find_value_span(ctx.src(), "extension"),
        ));
    }

    Ok(())
}

/// Find the span of the value assigned to a top-level key.
///
/// Covers the rest of the line after `key =`, which is enough to underline
/// single-line values. Returns `None` when the key is not found.
pub(crate) fn find_value_span(src: &str, key: &str) -> Option<SourceSpan> {
    let mut offset = 0;

    for line in src.split_inclusive('\n') {
        let trimmed = line.trim_start();
        let indent = line.len() - trimmed.len();

        if let Some(after_key) = trimmed.strip_prefix(key) {
            let after_ws = after_key.trim_start();
            if let Some(value) = after_ws.strip_prefix('=') {
                let value_trimmed = value.trim_start();
                let start = offset + indent + (trimmed.len() - value_trimmed.len());
                return Some(SourceSpan::from((start, value_trimmed.trim_end().len())));
            }
        }

        offset += line.len();
    }

    None
}

#[cfg(test)]
mod tests {
    use std::str::FromStr;

    use super::*;
    use crate::Error;

    #[test]
    fn test_find_value_span() {
        let src = "out_dir = \"types\"\nbanner = \"hello\"\n";
        let span = find_value_span(src, "banner").unwrap();
        assert_eq!(&src[span.offset()..span.offset() + span.len()], "\"hello\"");
    }

    #[test]
    fn test_find_value_span_indented() {
        let src = "  extension =   \".js\"  \n";
        let span = find_value_span(src, "extension").unwrap();
        assert_eq!(&src[span.offset()..span.offset() + span.len()], "\".js\"");
    }

    #[test]
    fn test_find_value_span_missing() {
        assert!(find_value_span("out_dir = \"x\"", "banner").is_none());
        // Prefix of another key is not a match
        assert!(find_value_span("banners = 1", "banner").is_none());
    }

    #[test]
    fn test_is_single_line_banner() {
        assert!(is_single_line_banner("Generated, do not edit"));
        assert!(is_single_line_banner(""));
        assert!(!is_single_line_banner("first\nsecond"));
        assert!(!is_single_line_banner("first\rsecond"));
    }

    #[test]
    fn test_multiline_banner_rejected() {
        let err = Config::from_str(r#"banner = "first\nsecond""#).unwrap_err();
        match *err {
            Error::Validation { span, message, .. } => {
                assert_eq!(message, "banner must be a single line");
                assert!(span.is_some());
            }
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[test]
    fn test_invalid_extension_rejected() {
        let err = Config::from_str(r#"extension = ".js""#).unwrap_err();
        assert!(matches!(*err, Error::Validation { .. }));

        let err = Config::from_str(r#"extension = "d.ts""#).unwrap_err();
        assert!(matches!(*err, Error::Validation { .. }));
    }

    #[test]
    fn test_valid_config_passes() {
        assert!(Config::from_str("banner = \"ok\"\nextension = \".d.ts\"").is_ok());
    }
}
