//! Named and default exports of a declaration file.

use typed_css_core::{KeyKind, sanitise_kebab};

use crate::builder::CodeBuilder;

/// Explanation placed above an export suppressed for a reserved word.
pub const RESERVED_NOTICE: &str = "Hey, Typed CSS here! Just to let you know I commented this type because it's a reserved Javascript keyword.";

/// Explanation placed above an export suppressed for a hyphenated name.
pub const HYPHEN_NOTICE: &str = "Hey, Typed CSS here! Just to let you know I commented this type because it contains a hyphen, which can't be used in a Javascript variable name.";

/// Build one `export const` line per key, in the given order.
///
/// Keys that cannot be bound with `const` are written as a notice comment
/// followed by the commented-out export.
pub fn build_named_exports<S: AsRef<str>>(keys: &[S]) -> String {
    CodeBuilder::declaration()
        .each(keys, |b, key| {
            let key: &str = key.as_ref();
            let export = format!("export const {}: string;", key);

            match KeyKind::classify(key) {
                KeyKind::Identifier => b.line(&export),
                KeyKind::Reserved => b.comment(RESERVED_NOTICE).comment(&export),
                KeyKind::Hyphenated => b.comment(HYPHEN_NOTICE).comment(&export),
            }
        })
        .build()
}

/// Build the `styles` object type and its default export.
///
/// Hyphenated keys are quoted; reserved words are valid property names and
/// are left as they are.
pub fn build_default_export<S: AsRef<str>>(keys: &[S]) -> String {
    if keys.is_empty() {
        return String::new();
    }

    CodeBuilder::declaration()
        .block_with_close("declare const styles: {", "};", |b| {
            b.each(keys, |b, key| {
                b.line(&format!("{}: string;", sanitise_kebab(key.as_ref())))
            })
        })
        .blank()
        .line("export default styles;")
        .build()
}

/// Build the named and default exports for keys sorted in ascending order.
///
/// ```
/// use typed_css_codegen::build_ts_exports;
///
/// assert_eq!(build_ts_exports(&["b", "a"]), build_ts_exports(&["a", "b"]));
/// assert_eq!(build_ts_exports::<&str>(&[]), "");
/// ```
pub fn build_ts_exports<S: AsRef<str>>(keys: &[S]) -> String {
    if keys.is_empty() {
        return String::new();
    }

    let mut sorted: Vec<&str> = keys.iter().map(AsRef::as_ref).collect();
    sorted.sort();

    format!(
        "{}\n{}",
        build_named_exports(&sorted),
        build_default_export(&sorted)
    )
}
