//! Identifier rules for class names exposed to TypeScript.

use std::borrow::Cow;

/// Words that can never be bound with `export const`.
///
/// ECMAScript keywords, the names strict mode forbids as bindings (declaration
/// files are modules, so strict mode always applies) and the literal names.
pub const RESERVED_WORDS: &[&str] = &[
    // Keywords
    "await",
    "break",
    "case",
    "catch",
    "class",
    "const",
    "continue",
    "debugger",
    "default",
    "delete",
    "do",
    "else",
    "enum",
    "export",
    "extends",
    "finally",
    "for",
    "function",
    "if",
    "import",
    "in",
    "instanceof",
    "new",
    "return",
    "super",
    "switch",
    "this",
    "throw",
    "try",
    "typeof",
    "var",
    "void",
    "while",
    "with",
    "yield",
    // Strict mode
    "arguments",
    "eval",
    "implements",
    "interface",
    "let",
    "package",
    "private",
    "protected",
    "public",
    "static",
    // Literals
    "null",
    "true",
    "false",
];

/// Check if a name is a reserved word.
pub fn is_reserved(name: &str) -> bool {
    RESERVED_WORDS.contains(&name)
}

/// Quote a name containing a hyphen so it is a valid object-literal key.
///
/// ```
/// use typed_css_core::sanitise_kebab;
///
/// assert_eq!(sanitise_kebab("my-class"), "\"my-class\"");
/// assert_eq!(sanitise_kebab("myClass"), "myClass");
/// ```
pub fn sanitise_kebab(name: &str) -> Cow<'_, str> {
    if name.contains('-') {
        Cow::Owned(format!("\"{}\"", name))
    } else {
        Cow::Borrowed(name)
    }
}

/// How a class name can be emitted as a named export.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyKind {
    /// Safe to emit as `export const <name>`.
    Identifier,
    /// A reserved word; the export has to be commented out.
    Reserved,
    /// Contains a hyphen; the export has to be commented out.
    Hyphenated,
}

impl KeyKind {
    /// Classify a class name. Reserved words take precedence over hyphens.
    pub fn classify(name: &str) -> Self {
        if is_reserved(name) {
            Self::Reserved
        } else if name.contains('-') {
            Self::Hyphenated
        } else {
            Self::Identifier
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reserved_words() {
        assert!(is_reserved("class"));
        assert!(is_reserved("function"));
        assert!(is_reserved("const"));
        assert!(is_reserved("if"));
        assert!(is_reserved("let"));
        assert!(is_reserved("eval"));
        assert!(is_reserved("arguments"));
        assert!(!is_reserved("container"));
    }

    #[test]
    fn test_reserved_is_exact_match() {
        assert!(!is_reserved("Class"));
        assert!(!is_reserved("classes"));
        assert!(!is_reserved(" class"));
    }

    #[test]
    fn test_type_names_are_not_reserved() {
        // Legal `const` bindings, even though TypeScript uses them as type names
        assert!(!is_reserved("string"));
        assert!(!is_reserved("type"));
        assert!(!is_reserved("number"));
    }

    #[test]
    fn test_sanitise_kebab() {
        assert_eq!(sanitise_kebab("my-class"), "\"my-class\"");
        assert_eq!(sanitise_kebab("-leading"), "\"-leading\"");
        assert_eq!(sanitise_kebab("my_class"), "my_class");
        assert_eq!(sanitise_kebab("class"), "class");
    }

    #[test]
    fn test_sanitise_kebab_borrows_plain_names() {
        assert!(matches!(sanitise_kebab("plain"), Cow::Borrowed(_)));
    }

    #[test]
    fn test_classify() {
        assert_eq!(KeyKind::classify("button"), KeyKind::Identifier);
        assert_eq!(KeyKind::classify("default"), KeyKind::Reserved);
        assert_eq!(KeyKind::classify("eval"), KeyKind::Reserved);
        assert_eq!(KeyKind::classify("is-active"), KeyKind::Hyphenated);
        assert_eq!(KeyKind::classify("camelCase_1"), KeyKind::Identifier);
    }
}
