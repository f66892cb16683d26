//! Snapshot tests for declaration file generation.
//!
//! These tests verify that generated declarations match expected output.
//! Run `cargo insta review` to update snapshots when making intentional changes.

use typed_css_codegen::{BannerOptions, render_declaration};

/// Raw output of the CSS-module build step for a small component stylesheet.
const BUTTON_MODULE: &str = r#"// Generated by the CSS module build step
module.exports = {
	"root": "_root_k3j2h",
	"is-disabled": "_is-disabled_k3j2h",
	"label": "_label_k3j2h",
	"default": "_default_k3j2h",
	"icon": "_icon_k3j2h"
};
module.exports.checksum = "c0ffee";
"#;

fn render(raw: &str, options: Option<&BannerOptions>) -> String {
    render_declaration(raw, options).expect("Export block not found")
}

#[test]
fn test_button_module_declaration() {
    let dts = render(BUTTON_MODULE, None);
    insta::assert_snapshot!(dts, @r#"
// This is an auto generated file.
// Please do not edit.

// Hey, Typed CSS here! Just to let you know I commented this type because it's a reserved Javascript keyword.
// export const default: string;
export const icon: string;
// Hey, Typed CSS here! Just to let you know I commented this type because it contains a hyphen, which can't be used in a Javascript variable name.
// export const is-disabled: string;
export const label: string;
export const root: string;

declare const styles: {
	default: string;
	icon: string;
	"is-disabled": string;
	label: string;
	root: string;
};

export default styles;
"#);
}

#[test]
fn test_declaration_without_banner() {
    let dts = render(BUTTON_MODULE, Some(&BannerOptions::disabled()));
    assert!(dts.starts_with("// Hey, Typed CSS here!"));
}

#[test]
fn test_declaration_with_custom_banner() {
    let raw = r#"module.exports = {
	"card": "_card_9a8b",
	"cardTitle": "_cardTitle_9a8b"
};"#;

    let dts = render(raw, Some(&BannerOptions::text("Generated from card.module.css")));
    insta::assert_snapshot!(dts, @r"
// Generated from card.module.css

export const card: string;
export const cardTitle: string;

declare const styles: {
	card: string;
	cardTitle: string;
};

export default styles;
");
}

#[test]
fn test_unsorted_build_output_is_normalized() {
    let forward = r#"module.exports = { "a": "_a", "b": "_b", "c": "_c" };"#;
    let backward = r#"module.exports = { "c": "_c", "b": "_b", "a": "_a" };"#;

    assert_eq!(render(forward, None), render(backward, None));
}

#[test]
fn test_empty_module_produces_nothing() {
    assert_eq!(render_declaration("module.exports = {};\n", None), None);
    assert_eq!(
        render_declaration("// no exports in this file\n", None),
        None
    );
}
