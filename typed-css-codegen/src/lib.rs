//! TypeScript declaration generator for Typed CSS.
//!
//! Turns the class names of a CSS module into an ambient declaration:
//!
//! ```text
//! // This is an auto generated file.
//! // Please do not edit.
//!
//! export const button: string;
//!
//! declare const styles: {
//!     button: string;
//! };
//!
//! export default styles;
//! ```
//!
//! # Usage
//!
//! ```
//! use typed_css_codegen::render_declaration;
//!
//! let raw = r#"module.exports = { "button": "_button_x1" };"#;
//! let dts = render_declaration(raw, None).unwrap();
//! assert!(dts.contains("export const button: string;"));
//! ```
//!
//! The individual pieces ([`build_banner`], [`build_named_exports`],
//! [`build_default_export`], [`build_ts_exports`]) are pure functions and can
//! be combined by callers that already hold the class names.

mod banner;
mod declaration;
mod exports;

pub mod builder;

pub use banner::{Banner, BannerOptions, DEFAULT_BANNER, build_banner};
pub use declaration::render_declaration;
pub use exports::{
    HYPHEN_NOTICE, RESERVED_NOTICE, build_default_export, build_named_exports, build_ts_exports,
};
