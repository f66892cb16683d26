//! Core utilities and types for Typed CSS.
//!
//! This crate reads the JavaScript emitted by a CSS-module build step and
//! decides how each class name may be exposed to TypeScript:
//!
//! - [`extract`] - ordered class-name keys from the `module.exports` block
//! - [`is_reserved`], [`sanitise_kebab`], [`KeyKind`] - identifier rules
//! - [`DeclarationFile`] - writing generated declarations to disk

mod extract;
mod file;
mod naming;

pub use extract::extract;
pub use file::{DeclarationFile, FileStatus, WriteResult, declaration_path};
pub use naming::{KeyKind, RESERVED_WORDS, is_reserved, sanitise_kebab};
