//! Configuration for Typed CSS, read from `typed-css.toml`.
//!
//! ```toml
//! # false disables the banner, a string replaces it
//! banner = "Generated by the style pipeline"
//! # write declarations here instead of next to their inputs
//! out_dir = "types/styles"
//! extension = ".d.ts"
//! ```

// Miette's derive macro generates code that triggers these warnings
#![allow(unused_assignments)]

mod config;
mod error;
mod validate;

pub use config::{Config, DEFAULT_CONFIG_FILE, DEFAULT_EXTENSION};
pub use error::{Error, Result, SourceContext};
pub use validate::is_single_line_banner;
