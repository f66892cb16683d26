//! Core operations.
//!
//! This module contains the business logic for typed-css commands,
//! separated from CLI argument parsing and output rendering.

pub mod check;
pub mod generate;

use std::path::Path;

use eyre::{Context, Result};
use typed_css_codegen::render_declaration;
use typed_css_core::DeclarationFile;

pub use check::check;
pub use generate::generate;

use crate::settings::Settings;

/// Read an input and render its declaration file, if it has class names.
fn declaration_for(input: &Path, settings: &Settings) -> Result<Option<DeclarationFile>> {
    let raw = std::fs::read_to_string(input)
        .wrap_err_with(|| format!("Failed to read {}", input.display()))?;

    Ok(render_declaration(&raw, Some(&settings.banner))
        .map(|content| DeclarationFile::new(settings.declaration_path(input), content)))
}
