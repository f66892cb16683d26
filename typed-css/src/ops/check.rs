//! Check operation - compare declaration files on disk with fresh output.

use std::path::PathBuf;

use eyre::Result;
use typed_css_core::FileStatus;

use super::declaration_for;
use crate::{
    reports::{CheckEntry, CheckReport, CheckStatus},
    settings::Settings,
};

/// Execute the check operation.
///
/// Nothing is written; the report lists missing and stale declarations.
pub fn check(inputs: &[PathBuf], settings: &Settings) -> Result<CheckReport> {
    let mut report = CheckReport::default();

    for input in inputs {
        let (output, status) = match declaration_for(input, settings)? {
            Some(file) => {
                let status = match file.status()? {
                    FileStatus::UpToDate => CheckStatus::UpToDate,
                    FileStatus::Missing => CheckStatus::Missing,
                    FileStatus::Stale => CheckStatus::Stale,
                };
                (file.path().to_path_buf(), status)
            }
            None => (settings.declaration_path(input), CheckStatus::Skipped),
        };

        report.entries.push(CheckEntry {
            input: input.clone(),
            output,
            status,
        });
    }

    Ok(report)
}
