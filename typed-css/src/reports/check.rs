//! Check command report data structures.

use std::path::PathBuf;

use super::output::{Output, Report};

/// State of one declaration file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CheckStatus {
    UpToDate,
    Missing,
    Stale,
    /// No class names in the input, so no declaration is expected.
    Skipped,
}

/// Result for one input file.
#[derive(Debug)]
pub struct CheckEntry {
    pub input: PathBuf,
    pub output: PathBuf,
    pub status: CheckStatus,
}

/// Report data from checking declaration files.
#[derive(Debug, Default)]
pub struct CheckReport {
    pub entries: Vec<CheckEntry>,
}

impl CheckReport {
    /// Whether the check passed (nothing missing or stale).
    pub fn is_valid(&self) -> bool {
        self.outdated().next().is_none()
    }

    fn outdated(&self) -> impl Iterator<Item = &CheckEntry> {
        self.entries
            .iter()
            .filter(|e| matches!(e.status, CheckStatus::Missing | CheckStatus::Stale))
    }
}

impl Report for CheckReport {
    fn render(&self, out: &mut dyn Output) {
        for entry in &self.entries {
            let output = entry.output.display();
            match entry.status {
                CheckStatus::UpToDate => {}
                CheckStatus::Missing => out.problem_item(&format!("{} (missing)", output)),
                CheckStatus::Stale => out.problem_item(&format!("{} (out of date)", output)),
                CheckStatus::Skipped => out.warning(&format!(
                    "no class names found in {}, skipped",
                    entry.input.display()
                )),
            }
        }

        let outdated = self.outdated().count();
        if outdated == 0 {
            let checked = self
                .entries
                .iter()
                .filter(|e| e.status == CheckStatus::UpToDate)
                .count();
            out.preformatted(&format!("✓ {} declaration files are up to date", checked));
        } else {
            out.newline();
            out.preformatted(&format!(
                "{} declaration files are out of date; run `typed-css generate`",
                outdated
            ));
        }
    }
}
