//! Generate command report data structures.

use std::path::PathBuf;

use super::output::{Output, Report};

/// What happened to one input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// Declaration written to disk.
    Written,
    /// Declaration on disk already matched.
    Unchanged,
    /// No class names found; nothing written.
    Skipped,
    /// Dry run: the declaration that would be written.
    Preview(String),
}

/// Result for one input file.
#[derive(Debug)]
pub struct GenerateEntry {
    /// CSS-module build output that was read.
    pub input: PathBuf,
    /// Declaration file path.
    pub output: PathBuf,
    pub outcome: Outcome,
}

/// Report data from declaration generation.
#[derive(Debug, Default)]
pub struct GenerateReport {
    pub entries: Vec<GenerateEntry>,
}

impl GenerateReport {
    /// Number of entries with the given outcome kind.
    pub fn count(&self, predicate: impl Fn(&Outcome) -> bool) -> usize {
        self.entries.iter().filter(|e| predicate(&e.outcome)).count()
    }

    fn is_preview(&self) -> bool {
        self.entries
            .iter()
            .any(|e| matches!(e.outcome, Outcome::Preview(_)))
    }
}

impl Report for GenerateReport {
    fn render(&self, out: &mut dyn Output) {
        for entry in &self.entries {
            let output = entry.output.display().to_string();
            match &entry.outcome {
                Outcome::Written => out.added_item(&output),
                Outcome::Unchanged => out.unchanged_item(&output),
                Outcome::Skipped => out.warning(&format!(
                    "no class names found in {}, skipped",
                    entry.input.display()
                )),
                Outcome::Preview(content) => {
                    out.divider(&output);
                    out.preformatted(content);
                }
            }
        }

        let skipped = self.count(|o| *o == Outcome::Skipped);

        if self.is_preview() {
            out.divider("Summary");
            out.preformatted(&format!(
                "{} declaration files would be generated, {} skipped",
                self.count(|o| matches!(o, Outcome::Preview(_))),
                skipped
            ));
        } else {
            out.newline();
            out.preformatted(&format!(
                "Generated {} declaration files ({} unchanged, {} skipped)",
                self.count(|o| *o == Outcome::Written),
                self.count(|o| *o == Outcome::Unchanged),
                skipped
            ));
        }
    }
}
