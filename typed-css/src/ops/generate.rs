//! Generate operation - declaration files from CSS-module build output.

use std::path::PathBuf;

use eyre::Result;
use typed_css_core::WriteResult;

use super::declaration_for;
use crate::{
    reports::{GenerateEntry, GenerateReport, Outcome},
    settings::Settings,
};

/// Execute the generate operation.
///
/// Inputs without class names are skipped. With `dry_run`, declarations are
/// returned in the report instead of written.
pub fn generate(inputs: &[PathBuf], settings: &Settings, dry_run: bool) -> Result<GenerateReport> {
    let mut report = GenerateReport::default();

    for input in inputs {
        let Some(file) = declaration_for(input, settings)? else {
            report.entries.push(GenerateEntry {
                input: input.clone(),
                output: settings.declaration_path(input),
                outcome: Outcome::Skipped,
            });
            continue;
        };

        let outcome = if dry_run {
            Outcome::Preview(file.content().to_string())
        } else {
            match file.write()? {
                WriteResult::Written => Outcome::Written,
                WriteResult::Unchanged => Outcome::Unchanged,
            }
        };

        report.entries.push(GenerateEntry {
            input: input.clone(),
            output: file.path().to_path_buf(),
            outcome,
        });
    }

    Ok(report)
}

#[cfg(test)]
mod tests {
    use std::fs;

    use tempfile::TempDir;

    use super::*;

    const BUTTON: &str = r#"module.exports = {
	"root": "_root_a1",
	"is-active": "_is-active_a1"
};
module.exports.checksum = "a1";
"#;

    fn setup(files: &[(&str, &str)]) -> (TempDir, Vec<PathBuf>) {
        let temp = TempDir::new().unwrap();
        let inputs = files
            .iter()
            .map(|(name, content)| {
                let path = temp.path().join(name);
                fs::write(&path, content).unwrap();
                path
            })
            .collect();
        (temp, inputs)
    }

    #[test]
    fn test_generate_writes_declaration() {
        let (temp, inputs) = setup(&[("button.css.js", BUTTON)]);

        let report = generate(&inputs, &Settings::default(), false).unwrap();

        assert_eq!(report.entries[0].outcome, Outcome::Written);
        let dts = fs::read_to_string(temp.path().join("button.css.d.ts")).unwrap();
        assert!(dts.starts_with("// This is an auto generated file.\n"));
        assert!(dts.contains("export const root: string;\n"));
        assert!(dts.contains("\t\"is-active\": string;\n"));
    }

    #[test]
    fn test_generate_twice_is_unchanged() {
        let (_temp, inputs) = setup(&[("button.css.js", BUTTON)]);
        let settings = Settings::default();

        generate(&inputs, &settings, false).unwrap();
        let report = generate(&inputs, &settings, false).unwrap();

        assert_eq!(report.entries[0].outcome, Outcome::Unchanged);
    }

    #[test]
    fn test_generate_skips_empty_module() {
        let (temp, inputs) = setup(&[("empty.css.js", "module.exports = {};\n")]);

        let report = generate(&inputs, &Settings::default(), false).unwrap();

        assert_eq!(report.entries[0].outcome, Outcome::Skipped);
        assert!(!temp.path().join("empty.css.d.ts").exists());
    }

    #[test]
    fn test_generate_dry_run_writes_nothing() {
        let (temp, inputs) = setup(&[("button.css.js", BUTTON)]);
        let settings = Settings::default().without_banner();

        let report = generate(&inputs, &settings, true).unwrap();

        match &report.entries[0].outcome {
            Outcome::Preview(content) => {
                assert!(content.starts_with("export const root: string;\n"))
            }
            other => panic!("expected preview, got {:?}", other),
        }
        assert!(!temp.path().join("button.css.d.ts").exists());
    }

    #[test]
    fn test_generate_into_out_dir() {
        let (temp, inputs) = setup(&[("button.css.js", BUTTON)]);
        let out_dir = temp.path().join("types");
        let settings = Settings::default().with_out_dir(&out_dir);

        generate(&inputs, &settings, false).unwrap();

        assert!(out_dir.join("button.css.d.ts").exists());
    }

    #[test]
    fn test_generate_missing_input_fails() {
        let temp = TempDir::new().unwrap();
        let inputs = vec![temp.path().join("missing.css.js")];

        let err = generate(&inputs, &Settings::default(), false).unwrap_err();
        assert!(err.to_string().contains("Failed to read"));
    }
}
