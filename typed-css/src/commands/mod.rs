mod check;
mod completions;
mod generate;

use std::path::{Path, PathBuf};

use check::CheckCommand;
use clap::{Args, Parser, Subcommand};
use completions::CompletionsCommand;
use eyre::Result;
use generate::GenerateCommand;
use typed_css_config::{Config, is_single_line_banner};

use crate::settings::Settings;

/// Extension trait for exiting on config errors with pretty formatting
pub(crate) trait UnwrapOrExit<T> {
    fn unwrap_or_exit(self) -> T;
}

impl<T> UnwrapOrExit<T> for typed_css_config::Result<T> {
    fn unwrap_or_exit(self) -> T {
        match self {
            Ok(v) => v,
            Err(e) => {
                eprintln!("{:?}", miette::Report::new(*e));
                std::process::exit(1);
            }
        }
    }
}

#[derive(Parser)]
#[command(name = "typed-css")]
#[command(version)]
#[command(about = "Generate TypeScript declarations for CSS modules")]
pub(crate) struct Cli {
    #[command(subcommand)]
    command: Commands,
}

impl Cli {
    pub fn run(&self) -> Result<()> {
        match &self.command {
            Commands::Generate(cmd) => cmd.run(),
            Commands::Check(cmd) => cmd.run(),
            Commands::Completions(cmd) => cmd.run(),
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Write declaration files for CSS-module build output
    Generate(GenerateCommand),

    /// Verify declaration files are up to date without writing them
    Check(CheckCommand),

    /// Generate shell completions
    Completions(CompletionsCommand),
}

/// Inputs and settings shared by generate and check.
#[derive(Args)]
pub struct SourceArgs {
    /// JavaScript files emitted by the CSS-module build step
    #[arg(required = true)]
    pub inputs: Vec<PathBuf>,

    /// Path to typed-css.toml (defaults to ./typed-css.toml when present)
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Directory for declaration files (defaults to next to each input)
    #[arg(short, long)]
    pub out_dir: Option<PathBuf>,

    /// Single-line banner comment replacing the default notice
    #[arg(long, conflicts_with = "no_banner", value_parser = parse_banner)]
    pub banner: Option<String>,

    /// Omit the banner comment
    #[arg(long)]
    pub no_banner: bool,
}

fn parse_banner(value: &str) -> std::result::Result<String, String> {
    if is_single_line_banner(value) {
        Ok(value.to_string())
    } else {
        Err("banner must be a single line".to_string())
    }
}

impl SourceArgs {
    /// Load typed-css.toml and apply the command-line overrides.
    pub fn settings(&self) -> Settings {
        let config = Config::load(self.config.as_deref(), Path::new(".")).unwrap_or_exit();
        self.apply_overrides(Settings::from_config(&config))
    }

    fn apply_overrides(&self, mut settings: Settings) -> Settings {
        if let Some(text) = &self.banner {
            settings = settings.with_banner_text(text);
        }
        if self.no_banner {
            settings = settings.without_banner();
        }
        if let Some(dir) = &self.out_dir {
            settings = settings.with_out_dir(dir);
        }

        settings
    }
}

#[cfg(test)]
mod tests {
    use std::str::FromStr;

    use typed_css_codegen::BannerOptions;

    use super::*;

    fn source_args(args: &[&str]) -> SourceArgs {
        let cli = Cli::try_parse_from(args).unwrap();
        match cli.command {
            Commands::Generate(cmd) => cmd.source,
            Commands::Check(cmd) => cmd.source,
            Commands::Completions(_) => panic!("expected generate or check"),
        }
    }

    fn config_settings() -> Settings {
        let config = Config::from_str("banner = false\nout_dir = \"types\"").unwrap();
        Settings::from_config(&config)
    }

    #[test]
    fn test_flags_override_config() {
        let args = source_args(&[
            "typed-css",
            "generate",
            "a.css.js",
            "--banner",
            "Generated",
            "--out-dir",
            "out",
        ]);
        let settings = args.apply_overrides(config_settings());

        assert_eq!(settings.banner, BannerOptions::text("Generated"));
        assert_eq!(settings.out_dir, Some(PathBuf::from("out")));
    }

    #[test]
    fn test_config_kept_without_flags() {
        let args = source_args(&["typed-css", "check", "a.css.js"]);
        let settings = args.apply_overrides(config_settings());

        assert_eq!(settings.banner, BannerOptions::disabled());
        assert_eq!(settings.out_dir, Some(PathBuf::from("types")));
    }

    #[test]
    fn test_no_banner_overrides_config_text() {
        let args = source_args(&["typed-css", "generate", "a.css.js", "--no-banner"]);
        let settings = args.apply_overrides(Settings::default().with_banner_text("from config"));

        assert_eq!(settings.banner, BannerOptions::disabled());
    }

    #[test]
    fn test_multiline_banner_flag_rejected() {
        let result = Cli::try_parse_from([
            "typed-css",
            "generate",
            "a.css.js",
            "--banner",
            "first\nsecond",
        ]);
        assert!(result.is_err());

        let result = Cli::try_parse_from([
            "typed-css",
            "generate",
            "a.css.js",
            "--banner",
            "first\rsecond",
        ]);
        assert!(result.is_err());
    }

    #[test]
    fn test_banner_conflicts_with_no_banner() {
        let result = Cli::try_parse_from([
            "typed-css",
            "generate",
            "a.css.js",
            "--banner",
            "x",
            "--no-banner",
        ]);
        assert!(result.is_err());
    }

    #[test]
    fn test_cli_definition() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }
}
