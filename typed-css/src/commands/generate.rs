use clap::Args;
use eyre::Result;

use super::SourceArgs;
use crate::{
    ops,
    reports::{Report, TerminalOutput},
};

#[derive(Args)]
pub struct GenerateCommand {
    #[command(flatten)]
    pub source: SourceArgs,

    /// Preview generated declarations without writing to disk
    #[arg(long)]
    pub dry_run: bool,
}

impl GenerateCommand {
    /// Run the generate command
    pub fn run(&self) -> Result<()> {
        let settings = self.source.settings();
        let report = ops::generate(&self.source.inputs, &settings, self.dry_run)?;

        report.render(&mut TerminalOutput::new());
        Ok(())
    }
}
