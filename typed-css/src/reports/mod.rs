//! Report data structures for commands.
//!
//! Operations build reports, then commands render them to an Output target.

mod check;
mod generate;
mod output;

pub use check::{CheckEntry, CheckReport, CheckStatus};
pub use generate::{GenerateEntry, GenerateReport, Outcome};
pub use output::{Report, TerminalOutput};
