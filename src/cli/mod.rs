mod commands;
mod error;
mod output;

pub use commands::Cli;
pub use error::InputError;
pub use output::OutputMode;

use anyhow::Result;

pub fn run(cli: Cli) -> Result<()> {
    commands::execute(cli)
}
