use anyhow::Result;
use clap::{CommandFactory, Parser, Subcommand};
use clap_complete::Shell;
use serde_json::Value as JsonValue;

use crate::config::{ConfigMap, Context, Declaration};
use crate::shorthand;

use super::error::InputError;
use super::output::{self, OutputMode};

#[derive(Parser)]
#[command(name = "declsh")]
#[command(about = "Decode shorthand declarations into configuration maps")]
#[command(version)]
pub struct Cli {
    /// Output in JSON format (auto-enabled when stdout is piped)
    #[arg(short, long, global = true)]
    pub json: bool,

    /// Force text output even when stdout is piped
    #[arg(long, global = true, conflicts_with = "json")]
    pub no_json: bool,

    /// Suppress all output on success (errors still go to stderr)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Decode a shorthand declaration
    Decode {
        /// Declaration context
        #[arg(value_enum)]
        context: Context,

        /// Shorthand name, e.g. "address:textarea.widefat"
        name: String,

        /// Initial configuration as JSON/JSON5: an object, or an array of
        /// flag tokens like '["!public", "sortable"]'
        #[arg(short, long)]
        config: Option<String>,

        /// Treat NAME as a JSON object of name -> config pairs
        #[arg(long, conflicts_with = "config")]
        batch: bool,
    },

    /// List the known contexts and their grammar groups
    Contexts,

    /// Generate shell completions
    Completions {
        /// Target shell
        #[arg(value_enum)]
        shell: Shell,
    },
}

pub fn execute(cli: Cli) -> Result<()> {
    let mode = OutputMode::from_flags(cli.json, cli.no_json, cli.quiet);

    match cli.command {
        Commands::Decode {
            context,
            name,
            config,
            batch,
        } => decode_command(context, &name, config.as_deref(), batch, mode),
        Commands::Contexts => {
            output::print_contexts(mode);
            Ok(())
        }
        Commands::Completions { shell } => {
            let mut command = Cli::command();
            clap_complete::generate(shell, &mut command, "declsh", &mut std::io::stdout());
            Ok(())
        }
    }
}

fn decode_command(
    context: Context,
    name: &str,
    config: Option<&str>,
    batch: bool,
    mode: OutputMode,
) -> Result<()> {
    let config = match config {
        Some(payload) => {
            let json: JsonValue = json5::from_str(payload).map_err(InputError::Json)?;
            ConfigMap::from_json(&json).ok_or(InputError::ConfigShape)?
        }
        None => ConfigMap::new(),
    };

    let declaration = if batch {
        let json: JsonValue = json5::from_str(name).map_err(InputError::Json)?;
        match Declaration::from_json(&json) {
            Some(declaration @ Declaration::Batch(_)) => declaration,
            _ => return Err(InputError::BatchShape.into()),
        }
    } else {
        Declaration::single(name)
    };

    match shorthand::decode(context, declaration, config) {
        (Declaration::Single(name), config) => output::print_decoded(mode, &name, &config),
        (Declaration::Batch(entries), _) => output::print_batch(mode, &entries),
    }

    Ok(())
}
