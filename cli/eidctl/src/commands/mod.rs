//! CLI commands.

mod decode;
mod inspect;

use anyhow::Result;
use clap::{Parser, Subcommand};

use crate::config::Config;
use crate::output::OutputFormat;

/// eid - parse, render, encode, and decode DTN endpoint identifiers.
#[derive(Debug, Parser)]
#[command(name = "eid")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Output format. Defaults to EID_OUTPUT, then text.
    #[arg(long, global = true, value_enum)]
    format: Option<OutputFormat>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Parse an EID and show its structure and wire form.
    Parse(inspect::ParseCommand),

    /// Encode an EID to CBOR (hex).
    Encode(inspect::EncodeCommand),

    /// Decode a CBOR-encoded EID (hex) and render it.
    Decode(decode::DecodeCommand),

    /// Show the dtn:none endpoint.
    None,
}

impl Cli {
    pub fn run(self, config: &Config) -> Result<()> {
        let format = self.format.unwrap_or(config.output);

        match self.command {
            Commands::Parse(cmd) => cmd.run(format),
            Commands::Encode(cmd) => cmd.run(format),
            Commands::Decode(cmd) => cmd.run(format),
            Commands::None => inspect::report(&dtn_eid::EndpointId::none(), format),
        }
    }
}

#[cfg(test)]
mod tests {
    use clap::CommandFactory;

    use super::*;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_format_flag_is_global() {
        let cli = Cli::try_parse_from(["eid", "parse", "dtn:none", "--format", "json"]).unwrap();
        assert_eq!(cli.format, Some(OutputFormat::Json));
    }
}
