//! Decode a CBOR-encoded EID.

use anyhow::{Context, Result};
use clap::Args;
use dtn_eid::EndpointId;

use crate::error::CliError;
use crate::output::{print_value, OutputFormat};

#[derive(Debug, Args)]
pub struct DecodeCommand {
    /// CBOR bytes as hex, e.g. `820100` for dtn:none. Whitespace is ignored.
    hex: String,

    /// Show the full report instead of just the rendered EID.
    #[arg(long)]
    verbose: bool,
}

impl DecodeCommand {
    pub fn run(self, format: OutputFormat) -> Result<()> {
        let eid = decode_hex(&self.hex)?;

        if self.verbose {
            super::inspect::report(&eid, format)
        } else {
            print_value("uri", &eid.to_uri(), format);
            Ok(())
        }
    }
}

fn decode_hex(input: &str) -> Result<EndpointId> {
    let compact: String = input.chars().filter(|c| !c.is_whitespace()).collect();
    let bytes = hex::decode(&compact).map_err(CliError::from)?;
    EndpointId::decode_cbor(&bytes)
        .map_err(CliError::from)
        .with_context(|| format!("failed to decode EID from {compact}"))
}
