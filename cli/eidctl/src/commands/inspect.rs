//! Text-side commands: parse and encode.

use anyhow::{Context, Result};
use clap::Args;
use dtn_eid::EndpointId;
use tracing::debug;

use crate::error::CliError;
use crate::output::{print_report, print_value, EidReport, OutputFormat};

#[derive(Debug, Args)]
pub struct ParseCommand {
    /// EID in text form, e.g. `dtn://node/` or `ipn:1.2`.
    uri: String,
}

impl ParseCommand {
    pub fn run(self, format: OutputFormat) -> Result<()> {
        let eid = parse_uri(&self.uri)?;
        report(&eid, format)
    }
}

#[derive(Debug, Args)]
pub struct EncodeCommand {
    /// EID in text form.
    uri: String,
}

impl EncodeCommand {
    pub fn run(self, format: OutputFormat) -> Result<()> {
        let eid = parse_uri(&self.uri)?;
        let cbor = eid.encode_cbor().map_err(CliError::from)?;
        print_value("cbor_hex", &hex::encode(cbor), format);
        Ok(())
    }
}

pub(super) fn parse_uri(uri: &str) -> Result<EndpointId> {
    let eid = EndpointId::parse(uri)
        .map_err(CliError::from)
        .with_context(|| format!("failed to parse EID '{uri}'"))?;
    debug!(uri, scheme = %eid.scheme(), "parsed EID");
    Ok(eid)
}

pub(super) fn report(eid: &EndpointId, format: OutputFormat) -> Result<()> {
    let cbor = eid.encode_cbor().map_err(CliError::from)?;
    let report = EidReport::new(eid, &cbor).context("failed to build report")?;
    print_report(&report, format);
    Ok(())
}
