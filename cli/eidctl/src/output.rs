//! Output formatting for CLI commands.

use std::str::FromStr;

use clap::ValueEnum;
use colored::Colorize;
use dtn_eid::{EndpointId, Scheme};
use serde::Serialize;

/// Output format.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable text.
    #[default]
    Text,
    /// JSON.
    Json,
}

impl FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        <Self as ValueEnum>::from_str(s, true)
    }
}

/// Everything the CLI knows about one EID.
#[derive(Debug, Serialize)]
pub struct EidReport {
    pub uri: String,
    pub scheme: String,
    pub scheme_code: u64,
    pub is_none: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub node: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub service: Option<u64>,
    /// `[scheme_code, ssp]` as it appears on the wire.
    pub wire: serde_json::Value,
    pub cbor_hex: String,
}

impl EidReport {
    pub fn new(eid: &EndpointId, cbor: &[u8]) -> serde_json::Result<Self> {
        let scheme = eid.scheme();
        Ok(Self {
            uri: eid.to_uri(),
            scheme: scheme_label(scheme),
            scheme_code: scheme.code(),
            is_none: eid.is_none(),
            node: eid.node_number(),
            service: eid.service_number(),
            wire: serde_json::to_value(eid)?,
            cbor_hex: hex::encode(cbor),
        })
    }
}

fn scheme_label(scheme: Scheme) -> String {
    scheme.name().map(str::to_string).unwrap_or_else(|| scheme.to_string())
}

/// Print a full report in the specified format.
pub fn print_report(report: &EidReport, format: OutputFormat) {
    match format {
        OutputFormat::Text => {
            print_field("uri", &report.uri);
            print_field(
                "scheme",
                &format!("{} ({})", report.scheme, report.scheme_code),
            );
            if let (Some(node), Some(service)) = (report.node, report.service) {
                print_field("node", &node.to_string());
                print_field("service", &service.to_string());
            }
            if report.is_none {
                print_field("none", "yes");
            }
            print_field("wire", &report.wire.to_string());
            print_field("cbor", &report.cbor_hex);
        }
        OutputFormat::Json => println!("{}", format_json(report)),
    }
}

/// Print a single value, keyed by `key` in JSON output.
pub fn print_value(key: &str, value: &str, format: OutputFormat) {
    match format {
        OutputFormat::Text => println!("{value}"),
        OutputFormat::Json => println!("{}", format_json(&serde_json::json!({ key: value }))),
    }
}

fn print_field(label: &str, value: &str) {
    println!("{:>8} {}", format!("{label}:").bold(), value);
}

fn format_json<T: Serialize>(data: &T) -> String {
    serde_json::to_string_pretty(data).unwrap_or_else(|_| "{}".to_string())
}
