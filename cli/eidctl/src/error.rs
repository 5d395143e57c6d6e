//! Error handling and display for the CLI.

use colored::Colorize;
use dtn_eid::EidError;
use thiserror::Error;

/// CLI-specific errors.
#[derive(Debug, Error)]
pub enum CliError {
    #[error("input is not valid hex: {0}")]
    InvalidHex(#[from] hex::FromHexError),

    #[error(transparent)]
    Eid(#[from] EidError),
}

/// Print an error in a user-friendly format.
pub fn print_error(err: &anyhow::Error) {
    eprintln!("{} {:#}", "Error:".red().bold(), err);

    if let Some(hint) = hint_for(err) {
        eprintln!("\n{}", format!("Hint: {hint}").yellow());
    }
}

fn hint_for(err: &anyhow::Error) -> Option<&'static str> {
    let eid_err = match err.downcast_ref::<CliError>() {
        Some(CliError::InvalidHex(_)) => {
            return Some("Pass the CBOR bytes as a single hex string, e.g. `eid decode 820100`.")
        }
        Some(CliError::Eid(e)) => e,
        None => err.downcast_ref::<EidError>()?,
    };

    match eid_err {
        EidError::Empty | EidError::MissingSeparator => {
            Some("EIDs look like `<scheme>:<ssp>`, e.g. `dtn://node/` or `ipn:1.2`.")
        }
        EidError::UnknownScheme { .. } => Some("Supported schemes are `dtn` and `ipn`."),
        EidError::MalformedIpn { .. }
        | EidError::NumericOverflow { .. }
        | EidError::OutOfRange { .. } => Some(
            "ipn EIDs look like `ipn:<node>.<service>` with both numbers in 1..=18446744073709551615.",
        ),
        EidError::MalformedWireShape { .. } | EidError::Cbor(_) => {
            Some("Input must be a CBOR array `[scheme_code, ssp]`.")
        }
    }
}
