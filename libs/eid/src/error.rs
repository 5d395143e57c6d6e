//! Error types for EID parsing and wire normalization.

use thiserror::Error;

/// Errors that can occur when parsing, decoding, or constructing EIDs.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum EidError {
    /// The EID string is empty.
    #[error("EID cannot be empty")]
    Empty,

    /// The EID is missing the ':' between scheme name and SSP.
    #[error("EID missing ':' separator")]
    MissingSeparator,

    /// The scheme name is neither "dtn" nor "ipn".
    #[error("unknown scheme '{scheme}': expected 'dtn' or 'ipn'")]
    UnknownScheme { scheme: String },

    /// The ipn SSP does not match `<node>.<service>`.
    #[error("malformed ipn SSP '{ssp}': expected '<node>.<service>'")]
    MalformedIpn { ssp: String },

    /// A digit run does not fit into 64 bits.
    #[error("numeric overflow: '{digits}' exceeds the 64-bit unsigned range")]
    NumericOverflow { digits: String },

    /// An ipn node or service number is zero.
    #[error("ipn node and service numbers must be >= 1, got {node}.{service}")]
    OutOfRange { node: u64, service: u64 },

    /// Decoded wire data does not have the shape its scheme requires.
    #[error("malformed EID wire shape: {message}")]
    MalformedWireShape { message: String },

    /// The CBOR codec failed.
    #[error("CBOR error: {0}")]
    Cbor(String),
}

impl EidError {
    pub(crate) fn malformed_wire(message: impl Into<String>) -> Self {
        Self::MalformedWireShape {
            message: message.into(),
        }
    }

    /// Returns true if this error came from parsing text.
    pub fn is_parse_error(&self) -> bool {
        matches!(
            self,
            EidError::Empty
                | EidError::MissingSeparator
                | EidError::UnknownScheme { .. }
                | EidError::MalformedIpn { .. }
                | EidError::NumericOverflow { .. }
                | EidError::OutOfRange { .. }
        )
    }

    /// Returns true if this error came from decoding or normalizing wire data.
    pub fn is_wire_error(&self) -> bool {
        matches!(self, EidError::MalformedWireShape { .. } | EidError::Cbor(_))
    }
}
