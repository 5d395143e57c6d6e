//! # dtn-eid
//!
//! Endpoint identifiers (EIDs) for the bundle protocol.
//!
//! ## Design Principles
//!
//! - An EID is a scheme code plus a scheme-specific part (SSP) whose shape
//!   depends on the scheme
//! - Text parsing is strict; rendering is total and never fails
//! - Values decoded from the wire are normalized back into the same shapes the
//!   text parser produces, so equality holds across text and binary roundtrips
//!
//! ## Text Format
//!
//! All EIDs render as `{scheme}:{ssp}`.
//!
//! Examples:
//! - `dtn:none` (the null endpoint)
//! - `dtn://node/service/`
//! - `ipn:23.42`
//!
//! ## Wire Format
//!
//! On the wire an EID is a two-element CBOR array `[scheme_code, ssp]`:
//! - `[1, 0]` for `dtn:none`
//! - `[1, "//node/service/"]` for a named dtn endpoint
//! - `[2, [23, 42]]` for `ipn:23.42`

mod error;
mod parse;
mod scheme;
pub mod serde_uri;
mod types;
mod wire;

pub use error::EidError;
pub use scheme::{Scheme, SCHEME_DTN, SCHEME_IPN};
pub use types::{EndpointId, Ssp};
pub use wire::normalize;

/// Re-export ciborium's generic value for callers feeding [`normalize`].
pub use ciborium::Value;
