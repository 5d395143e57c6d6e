//! The endpoint identifier value and its scheme-specific part.

use std::fmt;
use std::str::FromStr;

use ciborium::Value;

use crate::error::EidError;
use crate::parse;
use crate::scheme::Scheme;
use crate::wire::value_kind;

// =============================================================================
// Scheme-Specific Part
// =============================================================================

/// The scheme-specific part (SSP) of an EID.
///
/// Which shapes are legal depends on the scheme:
/// - dtn: [`Ssp::Number`] holding 0 (the none endpoint) or [`Ssp::Name`]
/// - ipn: [`Ssp::Pair`] of node and service number, both >= 1
/// - unknown schemes: any shape, including [`Ssp::Opaque`] for data that
///   fits none of the others
#[derive(Debug, Clone, PartialEq)]
pub enum Ssp {
    /// An unsigned integer. Under dtn, 0 marks the none endpoint.
    Number(u64),

    /// A textual name, stored verbatim.
    Name(String),

    /// An ipn `(node, service)` pair.
    Pair(u64, u64),

    /// Decoded data of any other shape, kept as-is.
    Opaque(Value),
}

impl Ssp {
    /// The none-marker of the dtn scheme.
    pub const NONE: Self = Self::Number(0);
}

// =============================================================================
// Endpoint Identifier
// =============================================================================

/// An endpoint identifier.
///
/// Values are immutable. The validated constructors ([`EndpointId::new`],
/// [`EndpointId::parse`], [`EndpointId::dtn`], [`EndpointId::ipn`]) only ever
/// produce dtn or ipn EIDs; unknown schemes can only enter through
/// [`crate::normalize`].
#[derive(Debug, Clone, PartialEq)]
pub struct EndpointId {
    scheme: Scheme,
    ssp: Ssp,
}

impl EndpointId {
    /// Returns the `dtn:none` endpoint.
    #[must_use]
    pub const fn none() -> Self {
        Self {
            scheme: Scheme::Dtn,
            ssp: Ssp::NONE,
        }
    }

    /// Creates an EID from a scheme name and a scheme-specific part.
    ///
    /// `("dtn", "none")` yields the none endpoint, any other dtn SSP is taken
    /// as a literal name. ipn SSPs must match `<node>.<service>` with both
    /// numbers in `1..=u64::MAX`.
    pub fn new(scheme_name: &str, ssp: &str) -> Result<Self, EidError> {
        parse::from_parts(scheme_name, ssp)
    }

    /// Parses an EID from its full text form, e.g. `dtn://node/` or `ipn:1.2`.
    ///
    /// The scheme name ends at the first ':'.
    pub fn parse(s: &str) -> Result<Self, EidError> {
        parse::from_uri(s)
    }

    /// Creates a dtn EID. The name "none" yields the none endpoint.
    #[must_use]
    pub fn dtn(name: impl Into<String>) -> Self {
        let name = name.into();
        if name == parse::DTN_NONE {
            return Self::none();
        }
        Self {
            scheme: Scheme::Dtn,
            ssp: Ssp::Name(name),
        }
    }

    /// Creates an ipn EID from a node and a service number.
    pub fn ipn(node: u64, service: u64) -> Result<Self, EidError> {
        if node == 0 || service == 0 {
            return Err(EidError::OutOfRange { node, service });
        }
        Ok(Self {
            scheme: Scheme::Ipn,
            ssp: Ssp::Pair(node, service),
        })
    }

    /// Assembles an EID without validation. Used by the wire normalizer.
    pub(crate) const fn from_raw(scheme: Scheme, ssp: Ssp) -> Self {
        Self { scheme, ssp }
    }

    /// Returns the scheme.
    #[must_use]
    pub const fn scheme(&self) -> Scheme {
        self.scheme
    }

    /// Returns the scheme-specific part.
    #[must_use]
    pub const fn ssp(&self) -> &Ssp {
        &self.ssp
    }

    /// Returns true for `dtn:none`.
    #[must_use]
    pub fn is_none(&self) -> bool {
        matches!((self.scheme, &self.ssp), (Scheme::Dtn, Ssp::Number(0)))
    }

    /// Returns the ipn node number.
    #[must_use]
    pub fn node_number(&self) -> Option<u64> {
        match (self.scheme, &self.ssp) {
            (Scheme::Ipn, Ssp::Pair(node, _)) => Some(*node),
            _ => None,
        }
    }

    /// Returns the ipn service number.
    #[must_use]
    pub fn service_number(&self) -> Option<u64> {
        match (self.scheme, &self.ssp) {
            (Scheme::Ipn, Ssp::Pair(_, service)) => Some(*service),
            _ => None,
        }
    }

    /// Formats the EID as its text form.
    #[must_use]
    pub fn to_uri(&self) -> String {
        self.to_string()
    }
}

impl Default for EndpointId {
    fn default() -> Self {
        Self::none()
    }
}

impl fmt::Display for EndpointId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:", self.scheme)?;

        // Dispatch on the SSP shape rather than the scheme alone; decoded
        // values under unknown schemes can carry any shape.
        match &self.ssp {
            Ssp::Number(0) if self.scheme == Scheme::Dtn => f.write_str(parse::DTN_NONE),
            Ssp::Number(n) => write!(f, "{n}"),
            Ssp::Name(name) => f.write_str(name),
            Ssp::Pair(node, service) if self.scheme == Scheme::Ipn => {
                write!(f, "{node}.{service}")
            }
            Ssp::Pair(a, b) => write!(f, "[{a} {b}]"),
            Ssp::Opaque(value) => write!(f, "unknown {}: {:?}", value_kind(value), value),
        }
    }
}

impl FromStr for EndpointId {
    type Err = EidError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<&str> for EndpointId {
    type Error = EidError;

    fn try_from(s: &str) -> Result<Self, Self::Error> {
        Self::parse(s)
    }
}

impl TryFrom<String> for EndpointId {
    type Error = EidError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        Self::parse(&s)
    }
}

// =============================================================================
// Tests
// =============================================================================
