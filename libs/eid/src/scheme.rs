//! URI scheme registry.

use std::fmt;

/// Scheme code of the "dtn" URI scheme.
pub const SCHEME_DTN: u64 = 1;

/// Scheme code of the "ipn" URI scheme (RFC 6260).
pub const SCHEME_IPN: u64 = 2;

/// The naming scheme of an EID.
///
/// Codes other than [`SCHEME_DTN`] and [`SCHEME_IPN`] are kept as
/// [`Scheme::Unknown`] so that decoded bundles from newer peers survive a
/// decode/encode cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Scheme {
    Dtn,
    Ipn,
    Unknown(u64),
}

impl Scheme {
    /// Maps a wire scheme code to a scheme.
    #[must_use]
    pub const fn from_code(code: u64) -> Self {
        match code {
            SCHEME_DTN => Scheme::Dtn,
            SCHEME_IPN => Scheme::Ipn,
            other => Scheme::Unknown(other),
        }
    }

    /// Returns the wire scheme code.
    #[must_use]
    pub const fn code(&self) -> u64 {
        match self {
            Scheme::Dtn => SCHEME_DTN,
            Scheme::Ipn => SCHEME_IPN,
            Scheme::Unknown(code) => *code,
        }
    }

    /// Maps a URI scheme name to a scheme. Only registered names resolve.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "dtn" => Some(Scheme::Dtn),
            "ipn" => Some(Scheme::Ipn),
            _ => None,
        }
    }

    /// Returns the URI scheme name, if registered.
    #[must_use]
    pub const fn name(&self) -> Option<&'static str> {
        match self {
            Scheme::Dtn => Some("dtn"),
            Scheme::Ipn => Some("ipn"),
            Scheme::Unknown(_) => None,
        }
    }

    /// Returns true if this scheme has a registered name.
    #[must_use]
    pub const fn is_known(&self) -> bool {
        !matches!(self, Scheme::Unknown(_))
    }
}

impl fmt::Display for Scheme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.name() {
            Some(name) => f.write_str(name),
            None => write!(f, "unknown_{}", self.code()),
        }
    }
}
