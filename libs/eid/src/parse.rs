//! Text parsing for the dtn and ipn schemes.

use tracing::trace;

use crate::error::EidError;
use crate::scheme::Scheme;
use crate::types::EndpointId;

/// The dtn SSP that denotes the null endpoint.
pub(crate) const DTN_NONE: &str = "none";

/// Parses `{scheme}:{ssp}`, splitting at the first ':'.
pub(crate) fn from_uri(s: &str) -> Result<EndpointId, EidError> {
    if s.is_empty() {
        return Err(EidError::Empty);
    }

    let Some((scheme_name, ssp)) = s.split_once(':') else {
        return Err(EidError::MissingSeparator);
    };

    from_parts(scheme_name, ssp)
}

/// Parses a scheme name and an SSP into a validated EID.
pub(crate) fn from_parts(scheme_name: &str, ssp: &str) -> Result<EndpointId, EidError> {
    let result = match Scheme::from_name(scheme_name) {
        Some(Scheme::Dtn) => Ok(EndpointId::dtn(ssp)),
        Some(Scheme::Ipn) => parse_ipn(ssp),
        _ => Err(EidError::UnknownScheme {
            scheme: scheme_name.to_string(),
        }),
    };

    result.inspect_err(|err| trace!(scheme = scheme_name, ssp, error = %err, "rejected EID"))
}

/// Parses `<node>.<service>` per RFC 6260, section 2.1.
fn parse_ipn(ssp: &str) -> Result<EndpointId, EidError> {
    let Some((node, service)) = ssp
        .split_once('.')
        .filter(|(node, service)| is_digit_run(node) && is_digit_run(service))
    else {
        return Err(EidError::MalformedIpn {
            ssp: ssp.to_string(),
        });
    };

    let node = parse_number(node)?;
    let service = parse_number(service)?;

    EndpointId::ipn(node, service)
}

fn is_digit_run(s: &str) -> bool {
    !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit())
}

/// Parses a non-empty run of ASCII digits. The only possible failure is overflow.
fn parse_number(digits: &str) -> Result<u64, EidError> {
    digits.parse::<u64>().map_err(|_| EidError::NumericOverflow {
        digits: digits.to_string(),
    })
}
