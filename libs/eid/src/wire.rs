//! Wire form of EIDs: a two-element array `[scheme_code, ssp]`.
//!
//! A generic CBOR decoder has no notion of SSP shapes; it yields plain
//! integers, strings, and arrays. [`normalize`] re-types that output into the
//! shapes the text parser produces, so decoded and parsed EIDs compare equal.

use ciborium::Value;
use serde::{de, Deserialize, Deserializer, Serialize, Serializer};
use tracing::debug;

use crate::error::EidError;
use crate::scheme::Scheme;
use crate::types::{EndpointId, Ssp};

/// Converts a decoded scheme code and SSP into an EID.
///
/// Only re-types; no range or grammar checks are applied. Shapes that
/// contradict a registered scheme (dtn: number or name, ipn: pair of
/// integers) are rejected. Under unknown schemes any shape is kept.
pub fn normalize(scheme: &Value, ssp_value: &Value) -> Result<EndpointId, EidError> {
    let code = as_u64(scheme).ok_or_else(|| {
        reject(format!(
            "scheme code must be an unsigned integer, got {}",
            value_kind(scheme)
        ))
    })?;
    let scheme = Scheme::from_code(code);

    let shaped = match ssp_value {
        Value::Integer(_) => as_u64(ssp_value).map(Ssp::Number),
        Value::Text(name) => Some(Ssp::Name(name.clone())),
        Value::Array(items) => match items.as_slice() {
            [node, service] => as_u64(node)
                .zip(as_u64(service))
                .map(|(node, service)| Ssp::Pair(node, service)),
            _ => None,
        },
        _ => None,
    };

    match (scheme, shaped) {
        (Scheme::Dtn, Some(ssp @ (Ssp::Number(_) | Ssp::Name(_))))
        | (Scheme::Ipn, Some(ssp @ Ssp::Pair(..)))
        | (Scheme::Unknown(_), Some(ssp)) => Ok(EndpointId::from_raw(scheme, ssp)),
        (Scheme::Unknown(_), None) => {
            Ok(EndpointId::from_raw(scheme, Ssp::Opaque(ssp_value.clone())))
        }
        (scheme, _) => Err(reject(format!(
            "{} SSP cannot be {}",
            scheme,
            value_kind(ssp_value)
        ))),
    }
}

fn reject(message: String) -> EidError {
    debug!(%message, "rejected EID wire shape");
    EidError::malformed_wire(message)
}

fn as_u64(value: &Value) -> Option<u64> {
    value.as_integer().and_then(|int| u64::try_from(int).ok())
}

/// Short description of a generic value's shape for diagnostics.
pub(crate) fn value_kind(value: &Value) -> &'static str {
    match value {
        Value::Integer(_) => "integer",
        Value::Bytes(_) => "bytes",
        Value::Float(_) => "float",
        Value::Text(_) => "text",
        Value::Bool(_) => "bool",
        Value::Null => "null",
        Value::Tag(..) => "tag",
        Value::Array(_) => "array",
        Value::Map(_) => "map",
        _ => "value",
    }
}

impl EndpointId {
    /// Builds an EID from a decoded `[scheme_code, ssp]` array.
    pub fn from_wire(value: &Value) -> Result<Self, EidError> {
        match value {
            Value::Array(items) => match items.as_slice() {
                [scheme, ssp] => normalize(scheme, ssp),
                _ => Err(reject(format!(
                    "EID must be a 2-element array, got {} elements",
                    items.len()
                ))),
            },
            other => Err(reject(format!(
                "EID must be an array, got {}",
                value_kind(other)
            ))),
        }
    }

    /// Returns the `[scheme_code, ssp]` array in native SSP shapes.
    #[must_use]
    pub fn to_wire(&self) -> Value {
        let ssp = match self.ssp() {
            Ssp::Number(n) => Value::from(*n),
            Ssp::Name(name) => Value::Text(name.clone()),
            Ssp::Pair(node, service) => {
                Value::Array(vec![Value::from(*node), Value::from(*service)])
            }
            Ssp::Opaque(value) => value.clone(),
        };
        Value::Array(vec![Value::from(self.scheme().code()), ssp])
    }

    /// Encodes the EID as CBOR.
    pub fn encode_cbor(&self) -> Result<Vec<u8>, EidError> {
        let mut buf = Vec::new();
        ciborium::ser::into_writer(&self.to_wire(), &mut buf)
            .map_err(|e| EidError::Cbor(e.to_string()))?;
        Ok(buf)
    }

    /// Decodes an EID from CBOR.
    pub fn decode_cbor(bytes: &[u8]) -> Result<Self, EidError> {
        let value: Value =
            ciborium::de::from_reader(bytes).map_err(|e| EidError::Cbor(e.to_string()))?;
        Self::from_wire(&value)
    }
}

impl Serialize for EndpointId {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.to_wire().serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for EndpointId {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = Value::deserialize(deserializer)?;
        Self::from_wire(&value).map_err(de::Error::custom)
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn int(n: u64) -> Value {
        Value::from(n)
    }

    #[test]
    fn test_normalize_dtn_none() {
        let eid = normalize(&int(1), &int(0)).unwrap();
        assert_eq!(eid, EndpointId::none());
    }

    #[test]
    fn test_normalize_dtn_name() {
        let eid = normalize(&int(1), &Value::Text("//foo/".into())).unwrap();
        assert_eq!(eid, EndpointId::dtn("//foo/"));
    }

    #[test]
    fn test_normalize_ipn_pair() {
        let ssp = Value::Array(vec![int(3), int(4)]);
        let eid = normalize(&int(2), &ssp).unwrap();
        assert_eq!(eid, EndpointId::ipn(3, 4).unwrap());
    }

    #[test]
    fn test_normalize_skips_range_checks() {
        let ssp = Value::Array(vec![int(0), int(4)]);
        let eid = normalize(&int(2), &ssp).unwrap();
        assert_eq!(eid.ssp(), &Ssp::Pair(0, 4));
    }

    #[test]
    fn test_normalize_rejects_mismatched_shapes() {
        let cases = [
            (int(1), Value::Array(vec![int(1), int(2)])),
            (int(1), Value::Bytes(vec![1, 2])),
            (int(2), int(0)),
            (int(2), Value::Text("1.2".into())),
            (int(2), Value::Array(vec![int(1)])),
            (int(2), Value::Array(vec![int(1), int(2), int(3)])),
            (int(2), Value::Array(vec![int(1), Value::Text("2".into())])),
            (int(1), Value::Integer((-1i64).into())),
        ];
        for (scheme, ssp) in cases {
            let err = normalize(&scheme, &ssp).unwrap_err();
            assert!(err.is_wire_error(), "{scheme:?} {ssp:?} -> {err}");
        }
    }

    #[test]
    fn test_normalize_rejects_bad_scheme_code() {
        assert!(matches!(
            normalize(&Value::Text("dtn".into()), &int(0)),
            Err(EidError::MalformedWireShape { .. })
        ));
        assert!(normalize(&Value::Integer((-2i64).into()), &int(0)).is_err());
    }

    #[test]
    fn test_normalize_unknown_scheme_keeps_any_shape() {
        let eid = normalize(&int(9), &Value::Array(vec![int(1), int(2)])).unwrap();
        assert_eq!(eid.ssp(), &Ssp::Pair(1, 2));

        let eid = normalize(&int(9), &Value::Bytes(vec![0xde, 0xad])).unwrap();
        assert_eq!(eid.ssp(), &Ssp::Opaque(Value::Bytes(vec![0xde, 0xad])));
        assert!(eid.to_string().starts_with("unknown_9:unknown bytes: "));
    }

    #[test]
    fn test_from_wire_requires_pair() {
        assert!(EndpointId::from_wire(&int(1)).is_err());
        assert!(EndpointId::from_wire(&Value::Array(vec![int(1)])).is_err());
        assert!(EndpointId::from_wire(&Value::Array(vec![int(1), int(0), int(0)])).is_err());
    }

    #[test]
    fn test_to_wire_shapes() {
        assert_eq!(
            EndpointId::none().to_wire(),
            Value::Array(vec![int(1), int(0)])
        );
        assert_eq!(
            EndpointId::ipn(5, 6).unwrap().to_wire(),
            Value::Array(vec![int(2), Value::Array(vec![int(5), int(6)])])
        );
    }

    #[test]
    fn test_cbor_bytes_use_smallest_width() {
        assert_eq!(EndpointId::none().encode_cbor().unwrap(), vec![0x82, 0x01, 0x00]);
        assert_eq!(
            EndpointId::ipn(1, 1).unwrap().encode_cbor().unwrap(),
            vec![0x82, 0x02, 0x82, 0x01, 0x01]
        );
        assert_eq!(
            EndpointId::dtn("//a/").encode_cbor().unwrap(),
            vec![0x82, 0x01, 0x64, b'/', b'/', b'a', b'/']
        );
    }

    #[test]
    fn test_decode_garbage() {
        let err = EndpointId::decode_cbor(&[0xff]).unwrap_err();
        assert!(matches!(err, EidError::Cbor(_)));
    }

    #[test]
    fn test_json_serde_uses_wire_form() {
        let eid = EndpointId::ipn(7, 8).unwrap();
        let json = serde_json::to_string(&eid).unwrap();
        assert_eq!(json, "[2,[7,8]]");
        let parsed: EndpointId = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, eid);

        let parsed: EndpointId = serde_json::from_str("[1,0]").unwrap();
        assert!(parsed.is_none());
    }

    #[test]
    fn test_json_serde_rejects_mismatched_shape() {
        let result: Result<EndpointId, _> = serde_json::from_str("[2,\"1.2\"]");
        assert!(result.is_err());
    }
}
