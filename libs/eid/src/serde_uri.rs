//! Serde helpers for (de)serializing an EID as its text form.
//!
//! The default `Serialize`/`Deserialize` impls of [`EndpointId`] use the wire
//! array. Use this module on fields that should read as `"dtn://node/"`:
//!
//! ```ignore
//! #[derive(Serialize, Deserialize)]
//! struct Route {
//!     #[serde(with = "dtn_eid::serde_uri")]
//!     destination: EndpointId,
//! }
//! ```

use serde::{de, Deserialize, Deserializer, Serializer};

use crate::types::EndpointId;

pub fn serialize<S>(eid: &EndpointId, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    serializer.collect_str(eid)
}

pub fn deserialize<'de, D>(deserializer: D) -> Result<EndpointId, D::Error>
where
    D: Deserializer<'de>,
{
    let s = String::deserialize(deserializer)?;
    EndpointId::parse(&s).map_err(de::Error::custom)
}

#[cfg(test)]
mod tests {
    use serde::{Deserialize, Serialize};

    use super::*;

    #[derive(Debug, PartialEq, Serialize, Deserialize)]
    struct Route {
        #[serde(with = "crate::serde_uri")]
        destination: EndpointId,
    }

    #[test]
    fn test_json_roundtrip() {
        let route = Route {
            destination: EndpointId::ipn(12, 3).unwrap(),
        };
        let json = serde_json::to_string(&route).unwrap();
        assert_eq!(json, r#"{"destination":"ipn:12.3"}"#);
        let parsed: Route = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, route);
    }

    #[test]
    fn test_rejects_invalid_text() {
        let result: Result<Route, _> = serde_json::from_str(r#"{"destination":"ipn:0.3"}"#);
        let err = result.unwrap_err().to_string();
        assert!(err.contains(">= 1"), "{err}");
    }
}
