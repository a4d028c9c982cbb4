use serde::Serialize;

use crate::error::{ReportError, Result};
use crate::transport::Transport;

/// Introspection query asking for the input-field names of the mutation's
/// input type. The probe is mandatory: the reporter always asks before
/// compressing rather than guessing and retrying.
const CHECK_COMPRESSED_QUERY: &str = r#"query {
  __type(name: "CreateArtifactInput") {
    inputFields {
      name
    }
  }
}"#;

const COMPRESSED_FIELD: &str = "compressed";

/// Optional server-side features discovered at runtime. Derived once per
/// invocation, never cached across invocations, never assumed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CapabilitySet {
    pub compression_supported: bool,
}

#[derive(Serialize)]
struct IntrospectionQuery {
    query: &'static str,
}

/// Ask the endpoint which input fields the mutation accepts. Any transport
/// or decode failure here is fatal to the whole operation.
pub fn probe(transport: &dyn Transport, endpoint: &str) -> Result<CapabilitySet> {
    let body = serde_json::to_vec(&IntrospectionQuery {
        query: CHECK_COMPRESSED_QUERY,
    })?;
    let raw = transport.post(endpoint, body)?;
    let value: serde_json::Value = serde_json::from_slice(&raw)
        .map_err(|err| ReportError::Undecodable(format!("capability probe: {err}")))?;
    Ok(parse_capabilities(&value))
}

/// Extract the capability set from an introspection reply. A missing or
/// oddly shaped `inputFields` list means no optional capability.
pub(crate) fn parse_capabilities(response: &serde_json::Value) -> CapabilitySet {
    let compression_supported = response
        .pointer("/data/__type/inputFields")
        .and_then(|value| value.as_array())
        .is_some_and(|fields| {
            fields.iter().any(|field| {
                field.get("name").and_then(|name| name.as_str()) == Some(COMPRESSED_FIELD)
            })
        });

    CapabilitySet {
        compression_supported,
    }
}
