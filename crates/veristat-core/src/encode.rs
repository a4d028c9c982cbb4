use base64::Engine as _;
use base64::engine::general_purpose::STANDARD as BASE64;

use crate::capability::CapabilitySet;
use crate::error::Result;

/// Fixed zstd level. Artifacts are reported once per build, not on a hot
/// path, so size wins over speed; the level is not caller-tunable to keep
/// the wire contract deterministic.
const COMPRESSION_LEVEL: i32 = 20;

/// Metadata value the service expects alongside a compressed payload.
const COMPRESSED_FLAG: &str = "True";

/// Result of conditionally encoding the artifact value for transport.
#[derive(Debug, Clone, PartialEq)]
pub struct EncodedPayload {
    pub data: String,
    pub metadata_patch: serde_json::Map<String, serde_json::Value>,
}

/// Encode the raw artifact value according to the probed capability set.
///
/// Without compression support the value passes through unmodified with an
/// empty patch. With it, the value is zstd-compressed then base64-encoded
/// (the JSON transport cannot carry arbitrary bytes) and the patch carries
/// the compression flag so the service knows to decompress.
pub fn encode(raw: &str, caps: &CapabilitySet) -> Result<EncodedPayload> {
    if !caps.compression_supported {
        return Ok(EncodedPayload {
            data: raw.to_string(),
            metadata_patch: serde_json::Map::new(),
        });
    }

    let compressed = zstd::encode_all(raw.as_bytes(), COMPRESSION_LEVEL)?;

    let mut metadata_patch = serde_json::Map::new();
    metadata_patch.insert(
        "compressed".to_string(),
        serde_json::Value::String(COMPRESSED_FLAG.to_string()),
    );

    Ok(EncodedPayload {
        data: BASE64.encode(compressed),
        metadata_patch,
    })
}
