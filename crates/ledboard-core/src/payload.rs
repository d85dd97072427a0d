use crate::error::ControllerError;
use base64::engine::general_purpose::STANDARD;
use base64::Engine;

/// Encode an opaque payload document for transport as a single command
/// line argument.
///
/// Compact JSON, then standard base64: the result contains no quotes,
/// whitespace or shell metacharacters regardless of payload content.
/// The renderer decodes and validates it on its side.
pub fn encode_payload(payload: &serde_json::Value) -> Result<String, ControllerError> {
    let bytes = serde_json::to_vec(payload)?;
    Ok(STANDARD.encode(bytes))
}
