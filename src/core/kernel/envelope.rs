use crate::core::errors::KatapultError;
use serde::Deserialize;
use serde_json::value::RawValue;

/// Literal `status` value the API uses to flag an application-level failure
pub const STATUS_ERROR: &str = "error";

/// Uniform v3 response wrapper: `{ status, data?, message?, type?, meta? }`.
///
/// `data` and `meta` are kept as raw JSON so the caller picks the target shape;
/// the same envelope carries objects, arrays, or `null` depending on the endpoint.
#[derive(Debug, Default, Deserialize)]
pub struct Envelope {
    #[serde(default)]
    pub status: String,
    #[serde(default)]
    pub data: Option<Box<RawValue>>,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(rename = "type", default)]
    pub error_type: Option<String>,
    #[serde(default)]
    pub meta: Option<Box<RawValue>>,
}

impl Envelope {
    /// Parse a response body. Fails on malformed JSON or a document that is not
    /// an object; field values are not validated.
    pub fn parse(body: &[u8]) -> Result<Self, KatapultError> {
        // serde-derived structs also deserialize from arrays
        let first = body.iter().find(|byte| !byte.is_ascii_whitespace());
        if first != Some(&b'{') {
            return Err(KatapultError::Decode(
                "Failed to parse response envelope: expected a JSON object".to_string(),
            ));
        }

        serde_json::from_slice(body).map_err(|e| {
            KatapultError::Decode(format!("Failed to parse response envelope: {}", e))
        })
    }

    pub fn is_error(&self) -> bool {
        self.status == STATUS_ERROR
    }
}
