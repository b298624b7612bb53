use crate::core::errors::{ApiError, KatapultError};
use crate::core::kernel::envelope::Envelope;
use crate::core::types::Meta;
use serde::de::DeserializeOwned;
use serde_json::value::RawValue;
use tracing::warn;

/// Successful outcome of one call
#[derive(Debug, Clone, PartialEq)]
pub struct Decoded<T> {
    /// `None` when the envelope carried no `data` (or `data: null`)
    pub data: Option<T>,
    pub meta: Option<Meta>,
}

/// Classify a raw response and decode its payload.
///
/// Order matters: a malformed envelope fails before anything else, then any
/// non-2xx status, then a 2xx envelope flagged `status: "error"`. Only the
/// success path hands its `meta` back for promotion to the client's snapshot;
/// failing calls carry theirs on the [`ApiError`].
pub fn decode_response<T: DeserializeOwned>(
    status_code: u16,
    body: &[u8],
) -> Result<Decoded<T>, KatapultError> {
    let envelope = Envelope::parse(body)?;
    let meta = parse_meta(envelope.meta.as_deref());

    if !(200..300).contains(&status_code) || envelope.is_error() {
        return Err(into_api_error(status_code, envelope, meta, body).into());
    }

    let data = envelope
        .data
        .map(|raw| {
            serde_json::from_str(raw.get()).map_err(|e| {
                KatapultError::Decode(format!("Failed to decode response data: {}", e))
            })
        })
        .transpose()?;

    Ok(Decoded { data, meta })
}

/// Rate-limit telemetry is best-effort: a `meta` of the wrong shape is dropped
fn parse_meta(raw: Option<&RawValue>) -> Option<Meta> {
    let raw = raw?;
    match serde_json::from_str(raw.get()) {
        Ok(meta) => Some(meta),
        Err(e) => {
            warn!(error = %e, "Ignoring malformed rate-limit meta");
            None
        }
    }
}

fn into_api_error(
    status_code: u16,
    envelope: Envelope,
    meta: Option<Meta>,
    body: &[u8],
) -> ApiError {
    let message = envelope
        .message
        .filter(|message| !message.is_empty())
        .unwrap_or_else(|| String::from_utf8_lossy(body).into_owned());

    ApiError::new(status_code, message)
        .with_type(envelope.error_type.unwrap_or_default())
        .with_meta(meta)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::{Deserialize, Serialize};

    #[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
    struct Item {
        id: String,
        #[serde(default)]
        name: Option<String>,
    }

    const META: Meta = Meta {
        token_count: 9999,
        last_refill_time: 0,
    };

    #[test]
    fn test_success_decodes_object() {
        let body = br#"{"status":"success","data":{"id":"123","name":"test"},"meta":{"token_count":9999,"last_refill_time":0}}"#;
        let decoded: Decoded<Item> = decode_response(200, body).unwrap();
        assert_eq!(
            decoded.data,
            Some(Item {
                id: "123".to_string(),
                name: Some("test".to_string())
            })
        );
        assert_eq!(decoded.meta, Some(META));
    }

    #[test]
    fn test_success_decodes_list_in_order() {
        let body = br#"{"status":"success","data":[{"id":"job1"},{"id":"job2"}]}"#;
        let decoded: Decoded<Vec<Item>> = decode_response(200, body).unwrap();
        let ids: Vec<_> = decoded.data.unwrap().into_iter().map(|item| item.id).collect();
        assert_eq!(ids, vec!["job1", "job2"]);
        assert_eq!(decoded.meta, None);
    }

    #[test]
    fn test_round_trip_through_envelope() {
        let item = Item {
            id: "n1".to_string(),
            name: None,
        };
        let body = serde_json::to_vec(&serde_json::json!({
            "status": "success",
            "data": item,
        }))
        .unwrap();
        let decoded: Decoded<Item> = decode_response(201, &body).unwrap();
        assert_eq!(decoded.data, Some(item));
    }

    #[test]
    fn test_missing_or_null_data_leaves_target_empty() {
        let absent: Decoded<Item> = decode_response(200, br#"{"status":"success"}"#).unwrap();
        assert!(absent.data.is_none());

        let null: Decoded<Item> =
            decode_response(200, br#"{"status":"success","data":null}"#).unwrap();
        assert!(null.data.is_none());
    }

    #[test]
    fn test_incompatible_data_is_decode_error() {
        let result: Result<Decoded<Item>, _> =
            decode_response(200, br#"{"status":"success","data":[1,2]}"#);
        assert!(matches!(result, Err(KatapultError::Decode(msg)) if msg.contains("data")));
    }

    #[test]
    fn test_http_error_uses_envelope_fields() {
        let body = br#"{"status":"error","type":"not_found","message":"not found","meta":{"token_count":5,"last_refill_time":7}}"#;
        let err = decode_response::<Item>(404, body).unwrap_err();
        let api = err.as_api_error().unwrap();
        assert_eq!(api.status_code, 404);
        assert_eq!(api.error_type, "not_found");
        assert_eq!(api.message, "not found");
        assert_eq!(
            api.meta,
            Some(Meta {
                token_count: 5,
                last_refill_time: 7
            })
        );
    }

    #[test]
    fn test_http_error_wins_over_success_status() {
        let err =
            decode_response::<Item>(500, br#"{"status":"success","data":{"id":"x"}}"#).unwrap_err();
        assert_eq!(err.status_code(), Some(500));
    }

    #[test]
    fn test_http_error_without_message_falls_back_to_body() {
        let body = br#"{"status":"error"}"#;
        let err = decode_response::<Item>(503, body).unwrap_err();
        let api = err.as_api_error().unwrap();
        assert_eq!(api.message, r#"{"status":"error"}"#);
        assert!(api.error_type.is_empty());
    }

    #[test]
    fn test_envelope_error_inside_2xx() {
        let body = br#"{"status":"error","type":"invalid_request","message":"bad node"}"#;
        let err = decode_response::<Item>(200, body).unwrap_err();
        let api = err.as_api_error().unwrap();
        assert_eq!(api.status_code, 200);
        assert!(api.is_type("invalid_request"));
        assert_eq!(api.message, "bad node");
    }

    #[test]
    fn test_unknown_status_with_2xx_is_success() {
        let decoded: Decoded<Item> =
            decode_response(200, br#"{"status":"queued","data":{"id":"q"}}"#).unwrap();
        assert_eq!(decoded.data.map(|item| item.id), Some("q".to_string()));
    }

    #[test]
    fn test_malformed_meta_is_ignored() {
        let body = br#"{"status":"success","data":{"id":"1"},"meta":"soon"}"#;
        let decoded: Decoded<Item> = decode_response(200, body).unwrap();
        assert!(decoded.meta.is_none());
        assert!(decoded.data.is_some());

        let err = decode_response::<Item>(429, br#"{"status":"error","meta":[1]}"#).unwrap_err();
        assert!(err.as_api_error().unwrap().meta.is_none());
    }

    #[test]
    fn test_malformed_body_short_circuits_even_on_http_error() {
        let err = decode_response::<Item>(502, b"<html>Bad Gateway</html>").unwrap_err();
        assert!(matches!(err, KatapultError::Decode(_)));
    }
}
