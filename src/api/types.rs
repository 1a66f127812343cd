use serde::{de::DeserializeOwned, Deserialize, Serialize};

use super::errors::{ApiError, ApiResult};

/// The `{status, message, payload}` envelope every list/get response is wrapped in.
#[derive(Debug, Serialize, Deserialize)]
pub struct RestPayload<T> {
    #[serde(default)]
    pub status: i32,
    #[serde(default)]
    pub message: String,
    pub payload: Option<T>,
}

impl<T> RestPayload<T> {
    pub fn ok(payload: T) -> Self {
        Self {
            status: 200,
            message: "OK".to_string(),
            payload: Some(payload),
        }
    }
}

/// Decodes a list envelope. A `null` or missing payload is an empty list.
pub fn decode_list<D, M>(body: &[u8]) -> ApiResult<Vec<M>>
where
    D: DeserializeOwned,
    M: From<D>,
{
    let envelope: RestPayload<Vec<D>> = serde_json::from_slice(body)?;
    Ok(envelope
        .payload
        .unwrap_or_default()
        .into_iter()
        .map(M::from)
        .collect())
}

/// Decodes a single-entity envelope. No payload is an error carrying the
/// envelope's status and message.
pub fn decode_one<D, M>(body: &[u8]) -> ApiResult<M>
where
    D: DeserializeOwned,
    M: From<D>,
{
    let envelope: RestPayload<D> = serde_json::from_slice(body)?;
    match envelope.payload {
        Some(payload) => Ok(M::from(payload)),
        None => Err(ApiError::EmptyPayload {
            status: envelope.status,
            message: envelope.message,
        }),
    }
}
