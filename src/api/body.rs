use axum::body::Bytes;
use http::{header, HeaderMap};
use serde::de::DeserializeOwned;

use crate::error::RestError;

/// Decodes a create/update body.
///
/// Requests without a JSON content type, or with an empty body, decode to
/// `T::default()` so that missing input reaches the store's own checks. Only
/// a JSON body that fails to parse is rejected.
pub fn decode_or_default<T>(headers: &HeaderMap, body: &Bytes) -> Result<T, RestError>
where
    T: DeserializeOwned + Default,
{
    if !is_json(headers) || body.iter().all(u8::is_ascii_whitespace) {
        return Ok(T::default());
    }

    Ok(serde_json::from_slice(body)?)
}

fn is_json(headers: &HeaderMap) -> bool {
    let Some(content_type) = headers
        .get(header::CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
    else {
        return false;
    };

    let mime = content_type.split(';').next().unwrap_or_default().trim();
    mime.eq_ignore_ascii_case("application/json")
}
