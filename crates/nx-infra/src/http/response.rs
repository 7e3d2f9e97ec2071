//! Response body helpers shared by every endpoint.

use nx_core::ports::ApiError;
use serde::de::DeserializeOwned;
use serde_json::Value;

/// Turn a transport failure into [`ApiError::Transport`]. The cause is kept for logs.
pub(crate) fn transport_error(err: reqwest::Error) -> ApiError {
    ApiError::Transport(err.to_string())
}

/// Read the body of a non-2xx response into [`ApiError::Status`].
///
/// `detail` is taken verbatim when it is a string; any other JSON value (such
/// as a list of validation errors) is rendered as compact JSON.
pub(crate) async fn status_error(response: reqwest::Response) -> ApiError {
    let status = response.status().as_u16();
    let detail = match response.bytes().await {
        Ok(body) => extract_detail(&body),
        Err(_) => None,
    };
    ApiError::Status { status, detail }
}

pub(crate) fn extract_detail(body: &[u8]) -> Option<String> {
    let value: Value = serde_json::from_slice(body).ok()?;
    match value.get("detail")? {
        Value::Null => None,
        Value::String(detail) => Some(detail.clone()),
        other => Some(other.to_string()),
    }
}

/// Decode a 2xx body. An empty body decodes as JSON `null`.
pub(crate) async fn decode_body<T: DeserializeOwned>(
    response: reqwest::Response,
) -> Result<T, ApiError> {
    let body = response.bytes().await.map_err(transport_error)?;
    let body: &[u8] = if body.iter().all(u8::is_ascii_whitespace) {
        b"null"
    } else {
        &body
    };
    serde_json::from_slice(body).map_err(|e| ApiError::Decode(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn string_detail_is_used_verbatim() {
        assert_eq!(
            extract_detail(br#"{"detail":"Username already registered"}"#),
            Some("Username already registered".to_string())
        );
    }

    #[test]
    fn structured_detail_is_compacted() {
        let body = br#"{"detail": [ {"loc": ["body","abn"], "msg": "field required"} ]}"#;
        assert_eq!(
            extract_detail(body),
            Some(r#"[{"loc":["body","abn"],"msg":"field required"}]"#.to_string())
        );
    }

    #[test]
    fn no_detail_or_no_json_gives_none() {
        assert_eq!(extract_detail(br#"{"error":"nope"}"#), None);
        assert_eq!(extract_detail(br#"{"detail":null}"#), None);
        assert_eq!(extract_detail(b"<html>502 Bad Gateway</html>"), None);
        assert_eq!(extract_detail(b""), None);
    }
}
