//! Request execution shared by the HTTP-backed senders.

use super::outcome::Outcome;
use crate::error::{AppError, AppResult, TransportError};
use reqwest::{RequestBuilder, Url};
use serde_json::Value;
use std::time::Instant;

/// Send `request` and map the response to an `Outcome` or a `TransportError`
///
/// Network failures and non-2xx statuses both become `AppError::Transport`.
pub(crate) async fn deliver(
    request: RequestBuilder,
    channel: &str,
    provider: &str,
) -> AppResult<Outcome> {
    let start = Instant::now();

    let response = request.send().await.map_err(|e| {
        tracing::warn!(channel, provider, error = %e, "transport unreachable");
        TransportError::new(channel, provider, e.to_string())
    })?;

    let status = response.status();
    let body = match response.text().await {
        Ok(text) => Some(text).filter(|text| !text.is_empty()),
        Err(e) => {
            tracing::warn!(
                channel,
                provider,
                status = status.as_u16(),
                error = %e,
                "failed to read response body"
            );
            None
        }
    };
    let elapsed = start.elapsed();

    if !status.is_success() {
        tracing::warn!(channel, provider, status = status.as_u16(), "transport rejected payload");
        let reason = body.unwrap_or_else(|| status.to_string());
        return Err(TransportError::new(channel, provider, reason)
            .with_status(status.as_u16())
            .into());
    }

    Ok(Outcome::new(channel, provider)
        .with_status(status.as_u16())
        .with_message_id(body.as_deref().and_then(extract_message_id))
        .with_response(body)
        .with_duration(elapsed))
}

/// Pull a provider message id out of a JSON response body
fn extract_message_id(body: &str) -> Option<String> {
    let json: Value = serde_json::from_str(body).ok()?;
    ["id", "message_id", "messageId"]
        .iter()
        .find_map(|key| match json.get(key)? {
            Value::String(s) => Some(s.clone()),
            Value::Number(n) => Some(n.to_string()),
            _ => None,
        })
}

/// Ensure `value` is an absolute http(s) URL
pub(crate) fn validate_http_url(field: &str, value: &str) -> AppResult<Url> {
    let url = Url::parse(value)
        .map_err(|_| AppError::validation(field, "Invalid URL format"))?;

    if url.scheme() != "https" && url.scheme() != "http" {
        return Err(AppError::validation(
            field,
            "URL must use http or https protocol",
        ));
    }

    Ok(url)
}

/// Ensure a credential or identity setting is present
pub(crate) fn require_setting(field: &str, value: &str) -> AppResult<()> {
    if value.trim().is_empty() {
        return Err(AppError::validation(field, "must not be empty"));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extract_message_id() {
        assert_eq!(extract_message_id(r#"{"id":"abc"}"#), Some("abc".to_string()));
        assert_eq!(extract_message_id(r#"{"message_id":17}"#), Some("17".to_string()));
        assert_eq!(extract_message_id(r#"{"messageId":"m-9"}"#), Some("m-9".to_string()));
        assert_eq!(extract_message_id(r#"{"code":200}"#), None);
        assert_eq!(extract_message_id("queued"), None);
    }

    #[test]
    fn test_validate_http_url() {
        assert!(validate_http_url("endpoint", "https://mail.example.com/v1/send").is_ok());
        assert!(validate_http_url("endpoint", "http://127.0.0.1:8025").is_ok());
        assert!(validate_http_url("endpoint", "ftp://example.com").is_err());
        assert!(validate_http_url("endpoint", "not-a-url").is_err());
        assert!(validate_http_url("endpoint", "").is_err());
    }

    #[test]
    fn test_require_setting() {
        assert!(require_setting("api_token", "secret").is_ok());
        assert!(matches!(
            require_setting("api_token", " "),
            Err(AppError::Validation { ref field, .. }) if field == "api_token"
        ));
    }
}
