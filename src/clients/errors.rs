//! Error types for Stingray API communication.
//!
//! # Error Handling
//!
//! - [`ErrorResponse`]: The appliance answered with a non-2xx status
//! - [`ClientError`]: Unified error type returned by every client verb
//!
//! Wherever a response was received, the error keeps it, so the caller can
//! still inspect status and headers through [`ClientError::response`].
//!
//! # Example
//!
//! ```rust,ignore
//! use stingray_api::clients::ClientError;
//!
//! match client.get(&mut pool).await {
//!     Ok(response) => println!("Fetched with status {}", response.code),
//!     Err(ClientError::Response(e)) => {
//!         println!("API error {}: {} {}", e.status(), e.id, e.text);
//!     }
//!     Err(ClientError::Transport(e)) => println!("Transport error: {e}"),
//!     Err(e) => println!("Other error: {e}"),
//! }
//! ```

use serde::Deserialize;
use serde_json::Value;
use thiserror::Error;

use crate::clients::http_response::HttpResponse;

/// An error reported by the Stingray API.
///
/// Built from any response whose status falls outside 200-299. The body
/// fields are parsed on a best-effort basis: an empty or non-JSON body
/// leaves `id`, `text` and `info` empty, and only the status, method and
/// URL of the response remain reliable.
#[derive(Debug, Clone, Error)]
#[error(
    "{} {}: {} {} {} {}",
    .response.method,
    .response.url,
    .response.code,
    .id,
    .text,
    .info
)]
pub struct ErrorResponse {
    /// The HTTP response that caused this error.
    pub response: HttpResponse,
    /// Short machine-readable error code (`error_id`).
    pub id: String,
    /// Human-readable error message (`error_text`).
    pub text: String,
    /// Open-ended structured error details (`error_info`).
    pub info: Value,
}

#[derive(Debug, Default, Deserialize)]
struct ErrorBody {
    #[serde(default)]
    error_id: String,
    #[serde(default)]
    error_text: String,
    #[serde(default)]
    error_info: Value,
}

impl ErrorResponse {
    /// Builds an error from a response, parsing its body if possible.
    #[must_use]
    pub fn from_response(response: HttpResponse) -> Self {
        let body: ErrorBody = if response.body.is_empty() {
            ErrorBody::default()
        } else {
            serde_json::from_slice(&response.body).unwrap_or_default()
        };

        Self {
            response,
            id: body.error_id,
            text: body.error_text,
            info: body.error_info,
        }
    }

    /// Returns the HTTP status code of the failed response.
    #[must_use]
    pub const fn status(&self) -> u16 {
        self.response.code
    }
}

/// Checks a response for an API error.
///
/// A response is successful iff its status code is in 200-299. Anything else
/// produces an [`ErrorResponse`]; a body that does not parse never turns
/// into a second error.
///
/// # Errors
///
/// Returns [`ErrorResponse`] for any status outside 200-299.
pub fn check_response(response: &HttpResponse) -> Result<(), ErrorResponse> {
    if response.is_ok() {
        return Ok(());
    }

    let error = ErrorResponse::from_response(response.clone());
    tracing::warn!(
        method = %error.response.method,
        url = %error.response.url,
        status = error.response.code,
        error_id = %error.id,
        "Stingray API returned an error response"
    );
    Err(error)
}

/// Unified error type for all client operations.
#[derive(Debug, Error)]
pub enum ClientError {
    /// The API answered with a non-2xx status.
    #[error(transparent)]
    Response(#[from] ErrorResponse),

    /// Network, DNS, TLS or timeout failure before a response was received.
    #[error("Transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// A successful response arrived but its body could not be read.
    #[error("Failed to read response body from {} {}: {source}", .response.method, .response.url)]
    Body {
        /// The underlying transport error.
        source: reqwest::Error,
        /// The response, with an empty body.
        response: HttpResponse,
    },

    /// A request path could not be resolved against the namespace base URL.
    #[error("Invalid URL '{path}': {source}")]
    InvalidUrl {
        /// The path that failed to resolve.
        path: String,
        /// The underlying parse error.
        source: url::ParseError,
    },

    /// A namespace name could not be routed to a base URL.
    #[error("Invalid namespace '{namespace}'. Expected 'config' or 'statistics'.")]
    InvalidNamespace {
        /// The namespace name that was provided.
        namespace: String,
    },

    /// A resource could not be encoded for sending.
    #[error("Failed to serialize resource: {0}")]
    Serialization(#[source] serde_json::Error),

    /// The response body did not match the expected resource shape.
    #[error("Failed to decode response from {} {}: {source}", .response.method, .response.url)]
    Decode {
        /// The underlying JSON error.
        source: serde_json::Error,
        /// The response whose body failed to decode.
        response: HttpResponse,
    },
}

impl ClientError {
    /// Returns the raw response carried by this error, if one was received.
    #[must_use]
    pub const fn response(&self) -> Option<&HttpResponse> {
        match self {
            Self::Response(e) => Some(&e.response),
            Self::Decode { response, .. } | Self::Body { response, .. } => Some(response),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use reqwest::Method;
    use serde_json::json;
    use std::collections::HashMap;
    use url::Url;

    fn response(code: u16, body: &[u8]) -> HttpResponse {
        HttpResponse::new(
            code,
            Method::PUT,
            Url::parse("http://host/api/tm/3.5/config/active/pools/web").unwrap(),
            HashMap::new(),
            body.to_vec(),
        )
    }

    #[test]
    fn test_success_for_every_2xx_status() {
        for code in 200..=299 {
            assert!(check_response(&response(code, b"")).is_ok(), "{code}");
        }
    }

    #[test]
    fn test_error_for_every_non_2xx_status() {
        for code in (100..200).chain(300..600) {
            let error = check_response(&response(code, b"")).unwrap_err();
            assert_eq!(error.status(), code);
        }
    }

    #[test]
    fn test_error_body_fields_are_parsed() {
        let body = json!({
            "error_id": "resource.not_found",
            "error_text": "Resource 'web' does not exist",
            "error_info": {"resource": "web"}
        });
        let error =
            check_response(&response(404, body.to_string().as_bytes())).unwrap_err();

        assert_eq!(error.id, "resource.not_found");
        assert_eq!(error.text, "Resource 'web' does not exist");
        assert_eq!(error.info, json!({"resource": "web"}));
    }

    #[test]
    fn test_empty_body_still_produces_error() {
        let error = check_response(&response(503, b"")).unwrap_err();

        assert_eq!(error.status(), 503);
        assert!(error.id.is_empty());
        assert!(error.text.is_empty());
        assert!(error.info.is_null());
    }

    #[test]
    fn test_unparseable_body_degrades_to_status_only() {
        let error = check_response(&response(500, b"<html>Internal Error</html>")).unwrap_err();

        assert_eq!(error.status(), 500);
        assert!(error.id.is_empty());
        assert!(error.text.is_empty());
        assert_eq!(error.response.text(), "<html>Internal Error</html>");
    }

    #[test]
    fn test_error_display_includes_method_url_and_status() {
        let body = json!({"error_id": "json.invalid", "error_text": "bad body"});
        let error =
            check_response(&response(400, body.to_string().as_bytes())).unwrap_err();
        let message = error.to_string();

        assert!(message.starts_with("PUT http://host/api/tm/3.5/config/active/pools/web: 400"));
        assert!(message.contains("json.invalid"));
        assert!(message.contains("bad body"));
    }

    #[test]
    fn test_client_error_exposes_response() {
        let error: ClientError = check_response(&response(404, b"")).unwrap_err().into();
        assert_eq!(error.response().map(|r| r.code), Some(404));

        let error = ClientError::InvalidNamespace {
            namespace: "status".to_string(),
        };
        assert!(error.response().is_none());
        assert!(error.to_string().contains("status"));
    }

    #[test]
    fn test_decode_error_keeps_response() {
        let source = serde_json::from_slice::<Value>(b"{").unwrap_err();
        let error = ClientError::Decode {
            source,
            response: response(200, b"{"),
        };

        assert_eq!(error.response().map(|r| r.code), Some(200));
        assert!(error.to_string().starts_with("Failed to decode response from PUT"));
    }
}
