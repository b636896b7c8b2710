//! HTTP response types for the Stingray API client.
//!
//! This module provides the [`HttpResponse`] type: a fully read response
//! from the appliance that stays available to callers on success and on
//! failure alike.

use std::collections::HashMap;

use reqwest::Method;
use url::Url;

/// A fully read HTTP response from the Stingray API.
///
/// The body is kept as raw bytes; decoding it is the job of the resource
/// that asked for it. The request method and URL are retained so a failed
/// call can still be diagnosed.
#[derive(Clone, Debug)]
pub struct HttpResponse {
    /// The HTTP status code.
    pub code: u16,
    /// The method of the request that produced this response.
    pub method: Method,
    /// The URL of the request that produced this response.
    pub url: Url,
    /// Response headers, keyed by lowercase name (headers may repeat).
    pub headers: HashMap<String, Vec<String>>,
    /// The raw response body.
    pub body: Vec<u8>,
}

impl HttpResponse {
    /// Creates a new `HttpResponse`.
    #[must_use]
    pub const fn new(
        code: u16,
        method: Method,
        url: Url,
        headers: HashMap<String, Vec<String>>,
        body: Vec<u8>,
    ) -> Self {
        Self {
            code,
            method,
            url,
            headers,
            body,
        }
    }

    /// Returns `true` if the status code is in the 2xx range.
    #[must_use]
    pub const fn is_ok(&self) -> bool {
        self.code >= 200 && self.code <= 299
    }

    /// Returns the first value of the named header, matched case-insensitively.
    #[must_use]
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .get(&name.to_ascii_lowercase())
            .and_then(|values| values.first())
            .map(String::as_str)
    }

    /// Returns the body as text, replacing invalid UTF-8 sequences.
    #[must_use]
    pub fn text(&self) -> String {
        String::from_utf8_lossy(&self.body).into_owned()
    }

    /// Collects reqwest headers into the lowercase multi-map used here.
    pub(crate) fn collect_headers(
        headers: &reqwest::header::HeaderMap,
    ) -> HashMap<String, Vec<String>> {
        let mut result: HashMap<String, Vec<String>> = HashMap::new();
        for (name, value) in headers {
            let key = name.as_str().to_lowercase();
            let value = value.to_str().unwrap_or_default().to_string();
            result.entry(key).or_default().push(value);
        }
        result
    }
}
