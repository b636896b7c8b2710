//! Response wrapper pairing decoded data with the raw HTTP response.
//!
//! [`ResourceResponse<T>`] implements `Deref<Target = T>`, so it can be used
//! like the inner value directly:
//!
//! ```rust,ignore
//! let pools = client.list_pools().await?;
//! for name in pools.iter() {
//!     println!("{name}");
//! }
//! println!("status: {}", pools.response().code);
//! ```

use std::ops::{Deref, DerefMut};

use crate::clients::HttpResponse;

/// Decoded data together with the response it was read from.
#[derive(Debug, Clone)]
pub struct ResourceResponse<T> {
    data: T,
    response: HttpResponse,
}

impl<T> ResourceResponse<T> {
    /// Creates a new `ResourceResponse`.
    #[must_use]
    pub const fn new(data: T, response: HttpResponse) -> Self {
        Self { data, response }
    }

    /// Consumes the response and returns the inner data.
    #[must_use]
    pub fn into_inner(self) -> T {
        self.data
    }

    /// Consumes the response and returns the data and raw response.
    #[must_use]
    pub fn into_parts(self) -> (T, HttpResponse) {
        (self.data, self.response)
    }

    /// Returns the raw HTTP response.
    #[must_use]
    pub const fn response(&self) -> &HttpResponse {
        &self.response
    }
}

impl<T> Deref for ResourceResponse<T> {
    type Target = T;

    fn deref(&self) -> &Self::Target {
        &self.data
    }
}

impl<T> DerefMut for ResourceResponse<T> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.data
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use reqwest::Method;
    use std::collections::HashMap;
    use url::Url;

    fn response() -> HttpResponse {
        HttpResponse::new(
            200,
            Method::GET,
            Url::parse("http://host/api/tm/3.5/config/active/pools").unwrap(),
            HashMap::new(),
            Vec::new(),
        )
    }

    #[test]
    fn test_deref_to_inner_data() {
        let response = ResourceResponse::new(vec!["a", "c", "b"], response());

        assert_eq!(response.len(), 3);
        assert_eq!(response[1], "c");
        assert_eq!(response.response().code, 200);
    }

    #[test]
    fn test_deref_mut_and_into_parts() {
        let mut response = ResourceResponse::new(vec![1, 2], response());
        response.push(3);

        let (data, raw) = response.into_parts();
        assert_eq!(data, vec![1, 2, 3]);
        assert_eq!(raw.method, Method::GET);
    }

    #[test]
    fn test_into_inner() {
        let response = ResourceResponse::new("pool".to_string(), response());
        assert_eq!(response.into_inner(), "pool");
    }
}
