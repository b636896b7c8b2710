//! The resource contract shared by every manageable Stingray object.
//!
//! A [`Resource`] is a named object that lives at `{ENDPOINT}/{name}` under
//! one of the two API namespaces. The client dispatches `get`, `set`,
//! `delete` and `list` generically over this trait, so adding a new kind of
//! object never touches the client.
//!
//! # Implementing a Resource
//!
//! ```rust
//! use serde::{Deserialize, Serialize};
//! use stingray_api::rest::{Configuration, Namespace, Resource};
//!
//! #[derive(Debug, Default, Serialize, Deserialize)]
//! pub struct Monitor {
//!     #[serde(skip)]
//!     name: String,
//!     pub properties: serde_json::Value,
//! }
//!
//! impl Resource for Monitor {
//!     type Namespace = Configuration;
//!     const ENDPOINT: &'static str = "monitors";
//!
//!     fn name(&self) -> &str {
//!         &self.name
//!     }
//!
//!     fn set_name(&mut self, name: String) {
//!         self.name = name;
//!     }
//! }
//!
//! let mut monitor = Monitor::default();
//! monitor.set_name("Full HTTP".to_string());
//! assert_eq!(monitor.namespace(), Namespace::Configuration);
//! assert_eq!(monitor.path(), "monitors/Full%20HTTP");
//! ```

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::rest::json;
use crate::rest::namespace::{Namespace, NamespacePolicy};

/// MIME type of every JSON resource.
pub const JSON_CONTENT_TYPE: &str = "application/json";

/// An object that can be fetched, written, deleted and listed through the
/// Stingray REST API.
///
/// The namespace and endpoint are fixed per type; the name is the only
/// per-instance identity and is never part of the JSON body.
pub trait Resource: Serialize + DeserializeOwned + Send + Sync {
    /// Namespace policy, [`Configuration`](crate::rest::Configuration) or
    /// [`Statistics`](crate::rest::Statistics).
    type Namespace: NamespacePolicy;

    /// Collection path segment, e.g. `"pools"` or `"nodes/node"`.
    const ENDPOINT: &'static str;

    /// MIME type sent with writes.
    const CONTENT_TYPE: &'static str = JSON_CONTENT_TYPE;

    /// Returns the resource name.
    fn name(&self) -> &str;

    /// Sets the resource name.
    fn set_name(&mut self, name: String);

    /// Returns the collection path segment.
    fn endpoint(&self) -> &'static str {
        Self::ENDPOINT
    }

    /// Returns the namespace this resource lives in.
    fn namespace(&self) -> Namespace {
        <Self::Namespace as NamespacePolicy>::NAMESPACE
    }

    /// Returns the MIME type sent with writes.
    fn content_type(&self) -> &'static str {
        Self::CONTENT_TYPE
    }

    /// Returns `{endpoint}/{name}`, with the name percent-encoded as a
    /// single path segment.
    fn path(&self) -> String {
        format!("{}/{}", Self::ENDPOINT, urlencoding::encode(self.name()))
    }

    /// Encodes the resource into its wire form.
    ///
    /// # Errors
    ///
    /// Returns the `serde_json` error if the resource cannot be serialized.
    fn encode(&self) -> Result<Vec<u8>, serde_json::Error> {
        json::to_vec(self)
    }

    /// Populates the resource in place from a response body.
    ///
    /// # Errors
    ///
    /// Returns the `serde_json` error if the body does not match the
    /// resource shape. The resource is left unchanged in that case.
    fn decode(&mut self, data: &[u8]) -> Result<(), serde_json::Error> {
        decode_in_place(self, data)
    }
}

/// Replaces the payload of `resource` with `data`, keeping its name.
///
/// This is the standard decoding step; resources that post-process their
/// payload call it from their own [`Resource::decode`].
///
/// # Errors
///
/// Returns the `serde_json` error if the body does not match `R`.
pub fn decode_in_place<R: Resource>(resource: &mut R, data: &[u8]) -> Result<(), serde_json::Error> {
    let mut decoded: R = json::from_slice(data)?;
    decoded.set_name(resource.name().to_owned());
    *resource = decoded;
    Ok(())
}
