//! HTTP client types for Stingray API communication.
//!
//! This module provides the transport layer of the library: building
//! authenticated requests against the right namespace, sending them and
//! turning non-2xx responses into errors.
//!
//! # Overview
//!
//! - [`StingrayClient`]: The client dispatching `get`, `set`, `delete` and `list`
//! - [`HttpMethod`]: HTTP methods used by the API (GET, PUT, DELETE)
//! - [`HttpResponse`]: A fully read response from the API
//! - [`ErrorResponse`]: An error reported by the API (non-2xx status)
//! - [`ClientError`]: Unified error type for client operations
//!
//! # Failure Semantics
//!
//! Every verb performs at most one round trip and never retries:
//!
//! - **Transport failure**: [`ClientError::Transport`], no response
//! - **Non-2xx status**: [`ClientError::Response`], response attached
//! - **Unreadable 2xx body**: [`ClientError::Body`], response attached
//! - **Unexpected body**: [`ClientError::Decode`], response attached

mod errors;
mod http_client;
mod http_request;
mod http_response;

pub use errors::{check_response, ClientError, ErrorResponse};
pub use http_client::{StingrayClient, API_VERSION, CONFIG_PATH, SDK_VERSION, STATS_PATH};
pub use http_request::HttpMethod;
pub use http_response::HttpResponse;
