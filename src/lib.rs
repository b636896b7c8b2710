//! # Stingray API Rust Client
//!
//! A typed client for the REST management API of the Stingray Traffic
//! Manager load balancer.
//!
//! ## Overview
//!
//! This library provides:
//! - Type-safe configuration via [`StingrayConfig`] and [`StingrayConfigBuilder`]
//! - A [`rest::Resource`] trait implemented by every manageable object
//! - Routing of each resource to the configuration or statistics namespace
//! - Generic `get`, `set`, `delete` and `list` verbs on [`StingrayClient`]
//! - Structured API errors via [`ErrorResponse`]
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use stingray_api::{ApiUrl, Password, StingrayClient, StingrayConfig, Username};
//! use stingray_api::rest::resources::{Pool, PoolNode};
//!
//! let config = StingrayConfig::builder()
//!     .base_url(ApiUrl::new("https://lb.example.com:9070")?)
//!     .username(Username::new("admin")?)
//!     .password(Password::new("secret")?)
//!     .build()?;
//! let client = StingrayClient::new(&config)?;
//!
//! // Create or replace a pool
//! let mut pool = Pool::new("web");
//! pool.properties.basic.nodes_table = Some(vec![PoolNode::new("10.0.0.1:80")]);
//! client.set(&pool).await?;
//!
//! // Read runtime counters
//! let stats = client.get_pool_stats("web").await?;
//! println!("bytes in: {}", stats.statistics.bytes_in);
//!
//! // List pools in the order the appliance returns them
//! for name in client.list_pools().await?.iter() {
//!     println!("{name}");
//! }
//! ```
//!
//! ## Errors
//!
//! Every verb returns [`ClientError`]. When a response was received, the
//! error still carries it:
//!
//! ```rust,ignore
//! match client.delete_pool("web").await {
//!     Ok(response) => println!("deleted ({})", response.code),
//!     Err(e) => {
//!         if let Some(response) = e.response() {
//!             println!("status {}", response.code);
//!         }
//!     }
//! }
//! ```
//!
//! ## Design Principles
//!
//! - **No global state**: Configuration is instance-based and passed explicitly
//! - **Fail-fast validation**: All newtypes validate on construction
//! - **Thread-safe**: All types are `Send + Sync`
//! - **One round trip per call**: No caching, retries or rate limiting

pub mod clients;
pub mod config;
pub mod error;
pub mod rest;

// Re-export public types at crate root for convenience
pub use config::{ApiUrl, Password, StingrayConfig, StingrayConfigBuilder, Username};
pub use error::ConfigError;

// Re-export HTTP client types
pub use clients::{
    check_response, ClientError, ErrorResponse, HttpMethod, HttpResponse, StingrayClient,
};

// Re-export the resource contract
pub use rest::{Namespace, Resource, ResourceResponse};
