//! Resource layer of the Stingray API client.
//!
//! This module provides:
//!
//! - **[`Resource`] trait**: The contract every manageable object implements
//! - **[`Namespace`] and [`NamespacePolicy`]**: Which API sub-tree a resource
//!   lives in, fixed per type through [`Configuration`] or [`Statistics`]
//! - **[`ResourceResponse<T>`]**: Decoded data paired with the raw response
//! - **[`json`]**: The wire encoder with its escape fix-up
//! - **[`combine_counter`]**: Reassembly of split 64-bit counters
//! - **[`resources`]**: Concrete resources (pools, pool and node statistics)
//!
//! # Example
//!
//! ```rust,ignore
//! use stingray_api::rest::resources::Pool;
//! use stingray_api::rest::Resource;
//!
//! let mut pool = Pool::new("web");
//! client.get(&mut pool).await?;
//!
//! pool.properties.basic.note = Some("front end".to_string());
//! client.set(&pool).await?;
//!
//! let names = client.list(&pool).await?;
//! ```

mod counter;
pub mod json;
pub(crate) mod list;
mod namespace;
mod resource;
mod response;

pub mod resources;

pub use counter::combine_counter;
pub use namespace::{Configuration, Namespace, NamespacePolicy, Statistics};
pub use resource::{decode_in_place, Resource, JSON_CONTENT_TYPE};
pub use response::ResourceResponse;
