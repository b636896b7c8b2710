//! Concrete resource implementations.
//!
//! Resources are organized by API version; the version the client speaks
//! is re-exported at this level:
//!
//! ```text
//! resources/
//!   mod.rs           <- This file (re-exports v3_5)
//!   v3_5/
//!     mod.rs         <- Version-specific resources
//! ```
//!
//! # Available Resources
//!
//! | Resource      | Namespace     | Endpoint     |
//! |---------------|---------------|--------------|
//! | [`Pool`]      | configuration | `pools`      |
//! | [`PoolStats`] | statistics    | `pools`      |
//! | [`NodeStats`] | statistics    | `nodes/node` |
//!
//! ```rust,ignore
//! use stingray_api::rest::resources::{NodeStats, Pool};
//!
//! let pool = client.get_pool("web").await?;
//! for node in pool.properties.basic.nodes_table.iter().flatten() {
//!     let stats = client.get_node_stats(&node.node).await?;
//!     println!("{}: {} bytes in", node.node, stats.statistics.bytes_in);
//! }
//! ```

pub mod v3_5;

pub use v3_5::*;
