//! Pool configuration resource.
//!
//! A pool is a named group of back-end nodes that the traffic manager
//! balances requests across.
//!
//! # Example
//!
//! ```rust,ignore
//! use stingray_api::rest::resources::{Pool, PoolNode};
//!
//! let mut pool = Pool::new("web");
//! pool.properties.basic.nodes_table = Some(vec![PoolNode::new("10.0.0.1:80")]);
//! pool.properties.basic.monitors = Some(vec!["Ping".to_string()]);
//! client.set_pool(&pool).await?;
//!
//! let fetched = client.get_pool("web").await?;
//! println!("algorithm: {:?}", fetched.properties.load_balancing.algorithm);
//! ```

use serde::{Deserialize, Serialize};

use crate::clients::{ClientError, HttpResponse, StingrayClient};
use crate::rest::{Configuration, Resource, ResourceResponse};

/// A pool in the configuration namespace (`pools/{name}`).
///
/// Every setting is optional: unset fields are omitted from the body sent
/// on `set`, so the appliance keeps its current or default value.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Pool {
    #[serde(skip)]
    name: String,

    /// Pool settings, grouped as the appliance groups them.
    #[serde(default)]
    pub properties: PoolProperties,
}

impl Pool {
    /// Creates an empty pool with the given name.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }
}

impl Resource for Pool {
    type Namespace = Configuration;
    const ENDPOINT: &'static str = "pools";

    fn name(&self) -> &str {
        &self.name
    }

    fn set_name(&mut self, name: String) {
        self.name = name;
    }
}

/// The property sections of a pool.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PoolProperties {
    /// General settings and the nodes table.
    #[serde(default)]
    pub basic: PoolBasic,

    /// Connection and queueing limits.
    #[serde(default)]
    pub connection: PoolConnection,

    /// Load balancing algorithm settings.
    #[serde(default)]
    pub load_balancing: PoolLoadBalancing,
}

/// General pool settings.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PoolBasic {
    /// Bandwidth class applied to connections to the pool's nodes.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bandwidth_class: Option<String>,

    /// Pool to use when all nodes in this pool have failed.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub failure_pool: Option<String>,

    /// Maximum number of nodes a request is tried against, 0 for all.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_connection_attempts: Option<u32>,

    /// Maximum number of idle keepalive connections per node.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_idle_connections_pernode: Option<u32>,

    /// Maximum number of connection attempts that may time out.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_timed_out_connection_attempts: Option<u32>,

    /// Health monitors attached to the pool.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub monitors: Option<Vec<String>>,

    /// Close node connections with a RST instead of a FIN.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub node_close_with_rst: Option<bool>,

    /// Number of times a failed node connection is retried.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub node_connection_attempts: Option<u32>,

    /// What happens to a node removed from the nodes table.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub node_delete_behavior: Option<String>,

    /// Seconds a draining node is kept before deletion.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub node_drain_to_delete_timeout: Option<u32>,

    /// The nodes of the pool.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub nodes_table: Option<Vec<PoolNode>>,

    /// Free-form description.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,

    /// Mark nodes as failed when requests to them fail.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub passive_monitoring: Option<bool>,

    /// Session persistence class.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub persistence_class: Option<String>,

    /// Connect to nodes using the client's source address.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub transparent: Option<bool>,
}

/// A row of the pool nodes table.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PoolNode {
    /// Node address as `host:port`.
    pub node: String,

    /// Priority group of the node.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub priority: Option<u32>,

    /// `active`, `draining` or `disabled`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub state: Option<String>,

    /// Weight for weighted algorithms.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub weight: Option<u32>,
}

impl PoolNode {
    /// Creates a node entry with only its address set.
    #[must_use]
    pub fn new(node: impl Into<String>) -> Self {
        Self {
            node: node.into(),
            ..Self::default()
        }
    }
}

/// Connection limits for a pool.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PoolConnection {
    /// Seconds to wait for a connection to a node.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_connect_time: Option<u32>,

    /// Maximum concurrent connections per node, 0 for unlimited.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_connections_per_node: Option<u32>,

    /// Maximum number of queued connections, 0 for unlimited.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_queue_size: Option<u32>,

    /// Seconds to wait for a node to start replying.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_reply_time: Option<u32>,

    /// Seconds a connection may wait in the queue.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub queue_timeout: Option<u32>,
}

/// Load balancing settings for a pool.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PoolLoadBalancing {
    /// Algorithm name, e.g. `round_robin` or `least_connections`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub algorithm: Option<String>,

    /// Only use the highest priority group of nodes.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub priority_enabled: Option<bool>,

    /// Minimum number of active nodes in the preferred priority group.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub priority_nodes: Option<u32>,
}

impl StingrayClient {
    /// Fetches the pool configuration with the given name.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError`] if the request fails, the appliance reports
    /// an error, or the body is not a pool.
    pub async fn get_pool(&self, name: &str) -> Result<ResourceResponse<Pool>, ClientError> {
        let mut pool = Pool::new(name);
        let response = self.get(&mut pool).await?;
        Ok(ResourceResponse::new(pool, response))
    }

    /// Creates or replaces a pool.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError`] if the request fails or the appliance
    /// rejects the pool.
    pub async fn set_pool(&self, pool: &Pool) -> Result<HttpResponse, ClientError> {
        self.set(pool).await
    }

    /// Deletes the pool with the given name.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError`] if the request fails or the appliance
    /// reports an error.
    pub async fn delete_pool(&self, name: &str) -> Result<HttpResponse, ClientError> {
        self.delete(&Pool::new(name)).await
    }

    /// Lists the names of all configured pools.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError`] if the request fails or the listing cannot
    /// be decoded.
    pub async fn list_pools(&self) -> Result<ResourceResponse<Vec<String>>, ClientError> {
        self.list(&Pool::default()).await
    }
}
