//! Pool statistics resource.

use serde::{Deserialize, Serialize};

use crate::clients::{ClientError, StingrayClient};
use crate::rest::counter::reassemble;
use crate::rest::{decode_in_place, Resource, ResourceResponse, Statistics};

/// Statistics for one pool (`pools/{name}` in the statistics namespace).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PoolStats {
    #[serde(skip)]
    name: String,

    /// The counters reported for the pool.
    #[serde(default)]
    pub statistics: PoolStatistics,
}

impl PoolStats {
    /// Creates an empty statistics resource for the named pool.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }
}

impl Resource for PoolStats {
    type Namespace = Statistics;
    const ENDPOINT: &'static str = "pools";

    fn name(&self) -> &str {
        &self.name
    }

    fn set_name(&mut self, name: String) {
        self.name = name;
    }

    fn decode(&mut self, data: &[u8]) -> Result<(), serde_json::Error> {
        decode_in_place(self, data)?;
        self.statistics.reassemble_counters();
        Ok(())
    }
}

/// Counters reported for a pool.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PoolStatistics {
    /// Load balancing algorithm in use.
    pub algorithm: String,
    /// Bytes received from the pool's nodes.
    pub bytes_in: u64,
    /// High 32 bits of `bytes_in`.
    #[serde(rename = "bytes_in_hi", skip_serializing_if = "Option::is_none")]
    pub bytes_in_high: Option<u32>,
    /// Low 32 bits of `bytes_in`.
    #[serde(
        rename = "bytes_in_lo",
        alias = "bytes_in_low",
        skip_serializing_if = "Option::is_none"
    )]
    pub bytes_in_low: Option<u32>,
    /// Bytes sent to the pool's nodes.
    pub bytes_out: u64,
    /// High 32 bits of `bytes_out`.
    #[serde(rename = "bytes_out_hi", skip_serializing_if = "Option::is_none")]
    pub bytes_out_high: Option<u32>,
    /// Low 32 bits of `bytes_out`.
    #[serde(
        rename = "bytes_out_lo",
        alias = "bytes_out_low",
        skip_serializing_if = "Option::is_none"
    )]
    pub bytes_out_low: Option<u32>,
    /// Connections currently queued waiting for a node.
    #[serde(rename = "conns_queued")]
    pub connections_queued: u64,
    /// Number of disabled nodes.
    #[serde(rename = "disabled")]
    pub disabled_node_count: u64,
    /// Number of draining nodes.
    #[serde(rename = "draining")]
    pub draining_node_count: u64,
    /// Longest time a connection spent queued, in milliseconds.
    pub max_queue_time: u64,
    /// Mean time a connection spent queued, in milliseconds.
    pub mean_queue_time: u64,
    /// Shortest time a connection spent queued, in milliseconds.
    pub min_queue_time: u64,
    /// Number of nodes in the pool.
    #[serde(rename = "nodes")]
    pub node_count: u64,
    /// Session persistence class in use.
    #[serde(rename = "persistence")]
    pub session_persistence: String,
    /// Connections dropped after waiting too long in the queue.
    pub queue_timeouts: u64,
    /// Sessions moved to another node.
    #[serde(rename = "session_migrated")]
    pub sessions_migrated: u64,
    /// `active`, `disabled` or `failed`.
    pub state: String,
    /// Total connections made to the pool's nodes.
    #[serde(rename = "total_conn")]
    pub total_connections: u64,
}

impl PoolStatistics {
    fn reassemble_counters(&mut self) {
        if let Some(value) = reassemble(self.bytes_in_high, self.bytes_in_low) {
            self.bytes_in = value;
        }
        if let Some(value) = reassemble(self.bytes_out_high, self.bytes_out_low) {
            self.bytes_out = value;
        }
    }
}

impl StingrayClient {
    /// Fetches the statistics of the named pool.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError`] if the request fails, the appliance reports
    /// an error, or the body is not a pool statistics document.
    pub async fn get_pool_stats(
        &self,
        name: &str,
    ) -> Result<ResourceResponse<PoolStats>, ClientError> {
        let mut stats = PoolStats::new(name);
        let response = self.get(&mut stats).await?;
        Ok(ResourceResponse::new(stats, response))
    }

    /// Lists the names of all pools that report statistics.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError`] if the request fails or the listing cannot
    /// be decoded.
    pub async fn list_pool_stats(&self) -> Result<ResourceResponse<Vec<String>>, ClientError> {
        self.list(&PoolStats::default()).await
    }
}
