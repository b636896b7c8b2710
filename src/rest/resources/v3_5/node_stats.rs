//! Node statistics resource.
//!
//! Runtime counters for a single back-end node, addressed as
//! `nodes/node/{host:port}` in the statistics namespace.

use serde::{Deserialize, Serialize};

use crate::clients::{ClientError, StingrayClient};
use crate::rest::counter::reassemble;
use crate::rest::{decode_in_place, Resource, ResourceResponse, Statistics};

/// Statistics for one node (`nodes/node/{name}`).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NodeStats {
    #[serde(skip)]
    name: String,

    /// The counters reported for the node.
    #[serde(default)]
    pub statistics: NodeStatistics,
}

impl NodeStats {
    /// Creates an empty statistics resource for the node `host:port`.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }
}

impl Resource for NodeStats {
    type Namespace = Statistics;
    const ENDPOINT: &'static str = "nodes/node";

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

/// Counters reported for a node.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct NodeStatistics {
    /// Bytes received from the node.
    #[serde(rename = "bytes_from_node")]
    pub bytes_in: u64,
    /// High 32 bits of `bytes_in`.
    #[serde(rename = "bytes_from_node_hi", skip_serializing_if = "Option::is_none")]
    pub bytes_in_high: Option<u32>,
    /// Low 32 bits of `bytes_in`.
    #[serde(rename = "bytes_from_node_lo", skip_serializing_if = "Option::is_none")]
    pub bytes_in_low: Option<u32>,
    /// Bytes sent to the node.
    #[serde(rename = "bytes_to_node")]
    pub bytes_out: u64,
    /// High 32 bits of `bytes_out`.
    #[serde(rename = "bytes_to_node_hi", skip_serializing_if = "Option::is_none")]
    pub bytes_out_high: Option<u32>,
    /// Low 32 bits of `bytes_out`.
    #[serde(rename = "bytes_to_node_lo", skip_serializing_if = "Option::is_none")]
    pub bytes_out_low: Option<u32>,
    /// Currently open connections.
    #[serde(rename = "current_conn")]
    pub current_connections: u64,
    /// Requests currently in progress.
    pub current_requests: u64,
    /// Errors seen on this node.
    pub errors: u64,
    /// Times the node was marked as failed.
    pub failures: u64,
    /// Connections newly created to the node.
    #[serde(rename = "new_conn")]
    pub new_connections: u64,
    /// Requests served over a pooled keepalive connection.
    #[serde(rename = "pooled_conn")]
    pub pooled_connections: u64,
    /// Port of the node.
    pub port: u16,
    /// Longest response time, in milliseconds.
    #[serde(rename = "response_max")]
    pub max_response_time: u64,
    /// Shortest response time, in milliseconds.
    #[serde(rename = "response_min")]
    pub min_response_time: u64,
    /// Mean response time, in milliseconds.
    #[serde(rename = "response_mean")]
    pub mean_response_time: u64,
    /// `alive`, `dead` or `unknown`.
    pub state: String,
    /// Total connections made to the node.
    #[serde(rename = "total_conn")]
    pub total_connections: u64,
}

impl NodeStatistics {
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
    /// Fetches the statistics of the node `host:port`.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError`] if the request fails, the appliance reports
    /// an error, or the body is not a node statistics document.
    pub async fn get_node_stats(
        &self,
        name: &str,
    ) -> Result<ResourceResponse<NodeStats>, ClientError> {
        let mut stats = NodeStats::new(name);
        let response = self.get(&mut stats).await?;
        Ok(ResourceResponse::new(stats, response))
    }
}
