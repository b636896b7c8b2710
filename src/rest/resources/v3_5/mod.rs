//! Resources of version 3.5 of the Stingray REST API.

mod node_stats;
mod pool;
mod pool_stats;

pub use node_stats::{NodeStatistics, NodeStats};
pub use pool::{Pool, PoolBasic, PoolConnection, PoolLoadBalancing, PoolNode, PoolProperties};
pub use pool_stats::{PoolStatistics, PoolStats};
