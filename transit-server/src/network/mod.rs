//! In-memory transit network.
//!
//! Stops are identified by name. Routes are bidirectional in effect and
//! stored as two directed records, one in each stop's adjacency list.

mod graph;
mod route;
mod stats;

pub use graph::{AddStop, Network};
pub use route::Route;
pub use stats::NetworkStatistics;
