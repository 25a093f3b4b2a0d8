//! Route planning over a transit network.
//!
//! Three finders answer point-to-point queries: shortest total distance and
//! lowest total fare, both by priority-first search, and a depth-first
//! search that returns the first path it reaches without any optimality
//! guarantee. All three report through the same [`PathResult`] shape.

mod algorithm;
mod dfs;
mod dijkstra;
mod result;


use tracing::info;

use crate::network::{Network, Route};

pub use algorithm::Algorithm;
pub use result::PathResult;

/// Read-only route planner over a borrowed network.
pub struct Planner<'a> {
    network: &'a Network,
}

impl<'a> Planner<'a> {
    /// Create a planner for `network`.
    pub fn new(network: &'a Network) -> Self {
        Self { network }
    }

    /// Answer a query with the selected algorithm.
    pub fn find(&self, algorithm: Algorithm, from: &str, to: &str) -> PathResult {
        info!(%algorithm, from, to, "finding route");
        match algorithm {
            Algorithm::ShortestDistance => self.shortest_distance(from, to),
            Algorithm::CheapestFare => self.cheapest_fare(from, to),
            Algorithm::QuickReachability => self.quick_reachability(from, to),
        }
    }

    /// Path with the minimum total distance.
    ///
    /// The reported fare is that of the chosen path, not a minimum.
    pub fn shortest_distance(&self, from: &str, to: &str) -> PathResult {
        dijkstra::find_cheapest(
            self.network,
            from,
            to,
            |route: &Route| route.distance,
            Algorithm::ShortestDistance,
        )
    }

    /// Path with the minimum total fare.
    ///
    /// The reported distance is that of the chosen path, not a minimum.
    pub fn cheapest_fare(&self, from: &str, to: &str) -> PathResult {
        dijkstra::find_cheapest(
            self.network,
            from,
            to,
            |route: &Route| u64::from(route.fare),
            Algorithm::CheapestFare,
        )
    }

    /// The first path found depth-first.
    pub fn quick_reachability(&self, from: &str, to: &str) -> PathResult {
        dfs::find_any(self.network, from, to)
    }
}
