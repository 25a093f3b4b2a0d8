//! Path-finding criteria.

use std::fmt;

/// Which path finder answers a route query.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Algorithm {
    /// Minimum total distance.
    #[default]
    ShortestDistance,

    /// Minimum total fare.
    CheapestFare,

    /// Any reachable path, found depth-first.
    QuickReachability,
}

impl Algorithm {
    /// Pick an algorithm from the `algo` query selector.
    ///
    /// `"cheapest"` and `"dfs"` select the fare and depth-first finders;
    /// anything else, including no selector, selects shortest distance.
    pub fn from_selector(selector: Option<&str>) -> Self {
        match selector {
            Some("cheapest") => Algorithm::CheapestFare,
            Some("dfs") => Algorithm::QuickReachability,
            _ => Algorithm::ShortestDistance,
        }
    }

    /// Human-readable label carried in every path result.
    pub fn label(self) -> &'static str {
        match self {
            Algorithm::ShortestDistance => "Shortest Distance (Dijkstra's Algorithm)",
            Algorithm::CheapestFare => "Lowest Fare (Dijkstra's Algorithm - Fare Optimized)",
            Algorithm::QuickReachability => "Quick Pathfinding (Depth-First Search)",
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
