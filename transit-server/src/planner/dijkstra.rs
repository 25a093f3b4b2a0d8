//! Priority-first search over route weights.
//!
//! Shortest-distance and cheapest-fare search are the same traversal with a
//! different edge weight, so both run through [`find_cheapest`] with a
//! [`Cost`] type and a weight function.

use std::cmp::Ordering;
use std::collections::{BinaryHeap, HashMap};
use std::ops::Add;

use tracing::trace;

use super::algorithm::Algorithm;
use super::result::{PathResult, Predecessors};
use crate::network::{Network, Route};

/// An accumulated path cost.
pub trait Cost: Copy + Add<Output = Self> {
    /// Cost of the empty path.
    const ZERO: Self;

    /// Best-known cost of a stop nothing has reached yet.
    const UNREACHED: Self;

    /// Total order over costs.
    fn compare(&self, other: &Self) -> Ordering;
}

impl Cost for f64 {
    const ZERO: Self = 0.0;
    const UNREACHED: Self = f64::INFINITY;

    fn compare(&self, other: &Self) -> Ordering {
        self.total_cmp(other)
    }
}

impl Cost for u64 {
    const ZERO: Self = 0;
    const UNREACHED: Self = u64::MAX;

    fn compare(&self, other: &Self) -> Ordering {
        self.cmp(other)
    }
}

/// Frontier entry: a stop and the cost it was reached at.
struct Frontier<'a, C> {
    cost: C,
    stop: &'a str,
}

impl<C: Cost> Ord for Frontier<'_, C> {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reversed for a min-heap; equal costs pop in stop-name order.
        other
            .cost
            .compare(&self.cost)
            .then_with(|| other.stop.cmp(self.stop))
    }
}

impl<C: Cost> PartialOrd for Frontier<'_, C> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<C: Cost> PartialEq for Frontier<'_, C> {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl<C: Cost> Eq for Frontier<'_, C> {}

/// Find the path from `start` to `end` minimising the summed `weight`.
///
/// Only registered stops are entered. The frontier is drained completely;
/// stale entries, popped at a cost above the stop's best-known cost, are
/// skipped. A neighbor's predecessor is replaced only on a strictly cheaper
/// path, so among equal-cost alternatives the first relaxed wins.
pub fn find_cheapest<'a, C, W>(
    network: &'a Network,
    start: &str,
    end: &str,
    weight: W,
    algorithm: Algorithm,
) -> PathResult
where
    C: Cost,
    W: Fn(&Route) -> C,
{
    if start == end {
        return PathResult::trivial(start, algorithm);
    }
    let (Some(start), Some(end)) = (network.stop(start), network.stop(end)) else {
        return PathResult::not_found(algorithm);
    };

    let mut best: HashMap<&str, C> = network
        .stops()
        .iter()
        .map(|stop| (stop.as_str(), C::UNREACHED))
        .collect();
    best.insert(start, C::ZERO);

    let mut predecessors = Predecessors::new();
    let mut frontier = BinaryHeap::new();
    frontier.push(Frontier {
        cost: C::ZERO,
        stop: start,
    });

    while let Some(Frontier { cost, stop }) = frontier.pop() {
        let Some(&settled) = best.get(stop) else {
            continue;
        };
        if cost.compare(&settled) == Ordering::Greater {
            continue;
        }

        let routes = network.neighbors(stop);
        trace!(stop, routes = routes.len(), "expanding stop");

        for route in routes {
            let neighbor = route.to.as_str();
            // Unregistered endpoints carry no best-known cost.
            let Some(&known) = best.get(neighbor) else {
                continue;
            };

            let through = settled + weight(route);
            if through.compare(&known) == Ordering::Less {
                best.insert(neighbor, through);
                predecessors.insert(neighbor, (stop, route));
                frontier.push(Frontier {
                    cost: through,
                    stop: neighbor,
                });
            }
        }
    }

    PathResult::from_predecessors(start, end, &predecessors, algorithm)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn by_distance(route: &Route) -> f64 {
        route.distance
    }

    fn by_fare(route: &Route) -> u64 {
        u64::from(route.fare)
    }

    /// A diamond where the short way is expensive and the cheap way is long.
    ///
    /// ```text
    ///   S --1.0 km / 50--> M1 --1.0 km / 50--> T
    ///   S --4.0 km /  5--> M2 --4.0 km /  5--> T
    /// ```
    fn diamond() -> Network {
        let mut network = Network::new();
        for stop in ["S", "M1", "M2", "T"] {
            network.add_stop(stop);
        }
        network.add_route("S", "M1", 1.0, 50, "Fast");
        network.add_route("M1", "T", 1.0, 50, "Fast");
        network.add_route("S", "M2", 4.0, 5, "Slow");
        network.add_route("M2", "T", 4.0, 5, "Slow");
        network
    }

    #[test]
    fn frontier_pops_lowest_cost_first() {
        let mut heap = BinaryHeap::new();
        heap.push(Frontier { cost: 3.0, stop: "C" });
        heap.push(Frontier { cost: 1.0, stop: "A" });
        heap.push(Frontier { cost: 2.0, stop: "B" });

        let order: Vec<&str> = std::iter::from_fn(|| heap.pop().map(|f| f.stop)).collect();
        assert_eq!(order, ["A", "B", "C"]);
    }

    #[test]
    fn frontier_breaks_cost_ties_by_name() {
        let mut heap = BinaryHeap::new();
        heap.push(Frontier { cost: 1u64, stop: "Y" });
        heap.push(Frontier { cost: 1u64, stop: "X" });

        assert_eq!(heap.pop().map(|f| f.stop), Some("X"));
    }

    #[test]
    fn distance_prefers_short_branch() {
        let network = diamond();
        let result = find_cheapest(
            &network,
            "S",
            "T",
            by_distance,
            Algorithm::ShortestDistance,
        );

        assert!(result.found);
        assert_eq!(result.path, ["S", "M1", "T"]);
        assert_eq!(result.distance, 2.0);
        assert_eq!(result.fare, 100);
        assert_eq!(result.buses, ["Fast", "Fast"]);
    }

    #[test]
    fn fare_prefers_cheap_branch() {
        let network = diamond();
        let result = find_cheapest(&network, "S", "T", by_fare, Algorithm::CheapestFare);

        assert!(result.found);
        assert_eq!(result.path, ["S", "M2", "T"]);
        assert_eq!(result.fare, 10);
        assert_eq!(result.distance, 8.0);
    }

    #[test]
    fn equal_cost_keeps_first_relaxed() {
        let mut network = Network::new();
        for stop in ["S", "P", "Q", "T"] {
            network.add_stop(stop);
        }
        network.add_route("S", "T", 2.0, 1, "Direct");
        network.add_route("S", "P", 1.0, 1, "Hop");
        network.add_route("P", "T", 1.0, 1, "Hop");

        let result = find_cheapest(
            &network,
            "S",
            "T",
            by_distance,
            Algorithm::ShortestDistance,
        );

        assert_eq!(result.path, ["S", "T"]);
        assert_eq!(result.buses, ["Direct"]);
    }

    #[test]
    fn parallel_routes_pick_the_lighter_one() {
        let mut network = Network::new();
        network.add_stop("A");
        network.add_stop("B");
        network.add_route("A", "B", 5.0, 3, "Long");
        network.add_route("A", "B", 2.0, 9, "Short");

        let shortest = find_cheapest(
            &network,
            "A",
            "B",
            by_distance,
            Algorithm::ShortestDistance,
        );
        assert_eq!(shortest.buses, ["Short"]);

        let cheapest = find_cheapest(&network, "A", "B", by_fare, Algorithm::CheapestFare);
        assert_eq!(cheapest.buses, ["Long"]);
    }

    #[test]
    fn unregistered_endpoints_are_not_found() {
        let network = diamond();

        let to_ghost = find_cheapest(
            &network,
            "S",
            "Ghost",
            by_distance,
            Algorithm::ShortestDistance,
        );
        assert!(!to_ghost.found);

        let from_ghost = find_cheapest(&network, "Ghost", "T", by_fare, Algorithm::CheapestFare);
        assert!(!from_ghost.found);
    }

    #[test]
    fn routes_through_unregistered_stops_are_ignored() {
        let mut network = Network::new();
        network.add_stop("A");
        network.add_stop("C");
        network.add_route("A", "Ghost", 1.0, 1, "G");
        network.add_route("Ghost", "C", 1.0, 1, "G");

        let result = find_cheapest(
            &network,
            "A",
            "C",
            by_distance,
            Algorithm::ShortestDistance,
        );
        assert!(!result.found);
    }

    #[test]
    fn disconnected_components_are_not_found() {
        let mut network = diamond();
        network.add_stop("Island");

        let result = find_cheapest(&network, "S", "Island", by_fare, Algorithm::CheapestFare);
        assert!(!result.found);
        assert_eq!(result.algorithm, Algorithm::CheapestFare.label());
    }
}
