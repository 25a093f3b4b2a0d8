//! Depth-first reachability search.

use std::collections::HashSet;

use super::algorithm::Algorithm;
use super::result::PathResult;
use crate::network::{Network, Route};

/// Find some path from `start` to `end`, depth-first.
///
/// Routes are tried in adjacency order and the first path to reach `end`
/// is returned; it need not be shortest or cheapest. The traversal keeps an
/// explicit stack of frames, one per stop on the current path, each holding
/// the index of the next route to try from that stop.
///
/// Routes into stops that were never registered are skipped, unlike a plain
/// adjacency walk, so all three finders agree on which stops are reachable.
pub fn find_any(network: &Network, start: &str, end: &str) -> PathResult {
    let algorithm = Algorithm::QuickReachability;

    if start == end {
        return PathResult::trivial(start, algorithm);
    }
    let (Some(start), Some(end)) = (network.stop(start), network.stop(end)) else {
        return PathResult::not_found(algorithm);
    };

    let mut visited: HashSet<&str> = HashSet::from([start]);
    let mut path: Vec<&str> = vec![start];
    let mut edges: Vec<&Route> = Vec::new();
    let mut frames: Vec<usize> = vec![0];

    while let Some(next) = frames.last_mut() {
        let Some(&stop) = path.last() else {
            break;
        };

        let Some(route) = network.neighbors(stop).get(*next) else {
            // Exhausted: backtrack past this stop and the route into it.
            frames.pop();
            path.pop();
            edges.pop();
            continue;
        };
        *next += 1;

        let neighbor = route.to.as_str();
        if !network.contains_stop(neighbor) || !visited.insert(neighbor) {
            continue;
        }

        path.push(neighbor);
        edges.push(route);
        if neighbor == end {
            return PathResult::from_trail(&path, &edges, algorithm);
        }
        frames.push(0);
    }

    PathResult::not_found(algorithm)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn network(stops: &[&str], routes: &[(&str, &str, f64, u32, &str)]) -> Network {
        let mut network = Network::new();
        for stop in stops {
            network.add_stop(*stop);
        }
        for (from, to, distance, fare, bus) in routes {
            network.add_route(from, to, *distance, *fare, bus);
        }
        network
    }

    #[test]
    fn follows_adjacency_order_not_cost() {
        // The first route out of S leads the long way round.
        let network = network(
            &["S", "A", "B", "T"],
            &[
                ("S", "A", 10.0, 10, "Long"),
                ("S", "T", 1.0, 1, "Direct"),
                ("A", "B", 10.0, 10, "Long"),
                ("B", "T", 10.0, 10, "Long"),
            ],
        );

        let result = find_any(&network, "S", "T");

        assert!(result.found);
        assert_eq!(result.path, ["S", "A", "B", "T"]);
        assert_eq!(result.buses, ["Long", "Long", "Long"]);
        assert_eq!(result.distance, 30.0);
        assert_eq!(result.fare, 30);
    }

    #[test]
    fn backtracks_out_of_dead_ends() {
        let network = network(
            &["S", "Dead", "End", "T"],
            &[
                ("S", "Dead", 1.0, 1, "D1"),
                ("Dead", "End", 1.0, 1, "D2"),
                ("S", "T", 5.0, 5, "Through"),
            ],
        );

        let result = find_any(&network, "S", "T");

        assert_eq!(result.path, ["S", "T"]);
        assert_eq!(result.buses, ["Through"]);
        assert_eq!(result.stops, 2);
    }

    #[test]
    fn does_not_revisit_stops() {
        // A triangle: S-A, A-S back edge must not loop.
        let network = network(
            &["S", "A", "B", "T"],
            &[
                ("S", "A", 1.0, 1, "X"),
                ("A", "B", 1.0, 1, "X"),
                ("B", "S", 1.0, 1, "X"),
                ("B", "T", 1.0, 1, "X"),
            ],
        );

        let result = find_any(&network, "S", "T");
        assert_eq!(result.path, ["S", "A", "B", "T"]);
    }

    #[test]
    fn unreachable_is_not_found() {
        let network = network(&["S", "A", "T"], &[("S", "A", 1.0, 1, "X")]);

        let result = find_any(&network, "S", "T");

        assert!(!result.found);
        assert_eq!(result.algorithm, Algorithm::QuickReachability.label());
    }

    #[test]
    fn same_stop_is_trivial() {
        let network = network(&["S"], &[]);
        let result = find_any(&network, "S", "S");

        assert!(result.found);
        assert_eq!(result.path, ["S"]);
        assert_eq!(result.distance, 0.0);
        assert!(result.buses.is_empty());
    }

    #[test]
    fn skips_unregistered_endpoints() {
        let network = network(
            &["S", "T"],
            &[("S", "Ghost", 1.0, 1, "G"), ("Ghost", "T", 1.0, 1, "G")],
        );

        assert!(!find_any(&network, "S", "T").found);
        assert!(!find_any(&network, "S", "Ghost").found);
    }

    #[test]
    fn deep_chains_do_not_recurse() {
        let names: Vec<String> = (0..10_000).map(|i| format!("Stop {i}")).collect();
        let mut network = Network::new();
        for name in &names {
            network.add_stop(name.as_str());
        }
        for pair in names.windows(2) {
            network.add_route(&pair[0], &pair[1], 1.0, 1, "Line");
        }

        let result = find_any(&network, &names[0], &names[names.len() - 1]);

        assert!(result.found);
        assert_eq!(result.stops, names.len());
        assert_eq!(result.buses.len(), names.len() - 1);
    }
}
