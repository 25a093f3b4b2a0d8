//! Uniform path results.

use std::collections::HashMap;

use serde::Serialize;
use tracing::debug;

use super::algorithm::Algorithm;
use crate::network::Route;

/// Predecessor chain recorded by a priority-first search: for each reached
/// stop, the stop it was reached from and the route taken.
pub type Predecessors<'a> = HashMap<&'a str, (&'a str, &'a Route)>;

/// The answer to one route query.
///
/// This is the wire shape served by `/route`. Not-found results carry zero
/// totals and empty sequences.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PathResult {
    /// Whether a path exists.
    pub found: bool,

    /// Label of the algorithm that produced this result.
    pub algorithm: &'static str,

    /// Total distance along the path (km).
    pub distance: f64,

    /// Total fare along the path.
    pub fare: u64,

    /// Number of stops on the path, endpoints included.
    pub stops: usize,

    /// Stops from origin to destination.
    pub path: Vec<String>,

    /// Bus taken on each hop; one fewer than `path`.
    pub buses: Vec<String>,
}

impl PathResult {
    /// A degenerate single-stop path for `start == end`.
    pub fn trivial(stop: &str, algorithm: Algorithm) -> Self {
        Self {
            found: true,
            algorithm: algorithm.label(),
            distance: 0.0,
            fare: 0,
            stops: 1,
            path: vec![stop.to_string()],
            buses: Vec::new(),
        }
    }

    /// No path between the requested stops.
    pub fn not_found(algorithm: Algorithm) -> Self {
        debug!(%algorithm, "no path found");
        Self {
            found: false,
            algorithm: algorithm.label(),
            distance: 0.0,
            fare: 0,
            stops: 0,
            path: Vec::new(),
            buses: Vec::new(),
        }
    }

    /// Build a result from the stops visited and the routes taken between
    /// them, in travel order.
    pub fn from_trail(path: &[&str], edges: &[&Route], algorithm: Algorithm) -> Self {
        let distance: f64 = edges.iter().map(|edge| edge.distance).sum();
        let fare: u64 = edges.iter().map(|edge| u64::from(edge.fare)).sum();

        debug!(
            %algorithm,
            stops = path.len(),
            distance,
            fare,
            "path found"
        );

        Self {
            found: true,
            algorithm: algorithm.label(),
            distance,
            fare,
            stops: path.len(),
            path: path.iter().map(|stop| stop.to_string()).collect(),
            buses: edges.iter().map(|edge| edge.bus.clone()).collect(),
        }
    }

    /// Build a result by walking the predecessor chain back from `end`.
    pub fn from_predecessors(
        start: &str,
        end: &str,
        predecessors: &Predecessors<'_>,
        algorithm: Algorithm,
    ) -> Self {
        if start == end {
            return Self::trivial(start, algorithm);
        }

        let mut path = vec![end];
        let mut edges = Vec::new();
        let mut current = end;

        while current != start {
            // A well-formed chain has at most one hop per recorded stop.
            let Some(&(previous, edge)) = predecessors.get(current) else {
                return Self::not_found(algorithm);
            };
            if edges.len() >= predecessors.len() {
                return Self::not_found(algorithm);
            }
            edges.push(edge);
            path.push(previous);
            current = previous;
        }

        path.reverse();
        edges.reverse();
        Self::from_trail(&path, &edges, algorithm)
    }
}
