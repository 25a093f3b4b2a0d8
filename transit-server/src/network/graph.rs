//! The stop and route graph.

use std::collections::{BTreeSet, HashMap, HashSet};

use tracing::{info, warn};

use super::route::Route;
use super::stats::NetworkStatistics;

/// Outcome of [`Network::add_stop`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AddStop {
    /// The stop was registered.
    Added,

    /// A stop with this name already exists; nothing changed.
    Duplicate,
}

/// A transit network of named stops joined by bus routes.
///
/// Insertion is permissive: routes may name stops that were never added.
/// Such endpoints get an adjacency entry but are not part of the stop set,
/// and path finders never traverse into them.
#[derive(Debug, Clone, Default)]
pub struct Network {
    /// Registered stops in insertion order.
    stops: Vec<String>,

    /// Membership index over `stops`.
    registered: HashSet<String>,

    /// Outgoing routes per stop name, in insertion order.
    adjacency: HashMap<String, Vec<Route>>,
}

impl Network {
    /// Create an empty network.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a stop.
    ///
    /// A name that is already registered is left untouched and reported as
    /// [`AddStop::Duplicate`]. A name previously seen only as a route
    /// endpoint becomes registered and keeps its routes.
    pub fn add_stop(&mut self, name: impl Into<String>) -> AddStop {
        let name = name.into();
        if self.registered.contains(&name) {
            warn!(stop = %name, "stop already exists");
            return AddStop::Duplicate;
        }

        self.adjacency.entry(name.clone()).or_default();
        self.registered.insert(name.clone());
        info!(stop = %name, "added stop");
        self.stops.push(name);
        AddStop::Added
    }

    /// Add a route between two stops, stored in both directions.
    ///
    /// Neither the endpoints nor the weights are validated.
    pub fn add_route(&mut self, from: &str, to: &str, distance: f64, fare: u32, bus: &str) {
        let forward = Route::new(to, distance, fare, bus);
        let reverse = forward.reversed(from);

        self.adjacency
            .entry(from.to_string())
            .or_default()
            .push(forward);
        self.adjacency.entry(to.to_string()).or_default().push(reverse);

        info!(from, to, distance, fare, bus, "added route");
    }

    /// Outgoing routes of `stop`, empty if it has none or is unknown.
    pub fn neighbors(&self, stop: &str) -> &[Route] {
        self.adjacency
            .get(stop)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Whether `stop` is a registered stop.
    pub fn contains_stop(&self, stop: &str) -> bool {
        self.registered.contains(stop)
    }

    /// The registered stop named `name`, borrowed from the network.
    pub fn stop(&self, name: &str) -> Option<&str> {
        self.registered.get(name).map(String::as_str)
    }

    /// Registered stops in insertion order.
    pub fn stops(&self) -> &[String] {
        &self.stops
    }

    /// Returns the number of registered stops.
    pub fn len(&self) -> usize {
        self.stops.len()
    }

    /// Returns true if no stop has been registered.
    pub fn is_empty(&self) -> bool {
        self.stops.is_empty()
    }

    /// Distinct bus labels across every route, sorted.
    pub fn bus_labels(&self) -> Vec<String> {
        self.adjacency
            .values()
            .flatten()
            .map(|route| route.bus.as_str())
            .collect::<BTreeSet<_>>()
            .into_iter()
            .map(str::to_string)
            .collect()
    }

    /// Count and sum the network's routes.
    pub fn statistics(&self) -> NetworkStatistics {
        let mut directed = 0usize;
        let mut distance = 0.0;
        let mut fare = 0u64;
        let mut buses = HashSet::new();

        // Summed in adjacency order so float totals are reproducible.
        for route in self.adjacency().flat_map(|(_, routes)| routes) {
            directed += 1;
            distance += route.distance;
            fare += u64::from(route.fare);
            buses.insert(route.bus.as_str());
        }

        // Every logical route was stored twice.
        NetworkStatistics::new(
            self.stops.len(),
            directed / 2,
            buses.len(),
            distance / 2.0,
            fare / 2,
        )
    }

    /// Stops whose name contains `query`, ignoring case, in insertion order.
    pub fn search_stops(&self, query: &str) -> Vec<String> {
        let needle = query.to_lowercase();
        self.stops
            .iter()
            .filter(|stop| stop.to_lowercase().contains(&needle))
            .cloned()
            .collect()
    }

    /// Every adjacency entry: registered stops in insertion order, then
    /// unregistered route endpoints sorted by name.
    pub fn adjacency(&self) -> impl Iterator<Item = (&str, &[Route])> {
        let mut unregistered: Vec<&str> = self
            .adjacency
            .keys()
            .filter(|stop| !self.registered.contains(*stop))
            .map(String::as_str)
            .collect();
        unregistered.sort_unstable();

        self.stops
            .iter()
            .map(String::as_str)
            .chain(unregistered)
            .map(move |stop| (stop, self.neighbors(stop)))
    }
}
