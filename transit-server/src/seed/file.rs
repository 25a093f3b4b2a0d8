//! JSON network files.

use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use super::error::SeedError;
use crate::network::Network;

/// On-disk description of a network.
///
/// ```json
/// {
///   "stops": ["A", "B"],
///   "routes": [{ "from": "A", "to": "B", "distance": 2.0, "fare": 10, "bus": "X" }]
/// }
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct NetworkFile {
    /// Stop names, in listing order.
    pub stops: Vec<String>,

    /// Bidirectional routes.
    #[serde(default)]
    pub routes: Vec<RouteRecord>,
}

/// One bidirectional route in a network file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RouteRecord {
    pub from: String,
    pub to: String,
    pub distance: f64,
    pub fare: u32,
    pub bus: String,
}

impl NetworkFile {
    /// Build a network from this description.
    ///
    /// Distances must be finite and non-negative. Routes naming undeclared
    /// stops are accepted with a warning.
    pub fn into_network(self) -> Result<Network, SeedError> {
        let mut network = Network::new();
        for stop in self.stops {
            network.add_stop(stop);
        }

        for (index, route) in self.routes.into_iter().enumerate() {
            if !route.distance.is_finite() || route.distance < 0.0 {
                return Err(SeedError::InvalidRoute {
                    index,
                    from: route.from,
                    to: route.to,
                    reason: "distance must be a non-negative number",
                });
            }
            for endpoint in [&route.from, &route.to] {
                if !network.contains_stop(endpoint) {
                    warn!(index, stop = %endpoint, "route references an undeclared stop");
                }
            }
            network.add_route(&route.from, &route.to, route.distance, route.fare, &route.bus);
        }

        Ok(network)
    }
}

/// Load a network from a JSON file.
pub fn load_network(path: &Path) -> Result<Network, SeedError> {
    let contents = std::fs::read_to_string(path).map_err(|source| SeedError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let file: NetworkFile = serde_json::from_str(&contents)?;
    let network = file.into_network()?;

    info!(
        path = %path.display(),
        stops = network.len(),
        "loaded network file"
    );
    Ok(network)
}
