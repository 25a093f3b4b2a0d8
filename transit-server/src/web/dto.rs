//! Data transfer objects for web requests and responses.

use serde::ser::SerializeMap;
use serde::{Deserialize, Serialize, Serializer};

use crate::network::{Network, Route};

/// Query for a route between two stops.
#[derive(Debug, Deserialize)]
pub struct RouteQuery {
    /// Origin stop name
    #[serde(default)]
    pub from: String,

    /// Destination stop name
    #[serde(default)]
    pub to: String,

    /// Algorithm selector: "cheapest", "dfs", or shortest distance otherwise
    pub algo: Option<String>,
}

/// Query for a stop-name search.
#[derive(Debug, Deserialize)]
pub struct SearchQuery {
    /// Substring to look for; every stop matches when absent
    pub q: Option<String>,
}

/// Request to add a stop.
#[derive(Debug, Default, Deserialize)]
pub struct AddStopRequest {
    /// Stop name
    pub name: Option<String>,
}

impl AddStopRequest {
    /// Fill fields missing from the query string from a form body.
    pub fn or_form(self, form: Option<Self>) -> Self {
        let form = form.unwrap_or_default();
        Self {
            name: self.name.or(form.name),
        }
    }
}

/// Request to add a route.
///
/// Numeric fields arrive as text and are validated by the handler.
#[derive(Debug, Default, Deserialize)]
pub struct AddRouteRequest {
    pub from: Option<String>,
    pub to: Option<String>,
    pub distance: Option<String>,
    pub fare: Option<String>,
    pub bus: Option<String>,
}

impl AddRouteRequest {
    /// Fill fields missing from the query string from a form body.
    pub fn or_form(self, form: Option<Self>) -> Self {
        let form = form.unwrap_or_default();
        Self {
            from: self.from.or(form.from),
            to: self.to.or(form.to),
            distance: self.distance.or(form.distance),
            fare: self.fare.or(form.fare),
            bus: self.bus.or(form.bus),
        }
    }
}

/// Result of a stop or route insertion.
#[derive(Debug, Serialize, PartialEq, Eq)]
pub struct MutationResponse {
    /// Whether the network changed
    pub success: bool,

    /// Human-readable outcome
    pub message: String,
}

impl MutationResponse {
    /// A successful insertion.
    pub fn ok(message: &str) -> Self {
        Self {
            success: true,
            message: message.to_string(),
        }
    }

    /// An insertion that left the network unchanged.
    pub fn rejected(message: &str) -> Self {
        Self {
            success: false,
            message: message.to_string(),
        }
    }
}

/// Health check response.
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    /// Always "healthy"
    pub status: &'static str,

    /// Local time, `YYYY-MM-DD HH:MM:SS`
    pub timestamp: String,
}

/// Adjacency dump of the whole network.
///
/// Serializes as an object from stop name to outgoing routes, keeping the
/// network's stop order.
#[derive(Debug)]
pub struct GraphResponse {
    entries: Vec<(String, Vec<Route>)>,
}

impl GraphResponse {
    /// Snapshot the adjacency of `network`.
    pub fn from_network(network: &Network) -> Self {
        let entries = network
            .adjacency()
            .map(|(stop, routes)| (stop.to_string(), routes.to_vec()))
            .collect();
        Self { entries }
    }
}

impl Serialize for GraphResponse {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (stop, routes) in &self.entries {
            map.serialize_entry(stop, routes)?;
        }
        map.end()
    }
}

/// Error response.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    /// Error message
    pub error: String,
}
