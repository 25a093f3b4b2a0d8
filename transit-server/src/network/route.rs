//! Directed route records.

use serde::Serialize;

/// One directed traversal option out of a stop.
///
/// A logical route between two stops is stored as a pair of these, one in
/// each direction, carrying the same distance, fare and bus label.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Route {
    /// Name of the stop this route leads to.
    pub to: String,

    /// Distance in kilometres.
    pub distance: f64,

    /// Fare in whole currency units.
    pub fare: u32,

    /// Label of the bus serving this route.
    pub bus: String,
}

impl Route {
    /// Create a new route record.
    pub fn new(to: impl Into<String>, distance: f64, fare: u32, bus: impl Into<String>) -> Self {
        Self {
            to: to.into(),
            distance,
            fare,
            bus: bus.into(),
        }
    }

    /// The same route travelled in the opposite direction, ending at `origin`.
    pub fn reversed(&self, origin: impl Into<String>) -> Self {
        Self {
            to: origin.into(),
            distance: self.distance,
            fare: self.fare,
            bus: self.bus.clone(),
        }
    }
}
