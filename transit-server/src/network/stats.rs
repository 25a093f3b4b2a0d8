//! Aggregate network statistics.

use serde::Serialize;

/// Summary figures for a network.
///
/// Route counts and sums are over logical routes: each bidirectional route
/// is counted once even though it is stored as two directed records.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NetworkStatistics {
    /// Number of registered stops.
    pub stops: usize,

    /// Number of logical routes.
    pub routes: usize,

    /// Number of distinct bus labels.
    pub buses: usize,

    /// Summed distance over logical routes (km).
    pub total_distance: f64,

    /// Summed fare over logical routes.
    pub total_fare: u64,

    /// Mean distance per route, 0 when there are no routes.
    pub avg_distance: f64,

    /// Mean fare per route, 0 when there are no routes.
    pub avg_fare: f64,
}

impl NetworkStatistics {
    /// Build statistics from counts and totals, deriving the averages.
    pub fn new(
        stops: usize,
        routes: usize,
        buses: usize,
        total_distance: f64,
        total_fare: u64,
    ) -> Self {
        let (avg_distance, avg_fare) = if routes > 0 {
            (
                total_distance / routes as f64,
                total_fare as f64 / routes as f64,
            )
        } else {
            (0.0, 0.0)
        };

        Self {
            stops,
            routes,
            buses,
            total_distance,
            total_fare,
            avg_distance,
            avg_fare,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn averages_are_zero_without_routes() {
        let stats = NetworkStatistics::new(3, 0, 0, 0.0, 0);
        assert_eq!(stats.avg_distance, 0.0);
        assert_eq!(stats.avg_fare, 0.0);
    }

    #[test]
    fn averages_divide_by_route_count() {
        let stats = NetworkStatistics::new(3, 2, 2, 5.0, 15);
        assert_eq!(stats.avg_distance, 2.5);
        assert_eq!(stats.avg_fare, 7.5);
    }

    #[test]
    fn serializes_camel_case() {
        let stats = NetworkStatistics::new(3, 2, 2, 5.0, 15);
        let json = serde_json::to_value(&stats).unwrap();

        assert_eq!(json["stops"], 3);
        assert_eq!(json["routes"], 2);
        assert_eq!(json["buses"], 2);
        assert_eq!(json["totalDistance"], 5.0);
        assert_eq!(json["totalFare"], 15);
        assert_eq!(json["avgDistance"], 2.5);
        assert_eq!(json["avgFare"], 7.5);
    }
}
