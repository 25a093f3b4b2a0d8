//! The built-in sample city.

use crate::network::Network;

const STOPS: [&str; 12] = [
    "Central Station",
    "City Mall",
    "University Campus",
    "General Hospital",
    "International Airport",
    "Seaside Beach",
    "City Park",
    "Sports Stadium",
    "Tech Valley",
    "Old Town Square",
    "Financial District",
    "Railway Terminal",
];

/// (from, to, km, fare, bus)
const ROUTES: [(&str, &str, f64, u32, &str); 23] = [
    ("Central Station", "City Mall", 2.5, 15, "Metro Express 1"),
    ("Central Station", "City Park", 1.8, 10, "Local Bus 2"),
    ("Central Station", "International Airport", 18.0, 60, "Airport Express"),
    ("Central Station", "Railway Terminal", 3.2, 20, "Metro Line 3"),
    ("City Mall", "University Campus", 3.2, 18, "Campus Shuttle"),
    ("City Mall", "Sports Stadium", 4.1, 15, "City Loop 4"),
    ("City Mall", "Financial District", 2.8, 22, "Business Express"),
    ("University Campus", "General Hospital", 2.3, 12, "Health Link 5"),
    ("University Campus", "Tech Valley", 3.5, 16, "Tech Corridor"),
    ("General Hospital", "International Airport", 12.5, 35, "Airport Link 6"),
    ("General Hospital", "Old Town Square", 4.2, 14, "Heritage Route"),
    ("City Park", "Sports Stadium", 2.1, 10, "Green Line 7"),
    ("City Park", "Seaside Beach", 5.5, 18, "Coastal Route 8"),
    ("City Park", "Old Town Square", 3.8, 15, "Park Connector"),
    ("Sports Stadium", "International Airport", 8.2, 28, "Stadium Express 9"),
    ("Sports Stadium", "Tech Valley", 5.8, 20, "Innovation Line"),
    ("Seaside Beach", "International Airport", 4.5, 16, "Beach Shuttle 10"),
    ("Seaside Beach", "Old Town Square", 6.2, 22, "Scenic Route"),
    ("Tech Valley", "Financial District", 4.3, 25, "Business Tech Link"),
    ("Tech Valley", "Railway Terminal", 6.5, 24, "Tech Express"),
    ("Financial District", "Railway Terminal", 2.9, 18, "Downtown Connector"),
    ("Financial District", "Old Town Square", 3.5, 16, "Heritage Business"),
    ("Old Town Square", "Railway Terminal", 4.8, 20, "Historical Line"),
];

/// Build the sample city: twelve stops joined by twenty-three bus routes.
pub fn sample_network() -> Network {
    let mut network = Network::new();
    for stop in STOPS {
        network.add_stop(stop);
    }
    for (from, to, distance, fare, bus) in ROUTES {
        network.add_route(from, to, distance, fare, bus);
    }
    network
}
