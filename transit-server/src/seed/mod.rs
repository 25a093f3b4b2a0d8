//! Startup data for the transit network.
//!
//! The server is seeded once at startup, either from the built-in sample
//! city or from a JSON network file.

mod error;
mod file;
mod sample;

pub use error::SeedError;
pub use file::{NetworkFile, RouteRecord, load_network};
pub use sample::sample_network;
