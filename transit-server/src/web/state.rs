//! Application state for the web layer.

use std::sync::Arc;

use tokio::sync::RwLock;

use crate::network::Network;

/// Shared application state.
///
/// The network has a single owner behind a read-write lock: queries share
/// the read side, stop and route insertion take the write side.
#[derive(Clone)]
pub struct AppState {
    /// The transit network
    pub network: Arc<RwLock<Network>>,
}

impl AppState {
    /// Create a new app state owning `network`.
    pub fn new(network: Network) -> Self {
        Self {
            network: Arc::new(RwLock::new(network)),
        }
    }
}
