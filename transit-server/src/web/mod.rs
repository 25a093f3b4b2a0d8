//! Web layer for the transit route server.
//!
//! Provides HTTP endpoints for route queries, network listings and
//! stop/route insertion.

mod dto;
mod routes;
mod state;

pub use dto::*;
pub use routes::{AppError, create_router};
pub use state::AppState;
