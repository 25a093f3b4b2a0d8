//! Transit route server.
//!
//! Answers point-to-point routing queries over a network of bus stops,
//! returning the shortest, the cheapest, or simply the first path found.

pub mod config;
pub mod network;
pub mod planner;
pub mod seed;
pub mod web;
