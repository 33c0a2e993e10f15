//! Shortest routes and fares over a subway network.
//!
//! A query rebuilds a [`network::NetworkGraph`] from the current line
//! segments, runs Dijkstra under the requested [`network::Metric`] and
//! prices the winning path with [`fare::compute_fare`]. [`query::query`]
//! ties the three together.

pub mod adapters;
pub mod fare;
pub mod network;
pub mod query;
pub mod server;
