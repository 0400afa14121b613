//! In-memory graph operations — the core data structure.

pub mod builder;
mod search;
pub mod undirected;

pub use builder::GraphBuilder;
pub use undirected::Graph;
