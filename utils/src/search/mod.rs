//! Traversal engine.
//!
//! Two revisit policies exist and the choice matters for correctness:
//! [`bfs`], [`flood_fill`] and the best-first searches mark a state visited
//! globally, while [`enumerate_paths`] only refuses states already on the
//! branch being extended. Unreachable goals are reported as `None`, never as
//! a sentinel distance.

mod bfs;
mod dijkstra;
mod optimal;
mod paths;
mod queue;

#[cfg(test)]
pub(crate) mod fixtures;

pub use bfs::{bfs, flood_fill, Bfs, DistanceMap};
pub use dijkstra::{astar, dijkstra, dijkstra_map, ShortestPath};
pub use optimal::{all_optimal_paths, OptimalPaths};
pub use paths::{count_paths, enumerate_paths};
